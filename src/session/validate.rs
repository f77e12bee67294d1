//! Per-field validation rules.
//!
//! Patterns mirror the identity charset rules: company ids are uppercase
//! alphanumeric starting with a letter, application names are plain
//! alphanumeric, registry key paths are HIVE\Path\To\Key shaped.

use crate::Result;
use crate::diagnostics;
use anyhow::bail;
use regex::Regex;

pub fn validate_company_id(value: &str) -> Result<()> {
    let re = Regex::new(r"^[A-Z][A-Z0-9]*$")?;
    if !re.is_match(value) {
        bail!(
            "{}",
            diagnostics::error_message(format!(
                "company id {:?} must start with a capital letter and contain only uppercase letters and numbers",
                value
            ))
        );
    }
    Ok(())
}

pub fn validate_app_name(value: &str) -> Result<()> {
    let re = Regex::new(r"^[a-zA-Z0-9]+$")?;
    if !re.is_match(value) {
        bail!(
            "{}",
            diagnostics::error_message(format!(
                "application name {:?} may contain only letters and numbers, no spaces or special characters",
                value
            ))
        );
    }
    Ok(())
}

pub fn validate_reg_key_path(value: &str) -> Result<()> {
    let re = Regex::new(r"^[A-Z]+\\[A-Za-z0-9\\_.]+$")?;
    if !re.is_match(value) {
        bail!(
            "{}",
            diagnostics::error_message(format!(
                "registry key path {:?} must follow HIVE\\Path\\To\\Key (e.g. SOFTWARE\\Microsoft\\MyApp)",
                value
            ))
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_id_requires_uppercase_start() {
        assert!(validate_company_id("abc1").is_err());
        assert!(validate_company_id("ABC1").is_ok());
        assert!(validate_company_id("1ABC").is_err());
        assert!(validate_company_id("").is_err());
    }

    #[test]
    fn app_name_is_alphanumeric() {
        assert!(validate_app_name("Widget2").is_ok());
        assert!(validate_app_name("My Widget").is_err());
        assert!(validate_app_name("Widget!").is_err());
    }

    #[test]
    fn reg_key_path_requires_hive_prefix() {
        assert!(validate_reg_key_path("SOFTWARE\\Acme\\Widget").is_ok());
        assert!(validate_reg_key_path("SOFTWARE\\Acme\\Widget_1.2").is_ok());
        assert!(validate_reg_key_path("software\\Acme").is_err());
        assert!(validate_reg_key_path("SOFTWARE").is_err());
    }
}
