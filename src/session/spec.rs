//! Session file: raw JSON shape plus the validated, normalized session.
//!
//! JSON shape:
//! {
//!   "basic_info": { "company_id": "ACME", "app_name": "Widget",
//!                   "version": "1.0.0.0", "description": "" },
//!   "components": { "discovery": "registry-key",
//!                   "monitors": ["service-monitor"],
//!                   "rules": [], "groups": [], "tasks": [], "views": [] },
//!   "configuration": { "registry-key": { "uniqueId": "App", ... } }
//! }
//!
//! Validation normalizes identity fields (company id uppercased after its
//! charset check), applies defaults, dedups component selections while
//! keeping order, and canonicalizes configuration keys against the catalog
//! field schemas so later lookups never need case fallbacks.

use crate::Result;
use crate::catalog::Catalog;
use crate::diagnostics;
use crate::session::validate;

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_VERSION: &str = "1.0.0.0";

/// Sentinel discovery choice meaning "explicitly none".
pub const SKIP_DISCOVERY: &str = "skip";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSpec {
    #[serde(default)]
    pub basic_info: RawBasicInfo,

    #[serde(default)]
    pub components: RawComponents,

    #[serde(default)]
    pub configuration: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawBasicInfo {
    #[serde(default)]
    pub company_id: String,

    #[serde(default)]
    pub app_name: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawComponents {
    #[serde(default)]
    pub discovery: Option<String>,

    #[serde(default)]
    pub monitors: Vec<String>,

    #[serde(default)]
    pub rules: Vec<String>,

    #[serde(default)]
    pub groups: Vec<String>,

    #[serde(default)]
    pub tasks: Vec<String>,

    #[serde(default)]
    pub views: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicInfo {
    pub company_id: String,
    pub app_name: String,
    pub version: String,
    pub description: String,
}

impl BasicInfo {
    /// Document identifier: `{companyId}.{appName}`.
    pub fn pack_id(&self) -> String {
        format!("{}.{}", self.company_id, self.app_name)
    }

    pub fn has_identity(&self) -> bool {
        !self.company_id.is_empty() && !self.app_name.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedComponents {
    /// At most one discovery; `Some("skip")` is an explicit "none".
    pub discovery: Option<String>,
    pub monitors: Vec<String>,
    pub rules: Vec<String>,
    pub groups: Vec<String>,
    pub tasks: Vec<String>,
    pub views: Vec<String>,
}

impl SelectedComponents {
    pub fn discovery_fragment(&self) -> Option<&str> {
        self.discovery
            .as_deref()
            .filter(|d| *d != SKIP_DISCOVERY && !d.is_empty())
    }

    /// Fragment ids in generation order: discovery first, then monitors in
    /// selection order, then rules, groups, tasks, views.
    pub fn ordered_fragment_ids(&self) -> Vec<&str> {
        let mut out = Vec::new();
        out.extend(self.discovery_fragment());
        out.extend(self.monitors.iter().map(String::as_str));
        out.extend(self.rules.iter().map(String::as_str));
        out.extend(self.groups.iter().map(String::as_str));
        out.extend(self.tasks.iter().map(String::as_str));
        out.extend(self.views.iter().map(String::as_str));
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub basic_info: BasicInfo,
    pub components: SelectedComponents,
    pub configuration: BTreeMap<String, BTreeMap<String, String>>,
}

impl SessionSpec {
    /// Normalize and validate the raw session.
    ///
    /// Three phases:
    /// 1) Identity fields: trim, check charset patterns on the raw values,
    ///    then normalize (company id uppercased, version defaulted).
    /// 2) Component selections: trim, drop empties, dedup keeping order.
    /// 3) Configuration: canonicalize field keys against the catalog schema
    ///    and validate pattern-bound fields (registry key paths).
    pub fn validate_and_build(&self, catalog: &Catalog) -> Result<Session> {
        // Phase 1: identity.
        let company_id_raw = self.basic_info.company_id.trim();
        if !company_id_raw.is_empty() {
            validate::validate_company_id(company_id_raw)?;
        }

        let app_name = self.basic_info.app_name.trim().to_string();
        if !app_name.is_empty() {
            validate::validate_app_name(&app_name)?;
        }

        let version = match self.basic_info.version.trim() {
            "" => DEFAULT_VERSION.to_string(),
            v => v.to_string(),
        };

        let basic_info = BasicInfo {
            company_id: company_id_raw.to_uppercase(),
            app_name,
            version,
            description: self.basic_info.description.trim().to_string(),
        };

        // Phase 2: selections.
        let discovery = self
            .components
            .discovery
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let components = SelectedComponents {
            discovery,
            monitors: normalize_selection(&self.components.monitors),
            rules: normalize_selection(&self.components.rules),
            groups: normalize_selection(&self.components.groups),
            tasks: normalize_selection(&self.components.tasks),
            views: normalize_selection(&self.components.views),
        };

        // Phase 3: configuration keys and pattern-bound values.
        let mut configuration = BTreeMap::new();
        for (fragment_id, raw_config) in &self.configuration {
            let fragment = catalog.get(fragment_id);
            let mut canonical: BTreeMap<String, String> = BTreeMap::new();

            for (key, value) in raw_config {
                let canonical_key = fragment
                    .and_then(|f| {
                        f.fields
                            .iter()
                            .find(|field| field.id.eq_ignore_ascii_case(key))
                    })
                    .map(|field| field.id.to_string())
                    .unwrap_or_else(|| key.clone());

                if let Some(previous) = canonical.insert(canonical_key.clone(), value.clone()) {
                    if previous != *value {
                        bail!(
                            "{}",
                            diagnostics::error_message(format!(
                                "configuration for '{}' sets field '{}' more than once with different values",
                                fragment_id, canonical_key
                            ))
                        );
                    }
                }
            }

            if let Some(path) = canonical.get("regKeyPath").map(|v| v.trim()) {
                if !path.is_empty() {
                    validate::validate_reg_key_path(path)?;
                }
            }

            configuration.insert(fragment_id.clone(), canonical);
        }

        Ok(Session {
            basic_info,
            components,
            configuration,
        })
    }
}

fn normalize_selection(ids: &[String]) -> Vec<String> {
    // Selections are a set; keep first-seen order, drop repeats and blanks.
    let mut out: Vec<String> = Vec::new();
    for id in ids {
        let id = id.trim();
        if !id.is_empty() && !out.iter().any(|seen| seen == id) {
            out.push(id.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use pretty_assertions::assert_eq;

    fn spec_from_json(json: &str) -> SessionSpec {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn normalizes_identity_fields() {
        let spec = spec_from_json(
            r#"{ "basic_info": { "company_id": " ACME ", "app_name": "Widget" } }"#,
        );
        let session = spec.validate_and_build(&Catalog::builtin()).unwrap();
        assert_eq!(session.basic_info.company_id, "ACME");
        assert_eq!(session.basic_info.version, "1.0.0.0");
        assert_eq!(session.basic_info.pack_id(), "ACME.Widget");
    }

    #[test]
    fn rejects_lowercase_company_id() {
        let spec = spec_from_json(
            r#"{ "basic_info": { "company_id": "abc1", "app_name": "Widget" } }"#,
        );
        assert!(spec.validate_and_build(&Catalog::builtin()).is_err());
    }

    #[test]
    fn empty_identity_is_allowed_at_load_time() {
        // Generation gates on identity later; a fresh session must load.
        let spec = spec_from_json("{}");
        let session = spec.validate_and_build(&Catalog::builtin()).unwrap();
        assert!(!session.basic_info.has_identity());
    }

    #[test]
    fn canonicalizes_configuration_key_casing() {
        let spec = spec_from_json(
            r#"{
                "basic_info": { "company_id": "ACME", "app_name": "Widget" },
                "configuration": { "registry-key": { "uniqueid": "App" } }
            }"#,
        );
        let session = spec.validate_and_build(&Catalog::builtin()).unwrap();
        let config = session.configuration.get("registry-key").unwrap();
        assert_eq!(config.get("uniqueId").map(String::as_str), Some("App"));
        assert_eq!(config.get("uniqueid"), None);
    }

    #[test]
    fn rejects_conflicting_duplicate_keys() {
        let spec = spec_from_json(
            r#"{
                "configuration": { "registry-key": { "uniqueid": "A", "uniqueId": "B" } }
            }"#,
        );
        assert!(spec.validate_and_build(&Catalog::builtin()).is_err());
    }

    #[test]
    fn validates_registry_path_format() {
        let spec = spec_from_json(
            r#"{
                "configuration": { "registry-key": { "regKeyPath": "not a path" } }
            }"#,
        );
        assert!(spec.validate_and_build(&Catalog::builtin()).is_err());
    }

    #[test]
    fn selections_keep_order_and_dedup() {
        let spec = spec_from_json(
            r#"{
                "components": {
                    "monitors": ["service-monitor", "performance-monitor", "service-monitor", ""]
                }
            }"#,
        );
        let session = spec.validate_and_build(&Catalog::builtin()).unwrap();
        assert_eq!(
            session.components.monitors,
            vec!["service-monitor", "performance-monitor"]
        );
    }

    #[test]
    fn ordered_ids_put_discovery_first_and_skip_counts_as_none() {
        let mut components = SelectedComponents {
            discovery: Some("registry-key".into()),
            monitors: vec!["service-monitor".into()],
            rules: vec!["event-collection".into()],
            ..Default::default()
        };
        assert_eq!(
            components.ordered_fragment_ids(),
            vec!["registry-key", "service-monitor", "event-collection"]
        );

        components.discovery = Some(SKIP_DISCOVERY.into());
        assert_eq!(
            components.ordered_fragment_ids(),
            vec!["service-monitor", "event-collection"]
        );
    }
}
