//! Wizard step machine and the interactive driver.
//!
//! The machine is pure: every transition is a function of the current step
//! and the session value. Forward movement is gated only at the basic-info
//! and discovery steps; backward movement is never validated.

use crate::Result;
use crate::catalog::{Catalog, Category, FieldKind, FieldSpec};
use crate::diagnostics;
use crate::session::spec::{SKIP_DISCOVERY, Session, SessionSpec};
use crate::session::validate;

use anyhow::bail;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    BasicInfo,
    Discovery,
    Monitors,
    Rules,
    Extras,
    Configure,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::BasicInfo => 1,
            Step::Discovery => 2,
            Step::Monitors => 3,
            Step::Rules => 4,
            Step::Extras => 5,
            Step::Configure => 6,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::BasicInfo => "Basic information",
            Step::Discovery => "Discovery method",
            Step::Monitors => "Monitors",
            Step::Rules => "Rules",
            Step::Extras => "Groups, tasks and views",
            Step::Configure => "Configure components",
        }
    }
}

/// Advance one step. Gates: basic info must be valid to leave step 1, a
/// discovery method (or the explicit skip) must be chosen to leave step 2.
/// Steps 3-5 are unconditionally passable.
pub fn next_step(current: Step, session: &Session) -> Result<Step> {
    match current {
        Step::BasicInfo => {
            if !session.basic_info.has_identity() {
                bail!(
                    "{}",
                    diagnostics::error_message(
                        "company id and application name are required to continue"
                    )
                );
            }
            Ok(Step::Discovery)
        }
        Step::Discovery => {
            if session.components.discovery.is_none() {
                bail!(
                    "{}",
                    diagnostics::error_message(
                        "choose a discovery method, or 'skip' to continue without one"
                    )
                );
            }
            Ok(Step::Monitors)
        }
        Step::Monitors => Ok(Step::Rules),
        Step::Rules => Ok(Step::Extras),
        Step::Extras => Ok(Step::Configure),
        Step::Configure => Ok(Step::Configure),
    }
}

/// Go back one step. Never validated.
pub fn prev_step(current: Step) -> Step {
    match current {
        Step::BasicInfo | Step::Discovery => Step::BasicInfo,
        Step::Monitors => Step::Discovery,
        Step::Rules => Step::Monitors,
        Step::Extras => Step::Rules,
        Step::Configure => Step::Extras,
    }
}

/// The terminal generate action only requires identity.
pub fn can_generate(session: &Session) -> bool {
    session.basic_info.has_identity()
}

/// Start over: the whole session is replaced by an empty one.
pub fn start_over() -> Session {
    Session::default()
}

enum Outcome {
    Advance,
    Back,
}

/// Line-based interactive driver over the step machine. Reads prompts from
/// `input`, writes them to `output`, and returns the raw session spec ready
/// to be serialized.
pub fn run_wizard<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    output: &mut W,
) -> Result<SessionSpec> {
    let mut spec = SessionSpec::default();
    let mut step = Step::BasicInfo;

    loop {
        writeln!(output)?;
        writeln!(output, "== Step {}: {} ==", step.number(), step.title())?;

        let outcome = match step {
            Step::BasicInfo => prompt_basic_info(&mut spec, input, output)?,
            Step::Discovery => prompt_discovery(catalog, &mut spec, input, output)?,
            Step::Monitors => {
                let ids = catalog.ids_in_category(Category::Monitor);
                prompt_selection(&ids, "monitors", &mut spec.components.monitors, input, output)?
            }
            Step::Rules => {
                let ids = catalog.ids_in_category(Category::Rule);
                prompt_selection(&ids, "rules", &mut spec.components.rules, input, output)?
            }
            Step::Extras => prompt_extras(catalog, &mut spec, input, output)?,
            Step::Configure => {
                prompt_configuration(catalog, &mut spec, input, output)?;
                return Ok(spec);
            }
        };

        match outcome {
            Outcome::Advance => {
                let session = spec.validate_and_build(catalog)?;
                match next_step(step, &session) {
                    Ok(next) => step = next,
                    Err(err) => writeln!(output, "{err:#}")?,
                }
            }
            Outcome::Back => step = prev_step(step),
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!(
            "{}",
            diagnostics::error_message("input ended before the wizard finished")
        );
    }
    Ok(line.trim().to_string())
}

fn prompt_basic_info<R: BufRead, W: Write>(
    spec: &mut SessionSpec,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome> {
    loop {
        write!(output, "Company ID (uppercase, e.g. ACME): ")?;
        output.flush()?;
        let value = read_line(input)?;
        match validate::validate_company_id(&value) {
            Ok(()) => {
                spec.basic_info.company_id = value;
                break;
            }
            Err(err) => writeln!(output, "{err:#}")?,
        }
    }

    loop {
        write!(output, "Application name (e.g. Widget): ")?;
        output.flush()?;
        let value = read_line(input)?;
        match validate::validate_app_name(&value) {
            Ok(()) => {
                spec.basic_info.app_name = value;
                break;
            }
            Err(err) => writeln!(output, "{err:#}")?,
        }
    }

    write!(output, "Version [1.0.0.0]: ")?;
    output.flush()?;
    spec.basic_info.version = read_line(input)?;

    write!(output, "Description (optional): ")?;
    output.flush()?;
    spec.basic_info.description = read_line(input)?;

    Ok(Outcome::Advance)
}

fn prompt_discovery<R: BufRead, W: Write>(
    catalog: &Catalog,
    spec: &mut SessionSpec,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome> {
    let ids = catalog.ids_in_category(Category::Discovery);
    writeln!(output, "Available discoveries: {}", ids.join(", "))?;

    loop {
        write!(output, "Discovery ('skip' for none, 'back' to go back): ")?;
        output.flush()?;
        let value = read_line(input)?;

        if value == "back" {
            return Ok(Outcome::Back);
        }
        if value == SKIP_DISCOVERY || ids.iter().any(|id| *id == value) {
            spec.components.discovery = Some(value);
            return Ok(Outcome::Advance);
        }
        writeln!(output, "Unknown discovery '{value}'.")?;
    }
}

fn prompt_selection<R: BufRead, W: Write>(
    ids: &[&str],
    label: &str,
    target: &mut Vec<String>,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome> {
    writeln!(output, "Available {label}: {}", ids.join(", "))?;

    loop {
        write!(
            output,
            "Select {label} (comma separated, empty for none, 'back' to go back): "
        )?;
        output.flush()?;
        let value = read_line(input)?;

        if value == "back" {
            return Ok(Outcome::Back);
        }

        match parse_selection(&value, ids) {
            Ok(selected) => {
                *target = selected;
                return Ok(Outcome::Advance);
            }
            Err(unknown) => writeln!(output, "Unknown {label}: {unknown}")?,
        }
    }
}

fn parse_selection(line: &str, ids: &[&str]) -> std::result::Result<Vec<String>, String> {
    let mut out = Vec::new();
    for part in line.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if !ids.iter().any(|id| *id == part) {
            return Err(part.to_string());
        }
        if !out.iter().any(|seen| seen == part) {
            out.push(part.to_string());
        }
    }
    Ok(out)
}

fn prompt_extras<R: BufRead, W: Write>(
    catalog: &Catalog,
    spec: &mut SessionSpec,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome> {
    for (category, label) in [
        (Category::Group, "groups"),
        (Category::Task, "tasks"),
        (Category::View, "views"),
    ] {
        let ids = catalog.ids_in_category(category);
        let target = match category {
            Category::Group => &mut spec.components.groups,
            Category::Task => &mut spec.components.tasks,
            _ => &mut spec.components.views,
        };
        match prompt_selection(&ids, label, target, input, output)? {
            Outcome::Advance => {}
            Outcome::Back => return Ok(Outcome::Back),
        }
    }
    Ok(Outcome::Advance)
}

fn prompt_configuration<R: BufRead, W: Write>(
    catalog: &Catalog,
    spec: &mut SessionSpec,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    // Snapshot the ordered fragment list from a validated view of the session.
    let session = spec.validate_and_build(catalog)?;
    let ordered: Vec<String> = session
        .components
        .ordered_fragment_ids()
        .into_iter()
        .map(str::to_string)
        .collect();

    for fragment_id in ordered {
        let Some(fragment) = catalog.get(&fragment_id) else {
            continue;
        };
        writeln!(output)?;
        writeln!(output, "-- Configure {} --", fragment.name)?;

        let mut config = std::collections::BTreeMap::new();
        for field in fragment.fields {
            let value = prompt_field(field, input, output)?;
            if !value.is_empty() {
                config.insert(field.id.to_string(), value);
            }
        }
        spec.configuration.insert(fragment_id, config);
    }

    Ok(())
}

fn prompt_field<R: BufRead, W: Write>(
    field: &FieldSpec,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    loop {
        let hint = field
            .default
            .or(field.placeholder)
            .map(|h| format!(" [{h}]"))
            .unwrap_or_default();
        match field.kind {
            FieldKind::Select => {
                writeln!(output, "{} options: {}", field.label, field.options.join(", "))?
            }
            _ => {}
        }
        write!(
            output,
            "{}{}{}: ",
            field.label,
            if field.required { " *" } else { "" },
            hint
        )?;
        output.flush()?;

        let value = read_line(input)?;

        if value.is_empty() {
            if field.required && field.default.is_none() {
                writeln!(output, "This field is required.")?;
                continue;
            }
            return Ok(String::new());
        }

        if field.kind == FieldKind::Select && !field.options.iter().any(|opt| *opt == value) {
            writeln!(output, "Choose one of the listed options.")?;
            continue;
        }

        if field.id == "regKeyPath" {
            if let Err(err) = validate::validate_reg_key_path(&value) {
                writeln!(output, "{err:#}")?;
                continue;
            }
        }

        return Ok(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn session_with_identity() -> Session {
        Session {
            basic_info: crate::session::BasicInfo {
                company_id: "ACME".into(),
                app_name: "Widget".into(),
                version: "1.0.0.0".into(),
                description: String::new(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn basic_info_gate_blocks_without_identity() {
        let empty = Session::default();
        assert!(next_step(Step::BasicInfo, &empty).is_err());
        assert_eq!(
            next_step(Step::BasicInfo, &session_with_identity()).unwrap(),
            Step::Discovery
        );
    }

    #[test]
    fn discovery_gate_accepts_skip() {
        let mut session = session_with_identity();
        assert!(next_step(Step::Discovery, &session).is_err());

        session.components.discovery = Some(SKIP_DISCOVERY.into());
        assert_eq!(next_step(Step::Discovery, &session).unwrap(), Step::Monitors);
    }

    #[test]
    fn component_steps_are_unconditionally_passable() {
        let session = Session::default();
        assert_eq!(next_step(Step::Monitors, &session).unwrap(), Step::Rules);
        assert_eq!(next_step(Step::Rules, &session).unwrap(), Step::Extras);
        assert_eq!(next_step(Step::Extras, &session).unwrap(), Step::Configure);
    }

    #[test]
    fn backward_transitions_are_never_validated() {
        assert_eq!(prev_step(Step::Configure), Step::Extras);
        assert_eq!(prev_step(Step::Monitors), Step::Discovery);
        assert_eq!(prev_step(Step::BasicInfo), Step::BasicInfo);
    }

    #[test]
    fn generate_requires_identity_only() {
        assert!(!can_generate(&Session::default()));
        assert!(can_generate(&session_with_identity()));
    }

    #[test]
    fn start_over_yields_an_empty_session() {
        assert_eq!(start_over(), Session::default());
    }

    #[test]
    fn scripted_wizard_produces_a_session_spec() {
        let catalog = Catalog::builtin();
        // Step 1, step 2 (skip), steps 3-5 empty, no configuration prompts
        // because nothing was selected.
        let script = "ACME\nWidget\n\n\nskip\n\n\n\n\n\n";
        let mut input = Cursor::new(script);
        let mut output = Vec::new();

        let spec = run_wizard(&catalog, &mut input, &mut output).unwrap();
        assert_eq!(spec.basic_info.company_id, "ACME");
        assert_eq!(spec.basic_info.app_name, "Widget");
        assert_eq!(spec.components.discovery.as_deref(), Some("skip"));
        assert!(spec.components.monitors.is_empty());
    }

    #[test]
    fn scripted_wizard_rejects_invalid_company_id_then_recovers() {
        let catalog = Catalog::builtin();
        let script = "acme\nACME\nWidget\n\n\nregistry-key\n\n\n\n\n\nApp\nSOFTWARE\\Acme\\Widget\n\n";
        let mut input = Cursor::new(script);
        let mut output = Vec::new();

        let spec = run_wizard(&catalog, &mut input, &mut output).unwrap();
        assert_eq!(spec.basic_info.company_id, "ACME");
        assert_eq!(spec.components.discovery.as_deref(), Some("registry-key"));

        let config = spec.configuration.get("registry-key").unwrap();
        assert_eq!(config.get("uniqueId").map(String::as_str), Some("App"));
        assert_eq!(
            config.get("regKeyPath").map(String::as_str),
            Some("SOFTWARE\\Acme\\Widget")
        );

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("capital letter"));
    }
}
