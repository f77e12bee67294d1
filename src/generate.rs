//! End-to-end pipeline: session in, finished document out.
//!
//! Render every selected fragment against its marker table, merge the
//! results into section buckets, then assemble. Unknown fragment ids and
//! unparseable fragments are skipped with a warning; generation only fails
//! outright when the session has no identity.

use crate::Result;
use crate::assemble;
use crate::catalog::{Catalog, Category};
use crate::diagnostics;
use crate::merge::{self, RenderedFragment};
use crate::render;
use crate::session::Session;

use anyhow::bail;
use std::fmt::Write as _;

#[derive(Debug)]
pub struct GeneratedPack {
    /// `{companyId}.{appName}.xml`
    pub file_name: String,
    pub document: String,
    /// Fragments dropped along the way (unknown id or unparseable XML).
    pub skipped_fragments: usize,
}

pub fn generate_document(session: &Session, catalog: &Catalog) -> Result<GeneratedPack> {
    if !session.basic_info.has_identity() {
        bail!(
            "{}",
            diagnostics::error_message(
                "company id and application name are required before generating"
            )
        );
    }

    let selected = session.components.ordered_fragment_ids().len();
    let rendered = render_fragments(session, catalog);
    let unknown = selected - rendered.len();

    let has_monitors = rendered
        .iter()
        .any(|fragment| fragment.category == Category::Monitor);

    let merged = merge::merge_fragments(&rendered);
    let document = assemble::assemble(&session.basic_info, &merged, has_monitors);

    Ok(GeneratedPack {
        file_name: format!("{}.xml", session.basic_info.pack_id()),
        document,
        skipped_fragments: unknown + merged.skipped,
    })
}

/// Render the session's selected fragments in generation order. Selections
/// that name no catalog entry are skipped with a warning.
pub fn render_fragments(session: &Session, catalog: &Catalog) -> Vec<RenderedFragment> {
    let mut rendered = Vec::new();

    for fragment_id in session.components.ordered_fragment_ids() {
        let Some(fragment) = catalog.get(fragment_id) else {
            diagnostics::warn(format!("unknown fragment '{fragment_id}', skipping"));
            continue;
        };

        let table = render::marker_table(
            fragment,
            &session.basic_info,
            session.configuration.get(fragment_id),
        );
        rendered.push(RenderedFragment {
            fragment_id: fragment_id.to_string(),
            category: fragment.category,
            xml: render::substitute(fragment.template, &table),
        });
    }

    rendered
}

/// Per-fragment preview: each rendered fragment under a header, before any
/// merging.
pub fn preview_text(session: &Session, catalog: &Catalog) -> String {
    let rendered = render_fragments(session, catalog);
    if rendered.is_empty() {
        return "no components selected\n".to_string();
    }

    let mut out = String::new();
    for fragment in &rendered {
        let _ = writeln!(
            out,
            "-- {} ({}) --",
            fragment.fragment_id,
            fragment.category.label()
        );
        out.push_str(&fragment.xml);
        if !fragment.xml.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionSpec;
    use pretty_assertions::assert_eq;

    fn session_from(json: &str) -> Session {
        let spec: SessionSpec = serde_json::from_str(json).unwrap();
        spec.validate_and_build(&Catalog::builtin()).unwrap()
    }

    #[test]
    fn discovery_and_monitor_pack_has_every_section() {
        let session = session_from(
            r#"{
                "basic_info": { "company_id": "ACME", "app_name": "Widget" },
                "components": {
                    "discovery": "registry-key",
                    "monitors": ["service-monitor"]
                },
                "configuration": {
                    "registry-key": { "uniqueId": "App", "regKeyPath": "SOFTWARE\\Acme\\Widget" },
                    "service-monitor": { "uniqueId": "Svc", "serviceName": "WidgetSvc" }
                }
            }"#,
        );

        let pack = generate_document(&session, &Catalog::builtin()).unwrap();
        assert_eq!(pack.file_name, "ACME.Widget.xml");
        assert_eq!(pack.skipped_fragments, 0);

        let doc = &pack.document;
        assert!(doc.contains("<TypeDefinitions>"));
        assert!(doc.contains("ACME.Widget.App.Class"));
        assert!(doc.contains("<Discoveries>"));
        assert!(doc.contains("<Monitors>"));
        assert!(doc.contains("WidgetSvc"));
        assert!(doc.contains("<StringResources>"));
        assert!(doc.contains("<LanguagePack ID=\"ENU\" IsDefault=\"true\">"));
        // Monitors pull in the health library.
        assert!(doc.contains("<ID>System.Health.Library</ID>"));
        assert!(!doc.contains("##"));
    }

    #[test]
    fn rule_only_pack_stays_minimal() {
        let session = session_from(
            r#"{
                "basic_info": { "company_id": "ACME", "app_name": "Widget" },
                "components": { "discovery": "skip", "rules": ["event-collection"] },
                "configuration": {
                    "event-collection": { "uniqueId": "Evt", "eventId": "1000" }
                }
            }"#,
        );

        let pack = generate_document(&session, &Catalog::builtin()).unwrap();
        let doc = &pack.document;
        assert!(!doc.contains("<TypeDefinitions>"));
        assert!(!doc.contains("System.Health.Library"));
        assert!(doc.contains("<Rules>"));
        assert!(doc.contains("ACME.Widget.Evt"));
    }

    #[test]
    fn generation_requires_identity() {
        let session = session_from(r#"{ "components": { "discovery": "registry-key" } }"#);
        assert!(generate_document(&session, &Catalog::builtin()).is_err());
    }

    #[test]
    fn identity_only_session_generates_an_empty_pack() {
        let session = session_from(
            r#"{ "basic_info": { "company_id": "ACME", "app_name": "Widget" } }"#,
        );
        let pack = generate_document(&session, &Catalog::builtin()).unwrap();
        assert!(pack.document.contains("<Monitoring />"));
        assert_eq!(pack.skipped_fragments, 0);
    }

    #[test]
    fn unknown_fragment_ids_are_skipped_and_counted() {
        let session = session_from(
            r#"{
                "basic_info": { "company_id": "ACME", "app_name": "Widget" },
                "components": { "monitors": ["no-such-fragment", "service-monitor"] }
            }"#,
        );
        let pack = generate_document(&session, &Catalog::builtin()).unwrap();
        assert_eq!(pack.skipped_fragments, 1);
        assert!(pack.document.contains("<Monitors>"));
    }

    #[test]
    fn registry_value_discovery_carries_the_resolved_expression() {
        let session = session_from(
            r#"{
                "basic_info": { "company_id": "ACME", "app_name": "Widget" },
                "components": { "discovery": "registry-value" },
                "configuration": {
                    "registry-value": {
                        "uniqueId": "App",
                        "regKeyPath": "SOFTWARE\\Acme\\Widget",
                        "regValueName": "Version",
                        "valueMode": "string",
                        "operator": "NotEqual",
                        "expectedValue": "disabled"
                    }
                }
            }"#,
        );

        let pack = generate_document(&session, &Catalog::builtin()).unwrap();
        let doc = &pack.document;
        assert!(doc.contains("<SimpleExpression>"));
        assert!(doc.contains("<Operator>NotEqual</Operator>"));
        assert!(doc.contains("<AttributeType>1</AttributeType>"));
        assert!(doc.contains("SOFTWARE\\Acme\\Widget\\Version"));
    }

    #[test]
    fn output_is_deterministic_for_identical_sessions() {
        let json = r#"{
            "basic_info": { "company_id": "ACME", "app_name": "Widget" },
            "components": {
                "discovery": "registry-key",
                "monitors": ["service-monitor", "performance-monitor"],
                "rules": ["performance-collection"],
                "views": ["state-view"]
            }
        }"#;
        let first = generate_document(&session_from(json), &Catalog::builtin()).unwrap();
        let second = generate_document(&session_from(json), &Catalog::builtin()).unwrap();
        assert_eq!(first.document, second.document);
    }

    #[test]
    fn preview_lists_fragments_under_headers() {
        let session = session_from(
            r#"{
                "basic_info": { "company_id": "ACME", "app_name": "Widget" },
                "components": { "monitors": ["service-monitor"] }
            }"#,
        );
        let text = preview_text(&session, &Catalog::builtin());
        assert!(text.starts_with("-- service-monitor (monitor) --\n"));
        assert!(text.contains("ACME.Widget"));

        let empty = session_from(
            r#"{ "basic_info": { "company_id": "ACME", "app_name": "Widget" } }"#,
        );
        assert_eq!(preview_text(&empty, &Catalog::builtin()), "no components selected\n");
    }
}
