//! Placeholder substitution: `##Name##` markers resolved against an explicit
//! per-fragment marker table.
//!
//! The table is the single place where a marker maps to a source field and a
//! default; call sites never do their own fallback chains. User-supplied
//! values are XML-escaped when they enter the table, computed expression
//! sub-documents enter raw (they are XML we built, with escaped leaves).

pub mod registry;

use crate::catalog::FragmentDefinition;
use crate::session::BasicInfo;
use crate::xml::escape_value;
use std::collections::BTreeMap;

pub type MarkerTable = BTreeMap<String, String>;

/// Replace every `##Name##` marker in `template` with its table entry.
///
/// Single left-to-right scan: a replaced value is never rescanned, so values
/// containing marker-like text cannot trigger secondary substitution. Markers
/// without a table entry resolve to the empty string; no `##...##` occurrence
/// survives in the output.
pub fn substitute(template: &str, values: &MarkerTable) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("##") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find("##") {
            Some(end) if is_marker_name(&after[..end]) => {
                if let Some(value) = values.get(&after[..end]) {
                    out.push_str(value);
                }
                rest = &after[end + 2..];
            }
            _ => {
                // Stray "##" that opens no marker: keep it literally.
                out.push_str("##");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn is_marker_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Marker name for a field id: leading character uppercased
/// (`uniqueId` -> `UniqueId`).
pub fn marker_name(field_id: &str) -> String {
    let mut chars = field_id.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Build the marker table for one fragment: identity markers, one entry per
/// schema field (configured value, else field default, else empty), and the
/// resolved mode markers for the registry value family.
pub fn marker_table(
    fragment: &FragmentDefinition,
    basic_info: &BasicInfo,
    config: Option<&BTreeMap<String, String>>,
) -> MarkerTable {
    let mut table = MarkerTable::new();

    table.insert("CompanyId".into(), escape_value(&basic_info.company_id));
    table.insert("AppName".into(), escape_value(&basic_info.app_name));
    table.insert("MPId".into(), escape_value(&basic_info.pack_id()));
    table.insert("Version".into(), escape_value(&basic_info.version));

    let field_value = |id: &str| -> String {
        let configured = config
            .and_then(|c| c.get(id))
            .map(|v| v.trim())
            .filter(|v| !v.is_empty());
        match configured {
            Some(v) => v.to_string(),
            None => fragment
                .field(id)
                .and_then(|f| f.default)
                .unwrap_or_default()
                .to_string(),
        }
    };

    for field in fragment.fields {
        table.insert(marker_name(field.id), escape_value(&field_value(field.id)));
    }

    if fragment.has_value_mode() {
        let resolved = registry::resolve_value_mode(
            &field_value("uniqueId"),
            &field_value("valueMode"),
            &field_value("operator"),
            &field_value("expectedValue"),
            &field_value("regexPattern"),
        );
        table.insert(
            "AttributeType".into(),
            resolved.attribute_type.to_string(),
        );
        table.insert("ValueExpression".into(), resolved.expression);
    }

    table
}
