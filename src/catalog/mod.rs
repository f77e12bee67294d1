//! Fragment catalog: the static library of templated XML fragments.
//!
//! Each entry pairs a `##Token##`-marked template with the ordered field
//! schema the wizard collects for it. Adding a fragment type is adding one
//! entry here; the merger and assembler never change.

pub mod templates;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Discovery,
    Monitor,
    Rule,
    Group,
    Task,
    View,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Discovery => "discovery",
            Category::Monitor => "monitor",
            Category::Rule => "rule",
            Category::Group => "group",
            Category::Task => "task",
            Category::View => "view",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Textarea,
    Number,
    Select,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<&'static str>,
    pub default: Option<&'static str>,
    pub options: &'static [&'static str],
}

impl FieldSpec {
    const fn new(id: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            id,
            label,
            kind,
            required: false,
            placeholder: None,
            default: None,
            options: &[],
        }
    }

    const fn text(id: &'static str, label: &'static str) -> Self {
        Self::new(id, label, FieldKind::Text)
    }

    const fn textarea(id: &'static str, label: &'static str) -> Self {
        Self::new(id, label, FieldKind::Textarea)
    }

    const fn number(id: &'static str, label: &'static str) -> Self {
        Self::new(id, label, FieldKind::Number)
    }

    const fn select(
        id: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        let mut field = Self::new(id, label, FieldKind::Select);
        field.options = options;
        // A select always has an effective value: its first option.
        field.default = Some(options[0]);
        field
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    const fn default_value(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }
}

#[derive(Debug, Clone)]
pub struct FragmentDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub template: &'static str,
    pub fields: &'static [FieldSpec],
}

impl FragmentDefinition {
    pub fn field(&self, id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// The registry value family carries a mode selector that drives the
    /// conditional expression resolver.
    pub fn has_value_mode(&self) -> bool {
        self.field("valueMode").is_some()
    }
}

pub struct Catalog {
    fragments: &'static [FragmentDefinition],
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            fragments: templates::BUILTIN,
        }
    }

    pub fn get(&self, id: &str) -> Option<&FragmentDefinition> {
        self.fragments.iter().find(|f| f.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.fragments.iter()
    }

    pub fn ids_in_category(&self, category: Category) -> Vec<&'static str> {
        self.fragments
            .iter()
            .filter(|f| f.category == category)
            .map(|f| f.id)
            .collect()
    }
}

const TARGET_CLASS_OPTIONS: &[&str] = &[
    "Windows!Microsoft.Windows.Server.OperatingSystem",
    "Windows!Microsoft.Windows.Computer",
];

const ALERT_PRIORITY_OPTIONS: &[&str] = &["Normal", "Low", "High"];
const ALERT_SEVERITY_OPTIONS: &[&str] = &["Error", "Warning", "Information"];
const EVENT_LOG_OPTIONS: &[&str] = &["Application", "System", "Security"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<_> = catalog.iter().map(|f| f.id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn every_template_is_well_formed_before_substitution_of_text_markers() {
        // Markers are alphanumeric and never contain XML-reserved characters,
        // so the raw templates must already parse.
        let catalog = Catalog::builtin();
        for fragment in catalog.iter() {
            crate::xml::parse_document(fragment.template)
                .unwrap_or_else(|err| panic!("template '{}' failed to parse: {err:#}", fragment.id));
        }
    }

    #[test]
    fn field_ids_are_unique_within_each_fragment() {
        let catalog = Catalog::builtin();
        for fragment in catalog.iter() {
            let mut ids: Vec<_> = fragment.fields.iter().map(|f| f.id).collect();
            let total = ids.len();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), total, "duplicate field id in '{}'", fragment.id);
        }
    }

    #[test]
    fn registry_value_is_the_only_mode_driven_fragment() {
        let catalog = Catalog::builtin();
        let mode_driven: Vec<_> = catalog
            .iter()
            .filter(|f| f.has_value_mode())
            .map(|f| f.id)
            .collect();
        assert_eq!(mode_driven, vec!["registry-value"]);
    }
}
