//! Fragment merger: rendered fragment XML in, section buckets out.
//!
//! Each rendered fragment is parsed and mined for the element kinds the
//! final document cares about. Buckets keep fragment-processing order, so
//! the assembled document is deterministic for a given session.

use crate::catalog::Category;
use crate::diagnostics;
use crate::xml::{Element, parse_document};

/// A fragment after marker substitution, ready to merge.
#[derive(Debug, Clone)]
pub struct RenderedFragment {
    pub fragment_id: String,
    pub category: Category,
    pub xml: String,
}

/// Extracted elements grouped by destination section.
#[derive(Debug, Default)]
pub struct MergedSections {
    pub class_types: Vec<Element>,
    pub discoveries: Vec<Element>,
    pub monitors: Vec<Element>,
    pub rules: Vec<Element>,
    pub tasks: Vec<Element>,
    pub views: Vec<Element>,
    pub string_resources: Vec<Element>,
    pub display_strings: Vec<Element>,
    /// Fragments dropped because their XML failed to parse.
    pub skipped: usize,
}

impl MergedSections {
    pub fn has_class_types(&self) -> bool {
        !self.class_types.is_empty()
    }

    pub fn has_string_resources(&self) -> bool {
        !self.string_resources.is_empty()
    }

    pub fn has_display_strings(&self) -> bool {
        !self.display_strings.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.class_types.is_empty()
            && self.discoveries.is_empty()
            && self.monitors.is_empty()
            && self.rules.is_empty()
            && self.tasks.is_empty()
            && self.views.is_empty()
            && self.string_resources.is_empty()
            && self.display_strings.is_empty()
    }
}

const MONITOR_TAGS: &[&str] = &["UnitMonitor", "AggregateMonitor", "DependencyMonitor"];

/// Merge rendered fragments into section buckets.
///
/// A fragment that fails to parse is reported to stderr and skipped; the
/// merge continues with the rest.
pub fn merge_fragments(fragments: &[RenderedFragment]) -> MergedSections {
    let mut merged = MergedSections::default();

    for fragment in fragments {
        let root = match parse_document(&fragment.xml) {
            Ok(root) => root,
            Err(err) => {
                diagnostics::warn(format!(
                    "skipping fragment '{}': {err:#}",
                    fragment.fragment_id
                ));
                merged.skipped += 1;
                continue;
            }
        };

        collect(&root, &["ClassType"], &mut merged.class_types);
        collect(&root, &["Discovery"], &mut merged.discoveries);
        collect(&root, MONITOR_TAGS, &mut merged.monitors);
        collect(&root, &["Rule"], &mut merged.rules);
        collect(&root, &["Task"], &mut merged.tasks);
        collect(&root, &["View"], &mut merged.views);
        collect(&root, &["StringResource"], &mut merged.string_resources);
        collect(&root, &["DisplayString"], &mut merged.display_strings);
    }

    merged
}

fn collect(root: &Element, tags: &[&str], bucket: &mut Vec<Element>) {
    for el in root.descendants(tags) {
        bucket.push(el.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fragment(id: &str, category: Category, xml: &str) -> RenderedFragment {
        RenderedFragment {
            fragment_id: id.to_string(),
            category,
            xml: xml.to_string(),
        }
    }

    #[test]
    fn extracts_each_section_kind() {
        let xml = r#"<ManagementPackFragment SchemaVersion="2.0">
            <TypeDefinitions><EntityTypes><ClassTypes>
                <ClassType ID="ACME.Widget.Class" Base="Windows!Microsoft.Windows.LocalApplication" />
            </ClassTypes></EntityTypes></TypeDefinitions>
            <Monitoring>
                <Discoveries><Discovery ID="ACME.Widget.Discovery" /></Discoveries>
                <Monitors><UnitMonitor ID="ACME.Widget.Monitor" /></Monitors>
                <Rules><Rule ID="ACME.Widget.Rule" /></Rules>
                <Tasks><Task ID="ACME.Widget.Task" /></Tasks>
            </Monitoring>
            <Presentation>
                <Views><View ID="ACME.Widget.View" /></Views>
                <StringResources><StringResource ID="ACME.Widget.AlertMessage" /></StringResources>
            </Presentation>
            <LanguagePacks><LanguagePack ID="ENU"><DisplayStrings>
                <DisplayString ElementID="ACME.Widget.Class"><Name>Widget</Name></DisplayString>
            </DisplayStrings></LanguagePack></LanguagePacks>
        </ManagementPackFragment>"#;

        let merged = merge_fragments(&[fragment("all-kinds", Category::Discovery, xml)]);
        assert_eq!(merged.class_types.len(), 1);
        assert_eq!(merged.discoveries.len(), 1);
        assert_eq!(merged.monitors.len(), 1);
        assert_eq!(merged.rules.len(), 1);
        assert_eq!(merged.tasks.len(), 1);
        assert_eq!(merged.views.len(), 1);
        assert_eq!(merged.string_resources.len(), 1);
        assert_eq!(merged.display_strings.len(), 1);
        assert_eq!(merged.skipped, 0);
    }

    #[test]
    fn monitor_variants_land_in_one_bucket() {
        let xml = r#"<ManagementPackFragment SchemaVersion="2.0"><Monitoring><Monitors>
            <UnitMonitor ID="u" />
            <AggregateMonitor ID="a" />
            <DependencyMonitor ID="d" />
        </Monitors></Monitoring></ManagementPackFragment>"#;

        let merged = merge_fragments(&[fragment("monitors", Category::Monitor, xml)]);
        let ids: Vec<_> = merged
            .monitors
            .iter()
            .map(|m| m.attr("ID").unwrap())
            .collect();
        assert_eq!(ids, vec!["u", "a", "d"]);
    }

    #[test]
    fn order_follows_fragment_processing_order() {
        let first = r#"<ManagementPackFragment SchemaVersion="2.0">
            <Monitoring><Rules><Rule ID="first" /></Rules></Monitoring>
        </ManagementPackFragment>"#;
        let second = r#"<ManagementPackFragment SchemaVersion="2.0">
            <Monitoring><Rules><Rule ID="second" /></Rules></Monitoring>
        </ManagementPackFragment>"#;

        let merged = merge_fragments(&[
            fragment("a", Category::Rule, first),
            fragment("b", Category::Rule, second),
        ]);
        let ids: Vec<_> = merged.rules.iter().map(|r| r.attr("ID").unwrap()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn malformed_fragment_is_skipped_and_counted() {
        let bad = "<ManagementPackFragment><Unclosed></ManagementPackFragment>";
        let good = r#"<ManagementPackFragment SchemaVersion="2.0">
            <Monitoring><Rules><Rule ID="survivor" /></Rules></Monitoring>
        </ManagementPackFragment>"#;

        let merged = merge_fragments(&[
            fragment("bad", Category::Rule, bad),
            fragment("good", Category::Rule, good),
        ]);
        assert_eq!(merged.skipped, 1);
        assert_eq!(merged.rules.len(), 1);
        assert_eq!(merged.rules[0].attr("ID"), Some("survivor"));
    }

    #[test]
    fn empty_input_yields_empty_sections() {
        let merged = merge_fragments(&[]);
        assert!(merged.is_empty());
        assert_eq!(merged.skipped, 0);
    }
}
