//! Document assembly: merged sections into a complete management pack.
//!
//! The assembler owns everything outside the fragment bodies: the XML
//! declaration, the root element, the manifest with its identity and
//! reference table, and the conditional placement of each section. Output
//! is byte-identical for identical input.

use crate::merge::MergedSections;
use crate::session::BasicInfo;
use crate::xml::{Element, Node, write_element};

/// Library version stamped on every reference.
pub const LIBRARY_VERSION: &str = "7.0.8560.0";
pub const PUBLIC_KEY_TOKEN: &str = "31bf3856ad364e35";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

/// Aliases every pack references, whatever its contents.
const BASELINE_REFERENCES: &[(&str, &str)] = &[
    ("System", "System.Library"),
    ("Windows", "Microsoft.Windows.Library"),
    ("SC", "Microsoft.SystemCenter.Library"),
    ("Performance", "System.Performance.Library"),
];

/// Added only when the pack carries monitors.
const HEALTH_REFERENCE: (&str, &str) = ("Health", "System.Health.Library");

fn text_element(name: &str, text: &str) -> Element {
    let mut el = Element::new(name);
    el.children.push(Node::Text(text.to_string()));
    el
}

fn wrap(name: &str, children: Vec<Element>) -> Element {
    let mut el = Element::new(name);
    el.children = children.into_iter().map(Node::Element).collect();
    el
}

/// Assemble the full document. `include_health` adds the health library
/// reference used by monitor fragments.
pub fn assemble(basic_info: &BasicInfo, merged: &MergedSections, include_health: bool) -> String {
    let mut root = Element::new("ManagementPack");
    root.attrs = vec![
        ("ContentReadable".to_string(), "true".to_string()),
        ("SchemaVersion".to_string(), "2.0".to_string()),
        ("OriginalSchemaVersion".to_string(), "1.1".to_string()),
        (
            "xmlns:xsd".to_string(),
            "http://www.w3.org/2001/XMLSchema".to_string(),
        ),
        (
            "xmlns:xsl".to_string(),
            "http://www.w3.org/1999/XSL/Transform".to_string(),
        ),
    ];

    root.children.push(Node::Element(manifest(basic_info, include_health)));

    if merged.has_class_types() {
        root.children.push(Node::Element(wrap(
            "TypeDefinitions",
            vec![wrap(
                "EntityTypes",
                vec![wrap("ClassTypes", merged.class_types.clone())],
            )],
        )));
    }

    // Monitoring is always present, empty or not.
    let mut monitoring = Element::new("Monitoring");
    for (section, elements) in [
        ("Discoveries", &merged.discoveries),
        ("Monitors", &merged.monitors),
        ("Rules", &merged.rules),
        ("Tasks", &merged.tasks),
    ] {
        if !elements.is_empty() {
            monitoring
                .children
                .push(Node::Element(wrap(section, elements.clone())));
        }
    }
    root.children.push(Node::Element(monitoring));

    if !merged.views.is_empty() || merged.has_string_resources() {
        let mut presentation = Element::new("Presentation");
        if !merged.views.is_empty() {
            presentation
                .children
                .push(Node::Element(wrap("Views", merged.views.clone())));
        }
        if merged.has_string_resources() {
            presentation.children.push(Node::Element(wrap(
                "StringResources",
                merged.string_resources.clone(),
            )));
        }
        root.children.push(Node::Element(presentation));
    }

    if merged.has_display_strings() {
        let mut language_pack = wrap(
            "LanguagePack",
            vec![wrap("DisplayStrings", merged.display_strings.clone())],
        );
        language_pack.attrs = vec![
            ("ID".to_string(), "ENU".to_string()),
            ("IsDefault".to_string(), "true".to_string()),
        ];
        root.children
            .push(Node::Element(wrap("LanguagePacks", vec![language_pack])));
    }

    let mut out = String::from(XML_DECLARATION);
    write_element(&root, &mut out, 0);
    out
}

fn manifest(basic_info: &BasicInfo, include_health: bool) -> Element {
    let identity = wrap(
        "Identity",
        vec![
            text_element("ID", &basic_info.pack_id()),
            text_element("Version", &basic_info.version),
        ],
    );

    let mut references = Vec::new();
    for (alias, id) in BASELINE_REFERENCES {
        references.push(reference(alias, id));
    }
    if include_health {
        let (alias, id) = HEALTH_REFERENCE;
        references.push(reference(alias, id));
    }

    let mut children = vec![identity, text_element("Name", &basic_info.pack_id())];
    if !basic_info.description.is_empty() {
        children.push(text_element("Description", &basic_info.description));
    }
    children.push(wrap("References", references));
    wrap("Manifest", children)
}

fn reference(alias: &str, id: &str) -> Element {
    let mut el = wrap(
        "Reference",
        vec![
            text_element("ID", id),
            text_element("Version", LIBRARY_VERSION),
            text_element("PublicKeyToken", PUBLIC_KEY_TOKEN),
        ],
    );
    el.attrs = vec![("Alias".to_string(), alias.to_string())];
    el
}

/// PowerShell import script accompanying the generated pack.
pub fn deploy_script(basic_info: &BasicInfo, management_server: Option<&str>) -> String {
    let pack_id = basic_info.pack_id();
    let server = management_server.unwrap_or("localhost");
    format!(
        "# Deploys {pack_id} version {version}\n\
         Import-Module OperationsManager\n\
         New-SCOMManagementGroupConnection -ComputerName \"{server}\"\n\
         Import-SCOMManagementPack -FullName \".\\{pack_id}.xml\"\n\
         Get-SCOMManagementPack -Name \"{pack_id}\" | Format-Table Name, Version\n",
        version = basic_info.version,
    )
}
