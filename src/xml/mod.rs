//! Minimal XML document tree used for fragment merging.
//!
//! Rendered fragments are parsed into an `Element` tree and traversed by tag
//! name. This covers the fragment subset only: elements, attributes, text,
//! comments, and the five standard entities. No namespaces beyond names
//! carried verbatim, no DTDs, no CDATA.

pub mod parse;
pub mod write;

pub use parse::parse_document;
pub use write::write_element;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    /// Attributes in source order (order is kept for deterministic output).
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Direct text content, concatenated.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            if let Node::Text(t) = child {
                out.push_str(t);
            }
        }
        out
    }

    /// All descendant elements whose name matches one of `tags`, in document
    /// order. A matching element's subtree is not searched further (the
    /// merger wants whole top-level matches, not nested duplicates).
    pub fn descendants(&self, tags: &[&str]) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_descendants(self, tags, &mut out);
        out
    }
}

fn collect_descendants<'a>(el: &'a Element, tags: &[&str], out: &mut Vec<&'a Element>) {
    for child in &el.children {
        if let Node::Element(child_el) = child {
            if tags.contains(&child_el.name.as_str()) {
                out.push(child_el);
            } else {
                collect_descendants(child_el, tags, out);
            }
        }
    }
}

/// Escape text content (`&`, `<`, `>`).
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value (adds `"` to the text set).
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a user-supplied value before it enters a template, covering both
/// text and attribute positions (all five reserved characters).
pub fn escape_value(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn descendants_stop_at_matches() {
        let doc = parse_document(
            "<Root><Wrap><Rule ID=\"a\"><Rule ID=\"inner\"/></Rule></Wrap><Rule ID=\"b\"/></Root>",
        )
        .unwrap();
        let rules = doc.descendants(&["Rule"]);
        let ids: Vec<_> = rules.iter().map(|r| r.attr("ID").unwrap()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn escape_value_covers_reserved_characters() {
        assert_eq!(
            escape_value("a<b & \"c\"='d'"),
            "a&lt;b &amp; &quot;c&quot;=&apos;d&apos;"
        );
    }
}
