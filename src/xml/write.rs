//! Deterministic serialization for merged elements.

use crate::xml::{Element, Node, escape_attr, escape_text};

/// Write `element` into `out` with a two-space indent per level, starting at
/// `indent` levels. Elements with a single text child render inline
/// (`<Tag>text</Tag>`); empty elements render self-closing.
pub fn write_element(element: &Element, out: &mut String, indent: usize) {
    let pad = "  ".repeat(indent);

    out.push_str(&pad);
    out.push('<');
    out.push_str(&element.name);
    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }

    match element.children.as_slice() {
        [] => {
            out.push_str(" />\n");
        }
        [Node::Text(text)] => {
            out.push('>');
            out.push_str(&escape_text(text));
            out.push_str("</");
            out.push_str(&element.name);
            out.push_str(">\n");
        }
        children => {
            out.push_str(">\n");
            for child in children {
                match child {
                    Node::Element(el) => write_element(el, out, indent + 1),
                    Node::Text(text) => {
                        out.push_str(&"  ".repeat(indent + 1));
                        out.push_str(&escape_text(text));
                        out.push('\n');
                    }
                }
            }
            out.push_str(&pad);
            out.push_str("</");
            out.push_str(&element.name);
            out.push_str(">\n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_nested_elements_with_indent() {
        let doc = parse_document(
            "<Rule ID=\"R\"><Category>Alert</Category><DataSources><DataSource ID=\"DS\" /></DataSources></Rule>",
        )
        .unwrap();

        let mut out = String::new();
        write_element(&doc, &mut out, 2);
        let expected = concat!(
            "    <Rule ID=\"R\">\n",
            "      <Category>Alert</Category>\n",
            "      <DataSources>\n",
            "        <DataSource ID=\"DS\" />\n",
            "      </DataSources>\n",
            "    </Rule>\n",
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn escapes_text_and_attributes() {
        let doc = parse_document("<A B=\"x &amp; &quot;y&quot;\">1 &lt; 2</A>").unwrap();
        let mut out = String::new();
        write_element(&doc, &mut out, 0);
        assert_eq!(out, "<A B=\"x &amp; &quot;y&quot;\">1 &lt; 2</A>\n");
    }
}
