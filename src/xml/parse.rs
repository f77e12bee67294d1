//! Hand-rolled parser for the fragment XML subset.
//!
//! Fragments are small (hundreds of bytes), so a simple cursor over the
//! input string is enough. Anything malformed is an error; the merger
//! decides what to do with it.

use crate::Result;
use crate::xml::{Element, Node};
use anyhow::bail;

pub fn parse_document(text: &str) -> Result<Element> {
    let mut parser = Parser { text, pos: 0 };

    parser.skip_misc();
    if parser.rest().starts_with("<?") {
        parser.skip_declaration()?;
        parser.skip_misc();
    }

    let root = parser.parse_element()?;

    parser.skip_misc();
    if !parser.rest().is_empty() {
        bail!("trailing content after document root at byte {}", parser.pos);
    }

    Ok(root)
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.text.len() - trimmed.len();
    }

    /// Skip whitespace and comments between markup.
    fn skip_misc(&mut self) {
        loop {
            self.skip_whitespace();
            if let Some(stripped) = self.rest().strip_prefix("<!--") {
                match stripped.find("-->") {
                    Some(end) => self.advance(4 + end + 3),
                    None => {
                        // Unterminated comment: leave it for parse_element to report.
                        return;
                    }
                }
            } else {
                return;
            }
        }
    }

    fn skip_declaration(&mut self) -> Result<()> {
        match self.rest().find("?>") {
            Some(end) => {
                self.advance(end + 2);
                Ok(())
            }
            None => bail!("unterminated XML declaration"),
        }
    }

    fn parse_element(&mut self) -> Result<Element> {
        if !self.rest().starts_with('<') {
            bail!("expected '<' at byte {}", self.pos);
        }
        self.advance(1);

        let name = self.parse_name()?;
        let mut element = Element::new(name);

        loop {
            self.skip_whitespace();

            if self.rest().starts_with("/>") {
                self.advance(2);
                return Ok(element);
            }
            if self.rest().starts_with('>') {
                self.advance(1);
                self.parse_children(&mut element)?;
                return Ok(element);
            }
            if self.rest().is_empty() {
                bail!("unterminated start tag for element '{}'", element.name);
            }

            let (attr_name, attr_value) = self.parse_attribute()?;
            element.attrs.push((attr_name, attr_value));
        }
    }

    fn parse_children(&mut self, element: &mut Element) -> Result<()> {
        loop {
            if self.rest().starts_with("</") {
                self.advance(2);
                let close_name = self.parse_name()?;
                if close_name != element.name {
                    bail!(
                        "mismatched closing tag: expected '</{}>' but found '</{}>'",
                        element.name,
                        close_name
                    );
                }
                self.skip_whitespace();
                if !self.rest().starts_with('>') {
                    bail!("malformed closing tag for element '{}'", element.name);
                }
                self.advance(1);
                return Ok(());
            }

            if let Some(stripped) = self.rest().strip_prefix("<!--") {
                match stripped.find("-->") {
                    Some(end) => {
                        self.advance(4 + end + 3);
                        continue;
                    }
                    None => bail!("unterminated comment inside element '{}'", element.name),
                }
            }

            if self.rest().starts_with('<') {
                let child = self.parse_element()?;
                element.children.push(Node::Element(child));
                continue;
            }

            if self.rest().is_empty() {
                bail!("unexpected end of input inside element '{}'", element.name);
            }

            let raw = match self.rest().find('<') {
                Some(end) => &self.rest()[..end],
                None => self.rest(),
            };
            let len = raw.len();
            let text = unescape(raw)?;
            self.advance(len);

            // Whitespace-only runs are indentation, not content.
            if !text.trim().is_empty() {
                element.children.push(Node::Text(text.trim().to_string()));
            }
        }
    }

    fn parse_name(&mut self) -> Result<String> {
        let rest = self.rest();
        let end = rest
            .char_indices()
            .find(|(_, c)| !is_name_char(*c))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        if end == 0 {
            bail!("expected a name at byte {}", self.pos);
        }
        let name = rest[..end].to_string();
        self.advance(end);
        Ok(name)
    }

    fn parse_attribute(&mut self) -> Result<(String, String)> {
        let name = self.parse_name()?;

        self.skip_whitespace();
        if !self.rest().starts_with('=') {
            bail!("attribute '{}' is missing '='", name);
        }
        self.advance(1);
        self.skip_whitespace();

        let quote = match self.rest().chars().next() {
            Some(q @ ('"' | '\'')) => q,
            _ => bail!("attribute '{}' value must be quoted", name),
        };
        self.advance(1);

        let rest = self.rest();
        let end = match rest.find(quote) {
            Some(end) => end,
            None => bail!("unterminated value for attribute '{}'", name),
        };
        let value = unescape(&rest[..end])?;
        self.advance(end + 1);

        Ok((name, value))
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | ':')
}

/// Resolve the five standard entities plus numeric character references.
fn unescape(s: &str) -> Result<String> {
    if !s.contains('&') {
        return Ok(s.to_string());
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        rest = &rest[start..];

        let end = match rest.find(';') {
            Some(end) => end,
            None => bail!("unterminated entity reference in {:?}", s),
        };
        let entity = &rest[1..end];
        match entity {
            "amp" => out.push('&'),
            "lt" => out.push('<'),
            "gt" => out.push('>'),
            "quot" => out.push('"'),
            "apos" => out.push('\''),
            _ => {
                let code = if let Some(hex) = entity.strip_prefix("#x") {
                    u32::from_str_radix(hex, 16).ok()
                } else if let Some(dec) = entity.strip_prefix('#') {
                    dec.parse::<u32>().ok()
                } else {
                    None
                };
                match code.and_then(char::from_u32) {
                    Some(c) => out.push(c),
                    None => bail!("unknown entity reference '&{};'", entity),
                }
            }
        }
        rest = &rest[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_declaration_attributes_and_text() {
        let doc = parse_document(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <Root A=\"1\" B='two'>\n  <Child>hello &amp; goodbye</Child>\n</Root>",
        )
        .unwrap();

        assert_eq!(doc.name, "Root");
        assert_eq!(doc.attr("A"), Some("1"));
        assert_eq!(doc.attr("B"), Some("two"));

        let children = doc.descendants(&["Child"]);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].text(), "hello & goodbye");
    }

    #[test]
    fn parses_self_closing_and_comments() {
        let doc =
            parse_document("<Root><!-- note --><Leaf X=\"y\" /><!-- tail --></Root>").unwrap();
        let leaves = doc.descendants(&["Leaf"]);
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].attr("X"), Some("y"));
    }

    #[test]
    fn keeps_dollar_expressions_as_text() {
        let doc = parse_document(
            "<Root><ComputerName>$Target/Host/Property[Type=\"Windows!Microsoft.Windows.Computer\"]/PrincipalName$</ComputerName></Root>",
        )
        .unwrap();
        let cn = doc.descendants(&["ComputerName"]);
        assert_eq!(
            cn[0].text(),
            "$Target/Host/Property[Type=\"Windows!Microsoft.Windows.Computer\"]/PrincipalName$"
        );
    }

    #[test]
    fn rejects_mismatched_closing_tag() {
        let err = parse_document("<Root><A></B></Root>").unwrap_err();
        assert!(err.to_string().contains("mismatched closing tag"));
    }

    #[test]
    fn rejects_trailing_content() {
        let err = parse_document("<Root/>extra").unwrap_err();
        assert!(err.to_string().contains("trailing content"));
    }

    #[test]
    fn rejects_unknown_entity() {
        let err = parse_document("<Root>&nope;</Root>").unwrap_err();
        assert!(err.to_string().contains("unknown entity"));
    }

    #[test]
    fn resolves_numeric_references() {
        let doc = parse_document("<Root>&#65;&#x42;</Root>").unwrap();
        assert_eq!(doc.text(), "AB");
    }
}
