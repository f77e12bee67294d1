//! Mode-dependent expression blocks for the registry value discovery family.
//!
//! The resolver picks the registry attribute type code and the comparison
//! expression spliced into the discovery template. Its output is itself fed
//! to the substitutor, a second substitution pass layered on the first.

use crate::xml::escape_text;

/// Registry attribute type codes understood by the discovery provider.
const ATTRIBUTE_CHECK_EXISTS: i32 = 0;
const ATTRIBUTE_STRING: i32 = 1;
const ATTRIBUTE_INTEGER: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueMode {
    Existence,
    StringMatch,
    IntegerMatch,
    RegexPattern,
}

impl ValueMode {
    /// Unknown or missing modes fall back to existence.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" => ValueMode::StringMatch,
            "integer" => ValueMode::IntegerMatch,
            "regex" => ValueMode::RegexPattern,
            _ => ValueMode::Existence,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Equal,
    NotEqual,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
    Like,
    NotLike,
}

impl CompareOp {
    /// Unknown or missing operators fall back to `Equal`.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "NotEqual" => CompareOp::NotEqual,
            "Greater" => CompareOp::Greater,
            "Less" => CompareOp::Less,
            "GreaterEqual" => CompareOp::GreaterEqual,
            "LessEqual" => CompareOp::LessEqual,
            "Like" => CompareOp::Like,
            "NotLike" => CompareOp::NotLike,
            _ => CompareOp::Equal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Equal => "Equal",
            CompareOp::NotEqual => "NotEqual",
            CompareOp::Greater => "Greater",
            CompareOp::Less => "Less",
            CompareOp::GreaterEqual => "GreaterEqual",
            CompareOp::LessEqual => "LessEqual",
            CompareOp::Like => "Like",
            CompareOp::NotLike => "NotLike",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMode {
    pub attribute_type: i32,
    pub expression: String,
}

/// Resolve the comparison mode for a registry value discovery.
///
/// Existence ignores any expected value or pattern and always produces the
/// fixed boolean-equality expression.
pub fn resolve_value_mode(
    unique_id: &str,
    value_mode: &str,
    operator: &str,
    expected_value: &str,
    regex_pattern: &str,
) -> ResolvedMode {
    let attribute = format!("Values/{}RegValue", escape_text(unique_id));

    match ValueMode::parse(value_mode) {
        ValueMode::Existence => ResolvedMode {
            attribute_type: ATTRIBUTE_CHECK_EXISTS,
            expression: simple_expression(&attribute, "Boolean", CompareOp::Equal, "true"),
        },
        ValueMode::StringMatch => ResolvedMode {
            attribute_type: ATTRIBUTE_STRING,
            expression: simple_expression(
                &attribute,
                "String",
                CompareOp::parse(operator),
                &escape_text(expected_value),
            ),
        },
        ValueMode::IntegerMatch => ResolvedMode {
            attribute_type: ATTRIBUTE_INTEGER,
            expression: simple_expression(
                &attribute,
                "Integer",
                CompareOp::parse(operator),
                &escape_text(expected_value),
            ),
        },
        ValueMode::RegexPattern => ResolvedMode {
            attribute_type: ATTRIBUTE_STRING,
            expression: regex_expression(&attribute, &escape_text(regex_pattern)),
        },
    }
}

fn simple_expression(attribute: &str, value_type: &str, op: CompareOp, value: &str) -> String {
    format!(
        "<SimpleExpression>\
         <ValueExpression><XPathQuery Type=\"{value_type}\">{attribute}</XPathQuery></ValueExpression>\
         <Operator>{}</Operator>\
         <ValueExpression><Value Type=\"{value_type}\">{value}</Value></ValueExpression>\
         </SimpleExpression>",
        op.as_str(),
    )
}

fn regex_expression(attribute: &str, pattern: &str) -> String {
    format!(
        "<RegExExpression>\
         <ValueExpression><XPathQuery Type=\"String\">{attribute}</XPathQuery></ValueExpression>\
         <Operator>MatchesRegularExpression</Operator>\
         <Pattern>{pattern}</Pattern>\
         </RegExExpression>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn existence_ignores_supplied_values() {
        let resolved = resolve_value_mode("App", "existence", "Greater", "42", ".*");
        assert_eq!(resolved.attribute_type, 0);
        assert!(resolved.expression.contains("Type=\"Boolean\""));
        assert!(resolved.expression.contains("<Operator>Equal</Operator>"));
        assert!(resolved.expression.contains(">true</Value>"));
        assert!(!resolved.expression.contains("42"));
    }

    #[test]
    fn unknown_mode_defaults_to_existence() {
        let known = resolve_value_mode("App", "existence", "", "", "");
        let unknown = resolve_value_mode("App", "something-else", "", "", "");
        assert_eq!(unknown, known);

        let missing = resolve_value_mode("App", "", "", "", "");
        assert_eq!(missing, known);
    }

    #[test]
    fn string_match_uses_selected_operator() {
        let resolved = resolve_value_mode("App", "string", "NotEqual", "disabled", "");
        assert_eq!(resolved.attribute_type, 1);
        assert!(resolved.expression.contains("<Operator>NotEqual</Operator>"));
        assert!(resolved.expression.contains(">disabled</Value>"));
        assert!(resolved.expression.contains("Type=\"String\""));
    }

    #[test]
    fn integer_match_has_integer_type_code() {
        let resolved = resolve_value_mode("App", "integer", "GreaterEqual", "5", "");
        assert_eq!(resolved.attribute_type, 2);
        assert!(resolved.expression.contains("Type=\"Integer\""));
        assert!(
            resolved
                .expression
                .contains("<Operator>GreaterEqual</Operator>")
        );
    }

    #[test]
    fn regex_operator_is_fixed() {
        let resolved = resolve_value_mode("App", "regex", "Less", "", "^v[0-9]+$");
        assert_eq!(resolved.attribute_type, 1);
        assert!(
            resolved
                .expression
                .contains("<Operator>MatchesRegularExpression</Operator>")
        );
        assert!(resolved.expression.contains("<Pattern>^v[0-9]+$</Pattern>"));
    }

    #[test]
    fn expected_value_is_escaped() {
        let resolved = resolve_value_mode("App", "string", "Equal", "a<b>&c", "");
        assert!(resolved.expression.contains(">a&lt;b&gt;&amp;c</Value>"));
    }

    #[test]
    fn unknown_operator_defaults_to_equal() {
        assert_eq!(CompareOp::parse("Between"), CompareOp::Equal);
        assert_eq!(CompareOp::parse(""), CompareOp::Equal);
    }

    #[test]
    fn resolved_expression_parses_as_xml() {
        for mode in ["existence", "string", "integer", "regex"] {
            let resolved = resolve_value_mode("App", mode, "Like", "x", "y.*");
            crate::xml::parse_document(&resolved.expression)
                .unwrap_or_else(|err| panic!("mode {mode}: {err:#}"));
        }
    }
}
