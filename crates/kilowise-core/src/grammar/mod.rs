//! Rule grammar: turns a tip's raw rule text into a [`Condition`].
//!
//! The grammar is loose, hand-authored text:
//!
//! ```text
//! Always
//! If Insulation Pre 1992
//! If match on All five Keys
//! If <attribute> <operator> <literal>
//! ```
//!
//! Attribute names and operators may span several words, so both are resolved by
//! longest match against a [`Vocabulary`]. Parsing is total: anything that does not
//! fit a known shape becomes [`Condition::Unrecognized`].

pub mod lexer;
pub mod vocabulary;

use serde::{Deserialize, Serialize};
use std::fmt;
pub use vocabulary::{OperatorPhrase, Vocabulary};

pub const ALWAYS_RULE: &str = "Always";
pub const INSULATION_LEGACY_RULE: &str = "If Insulation Pre 1992";
pub const FIVE_KEY_RULE: &str = "If match on All five Keys";

/// Profile key read by [`Condition::InsulationLegacyBoolean`].
pub const INSULATION_ATTRIBUTE: &str = "Insulation Pre 1992";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Eq,
    NotEq,
    GreaterThan,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Eq => write!(f, "="),
            Operator::NotEq => write!(f, "!="),
            Operator::GreaterThan => write!(f, ">"),
        }
    }
}

/// Structured form of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    Always,
    Comparison {
        attribute: String,
        operator: Operator,
        literal: String,
    },
    /// `If Insulation Pre 1992` with no operator: true iff the attribute is boolean `true`.
    InsulationLegacyBoolean,
    /// Recognized but has no matching contract yet; never matches.
    FiveKeyMatch,
    Unrecognized,
}

impl Condition {
    pub fn comparison(
        attribute: impl Into<String>,
        operator: Operator,
        literal: impl Into<String>,
    ) -> Self {
        Condition::Comparison {
            attribute: attribute.into(),
            operator,
            literal: literal.into(),
        }
    }

    /// Short variant name for reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Condition::Always => "always",
            Condition::Comparison { .. } => "comparison",
            Condition::InsulationLegacyBoolean => "insulation_legacy_boolean",
            Condition::FiveKeyMatch => "five_key_match",
            Condition::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Always => write!(f, "always"),
            Condition::Comparison {
                attribute,
                operator,
                literal,
            } => write!(f, "{attribute} {operator} \"{literal}\""),
            Condition::InsulationLegacyBoolean => write!(f, "{INSULATION_ATTRIBUTE} = true"),
            Condition::FiveKeyMatch => write!(f, "five-key match (not implemented)"),
            Condition::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Parses rule text against a fixed vocabulary. Cheap to share across threads.
#[derive(Debug, Clone, Default)]
pub struct RuleParser {
    vocabulary: Vocabulary,
}

impl RuleParser {
    pub fn new(vocabulary: Vocabulary) -> Self {
        RuleParser { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Parse a rule. Never fails; unknown shapes yield [`Condition::Unrecognized`].
    pub fn parse(&self, rule: &str) -> Condition {
        let rule = rule.trim();
        match rule {
            ALWAYS_RULE => return Condition::Always,
            INSULATION_LEGACY_RULE => return Condition::InsulationLegacyBoolean,
            FIVE_KEY_RULE => return Condition::FiveKeyMatch,
            _ => {}
        }

        match lexer::tokenize(rule) {
            Some(tokens) => self.parse_comparison(&tokens),
            None => Condition::Unrecognized,
        }
    }

    fn parse_comparison(&self, tokens: &[&str]) -> Condition {
        if tokens.len() < 3 {
            return Condition::Unrecognized;
        }

        let Some(attr_len) = self.match_attribute(tokens) else {
            return Condition::Unrecognized;
        };
        let rest = &tokens[attr_len..];

        let Some((operator, op_len)) = self.match_operator(rest) else {
            return Condition::Unrecognized;
        };
        let value_tokens = &rest[op_len..];
        if value_tokens.is_empty() {
            return Condition::Unrecognized;
        }

        let literal = lexer::join(value_tokens);
        Condition::Comparison {
            attribute: lexer::join(&tokens[..attr_len]),
            operator,
            literal: lexer::strip_quotes(&literal).to_string(),
        }
    }

    /// Longest token prefix naming a known attribute, leaving room for an operator
    /// and a literal.
    fn match_attribute(&self, tokens: &[&str]) -> Option<usize> {
        let longest = self
            .vocabulary
            .max_attribute_words()
            .min(tokens.len().saturating_sub(2));
        (1..=longest)
            .rev()
            .find(|&n| self.vocabulary.is_attribute(&lexer::join(&tokens[..n])))
    }

    /// Longest operator phrase at the head of `tokens` that still leaves a literal.
    fn match_operator(&self, tokens: &[&str]) -> Option<(Operator, usize)> {
        let longest = self
            .vocabulary
            .max_operator_words()
            .min(tokens.len().saturating_sub(1));
        (1..=longest).rev().find_map(|n| {
            self.vocabulary
                .operator(&lexer::join(&tokens[..n]))
                .map(|op| (op, n))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(rule: &str) -> Condition {
        RuleParser::default().parse(rule)
    }

    #[test]
    fn test_fixed_shapes() {
        assert_eq!(parse("Always"), Condition::Always);
        assert_eq!(parse("  Always  "), Condition::Always);
        assert_eq!(parse("If Insulation Pre 1992"), Condition::InsulationLegacyBoolean);
        assert_eq!(parse("If match on All five Keys"), Condition::FiveKeyMatch);
    }

    #[test]
    fn test_single_word_attribute_with_quoted_literal() {
        assert_eq!(
            parse("If Freezer = \"Yes\""),
            Condition::comparison("Freezer", Operator::Eq, "Yes")
        );
    }

    #[test]
    fn test_multi_word_attribute_and_operator() {
        assert_eq!(
            parse("If Pool Heater Greater than 0"),
            Condition::comparison("Pool Heater", Operator::GreaterThan, "0")
        );
        assert_eq!(
            parse("If Water Heater Electric = Yes"),
            Condition::comparison("Water Heater Electric", Operator::Eq, "Yes")
        );
    }

    #[test]
    fn test_longest_attribute_wins_over_prefix() {
        // "Pool" and "Pool Heater" are both attributes.
        assert_eq!(
            parse("If Pool Heater = 0"),
            Condition::comparison("Pool Heater", Operator::Eq, "0")
        );
        assert_eq!(
            parse("If Pool = \"Yes\""),
            Condition::comparison("Pool", Operator::Eq, "Yes")
        );
    }

    #[test]
    fn test_not_equal_spellings() {
        assert_eq!(
            parse("If Rate Plan Not Equal TOU"),
            Condition::comparison("Rate Plan", Operator::NotEq, "TOU")
        );
        assert_eq!(
            parse("If Rate Plan Not Equal to \"TOU\""),
            Condition::comparison("Rate Plan", Operator::NotEq, "TOU")
        );
    }

    #[test]
    fn test_operator_words_need_a_literal_after_them() {
        // "to" is the literal here, since "Not Equal to" would leave nothing behind.
        assert_eq!(
            parse("If Rate Plan Not Equal to"),
            Condition::comparison("Rate Plan", Operator::NotEq, "to")
        );
    }

    #[test]
    fn test_multi_word_literal_is_rejoined() {
        assert_eq!(
            parse("If Ducts =   \"Leaky   Ducts\""),
            Condition::comparison("Ducts", Operator::Eq, "Leaky Ducts")
        );
    }

    #[test]
    fn test_unrecognized_shapes() {
        for rule in [
            "",
            "Never",
            "If",
            "If Freezer",
            "If Freezer =",
            "If Garage = Yes",
            "If Freezer is Yes",
            "If Freezer Greater 3",
            "If Pool Heater Greater than",
            "if Freezer = Yes",
            "If match on all five keys",
            "If Insulation Pre 1992 extra",
        ] {
            assert_eq!(parse(rule), Condition::Unrecognized, "rule: {rule:?}");
        }
    }

    #[test]
    fn test_custom_vocabulary_drives_attribute_boundaries() {
        let vocab = Vocabulary::new(
            ["Garage Heater"],
            vec![OperatorPhrase {
                phrase: "=".into(),
                operator: Operator::Eq,
            }],
        )
        .unwrap();
        let parser = RuleParser::new(vocab);
        assert_eq!(
            parser.parse("If Garage Heater = On"),
            Condition::comparison("Garage Heater", Operator::Eq, "On")
        );
        assert_eq!(parser.parse("If Freezer = Yes"), Condition::Unrecognized);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let parser = RuleParser::default();
        for rule in ["If Pool Heater Greater than 0", "junk", "If Cool = No"] {
            assert_eq!(parser.parse(rule), parser.parse(rule));
        }
    }

    #[test]
    fn test_condition_display() {
        assert_eq!(
            parse("If Pool Heater Greater than 0").to_string(),
            "Pool Heater > \"0\""
        );
        assert_eq!(Condition::InsulationLegacyBoolean.to_string(), "Insulation Pre 1992 = true");
    }
}
