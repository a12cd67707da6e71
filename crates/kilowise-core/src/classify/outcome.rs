use crate::grammar::Condition;
use crate::model::{Category, RowId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a condition did not match a profile. None of these are errors to a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum NoMatchReason {
    /// The profile has no value for the rule's attribute.
    AttributeNotFound { attribute: String },
    /// The profile value or literal cannot take part in the comparison.
    TypeMismatch { attribute: String, detail: String },
    /// The comparison ran and came out false.
    ValueMismatch {
        attribute: String,
        expected: String,
        actual: String,
    },
    /// The rule text fits no known shape.
    UnrecognizedGrammar,
    /// The rule shape is known but has no evaluation contract yet.
    UnimplementedRule,
}

impl fmt::Display for NoMatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoMatchReason::AttributeNotFound { attribute } => {
                write!(f, "profile has no '{attribute}'")
            }
            NoMatchReason::TypeMismatch { attribute, detail } => {
                write!(f, "'{attribute}' cannot be compared: {detail}")
            }
            NoMatchReason::ValueMismatch {
                attribute,
                expected,
                actual,
            } => write!(f, "'{attribute}' is {actual}, rule wants {expected}"),
            NoMatchReason::UnrecognizedGrammar => write!(f, "rule text not recognized"),
            NoMatchReason::UnimplementedRule => write!(f, "rule not implemented"),
        }
    }
}

/// Outcome of evaluating one condition against one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    Match,
    NoMatch(NoMatchReason),
}

impl Verdict {
    pub fn is_match(&self) -> bool {
        matches!(self, Verdict::Match)
    }

    pub fn reason(&self) -> Option<&NoMatchReason> {
        match self {
            Verdict::Match => None,
            Verdict::NoMatch(reason) => Some(reason),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Match => write!(f, "match"),
            Verdict::NoMatch(reason) => write!(f, "no match ({reason})"),
        }
    }
}

/// Full per-tip explanation: how the rule was read and what it decided.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipAssessment {
    pub rowid: RowId,
    /// Raw rule text as it appears in the catalog.
    pub rule: String,
    pub category: Category,
    pub condition: Condition,
    pub verdict: Verdict,
}
