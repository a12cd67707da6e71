use crate::classify::outcome::{NoMatchReason, Verdict};
use crate::grammar::{Condition, Operator, INSULATION_ATTRIBUTE};
use crate::model::{Profile, ProfileValue};

/// Decide whether `profile` satisfies `condition`. Never fails: any problem is a non-match.
pub fn evaluate(condition: &Condition, profile: &Profile) -> bool {
    assess(condition, profile).is_match()
}

/// Like [`evaluate`], but says why a condition did not match.
pub fn assess(condition: &Condition, profile: &Profile) -> Verdict {
    match condition {
        Condition::Always => Verdict::Match,
        Condition::InsulationLegacyBoolean => assess_insulation(profile),
        Condition::Comparison {
            attribute,
            operator,
            literal,
        } => match profile.get(attribute) {
            Some(value) => compare(attribute, *operator, literal, value),
            None => Verdict::NoMatch(NoMatchReason::AttributeNotFound {
                attribute: attribute.clone(),
            }),
        },
        // TODO: define which five catalog keys (fuel, sub ids, user type, ...) must match
        // the profile before this variant can ever match.
        Condition::FiveKeyMatch => Verdict::NoMatch(NoMatchReason::UnimplementedRule),
        Condition::Unrecognized => Verdict::NoMatch(NoMatchReason::UnrecognizedGrammar),
    }
}

fn assess_insulation(profile: &Profile) -> Verdict {
    match profile.get(INSULATION_ATTRIBUTE) {
        Some(ProfileValue::Bool(true)) => Verdict::Match,
        Some(ProfileValue::Bool(false)) => Verdict::NoMatch(NoMatchReason::ValueMismatch {
            attribute: INSULATION_ATTRIBUTE.to_string(),
            expected: "true".into(),
            actual: "false".into(),
        }),
        Some(other) => Verdict::NoMatch(NoMatchReason::TypeMismatch {
            attribute: INSULATION_ATTRIBUTE.to_string(),
            detail: format!("expected a boolean, found '{other}'"),
        }),
        None => Verdict::NoMatch(NoMatchReason::AttributeNotFound {
            attribute: INSULATION_ATTRIBUTE.to_string(),
        }),
    }
}

/// `yes` / `true` (any case) read as true, everything else as false.
fn literal_truth(literal: &str) -> bool {
    literal.eq_ignore_ascii_case("yes") || literal.eq_ignore_ascii_case("true")
}

fn compare(attribute: &str, operator: Operator, literal: &str, value: &ProfileValue) -> Verdict {
    let matched = match operator {
        Operator::Eq => match value {
            ProfileValue::Bool(b) => *b == literal_truth(literal),
            other => other.to_string() == literal,
        },
        Operator::NotEq => match value {
            ProfileValue::Bool(b) => *b != literal_truth(literal),
            other => other.to_string() != literal,
        },
        Operator::GreaterThan => {
            let Some(actual) = value.as_number() else {
                return Verdict::NoMatch(NoMatchReason::TypeMismatch {
                    attribute: attribute.to_string(),
                    detail: format!("'{value}' is not a number"),
                });
            };
            let Ok(threshold) = literal.trim().parse::<f64>() else {
                return Verdict::NoMatch(NoMatchReason::TypeMismatch {
                    attribute: attribute.to_string(),
                    detail: format!("literal '{literal}' is not a number"),
                });
            };
            actual > threshold
        }
    };

    if matched {
        Verdict::Match
    } else {
        Verdict::NoMatch(NoMatchReason::ValueMismatch {
            attribute: attribute.to_string(),
            expected: format!("{operator} \"{literal}\""),
            actual: value.to_string(),
        })
    }
}
