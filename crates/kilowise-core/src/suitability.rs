//! Best-effort guess at which service areas a tip suits.
//!
//! A keyword heuristic over headline and description, applied after rule matching.
//! It is deliberately loose and independent of the rule grammar.

use crate::model::{ProfileValue, Tip};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Profile key holding the customer's area type.
pub const AREA_TYPE_ATTRIBUTE: &str = "Area Type";

const INVESTMENT_KEYWORDS: &[&str] = &[
    "replace",
    "install new",
    "upgrade",
    "geothermal",
    "solar",
    "investment",
    "remodel",
    "purchase",
    "high efficiency",
    "energy star model",
];

/// Cheap replacements that suit everyone even though they mention replacing things.
const LOW_COST_REPLACEMENTS: &[&str] = &["light bulbs", "led", "faucet aerators", "shower heads"];

const BEHAVIORAL_KEYWORDS: &[&str] = &[
    "unplug",
    "turn off",
    "clean",
    "maintain",
    "repair",
    "seal",
    "fix leaky",
    "lower setting",
    "reduce",
    "shorten",
    "check",
    "schedule",
    "wash full loads",
    "use cold water",
    "cover",
    "settings",
    "timer",
];

/// Affordable installs (programmable thermostats, smart strips).
const AFFORDABLE_INSTALL_ROWIDS: &[i64] = &[94, 19, 330];

/// Remediation tips (mold, poison, pests) aimed at unfavorable areas.
const REMEDIATION_ROWIDS: &[i64] = &[161, 162, 163];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaType {
    Favorable,
    Unfavorable,
    #[default]
    Standard,
}

impl AreaType {
    /// Read the area from a profile; anything missing or unknown is `Standard`.
    pub fn from_profile_value(value: Option<&ProfileValue>) -> AreaType {
        match value {
            Some(ProfileValue::Text(s)) if s.eq_ignore_ascii_case("favorable") => {
                AreaType::Favorable
            }
            Some(ProfileValue::Text(s)) if s.eq_ignore_ascii_case("unfavorable") => {
                AreaType::Unfavorable
            }
            _ => AreaType::Standard,
        }
    }
}

impl fmt::Display for AreaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AreaType::Favorable => write!(f, "Favorable"),
            AreaType::Unfavorable => write!(f, "Unfavorable"),
            AreaType::Standard => write!(f, "Standard"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suitability {
    All,
    Favorable,
    Unfavorable,
}

impl fmt::Display for Suitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suitability::All => write!(f, "All"),
            Suitability::Favorable => write!(f, "Favorable"),
            Suitability::Unfavorable => write!(f, "Unfavorable"),
        }
    }
}

fn mentions_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

fn rowid_in(tip: &Tip, rowids: &[i64]) -> bool {
    tip.rowid.as_number().is_some_and(|n| rowids.contains(&n))
}

/// Guess which areas `tip` suits.
pub fn suitability(tip: &Tip) -> Suitability {
    let text = format!("{} {}", tip.headline, tip.description).to_lowercase();

    if mentions_any(&text, INVESTMENT_KEYWORDS) {
        if mentions_any(&text, LOW_COST_REPLACEMENTS) || rowid_in(tip, AFFORDABLE_INSTALL_ROWIDS) {
            return Suitability::All;
        }
        return Suitability::Favorable;
    }

    if mentions_any(&text, BEHAVIORAL_KEYWORDS) {
        return Suitability::All;
    }

    if rowid_in(tip, REMEDIATION_ROWIDS) || text.contains("mobile home") {
        return Suitability::Unfavorable;
    }

    Suitability::All
}

/// Whether `tip` should be shown to a customer in `area`.
pub fn suits_area(tip: &Tip, area: AreaType) -> bool {
    match suitability(tip) {
        Suitability::All => true,
        Suitability::Favorable => area == AreaType::Favorable,
        Suitability::Unfavorable => area == AreaType::Unfavorable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RowId;

    fn tip(rowid: i64, headline: &str, description: &str) -> Tip {
        Tip {
            rowid: RowId::Number(rowid),
            headline: headline.into(),
            description: description.into(),
            rule: "Always".into(),
            category: None,
            fuel: None,
        }
    }

    #[test]
    fn test_investment_tips_are_favorable() {
        let t = tip(1, "Upgrade your furnace", "Choose a high efficiency model.");
        assert_eq!(suitability(&t), Suitability::Favorable);
        assert!(suits_area(&t, AreaType::Favorable));
        assert!(!suits_area(&t, AreaType::Standard));
        assert!(!suits_area(&t, AreaType::Unfavorable));
    }

    #[test]
    fn test_low_cost_replacements_suit_everyone() {
        let t = tip(2, "Replace light bulbs", "Swap old bulbs.");
        assert_eq!(suitability(&t), Suitability::All);
        let t = tip(94, "Install new programmable thermostat", "");
        assert_eq!(suitability(&t), Suitability::All);
    }

    #[test]
    fn test_behavioral_tips_suit_everyone() {
        let t = tip(3, "Wash full loads", "Run the washer only when full.");
        assert_eq!(suitability(&t), Suitability::All);
    }

    #[test]
    fn test_remediation_and_mobile_homes_are_unfavorable() {
        assert_eq!(suitability(&tip(161, "Mold", "")), Suitability::Unfavorable);
        let t = tip(400, "Skirting", "Insulate under a mobile home.");
        assert_eq!(suitability(&t), Suitability::Unfavorable);
        assert!(suits_area(&t, AreaType::Unfavorable));
    }

    #[test]
    fn test_area_type_from_profile() {
        assert_eq!(
            AreaType::from_profile_value(Some(&ProfileValue::from("Favorable"))),
            AreaType::Favorable
        );
        assert_eq!(AreaType::from_profile_value(None), AreaType::Standard);
        assert_eq!(
            AreaType::from_profile_value(Some(&ProfileValue::Bool(true))),
            AreaType::Standard
        );
    }
}
