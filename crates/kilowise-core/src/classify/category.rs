use crate::grammar::{lexer, ALWAYS_RULE};
use crate::model::Category;

/// Entities spelled with more than one word, matched on the raw rule prefix.
const MULTI_WORD_PREFIXES: &[(&str, Category)] = &[
    ("If Pool Heater ", Category::PoolHeater),
    ("If Water Heater ", Category::WaterHeater),
    ("If Rate Plan ", Category::RatePlan),
    ("If Insulation Pre ", Category::Insulation),
];

/// Entities recognized from the first word after `If `.
const SINGLE_WORD_ENTITIES: &[(&str, Category)] = &[
    ("Freezer", Category::Freezer),
    ("Refrigerator", Category::Refrigerator),
    ("Washer", Category::Washer),
    ("Dishwasher", Category::Dishwasher),
    ("Dryer", Category::Dryer),
    ("Pool", Category::Pool),
    ("Thermostat", Category::Thermostat),
    ("CFLs", Category::Cfls),
    ("Cool", Category::Cool),
    ("Ducts", Category::Ducts),
    ("Heater", Category::Heater),
];

/// Map a rule's text to its display category.
///
/// Looser than [`crate::grammar::RuleParser::parse`]: a rule can land in a specific
/// category and still parse as unrecognized. Anything unknown is `General`.
pub fn categorize(rule: &str) -> Category {
    let rule = rule.trim();
    if rule == ALWAYS_RULE {
        return Category::General;
    }

    if let Some(&(_, category)) = MULTI_WORD_PREFIXES
        .iter()
        .find(|(prefix, _)| rule.starts_with(*prefix))
    {
        return category;
    }

    let first_word = lexer::tokenize(rule).and_then(|tokens| tokens.first().copied());
    first_word
        .and_then(|word| {
            SINGLE_WORD_ENTITIES
                .iter()
                .find(|(name, _)| *name == word)
                .map(|&(_, category)| category)
        })
        .unwrap_or(Category::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_is_general() {
        assert_eq!(categorize("Always"), Category::General);
    }

    #[test]
    fn test_multi_word_prefixes() {
        assert_eq!(categorize("If Pool Heater Greater than 0"), Category::PoolHeater);
        assert_eq!(categorize("If Water Heater Electric = Yes"), Category::WaterHeater);
        assert_eq!(categorize("If Rate Plan = \"TOU\""), Category::RatePlan);
        assert_eq!(categorize("If Insulation Pre 1992"), Category::Insulation);
    }

    #[test]
    fn test_hot_tub_is_not_a_prefix() {
        // "Hot" is not an entity, so Hot Tub rules group under General.
        assert_eq!(categorize("If Hot Tub = \"Yes\""), Category::General);
        assert_eq!(categorize("If Hot Tub Not Equal No"), Category::General);
    }

    #[test]
    fn test_first_word_entities() {
        assert_eq!(categorize("If Freezer = \"Yes\""), Category::Freezer);
        assert_eq!(categorize("If Pool = Yes"), Category::Pool);
        assert_eq!(categorize("If CFLs Not Equal All"), Category::Cfls);
        assert_eq!(categorize("If Heater = Gas"), Category::Heater);
    }

    #[test]
    fn test_categorizes_rules_the_parser_rejects() {
        // Refrigerator is not a profile attribute, but still groups under its entity.
        assert_eq!(categorize("If Refrigerator = Yes"), Category::Refrigerator);
        assert_eq!(categorize("If Thermostat"), Category::Thermostat);
    }

    #[test]
    fn test_fallbacks_to_general() {
        for rule in [
            "",
            "If",
            "If match on All five Keys",
            "If Programmable Thermostat = Yes",
            "If Area Type = Favorable",
            "Sometimes",
            "if Freezer = Yes",
        ] {
            assert_eq!(categorize(rule), Category::General, "rule: {rule:?}");
        }
    }
}
