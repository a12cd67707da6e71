use crate::error::KilowiseError;
use crate::model::Tip;

const SAMPLE_TIPS_JSON: &str = include_str!("../../../../data/tips.json");

/// The bundled sample tip catalog.
pub fn sample_catalog() -> Result<Vec<Tip>, KilowiseError> {
    super::parse_catalog_str(SAMPLE_TIPS_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::categorize;
    use crate::grammar::{Condition, RuleParser};
    use crate::model::Category;

    #[test]
    fn test_sample_catalog_loads() {
        let tips = sample_catalog().unwrap();
        assert!(!tips.is_empty());
        assert!(tips.iter().any(|t| t.rule == "Always"));
    }

    #[test]
    fn test_sample_rules_parse_except_known_gaps() {
        let parser = RuleParser::default();
        let tips = sample_catalog().unwrap();
        let unparsed: Vec<&str> = tips
            .iter()
            .filter(|t| parser.parse(&t.rule) == Condition::Unrecognized)
            .map(|t| t.rule.as_str())
            .collect();
        // Refrigerator is not a profile attribute.
        assert_eq!(unparsed, vec!["If Refrigerator = \"Yes\""]);
    }

    #[test]
    fn test_sample_catalog_covers_multi_word_categories() {
        let categories: Vec<Category> = sample_catalog()
            .unwrap()
            .iter()
            .map(|t| categorize(&t.rule))
            .collect();
        for wanted in [
            Category::PoolHeater,
            Category::RatePlan,
            Category::Insulation,
            Category::WaterHeater,
        ] {
            assert!(categories.contains(&wanted), "missing {wanted}");
        }
        assert!(!categories.contains(&Category::HotTub));
    }
}
