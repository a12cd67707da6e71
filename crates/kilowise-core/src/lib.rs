pub mod catalog;
pub mod classify;
pub mod error;
pub mod grammar;
pub mod index;
pub mod model;
pub mod profile;
pub mod suitability;

use classify::{TipAssessment, Verdict};
use grammar::{Condition, RuleParser, Vocabulary};
use index::EligibilityIndex;
use model::{Category, Profile, Tip};
use std::collections::BTreeSet;
use suitability::{AreaType, AREA_TYPE_ATTRIBUTE};

/// Main API entry point: every rule operation, resolved against one vocabulary.
///
/// Holds no mutable state; one `Advisor` can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Advisor {
    parser: RuleParser,
}

impl Advisor {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Advisor {
            parser: RuleParser::new(vocabulary),
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        self.parser.vocabulary()
    }

    pub fn parse(&self, rule: &str) -> Condition {
        self.parser.parse(rule)
    }

    pub fn categorize(&self, rule: &str) -> Category {
        classify::categorize(rule)
    }

    pub fn evaluate(&self, condition: &Condition, profile: &Profile) -> bool {
        classify::evaluate(condition, profile)
    }

    pub fn assess(&self, condition: &Condition, profile: &Profile) -> Verdict {
        classify::assess(condition, profile)
    }

    /// Parse and evaluate a raw rule in one step.
    pub fn rule_matches(&self, rule: &str, profile: &Profile) -> bool {
        self.evaluate(&self.parse(rule), profile)
    }

    pub fn build_index(&self, tips: &[Tip], profile: &Profile) -> EligibilityIndex {
        index::build_index(&self.parser, tips, profile)
    }

    pub fn offered_categories(&self, tips: &[Tip], profile: &Profile) -> BTreeSet<Category> {
        index::offered_categories(&self.parser, tips, profile)
    }

    pub fn tips_for_category(
        &self,
        tips: &[Tip],
        profile: &Profile,
        category: Category,
    ) -> Vec<Tip> {
        index::tips_for_category(&self.parser, tips, profile, category)
    }

    /// Eligible tips of `category`, further narrowed to those suiting the profile's area.
    pub fn tips_for_area(&self, tips: &[Tip], profile: &Profile, category: Category) -> Vec<Tip> {
        let area = AreaType::from_profile_value(profile.get(AREA_TYPE_ATTRIBUTE));
        self.tips_for_category(tips, profile, category)
            .into_iter()
            .filter(|tip| suitability::suits_area(tip, area))
            .collect()
    }

    pub fn assess_tip(&self, tip: &Tip, profile: &Profile) -> TipAssessment {
        index::assess_tip(&self.parser, tip, profile)
    }

    pub fn assess_catalog(&self, tips: &[Tip], profile: &Profile) -> Vec<TipAssessment> {
        index::assess_catalog(&self.parser, tips, profile)
    }
}
