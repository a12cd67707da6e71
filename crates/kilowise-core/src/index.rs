use crate::classify::{assess, categorize, evaluate, TipAssessment};
use crate::grammar::RuleParser;
use crate::model::{Category, Profile, Tip};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Category -> tips currently eligible for one profile.
///
/// A category is a key only if it holds at least one tip; tips keep catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EligibilityIndex {
    groups: BTreeMap<Category, Vec<Tip>>,
}

impl EligibilityIndex {
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.groups.keys().copied()
    }

    pub fn contains(&self, category: Category) -> bool {
        self.groups.contains_key(&category)
    }

    /// Eligible tips in `category`; empty when the category is not offered.
    pub fn tips(&self, category: Category) -> &[Tip] {
        self.groups.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Tip])> {
        self.groups.iter().map(|(c, tips)| (*c, tips.as_slice()))
    }

    /// Number of offered categories.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of eligible tips across all categories.
    pub fn tip_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Group every tip whose rule `profile` satisfies under the rule's category.
///
/// Tips are checked in parallel; the catalog and profile are only borrowed, so they
/// cannot change while the build runs.
pub fn build_index(parser: &RuleParser, tips: &[Tip], profile: &Profile) -> EligibilityIndex {
    let eligible: Vec<(Category, &Tip)> = tips
        .par_iter()
        .filter_map(|tip| {
            let matched = evaluate(&parser.parse(&tip.rule), profile);
            tracing::trace!(rowid = %tip.rowid, rule = %tip.rule, matched, "evaluated tip");
            matched.then(|| (categorize(&tip.rule), tip))
        })
        .collect();

    let mut groups: BTreeMap<Category, Vec<Tip>> = BTreeMap::new();
    for (category, tip) in eligible {
        groups.entry(category).or_default().push(tip.clone());
    }

    let index = EligibilityIndex { groups };
    tracing::debug!(
        scanned = tips.len(),
        eligible = index.tip_count(),
        categories = index.len(),
        "built eligibility index"
    );
    index
}

/// Categories with at least one eligible tip.
///
/// Stops evaluating a category's rules once one of them matches; yields the same set
/// as the keys of [`build_index`].
pub fn offered_categories(
    parser: &RuleParser,
    tips: &[Tip],
    profile: &Profile,
) -> BTreeSet<Category> {
    let mut offered = BTreeSet::new();
    for tip in tips {
        let category = categorize(&tip.rule);
        if offered.contains(&category) {
            continue;
        }
        if evaluate(&parser.parse(&tip.rule), profile) {
            offered.insert(category);
        }
    }
    offered
}

/// Eligible tips of one category, in catalog order.
pub fn tips_for_category(
    parser: &RuleParser,
    tips: &[Tip],
    profile: &Profile,
    category: Category,
) -> Vec<Tip> {
    tips.iter()
        .filter(|tip| categorize(&tip.rule) == category)
        .filter(|tip| evaluate(&parser.parse(&tip.rule), profile))
        .cloned()
        .collect()
}

/// Explain every tip's rule against `profile`, in catalog order.
pub fn assess_catalog(
    parser: &RuleParser,
    tips: &[Tip],
    profile: &Profile,
) -> Vec<TipAssessment> {
    tips.par_iter()
        .map(|tip| assess_tip(parser, tip, profile))
        .collect()
}

pub fn assess_tip(parser: &RuleParser, tip: &Tip, profile: &Profile) -> TipAssessment {
    let condition = parser.parse(&tip.rule);
    let verdict = assess(&condition, profile);
    TipAssessment {
        rowid: tip.rowid.clone(),
        rule: tip.rule.clone(),
        category: categorize(&tip.rule),
        condition,
        verdict,
    }
}
