use kilowise_core::index::EligibilityIndex;
use kilowise_core::model::{Category, Profile, ProfileValue, Tip};
use kilowise_core::suitability::AreaType;
use kilowise_core::Advisor;

/// Presentation labels for profile attributes. Owned by the CLI; the core only sees
/// attribute names.
const PROFILE_LABELS: &[(&str, &str)] = &[
    ("user_type", "👤 User Type"),
    ("Area Type", "📍 Area Type"),
    ("Freezer", "🧊 Freezer"),
    ("Dishwasher", "🍽️ Dishwasher"),
    ("Dryer", "💨 Dryer"),
    ("Washer", "🧺 Washer"),
    ("Pool", "🏊 Pool"),
    ("Hot Tub", "🛁 Hot Tub"),
    ("Pool Heater", "🔥 Pool Heater Months"),
    ("Rate Plan", "💲 Rate Plan"),
    ("Insulation Pre 1992", "🧱 Insulation Pre 1992"),
    ("Programmable Thermostat", "🌡️ Programmable Thermostat"),
    ("CFLs", "💡 CFLs/LEDs"),
    ("Cool", "❄️ Cooling System"),
    ("Water Heater Electric", "⚡ Electric Water Heater"),
    ("Ducts", "🌬️ Ducts"),
];

fn label_for(attribute: &str) -> &str {
    PROFILE_LABELS
        .iter()
        .find(|(key, _)| *key == attribute)
        .map(|(_, label)| *label)
        .unwrap_or(attribute)
}

fn render_value(value: &ProfileValue) -> String {
    match value {
        ProfileValue::Bool(true) => "yes".into(),
        ProfileValue::Bool(false) => "no".into(),
        other => other.to_string(),
    }
}

pub fn print_profile(source: &str, profile: &Profile) {
    println!("=== Profile: {} ===\n", source);

    if profile.is_empty() {
        println!("  (no attributes)");
        return;
    }

    let rows: Vec<(&str, String)> = profile
        .iter()
        .map(|(k, v)| (label_for(k), render_value(v)))
        .collect();
    let max_label = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(10);

    for (label, value) in &rows {
        let pad = max_label - label.chars().count();
        println!("  {}{}  {}", label, " ".repeat(pad), value);
    }
}

pub fn print_categories(source: &str, index: &EligibilityIndex) {
    println!("=== Tip categories for {} ===\n", source);

    if index.is_empty() {
        println!("  No tips match this profile.");
        return;
    }

    for (category, tips) in index.iter() {
        println!("  {:<14} {} tip(s)", category.as_str(), tips.len());
    }
    println!();
    println!(
        "{} eligible tip(s) in {} categories. Use `kilowise tips --category <NAME>` to list them.",
        index.tip_count(),
        index.len()
    );
}

pub fn print_tips(
    advisor: &Advisor,
    category: Category,
    area: Option<AreaType>,
    tips: &[Tip],
    profile: &Profile,
    explain: bool,
) {
    match area {
        Some(area) => println!("=== Tips for: {} (Area: {}) ===\n", category, area),
        None => println!("=== Tips for: {} ===\n", category),
    }

    if tips.is_empty() {
        match area {
            Some(area) => println!(
                "  No tips for '{}' suit a '{}' area and match the current profile.",
                category, area
            ),
            None => println!("  No tips for '{}' match the current profile.", category),
        }
        return;
    }

    for (i, tip) in tips.iter().enumerate() {
        println!("  Tip {}: {}", i + 1, tip.headline);
        if !tip.description.is_empty() {
            println!("    {}", tip.description);
        }
        println!(
            "    RowID: {} | Rule: {} | Category: {} | Fuel: {}",
            tip.rowid,
            tip.rule,
            tip.category.as_deref().unwrap_or("N/A"),
            tip.fuel.as_deref().unwrap_or("Any")
        );
        if explain {
            let assessment = advisor.assess_tip(tip, profile);
            println!(
                "    Reads as: {} -> {}",
                assessment.condition, assessment.verdict
            );
        }
        println!();
    }

    println!("Found {} tip(s).", tips.len());
}
