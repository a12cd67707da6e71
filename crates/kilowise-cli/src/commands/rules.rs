use kilowise_core::error::KilowiseError;
use kilowise_core::grammar::Condition;
use kilowise_core::Advisor;
use std::collections::BTreeMap;

use super::CatalogArgs;

pub fn check(advisor: &Advisor, rule: &str) -> Result<(), KilowiseError> {
    let condition = advisor.parse(rule);
    println!("Rule:      {}", rule.trim());
    println!("Category:  {}", advisor.categorize(rule));
    println!("Condition: {} ({})", condition, condition.kind());

    match condition {
        Condition::Unrecognized => {
            println!("\nThis rule never matches: its text fits no known shape.");
            println!("Run `kilowise rules vocabulary` to see recognized attributes and operators.");
        }
        Condition::FiveKeyMatch => {
            println!("\nThis rule never matches: five-key matching is not defined yet.");
        }
        _ => {}
    }

    Ok(())
}

pub fn audit(advisor: &Advisor, catalog_args: &CatalogArgs) -> Result<(), KilowiseError> {
    let tips = catalog_args.load()?;

    let max_rule = tips.iter().map(|t| t.rule.len()).max().unwrap_or(20);
    println!(
        "  {:<8}  {:<width$}  {:<14}  Condition",
        "Row",
        "Rule",
        "Category",
        width = max_rule
    );
    println!("  {}", "-".repeat(8 + max_rule + 14 + 30));

    let mut kinds: BTreeMap<&'static str, usize> = BTreeMap::new();
    for tip in &tips {
        let condition = advisor.parse(&tip.rule);
        *kinds.entry(condition.kind()).or_default() += 1;
        println!(
            "  {:<8}  {:<width$}  {:<14}  {}",
            tip.rowid.to_string(),
            tip.rule,
            advisor.categorize(&tip.rule).as_str(),
            condition,
            width = max_rule
        );
    }

    println!("\n{} rule(s):", tips.len());
    for (kind, count) in &kinds {
        println!("  {:<26} {}", kind, count);
    }

    let never = kinds.get("unrecognized").copied().unwrap_or(0)
        + kinds.get("five_key_match").copied().unwrap_or(0);
    if never > 0 {
        println!("\nWarnings:");
        println!("  - {never} rule(s) can never match any profile");
    }

    Ok(())
}

pub fn vocabulary(advisor: &Advisor) -> Result<(), KilowiseError> {
    let vocabulary = advisor.vocabulary();

    println!("Attributes:\n");
    for attribute in vocabulary.attributes() {
        println!("  {attribute}");
    }

    println!("\nOperators:\n");
    for op in vocabulary.operators() {
        println!("  {:<16} {}", op.phrase, op.operator);
    }

    println!("\nFixed rules:\n");
    println!("  Always");
    println!("  If Insulation Pre 1992");
    println!("  If match on All five Keys   (never matches)");

    Ok(())
}
