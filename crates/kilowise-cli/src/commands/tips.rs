use kilowise_core::error::KilowiseError;
use kilowise_core::model::Category;
use kilowise_core::suitability::{AreaType, AREA_TYPE_ATTRIBUTE};
use kilowise_core::Advisor;

use super::{CatalogArgs, ProfileArgs};
use crate::output;

pub fn run(
    advisor: &Advisor,
    category: &str,
    profile_args: &ProfileArgs,
    catalog_args: &CatalogArgs,
    area_filter: bool,
    explain: bool,
    output_format: &str,
) -> Result<(), KilowiseError> {
    let category: Category = category.parse()?;
    let tips = catalog_args.load()?;
    let profile = profile_args.load()?;

    let selected = if area_filter {
        advisor.tips_for_area(&tips, &profile, category)
    } else {
        advisor.tips_for_category(&tips, &profile, category)
    };
    let area = area_filter.then(|| AreaType::from_profile_value(profile.get(AREA_TYPE_ATTRIBUTE)));

    match output_format {
        "json" if explain => {
            let assessments: Vec<_> = selected
                .iter()
                .map(|tip| advisor.assess_tip(tip, &profile))
                .collect();
            output::json::print(&assessments)?
        }
        "json" => output::json::print(&selected)?,
        _ => output::table::print_tips(advisor, category, area, &selected, &profile, explain),
    }

    Ok(())
}
