use kilowise_core::error::KilowiseError;
use kilowise_core::Advisor;

use super::{CatalogArgs, ProfileArgs};
use crate::output;

pub fn run(
    advisor: &Advisor,
    profile_args: &ProfileArgs,
    catalog_args: &CatalogArgs,
    output_format: &str,
) -> Result<(), KilowiseError> {
    let tips = catalog_args.load()?;
    let profile = profile_args.load()?;
    let index = advisor.build_index(&tips, &profile);

    match output_format {
        "json" => output::json::print(&index)?,
        _ => output::table::print_categories(&profile_args.describe(), &index),
    }

    Ok(())
}
