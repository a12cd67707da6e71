use kilowise_core::error::KilowiseError;

use super::ProfileArgs;
use crate::output;

pub fn run(profile_args: &ProfileArgs, output_format: &str) -> Result<(), KilowiseError> {
    let profile = profile_args.load()?;

    match output_format {
        "json" => output::json::print(&profile)?,
        _ => output::table::print_profile(&profile_args.describe(), &profile),
    }

    Ok(())
}
