pub mod categories;
pub mod profile;
pub mod rules;
pub mod tips;

use clap::Args;
use kilowise_core::error::KilowiseError;
use kilowise_core::grammar::Vocabulary;
use kilowise_core::model::{Profile, Tip};
use kilowise_core::Advisor;
use std::path::{Path, PathBuf};

/// Where the customer profile comes from.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct ProfileArgs {
    /// JSON profile file
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Customer id to build a simulated profile for
    #[arg(long, value_name = "ID")]
    pub customer: Option<String>,
}

impl ProfileArgs {
    pub fn load(&self) -> Result<Profile, KilowiseError> {
        match (&self.profile, &self.customer) {
            (Some(path), _) => kilowise_core::profile::load_profile(path),
            (None, Some(id)) => Ok(kilowise_core::profile::simulate::simulated_profile(id)),
            (None, None) => Err(KilowiseError::ProfileLoad {
                path: PathBuf::new(),
                reason: "no profile source given (use --profile or --customer)".into(),
            }),
        }
    }

    /// Short description of the source for headings.
    pub fn describe(&self) -> String {
        match (&self.profile, &self.customer) {
            (Some(path), _) => path.display().to_string(),
            (None, Some(id)) => format!("customer {id} (simulated)"),
            (None, None) => "unknown".into(),
        }
    }
}

#[derive(Args)]
pub struct CatalogArgs {
    /// JSON tip catalog (default: bundled sample catalog)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,
}

impl CatalogArgs {
    pub fn load(&self) -> Result<Vec<Tip>, KilowiseError> {
        match &self.catalog {
            Some(path) => kilowise_core::catalog::load_catalog(path),
            None => kilowise_core::catalog::builtin::sample_catalog(),
        }
    }
}

pub fn load_advisor(vocabulary: Option<&Path>) -> Result<Advisor, KilowiseError> {
    match vocabulary {
        Some(path) => Ok(Advisor::new(Vocabulary::load(path)?)),
        None => Ok(Advisor::default()),
    }
}
