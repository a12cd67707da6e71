pub mod simulate;

use crate::error::KilowiseError;
use crate::model::Profile;
use std::path::Path;

/// Load a profile from a JSON object file (`{"Freezer": "Yes", "Pool Heater": 3, ...}`).
pub fn load_profile(path: &Path) -> Result<Profile, KilowiseError> {
    let content = std::fs::read_to_string(path).map_err(|e| KilowiseError::ProfileLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let profile: Profile = serde_json::from_str(&content).map_err(|e| KilowiseError::ProfileLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), attributes = profile.len(), "loaded profile");
    Ok(profile)
}

/// Parse a profile from a JSON string.
pub fn parse_profile_str(json: &str) -> Result<Profile, KilowiseError> {
    Ok(serde_json::from_str(json)?)
}
