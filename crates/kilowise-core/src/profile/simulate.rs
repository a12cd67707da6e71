//! Deterministic stand-in for a measurement backend: the same customer id always
//! yields the same profile.

use crate::model::{Profile, ProfileValue};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

const YES_NO: &[&str] = &["Yes", "No"];

/// First eight bytes of the id's SHA-256, big-endian. Stable across runs and platforms.
fn seed_for(customer_id: &str) -> u64 {
    let digest = Sha256::digest(customer_id.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}

fn pick(rng: &mut StdRng, options: &[&str]) -> ProfileValue {
    ProfileValue::from(options[rng.gen_range(0..options.len())])
}

/// Build a simulated profile for `customer_id`, keyed by rule attribute names.
pub fn simulated_profile(customer_id: &str) -> Profile {
    let mut rng = StdRng::seed_from_u64(seed_for(customer_id.trim()));

    let mut profile = Profile::new();
    profile.insert("user_type", pick(&mut rng, &["residential", "commercial", "res&com"]));
    profile.insert("Area Type", pick(&mut rng, &["Favorable", "Unfavorable", "Standard"]));
    for appliance in ["Freezer", "Dishwasher", "Dryer", "Washer", "Pool", "Hot Tub"] {
        profile.insert(appliance, pick(&mut rng, YES_NO));
    }
    let heater_months: i64 = if rng.gen_bool(0.5) {
        rng.gen_range(0..=6)
    } else {
        0
    };
    profile.insert("Pool Heater", heater_months);
    profile.insert("Rate Plan", pick(&mut rng, &["TOU", "Standard", "EV Rate"]));
    profile.insert("Insulation Pre 1992", rng.gen_bool(0.5));
    profile.insert("Programmable Thermostat", pick(&mut rng, YES_NO));
    profile.insert("CFLs", pick(&mut rng, &["All", "Some", "None"]));
    profile.insert("Cool", pick(&mut rng, YES_NO));
    profile.insert("Water Heater Electric", pick(&mut rng, YES_NO));
    profile.insert("Ducts", pick(&mut rng, &["No Ducts", "Standard Ducts", "Leaky Ducts"]));

    tracing::debug!(customer_id, "simulated profile");
    profile
}
