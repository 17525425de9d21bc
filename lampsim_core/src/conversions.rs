//! Mappings from `lampsim_config` tables into core types.

use crate::profile::LampProfile;

impl From<lampsim_config::Ratings> for LampProfile {
    fn from(r: lampsim_config::Ratings) -> Self {
        LampProfile {
            amps_needed: r.amps_needed,
            max_voltage: r.max_voltage,
            lumens: r.lumens,
        }
    }
}

impl From<&lampsim_config::Ratings> for LampProfile {
    fn from(r: &lampsim_config::Ratings) -> Self {
        LampProfile::from(*r)
    }
}
