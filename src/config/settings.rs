//! User settings for barbertill
//!
//! Holds the barber roster and the shop's income-split policy. Both are
//! business-policy configuration, kept out of the aggregation code so the
//! numbers can change without touching the arithmetic.

use serde::{Deserialize, Serialize};

use super::paths::TillPaths;
use crate::error::TillError;
use crate::models::Money;

/// How gross takings are divided between a barber and the shop owner
///
/// The barber share is expressed in basis points (6000 = 60%). The owner
/// side is computed as the remainder of gross plus the packet surcharges,
/// so the two cuts always sum to `gross + packets * surcharge` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitPolicy {
    /// Barber commission in basis points of gross
    #[serde(default = "default_barber_share_bp")]
    pub barber_share_bp: u32,

    /// Owner surcharge per color packet consumed
    #[serde(default = "default_packet_surcharge")]
    pub packet_surcharge: Money,
}

fn default_barber_share_bp() -> u32 {
    6000
}

fn default_packet_surcharge() -> Money {
    Money::from_units(250)
}

impl Default for SplitPolicy {
    fn default() -> Self {
        Self {
            barber_share_bp: default_barber_share_bp(),
            packet_surcharge: default_packet_surcharge(),
        }
    }
}

impl SplitPolicy {
    /// The barber's commission on gross takings, rounded half-up to the cent
    pub fn barber_cut(&self, gross: Money) -> Money {
        let cents = gross.cents() as i128 * self.barber_share_bp as i128;
        Money::from_cents(((cents + 5_000) / 10_000) as i64)
    }

    /// The owner's share: remainder of gross plus per-packet surcharges
    pub fn owner_cut(&self, gross: Money, packets: u32) -> Money {
        gross - self.barber_cut(gross) + self.packet_surcharge * packets
    }
}

/// User settings for barbertill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// The shop's fixed staff roster; the ledger keeps one sequence per name
    #[serde(default = "default_roster")]
    pub barbers: Vec<String>,

    /// Income-split policy
    #[serde(default)]
    pub split: SplitPolicy,
}

fn default_schema_version() -> u32 {
    1
}

fn default_roster() -> Vec<String> {
    (1..=4).map(|n| format!("Barber{}", n)).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            barbers: default_roster(),
            split: SplitPolicy::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TillPaths) -> Result<Self, TillError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TillError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| TillError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TillPaths) -> Result<(), TillError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TillError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| TillError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.barbers.len(), 4);
        assert_eq!(settings.barbers[0], "Barber1");
        assert_eq!(settings.split.barber_share_bp, 6000);
        assert_eq!(settings.split.packet_surcharge, Money::from_units(250));
    }

    #[test]
    fn test_split_policy_worked_example() {
        // 800.00 gross with one packet: 480.00 to the barber, 570.00 to the owner
        let policy = SplitPolicy::default();
        let gross = Money::from_units(800);

        assert_eq!(policy.barber_cut(gross), Money::from_units(480));
        assert_eq!(policy.owner_cut(gross, 1), Money::from_units(570));
    }

    #[test]
    fn test_split_conserves_every_cent() {
        let policy = SplitPolicy::default();

        for cents in [1, 33, 101, 12_345, 80_000] {
            let gross = Money::from_cents(cents);
            let total = policy.barber_cut(gross) + policy.owner_cut(gross, 3);
            assert_eq!(total, gross + policy.packet_surcharge * 3);
        }
    }

    #[test]
    fn test_barber_cut_rounds_half_up() {
        // 0.01 at 60% is 0.006, which rounds to a whole cent
        let policy = SplitPolicy::default();
        assert_eq!(policy.barber_cut(Money::from_cents(1)), Money::from_cents(1));
        assert_eq!(policy.owner_cut(Money::from_cents(1), 0), Money::from_cents(0));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TillPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.barbers = vec!["Asha".into(), "Ravi".into()];
        settings.split.barber_share_bp = 5000;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.barbers, vec!["Asha".to_string(), "Ravi".to_string()]);
        assert_eq!(loaded.split.barber_share_bp, 5000);
    }

    #[test]
    fn test_load_missing_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TillPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.barbers, Settings::default().barbers);
    }
}
