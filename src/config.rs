//! Analysis configuration
//!
//! Settings that control how an event's data is prepared before it is
//! analysed. Every field has a default, so an empty document is valid.
//!
//! ```rust
//! use splitscope::{AnalysisConfig, RepairMode};
//!
//! let config = AnalysisConfig::from_yaml_str("repair_mode: transfer\n")?;
//! assert_eq!(config.repair_mode, RepairMode::Transfer);
//! assert!(config.determine_time_losses);
//! # Ok::<(), splitscope::SplitsError>(())
//! ```

use crate::repair::DEFAULT_ABSURD_FINISH_MARGIN_SECS;
use crate::yaml_utils::strip_control_characters;
use crate::{Result, SplitsError};
use serde::{Deserialize, Serialize};

/// How the repaired time track is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "snake_case")]
pub enum RepairMode {
    /// Detect impossible times and mark them dubious.
    #[default]
    Repair,
    /// Copy the original times unchanged.
    Transfer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub repair_mode: RepairMode,
    pub determine_time_losses: bool,
    /// A non-completed result's finish time this many seconds or more below
    /// its last control time is treated as absurd.
    pub absurd_finish_margin_secs: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            repair_mode: RepairMode::Repair,
            determine_time_losses: true,
            absurd_finish_margin_secs: DEFAULT_ABSURD_FINISH_MARGIN_SECS,
        }
    }
}

impl AnalysisConfig {
    /// Parse a configuration from YAML. Missing fields take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cleaned = strip_control_characters(yaml);
        if cleaned.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: AnalysisConfig = serde_yaml_ng::from_str(&cleaned)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.absurd_finish_margin_secs.is_finite() || self.absurd_finish_margin_secs <= 0.0 {
            return Err(SplitsError::config(format!(
                "absurd_finish_margin_secs must be a positive number of seconds, got {}",
                self.absurd_finish_margin_secs
            )));
        }
        Ok(())
    }
}
