//! Reload job configuration with documented constants
//!
//! The reload priority sits between the two tiers of the loadout job so that
//! fetching ammo for the loadout wins when urgent and reloading wins otherwise.

use crate::core::error::{ReloadError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for the reload job giver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReloadConfig {
    /// Priority offered to the scheduler when a reload is needed
    ///
    /// Must stay below `loadout_high_priority` so an urgent loadout fetch
    /// runs first, and above `loadout_low_priority`.
    pub reload_priority: f32,

    /// High tier of the "update loadout" job
    pub loadout_high_priority: f32,

    /// Low tier of the "update loadout" job
    pub loadout_low_priority: f32,

    /// Minimum agent count before batch evaluation goes parallel
    ///
    /// Below this, thread overhead exceeds the cost of the checks themselves.
    pub parallel_threshold: usize,
}

impl Default for ReloadConfig {
    fn default() -> Self {
        Self {
            reload_priority: 9.1,
            loadout_high_priority: 9.2,
            loadout_low_priority: 3.0,
            parallel_threshold: 256,
        }
    }
}

impl ReloadConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let priorities = [
            ("reload_priority", self.reload_priority),
            ("loadout_high_priority", self.loadout_high_priority),
            ("loadout_low_priority", self.loadout_low_priority),
        ];
        for (name, value) in priorities {
            if !value.is_finite() || value <= 0.0 {
                return Err(ReloadError::InvalidConfig(format!(
                    "{} ({}) must be a positive finite number",
                    name, value
                )));
            }
        }

        if self.reload_priority >= self.loadout_high_priority {
            return Err(ReloadError::InvalidConfig(format!(
                "reload_priority ({}) should be < loadout_high_priority ({})",
                self.reload_priority, self.loadout_high_priority
            )));
        }

        if self.reload_priority <= self.loadout_low_priority {
            return Err(ReloadError::InvalidConfig(format!(
                "reload_priority ({}) should be > loadout_low_priority ({})",
                self.reload_priority, self.loadout_low_priority
            )));
        }

        Ok(())
    }
}

/// Load and validate a config from a TOML file
pub fn load_config(path: &Path) -> Result<ReloadConfig> {
    let contents = fs::read_to_string(path)?;
    let config: ReloadConfig = toml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}
