// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulation configuration
//!
//! Loaded from TOML; every field has a default so an empty file is valid.

use crate::error::ConfigError;
use crate::pacing::RandomPacing;
use crate::pool::Discovery;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Group sizes used by the automated simulation when none are given
pub const DEFAULT_SCHEDULE: [usize; 5] = [5, 4, 6, 3, 7];

/// How a group looks for a free gate
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchPolicy {
    /// Longest wait between two scans of the pool
    #[serde(with = "humantime_serde")]
    pub poll_interval: Duration,
    /// Give up after this many empty scans; unbounded when unset
    pub max_attempts: Option<u32>,
    pub discovery: Discovery,
}

impl SearchPolicy {
    pub fn new() -> Self {
        Self {
            poll_interval: Duration::from_millis(100),
            max_attempts: None,
            discovery: Discovery::Probe,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    pub fn with_discovery(mut self, discovery: Discovery) -> Self {
        self.discovery = discovery;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval.is_zero() {
            return Err(ConfigError::ZeroPollInterval);
        }
        if self.max_attempts == Some(0) {
            return Err(ConfigError::ZeroMaxAttempts);
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// Range for random passenger boarding delays
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PacingConfig {
    #[serde(with = "humantime_serde")]
    pub min_delay: Duration,
    #[serde(with = "humantime_serde")]
    pub max_delay: Duration,
}

impl PacingConfig {
    pub fn to_pacing(&self) -> Result<RandomPacing, ConfigError> {
        RandomPacing::new(self.min_delay, self.max_delay)
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            min_delay: RandomPacing::DEFAULT_MIN,
            max_delay: RandomPacing::DEFAULT_MAX,
        }
    }
}

/// Everything needed to run a simulation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Number of gates in the pool
    pub gates: u32,
    /// Group sizes for the automated simulation
    pub schedule: Vec<usize>,
    pub search: SearchPolicy,
    pub pacing: PacingConfig,
}

impl SimulationConfig {
    /// Read and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate TOML content
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gates == 0 {
            return Err(ConfigError::NoGates);
        }
        if let Some(index) = self.schedule.iter().position(|&size| size == 0) {
            return Err(ConfigError::EmptyScheduleEntry { index });
        }
        self.search.validate()?;
        self.pacing.to_pacing()?;
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gates: 3,
            schedule: DEFAULT_SCHEDULE.to_vec(),
            search: SearchPolicy::default(),
            pacing: PacingConfig::default(),
        }
    }
}

#[cfg(test)]
#[path = "simulation_tests.rs"]
mod tests;
