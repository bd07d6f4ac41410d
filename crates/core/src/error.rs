// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for gate coordination

use crate::id::{GateId, GroupId, PassengerId};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Rejected configuration; raised before any gate is touched
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("group {group} has an empty cohort; size must be at least 1")]
    EmptyCohort { group: GroupId },
    #[error("group {group} has {size} passengers; at most {} fit in one cohort", u32::MAX)]
    CohortTooLarge { group: GroupId, size: usize },
    #[error("gate pool must contain at least one gate")]
    NoGates,
    #[error("boarding delay range is inverted: min {min:?} > max {max:?}")]
    InvalidDelayRange { min: Duration, max: Duration },
    #[error("poll interval must be greater than zero")]
    ZeroPollInterval,
    #[error("max attempts must be at least 1 when set")]
    ZeroMaxAttempts,
    #[error("schedule entry {index} has an empty cohort; size must be at least 1")]
    EmptyScheduleEntry { index: usize },
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Misuse of a single gate
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("gate {0} released while already free")]
    DoubleRelease(GateId),
}

/// Misuse of a completion barrier
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BarrierError {
    #[error("barrier of size {size} received an arrival after it fired")]
    Overrun { size: usize },
}

/// Errors that end a group's boarding run
#[derive(Debug, Error)]
pub enum BoardingError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Gate(#[from] GateError),
    #[error(transparent)]
    Barrier(#[from] BarrierError),
    #[error("group {group} found no free gate after {attempts} attempts")]
    SearchExhausted { group: GroupId, attempts: u32 },
    #[error("group {group} passenger {passenger} failed: {reason}")]
    PassengerFailed {
        group: GroupId,
        passenger: PassengerId,
        reason: String,
    },
    #[error("group {group} aborted: {reason}")]
    Aborted { group: GroupId, reason: String },
    #[error("group {group} finished boarding without releasing its gate")]
    ReleaseMissing { group: GroupId },
}
