// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identifiers for gates, groups and passengers

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Stable identifier of a gate, numbered from 1 within its pool
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GateId(pub u32);

/// Driver-assigned sequence number of a boarding group
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub u64);

/// Index of a passenger within its group (1..=size)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassengerId(pub u32);

impl std::fmt::Display for GateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for PassengerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out unique, monotonically increasing group ids starting at 1
///
/// Clones share the same counter.
#[derive(Clone, Debug)]
pub struct GroupSequence {
    counter: Arc<AtomicU64>,
}

impl GroupSequence {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            counter: Arc::new(AtomicU64::new(first)),
        }
    }

    pub fn next(&self) -> GroupId {
        GroupId(self.counter.fetch_add(1, Ordering::SeqCst))
    }

    /// The id the next call to [`GroupSequence::next`] will return
    pub fn peek(&self) -> GroupId {
        GroupId(self.counter.load(Ordering::SeqCst))
    }
}

impl Default for GroupSequence {
    fn default() -> Self {
        Self::new()
    }
}
