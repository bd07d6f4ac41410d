// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed collection of gates with free-gate discovery

use crate::error::ConfigError;
use crate::gate::Gate;
use crate::id::GateId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::futures::Notified;
use tokio::sync::Notify;

/// How a searching group turns "a gate looks free" into "I hold a gate"
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discovery {
    /// Probe for a free gate, put it back, then block on `acquire`.
    /// Another group may take the gate in between; the searcher then queues.
    #[default]
    Probe,
    /// Keep the first gate that `try_acquire` succeeds on.
    Claim,
}

impl std::str::FromStr for Discovery {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "probe" => Ok(Discovery::Probe),
            "claim" => Ok(Discovery::Claim),
            other => Err(format!(
                "unknown discovery mode '{}' (expected 'probe' or 'claim')",
                other
            )),
        }
    }
}

impl std::fmt::Display for Discovery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Discovery::Probe => write!(f, "probe"),
            Discovery::Claim => write!(f, "claim"),
        }
    }
}

/// An ordered, fixed-size set of gates shared by every group
///
/// Membership never changes after construction, so the pool itself needs no
/// locking; all mutation goes through the gates.
#[derive(Debug)]
pub struct GatePool {
    gates: Vec<Arc<Gate>>,
    vacancy: Arc<Notify>,
}

impl GatePool {
    /// Create `count` gates numbered `1..=count`
    pub fn new(count: u32) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::NoGates);
        }

        let vacancy = Arc::new(Notify::new());
        let gates = (1..=count)
            .map(|id| Arc::new(Gate::with_vacancy(GateId(id), Arc::clone(&vacancy))))
            .collect();

        Ok(Self { gates, vacancy })
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn gates(&self) -> &[Arc<Gate>] {
        &self.gates
    }

    pub fn gate(&self, id: GateId) -> Option<&Arc<Gate>> {
        let index = usize::try_from(id.0).ok()?.checked_sub(1)?;
        self.gates.get(index)
    }

    /// Number of gates free at this instant
    pub fn free_count(&self) -> usize {
        self.gates.iter().filter(|g| g.is_free()).count()
    }

    /// Find a gate that was free a moment ago, without holding it
    ///
    /// Each gate is probed with `try_acquire`; the first success is released
    /// straight away and returned. The caller must still `acquire` it and may
    /// have to wait if another group gets there first. Returns `None` with no
    /// state change when every gate is held.
    pub fn find_free_and_acquire(&self) -> Option<Arc<Gate>> {
        for gate in &self.gates {
            if !gate.try_acquire() {
                continue;
            }
            match gate.release() {
                Ok(()) => return Some(Arc::clone(gate)),
                Err(e) => {
                    tracing::error!(gate = %gate.id(), error = %e, "probe release failed");
                }
            }
        }
        None
    }

    /// Find a free gate and keep it held
    pub fn find_and_claim(&self) -> Option<Arc<Gate>> {
        self.gates.iter().find(|g| g.try_acquire()).cloned()
    }

    /// Discover a gate using the given mode
    pub fn find(&self, discovery: Discovery) -> Option<Arc<Gate>> {
        match discovery {
            Discovery::Probe => self.find_free_and_acquire(),
            Discovery::Claim => self.find_and_claim(),
        }
    }

    /// A future that resolves on the next release of any gate in the pool
    ///
    /// Call `enable` on the pinned future before scanning the pool so a release
    /// during the scan still wakes it.
    pub fn vacancy(&self) -> Notified<'_> {
        self.vacancy.notified()
    }

    /// Wait for any gate to be released, up to `timeout`
    ///
    /// Returns `true` if woken by a release, `false` on timeout.
    pub async fn wait_for_vacancy(&self, timeout: Duration) -> bool {
        tokio::time::timeout(timeout, self.vacancy.notified())
            .await
            .is_ok()
    }
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
