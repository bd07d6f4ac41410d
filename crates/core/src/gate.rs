// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A single exclusively-held boarding gate
//!
//! The gate is a binary semaphore: `Free` or `Held`. Blocked acquirers park on
//! a [`Notify`] and are woken one at a time as the gate is released.

use crate::error::GateError;
use crate::id::GateId;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Gate state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    /// Gate is available
    Free,
    /// Gate is held by exactly one group
    Held,
}

/// An exclusive resource that at most one group may hold at a time
#[derive(Debug)]
pub struct Gate {
    id: GateId,
    state: Mutex<GateState>,
    /// Wakes one blocked `acquire` per release
    freed: Notify,
    /// Shared with the owning pool; wakes every searcher on release
    vacancy: Arc<Notify>,
}

impl Gate {
    pub fn new(id: GateId) -> Self {
        Self::with_vacancy(id, Arc::new(Notify::new()))
    }

    pub(crate) fn with_vacancy(id: GateId, vacancy: Arc<Notify>) -> Self {
        Self {
            id,
            state: Mutex::new(GateState::Free),
            freed: Notify::new(),
            vacancy,
        }
    }

    pub fn id(&self) -> GateId {
        self.id
    }

    /// Point-in-time snapshot of the gate state
    pub fn state(&self) -> GateState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_free(&self) -> bool {
        self.state() == GateState::Free
    }

    /// Claim the gate if it is free, without waiting
    ///
    /// Exactly one of several racing callers observes `true`.
    pub fn try_acquire(&self) -> bool {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match *state {
            GateState::Free => {
                *state = GateState::Held;
                true
            }
            GateState::Held => false,
        }
    }

    /// Wait until the gate is free and claim it
    pub async fn acquire(&self) {
        loop {
            // Register for the wakeup before checking, so a release between
            // the check and the await is not lost.
            let notified = self.freed.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.try_acquire() {
                return;
            }

            tracing::trace!(gate = %self.id, "gate held, waiting for release");
            notified.await;
        }
    }

    /// Return the gate to `Free`, waking at most one blocked acquirer
    pub fn release(&self) -> Result<(), GateError> {
        {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            if *state == GateState::Free {
                return Err(GateError::DoubleRelease(self.id));
            }
            *state = GateState::Free;
        }

        self.freed.notify_one();
        self.vacancy.notify_waiters();
        Ok(())
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
