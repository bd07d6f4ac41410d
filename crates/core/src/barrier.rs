// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-use barrier with a completion action
//!
//! The last of `size` arrivals runs the action inline, exactly once, before
//! any other arrival is allowed to return.

use crate::error::BarrierError;
use std::sync::Mutex;
use tokio::sync::watch;

type Action<R> = Box<dyn FnOnce() -> R + Send>;

/// Outcome of one arrival at a [`CompletionBarrier`]
#[derive(Debug, PartialEq, Eq)]
pub enum Arrival<R> {
    /// This arrival completed the barrier and ran the action
    Leader(R),
    /// Another arrival ran the action; it has finished
    Follower,
}

impl<R> Arrival<R> {
    pub fn is_leader(&self) -> bool {
        matches!(self, Arrival::Leader(_))
    }

    pub fn into_outcome(self) -> Option<R> {
        match self {
            Arrival::Leader(outcome) => Some(outcome),
            Arrival::Follower => None,
        }
    }
}

struct Tally<R> {
    arrived: usize,
    action: Option<Action<R>>,
}

enum Role<R> {
    Leader(Action<R>),
    Follower,
}

/// Rendezvous for a fixed cohort that fires a single action on completion
pub struct CompletionBarrier<R> {
    size: usize,
    tally: Mutex<Tally<R>>,
    fired: watch::Sender<bool>,
}

impl<R> CompletionBarrier<R> {
    pub fn new(size: usize, action: impl FnOnce() -> R + Send + 'static) -> Self {
        let (fired, _) = watch::channel(false);
        Self {
            size,
            tally: Mutex::new(Tally {
                arrived: 0,
                action: Some(Box::new(action)),
            }),
            fired,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of arrivals registered so far
    pub fn arrived(&self) -> usize {
        self.tally.lock().unwrap_or_else(|e| e.into_inner()).arrived
    }

    /// Whether the completion action has finished
    pub fn is_complete(&self) -> bool {
        *self.fired.borrow()
    }

    /// Withdraw the action if no arrival has taken it yet
    ///
    /// Returns `true` when the action will never run. An arrival that would
    /// have led afterwards gets [`BarrierError::Overrun`].
    pub fn cancel(&self) -> bool {
        let mut tally = self.tally.lock().unwrap_or_else(|e| e.into_inner());
        tally.action.take().is_some()
    }

    /// Register an arrival and wait for the cohort to complete
    ///
    /// The `size`-th arrival runs the action and returns its result as
    /// [`Arrival::Leader`]. Earlier arrivals return [`Arrival::Follower`] only
    /// once the action has returned.
    pub async fn arrive(&self) -> Result<Arrival<R>, BarrierError> {
        let role = {
            let mut tally = self.tally.lock().unwrap_or_else(|e| e.into_inner());
            if tally.arrived >= self.size {
                return Err(BarrierError::Overrun { size: self.size });
            }
            tally.arrived += 1;
            match (tally.arrived == self.size, tally.action.take()) {
                (true, Some(action)) => Role::Leader(action),
                (false, action) => {
                    tally.action = action;
                    Role::Follower
                }
                (true, None) => return Err(BarrierError::Overrun { size: self.size }),
            }
        };

        match role {
            Role::Leader(action) => {
                let outcome = action();
                self.fired.send_replace(true);
                Ok(Arrival::Leader(outcome))
            }
            Role::Follower => {
                let mut fired = self.fired.subscribe();
                // The sender lives in `self`, so this only returns once fired.
                let _ = fired.wait_for(|done| *done).await;
                Ok(Arrival::Follower)
            }
        }
    }
}

#[cfg(test)]
#[path = "barrier_tests.rs"]
mod tests;
