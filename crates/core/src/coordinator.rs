// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Group coordinator
//!
//! Runs one group end to end: search the pool for a gate, hold it, board the
//! cohort behind a completion barrier, and release the gate from the barrier
//! action once the last passenger has arrived.

use crate::barrier::{Arrival, CompletionBarrier};
use crate::config::SearchPolicy;
use crate::error::{BoardingError, ConfigError, GateError};
use crate::event::BoardingEvent;
use crate::gate::Gate;
use crate::group::{Group, GroupInput};
use crate::id::{GateId, GroupId, PassengerId};
use crate::pacing::Pacing;
use crate::passenger::Passenger;
use crate::pool::{Discovery, GatePool};
use crate::sink::LogSink;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Result of the barrier action, handed back to the leading passenger
type ReleaseOutcome = Result<(), GateError>;

/// Summary of a group that finished boarding
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupReport {
    pub group: GroupId,
    pub gate: GateId,
    pub size: usize,
    /// Passengers that arrived at the barrier
    pub arrivals: usize,
    /// Pool scans made before a gate was found
    pub search_attempts: u32,
    /// Time from start until the gate was held
    #[serde(with = "humantime_serde")]
    pub searched: Duration,
    /// Time from holding the gate until every passenger was joined
    #[serde(with = "humantime_serde")]
    pub boarded: Duration,
}

impl std::fmt::Display for GroupReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Group {}: {} of {} passengers boarded at Gate {} (searched {}ms over {} attempts, boarded in {}ms)",
            self.group,
            self.arrivals,
            self.size,
            self.gate,
            self.searched.as_millis(),
            self.search_attempts,
            self.boarded.as_millis()
        )
    }
}

/// Coordinates groups against a shared gate pool
#[derive(Clone)]
pub struct Coordinator<P: Pacing> {
    pool: Arc<GatePool>,
    sink: Arc<dyn LogSink>,
    pacing: P,
    policy: SearchPolicy,
}

impl<P: Pacing> Coordinator<P> {
    pub fn new(pool: Arc<GatePool>, sink: Arc<dyn LogSink>, pacing: P) -> Self {
        Self {
            pool,
            sink,
            pacing,
            policy: SearchPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn pool(&self) -> &Arc<GatePool> {
        &self.pool
    }

    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    /// Validate the group and run it as a background task
    ///
    /// An empty cohort is rejected here, before any gate is touched. The
    /// returned handle may be awaited or dropped to detach the group.
    pub fn start_group(
        &self,
        group: GroupId,
        size: usize,
    ) -> Result<JoinHandle<Result<GroupReport, BoardingError>>, ConfigError> {
        let group = Group::new(group, size)?;
        let coordinator = self.clone();
        Ok(tokio::spawn(async move { coordinator.run(group).await }))
    }

    /// Run a group to completion on the current task
    pub async fn run_group(&self, group: GroupId, size: usize) -> Result<GroupReport, BoardingError> {
        let group = Group::new(group, size)?;
        self.run(group).await
    }

    async fn run(&self, group: Group) -> Result<GroupReport, BoardingError> {
        let started = Instant::now();
        let group = self.apply(&group, GroupInput::Start);

        let (gate, search_attempts) = self.search(&group).await?;
        let searched = started.elapsed();
        let group = self.apply(&group, GroupInput::GateAcquired { gate: gate.id() });
        info!(group = %group.id, gate = %gate.id(), size = group.size, "group boarding");

        let boarding_started = Instant::now();
        let (group, arrivals) = self.board(group, Arc::clone(&gate)).await?;
        let group = self.apply(&group, GroupInput::Joined);
        info!(group = %group.id, gate = %gate.id(), arrivals, "group finished");

        Ok(GroupReport {
            group: group.id,
            gate: gate.id(),
            size: group.size,
            arrivals,
            search_attempts,
            searched,
            boarded: boarding_started.elapsed(),
        })
    }

    /// Scan the pool until a gate is held by this group
    async fn search(&self, group: &Group) -> Result<(Arc<Gate>, u32), BoardingError> {
        let mut attempts = 0u32;
        loop {
            let vacancy = self.pool.vacancy();
            tokio::pin!(vacancy);
            vacancy.as_mut().enable();

            attempts += 1;
            if let Some(gate) = self.pool.find(self.policy.discovery) {
                self.apply(group, GroupInput::GateDiscovered { gate: gate.id() });
                if self.policy.discovery == Discovery::Probe {
                    debug!(group = %group.id, gate = %gate.id(), "acquiring discovered gate");
                    gate.acquire().await;
                }
                return Ok((gate, attempts));
            }

            if self.policy.max_attempts.is_some_and(|max| attempts >= max) {
                warn!(group = %group.id, attempts, "no free gate, giving up");
                return Err(BoardingError::SearchExhausted {
                    group: group.id,
                    attempts,
                });
            }

            debug!(group = %group.id, attempts, "no free gate, backing off");
            // Either a gate frees up or the interval passes; both mean rescan.
            let _ = tokio::time::timeout(self.policy.poll_interval, vacancy).await;
        }
    }

    /// Board every passenger; the barrier action releases the gate
    async fn board(&self, group: Group, gate: Arc<Gate>) -> Result<(Group, usize), BoardingError> {
        let group_id = group.id;
        let gate_id = gate.id();
        let size = group.size;
        let state = Arc::new(Mutex::new(group));

        let barrier: Arc<CompletionBarrier<ReleaseOutcome>> = {
            let state = Arc::clone(&state);
            let sink = Arc::clone(&self.sink);
            let gate = Arc::clone(&gate);
            Arc::new(CompletionBarrier::new(size, move || {
                let mut group = state.lock().unwrap_or_else(|e| e.into_inner());
                let (next, events) = group.transition(GroupInput::BarrierFired);
                *group = next;
                for event in &events {
                    sink.emit(event);
                }
                gate.release()
            }))
        };

        // From here until the barrier action runs, the gate is ours to give back.
        let _hold = HoldGuard {
            group: group_id,
            gate: Arc::clone(&gate),
            barrier: Arc::clone(&barrier),
        };

        let cohort = u32::try_from(size)
            .map_err(|_| ConfigError::CohortTooLarge { group: group_id, size })?;
        let mut passengers = JoinSet::new();
        let mut task_passengers = HashMap::new();
        for number in 1..=cohort {
            let passenger_id = PassengerId(number);
            let mut passenger = Passenger::new(passenger_id, group_id, gate_id);
            let pacing = self.pacing.clone();
            let sink = Arc::clone(&self.sink);
            let barrier = Arc::clone(&barrier);
            let handle = passengers.spawn(async move {
                passenger.board(&pacing, sink.as_ref(), &barrier).await
            });
            task_passengers.insert(handle.id(), passenger_id);
        }

        let mut arrivals = 0usize;
        let mut release: Option<ReleaseOutcome> = None;
        let mut failure: Option<BoardingError> = None;
        while let Some(joined) = passengers.join_next().await {
            match joined {
                Ok(Ok(arrival)) => {
                    arrivals += 1;
                    if let Arrival::Leader(outcome) = arrival {
                        release = Some(outcome);
                    }
                }
                Ok(Err(e)) => {
                    if failure.is_none() {
                        failure = Some(e.into());
                        passengers.abort_all();
                    }
                }
                Err(e) => {
                    if failure.is_none() {
                        let passenger = task_passengers
                            .get(&e.id())
                            .copied()
                            .unwrap_or(PassengerId(0));
                        failure = Some(BoardingError::PassengerFailed {
                            group: group_id,
                            passenger,
                            reason: e.to_string(),
                        });
                        passengers.abort_all();
                    }
                }
            }
        }

        if let Some(failure) = failure {
            warn!(group = %group_id, gate = %gate_id, error = %failure, "boarding aborted");
            return Err(failure);
        }

        match release {
            Some(outcome) => outcome?,
            None => return Err(BoardingError::ReleaseMissing { group: group_id }),
        }

        let group = state.lock().unwrap_or_else(|e| e.into_inner()).clone();
        Ok((group, arrivals))
    }

    /// Apply a transition and emit its events
    fn apply(&self, group: &Group, input: GroupInput) -> Group {
        let (next, events) = group.transition(input);
        self.emit_all(&events);
        next
    }

    fn emit_all(&self, events: &[BoardingEvent]) {
        for event in events {
            self.sink.emit(event);
        }
    }
}

/// Gives the gate back if boarding stops before the barrier action runs
///
/// Covers passenger failures as well as the boarding future being dropped,
/// which happens when the group task is aborted. Cancelling the barrier
/// first means the action and this guard never both release.
struct HoldGuard {
    group: GroupId,
    gate: Arc<Gate>,
    barrier: Arc<CompletionBarrier<ReleaseOutcome>>,
}

impl Drop for HoldGuard {
    fn drop(&mut self) {
        if !self.barrier.cancel() {
            return;
        }
        warn!(group = %self.group, gate = %self.gate.id(), "boarding stopped early, releasing gate");
        if let Err(e) = self.gate.release() {
            warn!(group = %self.group, error = %e, "releasing gate after stopped boarding");
        }
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
