// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulation driver: assigns group ids and supervises group tasks

use crate::coordinator::{Coordinator, GroupReport};
use crate::error::{BoardingError, ConfigError};
use crate::id::{GroupId, GroupSequence};
use crate::pacing::Pacing;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Handle to a group running in the background
///
/// Dropping the handle detaches the group; it keeps running to completion.
#[derive(Debug)]
pub struct GroupHandle {
    group: GroupId,
    size: usize,
    handle: JoinHandle<Result<GroupReport, BoardingError>>,
}

impl GroupHandle {
    pub fn group(&self) -> GroupId {
        self.group
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the group to finish
    pub async fn join(self) -> Result<GroupReport, BoardingError> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) => Err(BoardingError::Aborted {
                group: self.group,
                reason: e.to_string(),
            }),
        }
    }

    /// Cancel the group task
    ///
    /// A group cancelled while boarding gives its gate back without emitting
    /// a release event; [`GroupHandle::join`] then reports it as aborted.
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Let the group run unobserved
    pub fn detach(self) {
        debug!(group = %self.group, "group detached");
    }
}

/// Issues groups against a shared coordinator
pub struct Driver<P: Pacing> {
    coordinator: Coordinator<P>,
    sequence: GroupSequence,
}

impl<P: Pacing> Driver<P> {
    pub fn new(coordinator: Coordinator<P>) -> Self {
        Self {
            coordinator,
            sequence: GroupSequence::new(),
        }
    }

    pub fn coordinator(&self) -> &Coordinator<P> {
        &self.coordinator
    }

    /// Start a group with the next id
    ///
    /// An empty cohort is rejected without consuming an id.
    pub fn submit(&self, size: usize) -> Result<GroupHandle, ConfigError> {
        if size == 0 {
            return Err(ConfigError::EmptyCohort {
                group: self.sequence.peek(),
            });
        }
        let group = self.sequence.next();
        let handle = self.coordinator.start_group(group, size)?;
        Ok(GroupHandle {
            group,
            size,
            handle,
        })
    }

    /// Run one group to completion before returning
    pub async fn run_sequential(&self, size: usize) -> Result<GroupReport, BoardingError> {
        if size == 0 {
            return Err(ConfigError::EmptyCohort {
                group: self.sequence.peek(),
            }
            .into());
        }
        let group = self.sequence.next();
        self.coordinator.run_group(group, size).await
    }

    /// Submit every group at once and wait for all of them
    ///
    /// Sizes are validated up front; nothing starts if any is zero. Every
    /// group is joined even after a failure, and the first failure is
    /// returned.
    pub async fn run_schedule(&self, sizes: &[usize]) -> Result<Vec<GroupReport>, BoardingError> {
        if let Some(index) = sizes.iter().position(|&size| size == 0) {
            return Err(ConfigError::EmptyScheduleEntry { index }.into());
        }

        let handles = sizes
            .iter()
            .map(|&size| self.submit(size))
            .collect::<Result<Vec<_>, _>>()?;

        let mut reports = Vec::with_capacity(handles.len());
        let mut first_error = None;
        for handle in handles {
            let group = handle.group();
            match handle.join().await {
                Ok(report) => reports.push(report),
                Err(e) => {
                    warn!(group = %group, error = %e, "group failed");
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(reports),
        }
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
