// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Group state machine
//!
//! A group moves `Idle → SearchingGate → Boarding → Releasing → Done`.
//! Transitions are pure: they return the next state plus the events to emit.
//! Inputs that do not apply to the current phase are ignored.

use crate::error::ConfigError;
use crate::event::BoardingEvent;
use crate::id::{GateId, GroupId};
use serde::{Deserialize, Serialize};

/// Lifecycle phase of a boarding group
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupPhase {
    Idle,
    SearchingGate,
    Boarding,
    Releasing,
    Done,
}

impl std::fmt::Display for GroupPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GroupPhase::Idle => "idle",
            GroupPhase::SearchingGate => "searching_gate",
            GroupPhase::Boarding => "boarding",
            GroupPhase::Releasing => "releasing",
            GroupPhase::Done => "done",
        };
        write!(f, "{}", name)
    }
}

/// Inputs that drive group transitions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupInput {
    /// The driver started the group
    Start,
    /// A scan of the pool found a gate that looked free
    GateDiscovered { gate: GateId },
    /// The group now holds the gate
    GateAcquired { gate: GateId },
    /// The last passenger arrived at the barrier
    BarrierFired,
    /// Every passenger task has been joined
    Joined,
}

/// A boarding group: a cohort that needs one gate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub id: GroupId,
    pub size: usize,
    /// Bound once, when the gate is acquired
    pub gate: Option<GateId>,
    pub phase: GroupPhase,
}

impl Group {
    pub fn new(id: GroupId, size: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::EmptyCohort { group: id });
        }
        if u32::try_from(size).is_err() {
            return Err(ConfigError::CohortTooLarge { group: id, size });
        }
        Ok(Self {
            id,
            size,
            gate: None,
            phase: GroupPhase::Idle,
        })
    }

    /// Whether the group currently owns its gate
    pub fn holds_gate(&self) -> bool {
        self.phase == GroupPhase::Boarding
    }

    pub fn is_done(&self) -> bool {
        self.phase == GroupPhase::Done
    }

    /// Pure state transition function
    pub fn transition(&self, input: GroupInput) -> (Group, Vec<BoardingEvent>) {
        let mut next = self.clone();
        let mut events = Vec::new();

        match (self.phase, input) {
            (GroupPhase::Idle, GroupInput::Start) => {
                next.phase = GroupPhase::SearchingGate;
                events.push(BoardingEvent::GroupSearching {
                    group: self.id,
                    size: self.size,
                });
            }

            (GroupPhase::SearchingGate, GroupInput::GateDiscovered { gate }) => {
                events.push(BoardingEvent::GateDiscovered {
                    group: self.id,
                    gate,
                });
            }

            (GroupPhase::SearchingGate, GroupInput::GateAcquired { gate }) => {
                next.phase = GroupPhase::Boarding;
                next.gate = Some(gate);
                events.push(BoardingEvent::BoardingStarted {
                    group: self.id,
                    gate,
                    size: self.size,
                });
            }

            (GroupPhase::Boarding, GroupInput::BarrierFired) => {
                next.phase = GroupPhase::Releasing;
                if let Some(gate) = self.gate {
                    events.push(BoardingEvent::GateReleased {
                        group: self.id,
                        gate,
                    });
                }
            }

            (GroupPhase::Releasing, GroupInput::Joined) => {
                next.phase = GroupPhase::Done;
                if let Some(gate) = self.gate {
                    events.push(BoardingEvent::GroupFinished {
                        group: self.id,
                        gate,
                    });
                }
            }

            _ => {
                // Not applicable in this phase
            }
        }

        (next, events)
    }
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
