// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Observations emitted while groups search for gates and board

use crate::id::{GateId, GroupId, PassengerId};
use serde::{Deserialize, Serialize};

/// Something observable that happened during a group's lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardingEvent {
    GroupSearching {
        group: GroupId,
        size: usize,
    },
    GateDiscovered {
        group: GroupId,
        gate: GateId,
    },
    BoardingStarted {
        group: GroupId,
        gate: GateId,
        size: usize,
    },
    PassengerBoarding {
        group: GroupId,
        passenger: PassengerId,
        gate: GateId,
    },
    PassengerFinished {
        group: GroupId,
        passenger: PassengerId,
        gate: GateId,
    },
    GateReleased {
        group: GroupId,
        gate: GateId,
    },
    GroupFinished {
        group: GroupId,
        gate: GateId,
    },
}

impl BoardingEvent {
    /// Stable dotted name, e.g. `gate:released`
    pub fn name(&self) -> &'static str {
        match self {
            BoardingEvent::GroupSearching { .. } => "group:searching",
            BoardingEvent::GateDiscovered { .. } => "gate:discovered",
            BoardingEvent::BoardingStarted { .. } => "boarding:started",
            BoardingEvent::PassengerBoarding { .. } => "passenger:boarding",
            BoardingEvent::PassengerFinished { .. } => "passenger:finished",
            BoardingEvent::GateReleased { .. } => "gate:released",
            BoardingEvent::GroupFinished { .. } => "group:finished",
        }
    }

    pub fn group(&self) -> GroupId {
        match self {
            BoardingEvent::GroupSearching { group, .. }
            | BoardingEvent::GateDiscovered { group, .. }
            | BoardingEvent::BoardingStarted { group, .. }
            | BoardingEvent::PassengerBoarding { group, .. }
            | BoardingEvent::PassengerFinished { group, .. }
            | BoardingEvent::GateReleased { group, .. }
            | BoardingEvent::GroupFinished { group, .. } => *group,
        }
    }

    /// The gate involved, if the group has one yet
    pub fn gate(&self) -> Option<GateId> {
        match self {
            BoardingEvent::GroupSearching { .. } => None,
            BoardingEvent::GateDiscovered { gate, .. }
            | BoardingEvent::BoardingStarted { gate, .. }
            | BoardingEvent::PassengerBoarding { gate, .. }
            | BoardingEvent::PassengerFinished { gate, .. }
            | BoardingEvent::GateReleased { gate, .. }
            | BoardingEvent::GroupFinished { gate, .. } => Some(*gate),
        }
    }
}

impl std::fmt::Display for BoardingEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardingEvent::GroupSearching { group, size } => {
                write!(f, "Group {} searching for a free gate ({} passengers)", group, size)
            }
            BoardingEvent::GateDiscovered { group, gate } => {
                write!(f, "Group {} found Gate {} free", group, gate)
            }
            BoardingEvent::BoardingStarted { group, gate, .. } => {
                write!(f, "Group {} started boarding at Gate {}", group, gate)
            }
            BoardingEvent::PassengerBoarding {
                group,
                passenger,
                gate,
            } => write!(
                f,
                "Group {} Passenger {} boarding at Gate {}",
                group, passenger, gate
            ),
            BoardingEvent::PassengerFinished {
                group,
                passenger,
                gate,
            } => write!(
                f,
                "Group {} Passenger {} finished boarding at Gate {}",
                group, passenger, gate
            ),
            BoardingEvent::GateReleased { group, gate } => write!(
                f,
                "Group {} completed boarding at Gate {}. Gate released.",
                group, gate
            ),
            BoardingEvent::GroupFinished { group, .. } => {
                write!(f, "Group {} finished boarding.", group)
            }
        }
    }
}

/// An emitted event with its position in the stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    /// Monotonic sequence number, starting at 1
    pub sequence: u64,
    /// Milliseconds since the sink was created
    pub timestamp_ms: u64,
    /// The event name
    pub name: String,
    /// The full event data
    pub event: BoardingEvent,
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
