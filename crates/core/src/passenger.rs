// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Passenger task: board, then wait for the rest of the cohort

use crate::barrier::{Arrival, CompletionBarrier};
use crate::error::BarrierError;
use crate::event::BoardingEvent;
use crate::id::{GateId, GroupId, PassengerId};
use crate::pacing::Pacing;
use crate::sink::LogSink;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassengerState {
    Pending,
    Arrived,
}

/// One member of a group's cohort
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Passenger {
    pub id: PassengerId,
    pub group: GroupId,
    pub gate: GateId,
    pub state: PassengerState,
}

impl Passenger {
    pub fn new(id: PassengerId, group: GroupId, gate: GateId) -> Self {
        Self {
            id,
            group,
            gate,
            state: PassengerState::Pending,
        }
    }

    /// Board at the gate, then arrive at the group's barrier
    ///
    /// Returns once the whole cohort has arrived and the barrier action has
    /// run.
    pub async fn board<P: Pacing, R>(
        &mut self,
        pacing: &P,
        sink: &dyn LogSink,
        barrier: &CompletionBarrier<R>,
    ) -> Result<Arrival<R>, BarrierError> {
        sink.emit(&BoardingEvent::PassengerBoarding {
            group: self.group,
            passenger: self.id,
            gate: self.gate,
        });

        let delay = pacing.boarding_delay(self.group, self.id);
        tracing::trace!(group = %self.group, passenger = %self.id, ?delay, "boarding");
        tokio::time::sleep(delay).await;

        sink.emit(&BoardingEvent::PassengerFinished {
            group: self.group,
            passenger: self.id,
            gate: self.gate,
        });

        let arrival = barrier.arrive().await?;
        self.state = PassengerState::Arrived;
        Ok(arrival)
    }
}
