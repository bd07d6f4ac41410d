// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! bg-core: Boarding gate simulation
//!
//! This crate provides:
//! - Gates with exclusive hold and wake-one release, grouped in a pool
//! - A completion barrier whose last arrival runs the release action
//! - A pure group state machine that yields boarding events
//! - A coordinator and driver that run groups as concurrent tasks
//! - Injectable log sinks and pacing for deterministic tests

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod id;

pub mod config;
pub mod error;
pub mod event;
pub mod pacing;
pub mod sink;

// Synchronization primitives (order matters for dependencies)
pub mod gate;
pub mod pool;
pub mod barrier;

// Groups and their supervision
pub mod group;
pub mod passenger;
pub mod coordinator;
pub mod driver;

// Re-exports
pub use barrier::{Arrival, CompletionBarrier};
pub use config::{PacingConfig, SearchPolicy, SimulationConfig, DEFAULT_SCHEDULE};
pub use coordinator::{Coordinator, GroupReport};
pub use driver::{Driver, GroupHandle};
pub use error::{BarrierError, BoardingError, ConfigError, GateError};
pub use event::{BoardingEvent, EventRecord};
pub use gate::{Gate, GateState};
pub use group::{Group, GroupInput, GroupPhase};
pub use id::{GateId, GroupId, GroupSequence, PassengerId};
pub use pacing::{FixedPacing, Pacing, RandomPacing};
pub use passenger::{Passenger, PassengerState};
pub use pool::{Discovery, GatePool};
pub use sink::{LogSink, MemorySink, NullSink, TracingSink};
