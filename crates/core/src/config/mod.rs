// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration modules

mod simulation;

pub use simulation::{PacingConfig, SearchPolicy, SimulationConfig, DEFAULT_SCHEDULE};
