// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod auto;
pub mod manual;
pub mod menu;
pub mod prompt;

use crate::output::{self, OutputFormat, StdoutSink};
use anyhow::Result;
use bg_core::{Coordinator, Driver, GatePool, GroupReport, RandomPacing, SimulationConfig};
use std::sync::Arc;

/// Resolved settings shared by every mode
#[derive(Debug, Clone)]
pub struct Session {
    pub config: SimulationConfig,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Session {
    /// Fresh pool and group numbering for one simulation run
    pub fn driver(&self) -> Result<Driver<RandomPacing>> {
        let pool = Arc::new(GatePool::new(self.config.gates)?);
        let pacing = self.config.pacing.to_pacing()?;
        let sink = Arc::new(StdoutSink::stdout(self.format, self.quiet));
        let coordinator =
            Coordinator::new(pool, sink, pacing).with_policy(self.config.search.clone());
        Ok(Driver::new(coordinator))
    }

    /// Print per-group summaries after a run
    pub fn report(&self, reports: &[GroupReport]) {
        output::print_list(reports, self.format);
    }
}
