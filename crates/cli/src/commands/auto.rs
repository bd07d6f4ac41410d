// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Automated simulation from a fixed schedule

use super::Session;
use anyhow::Result;
use clap::Args;
use tracing::info;

#[derive(Args, Debug, Default)]
pub struct AutoArgs {
    /// Group sizes, boarded concurrently (defaults to the configured schedule)
    #[arg(long, value_delimiter = ',')]
    pub sizes: Vec<usize>,
}

impl AutoArgs {
    /// Sizes given on the command line, else the configured schedule
    pub fn schedule(&self, session: &Session) -> Vec<usize> {
        if self.sizes.is_empty() {
            session.config.schedule.clone()
        } else {
            self.sizes.clone()
        }
    }
}

pub async fn run(session: &Session, args: AutoArgs) -> Result<()> {
    let sizes = args.schedule(session);
    info!(groups = sizes.len(), gates = session.config.gates, "automated simulation");

    let driver = session.driver()?;
    let reports = driver.run_schedule(&sizes).await?;
    session.report(&reports);
    Ok(())
}
