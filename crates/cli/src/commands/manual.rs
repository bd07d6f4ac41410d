// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Manual simulation: sizes come from the user, groups run one at a time

use super::prompt::{is_exit, Prompter};
use super::Session;
use anyhow::{bail, Result};
use bg_core::GroupReport;
use std::io::{BufRead, Write};

/// How a manual run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every requested group boarded
    Completed,
    /// The user typed `exit` between groups
    Exited,
}

/// Ask for the number of groups and each group's size
pub fn collect_sizes<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Vec<usize>> {
    let Some(count) = prompter.ask_positive(
        "Enter number of boarding groups: ",
        "Invalid input. Enter a positive integer for group count: ",
    )?
    else {
        bail!("input closed before the group count was given");
    };

    let mut sizes = Vec::with_capacity(count);
    for index in 1..=count {
        let prompt = format!("Enter number of passengers for Group {}: ", index);
        let Some(size) = prompter
            .ask_positive(&prompt, "Invalid input. Enter positive integer for passengers: ")?
        else {
            bail!("input closed before Group {} had a size", index);
        };
        sizes.push(size);
    }
    Ok(sizes)
}

pub async fn run<R: BufRead, W: Write>(
    session: &Session,
    prompter: &mut Prompter<R, W>,
) -> Result<Outcome> {
    let sizes = collect_sizes(prompter)?;
    prompter.say("\nStarting manual boarding simulation...\n")?;

    let driver = session.driver()?;
    let mut reports: Vec<GroupReport> = Vec::with_capacity(sizes.len());
    for size in sizes {
        let report = driver.run_sequential(size).await?;
        let prompt = format!(
            "\nGroup {} finished boarding. Press Enter to continue to next group or type 'exit' to quit: ",
            report.group
        );
        reports.push(report);

        // Closed input reads as a request to stop
        let answer = prompter.ask(&prompt)?;
        if answer.as_deref().is_none_or(is_exit) {
            prompter.say("Exiting manual simulation.\n")?;
            session.report(&reports);
            return Ok(Outcome::Exited);
        }
    }

    prompter.say("All groups have boarded.\n")?;
    session.report(&reports);
    Ok(Outcome::Completed)
}

#[cfg(test)]
#[path = "manual_tests.rs"]
mod tests;
