// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive menu: manual run, automated run, or exit

use super::auto::{self, AutoArgs};
use super::manual;
use super::prompt::Prompter;
use super::Session;
use crate::error::BgError;
use anyhow::Result;
use std::io::{BufRead, Write};

const MENU: &str = "\n=== Airline Boarding Simulation Menu ===\n\
                    1. Manual Simulation\n\
                    2. Automated Simulation\n\
                    3. Exit\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Manual,
    Automated,
    Exit,
}

impl Choice {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "1" => Some(Choice::Manual),
            "2" => Some(Choice::Automated),
            "3" => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// Loop on the menu until the user exits or input closes
///
/// A failed simulation is reported and the menu is shown again.
pub async fn run<R: BufRead, W: Write>(
    session: &Session,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    loop {
        prompter.say(MENU)?;
        let Some(answer) = prompter.ask("Enter your choice (1-3): ")? else {
            return Ok(());
        };

        let result = match Choice::parse(&answer) {
            Some(Choice::Manual) => manual::run(session, prompter).await.map(|_| ()),
            Some(Choice::Automated) => auto::run(session, AutoArgs::default()).await,
            Some(Choice::Exit) => {
                prompter.say("Exiting program. Goodbye!\n")?;
                return Ok(());
            }
            None => {
                prompter.say("Invalid choice. Enter 1, 2, or 3.\n")?;
                continue;
            }
        };

        if let Err(e) = result {
            eprint!("{}", BgError::describe(&e));
        }
    }
}
