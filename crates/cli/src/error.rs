// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Errors from the simulation are rendered with:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use bg_core::{BoardingError, ConfigError};
use std::fmt;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct BgError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl BgError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Build a display error from whatever ended the command
    pub fn describe(err: &anyhow::Error) -> Self {
        if let Some(config) = err.downcast_ref::<ConfigError>() {
            return Self::config(config);
        }
        if let Some(boarding) = err.downcast_ref::<BoardingError>() {
            return Self::boarding(boarding);
        }
        let mut described = Self::new(err.to_string());
        for cause in err.chain().skip(1) {
            described = described.with_context(cause.to_string());
        }
        described
    }

    fn config(err: &ConfigError) -> Self {
        let base = Self::new(err.to_string());
        match err {
            ConfigError::EmptyCohort { .. } | ConfigError::EmptyScheduleEntry { .. } => base
                .with_context("Every group needs at least one passenger")
                .with_suggestion("Use positive sizes, e.g. --sizes 5,4,6"),
            ConfigError::CohortTooLarge { .. } => {
                base.with_suggestion("Split the cohort into several smaller groups")
            }
            ConfigError::NoGates => base.with_suggestion("Pass --gates 1 or more"),
            ConfigError::InvalidDelayRange { .. } => {
                base.with_suggestion("Make --min-delay no larger than --max-delay")
            }
            ConfigError::ZeroPollInterval => {
                base.with_suggestion("Use a positive duration, e.g. --poll-interval 100ms")
            }
            ConfigError::ZeroMaxAttempts => {
                base.with_suggestion("Omit --max-attempts to search without a limit")
            }
            ConfigError::Read { .. } => base.with_suggestion("Check the path given to --config"),
            ConfigError::Parse(_) => base
                .with_context("The config file is TOML with [search] and [pacing] tables")
                .with_suggestion("Run `bg --help` to see the accepted settings"),
        }
    }

    fn boarding(err: &BoardingError) -> Self {
        match err {
            BoardingError::Config(config) => Self::config(config),
            BoardingError::SearchExhausted { .. } => Self::new(err.to_string())
                .with_context("Every gate stayed busy for the whole search")
                .with_suggestion("Raise --max-attempts or --poll-interval")
                .with_suggestion("Add gates with --gates"),
            _ => Self::new(err.to_string()),
        }
    }
}

impl fmt::Display for BgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for BgError {}
