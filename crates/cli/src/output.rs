// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use bg_core::{BoardingEvent, LogSink};
use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render one event as a single output line
pub fn render(event: &BoardingEvent, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => event.to_string(),
        OutputFormat::Json => {
            serde_json::to_string(event).unwrap_or_else(|_| event.to_string())
        }
    }
}

/// Print a list of items, one per line
pub fn print_list<T: Serialize + std::fmt::Display>(items: &[T], format: OutputFormat) {
    let mut out = io::stdout().lock();
    for item in items {
        let line = match format {
            OutputFormat::Text => item.to_string(),
            OutputFormat::Json => match serde_json::to_string(item) {
                Ok(json) => json,
                Err(_) => continue,
            },
        };
        let _ = writeln!(out, "{}", line);
    }
}

/// Writes boarding events to a stream, one line per event
///
/// The writer sits behind a mutex so lines from concurrent passengers never
/// interleave.
pub struct StreamSink<W> {
    out: Mutex<W>,
    format: OutputFormat,
    quiet: bool,
}

/// The event stream shown to users
pub type StdoutSink = StreamSink<io::Stdout>;

impl StreamSink<io::Stdout> {
    pub fn stdout(format: OutputFormat, quiet: bool) -> Self {
        Self::new(io::stdout(), format, quiet)
    }
}

impl<W: Write + Send> StreamSink<W> {
    pub fn new(out: W, format: OutputFormat, quiet: bool) -> Self {
        Self {
            out: Mutex::new(out),
            format,
            quiet,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> LogSink for StreamSink<W> {
    fn emit(&self, event: &BoardingEvent) {
        if self.quiet {
            return;
        }
        let line = render(event, self.format);
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "failed to write event");
        }
    }
}
