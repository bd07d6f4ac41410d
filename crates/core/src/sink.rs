// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Injectable destinations for boarding events
//!
//! Every component that reports progress takes a shared [`LogSink`]. Sinks
//! serialize their writes internally, so lines from concurrent passengers
//! never interleave.

use crate::event::{BoardingEvent, EventRecord};
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// A serialized destination for boarding events
pub trait LogSink: Send + Sync {
    fn emit(&self, event: &BoardingEvent);
}

/// Discards everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn emit(&self, _event: &BoardingEvent) {}
}

/// Forwards events to `tracing` at info level
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, event: &BoardingEvent) {
        tracing::info!(
            event = event.name(),
            group = %event.group(),
            gate = ?event.gate().map(|g| g.0),
            "{}",
            event
        );
    }
}

/// Records events in memory, in emission order
///
/// Clones share the same buffer.
#[derive(Clone)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<EventRecord>>>,
    start_time: Instant,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            start_time: Instant::now(),
        }
    }

    pub fn records(&self) -> Vec<EventRecord> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn events(&self) -> Vec<BoardingEvent> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|r| r.event.clone())
            .collect()
    }

    /// Events rendered as console lines
    pub fn lines(&self) -> Vec<String> {
        self.events().iter().map(ToString::to_string).collect()
    }

    /// Number of recorded events with the given name
    pub fn count(&self, name: &str) -> usize {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|r| r.name == name)
            .count()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for MemorySink {
    fn emit(&self, event: &BoardingEvent) {
        let timestamp_ms = self.start_time.elapsed().as_millis() as u64;
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        let sequence = records.len() as u64 + 1;
        records.push(EventRecord {
            sequence,
            timestamp_ms,
            name: event.name().to_string(),
            event: event.clone(),
        });
    }
}
