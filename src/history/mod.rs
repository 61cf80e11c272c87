//! Bounded record of recent log and control calls, oldest first.

use crate::error::Error;
use crate::level::Level;
use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Snapshot of one log or control call. Owned by the history buffer once recorded.
#[derive(Debug)]
pub struct LogRecord {
    pub level: Level,
    /// Message after printf-style interpolation; the raw code for `clear`/`blank`.
    pub message: String,
    /// Exactly what was handed to the sink.
    pub output: String,
    /// Stream name the output was addressed to.
    pub stream: String,
    pub timestamp: DateTime<Local>,
    /// Set when the write failed.
    pub error: Option<Error>,
}

impl LogRecord {
    #[must_use]
    pub fn new(
        level: Level,
        message: impl Into<String>,
        output: impl Into<String>,
        stream: impl Into<String>,
    ) -> Self {
        Self {
            level,
            message: message.into(),
            output: output.into(),
            stream: stream.into(),
            timestamp: Local::now(),
            error: None,
        }
    }

    #[must_use]
    pub fn with_error(mut self, error: Option<Error>) -> Self {
        self.error = error;
        self
    }

    #[must_use]
    pub const fn is_err(&self) -> bool {
        self.error.is_some()
    }
}

/// Ring buffer of [`LogRecord`]s. `len() <= max()` holds after every call.
#[derive(Debug)]
pub struct HistoryBuffer {
    records: VecDeque<LogRecord>,
    max: usize,
}

impl HistoryBuffer {
    #[must_use]
    pub fn new(max: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max.min(1024)),
            max,
        }
    }

    /// Appends `record`, then evicts from the front until the buffer fits. Evicting
    /// in a loop also restores the bound after `set_max` shrank it.
    pub fn record(&mut self, record: LogRecord) {
        self.records.push_back(record);
        self.trim();
    }

    /// Changes capacity; a smaller capacity drops the oldest records immediately.
    pub fn set_max(&mut self, max: usize) {
        self.max = max;
        self.trim();
    }

    fn trim(&mut self) {
        while self.records.len() > self.max {
            self.records.pop_front();
        }
    }

    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Oldest retained record.
    #[must_use]
    pub fn first(&self) -> Option<&LogRecord> {
        self.records.front()
    }

    /// Most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&LogRecord> {
        self.records.back()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LogRecord> {
        self.records.get(index)
    }

    /// Chronological order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogRecord> + ExactSizeIterator {
        self.records.iter()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl<'a> IntoIterator for &'a HistoryBuffer {
    type Item = &'a LogRecord;
    type IntoIter = std::collections::vec_deque::Iter<'a, LogRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
