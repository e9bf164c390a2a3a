use std::io::{self, Write};

use crate::error::CfgError;

/// Default number of diagnostics kept for one parse.
pub const MAX_DIAGNOSTICS: usize = 20;

const PREFIX: &str = "Harbol Config Parser :: ";

/// Bounded, append-only log of formatted parse diagnostics.
///
/// Each entry reads `Harbol Config Parser :: <message>. Line: <n>\n`. Once the
/// log holds `capacity` entries, further reports are counted but not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<String>,
    capacity: usize,
    dropped: usize,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::with_capacity(MAX_DIAGNOSTICS)
    }
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Diagnostics {
            entries: Vec::with_capacity(capacity.min(MAX_DIAGNOSTICS)),
            capacity,
            dropped: 0,
        }
    }

    /// Formats `message` against `line` and stores it if there is room.
    pub fn report(&mut self, message: &str, line: usize) {
        if self.entries.len() >= self.capacity {
            self.dropped += 1;
            return;
        }
        self.entries
            .push(format!("{}{}. Line: {}\n", PREFIX, message, line));
    }

    /// Records a parse error, using its own line when it carries one.
    pub fn report_error(&mut self, error: &CfgError, current_line: usize) {
        let line = error.line().unwrap_or(current_line);
        self.report(&error.message(), line);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reports that arrived after the log was full.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Writes every entry to `sink` in order and clears the log.
    pub fn flush_to<W: Write>(&mut self, sink: &mut W) -> io::Result<()> {
        for entry in self.entries.drain(..) {
            sink.write_all(entry.as_bytes())?;
        }
        self.dropped = 0;
        Ok(())
    }

    /// Writes every entry to stderr and clears the log.
    pub fn flush_stderr(&mut self) {
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        if let Err(e) = self.flush_to(&mut handle) {
            tracing::warn!(error = %e, "failed to flush config diagnostics");
        }
    }
}
