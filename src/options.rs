//! Knobs for parsing and writing config documents.
//!
//! ```rust
//! use harbol_cfg::{ParseOptions, Parser};
//!
//! // Keep diagnostics in the outcome instead of printing them.
//! let options = ParseOptions::new().with_flush_to_stderr(false);
//! let outcome = Parser::with_options("\"k\": 1", &options).parse_document();
//! assert!(outcome.is_clean());
//! ```

use crate::diagnostics::MAX_DIAGNOSTICS;

/// Default limit on how deeply sections may nest.
pub const MAX_DEPTH: usize = 256;

/// Options controlling a single parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Upper bound on stored diagnostics; later ones are dropped.
    pub max_diagnostics: usize,
    /// Write queued diagnostics to stderr when the parse ends.
    pub flush_to_stderr: bool,
    /// Deepest section nesting accepted before the parse fails.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_diagnostics: MAX_DIAGNOSTICS,
            flush_to_stderr: true,
            max_depth: MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that never print, for callers who inspect the outcome themselves.
    #[must_use]
    pub fn quiet() -> Self {
        Self::default().with_flush_to_stderr(false)
    }

    #[must_use]
    pub fn with_max_diagnostics(mut self, max: usize) -> Self {
        self.max_diagnostics = max;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    #[must_use]
    pub fn with_flush_to_stderr(mut self, flush: bool) -> Self {
        self.flush_to_stderr = flush;
        self
    }
}

/// How a document is written to an existing file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Create the file or truncate it first.
    #[default]
    Truncate,
    /// Create the file or append to its end.
    Append,
}
