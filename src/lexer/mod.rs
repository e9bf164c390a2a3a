// Author: Dustin Pilgrim
// License: MIT

use crate::CfgError;
use crate::diagnostics::Diagnostics;

mod number;
mod scanner;
mod tokenizer;

pub use number::{NumberKind, NumberLiteral};

/// Cursor over raw config text.
///
/// There is no token buffer: the parser asks for one lexical unit at a time
/// and the lexer advances its position past it. The diagnostics log for the
/// current parse travels with the lexer so that lexical problems can be
/// recorded where they are found.
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    diagnostics: Diagnostics,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_diagnostics(input, Diagnostics::new())
    }

    pub fn with_diagnostics(input: &'a str, diagnostics: Diagnostics) -> Self {
        Lexer {
            src: input,
            pos: 0,
            line: 1,
            column: 0,
            diagnostics,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character after the current one.
    pub fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub fn starts_with(&self, word: &str) -> bool {
        self.rest().starts_with(word)
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    pub fn bump(&mut self) -> Option<char> {
        scanner::bump(self)
    }

    /// Skips plain whitespace. Returns whether any input remains.
    pub fn skip_whitespace(&mut self) -> bool {
        scanner::skip_whitespace(self)
    }

    /// Skips whitespace, comments and the `:`/`,` separators until none is left
    /// in front of the cursor. Returns whether any input remains.
    pub fn skip_comments_and_delimiters(&mut self) -> bool {
        scanner::skip_comments_and_delimiters(self)
    }

    /// Lexes a quoted string starting at the cursor.
    pub fn lex_string(&mut self) -> Result<String, CfgError> {
        tokenizer::lex_string(self)
    }

    /// Lexes a numeric literal starting at the cursor.
    pub fn lex_number(&mut self) -> Result<NumberLiteral, CfgError> {
        tokenizer::lex_number(self)
    }

    /// Records `error` in the diagnostics log and hands it back for returning.
    pub fn report(&mut self, error: CfgError) -> CfgError {
        self.diagnostics.report_error(&error, self.line);
        error
    }

    /// Records a problem that does not stop lexing.
    pub fn warn(&mut self, message: &str) {
        self.diagnostics.report(message, self.line);
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests;
