use crate::CfgError;
use crate::ast::Value;
use crate::diagnostics::Diagnostics;
use crate::lexer::Lexer;
use crate::options::ParseOptions;
use crate::section::Section;

mod document;
mod value;

/// Result of parsing one document.
///
/// Parsing never throws the tree away: on failure `document` holds every
/// entry built before the failing one, and `error` holds the failure that
/// stopped the parse. Treat a document with `error` set as unreliable.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub document: Section,
    /// Formatted diagnostic lines, in the order they were raised.
    pub diagnostics: Vec<String>,
    pub error: Option<CfgError>,
}

impl ParseOutcome {
    /// True when the parse reached the end of input without any diagnostic.
    pub fn is_clean(&self) -> bool {
        self.error.is_none() && self.diagnostics.is_empty()
    }

    /// The document, or the error that stopped the parse.
    pub fn into_result(self) -> Result<Section, CfgError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.document),
        }
    }
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    flush_to_stderr: bool,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, &ParseOptions::default())
    }

    pub fn with_options(input: &'a str, options: &ParseOptions) -> Self {
        let diagnostics = Diagnostics::with_capacity(options.max_diagnostics);
        Self {
            lexer: Lexer::with_diagnostics(input, diagnostics),
            flush_to_stderr: options.flush_to_stderr,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    pub(crate) fn line(&self) -> usize {
        self.lexer.line()
    }

    pub(crate) fn column(&self) -> usize {
        self.lexer.column()
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.lexer.peek()
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        self.lexer.bump()
    }

    pub(crate) fn skip_noise(&mut self) -> bool {
        self.lexer.skip_comments_and_delimiters()
    }

    /// Logs `error` and returns it, for `return Err(parser.fail(..))`.
    pub(crate) fn fail(&mut self, error: CfgError) -> CfgError {
        self.lexer.report(error)
    }

    pub(crate) fn syntax_error(&self, message: impl Into<String>, code: u32) -> CfgError {
        CfgError::SyntaxError {
            message: message.into(),
            line: self.line(),
            column: self.column(),
            hint: None,
            code: Some(code),
        }
    }

    pub(crate) fn eof_error(&self, message: impl Into<String>, code: u32) -> CfgError {
        CfgError::UnexpectedEof {
            message: message.into(),
            line: self.line(),
            column: self.column(),
            hint: None,
            code: Some(code),
        }
    }

    pub(crate) fn unexpected_char(&self, character: char, context: &str, code: u32) -> CfgError {
        CfgError::UnexpectedCharacter {
            character,
            context: context.into(),
            line: self.line(),
            column: self.column(),
            hint: None,
            code: Some(code),
        }
    }

    /// Parses the whole input into a root section.
    ///
    /// Queued diagnostics are flushed to stderr at the end when the parser was
    /// built with `flush_to_stderr`, and are always copied into the outcome.
    pub fn parse_document(mut self) -> ParseOutcome {
        tracing::debug!(bytes = self.lexer.rest().len(), "parsing config document");

        let mut document = Section::new();
        let error = document::parse_entries(&mut self, &mut document).err();

        let mut diagnostics = self.lexer.into_diagnostics();
        tracing::debug!(
            entries = document.len(),
            diagnostics = diagnostics.len(),
            dropped = diagnostics.dropped(),
            failed = error.is_some(),
            "parsed config document"
        );

        let lines: Vec<String> = diagnostics.iter().map(str::to_string).collect();
        if self.flush_to_stderr {
            diagnostics.flush_stderr();
        }

        ParseOutcome { document, diagnostics: lines, error }
    }
}
