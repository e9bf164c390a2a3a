use std::fmt;

use crate::ast::ValueType;

/// The main error type for config lexing, parsing, lookup and file I/O.
///
/// Parse-time variants carry the line and column the lexer was at when the
/// problem was detected. Lookup and file variants have no source position.
#[derive(Debug, Clone, PartialEq)]
pub enum CfgError {
    /// Structural problems: missing brackets, untagged arrays and the like.
    SyntaxError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A bare word in value position that is not `true`, `false` or `null`.
    InvalidToken {
        token: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    UnexpectedEof {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a string literal is not closed.
    UnclosedString {
        quote: char,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised for unexpected characters; `context` says what was expected instead.
    UnexpectedCharacter {
        character: char,
        context: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    InvalidNumber {
        literal: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    DuplicateKey {
        key: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    PathNotFound {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeMismatch {
        path: String,
        expected: ValueType,
        found: ValueType,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A value of the right variant that does not fit the requested Rust type.
    OutOfRange {
        path: String,
        value: String,
        target: &'static str,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl CfgError {
    pub(crate) fn path_not_found(path: &str) -> Self {
        CfgError::PathNotFound {
            path: path.to_string(),
            hint: Some("Check that every section along the path exists".into()),
            code: Some(401),
        }
    }

    pub(crate) fn type_mismatch(path: &str, expected: ValueType, found: ValueType) -> Self {
        CfgError::TypeMismatch {
            path: path.to_string(),
            expected,
            found,
            hint: None,
            code: Some(402),
        }
    }

    /// Rewrites the path of a lookup error, leaving other variants untouched.
    pub(crate) fn at_path(self, at: &str) -> Self {
        match self {
            CfgError::TypeMismatch { expected, found, hint, code, .. } => CfgError::TypeMismatch {
                path: at.to_string(),
                expected,
                found,
                hint,
                code,
            },
            CfgError::OutOfRange { value, target, hint, code, .. } => CfgError::OutOfRange {
                path: at.to_string(),
                value,
                target,
                hint,
                code,
            },
            other => other,
        }
    }

    /// Source line of a parse error, `None` for lookup and file errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            CfgError::SyntaxError { line, .. }
            | CfgError::InvalidToken { line, .. }
            | CfgError::UnexpectedEof { line, .. }
            | CfgError::UnclosedString { line, .. }
            | CfgError::UnexpectedCharacter { line, .. }
            | CfgError::InvalidNumber { line, .. }
            | CfgError::DuplicateKey { line, .. } => Some(*line),
            CfgError::FileError { .. }
            | CfgError::PathNotFound { .. }
            | CfgError::TypeMismatch { .. }
            | CfgError::OutOfRange { .. } => None,
        }
    }

    pub fn code(&self) -> Option<u32> {
        match self {
            CfgError::SyntaxError { code, .. }
            | CfgError::InvalidToken { code, .. }
            | CfgError::UnexpectedEof { code, .. }
            | CfgError::UnclosedString { code, .. }
            | CfgError::UnexpectedCharacter { code, .. }
            | CfgError::InvalidNumber { code, .. }
            | CfgError::DuplicateKey { code, .. }
            | CfgError::FileError { code, .. }
            | CfgError::PathNotFound { code, .. }
            | CfgError::TypeMismatch { code, .. }
            | CfgError::OutOfRange { code, .. } => *code,
        }
    }

    /// The bare message used in diagnostic lines, without position or hint.
    pub fn message(&self) -> String {
        match self {
            CfgError::SyntaxError { message, .. } => message.clone(),
            CfgError::InvalidToken { token, .. } => format!(
                "invalid word value '{}', only 'true', 'false' or 'null' are allowed",
                token
            ),
            CfgError::UnexpectedEof { message, .. } => message.clone(),
            CfgError::UnclosedString { quote, .. } => {
                format!("unterminated string starting with {}", quote)
            }
            CfgError::UnexpectedCharacter { character, context, .. } => {
                format!("{} '{}'", context, character.escape_debug())
            }
            CfgError::InvalidNumber { literal, .. } => format!("invalid number '{}'", literal),
            CfgError::DuplicateKey { key, .. } => format!("duplicate string key '{}'", key),
            CfgError::FileError { message, path, .. } => format!("{} '{}'", message, path),
            CfgError::PathNotFound { path, .. } => format!("path '{}' not found", path),
            CfgError::TypeMismatch { path, expected, found, .. } => format!(
                "value at '{}' is {}, expected {}",
                path, found, expected
            ),
            CfgError::OutOfRange { path, value, target, .. } => {
                format!("value {} at '{}' does not fit in {}", value, path, target)
            }
        }
    }

    fn hint(&self) -> Option<&str> {
        match self {
            CfgError::SyntaxError { hint, .. }
            | CfgError::InvalidToken { hint, .. }
            | CfgError::UnexpectedEof { hint, .. }
            | CfgError::UnclosedString { hint, .. }
            | CfgError::UnexpectedCharacter { hint, .. }
            | CfgError::InvalidNumber { hint, .. }
            | CfgError::DuplicateKey { hint, .. }
            | CfgError::FileError { hint, .. }
            | CfgError::PathNotFound { hint, .. }
            | CfgError::TypeMismatch { hint, .. }
            | CfgError::OutOfRange { hint, .. } => hint.as_deref(),
        }
    }

    fn column(&self) -> Option<usize> {
        match self {
            CfgError::SyntaxError { column, .. }
            | CfgError::InvalidToken { column, .. }
            | CfgError::UnexpectedEof { column, .. }
            | CfgError::UnclosedString { column, .. }
            | CfgError::UnexpectedCharacter { column, .. }
            | CfgError::InvalidNumber { column, .. }
            | CfgError::DuplicateKey { column, .. } => Some(*column),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            CfgError::SyntaxError { .. } => "Syntax Error",
            CfgError::InvalidToken { .. } => "Invalid Token",
            CfgError::UnexpectedEof { .. } => "Unexpected EOF",
            CfgError::UnclosedString { .. } => "Unclosed String",
            CfgError::UnexpectedCharacter { .. } => "Unexpected Character",
            CfgError::InvalidNumber { .. } => "Invalid Number",
            CfgError::DuplicateKey { .. } => "Duplicate Key",
            CfgError::FileError { .. } => "File Error",
            CfgError::PathNotFound { .. } => "Path Not Found",
            CfgError::TypeMismatch { .. } => "Type Error",
            CfgError::OutOfRange { .. } => "Range Error",
        }
    }
}

impl fmt::Display for CfgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line(), self.column()) {
            (Some(line), Some(column)) => write!(
                f,
                "[CFG] {} at {}:{}: {}",
                self.kind(),
                line,
                column,
                self.message()
            )?,
            _ => write!(f, "[CFG] {}: {}", self.kind(), self.message())?,
        }
        if let Some(hint) = self.hint() {
            write!(f, " Hint: {}", hint)?;
        }
        if let Some(code) = self.code() {
            write!(f, " Code: {}", code)?;
        }
        Ok(())
    }
}

impl std::error::Error for CfgError {}
