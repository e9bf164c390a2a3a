// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::ast::Value;
use crate::error::CfgError;
use crate::export;
use crate::options::{ParseOptions, WriteMode};
use crate::parser::{ParseOutcome, Parser};
use crate::section::Section;

mod access;

/// A parsed config document together with what the parser had to say about it.
///
/// A failed parse still yields a `Config`: the document holds everything
/// read before the failure and [`Config::error`] holds the failure itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    document: Section,
    diagnostics: Vec<String>,
    error: Option<CfgError>,
    source: Option<PathBuf>,
}

impl Config {
    /// Parse config text with default options.
    pub fn parse(content: &str) -> Self {
        Self::parse_with_options(content, &ParseOptions::default())
    }

    pub fn parse_with_options(content: &str, options: &ParseOptions) -> Self {
        Self::from_outcome(Parser::with_options(content, options).parse_document(), None)
    }

    /// Load a config file with default options.
    ///
    /// A leading `~/` is expanded to the home directory.
    ///
    /// # Example
    /// ```no_run
    /// # use harbol_cfg::Config;
    /// let config = Config::from_file("~/.config/app/settings.cfg")?;
    /// if !config.is_clean() {
    ///     eprintln!("config loaded with problems");
    /// }
    /// # Ok::<(), harbol_cfg::CfgError>(())
    /// ```
    ///
    /// # Errors
    /// Returns `CfgError::FileError` when the file cannot be read or is not
    /// valid UTF-8; the latter names the first offending line. Syntax problems
    /// do not fail the load; see [`Config::ensure_clean`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CfgError> {
        Self::from_file_with_options(path, &ParseOptions::default())
    }

    pub fn from_file_with_options<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Self, CfgError> {
        let path = expand_home(path.as_ref())?;
        let bytes = fs::read(&path).map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "failed to read config file");
            CfgError::FileError {
                message: format!("Failed to read file: {}", e),
                path: path.display().to_string(),
                hint: Some("Check that the file exists and is readable".into()),
                code: Some(301),
            }
        })?;
        let content = String::from_utf8(bytes).map_err(|e| {
            let valid = e.utf8_error().valid_up_to();
            let line = 1 + e.as_bytes()[..valid].iter().filter(|&&b| b == b'\n').count();
            tracing::error!(path = %path.display(), line, "config file is not valid UTF-8");
            CfgError::FileError {
                message: format!("Invalid UTF-8 on line {}", line),
                path: path.display().to_string(),
                hint: Some("Config files must be UTF-8 encoded".into()),
                code: Some(303),
            }
        })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "loaded config file");
        let outcome = Parser::with_options(&content, options).parse_document();
        Ok(Self::from_outcome(outcome, Some(path)))
    }

    /// Load a config file with fallback support.
    ///
    /// Tries the primary path first. If that file cannot be read, loads the
    /// fallback path instead.
    pub fn from_file_with_fallback<P: AsRef<Path>>(primary: P, fallback: P) -> Result<Self, CfgError> {
        match Self::from_file(&primary) {
            Ok(config) => Ok(config),
            Err(CfgError::FileError { .. }) => {
                tracing::debug!(
                    primary = %primary.as_ref().display(),
                    fallback = %fallback.as_ref().display(),
                    "primary config unreadable, trying fallback"
                );
                Self::from_file(&fallback).map_err(|e| match e {
                    CfgError::FileError { message, .. } => CfgError::FileError {
                        message: format!(
                            "Failed to load config from primary path '{}' or fallback path '{}': {}",
                            primary.as_ref().display(),
                            fallback.as_ref().display(),
                            message
                        ),
                        path: format!(
                            "{} (fallback: {})",
                            primary.as_ref().display(),
                            fallback.as_ref().display()
                        ),
                        hint: Some("Check that at least one of the config files exists".into()),
                        code: Some(302),
                    },
                    other => other,
                })
            }
            Err(other) => Err(other),
        }
    }

    fn from_outcome(outcome: ParseOutcome, source: Option<PathBuf>) -> Self {
        let ParseOutcome { document, diagnostics, error } = outcome;
        Self { document, diagnostics, error, source }
    }

    pub fn document(&self) -> &Section {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Section {
        &mut self.document
    }

    pub fn into_document(self) -> Section {
        self.document
    }

    /// Diagnostics raised while parsing, formatted as they were logged.
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// The failure that stopped the parse, if any.
    pub fn error(&self) -> Option<&CfgError> {
        self.error.as_ref()
    }

    pub fn is_clean(&self) -> bool {
        self.error.is_none() && self.diagnostics.is_empty()
    }

    /// Turns a parse failure into an `Err`, for callers that want all or nothing.
    pub fn ensure_clean(self) -> Result<Self, CfgError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self),
        }
    }

    /// Path the config was loaded from, after `~/` expansion.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn to_text(&self) -> String {
        export::to_text(&self.document)
    }

    pub fn to_json(&self) -> String {
        export::export_to_json(&self.document)
    }

    /// Write the document back out as config text.
    pub fn write_file<P: AsRef<Path>>(&self, path: P, mode: WriteMode) -> Result<(), CfgError> {
        let path = expand_home(path.as_ref())?;
        export::write_file(&self.document, path, mode)
    }
}

impl FromStr for Config {
    type Err = CfgError;

    /// Strict parse: any syntax error fails.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Self::parse(content).ensure_clean()
    }
}

impl From<Section> for Config {
    fn from(document: Section) -> Self {
        Self {
            document,
            diagnostics: Vec::new(),
            error: None,
            source: None,
        }
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &Path) -> Result<PathBuf, CfgError> {
    let Some(rest) = path.to_str().and_then(|p| p.strip_prefix("~/")) else {
        return Ok(path.to_path_buf());
    };
    let home = dirs::home_dir().ok_or_else(|| {
        tracing::error!(path = %path.display(), "no home directory for ~ expansion");
        CfgError::FileError {
            message: "Could not determine home directory for ~ expansion".into(),
            path: path.display().to_string(),
            hint: Some("Set HOME or use an absolute path".into()),
            code: Some(300),
        }
    })?;
    Ok(home.join(rest))
}

#[cfg(test)]
mod tests;
