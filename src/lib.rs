pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod export;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod resolver;
pub mod section;

pub use ast::{Color, Value, ValueType, Vector4};
pub use config::Config;
pub use diagnostics::Diagnostics;
pub use error::CfgError;
pub use options::{ParseOptions, WriteMode};
pub use parser::{ParseOutcome, Parser};
pub use section::Section;

/// Parse `input` with default options, returning the (possibly partial) document
/// together with any diagnostics raised along the way.
pub fn parse_str(input: &str) -> ParseOutcome {
    Parser::new(input).parse_document()
}
