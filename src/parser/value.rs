use super::*;
use crate::ast::{Color, Vector4};
use crate::lexer::{NumberKind, NumberLiteral};

/// Components kept from a `c[...]` or `v[...]` list; extra ones are read and dropped.
const MATRIX_SLOTS: usize = 4;

pub(super) fn parse_string_value(parser: &mut Parser) -> Result<Value, CfgError> {
    match parser.lexer.lex_string() {
        Ok(s) => Ok(Value::String(s)),
        Err(e) => {
            let err = parser.syntax_error("invalid string value", 210);
            parser.fail(err);
            Err(e)
        }
    }
}

/// `true`, `false` or `null`, matched as a prefix of the remaining input.
pub(super) fn parse_keyword(parser: &mut Parser) -> Result<Value, CfgError> {
    for (word, value) in [
        ("true", Value::Bool(true)),
        ("false", Value::Bool(false)),
        ("null", Value::Null),
    ] {
        if parser.lexer.starts_with(word) {
            for _ in 0..word.len() {
                parser.bump();
            }
            return Ok(value);
        }
    }

    let token: String = parser
        .lexer
        .rest()
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    let err = CfgError::InvalidToken {
        token,
        line: parser.line(),
        column: parser.column(),
        hint: Some("Bare words are not keys; quote strings".into()),
        code: Some(211),
    };
    Err(parser.fail(err))
}

pub(super) fn parse_number_value(parser: &mut Parser) -> Result<Value, CfgError> {
    let literal = match parser.lexer.lex_number() {
        Ok(literal) => literal,
        Err(e) => {
            let err = parser.syntax_error("invalid number", 212);
            parser.fail(err);
            return Err(e);
        }
    };
    number_to_value(parser, literal)
}

fn number_to_value(parser: &mut Parser, literal: NumberLiteral) -> Result<Value, CfgError> {
    match literal.kind {
        NumberKind::Int => Ok(Value::Int(literal.to_i64())),
        NumberKind::Float => convert(parser, &literal, NumberLiteral::to_f64).map(Value::Float),
    }
}

/// Converts `literal` with `to`, logging an `InvalidNumber` when it yields nothing.
fn convert<T>(
    parser: &mut Parser,
    literal: &NumberLiteral,
    to: impl FnOnce(&NumberLiteral) -> Option<T>,
) -> Result<T, CfgError> {
    match to(literal) {
        Some(value) => Ok(value),
        None => {
            let err = CfgError::InvalidNumber {
                literal: literal.text.clone(),
                line: parser.line(),
                column: parser.column(),
                hint: Some("A float needs at least one digit".into()),
                code: Some(105),
            };
            Err(parser.fail(err))
        }
    }
}

/// `color = 'c' matrix ;  vecf = 'v' matrix ;`
/// `matrix = '[' <number> {[','] <number>} ']' ;`
pub(super) fn parse_matrix(parser: &mut Parser, tag: char) -> Result<Value, CfgError> {
    parser.bump(); // consume the tag
    parser.skip_noise();

    match parser.peek() {
        Some('[') => {
            parser.bump();
        }
        Some(c) => {
            let err = parser.unexpected_char(c, "missing '[', found", 213);
            return Err(parser.fail(err));
        }
        None => {
            let err = parser.eof_error("unexpected end of file, missing '['", 213);
            return Err(parser.fail(err));
        }
    }
    parser.skip_noise();

    let mut rgba = [0u8; MATRIX_SLOTS];
    let mut xyzw = [0f32; MATRIX_SLOTS];
    let mut count = 0;
    loop {
        match parser.peek() {
            Some(']') => {
                parser.bump();
                break;
            }
            Some(_) => {
                let component = parser.lexer.lex_number().and_then(|literal| {
                    if tag == 'c' {
                        let channel = convert(parser, &literal, NumberLiteral::to_channel)?;
                        if let Some(slot) = rgba.get_mut(count) {
                            *slot = channel;
                        }
                    } else {
                        let x = convert(parser, &literal, NumberLiteral::to_f32)?;
                        if let Some(slot) = xyzw.get_mut(count) {
                            *slot = x;
                        }
                    }
                    Ok(())
                });
                if let Err(e) = component {
                    let err = parser.syntax_error("invalid number in [] array", 214);
                    parser.fail(err);
                    return Err(e);
                }
                count += 1;
                parser.skip_noise();
            }
            None => {
                let err = parser.eof_error("unexpected end of file with missing ending ']'", 215);
                return Err(parser.fail(err));
            }
        }
    }

    if tag == 'c' {
        Ok(Value::Color(Color::from(rgba)))
    } else {
        Ok(Value::Vector4(Vector4::from(xyzw)))
    }
}
