use super::*;
use super::scanner::bump;

pub(super) fn lex_string(lexer: &mut Lexer) -> Result<String, CfgError> {
    let quote = match lexer.peek() {
        Some(q @ ('"' | '\'')) => q,
        Some(other) => {
            return Err(lexer.report(CfgError::UnexpectedCharacter {
                character: other,
                context: "invalid string quote mark:".into(),
                line: lexer.line,
                column: lexer.column,
                hint: Some("Strings start with \" or '".into()),
                code: Some(101),
            }));
        }
        None => {
            return Err(lexer.report(CfgError::UnexpectedEof {
                message: "unexpected end of file, expected a string".into(),
                line: lexer.line,
                column: lexer.column,
                hint: None,
                code: Some(102),
            }));
        }
    };
    let (start_line, start_column) = (lexer.line, lexer.column);
    bump(lexer);

    let mut content = String::new();
    loop {
        let Some(ch) = bump(lexer) else {
            return Err(lexer.report(CfgError::UnclosedString {
                quote,
                line: start_line,
                column: start_column,
                hint: Some("String literal not closed".into()),
                code: Some(103),
            }));
        };

        if ch == quote {
            break;
        }
        if ch != '\\' {
            content.push(ch);
            continue;
        }

        let Some(escaped) = bump(lexer) else {
            continue; // trailing backslash, reported as unclosed on the next turn
        };
        let decoded = match escaped {
            'a' => '\x07',
            'r' => '\r',
            'b' => '\x08',
            't' => '\t',
            'v' => '\x0B',
            'n' => '\n',
            'f' => '\x0C',
            's' => ' ',
            'x' => lex_hex_escape(lexer),
            other => other,
        };
        content.push(decoded);
    }

    Ok(content)
}

/// Decodes the digits of a `\x` escape. Takes every hex digit present, keeping
/// the low byte of the accumulated value.
pub(super) fn lex_hex_escape(lexer: &mut Lexer) -> char {
    let mut value: u32 = 0;
    let mut digits = 0;
    while let Some(d) = lexer.peek().and_then(|c| c.to_digit(16)) {
        value = (value << 4) | d;
        digits += 1;
        bump(lexer);
    }

    if digits == 0 {
        let found = lexer.peek().map_or_else(|| "end of file".to_string(), |c| c.to_string());
        lexer.warn(&format!("\\x escape hex with no digits! '{}'", found));
    }
    char::from((value & 0xFF) as u8)
}

fn is_octal(c: char) -> bool {
    matches!(c, '0'..='7')
}

/// Digits after the decimal point: exponent markers and `f`/`F` ride along.
fn lex_fraction(lexer: &mut Lexer, text: &mut String) {
    while let Some(c) = lexer.peek() {
        let after_exponent = matches!(text.chars().last(), Some('e' | 'E'));
        let accepted = c.is_ascii_digit()
            || matches!(c, 'e' | 'E' | 'f' | 'F')
            || (after_exponent && matches!(c, '+' | '-'));
        if !accepted {
            break;
        }
        text.push(c);
        bump(lexer);
    }
}

fn take_while(lexer: &mut Lexer, text: &mut String, pred: impl Fn(char) -> bool) {
    while let Some(c) = lexer.peek() {
        if !pred(c) {
            break;
        }
        text.push(c);
        bump(lexer);
    }
}

pub(super) fn lex_number(lexer: &mut Lexer) -> Result<NumberLiteral, CfgError> {
    let mut text = String::new();

    if let Some(sign @ ('-' | '+')) = lexer.peek() {
        text.push(sign);
        bump(lexer);
    }

    let kind = match lexer.peek() {
        Some('0') => {
            text.push('0');
            bump(lexer);
            match lexer.peek() {
                Some(x @ ('x' | 'X')) => {
                    text.push(x);
                    bump(lexer);
                    take_while(lexer, &mut text, |c| c.is_ascii_hexdigit());
                    NumberKind::Int
                }
                Some('.') => {
                    text.push('.');
                    bump(lexer);
                    lex_fraction(lexer, &mut text);
                    NumberKind::Float
                }
                _ => {
                    take_while(lexer, &mut text, is_octal);
                    NumberKind::Int
                }
            }
        }
        Some(c) if c.is_ascii_digit() => {
            take_while(lexer, &mut text, |c| c.is_ascii_digit());
            if lexer.peek() == Some('.') {
                text.push('.');
                bump(lexer);
                lex_fraction(lexer, &mut text);
                NumberKind::Float
            } else {
                NumberKind::Int
            }
        }
        Some('.') => {
            text.push('.');
            bump(lexer);
            lex_fraction(lexer, &mut text);
            NumberKind::Float
        }
        other => {
            let character = other.unwrap_or('\0');
            return Err(lexer.report(CfgError::UnexpectedCharacter {
                character,
                context: "invalid initial numeric digit:".into(),
                line: lexer.line,
                column: lexer.column,
                hint: Some("Numbers start with a digit, '.', '-' or '+'".into()),
                code: Some(104),
            }));
        }
    };

    Ok(NumberLiteral { text, kind })
}
