use super::*;

pub(super) fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\x0B' | '\x0C' | '\n')
}

/// Advance one character and update line/column tracking
pub(super) fn bump(lexer: &mut Lexer) -> Option<char> {
    let curr = lexer.peek()?;
    lexer.pos += curr.len_utf8();
    if curr == '\n' {
        lexer.line += 1;
        lexer.column = 0;
    } else {
        lexer.column += 1;
    }
    Some(curr)
}

pub(super) fn skip_whitespace(lexer: &mut Lexer) -> bool {
    while let Some(c) = lexer.peek() {
        if !is_whitespace(c) {
            break;
        }
        bump(lexer);
    }
    !lexer.is_eof()
}

/// `#` and `//` comments run up to, not including, the newline.
fn skip_line_comment(lexer: &mut Lexer) {
    while let Some(c) = lexer.peek() {
        if c == '\n' {
            break;
        }
        bump(lexer);
    }
}

/// An unterminated block comment swallows the rest of the input.
fn skip_block_comment(lexer: &mut Lexer) {
    bump(lexer);
    bump(lexer);
    while !lexer.is_eof() {
        if lexer.starts_with("*/") {
            bump(lexer);
            bump(lexer);
            return;
        }
        bump(lexer);
    }
}

pub(super) fn skip_comments_and_delimiters(lexer: &mut Lexer) -> bool {
    loop {
        match (lexer.peek(), lexer.peek_second()) {
            (Some(c), _) if is_whitespace(c) => {
                skip_whitespace(lexer);
            }
            (Some('#'), _) | (Some('/'), Some('/')) => skip_line_comment(lexer),
            (Some('/'), Some('*')) => skip_block_comment(lexer),
            (Some(':' | ','), _) => {
                bump(lexer);
            }
            _ => break,
        }
    }
    !lexer.is_eof()
}
