use super::*;

/// Parses key-values into `section` until input runs out or one fails.
pub(super) fn parse_entries(parser: &mut Parser, section: &mut Section) -> Result<(), CfgError> {
    while parse_key_val(parser, section)? {}
    Ok(())
}

/// `key_val = <string> [':'] (<value> | <section>) [','] ;`
///
/// Returns `Ok(false)` when only whitespace, comments or separators were left.
pub(super) fn parse_key_val(parser: &mut Parser, section: &mut Section) -> Result<bool, CfgError> {
    if !parser.skip_noise() {
        return Ok(false);
    }

    let key = parse_key(parser, section)?;
    parser.skip_noise();

    let line = parser.line();
    match parser.peek() {
        Some('{') => {
            if parser.depth >= parser.max_depth {
                let message = format!("sections nested deeper than {} levels", parser.max_depth);
                let err = parser.syntax_error(message, 216);
                return Err(parser.fail(err));
            }
            tracing::trace!(key = %key, line, depth = parser.depth, "entering section");
            let mut child = Section::new();
            parser.depth += 1;
            let result = parse_section(parser, &mut child);
            parser.depth -= 1;
            // a failed section stays attached with whatever it collected
            section.push_parsed(key, Value::Section(child));
            result?;
        }
        Some('"' | '\'') => {
            let value = value::parse_string_value(parser)?;
            section.push_parsed(key, value);
        }
        Some(tag @ ('c' | 'v')) => {
            let value = value::parse_matrix(parser, tag)?;
            section.push_parsed(key, value);
        }
        Some('t' | 'f' | 'n') => {
            let value = value::parse_keyword(parser)?;
            section.push_parsed(key, value);
        }
        Some(c) if c.is_ascii_digit() || matches!(c, '.' | '-' | '+') => {
            let value = value::parse_number_value(parser)?;
            section.push_parsed(key, value);
        }
        Some('[') => {
            let err = parser.syntax_error("array bracket missing 'c' or 'v' tag", 207);
            return Err(parser.fail(err));
        }
        Some(c) => {
            let err = parser.unexpected_char(c, "unknown character detected", 208);
            return Err(parser.fail(err));
        }
        None => {
            let err = parser.eof_error(format!("unexpected end of file, missing value for key '{}'", key), 209);
            return Err(parser.fail(err));
        }
    }

    parser.skip_noise();
    Ok(true)
}

/// Lexes the quoted key of an entry and checks it is new to `section`.
fn parse_key(parser: &mut Parser, section: &Section) -> Result<String, CfgError> {
    match parser.peek() {
        Some('"' | '\'') => {}
        Some(c) => {
            let err = parser.unexpected_char(c, "missing beginning quote for key", 201);
            return Err(parser.fail(err));
        }
        None => {
            let err = parser.eof_error("unexpected end of file, expected a key", 201);
            return Err(parser.fail(err));
        }
    }

    let key = match parser.lexer.lex_string() {
        Ok(key) => key,
        Err(e) => {
            let err = parser.syntax_error("invalid string key", 202);
            parser.fail(err);
            return Err(e);
        }
    };

    if section.contains_key(&key) {
        let err = CfgError::DuplicateKey {
            key,
            line: parser.line(),
            column: parser.column(),
            hint: Some("Keys must be unique within a section".into()),
            code: Some(206),
        };
        return Err(parser.fail(err));
    }
    Ok(key)
}

/// `section = '{' <keyval>* '}' ;`
pub(super) fn parse_section(parser: &mut Parser, section: &mut Section) -> Result<(), CfgError> {
    match parser.peek() {
        Some('{') => {
            parser.bump();
        }
        Some(c) => {
            let err = parser.unexpected_char(c, "missing '{' for section, found", 203);
            return Err(parser.fail(err));
        }
        None => {
            let err = parser.eof_error("unexpected end of file, missing '{' for section", 203);
            return Err(parser.fail(err));
        }
    }
    parser.skip_noise();

    loop {
        match parser.peek() {
            Some('}') => {
                parser.bump();
                return Ok(());
            }
            Some(_) => {
                parse_key_val(parser, section)?;
            }
            None => {
                let err = parser.eof_error("unexpected end of file with missing '}' for section", 204);
                return Err(parser.fail(err));
            }
        }
    }
}
