#[cfg(test)]
use super::*;

#[test]
fn test_skip_whitespace_counts_lines() {
    let mut lexer = Lexer::new(" \t\r\n\x0B\x0C\n  x");
    assert!(lexer.skip_whitespace());
    assert_eq!(lexer.peek(), Some('x'));
    assert_eq!(lexer.line(), 3);

    let mut lexer = Lexer::new("   \n ");
    assert!(!lexer.skip_whitespace());
    assert!(lexer.is_eof());
}

#[test]
fn test_skip_comments_and_delimiters() {
    let input = "# hash comment\n// slash comment\n/* block\ncomment */ :, :\n\"key\"";
    let mut lexer = Lexer::new(input);
    assert!(lexer.skip_comments_and_delimiters());
    assert_eq!(lexer.peek(), Some('"'));
    assert_eq!(lexer.line(), 5);
}

#[test]
fn test_unterminated_block_comment_consumes_all() {
    let mut lexer = Lexer::new("/* never closed \n \"k\": 1");
    assert!(!lexer.skip_comments_and_delimiters());
    assert!(lexer.is_eof());
}

#[test]
fn test_lone_slash_is_not_a_comment() {
    let mut lexer = Lexer::new("/x");
    assert!(lexer.skip_comments_and_delimiters());
    assert_eq!(lexer.peek(), Some('/'));
}

#[test]
fn test_lex_string_both_quotes() {
    let mut lexer = Lexer::new(r#""double" 'single'"#);
    assert_eq!(lexer.lex_string(), Ok("double".to_string()));
    lexer.skip_whitespace();
    assert_eq!(lexer.lex_string(), Ok("single".to_string()));
    assert!(lexer.diagnostics().is_empty());
}

#[test]
fn test_lex_string_escapes() {
    let mut lexer = Lexer::new(r#""\a\r\b\t\v\n\f\s\q\"\\""#);
    assert_eq!(
        lexer.lex_string(),
        Ok("\x07\r\x08\t\x0B\n\x0C q\"\\".to_string())
    );
}

#[test]
fn test_lex_string_other_quote_inside() {
    let mut lexer = Lexer::new(r#"'say "hi"'"#);
    assert_eq!(lexer.lex_string(), Ok("say \"hi\"".to_string()));
}

#[test]
fn test_lex_empty_string() {
    let mut lexer = Lexer::new(r#""""#);
    assert_eq!(lexer.lex_string(), Ok(String::new()));
    assert!(lexer.is_eof());
}

#[test]
fn test_lex_hex_escapes() {
    let mut lexer = Lexer::new(r#""\x41\x7e!""#);
    assert_eq!(lexer.lex_string(), Ok("A~!".to_string()));

    // every hex digit present is consumed, keeping the low byte
    let mut lexer = Lexer::new(r#""\x141""#);
    assert_eq!(lexer.lex_string(), Ok("A".to_string()));
}

#[test]
fn test_lex_hex_escape_without_digits_warns() {
    let mut lexer = Lexer::new(r#""\xzz""#);
    assert_eq!(lexer.lex_string(), Ok("\0zz".to_string()));
    assert_eq!(lexer.diagnostics().len(), 1);
    let entry = lexer.diagnostics().iter().next().unwrap();
    assert!(entry.contains("\\x escape hex with no digits"));
}

#[test]
fn test_lex_string_rejects_bad_quote() {
    let mut lexer = Lexer::new("key");
    let err = lexer.lex_string().unwrap_err();
    assert!(matches!(err, CfgError::UnexpectedCharacter { character: 'k', .. }));
    assert_eq!(lexer.diagnostics().len(), 1);
}

#[test]
fn test_lex_string_unterminated() {
    let mut lexer = Lexer::new("\"open ended");
    let err = lexer.lex_string().unwrap_err();
    assert!(matches!(err, CfgError::UnclosedString { quote: '"', line: 1, .. }));
}

#[test]
fn test_lex_number_classification() {
    let cases = [
        ("0x1A", "0x1A", NumberKind::Int),
        ("010", "010", NumberKind::Int),
        ("0.5", "0.5", NumberKind::Float),
        ("3", "3", NumberKind::Int),
        ("-2.5e1", "-2.5e1", NumberKind::Float),
        ("+12,", "+12", NumberKind::Int),
        (".25}", ".25", NumberKind::Float),
        ("1.5f ", "1.5f", NumberKind::Float),
        ("1.0e-3]", "1.0e-3", NumberKind::Float),
        ("0}", "0", NumberKind::Int),
    ];

    for (input, text, kind) in cases {
        let mut lexer = Lexer::new(input);
        let literal = lexer.lex_number().expect(input);
        assert_eq!(literal.text, text, "text of {}", input);
        assert_eq!(literal.kind, kind, "kind of {}", input);
    }
}

#[test]
fn test_lex_number_values() {
    let value = |input: &str| Lexer::new(input).lex_number().unwrap();
    assert_eq!(value("0x1A").to_i64(), 26);
    assert_eq!(value("010").to_i64(), 8);
    assert_eq!(value("0.5").to_f64(), Some(0.5));
    assert_eq!(value("3").to_i64(), 3);
    assert_eq!(value("-2.5e1").to_f64(), Some(-25.0));
}

#[test]
fn test_lex_number_stops_before_trailing_text() {
    let mut lexer = Lexer::new("09");
    let literal = lexer.lex_number().unwrap();
    assert_eq!(literal.text, "0");
    assert_eq!(lexer.peek(), Some('9'));
}

#[test]
fn test_lex_number_rejects_non_digit() {
    let mut lexer = Lexer::new("-x");
    let err = lexer.lex_number().unwrap_err();
    assert!(matches!(err, CfgError::UnexpectedCharacter { character: 'x', .. }));
    let entry = lexer.diagnostics().iter().next().unwrap();
    assert!(entry.starts_with("Harbol Config Parser :: invalid initial numeric digit: 'x'"));
}
