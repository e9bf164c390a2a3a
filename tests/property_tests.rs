//! Property-based tests for the text round-trip and for parser robustness.

use harbol_cfg::{Color, ParseOptions, Parser, Section, Value, Vector4, export};
use proptest::prelude::*;

fn finite_f64() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
}

fn finite_f32() -> impl Strategy<Value = f32> {
    prop::num::f32::NORMAL | prop::num::f32::SUBNORMAL | prop::num::f32::ZERO
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<String>().prop_map(Value::String),
        any::<i64>().prop_map(Value::Int),
        finite_f64().prop_map(Value::Float),
        any::<bool>().prop_map(Value::Bool),
        any::<[u8; 4]>().prop_map(|c| Value::Color(Color::from(c))),
        prop::array::uniform4(finite_f32()).prop_map(|v| Value::Vector4(Vector4::from(v))),
    ]
}

fn section_from(entries: Vec<(String, Value)>) -> Section {
    let mut section = Section::new();
    for (key, value) in entries {
        section.insert_or_replace(key, value);
    }
    section
}

fn section() -> impl Strategy<Value = Section> {
    let value = leaf().prop_recursive(4, 32, 6, |inner| {
        prop::collection::vec((any::<String>(), inner), 0..6)
            .prop_map(|entries| Value::Section(section_from(entries)))
    });
    prop::collection::vec((any::<String>(), value), 0..8).prop_map(section_from)
}

fn parse_quiet(input: &str) -> harbol_cfg::ParseOutcome {
    Parser::with_options(input, &ParseOptions::quiet()).parse_document()
}

proptest! {
    #[test]
    fn prop_text_roundtrip(doc in section()) {
        let text = export::to_text(&doc);
        let outcome = parse_quiet(&text);
        prop_assert!(outcome.is_clean(), "diagnostics {:?} for {:?}", outcome.diagnostics, text);
        prop_assert_eq!(outcome.document, doc);
    }

    #[test]
    fn prop_write_text_matches_to_text(doc in section()) {
        let mut buf = Vec::new();
        export::write_text(&doc, &mut buf).unwrap();
        prop_assert_eq!(String::from_utf8(buf).unwrap(), export::to_text(&doc));
    }

    #[test]
    fn prop_parser_never_panics(input in any::<String>()) {
        let outcome = parse_quiet(&input);
        prop_assert!(outcome.diagnostics.len() <= harbol_cfg::diagnostics::MAX_DIAGNOSTICS);
    }

    #[test]
    fn prop_resolver_never_panics(doc in section(), path in "[a-z./\\\\]{0,12}") {
        let _ = doc.resolve(&path);
        let _ = doc.get_type(&path);
    }

    #[test]
    fn prop_int_literals(n in any::<i64>()) {
        let outcome = parse_quiet(&format!("\"n\": {}", n));
        prop_assert_eq!(outcome.document.get_int("n").unwrap(), n);
    }
}
