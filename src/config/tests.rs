// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::ast::Color;

const APP_CONFIG: &str = r#"
"app": {
    "name": "TestApp"
    "debug": true
    "server": {
        "host": "localhost"
        "port": 8080
        "timeout": 2.5
    }
    "accent": c[ 10, 20, 30, 255 ]
}
"#;

#[test]
fn test_config_from_string() {
    let config: Config = APP_CONFIG.parse().expect("Failed to parse config");

    let app_name: String = config.get("app.name").expect("Failed to get app.name");
    assert_eq!(app_name, "TestApp");

    let host: &str = config.get("app.server.host").expect("Failed to get host");
    assert_eq!(host, "localhost");

    let port: u16 = config.get("app.server.port").expect("Failed to get port");
    assert_eq!(port, 8080);

    let debug: bool = config.get("app.debug").expect("Failed to get debug");
    assert!(debug);

    let accent: Color = config.get("app.accent").expect("Failed to get accent");
    assert_eq!(accent, Color::new(10, 20, 30, 255));

    assert!(config.has("app.name"));
    assert!(!config.has("app.nonexistent"));

    let server_keys = config.get_keys("app.server").expect("Failed to get server keys");
    assert_eq!(server_keys, ["host", "port", "timeout"]);
    assert_eq!(config.get_keys("").unwrap(), ["app"]);
}

#[test]
fn test_get_optional_and_defaults() {
    let config = Config::parse(APP_CONFIG);

    assert_eq!(config.get_optional::<f64>("app.server.timeout").unwrap(), Some(2.5));
    assert_eq!(config.get_optional::<f64>("app.server.retries").unwrap(), None);

    // present but of another type is still an error
    let err = config.get_optional::<i64>("app.name").unwrap_err();
    assert!(matches!(err, CfgError::TypeMismatch { .. }));

    assert_eq!(config.get_or("app.server.retries", 3i64), 3);
    assert_eq!(config.get_or("app.server.port", 0i64), 8080);
}

#[test]
fn test_get_keys_requires_section() {
    let config = Config::parse(APP_CONFIG);
    assert!(matches!(
        config.get_keys("app.name"),
        Err(CfgError::TypeMismatch { .. })
    ));
    assert!(matches!(
        config.get_keys("nope"),
        Err(CfgError::PathNotFound { .. })
    ));
}

#[test]
fn test_lenient_parse_keeps_partial_document() {
    let options = ParseOptions::quiet();
    let config = Config::parse_with_options(r#""a": 1, "b": @"#, &options);

    assert!(!config.is_clean());
    assert!(config.error().is_some());
    assert_eq!(config.diagnostics().len(), 1);
    assert_eq!(config.get_or("a", 0i64), 1);
    assert!(config.ensure_clean().is_err());
}

#[test]
fn test_strict_parse_rejects_errors() {
    let result: Result<Config, _> = r#""a": 1, "a": 2"#.parse();
    assert!(matches!(result, Err(CfgError::DuplicateKey { .. })));
}

#[test]
fn test_document_mut_and_text() {
    let mut config = Config::parse(r#""volume": 3"#);
    config.document_mut().set_int("volume", 7, false).unwrap();
    assert_eq!(config.to_text(), "\"volume\": 7\n");
    assert!(config.to_json().contains("\"volume\": 7"));
    assert!(config.source_path().is_none());
}

#[test]
fn test_from_section() {
    let mut doc = Section::new();
    doc.insert("k", Value::Bool(true)).unwrap();
    let config = Config::from(doc.clone());
    assert!(config.is_clean());
    assert_eq!(config.into_document(), doc);
}

#[test]
fn test_expand_home() {
    let plain = expand_home(Path::new("relative/file.cfg")).unwrap();
    assert_eq!(plain, PathBuf::from("relative/file.cfg"));

    if let Some(home) = dirs::home_dir() {
        let expanded = expand_home(Path::new("~/app/file.cfg")).unwrap();
        assert_eq!(expanded, home.join("app/file.cfg"));
    }
}
