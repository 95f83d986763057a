//! Tests for the output module surface.

use super::*;

#[test]
fn output_format_parses_known_names() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
}

#[test]
fn output_format_rejects_unknown_names() {
    let err = "sarif".parse::<OutputFormat>().unwrap_err();
    assert!(err.contains("Unknown output format"));
}

#[test]
fn output_format_defaults_to_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}
