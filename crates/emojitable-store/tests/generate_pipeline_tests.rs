mod common;

use common::{FailingSource, StaticSource, SCENARIO_JSON};
use emojitable_core::errors::ExErrorKind;
use emojitable_core::{BuildOptions, VariationSequences};
use emojitable_store::{generate, FileSource, OutputStyle};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn parse_output(raw: &str) -> HashMap<String, String> {
    serde_json::from_str(raw).unwrap()
}

#[test]
fn test_end_to_end_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("upstream.json");
    let output = temp_dir.path().join("emoji.json");
    fs::write(&input, SCENARIO_JSON).unwrap();

    let report = generate(
        &FileSource::new(&input),
        &BuildOptions::default(),
        &output,
        OutputStyle::Compact,
    )
    .unwrap();

    assert_eq!(report.record_count, 2);
    assert_eq!(report.table_len, 2);
    assert_eq!(report.output, output);

    let raw = fs::read_to_string(&output).unwrap();
    assert_eq!(raw, "{\"grinning\":\"\u{1F600}\",\"hash\":\"#\u{FE0F}\"}");
    let expected: HashMap<String, String> = [
        ("grinning".to_string(), "\u{1F600}".to_string()),
        ("hash".to_string(), "#\u{FE0F}".to_string()),
    ]
    .into_iter()
    .collect();
    assert_eq!(parse_output(&raw), expected);
}

#[test]
fn test_invalid_hex_produces_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("emoji.json");
    let source = StaticSource(vec![
        json!({"short_name": "grinning", "unified": "1F600"}),
        json!({"short_name": "broken", "unified": "ZZZZ"}),
    ]);

    let err = generate(&source, &BuildOptions::default(), &output, OutputStyle::Compact)
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Decode);
    assert!(!output.exists());
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_failure_leaves_previous_output_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("emoji.json");
    fs::write(&output, "{\"old\":\"x\"}").unwrap();
    let source = StaticSource(vec![json!({"unified": "1F600"})]);

    let err = generate(&source, &BuildOptions::default(), &output, OutputStyle::Compact)
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Schema);
    assert_eq!(fs::read_to_string(&output).unwrap(), "{\"old\":\"x\"}");
}

#[test]
fn test_fetch_failure_produces_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("emoji.json");

    let err = generate(
        &FailingSource,
        &BuildOptions::default(),
        &output,
        OutputStyle::Compact,
    )
    .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Fetch);
    assert!(!output.exists());
}

#[test]
fn test_missing_input_file_is_fetch_error() {
    let temp_dir = TempDir::new().unwrap();

    let err = generate(
        &FileSource::new(temp_dir.path().join("nope.json")),
        &BuildOptions::default(),
        &temp_dir.path().join("emoji.json"),
        OutputStyle::Compact,
    )
    .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Fetch);
}

#[test]
fn test_enrichments_flow_through_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("emoji.json");
    let source = StaticSource(vec![
        json!({"short_name": "copyright", "unified": "00A9"}),
        json!({
            "short_name": "wave",
            "unified": "1F44B",
            "skin_variations": {"1F3FD": {"unified": "1F44B-1F3FD"}}
        }),
    ]);
    let options = BuildOptions {
        skin_tones: true,
        variation_sequences: Some(VariationSequences::parse(
            "00A9 FE0F  ; emoji style; # (1.1) COPYRIGHT SIGN\n",
        )),
    };

    let report = generate(&source, &options, &output, OutputStyle::Pretty).unwrap();

    assert_eq!(report.record_count, 2);
    assert_eq!(report.table_len, 3);
    let written: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["copyright"], "\u{A9}\u{FE0F}");
    assert_eq!(written["wave::skin-tone-4"], "\u{1F44B}\u{1F3FD}");
}
