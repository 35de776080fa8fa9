//! Command handlers run against a temp directory with the default config.

use crate::cli::commands::{
    ensure_csv, resolve_template, run_check, run_generate, run_sample, GenerateArgs,
};
use qrbatch_core::config::QrBatchConfig;
use std::path::Path;

const TIFFIN_CSV: &str = "Tiffin Number,Notes\n101,veg\n102,\n103,late\n";

fn write(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

fn args(input: std::path::PathBuf, output: std::path::PathBuf) -> GenerateArgs {
    GenerateArgs {
        input,
        template: None,
        output,
        report: None,
        workers: None,
    }
}

#[test]
fn generate_writes_archive_and_report() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = QrBatchConfig::default();
    let input = write(dir.path(), "orders.csv", TIFFIN_CSV);
    let output = dir.path().join("qr_codes.zip");
    let report = dir.path().join("report.json");

    run_generate(
        &cfg,
        GenerateArgs {
            report: Some(report.clone()),
            workers: Some(2),
            ..args(input, output.clone())
        },
    )
    .unwrap();

    let zip = std::fs::read(&output).unwrap();
    assert_eq!(&zip[..2], b"PK");
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["template"], "tiffin");
    assert_eq!(json["rows"], 3);
    assert_eq!(json["entries"][0]["name"], "qr_1_tiffin_101.png");
    assert_eq!(json["entries"].as_array().unwrap().len(), 3);
}

#[test]
fn generate_rejects_non_csv_extension() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = QrBatchConfig::default();
    let input = write(dir.path(), "orders.txt", TIFFIN_CSV);
    let output = dir.path().join("qr_codes.zip");

    let err = run_generate(&cfg, args(input, output.clone())).unwrap_err();
    assert!(err.to_string().contains("invalid file type"));
    assert!(!output.exists());
}

#[test]
fn generate_schema_failure_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = QrBatchConfig::default();
    let input = write(dir.path(), "orders.csv", "Name\nAsha\n");
    let output = dir.path().join("qr_codes.zip");

    let err = run_generate(&cfg, args(input, output.clone())).unwrap_err();
    assert_eq!(
        format!("{:#}", err),
        "CSV must have a header named \"Tiffin Number\"."
    );
    assert!(!output.exists());
}

#[test]
fn generate_parse_failure_prints_message_once() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = QrBatchConfig::default();
    let input = write(dir.path(), "orders.csv", "Tiffin Number,Notes\n101,a,b\n");
    let output = dir.path().join("qr_codes.zip");

    let err = run_generate(&cfg, args(input, output.clone())).unwrap_err();
    assert_eq!(
        format!("{:#}", err),
        "Failed to read CSV file: row 2 has 3 fields, but the header has 2"
    );
    assert!(!output.exists());
}

#[test]
fn generate_rejects_zero_workers() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = QrBatchConfig::default();
    let input = write(dir.path(), "orders.csv", TIFFIN_CSV);
    let output = dir.path().join("qr_codes.zip");

    let err = run_generate(
        &cfg,
        GenerateArgs {
            workers: Some(0),
            ..args(input, output)
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("--workers"));
}

#[test]
fn oversized_input_is_refused_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = QrBatchConfig {
        max_input_bytes: 8,
        ..QrBatchConfig::default()
    };
    let input = write(dir.path(), "orders.csv", TIFFIN_CSV);

    let err = run_check(&cfg, &input, None).unwrap_err();
    assert!(err.to_string().contains("limit"));
}

#[test]
fn check_accepts_matching_header() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = QrBatchConfig::default();
    let input = write(dir.path(), "orders.csv", TIFFIN_CSV);
    run_check(&cfg, &input, Some("tiffin")).unwrap();
}

#[test]
fn unknown_template_lists_available() {
    let cfg = QrBatchConfig::default();
    let err = resolve_template(&cfg, Some("nope")).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("nope"));
    assert!(msg.contains("tiffin"));
    assert!(msg.contains("meal"));
}

#[test]
fn sample_output_validates_against_its_template() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = QrBatchConfig::default();
    let path = dir.path().join("sample_template.csv");

    run_sample(&cfg, "meal", Some(&path)).unwrap();
    run_check(&cfg, &path, Some("meal")).unwrap();
}

#[test]
fn csv_extension_is_case_insensitive() {
    assert!(ensure_csv(Path::new("ORDERS.CSV")).is_ok());
    assert!(ensure_csv(Path::new("orders")).is_err());
    assert!(ensure_csv(Path::new("orders.csv.bak")).is_err());
}
