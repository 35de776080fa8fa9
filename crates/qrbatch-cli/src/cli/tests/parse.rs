//! Argument parsing for every subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_generate_defaults() {
    match parse(&["qrbatch", "generate", "orders.csv"]) {
        CliCommand::Generate {
            input,
            template,
            output,
            report,
            workers,
        } => {
            assert_eq!(input, PathBuf::from("orders.csv"));
            assert!(template.is_none());
            assert_eq!(output, PathBuf::from("qr_codes.zip"));
            assert!(report.is_none());
            assert!(workers.is_none());
        }
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_generate_all_options() {
    match parse(&[
        "qrbatch",
        "generate",
        "orders.csv",
        "-t",
        "meal",
        "-o",
        "out/codes.zip",
        "--report",
        "report.json",
        "--workers",
        "4",
    ]) {
        CliCommand::Generate {
            template,
            output,
            report,
            workers,
            ..
        } => {
            assert_eq!(template.as_deref(), Some("meal"));
            assert_eq!(output, PathBuf::from("out/codes.zip"));
            assert_eq!(report, Some(PathBuf::from("report.json")));
            assert_eq!(workers, Some(4));
        }
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_generate_requires_input() {
    assert!(Cli::try_parse_from(["qrbatch", "generate"]).is_err());
}

#[test]
fn cli_parse_check() {
    match parse(&["qrbatch", "check", "a.csv", "--template", "contact"]) {
        CliCommand::Check { input, template } => {
            assert_eq!(input, PathBuf::from("a.csv"));
            assert_eq!(template.as_deref(), Some("contact"));
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_templates() {
    match parse(&["qrbatch", "templates"]) {
        CliCommand::Templates => {}
        _ => panic!("expected Templates"),
    }
}

#[test]
fn cli_parse_sample() {
    match parse(&["qrbatch", "sample", "tiffin", "-o", "sample_template.csv"]) {
        CliCommand::Sample { template, output } => {
            assert_eq!(template, "tiffin");
            assert_eq!(output, Some(PathBuf::from("sample_template.csv")));
        }
        _ => panic!("expected Sample"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["qrbatch", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_global_config_after_subcommand() {
    let cli = Cli::try_parse_from(["qrbatch", "templates", "--config", "/tmp/q.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/q.toml")));
}

#[test]
fn cli_parse_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["qrbatch", "serve"]).is_err());
}
