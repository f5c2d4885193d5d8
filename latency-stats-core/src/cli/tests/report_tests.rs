use crate::cli::{ReportArgs, run};
use crate::input::InputSource;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    report: ReportArgs,
}

fn parse(args: &[&str]) -> Result<ReportArgs, clap::Error> {
    TestCli::try_parse_from(std::iter::once("latency-stats").chain(args.iter().copied()))
        .map(|cli| cli.report)
}

#[test]
fn single_dash_reads_stdin() {
    let args = parse(&["-"]).unwrap();

    assert_eq!(args.input, InputSource::Stdin);
    assert!(args.percentiles.is_empty());
    assert!(!args.json);
}

#[test]
fn missing_input_is_a_usage_error() {
    assert!(parse(&[]).is_err());
}

#[test]
fn extra_positional_is_a_usage_error() {
    assert!(parse(&["a.txt", "b.txt"]).is_err());
}

#[test]
fn percentile_flag_is_repeatable() {
    let args = parse(&["lat.txt", "-p", "50", "--percentile", "99.9", "--buckets", "20"]).unwrap();

    assert_eq!(args.input, InputSource::File(PathBuf::from("lat.txt")));
    assert_eq!(args.percentiles, vec![50.0, 99.9]);
    assert_eq!(args.buckets, Some(20));
}

#[test]
fn run_reports_file_measurements() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("lat.txt");
    fs::write(&path, "1 2 3 4 5\n").unwrap();
    let args = parse(&[path.to_str().unwrap(), "--json"]).unwrap();

    // Act
    let result = run(args);

    // Assert
    assert!(result.is_ok());
}

#[test]
fn run_fails_for_missing_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let args = parse(&[path.to_str().unwrap()]).unwrap();

    // Act
    let err = run(args).unwrap_err();

    // Assert
    assert!(format!("{err:#}").contains("missing.txt"));
}

#[test]
fn run_rejects_invalid_percentile() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("lat.txt");
    fs::write(&path, "1\n").unwrap();
    let args = parse(&[path.to_str().unwrap(), "-p", "101"]).unwrap();

    // Act
    let err = run(args).unwrap_err();

    // Assert
    assert!(err.to_string().contains("101"));
}
