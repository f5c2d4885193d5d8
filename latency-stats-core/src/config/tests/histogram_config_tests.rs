use crate::config::{ConfigError, DEFAULT_LINEAR_BUCKETS, DEFAULT_PERCENTILES, HistogramConfig};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_fields_fall_back_to_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("latency.toml");
    fs::write(&path, "linear_buckets = 250\n").unwrap();

    // Act
    let cfg = HistogramConfig::from_file(&path).unwrap();

    // Assert
    assert_eq!(
        cfg,
        HistogramConfig {
            linear_buckets: 250,
            percentiles: DEFAULT_PERCENTILES.to_vec(),
        }
    );
}

#[test]
fn percentiles_accept_integers_and_fractions() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("latency.toml");
    fs::write(&path, "percentiles = [50, 99.9, 100]\n").unwrap();

    // Act
    let cfg = HistogramConfig::from_file(&path).unwrap();

    // Assert
    assert_eq!(cfg.linear_buckets, DEFAULT_LINEAR_BUCKETS);
    assert_eq!(cfg.percentiles, vec![50.0, 99.9, 100.0]);
}

#[test]
fn unknown_keys_are_a_parse_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("latency.toml");
    fs::write(&path, "buckets = 3\n").unwrap();

    // Act
    let result = HistogramConfig::from_file(&path);

    // Assert
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempdir().unwrap();

    let result = HistogramConfig::from_file(&dir.path().join("nope.toml"));

    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn overrides_replace_only_given_values() {
    // Act
    let cfg = HistogramConfig::default().with_overrides(Some(10), &[]);

    // Assert
    assert_eq!(cfg.linear_buckets, 10);
    assert_eq!(cfg.percentiles, DEFAULT_PERCENTILES.to_vec());

    let cfg = cfg.with_overrides(None, &[90.0]);
    assert_eq!(cfg.linear_buckets, 10);
    assert_eq!(cfg.percentiles, vec![90.0]);
}

#[test]
fn validate_rejects_out_of_range_percentiles() {
    let cfg = HistogramConfig::default().with_overrides(None, &[50.0, 100.5]);

    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::InvalidPercentile { value }) if value == 100.5
    ));
}

#[test]
fn validate_rejects_nan() {
    let cfg = HistogramConfig::default().with_overrides(None, &[f64::NAN]);

    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::InvalidPercentile { .. })
    ));
}

#[test]
fn validate_rejects_empty_percentiles() {
    let cfg = HistogramConfig {
        linear_buckets: 10,
        percentiles: Vec::new(),
    };

    assert!(matches!(cfg.validate(), Err(ConfigError::NoPercentiles)));
}

#[test]
fn build_engine_clamps_zero_buckets() {
    let cfg = HistogramConfig::default().with_overrides(Some(0), &[]);

    let engine = cfg.build_engine().unwrap();

    assert_eq!(engine.linear_bucket_count(), 1);
    assert_eq!(engine.targets().len(), DEFAULT_PERCENTILES.len());
}
