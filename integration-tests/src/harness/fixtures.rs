use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A measurement file that lives as long as the value.
pub struct MeasurementFile {
    _dir: TempDir,
    pub path: PathBuf,
}

impl MeasurementFile {
    pub fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("latencies.txt");
        fs::write(&path, contents).expect("failed to write measurement file");

        Self { _dir: dir, path }
    }

    /// One measurement per line.
    pub fn from_values(values: impl IntoIterator<Item = u64>) -> Self {
        let contents: String = values.into_iter().map(|v| format!("{v}\n")).collect();
        Self::new(&contents)
    }
}
