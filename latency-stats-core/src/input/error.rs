use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {source_name}: {source}")]
    Read {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid measurement '{token}': {source}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

impl InputError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            source_name: path.into().display().to_string(),
            source,
        }
    }

    pub fn read_stdin(source: std::io::Error) -> Self {
        Self::Read {
            source_name: "stdin".to_string(),
            source,
        }
    }
}
