use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OtaError>;

/// Reasons the OTA document could not be produced
#[derive(Error, Debug)]
pub enum OtaError {
    #[error("Missing required properties in \"{}\": {}", path.display(), keys.join(", "))]
    MissingProperties { path: PathBuf, keys: Vec<&'static str> },

    #[error("Invalid value for \"{key}\": \"{value}\" ({reason})")]
    InvalidProperty {
        key: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("No zip file found for version {version} in \"{}\"", dir.display())]
    MissingArchive { version: String, dir: PathBuf },

    #[error("Failed reading \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl OtaError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OtaError::Io {
            path: path.into(),
            source,
        }
    }
}
