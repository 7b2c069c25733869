use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Invalid run parameters. Always fatal, raised before any scanning starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No directory provided")]
    MissingDirectory,

    #[error("Not a valid directory: {0}")]
    NotADirectory(PathBuf),

    #[error("No output file provided")]
    MissingOutput,

    #[error("Minimum string length must be at least 1")]
    InvalidMinLength,

    #[error("Failed to resolve {path}: {source}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure while processing a single file. Never aborts a run.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Worker panicked while processing {path}: {message}")]
    Panicked { path: PathBuf, message: String },
}

impl TaskError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;

/// Run-level failure. Raised before scanning starts or after it ends, never
/// because of an individual file.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Failed to write report {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
