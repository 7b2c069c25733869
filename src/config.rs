use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::error::ConfigError;
use crate::extraction::DEFAULT_MIN_LENGTH;
use crate::scheduler::DEFAULT_WORKERS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Order in which results are written to the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultOrder {
    /// Whatever order the workers finished in.
    #[default]
    Completion,
    ByPath,
}

/// Parses a user-supplied worker count. Empty, unparsable, zero and negative
/// input all fall back to [`DEFAULT_WORKERS`].
pub fn parse_worker_count(input: &str) -> usize {
    match input.trim().parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n).unwrap_or(DEFAULT_WORKERS),
        _ => DEFAULT_WORKERS,
    }
}

/// Validated parameters of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanJob {
    target_dir: PathBuf,
    output: PathBuf,
    workers: usize,
    min_length: usize,
    format: ReportFormat,
    order: ResultOrder,
}

impl ScanJob {
    /// Validates the target directory and output path. The directory is
    /// canonicalized so every scanned path is absolute.
    pub fn new(
        target_dir: impl AsRef<Path>,
        output: impl AsRef<Path>,
        workers: usize,
    ) -> Result<Self, ConfigError> {
        let target_dir = target_dir.as_ref();
        if target_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingDirectory);
        }
        if !target_dir.is_dir() {
            return Err(ConfigError::NotADirectory(target_dir.to_path_buf()));
        }

        let output = output.as_ref();
        if output.as_os_str().is_empty() {
            return Err(ConfigError::MissingOutput);
        }

        let target_dir = fs::canonicalize(target_dir).map_err(|source| ConfigError::Resolve {
            path: target_dir.to_path_buf(),
            source,
        })?;

        Ok(Self {
            target_dir,
            output: output.to_path_buf(),
            workers: workers.max(1),
            min_length: DEFAULT_MIN_LENGTH,
            format: ReportFormat::default(),
            order: ResultOrder::default(),
        })
    }

    pub fn with_min_length(mut self, min_length: usize) -> Result<Self, ConfigError> {
        if min_length == 0 {
            return Err(ConfigError::InvalidMinLength);
        }
        self.min_length = min_length;
        Ok(self)
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_order(mut self, order: ResultOrder) -> Self {
        self.order = order;
        self
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    pub fn order(&self) -> ResultOrder {
        self.order
    }
}
