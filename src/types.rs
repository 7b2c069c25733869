use std::path::PathBuf;

use crate::error::TaskError;
use crate::signatures::BinaryFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Directory, device, broken link or anything else that failed to stat
    /// as a regular file.
    NotRegularFile,
    Empty,
}

/// Why an [`ExtractionResult`] holds the fragments it does.
#[derive(Debug)]
pub enum Outcome {
    Skipped(SkipReason),
    NotBinary,
    Extracted(BinaryFormat),
    Failed(TaskError),
}

impl Outcome {
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    #[inline]
    pub fn format(&self) -> Option<BinaryFormat> {
        match self {
            Outcome::Extracted(format) => Some(*format),
            _ => None,
        }
    }
}

/// Fragments found in one file. Exactly one is produced per scanned path.
#[derive(Debug)]
pub struct ExtractionResult {
    pub path: PathBuf,
    pub fragments: Vec<String>,
    pub outcome: Outcome,
}

impl ExtractionResult {
    pub fn new(path: impl Into<PathBuf>, fragments: Vec<String>, outcome: Outcome) -> Self {
        Self {
            path: path.into(),
            fragments,
            outcome,
        }
    }

    pub fn empty(path: impl Into<PathBuf>, outcome: Outcome) -> Self {
        Self::new(path, Vec::new(), outcome)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub total: usize,
    pub binaries: usize,
    pub with_strings: usize,
    pub fragments: usize,
    pub not_binary: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl ScanSummary {
    pub fn from_results(results: &[ExtractionResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };

        for result in results {
            match result.outcome {
                Outcome::Extracted(_) => {
                    summary.binaries += 1;
                    if !result.is_empty() {
                        summary.with_strings += 1;
                        summary.fragments += result.fragments.len();
                    }
                }
                Outcome::NotBinary => summary.not_binary += 1,
                Outcome::Skipped(_) => summary.skipped += 1,
                Outcome::Failed(_) => summary.failed += 1,
            }
        }

        summary
    }
}
