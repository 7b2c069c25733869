use std::fs;
use std::path::Path;

use crate::error::TaskError;
use crate::extraction::StringExtractor;
use crate::io::FileContent;
use crate::signatures::{detect, read_header};
use crate::traits::TextExtractor;
use crate::types::{ExtractionResult, Outcome, SkipReason};

/// Classification followed by extraction for a single path.
///
/// Holds no per-file state, so one task value is shared by every worker.
#[derive(Debug, Clone, Default)]
pub struct FileTask<E = StringExtractor> {
    extractor: E,
}

impl<E: TextExtractor> FileTask<E> {
    pub fn new(extractor: E) -> Self {
        Self { extractor }
    }

    #[inline]
    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    /// Processes `path`. Failures become an empty result carrying
    /// [`Outcome::Failed`].
    pub fn run(&self, path: &Path) -> ExtractionResult {
        match self.try_run(path) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("{}", e);
                ExtractionResult::empty(path, Outcome::Failed(e))
            }
        }
    }

    /// Like [`FileTask::run`], but returns the I/O failure instead of folding
    /// it into the result.
    ///
    /// Entries that are not regular files and headers that cannot be read are
    /// not failures: they yield `Skipped` and `NotBinary` results.
    pub fn try_run(&self, path: &Path) -> Result<ExtractionResult, TaskError> {
        let metadata = match fs::metadata(path) {
            Ok(m) if m.is_file() => m,
            _ => {
                return Ok(ExtractionResult::empty(
                    path,
                    Outcome::Skipped(SkipReason::NotRegularFile),
                ));
            }
        };

        let Some(format) = read_header(path).ok().and_then(|h| detect(&h)) else {
            return Ok(ExtractionResult::empty(path, Outcome::NotBinary));
        };

        if metadata.len() == 0 {
            return Ok(ExtractionResult::empty(
                path,
                Outcome::Skipped(SkipReason::Empty),
            ));
        }

        let content = FileContent::open(path).map_err(|e| TaskError::io(path, e))?;
        let fragments = self.extractor.extract(&content);

        tracing::debug!(
            "{}: {} ({} bytes, {} fragments)",
            path.display(),
            format,
            metadata.len(),
            fragments.len()
        );

        Ok(ExtractionResult::new(
            path,
            fragments,
            Outcome::Extracted(format),
        ))
    }
}
