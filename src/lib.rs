pub mod config;
pub mod error;
pub mod extraction;
pub mod io;
pub mod progress;
pub mod report;
pub mod scan;
pub mod scheduler;
pub mod signatures;
pub mod task;
mod traits;
pub mod types;
pub mod walk;

pub use config::{ReportFormat, ResultOrder, ScanJob, parse_worker_count};
pub use error::{ConfigError, Result, ScanError, TaskError};
pub use extraction::{DEFAULT_MIN_LENGTH, StringExtractor};
pub use scheduler::Scheduler;
pub use signatures::{BinaryFormat, classify, classify_file, detect};
pub use task::FileTask;
pub use traits::{NoProgress, ProgressSink, TextExtractor};
pub use types::{ExtractionResult, Outcome, ScanSummary, SkipReason};
