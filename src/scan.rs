use std::path::PathBuf;

use crate::config::{ResultOrder, ScanJob};
use crate::error::Result;
use crate::extraction::StringExtractor;
use crate::report::write_report;
use crate::scheduler::Scheduler;
use crate::task::FileTask;
use crate::traits::ProgressSink;
use crate::types::{ExtractionResult, ScanSummary};
use crate::walk::collect_files;

/// Lists the files a job will scan.
pub fn discover(job: &ScanJob) -> Vec<PathBuf> {
    let files = collect_files(job.target_dir());
    tracing::info!(
        "Found {} files under {}",
        files.len(),
        job.target_dir().display()
    );
    files
}

/// Classifies and extracts every path, ordered as the job asks.
pub fn extract_all(
    job: &ScanJob,
    paths: Vec<PathBuf>,
    progress: &dyn ProgressSink,
) -> Result<Vec<ExtractionResult>> {
    let task = FileTask::new(StringExtractor::new(job.min_length()));
    let mut results = Scheduler::new(job.workers()).run(paths, &task, progress)?;

    if job.order() == ResultOrder::ByPath {
        results.sort_by(|a, b| a.path.cmp(&b.path));
    }

    Ok(results)
}

/// Scans `paths`, writes the report to the job's output and summarizes the
/// run.
pub fn run_job(
    job: &ScanJob,
    paths: Vec<PathBuf>,
    progress: &dyn ProgressSink,
) -> Result<ScanSummary> {
    let results = extract_all(job, paths, progress)?;
    let summary = ScanSummary::from_results(&results);

    write_report(job.output(), &results, job.format())?;
    tracing::info!(
        "Wrote {} records to {}",
        summary.with_strings,
        job.output().display()
    );

    Ok(summary)
}
