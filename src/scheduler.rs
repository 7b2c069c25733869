use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;

use crossbeam_channel::unbounded;
use parking_lot::Mutex;
use rayon::ThreadPoolBuilder;

use crate::error::{Result, TaskError};
use crate::task::FileTask;
use crate::traits::{ProgressSink, TextExtractor};
use crate::types::{ExtractionResult, Outcome};

pub const DEFAULT_WORKERS: usize = 2;

/// Fixed-size worker pool running one [`FileTask`] per path.
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    workers: usize,
}

impl Scheduler {
    /// `workers` is used as given, except that zero becomes one.
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Runs `task` over every path and returns one result per path, in
    /// completion order.
    ///
    /// `progress` sees one update per completed path, serialized and
    /// counting up to `paths.len()`. A task that panics still produces a
    /// result, with [`Outcome::Failed`].
    pub fn run<E: TextExtractor>(
        &self,
        paths: Vec<PathBuf>,
        task: &FileTask<E>,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<ExtractionResult>> {
        let total = paths.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("scan-worker-{}", i))
            .build()?;

        let completed = Mutex::new(0usize);
        let (result_tx, result_rx) = unbounded::<ExtractionResult>();
        let mut results = Vec::with_capacity(total);

        tracing::info!("Scanning {} files with {} workers", total, self.workers);

        pool.in_place_scope(|scope| {
            for path in paths {
                let tx = result_tx.clone();
                let completed = &completed;

                scope.spawn(move |_| {
                    let result = run_guarded(task, path);

                    {
                        let mut done = completed.lock();
                        *done += 1;
                        progress.update(*done, total);
                    }

                    let _ = tx.send(result);
                });
            }

            drop(result_tx);
            results.extend(result_rx.iter());
        });

        progress.finish();

        debug_assert_eq!(results.len(), total);
        Ok(results)
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(DEFAULT_WORKERS)
    }
}

fn run_guarded<E: TextExtractor>(task: &FileTask<E>, path: PathBuf) -> ExtractionResult {
    match panic::catch_unwind(AssertUnwindSafe(|| task.run(&path))) {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::warn!("Worker panicked on {}: {}", path.display(), message);
            ExtractionResult::empty(
                path.clone(),
                Outcome::Failed(TaskError::Panicked { path, message }),
            )
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
