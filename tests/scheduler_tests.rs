use datasplunk::{
    ExtractionResult, FileTask, NoProgress, Outcome, ProgressSink, Scheduler, StringExtractor,
    TaskError, TextExtractor,
};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[derive(Default)]
struct RecordingProgress {
    updates: Mutex<Vec<(usize, usize)>>,
    finished: Mutex<usize>,
}

impl ProgressSink for RecordingProgress {
    fn update(&self, completed: usize, total: usize) {
        self.updates.lock().push((completed, total));
    }

    fn finish(&self) {
        *self.finished.lock() += 1;
    }
}

struct PanickingExtractor;

impl TextExtractor for PanickingExtractor {
    fn extract(&self, content: &[u8]) -> Vec<String> {
        if content.windows(5).any(|w| w == b"PANIC") {
            panic!("extractor exploded");
        }
        StringExtractor::default().extract(content)
    }
}

fn fixture(dir: &TempDir, count: usize) -> Vec<PathBuf> {
    (0..count)
        .map(|i| {
            let path = dir.path().join(format!("file_{:03}.bin", i));
            let data = if i % 2 == 0 {
                format!("\x7fELF\x00string number {:03}\x00", i).into_bytes()
            } else {
                format!("text file {:03}", i).into_bytes()
            };
            fs::write(&path, data).unwrap();
            path
        })
        .collect()
}

fn paths_of(results: &[ExtractionResult]) -> HashSet<PathBuf> {
    results.iter().map(|r| r.path.clone()).collect()
}

#[test]
fn test_one_result_per_path_for_any_worker_count() {
    let dir = TempDir::new().unwrap();
    let paths = fixture(&dir, 40);
    let expected: HashSet<PathBuf> = paths.iter().cloned().collect();
    let task = FileTask::<StringExtractor>::default();

    for workers in [1, 2, 3, 8, 64] {
        let progress = RecordingProgress::default();
        let results = Scheduler::new(workers)
            .run(paths.clone(), &task, &progress)
            .unwrap();

        assert_eq!(results.len(), paths.len());
        assert_eq!(paths_of(&results), expected);

        let updates = progress.updates.lock();
        assert_eq!(updates.len(), paths.len());
        assert_eq!(updates.last(), Some(&(paths.len(), paths.len())));
        assert_eq!(*progress.finished.lock(), 1);
    }
}

#[test]
fn test_progress_counts_up_by_one() {
    let dir = TempDir::new().unwrap();
    let paths = fixture(&dir, 25);
    let task = FileTask::<StringExtractor>::default();
    let progress = RecordingProgress::default();

    Scheduler::new(4).run(paths, &task, &progress).unwrap();

    let updates = progress.updates.lock();
    for (i, &(completed, total)) in updates.iter().enumerate() {
        assert_eq!(completed, i + 1);
        assert_eq!(total, 25);
    }
}

#[test]
fn test_binaries_and_text_files_are_told_apart() {
    let dir = TempDir::new().unwrap();
    let paths = fixture(&dir, 10);
    let task = FileTask::<StringExtractor>::default();

    let results = Scheduler::new(3).run(paths, &task, &NoProgress).unwrap();

    let with_strings = results.iter().filter(|r| !r.is_empty()).count();
    assert_eq!(with_strings, 5);
    for result in results.iter().filter(|r| !r.is_empty()) {
        assert!(result.fragments[0].starts_with("string number"));
    }
}

#[test]
fn test_panicking_task_still_produces_a_result() {
    let dir = TempDir::new().unwrap();
    let mut paths = fixture(&dir, 6);
    let bad = dir.path().join("bad.bin");
    fs::write(&bad, b"\x7fELF\x00PANIC\x00").unwrap();
    paths.push(bad.clone());

    let task = FileTask::new(PanickingExtractor);
    let progress = RecordingProgress::default();
    let results = Scheduler::new(2).run(paths, &task, &progress).unwrap();

    assert_eq!(results.len(), 7);
    assert_eq!(progress.updates.lock().len(), 7);

    let failed = results.iter().find(|r| r.path == bad).unwrap();
    assert!(failed.is_empty());
    assert!(matches!(
        failed.outcome,
        Outcome::Failed(TaskError::Panicked { .. })
    ));
    assert_eq!(
        results.iter().filter(|r| r.outcome.is_failure()).count(),
        1
    );
}

#[test]
fn test_missing_paths_are_accounted_for() {
    let paths: Vec<PathBuf> = (0..5)
        .map(|i| PathBuf::from(format!("/nonexistent/datasplunk/{}", i)))
        .collect();
    let task = FileTask::<StringExtractor>::default();

    let results = Scheduler::new(2).run(paths, &task, &NoProgress).unwrap();

    assert_eq!(results.len(), 5);
    assert!(results.iter().all(|r| r.is_empty()));
}
