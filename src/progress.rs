//! Progress reporting for the CLI

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use parking_lot::Mutex;
use std::io::Write;

use crate::traits::ProgressSink;

/// Status text for `completed` out of `total` files.
pub fn format_progress(completed: usize, total: usize) -> String {
    let pct = if total == 0 {
        100.0
    } else {
        completed as f64 / total as f64 * 100.0
    };
    format!("{}/{} files... {:.2}%", completed, total, pct)
}

/// Single overwritten status line drawn with indicatif
pub struct ConsoleProgress {
    bar: ProgressBar,
}

impl ConsoleProgress {
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stdout());
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[!] {msg}")
                .expect("invalid progress template"),
        );
        Self { bar }
    }
}

impl ProgressSink for ConsoleProgress {
    fn update(&self, completed: usize, total: usize) {
        self.bar.set_position(completed as u64);
        self.bar.set_message(format_progress(completed, total));
    }

    fn finish(&self) {
        self.bar.finish();
    }
}

/// Carriage-return status line for writers that are not terminals
pub struct LineProgress<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> LineProgress<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write + Send> ProgressSink for LineProgress<W> {
    fn update(&self, completed: usize, total: usize) {
        let mut out = self.out.lock();
        let _ = write!(out, "\r[!] {}", format_progress(completed, total));
        let _ = out.flush();
    }

    fn finish(&self) {
        let mut out = self.out.lock();
        let _ = writeln!(out);
        let _ = out.flush();
    }
}
