use clap::Parser;
use std::path::PathBuf;

use datasplunk::{DEFAULT_MIN_LENGTH, ReportFormat};

#[derive(Parser, Debug)]
#[command(name = "datasplunk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract readable strings from compiled binaries in a directory tree", long_about = None)]
pub struct Cli {
    /// Directory to scan (prompted for when omitted)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Report file to write (prompted for when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of worker threads; invalid values fall back to 2
    #[arg(short, long)]
    pub threads: Option<String>,

    /// Shortest fragment kept, after trimming
    #[arg(short, long, default_value_t = DEFAULT_MIN_LENGTH)]
    pub min_length: usize,

    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Sort report entries by path instead of completion order
    #[arg(long)]
    pub sorted: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// True when any required parameter has to be asked for.
    pub fn needs_prompt(&self) -> bool {
        self.dir.is_none() || self.output.is_none()
    }
}
