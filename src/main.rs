//! DataSplunk - finds compiled binaries under a directory and dumps the
//! readable strings embedded in them.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;
use tracing::Level;

use cli::Cli;
use datasplunk::progress::{ConsoleProgress, LineProgress};
use datasplunk::scan;
use datasplunk::{ConfigError, ProgressSink, ResultOrder, ScanJob, ScanSummary, parse_worker_count};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    print_banner();

    let interactive = cli.needs_prompt();
    let job = build_job(&cli, interactive)?;

    println!("\n[!] Scanning directory: {}", job.target_dir().display());
    println!("[!] Saving to: {}", job.output().display());
    println!("[CPU] Using {} threads...\n", job.workers());

    let files = scan::discover(&job);
    let total = files.len();
    println!(
        "[Scan] Found {} files in directory. Checking for compiled code...\n",
        total
    );

    let progress = progress_for(total);
    let summary = scan::run_job(&job, files, progress.as_ref())
        .with_context(|| format!("Scan of {} failed", job.target_dir().display()))?;

    print_summary(&summary);
    println!(
        "{}",
        style("[Completed] Extracted strings from recognized executables/compiled code have been saved.")
            .green()
    );

    if interactive {
        wait_for_enter()?;
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn build_job(cli: &Cli, interactive: bool) -> Result<ScanJob> {
    let theme = ColorfulTheme::default();

    let dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => prompt(&theme, "[Scan] Directory")?,
    };
    if dir.as_os_str().is_empty() {
        return Err(ConfigError::MissingDirectory.into());
    }
    if !dir.is_dir() {
        return Err(ConfigError::NotADirectory(dir).into());
    }

    let output = match &cli.output {
        Some(output) => output.clone(),
        None => prompt(&theme, "[Output] File Path")?,
    };

    let workers = match &cli.threads {
        Some(threads) => parse_worker_count(threads),
        None if interactive => {
            let threads: String = Input::with_theme(&theme)
                .with_prompt("[CPU] Number of threads (ex 2,4,8)")
                .allow_empty(true)
                .interact_text()
                .context("Failed to read thread count")?;
            parse_worker_count(&threads)
        }
        None => parse_worker_count(""),
    };

    let order = if cli.sorted {
        ResultOrder::ByPath
    } else {
        ResultOrder::Completion
    };

    let job = ScanJob::new(&dir, &output, workers)?
        .with_min_length(cli.min_length)?
        .with_format(cli.format)
        .with_order(order);

    Ok(job)
}

fn prompt(theme: &ColorfulTheme, label: &str) -> Result<PathBuf> {
    let value: String = Input::with_theme(theme)
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .with_context(|| format!("Failed to read {}", label))?;
    Ok(PathBuf::from(value.trim()))
}

fn progress_for(total: usize) -> Box<dyn ProgressSink> {
    if console::Term::stdout().is_term() {
        Box::new(ConsoleProgress::new(total))
    } else {
        Box::new(LineProgress::new(std::io::stdout()))
    }
}

fn print_summary(summary: &ScanSummary) {
    println!();
    println!("{}", style("Scan Summary:").cyan().bold());
    println!("Files scanned:      {}", summary.total);
    println!("Compiled binaries:  {}", style(summary.binaries).green());
    println!("With strings:       {}", summary.with_strings);
    println!("Strings extracted:  {}", summary.fragments);
    if summary.failed > 0 {
        println!("Failed:             {}", style(summary.failed).yellow());
    }
    println!();
}

fn wait_for_enter() -> Result<()> {
    println!("[Exit] Press ENTER to exit...");
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(())
}

fn print_banner() {
    println!();
    println!(
        "{}",
        style(format!("DataSplunk v{}", env!("CARGO_PKG_VERSION")))
            .cyan()
            .bold()
    );
}
