//! fcrawl - concurrent wildcard file crawler
//!
//! Entry point for the CLI application.

use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use fcrawl::DEFAULT_WORKERS;

/// Environment variable consulted for the worker count when `--workers`
/// is not given. Invalid or absent values fall back to the default.
const WORKERS_ENV: &str = "CRAWLER_THREADS";

#[derive(Parser, Debug)]
#[command(
    name = "fcrawl",
    version,
    about = "Find files matching a wildcard pattern, in parallel"
)]
struct Args {
    /// Wildcard pattern filenames are tested against (e.g. '*.c')
    pattern: String,

    /// Directories to crawl (defaults to the current directory)
    #[arg(value_name = "DIR")]
    dirs: Vec<PathBuf>,

    /// Number of worker threads (overrides CRAWLER_THREADS)
    #[arg(short, long, value_name = "N")]
    workers: Option<usize>,

    /// Print crawl statistics to stderr after the matches
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fcrawl: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let results = fcrawl::crawl()
        .pattern(&args.pattern)
        .roots(args.dirs)
        .workers(worker_count(args.workers))
        .run()
        .context("crawl failed")?;

    // Unreadable directories are non-fatal: report them and keep the
    // exit status at success, the affected subtrees just contribute nothing.
    for err in &results.errors {
        match err.path() {
            Some(p) => eprintln!("fcrawl: {err}: {}", p.display()),
            None => eprintln!("fcrawl: {err}"),
        }
    }

    // Matches print only after every worker has finished, already sorted.
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for path in &results.matches {
        writeln!(out, "{}", path.display()).context("write to stdout")?;
    }

    if args.stats {
        eprintln!(
            "fcrawl: {} matches, {} dirs discovered, {} dirs scanned, {} files tested, {:.3}s",
            results.matches.len(),
            results.stats.dirs_discovered,
            results.stats.dirs_scanned,
            results.stats.files_tested,
            results.stats.duration.as_secs_f64()
        );
    }

    Ok(())
}

/// Resolve the worker count: `--workers` flag, then the CRAWLER_THREADS
/// environment variable, then the default. Zero or unparsable values are
/// treated as absent.
fn worker_count(flag: Option<usize>) -> usize {
    if let Some(n) = flag {
        if n > 0 {
            return n;
        }
    }
    env::var(WORKERS_ENV)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_WORKERS)
}
