use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;
use std::time::Instant;

use crate::discover::discover;
use crate::error::{io_error, CrawlError};
use crate::pattern::Pattern;
use crate::queue::WorkQueue;
use crate::results::{CrawlStats, ResultSet, Results};

/// Default size of the worker pool.
pub const DEFAULT_WORKERS: usize = 2;

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// Internal options passed from the builder to `run()`.
pub(crate) struct EngineOptions {
    pub roots: Vec<PathBuf>,
    pub pattern: Pattern,
    pub workers: usize,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Execute a crawl. This is the core engine — all parallelism lives here.
///
/// Three strictly sequential phases:
///
/// 1. DISCOVER — single-threaded walk enumerates every directory under the
///    roots into the work queue.
/// 2. MATCH — a fixed pool of workers drains the queue; each worker scans
///    one directory's immediate entries at a time and inserts matching
///    file paths into the shared result set.
/// 3. REPORT — after every worker has been joined, the result set is
///    drained once into sorted output.
///
/// The queue and the result set each sit behind their own mutex, and no
/// code path holds both at once. Because discovery completes before the
/// pool starts, a worker that finds the queue empty is done — there is no
/// producer left to wait for.
pub(crate) fn run(opts: EngineOptions) -> Results {
    let start = Instant::now();

    let queue = WorkQueue::new();
    let results = ResultSet::new();
    let errors = Mutex::new(Vec::new());

    // Phase 1: DISCOVER
    let mut discovery_errors = Vec::new();
    let dirs_discovered = discover(&opts.roots, &queue, &mut discovery_errors);
    if let Ok(mut errs) = errors.lock() {
        errs.extend(discovery_errors);
    }

    // Phase 2: MATCH
    let dirs_scanned = AtomicUsize::new(0);
    let files_tested = AtomicUsize::new(0);

    thread::scope(|s| {
        for _ in 0..opts.workers {
            s.spawn(|| {
                worker_loop(
                    &queue,
                    &opts.pattern,
                    &results,
                    &errors,
                    &dirs_scanned,
                    &files_tested,
                );
            });
        }
        // Scope exit joins every worker before the report phase reads
        // the result set.
    });

    // Phase 3: REPORT
    Results {
        matches: results.into_sorted(),
        stats: CrawlStats {
            dirs_discovered,
            dirs_scanned: dirs_scanned.load(Ordering::Relaxed),
            files_tested: files_tested.load(Ordering::Relaxed),
            duration: start.elapsed(),
        },
        errors: errors.into_inner().unwrap_or_default(),
    }
}

/// One worker: pull directories until the queue runs dry.
///
/// Subdirectories of a work item were already enqueued as their own items
/// during discovery, so each scan is flat — immediate entries only. A scan
/// failure is local to its item: record it, drop the item, keep pulling.
fn worker_loop(
    queue: &WorkQueue,
    pattern: &Pattern,
    results: &ResultSet,
    errors: &Mutex<Vec<CrawlError>>,
    dirs_scanned: &AtomicUsize,
    files_tested: &AtomicUsize,
) {
    while let Some(dir) = queue.pop_front() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                if let Ok(mut errs) = errors.lock() {
                    errs.push(io_error(dir, e));
                }
                continue;
            }
        };
        dirs_scanned.fetch_add(1, Ordering::Relaxed);

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    if let Ok(mut errs) = errors.lock() {
                        errs.push(io_error(dir.clone(), e));
                    }
                    continue;
                }
            };

            // Directories were enqueued by discovery; everything else
            // (files, symlinks, sockets, …) is a match candidate.
            let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
            if is_dir {
                continue;
            }

            files_tested.fetch_add(1, Ordering::Relaxed);
            let name = entry.file_name();
            if pattern.matches(&name.to_string_lossy()) {
                results.add(dir.join(name));
            }
        }
    }
}
