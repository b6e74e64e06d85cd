//! # fcrawl
//!
//! Concurrent wildcard file crawler — glob in, sorted fully-qualified
//! matches out.
//!
//! fcrawl finds files under one or more directory trees whose names match a
//! shell-style wildcard (`*`, `?`, literal characters). The crawl runs in
//! three strict phases:
//!
//! 1. **Discover** — a single-threaded walk enumerates every directory under
//!    the roots into a shared FIFO work queue.
//! 2. **Match** — a fixed pool of workers drains the queue in parallel, each
//!    scanning one directory's immediate entries against the compiled
//!    pattern and inserting matches into a shared sorted set.
//! 3. **Report** — once every worker has finished, the matches come out in
//!    ascending lexicographic order, deduplicated.
//!
//! The output is deterministic: for the same tree and pattern, any worker
//! count produces the same matches in the same order.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let results = fcrawl::crawl()
//!     .pattern("*.c")
//!     .root("src")
//!     .run()
//!     .unwrap();
//!
//! for path in &results.matches {
//!     println!("{}", path.display());
//! }
//! eprintln!(
//!     "{} matches across {} directories in {:.3}s",
//!     results.matches.len(),
//!     results.stats.dirs_scanned,
//!     results.stats.duration.as_secs_f64()
//! );
//! ```
//!
//! # Error handling
//!
//! Unreadable directories never abort a crawl — their subtrees simply
//! contribute nothing, and the failures are collected into
//! [`Results::errors`] for the caller to report:
//!
//! ```rust,no_run
//! let results = fcrawl::crawl().pattern("*.log").run().unwrap();
//! for err in &results.errors {
//!     match err.path() {
//!         Some(p) => eprintln!("skipping {}: {err}", p.display()),
//!         None => eprintln!("{err}"),
//!     }
//! }
//! ```
//!
//! Only startup errors are fatal: a missing pattern, a pattern whose
//! translation does not compile, or a zero worker count.

#![forbid(unsafe_code)]

pub(crate) mod discover;
pub(crate) mod engine;

mod builder;
mod error;
mod pattern;
mod queue;
mod results;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::CrawlBuilder;
pub use engine::DEFAULT_WORKERS;
pub use error::CrawlError;
pub use pattern::Pattern;
pub use queue::WorkQueue;
pub use results::{CrawlStats, ResultSet, Results};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`CrawlBuilder`] to configure and run a crawl.
///
/// # Example
///
/// ```rust,no_run
/// let results = fcrawl::crawl()
///     .pattern("*.rs")
///     .roots(["src", "tests"])
///     .workers(8)
///     .run()
///     .unwrap();
///
/// assert!(results.matches.windows(2).all(|w| w[0] < w[1]));
/// ```
pub fn crawl() -> CrawlBuilder {
    CrawlBuilder::default()
}
