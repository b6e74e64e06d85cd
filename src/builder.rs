use std::path::PathBuf;

use crate::engine::{run, EngineOptions, DEFAULT_WORKERS};
use crate::error::CrawlError;
use crate::pattern::Pattern;
use crate::results::Results;

// ---------------------------------------------------------------------------
// CrawlBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a crawl.
///
/// Created via [`fcrawl::crawl()`](crate::crawl). Configure with chained
/// builder methods, then call [`run()`](CrawlBuilder::run) to execute.
///
/// # Example
///
/// ```rust,no_run
/// let results = fcrawl::crawl()
///     .pattern("*.c")
///     .root("src")
///     .workers(4)
///     .run()?;
///
/// for path in &results.matches {
///     println!("{}", path.display());
/// }
/// # Ok::<(), fcrawl::CrawlError>(())
/// ```
pub struct CrawlBuilder {
    pattern: Option<String>,
    roots: Vec<PathBuf>,
    workers: usize,
}

impl Default for CrawlBuilder {
    fn default() -> Self {
        Self {
            pattern: None,
            roots: Vec::new(),
            workers: DEFAULT_WORKERS,
        }
    }
}

impl CrawlBuilder {
    // ── Pattern ───────────────────────────────────────────────────────────

    /// Set the wildcard pattern filenames are tested against.
    ///
    /// `*` matches any sequence (including empty), `?` matches exactly one
    /// character, `.` matches only a literal dot; everything else is
    /// literal. The whole filename must match. Required.
    pub fn pattern(mut self, glob: impl Into<String>) -> Self {
        self.pattern = Some(glob.into());
        self
    }

    // ── Roots ─────────────────────────────────────────────────────────────

    /// Add one root directory to crawl. May be called repeatedly.
    ///
    /// When no root is given the crawl starts at the current directory.
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.roots.push(path.into());
        self
    }

    /// Add several root directories at once.
    pub fn roots<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots.extend(paths.into_iter().map(Into::into));
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Number of workers draining the directory queue. Defaults to 2.
    ///
    /// The output is identical for any worker count — only timing changes.
    pub fn workers(mut self, n: usize) -> Self {
        self.workers = n;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Execute the crawl and return results.
    ///
    /// Blocks until discovery, the parallel match phase, and the final
    /// collection are all complete.
    ///
    /// # Errors
    ///
    /// Returns `Err` for fatal configuration errors: no pattern, a pattern
    /// whose translation does not compile, or a zero worker count.
    /// Unreadable directories encountered during the crawl are not fatal —
    /// they are collected into [`Results::errors`].
    pub fn run(self) -> Result<Results, CrawlError> {
        let glob = self.pattern.ok_or(CrawlError::MissingPattern)?;
        let pattern = Pattern::compile(&glob)?;

        if self.workers == 0 {
            return Err(CrawlError::InvalidWorkerCount(0));
        }

        let roots = if self.roots.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.roots
        };

        Ok(run(EngineOptions {
            roots,
            pattern,
            workers: self.workers,
        }))
    }
}
