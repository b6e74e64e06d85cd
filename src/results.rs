use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use crate::error::CrawlError;

// ---------------------------------------------------------------------------
// ResultSet
// ---------------------------------------------------------------------------

/// Deduplicating, sorted accumulator for matched paths.
///
/// Workers insert concurrently during the match phase; the membership check
/// and the insert happen under one lock acquisition, so two workers racing
/// on the same path cannot both store it. Backed by a [`BTreeSet`], so
/// iteration order is ascending lexicographic order of the paths.
#[derive(Debug, Default)]
pub struct ResultSet {
    paths: Mutex<BTreeSet<PathBuf>>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a matched path. A no-op if the path is already present.
    /// Returns `true` if the path was newly inserted.
    pub fn add(&self, path: PathBuf) -> bool {
        self.paths.lock().expect("result set poisoned").insert(path)
    }

    pub fn len(&self) -> usize {
        self.paths.lock().expect("result set poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the set, yielding paths in ascending order.
    ///
    /// Intended for the report phase, after every worker has been joined.
    pub fn into_sorted(self) -> Vec<PathBuf> {
        self.paths
            .into_inner()
            .expect("result set poisoned")
            .into_iter()
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// The output of a completed crawl.
#[derive(Debug)]
pub struct Results {
    /// Matched fully-qualified paths, ascending lexicographic order,
    /// no duplicates.
    pub matches: Vec<PathBuf>,

    /// Crawl statistics.
    pub stats: CrawlStats,

    /// Recoverable errors encountered during discovery or scanning
    /// (unreadable directories). The affected subtrees contribute nothing;
    /// the rest of the output is unaffected.
    pub errors: Vec<CrawlError>,
}

/// Statistics for a completed crawl.
#[derive(Debug)]
pub struct CrawlStats {
    /// Directories enqueued by the discovery phase.
    pub dirs_discovered: usize,

    /// Directories whose entries were scanned by the worker pool.
    pub dirs_scanned: usize,

    /// Non-directory entries tested against the pattern.
    pub files_tested: usize,

    /// Wall-clock time for the whole crawl, discovery through report.
    pub duration: Duration,
}
