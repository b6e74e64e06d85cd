use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{io_error, CrawlError};
use crate::queue::WorkQueue;

/// Normalize a root argument: drop a trailing separator (`root/` → `root`)
/// without touching the filesystem root itself.
fn normalize(path: &Path) -> PathBuf {
    path.components().as_path().to_path_buf()
}

/// Discovery phase: enumerate every directory under `roots`, depth-first,
/// and enqueue each one as a work item.
///
/// Runs single-threaded, to completion, before any worker starts — the queue
/// is never refilled afterwards, which is what makes "queue empty" a valid
/// termination signal for the pool.
///
/// The walk keeps an explicit stack rather than recursing, so arbitrarily
/// deep trees cannot overflow the call stack. Symlinks are not followed
/// (`DirEntry::file_type` reports the link itself), so a symlink cycle
/// cannot trap the walk.
///
/// A directory that cannot be opened or scanned — root or nested alike — is
/// recorded in `errors` and its subtree contributes nothing; the walk
/// continues elsewhere. Returns the number of directories enqueued.
pub(crate) fn discover(
    roots: &[PathBuf],
    queue: &WorkQueue,
    errors: &mut Vec<CrawlError>,
) -> usize {
    let mut discovered = 0;
    let mut stack: Vec<PathBuf> = roots.iter().rev().map(|r| normalize(r)).collect();

    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                errors.push(io_error(dir, e));
                continue;
            }
        };

        // Enqueue only after the open succeeded, so every work item is a
        // directory that was readable at discovery time.
        queue.push(dir.clone());
        discovered += 1;

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    errors.push(io_error(dir.clone(), e));
                    continue;
                }
            };
            match entry.file_type() {
                // file_type does not follow symlinks, so is_dir is a real
                // directory and the walk cannot loop through links.
                Ok(ft) if ft.is_dir() => stack.push(entry.path()),
                Ok(_) => {}
                Err(e) => errors.push(io_error(entry.path(), e)),
            }
        }
    }

    discovered
}
