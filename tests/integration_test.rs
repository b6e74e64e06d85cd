use std::fs;
use std::path::{Path, PathBuf};

use fcrawl::{crawl, CrawlError};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Create a temporary directory tree for testing.
///
/// Structure:
/// ```text
/// tmp/
///   a.c
///   b.txt
///   notes.md
///   sub/
///     c.c
///     inner/
///       d.c
///       d.cx
/// ```
fn setup_test_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("a.c"), "int main(void) { return 0; }").unwrap();
    fs::write(root.join("b.txt"), "not a source file").unwrap();
    fs::write(root.join("notes.md"), "some notes").unwrap();

    let sub = root.join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("c.c"), "/* empty */").unwrap();

    let inner = sub.join("inner");
    fs::create_dir(&inner).unwrap();
    fs::write(inner.join("d.c"), "/* empty */").unwrap();
    fs::write(inner.join("d.cx"), "near miss").unwrap();

    dir
}

fn expected_c_files(root: &Path) -> Vec<PathBuf> {
    let mut v = vec![
        root.join("a.c"),
        root.join("sub/c.c"),
        root.join("sub/inner/d.c"),
    ];
    v.sort();
    v
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn finds_matching_files_sorted() {
    let dir = setup_test_dir();
    let results = crawl()
        .pattern("*.c")
        .root(dir.path())
        .run()
        .unwrap();

    assert_eq!(results.matches, expected_c_files(dir.path()));
    assert!(results.errors.is_empty());
}

#[test]
fn output_is_identical_for_any_worker_count() {
    let dir = setup_test_dir();
    let mut outputs = Vec::new();
    for workers in [1, 2, 8] {
        let results = crawl()
            .pattern("*.c")
            .root(dir.path())
            .workers(workers)
            .run()
            .unwrap();
        outputs.push(results.matches);
    }
    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[1], outputs[2]);
    assert_eq!(outputs[0], expected_c_files(dir.path()));
}

#[test]
fn discovery_count_is_independent_of_workers() {
    let dir = setup_test_dir();
    for workers in [1, 2, 8] {
        let results = crawl()
            .pattern("*")
            .root(dir.path())
            .workers(workers)
            .run()
            .unwrap();
        // root, sub, sub/inner
        assert_eq!(results.stats.dirs_discovered, 3);
        assert_eq!(results.stats.dirs_scanned, 3);
    }
}

#[test]
fn whole_name_matching_rejects_near_misses() {
    let dir = setup_test_dir();
    let results = crawl()
        .pattern("*.c")
        .root(dir.path())
        .run()
        .unwrap();

    assert!(results
        .matches
        .iter()
        .all(|p| p.extension().map(|e| e == "c").unwrap_or(false)));
    assert!(!results
        .matches
        .iter()
        .any(|p| p.to_string_lossy().ends_with(".cx")));
}

#[test]
fn question_mark_matches_single_character() {
    let dir = setup_test_dir();
    let results = crawl()
        .pattern("?.c")
        .root(dir.path())
        .run()
        .unwrap();

    // a.c, c.c, d.c — but not d.cx
    assert_eq!(results.matches.len(), 3);
}

#[test]
fn empty_tree_yields_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    let results = crawl()
        .pattern("*.c")
        .root(dir.path())
        .run()
        .unwrap();

    assert!(results.matches.is_empty());
    assert!(results.errors.is_empty());
    assert_eq!(results.stats.dirs_discovered, 1);
}

#[test]
fn multiple_roots_merge_sorted() {
    let a = setup_test_dir();
    let b = setup_test_dir();
    let results = crawl()
        .pattern("*.c")
        .roots([a.path(), b.path()])
        .run()
        .unwrap();

    let mut expected = expected_c_files(a.path());
    expected.extend(expected_c_files(b.path()));
    expected.sort();
    assert_eq!(results.matches, expected);
}

#[test]
fn trailing_slash_on_root_is_harmless() {
    let dir = setup_test_dir();
    let mut with_slash = dir.path().as_os_str().to_os_string();
    with_slash.push("/");

    let results = crawl()
        .pattern("*.c")
        .root(PathBuf::from(with_slash))
        .run()
        .unwrap();

    assert_eq!(results.matches, expected_c_files(dir.path()));
}

#[test]
fn missing_root_is_nonfatal_and_reported() {
    let good = setup_test_dir();
    let results = crawl()
        .pattern("*.c")
        .roots([PathBuf::from("/no/such/dir"), good.path().to_path_buf()])
        .run()
        .unwrap();

    assert_eq!(results.matches, expected_c_files(good.path()));
    assert_eq!(results.errors.len(), 1);
    assert!(results.errors[0].is_recoverable());
}

#[cfg(unix)]
#[test]
fn unreadable_root_is_nonfatal_and_reported() {
    use std::os::unix::fs::PermissionsExt;

    let good = setup_test_dir();
    let bad = tempfile::tempdir().unwrap();
    fs::write(bad.path().join("hidden.c"), "").unwrap();
    fs::set_permissions(bad.path(), fs::Permissions::from_mode(0o000)).unwrap();

    // Root ignores permission bits; nothing to test when privileged.
    if fs::read_dir(bad.path()).is_ok() {
        fs::set_permissions(bad.path(), fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let results = crawl()
        .pattern("*.c")
        .roots([bad.path().to_path_buf(), good.path().to_path_buf()])
        .run()
        .unwrap();

    // Restore so the tempdir can be cleaned up.
    fs::set_permissions(bad.path(), fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(results.matches, expected_c_files(good.path()));
    assert_eq!(results.errors.len(), 1);
    assert!(matches!(
        results.errors[0],
        CrawlError::PermissionDenied(_)
    ));
}

#[test]
fn stats_are_populated() {
    let dir = setup_test_dir();
    let results = crawl()
        .pattern("*.c")
        .root(dir.path())
        .run()
        .unwrap();

    assert_eq!(results.stats.dirs_discovered, 3);
    assert_eq!(results.stats.dirs_scanned, 3);
    // a.c, b.txt, notes.md, c.c, d.c, d.cx
    assert_eq!(results.stats.files_tested, 6);
}

#[test]
fn discovery_agrees_with_independent_walk() {
    let dir = setup_test_dir();
    let dirs_on_disk = walkdir::WalkDir::new(dir.path())
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_dir())
        .count();

    let results = crawl()
        .pattern("*")
        .root(dir.path())
        .run()
        .unwrap();

    assert_eq!(results.stats.dirs_discovered, dirs_on_disk);
}

#[test]
fn wide_tree_with_many_workers() {
    // More directories than workers, more workers than directories — both
    // should drain cleanly off the shared queue.
    let dir = tempfile::tempdir().unwrap();
    for i in 0..40 {
        let d = dir.path().join(format!("d{i:02}"));
        fs::create_dir(&d).unwrap();
        fs::write(d.join(format!("f{i:02}.log")), "").unwrap();
        fs::write(d.join("skip.txt"), "").unwrap();
    }

    for workers in [1, 8, 64] {
        let results = crawl()
            .pattern("*.log")
            .root(dir.path())
            .workers(workers)
            .run()
            .unwrap();
        assert_eq!(results.matches.len(), 40);
        assert!(results.matches.windows(2).all(|w| w[0] < w[1]));
    }
}
