use regex::Regex;

use crate::error::CrawlError;

// ---------------------------------------------------------------------------
// Glob translation
// ---------------------------------------------------------------------------

/// Translate a shell-style wildcard into an anchored regular expression.
///
/// `*` becomes `.*`, `?` becomes `.`, `.` becomes `\.`, and everything else
/// is copied through verbatim. The result is wrapped in `^…$` so the compiled
/// pattern matches whole filenames, never substrings:
///
/// - `*.c`  → `^.*\.c$`
/// - `a.*`  → `^a\..*$`
///
/// Other regex metacharacters in the glob (`[`, `(`, `+`, …) are *not*
/// escaped — they pass through with their regex meaning. Known limitation.
fn translate(glob: &str) -> String {
    // Worst case every byte doubles (`.` → `\.`), plus the anchors.
    let mut re = String::with_capacity(2 * glob.len() + 2);
    re.push('^');
    for c in glob.chars() {
        match c {
            '*' => re.push_str(".*"),
            '?' => re.push('.'),
            '.' => re.push_str("\\."),
            _ => re.push(c),
        }
    }
    re.push('$');
    re
}

// ---------------------------------------------------------------------------
// Pattern
// ---------------------------------------------------------------------------

/// A compiled wildcard pattern.
///
/// Built once before traversal starts and shared read-only by every worker.
/// [`Regex`] is `Send + Sync` and matching takes `&self`, so concurrent
/// callers need no synchronization.
#[derive(Debug, Clone)]
pub struct Pattern {
    glob: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a glob into a whole-filename matcher.
    ///
    /// # Errors
    ///
    /// Returns [`CrawlError::InvalidPattern`] when the translated expression
    /// fails to compile — possible because unescaped regex metacharacters in
    /// the glob are passed through as-is.
    pub fn compile(glob: &str) -> Result<Self, CrawlError> {
        let regex = Regex::new(&translate(glob)).map_err(|e| CrawlError::InvalidPattern {
            pattern: glob.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            glob: glob.to_string(),
            regex,
        })
    }

    /// Returns `true` if `name` (an entire filename) matches the pattern.
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// The original glob this pattern was compiled from.
    pub fn glob(&self) -> &str {
        &self.glob
    }
}
