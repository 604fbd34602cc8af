//! Ignore patterns value object
//!
//! Regular expressions matched against the full path of every directory
//! entry the collector visits. A match skips the entry, and for directories
//! everything beneath it.

use std::fmt;
use std::path::Path;

use regex::Regex;

use crate::error::{BindataError, BindataResult};

/// Maximum number of patterns allowed
const MAX_PATTERNS: usize = 1000;

/// Compiled set of path-matching patterns.
#[derive(Clone, Default)]
pub struct IgnorePatterns {
    patterns: Vec<Regex>,
}

impl IgnorePatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile every pattern; the first invalid one aborts.
    pub fn new<I, S>(patterns: I) -> BindataResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            if compiled.len() == MAX_PATTERNS {
                return Err(BindataError::TooManyIgnorePatterns {
                    limit: MAX_PATTERNS,
                });
            }
            let re = Regex::new(pattern).map_err(|source| BindataError::InvalidIgnorePattern {
                pattern: pattern.to_string(),
                source,
            })?;
            compiled.push(re);
        }
        Ok(Self { patterns: compiled })
    }

    /// Merge another set into this one, keeping declaration order.
    pub fn extend(&mut self, other: &IgnorePatterns) {
        self.patterns.extend(other.patterns.iter().cloned());
    }

    /// Check if a path should be ignored.
    pub fn is_ignored(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let s = path.to_string_lossy();
        self.patterns.iter().any(|re| re.is_match(&s))
    }

    /// Source text of each pattern, in order.
    pub fn as_strs(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl fmt::Debug for IgnorePatterns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_strs()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patterns_match_nothing() {
        let patterns = IgnorePatterns::empty();
        assert!(!patterns.is_ignored(Path::new("/data/anything.css")));
        assert!(patterns.is_empty());
    }

    #[test]
    fn pattern_matches_anywhere_in_path() {
        let patterns = IgnorePatterns::new(["/sub$"]).unwrap();
        assert!(patterns.is_ignored(Path::new("/data/sub")));
        assert!(!patterns.is_ignored(Path::new("/data/sub/b.txt")));
        assert!(!patterns.is_ignored(Path::new("/data/a.txt")));
    }

    #[test]
    fn any_pattern_matching_is_enough() {
        let patterns = IgnorePatterns::new([r"\.bak$", r"\.DS_Store$"]).unwrap();
        assert_eq!(patterns.len(), 2);
        assert!(patterns.is_ignored(Path::new("/x/old.bak")));
        assert!(patterns.is_ignored(Path::new("/x/.DS_Store")));
        assert!(!patterns.is_ignored(Path::new("/x/new.txt")));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = IgnorePatterns::new(["(unclosed"]).unwrap_err();
        assert!(matches!(err, BindataError::InvalidIgnorePattern { ref pattern, .. } if pattern == "(unclosed"));
    }

    #[test]
    fn pattern_count_is_capped() {
        let at_limit: Vec<String> = (0..MAX_PATTERNS).map(|i| format!("p{i}$")).collect();
        assert_eq!(IgnorePatterns::new(&at_limit).unwrap().len(), MAX_PATTERNS);

        let over: Vec<String> = (0..=MAX_PATTERNS).map(|i| format!("p{i}$")).collect();
        let err = IgnorePatterns::new(&over).unwrap_err();
        assert!(matches!(err, BindataError::TooManyIgnorePatterns { limit: 1000 }));
    }

    #[test]
    fn extend_keeps_order() {
        let mut a = IgnorePatterns::new(["a"]).unwrap();
        let b = IgnorePatterns::new(["b", "c"]).unwrap();
        a.extend(&b);
        assert_eq!(a.as_strs().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}
