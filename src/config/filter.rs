//! Path filter
//!
//! Wraps a compiled regex and matches with search semantics: the pattern may
//! match anywhere in the path string.

use std::fmt;
use std::path::Path;

use regex::Regex;

use crate::error::{ClonerError, ClonerResult};

/// Compiled `--filter` pattern.
#[derive(Clone)]
pub struct PathFilter {
    regex: Regex,
}

impl PathFilter {
    /// Compile a filter pattern.
    pub fn new(pattern: &str) -> ClonerResult<Self> {
        let regex = Regex::new(pattern).map_err(|source| ClonerError::InvalidFilter {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// The pattern as given on the command line.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether the path's string form contains a match.
    pub fn matches(&self, path: &Path) -> bool {
        self.regex.is_match(&path.to_string_lossy())
    }
}

impl fmt::Debug for PathFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PathFilter").field(&self.as_str()).finish()
    }
}

impl fmt::Display for PathFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
