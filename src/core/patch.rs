//! Regex block patch.
//!
//! A [`Patch`] pairs a compiled search pattern with a literal replacement
//! block and replaces at most the first match.

use crate::error::{PatchError, Result};
use regex::Regex;
use serde::Serialize;

/// Result of applying a patch to a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PatchOutcome {
    /// The first match was replaced.
    Replaced {
        /// Byte offset of the replaced block in the original text.
        offset: usize,
        /// Length in bytes of the block that was removed.
        removed_len: usize,
        /// Length in bytes of the replacement that was inserted.
        inserted_len: usize,
        /// Total non-overlapping matches in the original text.
        match_count: usize,
    },
    /// The pattern did not match; the text is unchanged.
    NoMatch,
}

impl PatchOutcome {
    /// Returns true if a block was replaced.
    #[must_use]
    pub const fn is_replaced(&self) -> bool {
        matches!(self, Self::Replaced { .. })
    }

    /// Number of matches found in the original text.
    #[must_use]
    pub const fn match_count(&self) -> usize {
        match self {
            Self::Replaced { match_count, .. } => *match_count,
            Self::NoMatch => 0,
        }
    }
}

/// A named search pattern with a fixed replacement block.
///
/// The replacement is inserted verbatim. Sequences such as `$1` or
/// `${name}` are not expanded, so template literals in the replacement
/// survive untouched.
///
/// # Examples
///
/// ```
/// use blockfix::core::Patch;
///
/// let patch = Patch::new("greet", r"hello \w+", "hi ${there}").unwrap();
/// let (out, outcome) = patch.apply("say hello world, hello moon");
/// assert_eq!(out, "say hi ${there}, hello moon");
/// assert!(outcome.is_replaced());
/// ```
#[derive(Debug, Clone)]
pub struct Patch {
    name: String,
    regex: Regex,
    replacement: String,
}

impl Patch {
    /// Compiles a patch.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let regex = Regex::new(pattern).map_err(|e| PatchError::InvalidPattern {
            name: name.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            name,
            regex,
            replacement: replacement.into(),
        })
    }

    /// Patch name, used in reports and errors.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source of the search pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// The literal replacement block.
    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Counts non-overlapping matches of the pattern.
    #[must_use]
    pub fn count_matches(&self, content: &str) -> usize {
        self.regex.find_iter(content).count()
    }

    /// Replaces the first match in `content` with the replacement block.
    ///
    /// When nothing matches, the returned string equals `content`.
    #[must_use]
    pub fn apply(&self, content: &str) -> (String, PatchOutcome) {
        let Some(m) = self.regex.find(content) else {
            return (content.to_string(), PatchOutcome::NoMatch);
        };

        let match_count = self.count_matches(content);
        let mut output =
            String::with_capacity(content.len() - m.len() + self.replacement.len());
        output.push_str(&content[..m.start()]);
        output.push_str(&self.replacement);
        output.push_str(&content[m.end()..]);

        let outcome = PatchOutcome::Replaced {
            offset: m.start(),
            removed_len: m.len(),
            inserted_len: self.replacement.len(),
            match_count,
        };
        (output, outcome)
    }
}
