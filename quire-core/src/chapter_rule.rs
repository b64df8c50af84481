//! Externally supplied chapter-detection rules
//!
//! The boundary detector evaluates the active rule against the pending
//! sentence text immediately before each sentence emission; a match forces a
//! chapter boundary at that point. This is the only externally steerable
//! boundary decision.

use crate::error::{CoreError, Result};
use regex::Regex;

/// Decides whether a completed sentence opens a new chapter.
#[derive(Debug, Clone, Default)]
pub enum ChapterRule {
    /// Never force a chapter boundary.
    #[default]
    None,
    /// Force a chapter when the trimmed sentence starts with any of the
    /// given prefixes.
    Prefixes(Vec<String>),
    /// Force a chapter when the pattern matches the raw sentence text.
    Pattern(Regex),
}

impl ChapterRule {
    /// Compile a regular-expression rule, rejecting malformed patterns
    /// before streaming starts.
    pub fn pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| CoreError::ChapterRule(format!("pattern {pattern:?}: {e}")))?;
        Ok(ChapterRule::Pattern(regex))
    }

    /// Build a prefix-list rule.
    pub fn prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ChapterRule::Prefixes(prefixes.into_iter().map(Into::into).collect())
    }

    /// The conventional heading rule: sentences opening with `"Chapter "`.
    pub fn headings() -> Self {
        Self::prefixes(["Chapter "])
    }

    /// Evaluate the rule against a pending sentence.
    pub fn matches(&self, sentence: &str) -> bool {
        match self {
            ChapterRule::None => false,
            ChapterRule::Prefixes(prefixes) => {
                let trimmed = sentence.trim_start();
                prefixes.iter().any(|p| trimmed.starts_with(p.as_str()))
            }
            ChapterRule::Pattern(regex) => regex.is_match(sentence),
        }
    }
}
