use memchr::{memchr, memrchr};
use std::fmt;

use super::validity::{count_wildcards, has_at_most_one_wildcard};
use super::{Operand, PatternError, PatternResult};
use crate::intersect::IntersectorConfigError;

pub const DEFAULT_WILDCARD: char = '*';

/// Borrowed view over a pattern string holding at most one wildcard.
///
/// Construction never validates; malformed patterns are reported by
/// [`Pattern::validate`] or surface lazily during intersection.
///
/// ```
/// use wildcard_intersect_rs::pattern::Pattern;
///
/// let pattern = Pattern::new("log-*.txt");
/// assert_eq!(pattern.prefix(), "log-");
/// assert_eq!(pattern.suffix(), ".txt");
/// assert!(pattern.matches("log-2024.txt"));
/// assert!(!pattern.matches("log.txt"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern<'a> {
    raw: &'a str,
    wildcard: u8,
}

impl<'a> Pattern<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self::with_wildcard_byte(raw, DEFAULT_WILDCARD as u8)
    }

    /// Views `raw` with a custom wildcard, which must be ASCII.
    ///
    /// ```
    /// use wildcard_intersect_rs::pattern::Pattern;
    ///
    /// let pattern = Pattern::with_wildcard("a%c", '%').unwrap();
    /// assert_eq!(pattern.prefix(), "a");
    /// assert!(Pattern::with_wildcard("a%c", 'é').is_err());
    /// ```
    pub fn with_wildcard(raw: &'a str, wildcard: char) -> Result<Self, IntersectorConfigError> {
        if !wildcard.is_ascii() {
            return Err(IntersectorConfigError::WildcardNotAscii { wildcard });
        }
        Ok(Self::with_wildcard_byte(raw, wildcard as u8))
    }

    /// `wildcard` must be ASCII so byte offsets stay on char boundaries.
    pub(crate) fn with_wildcard_byte(raw: &'a str, wildcard: u8) -> Self {
        Self { raw, wildcard }
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    pub fn wildcard(&self) -> char {
        self.wildcard as char
    }

    pub fn wildcard_position(&self) -> Option<usize> {
        memchr(self.wildcard, self.raw.as_bytes())
    }

    pub fn has_wildcard(&self) -> bool {
        self.wildcard_position().is_some()
    }

    /// Literal text before the wildcard, or the whole pattern without one.
    pub fn prefix(&self) -> &'a str {
        match self.wildcard_position() {
            Some(pos) => &self.raw[..pos],
            None => self.raw,
        }
    }

    /// Literal text after the wildcard, or the whole pattern without one.
    pub fn suffix(&self) -> &'a str {
        match memrchr(self.wildcard, self.raw.as_bytes()) {
            Some(pos) => &self.raw[pos + 1..],
            None => self.raw,
        }
    }

    pub fn wildcard_count(&self) -> usize {
        count_wildcards(self.raw.as_bytes(), self.wildcard)
    }

    pub fn is_well_formed(&self) -> bool {
        has_at_most_one_wildcard(self.raw.as_bytes(), self.wildcard)
    }

    pub fn validate(&self, operand: Operand) -> PatternResult<()> {
        if self.is_well_formed() {
            return Ok(());
        }

        tracing::event!(
            tracing::Level::DEBUG,
            operation = "validate",
            operand = %operand,
            pattern = %self.raw,
            wildcards = self.wildcard_count() as u64
        );

        Err(PatternError::MultipleWildcards {
            operand,
            pattern: self.raw.to_string(),
        })
    }

    /// Tests whether a concrete string is matched. Only meaningful for
    /// well-formed patterns.
    pub fn matches(&self, text: &str) -> bool {
        if !self.has_wildcard() {
            return self.raw == text;
        }

        let prefix = self.prefix();
        let suffix = self.suffix();

        text.len() >= prefix.len() + suffix.len()
            && text.starts_with(prefix)
            && text.ends_with(suffix)
    }
}

impl fmt::Display for Pattern<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

impl<'a> From<&'a str> for Pattern<'a> {
    fn from(raw: &'a str) -> Self {
        Self::new(raw)
    }
}
