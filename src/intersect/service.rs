use crate::pattern::{Operand, Pattern};

use super::prefix::scan_prefix;
use super::{IntersectResult, Intersection, IntersectorOptions, ValidationMode};

/// Computes intersections of single-wildcard patterns.
///
/// Holds only configuration, so one value can be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct Intersector {
    wildcard: u8,
    validation: ValidationMode,
}

impl Default for Intersector {
    fn default() -> Self {
        Self::from_options(IntersectorOptions::default())
    }
}

impl Intersector {
    pub fn new(options: IntersectorOptions) -> IntersectResult<Self> {
        options.validate()?;
        Ok(Self::from_options(options))
    }

    /// `options.wildcard` must already be known to be ASCII.
    fn from_options(options: IntersectorOptions) -> Self {
        Self {
            wildcard: options.wildcard as u8,
            validation: options.validation,
        }
    }

    pub fn options(&self) -> IntersectorOptions {
        IntersectorOptions {
            wildcard: self.wildcard as char,
            validation: self.validation,
        }
    }

    /// Views `raw` as a pattern using this intersector's wildcard.
    pub fn pattern<'a>(&self, raw: &'a str) -> Pattern<'a> {
        Pattern::with_wildcard_byte(raw, self.wildcard)
    }

    /// Intersects `x` and `y`.
    ///
    /// Returns [`Intersection::Empty`] when no string matches both. With
    /// [`ValidationMode::Lazy`] a pattern holding several wildcards is only
    /// rejected when the scan runs into the extra wildcard.
    ///
    /// ```
    /// use wildcard_intersect_rs::{Intersection, Intersector};
    ///
    /// let intersector = Intersector::default();
    /// assert_eq!(
    ///     intersector.intersect("a*cdea", "abcd*a").unwrap(),
    ///     Intersection::Pattern("abcd*ea".to_string())
    /// );
    /// assert_eq!(intersector.intersect("a", "b").unwrap(), Intersection::Empty);
    /// ```
    #[tracing::instrument(level = "trace", skip(self, x, y), fields(x = %x, y = %y))]
    pub fn intersect(&self, x: &str, y: &str) -> IntersectResult<Intersection> {
        if self.validation == ValidationMode::Eager {
            self.pattern(x).validate(Operand::X)?;
            self.pattern(y).validate(Operand::Y)?;
        }

        let out = scan_prefix(x, y, self.wildcard)?;

        tracing::event!(
            tracing::Level::TRACE,
            operation = "intersect",
            empty = out.is_empty(),
            result = %out
        );

        Ok(out)
    }
}

/// Intersects two `*` patterns with lazy validation.
pub fn intersect_patterns(x: &str, y: &str) -> IntersectResult<Intersection> {
    Intersector::default().intersect(x, y)
}
