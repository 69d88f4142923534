use std::fmt;

/// Outcome of intersecting two patterns.
///
/// `Empty` means no string is matched by both inputs. It is distinct from
/// `Pattern(String::new())`, the pattern that matches only the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Intersection {
    Pattern(String),
    Empty,
}

impl Intersection {
    pub fn is_empty(&self) -> bool {
        matches!(self, Intersection::Empty)
    }

    pub fn as_pattern(&self) -> Option<&str> {
        match self {
            Intersection::Pattern(pattern) => Some(pattern),
            Intersection::Empty => None,
        }
    }

    pub fn into_pattern(self) -> Option<String> {
        match self {
            Intersection::Pattern(pattern) => Some(pattern),
            Intersection::Empty => None,
        }
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intersection::Pattern(pattern) => f.write_str(pattern),
            Intersection::Empty => f.write_str("<empty>"),
        }
    }
}

impl From<Intersection> for Option<String> {
    fn from(value: Intersection) -> Self {
        value.into_pattern()
    }
}
