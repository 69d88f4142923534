pub mod intersect;
pub mod pattern;

pub use intersect::{
    IntersectError, IntersectResult, Intersection, Intersector, IntersectorConfigError,
    IntersectorOptions, IntersectorOptionsBuilder, ValidationMode, intersect_patterns,
};
pub use pattern::{Operand, Pattern, PatternError};
