mod compress;
mod errors;
mod intersection;
mod options;
mod prefix;
mod service;
mod suffix;

pub use errors::{IntersectError, IntersectResult};
pub use intersection::Intersection;
pub use options::{
    IntersectorConfigError, IntersectorOptions, IntersectorOptionsBuilder, ValidationMode,
};
pub use service::{Intersector, intersect_patterns};
