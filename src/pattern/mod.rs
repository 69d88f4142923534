mod error;
mod operand;
mod validity;
mod view;

pub use error::{PatternError, PatternResult};
pub use operand::Operand;
pub use validity::{count_wildcards, has_at_most_one_wildcard};
pub use view::{DEFAULT_WILDCARD, Pattern};
