use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a pattern in a two-argument call, as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operand {
    X,
    Y,
}

impl Operand {
    pub fn swap(self) -> Self {
        match self {
            Operand::X => Operand::Y,
            Operand::Y => Operand::X,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::X => f.write_str("x"),
            Operand::Y => f.write_str("y"),
        }
    }
}
