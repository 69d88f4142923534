use thiserror::Error;

use super::Operand;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern {operand} '{pattern}' contains more than one wildcard")]
    MultipleWildcards { operand: Operand, pattern: String },
}

impl PatternError {
    pub fn operand(&self) -> Operand {
        match self {
            PatternError::MultipleWildcards { operand, .. } => *operand,
        }
    }

    pub fn pattern(&self) -> &str {
        match self {
            PatternError::MultipleWildcards { pattern, .. } => pattern,
        }
    }
}

pub type PatternResult<T> = Result<T, PatternError>;
