use crate::pattern::PatternError;
use thiserror::Error;

use super::IntersectorConfigError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntersectError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Config(#[from] IntersectorConfigError),
}

pub type IntersectResult<T> = Result<T, IntersectError>;
