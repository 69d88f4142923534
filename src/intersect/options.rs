use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pattern::{DEFAULT_WILDCARD, Pattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValidationMode {
    /// Only the regions the scan inspects are checked for extra wildcards.
    #[default]
    Lazy,
    /// Both patterns are checked before scanning, `x` first.
    Eager,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntersectorOptions {
    pub wildcard: char,
    pub validation: ValidationMode,
}

impl Default for IntersectorOptions {
    fn default() -> Self {
        Self {
            wildcard: DEFAULT_WILDCARD,
            validation: ValidationMode::default(),
        }
    }
}

impl IntersectorOptions {
    pub fn builder() -> IntersectorOptionsBuilder {
        IntersectorOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), IntersectorConfigError> {
        Pattern::with_wildcard("", self.wildcard).map(|_| ())
    }
}

#[derive(Debug, Default, Clone)]
pub struct IntersectorOptionsBuilder {
    options: IntersectorOptions,
}

impl IntersectorOptionsBuilder {
    pub fn wildcard(mut self, value: char) -> Self {
        self.options.wildcard = value;
        self
    }

    pub fn validation(mut self, value: ValidationMode) -> Self {
        self.options.validation = value;
        self
    }

    pub fn build(self) -> Result<IntersectorOptions, IntersectorConfigError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntersectorConfigError {
    #[error("wildcard must be an ASCII character (got '{wildcard}')")]
    WildcardNotAscii { wildcard: char },
}
