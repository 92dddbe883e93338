//! Tree construction errors

use thiserror::Error;

/// Errors produced while validating tree input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeError {
    #[error("tag name must not be empty")]
    EmptyTag,

    #[error("tag name {0:?} contains whitespace")]
    TagWhitespace(String),

    #[error("tag name {0:?} starts with a non-alphabetic character")]
    TagInvalidStart(String),
}
