//! Standalone error types.
//!
//! The wrapper's misuse surface is rejected by the type checker, so the only
//! runtime-fallible operation in the crate is parsing a wrapper from text.

use thiserror::Error;

/// Failure to parse a [`Tagged`](crate::Tagged) value from text.
///
/// Parsing delegates to the primitive's own `FromStr`, so the accepted
/// grammar is exactly the primitive's; this type only records what was being
/// parsed and what the primitive parser said.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {primitive} literal {input:?}: {message}")]
pub struct ParseError {
    primitive: &'static str,
    input: String,
    message: String,
}

impl ParseError {
    pub(crate) fn new(primitive: &'static str, input: &str, message: impl ToString) -> Self {
        Self {
            primitive,
            input: input.to_owned(),
            message: message.to_string(),
        }
    }

    /// Name of the primitive type the input was parsed as.
    pub fn primitive(&self) -> &'static str {
        self.primitive
    }

    /// The offending input.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The primitive parser's own report.
    pub fn message(&self) -> &str {
        &self.message
    }
}
