//! Error types with diagnostic codes using miette
//!
//! None of these are fatal. Entry points that run in response to user input
//! log them and fall back to the empty result or a no-op.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum PlacementError {
    #[error("missing input: {what}")]
    #[diagnostic(
        code(flyout::missing_input),
        help("nothing was positioned; supply the value and request again")
    )]
    MissingInput { what: &'static str },

    #[error("context is not a {expected}")]
    #[diagnostic(code(flyout::invalid_context))]
    InvalidContext { expected: &'static str },

    #[error("cannot convert between screen and local space: {reason}")]
    #[diagnostic(
        code(flyout::conversion_failure),
        help("check that the camera faces the rectangle and the rectangle has a non-zero area")
    )]
    ConversionFailure { reason: &'static str },

    #[error("invalid center threshold: {0}")]
    #[diagnostic(code(flyout::invalid_threshold))]
    InvalidThreshold(#[from] NumericError),
}

impl PlacementError {
    pub(crate) fn missing(what: &'static str) -> Self {
        PlacementError::MissingInput { what }
    }

    pub(crate) fn conversion(reason: &'static str) -> Self {
        PlacementError::ConversionFailure { reason }
    }
}
