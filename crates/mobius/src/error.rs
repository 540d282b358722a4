//! Error types for the Möbius strip model.

use mobius_integrate::IntegrateError;
use thiserror::Error;

/// Errors that can occur while building or querying a strip.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MobiusError {
    /// A construction parameter is outside its valid range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name (`radius`, `width` or `resolution`).
        name: &'static str,
        /// The rejected value, as given.
        value: String,
        /// Which constraint was violated.
        reason: &'static str,
    },

    /// Quadrature over the sampled grid failed.
    #[error("integration failed: {0}")]
    Integration(#[from] IntegrateError),

    /// A renderer could not consume the scene.
    #[error("render failed: {0}")]
    Render(String),
}

impl MobiusError {
    /// Create an invalid parameter error.
    pub fn invalid(name: &'static str, value: impl ToString, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}
