//! Error types for Vedic calculations.

use thiserror::Error;

/// Errors from the pure-math Vedic calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// An argument is outside its valid domain.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// A latitude-dependent house system has no defined cusps here.
    #[error("house cusps undefined at latitude {latitude_deg:.4} deg")]
    DegenerateGeometry { latitude_deg: f64 },
    /// Iterative algorithm did not converge.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
}
