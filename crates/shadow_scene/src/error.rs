//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid scene configuration, exhausted placement pools and out-of-range incidence angles.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("placement pool exhausted after {placed} of {requested} boulders")]
    PlacementExhausted { placed: usize, requested: usize },

    #[error("incidence angle must be finite and within [0, 90) degrees, got {0}")]
    InvalidIncidence(f64),
}

impl Error {
    /// Returns `true` for errors caused by a scene that cannot be built as configured.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidConfig(_) | Error::PlacementExhausted { .. }
        )
    }
}
