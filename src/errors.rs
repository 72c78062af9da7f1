//! Error types for the spheroid crate
//!
//! Numeric degeneracies (zero-length lines, normalizing a zero vector) are not
//! errors: they propagate IEEE infinities and NaN from the arithmetic.

use thiserror::Error;

/// Main error type for geodesy operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeodesyError {
    /// A scaled geographic vector was requested with no spheroid to size it
    #[error("No spheroid defined: a scaled geographic vector needs a bound or supplied spheroid")]
    MissingSpheroid,

    /// The named body is not in the catalog
    #[error("Body not found: {0}")]
    UnknownBody(String),
}

/// Result type for geodesy operations
pub type Result<T> = std::result::Result<T, GeodesyError>;
