//! Error types for U-LaserTime.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while ingesting a laser job.
///
/// The estimation core itself never fails: degenerate geometry degrades to
/// zero-valued results. These errors come from the edges of the system where
/// external input is turned into entities and machine parameters.
#[derive(Debug, Error)]
pub enum Error {
    /// The path data could not be parsed by the geometry library.
    #[error("invalid path data: {0}")]
    InvalidPath(String),

    /// A process tag outside the cut / mark / raster set.
    #[error("unknown process type: {0:?} (expected cut, mark or raster)")]
    UnknownProcessType(String),

    /// A machine parameter outside its valid range.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name as exposed to the user.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// A required machine parameter was not supplied.
    #[error("missing required parameter {0}")]
    MissingParameter(&'static str),

    /// The job contains no entity with a recognised laser operation.
    #[error("no valid laser operation paths (cut, mark or raster) found in the job")]
    NoEntities,

    /// I/O failure while reading job or profile files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A job or profile file could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidParameter`].
    pub fn invalid_parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
