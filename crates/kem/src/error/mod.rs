//! Error handling for ECDH sessions

use core::fmt;
use ecsig_api::Error as CoreError;

/// Error type for ECDH sessions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A key the operation needs has not been loaded
    NoKey(&'static str),

    /// The operation needs a curve and none is set
    NoCurve(&'static str),

    /// A key is on a different curve than the session
    InvalidCurve {
        expected: &'static str,
        actual: &'static str,
    },

    /// The agreement produced the point at infinity, or a zero x-coordinate
    /// the session policy rejects
    InvalidSharedSecret(String),

    /// Key parsing or arithmetic failure from the lower layers
    Api(CoreError),
}

/// Result type for ECDH sessions
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoKey(details) => write!(f, "Key not loaded: {}", details),
            Error::NoCurve(details) => write!(f, "Curve not set: {}", details),
            Error::InvalidCurve { expected, actual } => {
                write!(f, "Curve mismatch: session uses {}, key uses {}", expected, actual)
            }
            Error::InvalidSharedSecret(details) => write!(f, "Invalid shared secret: {}", details),
            Error::Api(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Error::Api(err)
    }
}

impl From<ecsig_algorithms::Error> for Error {
    fn from(err: ecsig_algorithms::Error) -> Self {
        Error::Api(err.into())
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::NoKey(details) => CoreError::InvalidParameter {
                context: "ecdh",
                message: format!("key not loaded: {}", details),
            },
            Error::NoCurve(details) => CoreError::InvalidParameter {
                context: "ecdh",
                message: format!("curve not set: {}", details),
            },
            Error::InvalidCurve { expected, actual } => {
                CoreError::invalid_key("curve", format!("expected {}, got {}", expected, actual))
            }
            Error::InvalidSharedSecret(details) => CoreError::invalid_key("shared secret", details),
            Error::Api(e) => e,
        }
    }
}
