//! Error handling for the ecsig primitives

use std::borrow::Cow;
use std::fmt;

use ecsig_api::Error as CoreError;

/// The error type for primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Element without a multiplicative inverse
    Arithmetic {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: Cow<'static, str>,
    },

    /// Square root of a quadratic non-residue
    NoSquareRoot {
        /// Operation that needed the root
        context: &'static str,
    },

    /// Point off the curve, or identity where not allowed
    InvalidPoint {
        /// Operation that rejected the point
        context: &'static str,
        /// Why the point was rejected
        details: Cow<'static, str>,
    },

    /// Curve name or OID not in the registry
    UnknownCurve {
        /// Name or dotted OID that was looked up
        name: String,
    },

    /// DER/PEM structural violation
    Encoding {
        /// Construct being decoded
        context: &'static str,
        /// What was wrong with it
        details: Cow<'static, str>,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }

    /// Shorthand to create an Encoding error
    pub fn encoding<D: Into<Cow<'static, str>>>(context: &'static str, details: D) -> Self {
        Error::Encoding {
            context,
            details: details.into(),
        }
    }

    /// Shorthand to create an InvalidPoint error
    pub fn point<D: Into<Cow<'static, str>>>(context: &'static str, details: D) -> Self {
        Error::InvalidPoint {
            context,
            details: details.into(),
        }
    }
}

/// Result type for primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Arithmetic { operation, details } => {
                write!(f, "Arithmetic error in {}: {}", operation, details)
            }
            Error::NoSquareRoot { context } => {
                write!(f, "No square root exists in {}", context)
            }
            Error::InvalidPoint { context, details } => {
                write!(f, "Invalid point in {}: {}", context, details)
            }
            Error::UnknownCurve { name } => write!(f, "Unknown curve: {}", name),
            Error::Encoding { context, details } => {
                write!(f, "Malformed {}: {}", context, details)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Arithmetic { operation, details } => CoreError::Arithmetic {
                context: operation,
                message: details.into_owned(),
            },
            Error::NoSquareRoot { context } => CoreError::NoSquareRoot {
                context,
                message: "quadratic non-residue".to_string(),
            },
            Error::InvalidPoint { context, details } => CoreError::InvalidPoint {
                context,
                message: details.into_owned(),
            },
            Error::UnknownCurve { name } => CoreError::UnknownCurve { name },
            Error::Encoding { context, details } => CoreError::MalformedEncoding {
                context,
                message: details.into_owned(),
            },
            Error::Other(msg) => CoreError::Other {
                context: "primitives",
                message: msg.to_string(),
            },
        }
    }
}

pub mod validate;
