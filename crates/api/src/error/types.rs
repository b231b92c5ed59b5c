//! Error type definitions for elliptic-curve operations

use thiserror::Error as ThisError;

/// Primary error type for ecsig operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// An element had no inverse (zero, or not coprime to the modulus)
    #[error("Arithmetic error: {context}: {message}")]
    Arithmetic {
        context: &'static str,
        message: String,
    },

    /// Square root requested for a quadratic non-residue
    #[error("No square root: {context}: {message}")]
    NoSquareRoot {
        context: &'static str,
        message: String,
    },

    /// Point not on the curve, or the identity where it is not allowed
    #[error("Invalid point: {context}: {message}")]
    InvalidPoint {
        context: &'static str,
        message: String,
    },

    /// Curve name or OID absent from the registry
    #[error("Unknown curve: {name}")]
    UnknownCurve { name: String },

    /// DER or PEM structural violation
    #[error("Malformed encoding: {context}: {message}")]
    MalformedEncoding {
        context: &'static str,
        message: String,
    },

    /// Signature components out of range
    #[error("Invalid signature: {context}: {message}")]
    InvalidSignature {
        context: &'static str,
        message: String,
    },

    /// Key material rejected
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// The entropy source failed
    #[error("Random generation error: {context}: {message}")]
    RandomGenerationError {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for ecsig operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::Arithmetic { message, .. } => Self::Arithmetic { context, message },
            Self::NoSquareRoot { message, .. } => Self::NoSquareRoot { context, message },
            Self::InvalidPoint { message, .. } => Self::InvalidPoint { context, message },
            Self::UnknownCurve { name } => Self::UnknownCurve { name },
            Self::MalformedEncoding { message, .. } => Self::MalformedEncoding { context, message },
            Self::InvalidSignature { message, .. } => Self::InvalidSignature { context, message },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Shorthand for a [`Error::MalformedEncoding`]
    pub fn malformed(context: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedEncoding {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::InvalidKey`]
    pub fn invalid_key(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidKey {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::InvalidParameter`]
    pub fn invalid_parameter(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }
}
