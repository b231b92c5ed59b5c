//! Error types for the signature crate

use core::fmt;

/// Errors specific to ECDSA keys and signatures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Secret exponent outside `[1, n-1]`, or a key encoding that does not
    /// describe a usable key
    InvalidKey {
        context: &'static str,
        details: String,
    },

    /// `r` or `s` outside `[1, n-1]`, or a signature of the wrong shape
    InvalidSignature {
        context: &'static str,
        details: String,
    },

    /// Peer point unusable for key agreement
    InvalidPoint {
        context: &'static str,
        details: String,
    },

    /// Digest longer than the curve order while truncation is disabled
    DigestTooLong { max: usize, actual: usize },

    /// Two keys that must share a curve do not
    CurveMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Key agreement produced the identity or a rejected zero x-coordinate
    InvalidSharedSecret(&'static str),

    /// Key container that parsed as DER but has the wrong structure
    Encoding {
        context: &'static str,
        details: String,
    },
}

impl Error {
    pub(crate) fn key<D: Into<String>>(context: &'static str, details: D) -> Self {
        Error::InvalidKey {
            context,
            details: details.into(),
        }
    }

    pub(crate) fn signature<D: Into<String>>(context: &'static str, details: D) -> Self {
        Error::InvalidSignature {
            context,
            details: details.into(),
        }
    }

    pub(crate) fn encoding<D: Into<String>>(context: &'static str, details: D) -> Self {
        Error::Encoding {
            context,
            details: details.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKey { context, details } => {
                write!(f, "Invalid key in {}: {}", context, details)
            }
            Error::InvalidSignature { context, details } => {
                write!(f, "Invalid signature in {}: {}", context, details)
            }
            Error::InvalidPoint { context, details } => {
                write!(f, "Invalid point in {}: {}", context, details)
            }
            Error::DigestTooLong { max, actual } => write!(
                f,
                "Digest of {} bytes is longer than the {}-byte curve order",
                actual, max
            ),
            Error::CurveMismatch { expected, actual } => {
                write!(f, "Curve mismatch: expected {}, got {}", expected, actual)
            }
            Error::InvalidSharedSecret(why) => write!(f, "Invalid shared secret: {}", why),
            Error::Encoding { context, details } => {
                write!(f, "Malformed {}: {}", context, details)
            }
        }
    }
}

impl std::error::Error for Error {}

// Convert to api::Error
impl From<Error> for ecsig_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidKey { context, details } => ecsig_api::Error::InvalidKey {
                context,
                message: details,
            },
            Error::InvalidSignature { context, details } => ecsig_api::Error::InvalidSignature {
                context,
                message: details,
            },
            Error::InvalidPoint { context, details } => ecsig_api::Error::InvalidPoint {
                context,
                message: details,
            },
            Error::DigestTooLong { max, actual } => ecsig_api::Error::InvalidParameter {
                context: "digest",
                message: format!(
                    "digest of {} bytes exceeds the {}-byte curve order and truncation is disabled",
                    actual, max
                ),
            },
            Error::CurveMismatch { expected, actual } => ecsig_api::Error::InvalidKey {
                context: "curve",
                message: format!("expected {}, got {}", expected, actual),
            },
            Error::InvalidSharedSecret(why) => ecsig_api::Error::InvalidKey {
                context: "shared secret",
                message: why.to_string(),
            },
            Error::Encoding { context, details } => ecsig_api::Error::MalformedEncoding {
                context,
                message: details,
            },
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
