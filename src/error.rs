//! Error types for address, network and range operations.

use thiserror::Error;

/// Every failure the kernel can report. Each variant carries the text of
/// the input that caused it so the shell can echo it back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("'{input}' does not appear to be an IPv4 or IPv6 {kind}: {reason}")]
    Parse {
        input: String,
        kind: &'static str,
        reason: String,
    },

    #[error("'{input}' has host bits set")]
    HostBitsSet { input: String },

    #[error("'{first}' and '{second}' are not of the same version")]
    FamilyMismatch { first: String, second: String },

    #[error("'{input}' is out of range: {reason}")]
    OutOfRange { input: String, reason: String },

    #[error("'{input}' has an invalid prefix: {reason}")]
    InvalidPrefix { input: String, reason: String },
}

impl Error {
    pub(crate) fn address(input: &str, reason: impl Into<String>) -> Self {
        Error::Parse {
            input: input.to_string(),
            kind: "address",
            reason: reason.into(),
        }
    }

    pub(crate) fn network(input: &str, reason: impl Into<String>) -> Self {
        Error::Parse {
            input: input.to_string(),
            kind: "network",
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_range(input: impl ToString, reason: impl Into<String>) -> Self {
        Error::OutOfRange {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn prefix(input: &str, reason: impl Into<String>) -> Self {
        Error::InvalidPrefix {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// The offending input text.
    pub fn input(&self) -> &str {
        match self {
            Error::Parse { input, .. }
            | Error::HostBitsSet { input }
            | Error::OutOfRange { input, .. }
            | Error::InvalidPrefix { input, .. } => input,
            Error::FamilyMismatch { first, .. } => first,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
