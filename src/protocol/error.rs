//! sme codec error types

use thiserror::Error;

/// A message handed to `encode` violates a structural constraint.
///
/// These are raised before any bytes are written.
#[derive(Error, Debug)]
pub enum ArgumentError {
    /// Message has no headers
    #[error("headers are missing or empty")]
    EmptyHeaders,

    /// Message has no payload
    #[error("payload is missing or empty")]
    EmptyPayload,

    /// Payload exceeds the format limit
    #[error("payload too large: {size} bytes (max {max})")]
    PayloadTooLarge {
        /// Payload size
        size: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Header count exceeds the format limit
    #[error("too many headers: {count} (max {max})")]
    TooManyHeaders {
        /// Header count
        count: usize,
        /// Maximum allowed
        max: usize,
    },

    /// A header key or value contains non-ASCII data
    #[error("header contains non-ASCII data: key {key:?}, value {value:?}")]
    NonAsciiHeader {
        /// Offending header key
        key: String,
        /// Offending header value
        value: String,
    },

    /// A header key or value exceeds the per-field limit
    #[error("header too long: key {key:?}, {len} bytes (max {max} per key/value)")]
    HeaderTooLong {
        /// Key of the offending header
        key: String,
        /// Length of the offending field
        len: usize,
        /// Maximum allowed per key/value
        max: usize,
    },
}

/// A byte buffer handed to `decode` violates the wire-format contract.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// First three bytes are not the start sequence
    #[error("invalid start sequence: expected \"sme\", got {found:02x?}")]
    BadStartSequence {
        /// Bytes found where the start sequence should be
        found: [u8; 3],
    },

    /// Header count byte exceeds the format limit
    #[error("too many headers: {count} (max {max})")]
    TooManyHeaders {
        /// Declared header count
        count: usize,
        /// Maximum allowed
        max: usize,
    },

    /// A declared key/value length exceeds the per-field limit
    #[error("header field too long: {len} bytes (max {max})")]
    FieldTooLong {
        /// Declared field length
        len: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Trailing payload exceeds the format limit
    #[error("payload too large: {size} bytes (max {max})")]
    PayloadTooLarge {
        /// Payload size
        size: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Buffer ended before all declared fields could be read
    #[error("unexpected end of buffer: need {needed} more bytes, {remaining} left")]
    UnexpectedEof {
        /// Bytes required by the next read
        needed: usize,
        /// Bytes remaining in the buffer
        remaining: usize,
    },
}

/// sme codec errors
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid message supplied to `encode`
    #[error("invalid message: {0}")]
    Argument(#[from] ArgumentError),

    /// Invalid frame supplied to `decode`
    #[error("invalid frame: {0}")]
    Validation(#[from] ValidationError),

    /// Any other failure, carrying the root cause
    #[error("{context}")]
    General {
        /// What the codec was doing when the failure occurred
        context: &'static str,
        /// Underlying cause
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl Error {
    pub(crate) fn general(
        context: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::General {
            context,
            source: Box::new(source),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_wrapper_exposes_cause() {
        let err = Error::general(
            "failed to decode message",
            ValidationError::TooManyHeaders { count: 64, max: 63 },
        );

        assert_eq!(err.to_string(), "failed to decode message");

        let cause = std::error::Error::source(&err).expect("cause attached");
        assert_eq!(cause.to_string(), "too many headers: 64 (max 63)");
    }

    #[test]
    fn test_argument_error_display() {
        let err = Error::from(ArgumentError::HeaderTooLong {
            key: "Type".to_owned(),
            len: 1024,
            max: 1023,
        });

        assert_eq!(
            err.to_string(),
            "invalid message: header too long: key \"Type\", 1024 bytes (max 1023 per key/value)"
        );
    }
}
