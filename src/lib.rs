//! sme-codec - Compact binary wire format for framed messages
//!
//! A frame starts with the fixed 3-byte start sequence `"sme"`, followed by
//! up to 63 length-prefixed ASCII key/value header pairs, followed by an
//! opaque payload that runs to the end of the buffer. The codec is a pure,
//! stateless transform: `encode` materializes a full buffer, `decode`
//! consumes one.
//!
//! # Quick Start
//!
//! ```rust
//! use sme_codec::Message;
//!
//! // Build a message
//! let msg = Message::new(&b"ping"[..])
//!     .with_header("Version", "3.12")
//!     .with_header("Type", "Direct");
//!
//! // Encode to bytes
//! let bytes = msg.encode()?;
//!
//! // Decode from bytes
//! let decoded = Message::decode(&bytes)?;
//! assert_eq!(decoded.header("Version"), Some("3.12"));
//! # Ok::<(), sme_codec::Error>(())
//! ```
//!
//! # Format guarantees
//!
//! - **Bounded** - at most 63 headers, 1023 bytes per key/value, 256 KiB payload
//! - **Deterministic** - headers encode in insertion order, same message in,
//!   same bytes out
//! - **Self-contained** - no external schema; one buffer holds exactly one frame

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod protocol;

pub use protocol::{
    ArgumentError, Error, MAX_HEADERS_COUNT, MAX_KEY_VALUE_SIZE, MAX_PAYLOAD_SIZE, Message, Result,
    START_SEQUENCE, ValidationError, decode, encode,
};
