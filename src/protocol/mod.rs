//! sme wire format core
//!
//! This module provides the format constants, the message data model, and
//! the codec.

mod ascii;
mod codec;
mod error;
mod message;

pub use codec::{decode, encode};
pub use error::{ArgumentError, Error, Result, ValidationError};
pub use message::Message;

/// Start sequence identifying a valid frame: `"sme"` in ASCII
pub const START_SEQUENCE: &[u8; 3] = b"sme";

/// Maximum number of headers per message
pub const MAX_HEADERS_COUNT: usize = 63;

/// Maximum byte length of a header key or value (each counted independently)
pub const MAX_KEY_VALUE_SIZE: usize = 1023;

/// Maximum payload size (256 KiB)
pub const MAX_PAYLOAD_SIZE: usize = 262_144;
