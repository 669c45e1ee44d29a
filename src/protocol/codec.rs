//! sme message codec (encode/decode)
//!
//! The codec is a pure, stateless transform between [`Message`] and a fully
//! materialized byte buffer. There is no streaming mode: one buffer holds
//! exactly one frame, and everything after the headers is payload.

use std::io::{self, Write};

use bytes::Bytes;
use indexmap::IndexMap;
use tracing::trace;

use super::{
    ArgumentError, Error, MAX_HEADERS_COUNT, MAX_KEY_VALUE_SIZE, MAX_PAYLOAD_SIZE, Message, Result,
    START_SEQUENCE, ValidationError, ascii,
};

/// Encode a message to bytes
///
/// # Format
///
/// ```text
/// [START "sme" (3)] [COUNT (1)] [N x (LEN (2) KEY LEN (2) VALUE)] [PAYLOAD]
/// ```
///
/// All integers are little-endian, unsigned. The payload carries no length
/// prefix; it runs to the end of the buffer.
///
/// # Errors
///
/// Returns [`Error::Argument`] when the message violates a format limit
/// (empty headers or payload, oversized payload, too many headers,
/// non-ASCII or oversized key/value). Any other failure while writing the
/// buffer is wrapped as [`Error::General`] with the cause attached.
pub fn encode(message: &Message) -> Result<Vec<u8>> {
    validate(message)?;

    let mut buf = Vec::with_capacity(encoded_len(message));
    write_frame(&mut buf, message).map_err(|e| Error::general("failed to encode message", e))?;

    trace!(
        headers = message.headers().len(),
        payload_len = message.payload().len(),
        frame_len = buf.len(),
        "encoded message"
    );

    Ok(buf)
}

/// Decode a message from bytes
///
/// The first 3 bytes must be the start sequence, the next byte is the header
/// count, then come the length-prefixed key/value pairs; every remaining
/// byte is payload. Trailing data after a valid header section is therefore
/// part of the payload by definition — callers must supply exactly one
/// frame's bytes per call.
///
/// Header bytes are taken as-is without re-checking that they are ASCII;
/// non-ASCII bytes map to their one-byte codepoints.
///
/// # Errors
///
/// Every failure — bad start sequence, oversized count or field length,
/// oversized payload, truncated buffer — is reported uniformly as
/// [`Error::General`] with the root cause attached.
pub fn decode(bytes: &[u8]) -> Result<Message> {
    let message =
        decode_frame(bytes).map_err(|e| Error::general("failed to decode message", e))?;

    trace!(
        headers = message.headers().len(),
        payload_len = message.payload().len(),
        "decoded message"
    );

    Ok(message)
}

/// Check the format limits in the order the wire layout is written.
fn validate(message: &Message) -> std::result::Result<(), ArgumentError> {
    let headers = message.headers();
    let payload = message.payload();

    if headers.is_empty() {
        return Err(ArgumentError::EmptyHeaders);
    }

    if payload.is_empty() {
        return Err(ArgumentError::EmptyPayload);
    }

    if payload.len() > MAX_PAYLOAD_SIZE {
        return Err(ArgumentError::PayloadTooLarge {
            size: payload.len(),
            max: MAX_PAYLOAD_SIZE,
        });
    }

    if headers.len() > MAX_HEADERS_COUNT {
        return Err(ArgumentError::TooManyHeaders {
            count: headers.len(),
            max: MAX_HEADERS_COUNT,
        });
    }

    for (key, value) in headers {
        if ascii::contains_non_ascii(key) || ascii::contains_non_ascii(value) {
            return Err(ArgumentError::NonAsciiHeader {
                key: key.clone(),
                value: value.clone(),
            });
        }

        for field in [key, value] {
            if field.len() > MAX_KEY_VALUE_SIZE {
                return Err(ArgumentError::HeaderTooLong {
                    key: key.clone(),
                    len: field.len(),
                    max: MAX_KEY_VALUE_SIZE,
                });
            }
        }
    }

    Ok(())
}

/// Exact frame size for a validated message.
fn encoded_len(message: &Message) -> usize {
    let headers_len: usize = message
        .headers()
        .iter()
        .map(|(k, v)| 2 + k.len() + 2 + v.len())
        .sum();

    START_SEQUENCE.len() + 1 + headers_len + message.payload().len()
}

fn write_frame(out: &mut impl Write, message: &Message) -> io::Result<()> {
    out.write_all(START_SEQUENCE)?;

    // Count fits in one byte: validated against MAX_HEADERS_COUNT (63).
    out.write_all(&[message.headers().len() as u8])?;

    for (key, value) in message.headers() {
        write_string(out, key)?;
        write_string(out, value)?;
    }

    out.write_all(message.payload())
}

fn write_string(out: &mut impl Write, value: &str) -> io::Result<()> {
    // Length fits in u16: validated against MAX_KEY_VALUE_SIZE (1023).
    let len = value.len() as u16;
    out.write_all(&len.to_le_bytes())?;
    out.write_all(value.as_bytes())
}

fn decode_frame(bytes: &[u8]) -> std::result::Result<Message, ValidationError> {
    let mut cursor = Cursor::new(bytes);

    let start = cursor.take(START_SEQUENCE.len())?;
    if start != START_SEQUENCE {
        return Err(ValidationError::BadStartSequence {
            found: [start[0], start[1], start[2]],
        });
    }

    let count = usize::from(cursor.take_u8()?);
    if count > MAX_HEADERS_COUNT {
        return Err(ValidationError::TooManyHeaders {
            count,
            max: MAX_HEADERS_COUNT,
        });
    }

    let mut headers = IndexMap::with_capacity(count);
    for _ in 0..count {
        let key = read_string(&mut cursor)?;
        let value = read_string(&mut cursor)?;
        // Duplicate keys: later pair overwrites the earlier one.
        headers.insert(key, value);
    }

    let payload = cursor.rest();
    if payload.len() > MAX_PAYLOAD_SIZE {
        return Err(ValidationError::PayloadTooLarge {
            size: payload.len(),
            max: MAX_PAYLOAD_SIZE,
        });
    }

    Ok(Message::from_parts(headers, Bytes::copy_from_slice(payload)))
}

/// Read one length-prefixed string.
///
/// The bytes are not re-validated as ASCII; each byte becomes its one-byte
/// codepoint. The encoder guarantees ASCII, the decoder trusts the frame.
fn read_string(cursor: &mut Cursor<'_>) -> std::result::Result<String, ValidationError> {
    let len = usize::from(cursor.take_u16_le()?);
    if len > MAX_KEY_VALUE_SIZE {
        return Err(ValidationError::FieldTooLong {
            len,
            max: MAX_KEY_VALUE_SIZE,
        });
    }

    let raw = cursor.take(len)?;
    Ok(raw.iter().map(|&b| char::from(b)).collect())
}

/// Bounds-checked reader over the input buffer.
struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take(&mut self, n: usize) -> std::result::Result<&'a [u8], ValidationError> {
        let remaining = self.buf.len() - self.pos;
        if n > remaining {
            return Err(ValidationError::UnexpectedEof {
                needed: n,
                remaining,
            });
        }

        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn take_u8(&mut self) -> std::result::Result<u8, ValidationError> {
        Ok(self.take(1)?[0])
    }

    fn take_u16_le(&mut self) -> std::result::Result<u16, ValidationError> {
        let bytes = self.take(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }
}
