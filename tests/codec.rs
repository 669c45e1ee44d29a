//! End-to-end codec tests against the public API.

use bytes::Bytes;
use sme_codec::{ArgumentError, Error, MAX_HEADERS_COUNT, MAX_PAYLOAD_SIZE, Message};

fn correct_simple_message() -> Message {
    Message::new(&b"test"[..])
        .with_header("Version", "3.12")
        .with_header("Type", "Direct")
}

fn correct_message_bytes() -> Vec<u8> {
    vec![
        0x73, 0x6D, 0x65, 0x02, 0x07, 0x00, 0x56, 0x65, 0x72, 0x73, 0x69, 0x6F, 0x6E, 0x04, 0x00,
        0x33, 0x2E, 0x31, 0x32, 0x04, 0x00, 0x54, 0x79, 0x70, 0x65, 0x06, 0x00, 0x44, 0x69, 0x72,
        0x65, 0x63, 0x74, 0x74, 0x65, 0x73, 0x74,
    ]
}

fn many_headers(count: usize) -> Message {
    let mut msg = Message::new(&b"Testing payload"[..]);
    for i in 0..count {
        msg.insert_header(format!("test{i}"), format!("test{i}"));
    }
    msg
}

#[test]
fn encodes_simple_message_correctly() {
    let encoded = correct_simple_message().encode().unwrap();
    assert_eq!(encoded, correct_message_bytes());
}

#[test]
fn decodes_basic_message() {
    let msg = Message::new(&b"Testing payload"[..])
        .with_header("Version", "3.32")
        .with_header("Type", "test2");

    let encoded = msg.encode().unwrap();
    let decoded = Message::decode(&encoded).unwrap();

    assert_eq!(decoded.headers(), msg.headers());
    assert_eq!(decoded.payload().as_ref(), b"Testing payload");
}

#[test]
fn decodes_golden_bytes() {
    let decoded = Message::decode(&correct_message_bytes()).unwrap();

    assert_eq!(decoded.header("Version"), Some("3.12"));
    assert_eq!(decoded.header("Type"), Some("Direct"));
    assert_eq!(decoded.payload().as_ref(), b"test");
}

#[test]
fn roundtrips_with_max_amount_of_headers() {
    let msg = many_headers(MAX_HEADERS_COUNT);

    let encoded = msg.encode().unwrap();
    let decoded = Message::decode(&encoded).unwrap();

    assert_eq!(decoded.headers(), msg.headers());
    assert_eq!(decoded.payload(), msg.payload());
}

#[test]
fn rejects_too_many_headers() {
    let result = many_headers(MAX_HEADERS_COUNT + 2).encode();
    assert!(matches!(
        result,
        Err(Error::Argument(ArgumentError::TooManyHeaders { .. }))
    ));
}

#[test]
fn rejects_long_header() {
    let msg = Message::new(&b"test"[..])
        .with_header("Version", "3.12")
        .with_header("Type", "A".repeat(1024))
        .with_header("Test", "Hello");

    assert!(matches!(
        msg.encode(),
        Err(Error::Argument(ArgumentError::HeaderTooLong { .. }))
    ));
}

#[test]
fn rejects_utf8_header() {
    let msg = Message::new(&b"test"[..])
        .with_header("Version", "3.12")
        .with_header("Type", "√ù")
        .with_header("Test", "Hello");

    assert!(matches!(
        msg.encode(),
        Err(Error::Argument(ArgumentError::NonAsciiHeader { .. }))
    ));
}

#[test]
fn rejects_empty_headers() {
    let msg = Message::new(&b"test"[..]);
    assert!(matches!(
        msg.encode(),
        Err(Error::Argument(ArgumentError::EmptyHeaders))
    ));
}

#[test]
fn rejects_empty_payload() {
    let msg = Message::new(Bytes::new())
        .with_header("Version", "3.12")
        .with_header("Type", "control");

    assert!(matches!(
        msg.encode(),
        Err(Error::Argument(ArgumentError::EmptyPayload))
    ));
}

#[test]
fn rejects_too_big_payload() {
    let msg = Message::new(vec![b'A'; 400_000])
        .with_header("Version", "3.12")
        .with_header("Type", "control");

    assert!(matches!(
        msg.encode(),
        Err(Error::Argument(ArgumentError::PayloadTooLarge { .. }))
    ));
}

#[test]
fn accepts_payload_at_limit() {
    let msg = Message::new(vec![b'A'; MAX_PAYLOAD_SIZE]).with_header("Type", "bulk");

    let encoded = msg.encode().unwrap();
    let decoded = Message::decode(&encoded).unwrap();

    assert_eq!(decoded.payload().len(), MAX_PAYLOAD_SIZE);
}

#[test]
fn decode_reports_uniform_failure_kind() {
    // Bad magic, oversized count, truncated input: always the wrapped kind.
    let cases: [&[u8]; 3] = [b"xyz\x00rest", &[0x73, 0x6D, 0x65, 0x40], b"sm"];

    for bytes in cases {
        let err = Message::decode(bytes).unwrap_err();
        assert!(matches!(err, Error::General { .. }), "got {err:?}");
        assert!(std::error::Error::source(&err).is_some());
    }
}
