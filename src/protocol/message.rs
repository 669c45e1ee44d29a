//! sme message implementation

use bytes::Bytes;
use indexmap::IndexMap;

/// A framed message: ordered ASCII headers plus an opaque payload.
///
/// The struct itself places no constraints on its contents; the format
/// limits (header count, key/value size, payload size, ASCII-only headers)
/// are enforced at the encode/decode boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Header pairs, unique keys, insertion order preserved for encoding
    headers: IndexMap<String, String>,
    /// Opaque payload
    payload: Bytes,
}

impl Message {
    /// Create a new message with the given payload and no headers
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self {
            headers: IndexMap::new(),
            payload: payload.into(),
        }
    }

    /// Create a message from an existing header map and payload
    #[must_use]
    pub fn from_parts(headers: IndexMap<String, String>, payload: Bytes) -> Self {
        Self { headers, payload }
    }

    /// Add a header, builder style
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Insert a header, replacing any existing value for the key
    pub fn insert_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(key.into(), value.into());
    }

    /// Look up a header value
    #[must_use]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    /// Get the header map
    #[must_use]
    pub const fn headers(&self) -> &IndexMap<String, String> {
        &self.headers
    }

    /// Get the payload
    #[must_use]
    pub const fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Consume the message, returning its headers and payload
    #[must_use]
    pub fn into_parts(self) -> (IndexMap<String, String>, Bytes) {
        (self.headers, self.payload)
    }

    /// Encode this message to bytes
    pub fn encode(&self) -> super::Result<Vec<u8>> {
        super::encode(self)
    }

    /// Decode a message from bytes
    pub fn decode(bytes: &[u8]) -> super::Result<Self> {
        super::decode(bytes)
    }
}
