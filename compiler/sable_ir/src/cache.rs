//! Module interface cache codec.
//!
//! Resolved symbols ([`Canonical`], [`Value`], [`Listing`]) are written to
//! the interface cache so dependent modules can be compiled without
//! re-reading their imports. This is the only cross-process format the IR
//! defines.
//!
//! # Format
//!
//! `bincode` with varint integers. Enum variants start with their index,
//! which fits in one byte, followed by the variant's fields in declaration
//! order:
//!
//! | type        | tag | payload                                  |
//! |-------------|-----|------------------------------------------|
//! | `Home`      | 0   | `BuiltIn`, nothing                       |
//! |             | 1   | `Module`: path (sequence of strings)     |
//! |             | 2   | `Local`, nothing                         |
//! | `Canonical` | -   | home, then name                          |
//! | `Value`     | 0   | `Value`: name                            |
//! |             | 1   | `Alias`: name                            |
//! |             | 2   | `Union`: name, constructor listing       |
//! | `Listing`   | -   | explicit items, then open flag           |
//! | `bool`      | 0/1 |                                          |
//!
//! Strings and sequences carry a varint length prefix.
//!
//! Decoding is all-or-nothing. Any unknown tag, short input, or leftover
//! byte rejects the whole entry, and the caller rebuilds it from source.
//!
//! [`Canonical`]: crate::Canonical
//! [`Value`]: crate::Value
//! [`Listing`]: crate::Listing

use bincode::{DefaultOptions, ErrorKind, Options};
use serde::de::DeserializeOwned;
use serde::Serialize;


/// Why a cache entry could not be written or was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CacheError {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("string is not valid UTF-8")]
    InvalidUtf8,

    #[error("invalid bool byte {0:#04x}")]
    InvalidBool(u8),

    #[error("malformed cache entry: {0}")]
    Malformed(String),
}

impl From<bincode::Error> for CacheError {
    fn from(err: bincode::Error) -> Self {
        match *err {
            ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::UnexpectedEof => {
                CacheError::UnexpectedEof
            }
            ErrorKind::InvalidUtf8Encoding(_) => CacheError::InvalidUtf8,
            ErrorKind::InvalidBoolEncoding(byte) => CacheError::InvalidBool(byte),
            other => CacheError::Malformed(other.to_string()),
        }
    }
}

/// Encode `value` into a fresh buffer.
pub fn to_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, CacheError> {
    Ok(DefaultOptions::new().reject_trailing_bytes().serialize(value)?)
}

/// Decode exactly one value from `bytes`.
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CacheError> {
    let result = DefaultOptions::new()
        .reject_trailing_bytes()
        .deserialize(bytes)
        .map_err(CacheError::from);
    if let Err(error) = &result {
        tracing::debug!(%error, len = bytes.len(), "rejected interface cache entry");
    }
    result
}
