//! Word-level error types

use thiserror::Error;

/// Word parsing and conversion error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    /// A word contained non-hexadecimal characters when a conversion was attempted
    #[error("malformed word: {word}")]
    MalformedWord {
        /// The offending word text
        word: String,
    },

    /// Raw payload length is not a multiple of the word size
    #[error("truncated payload: {len} hex characters is not a multiple of {word_len}")]
    TruncatedPayload {
        /// Payload length in hex characters, after stripping the `0x` prefix
        len: usize,
        /// Required word length in hex characters
        word_len: usize,
    },

    /// An offset or length value exceeds the supported 32-bit index range
    #[error("offset or length {value} exceeds the 32-bit index range")]
    OffsetOverflow {
        /// The oversized value, in decimal
        value: String,
    },
}
