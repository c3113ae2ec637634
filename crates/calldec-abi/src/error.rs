//! Decode error types

use thiserror::Error;

use calldec_primitives::WordError;

/// Decode error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Word-level conversion error
    #[error("word error: {0}")]
    Word(#[from] WordError),

    /// A computed cursor, tail or offset-derived index fell outside the
    /// word sequence
    #[error("word index {index} out of range (payload has {len} words)")]
    IndexOutOfRange {
        /// The out-of-range index
        index: usize,
        /// Number of words in the payload
        len: usize,
    },

    /// A type descriptor the dispatch does not recognize
    #[error("unsupported parameter type: {0}")]
    UnsupportedType(String),

    /// Missing or misplaced parentheses in a function signature
    #[error("malformed signature: {0}")]
    MalformedSignature(String),

    /// Type nesting deeper than the configured limit
    #[error("nesting depth exceeds limit of {max}")]
    DepthLimit {
        /// The configured maximum nesting depth
        max: usize,
    },
}
