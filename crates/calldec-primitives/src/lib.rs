//! # calldec-primitives
//!
//! Word-level primitives for the calldec ABI decoder.
//!
//! This crate provides the fixed-width [`Word`] unit of the wire encoding,
//! the [`WordSeq`] parsed from a raw hex payload, and the conversions from
//! a single word to numbers, booleans, text and opaque byte values.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod codec;
mod error;
mod word;

pub use codec::I256;
pub use error::WordError;
pub use word::{Word, WordSeq};

// Re-export primitive-types for U256
pub use primitive_types::U256;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u256_basic() {
        let a = U256::from(100u64);
        let b = U256::from(200u64);
        assert_eq!(a + b, U256::from(300u64));
    }
}
