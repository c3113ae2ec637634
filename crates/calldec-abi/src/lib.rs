//! # calldec-abi
//!
//! ABI calldata decoding for calldec.
//!
//! Given a function signature and a hex payload of 32-byte words, this
//! crate renders every parameter back to text: scalars as decimal, text
//! or `0x`-prefixed hex, arrays as bracket-delimited lists.
//!
//! ## Example
//!
//! ```rust
//! use calldec_abi::decode;
//!
//! let payload = "0x000000000000000000000000000000000000000000000000000000000000002a";
//! let rendered = decode("function baz(uint256)", payload).unwrap();
//! assert_eq!(rendered, "42");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod decode;
mod error;
mod signature;
mod types;
mod value;

pub use decode::{decode, decode_values, decode_with_options, DecodeOptions};
pub use error::DecodeError;
pub use signature::Signature;
pub use types::{ArrayLen, ParamType};
pub use value::{render, Value};
