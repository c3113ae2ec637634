//! Recursive value decoding
//!
//! The decoder walks a scope (an ordered list of sibling parameter types
//! plus a starting word cursor) left to right. Every step reports how many
//! head words it consumed, so statically sized aggregates advance the
//! cursor past their full inline extent while dynamic siblings consume a
//! single offset word. Recursion creates a fresh scope per array nesting
//! level over the same word sequence; the cursor is threaded as a plain
//! value, never shared mutable state.

use calldec_primitives::{U256, Word, WordSeq};

use crate::value::render;
use crate::{ArrayLen, DecodeError, ParamType, Signature, Value};

/// Decoding options
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Decode `int<N>` with its declared bit width instead of the
    /// compatibility default of a 256-bit modulus
    pub declared_int_width: bool,
    /// Maximum type nesting depth
    pub max_depth: usize,
}

impl DecodeOptions {
    /// Default nesting depth limit
    pub const DEFAULT_MAX_DEPTH: usize = 32;
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            declared_int_width: false,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Decode an ABI payload against a function signature.
///
/// Returns the comma-and-space-joined rendering of every top-level
/// parameter, in declaration order: arrays bracket-wrapped, scalars bare
/// decimal/text/hex.
pub fn decode(signature: &str, payload: &str) -> Result<String, DecodeError> {
    decode_with_options(signature, payload, &DecodeOptions::default())
}

/// Decode with explicit [`DecodeOptions`]
pub fn decode_with_options(
    signature: &str,
    payload: &str,
    options: &DecodeOptions,
) -> Result<String, DecodeError> {
    Ok(render(&decode_values(signature, payload, options)?))
}

/// Decode into the structured [`Value`] tree instead of the flattened text
pub fn decode_values(
    signature: &str,
    payload: &str,
    options: &DecodeOptions,
) -> Result<Vec<Value>, DecodeError> {
    let signature = Signature::parse(signature)?;
    let words = WordSeq::parse(payload)?;
    let decoder = Decoder {
        words: &words,
        options,
    };
    let (values, _) = decoder.decode_scope(&signature.params, 0, 0)?;
    Ok(values)
}

struct Decoder<'a> {
    words: &'a WordSeq,
    options: &'a DecodeOptions,
}

impl Decoder<'_> {
    fn word_at(&self, index: usize) -> Result<&Word, DecodeError> {
        self.words
            .get(index)
            .ok_or_else(|| DecodeError::IndexOutOfRange {
                index,
                len: self.words.len(),
            })
    }

    /// Decode one scope of sibling types starting at `cursor`.
    ///
    /// Returns the decoded values and the total number of words consumed.
    fn decode_scope(
        &self,
        types: &[ParamType],
        cursor: usize,
        depth: usize,
    ) -> Result<(Vec<Value>, usize), DecodeError> {
        let sole = types.len() == 1;
        let mut at = cursor;
        let mut values = Vec::with_capacity(types.len());
        for ty in types {
            let (value, consumed) = self.decode_param(ty, at, sole, depth)?;
            values.push(value);
            at += consumed;
        }
        Ok((values, at - cursor))
    }

    /// Decode a synthetic scope of `count` repetitions of `elem`
    fn decode_elements(
        &self,
        elem: &ParamType,
        count: usize,
        cursor: usize,
        depth: usize,
    ) -> Result<(Vec<Value>, usize), DecodeError> {
        if depth > self.options.max_depth {
            return Err(DecodeError::DepthLimit {
                max: self.options.max_depth,
            });
        }

        let sole = count == 1;
        let mut at = cursor;
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            let (value, consumed) = self.decode_param(elem, at, sole, depth)?;
            values.push(value);
            at += consumed;
        }
        Ok((values, at - cursor))
    }

    /// Decode a single parameter at `cursor`.
    ///
    /// `sole` is true when the parameter is the only sibling in its scope,
    /// which makes dynamic arrays skip their offset indirection.
    fn decode_param(
        &self,
        ty: &ParamType,
        cursor: usize,
        sole: bool,
        depth: usize,
    ) -> Result<(Value, usize), DecodeError> {
        match ty {
            ParamType::Uint(width) => {
                let mut value = self.word_at(cursor)?.to_unsigned()?;
                if *width < 256 {
                    value %= U256::one() << *width;
                }
                Ok((Value::Uint(value), 1))
            }
            ParamType::Int(width) => {
                let bits = if self.options.declared_int_width {
                    *width as u32
                } else {
                    256
                };
                Ok((Value::Int(self.word_at(cursor)?.to_signed(bits)?), 1))
            }
            ParamType::Bool => Ok((Value::Bool(self.word_at(cursor)?.to_bool()?), 1)),
            ParamType::String => {
                let offset = self.word_at(cursor)?.to_index()?;
                let tail = offset / Word::BYTES;
                let length = self.word_at(tail)?.to_index()?;
                let text = if length == 0 {
                    String::new()
                } else {
                    self.word_at(tail + 1)?.to_text(length)?
                };
                Ok((Value::Text(text), 1))
            }
            ParamType::Bytes | ParamType::FixedBytes(_) => {
                Ok((Value::Opaque(self.word_at(cursor)?.to_opaque()), 1))
            }
            ParamType::Array(elem, ArrayLen::Dynamic) => {
                // A dynamic array's head word is its offset unless it is
                // the sole parameter of its scope; offsets index the word
                // sequence from word zero
                let tail = if sole {
                    cursor
                } else {
                    self.word_at(cursor)?.to_index()? / Word::BYTES
                };
                let count = self.word_at(tail)?.to_index()?;
                let (values, _) = self.decode_elements(elem, count, tail + 1, depth + 1)?;
                Ok((Value::Array(values), 1))
            }
            ParamType::Array(elem, ArrayLen::Fixed(count)) => {
                // Fixed-size arrays are laid out inline: no offset word,
                // no count word, and the scope cursor advances past the
                // whole extent
                let (values, consumed) =
                    self.decode_elements(elem, *count, cursor, depth + 1)?;
                Ok((Value::Array(values), consumed))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(value: u64) -> String {
        format!("{:064x}", value)
    }

    #[test]
    fn test_decode_bool() {
        assert_eq!(decode("function baz(bool)", &word(1)).unwrap(), "true");
        assert_eq!(decode("function baz(bool)", &word(0)).unwrap(), "false");
        // Nonzero values other than 1 are false
        assert_eq!(decode("function baz(bool)", &word(7)).unwrap(), "false");
    }

    #[test]
    fn test_decode_empty_parameter_list() {
        assert_eq!(decode("function noop()", "0x").unwrap(), "");
    }

    #[test]
    fn test_decode_missing_word() {
        assert!(matches!(
            decode("function baz(uint256)", "0x"),
            Err(DecodeError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_decode_depth_limit() {
        let descriptor = format!("uint{}", "[1]".repeat(DecodeOptions::DEFAULT_MAX_DEPTH + 1));
        let signature = format!("function baz({})", descriptor);
        assert!(matches!(
            decode(&signature, &word(1)),
            Err(DecodeError::DepthLimit { .. })
        ));
    }

    #[test]
    fn test_decode_custom_depth_limit() {
        let options = DecodeOptions {
            max_depth: 2,
            ..Default::default()
        };
        assert!(decode_with_options("function baz(uint[1])", &word(5), &options).is_ok());
        assert!(matches!(
            decode_with_options("function baz(uint[1][1][1])", &word(5), &options),
            Err(DecodeError::DepthLimit { max: 2 })
        ));
    }

    #[test]
    fn test_decode_values_structured() {
        let values = decode_values(
            "function baz(uint256,bool)",
            &format!("{}{}", word(42), word(1)),
            &DecodeOptions::default(),
        )
        .unwrap();
        assert_eq!(
            values,
            vec![Value::Uint(U256::from(42u64)), Value::Bool(true)]
        );
    }

    #[test]
    fn test_decode_fixed_array_of_zero_elements() {
        // A zero-length fixed array occupies no words at all
        assert_eq!(
            decode("function baz(uint[0],uint)", &word(9)).unwrap(),
            "[], 9"
        );
    }
}
