//! Word and word-sequence types

use std::fmt;

use crate::WordError;

/// A single 32-byte word of the wire encoding, held as 64 hex characters.
///
/// The text is NOT validated as hexadecimal on construction; malformed
/// characters only surface when a conversion is attempted, which keeps
/// opaque passthrough of odd payloads possible.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    /// Word length in hex characters
    pub const HEX_LEN: usize = 64;

    /// Word length in bytes
    pub const BYTES: usize = 32;

    /// Create from a 64-character text chunk
    pub fn from_text(text: &str) -> Result<Self, WordError> {
        if text.len() != Self::HEX_LEN {
            return Err(WordError::MalformedWord {
                word: text.to_string(),
            });
        }
        Ok(Word(text.to_string()))
    }

    /// Get the word as its 64-character text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to a `0x`-prefixed hex string
    pub fn to_hex(&self) -> String {
        format!("0x{}", self.0)
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self.to_hex())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// An ordered, zero-indexed, immutable sequence of [`Word`]s.
///
/// Built once per decode call from the raw payload and read-only for the
/// entire call, including every recursive scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSeq(Vec<Word>);

impl WordSeq {
    /// Parse a raw hex payload into a word sequence.
    ///
    /// Surrounding whitespace and one optional `0x` prefix are stripped.
    /// The remaining length must be an exact multiple of 64 hex
    /// characters; anything else is rejected as a truncated payload.
    /// Characters are not checked for hex validity here.
    pub fn parse(payload: &str) -> Result<Self, WordError> {
        let stripped = payload.trim();
        let stripped = stripped.strip_prefix("0x").unwrap_or(stripped);

        if stripped.len() % Word::HEX_LEN != 0 {
            return Err(WordError::TruncatedPayload {
                len: stripped.len(),
                word_len: Word::HEX_LEN,
            });
        }

        let words = (0..stripped.len() / Word::HEX_LEN)
            .map(|i| Word::from_text(&stripped[i * Word::HEX_LEN..(i + 1) * Word::HEX_LEN]))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(WordSeq(words))
    }

    /// Number of words in the sequence
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the word at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.0.get(index)
    }

    /// Iterate over the words in order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.0.iter()
    }

    /// Reconcatenate the sequence into a `0x`-prefixed hex string
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(2 + self.0.len() * Word::HEX_LEN);
        out.push_str("0x");
        for word in &self.0 {
            out.push_str(word.as_str());
        }
        out
    }
}
