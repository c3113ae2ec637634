//! Parameter type descriptors and their tokenizer

use std::fmt;

use crate::DecodeError;

/// Length of one array dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayLen {
    /// Dynamic-length array (`[]`); the element count is read from the
    /// word sequence
    Dynamic,
    /// Fixed-length array (`[K]`); the element count comes from the type
    /// text
    Fixed(usize),
}

/// Parameter types understood by the decoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    /// Unsigned integer with bit size (8, 16, ..., 256)
    Uint(usize),
    /// Signed integer with bit size
    Int(usize),
    /// Boolean
    Bool,
    /// Length-prefixed text behind an offset
    String,
    /// Dynamic bytes
    Bytes,
    /// Fixed-size bytes (`bytes1` .. `bytes32`)
    FixedBytes(usize),
    /// Array of an element type; the first bracket group in the source
    /// text is the outermost dimension
    Array(Box<ParamType>, ArrayLen),
}

impl ParamType {
    /// Tokenize a type descriptor such as `uint256`, `bytes32` or
    /// `uint128[2][3]`.
    ///
    /// The descriptor is parsed structurally (base name, optional decimal
    /// width, bracket groups) rather than by substring containment, so
    /// `uint` inside `uint256[]` cannot misclassify. Fixed dimensions are
    /// parsed as full integers, so `uint[12]` has twelve elements.
    pub fn parse(descriptor: &str) -> Result<Self, DecodeError> {
        let descriptor = descriptor.trim();

        let (base, brackets) = match descriptor.find('[') {
            Some(i) => descriptor.split_at(i),
            None => (descriptor, ""),
        };

        let mut ty = Self::parse_base(base, descriptor)?;

        // Fold the bracket groups so the first group in the text becomes
        // the outermost array node
        for len in Self::parse_brackets(brackets, descriptor)?.into_iter().rev() {
            ty = ParamType::Array(Box::new(ty), len);
        }
        Ok(ty)
    }

    fn parse_base(base: &str, descriptor: &str) -> Result<Self, DecodeError> {
        let unsupported = || DecodeError::UnsupportedType(descriptor.to_string());

        match base {
            "bool" => return Ok(ParamType::Bool),
            "string" => return Ok(ParamType::String),
            "bytes" => return Ok(ParamType::Bytes),
            _ => {}
        }

        if let Some(rest) = base.strip_prefix("uint") {
            return Ok(ParamType::Uint(Self::parse_width(rest).ok_or_else(unsupported)?));
        }
        if let Some(rest) = base.strip_prefix("int") {
            return Ok(ParamType::Int(Self::parse_width(rest).ok_or_else(unsupported)?));
        }
        if let Some(rest) = base.strip_prefix("bytes") {
            let size: usize = rest.parse().map_err(|_| unsupported())?;
            return Ok(ParamType::FixedBytes(size));
        }

        Err(unsupported())
    }

    /// Integer width after `uint`/`int`; empty means 256
    fn parse_width(rest: &str) -> Option<usize> {
        if rest.is_empty() {
            return Some(256);
        }
        match rest.parse::<usize>() {
            Ok(width) if (1..=256).contains(&width) => Some(width),
            _ => None,
        }
    }

    /// Parse consecutive `[]` / `[K]` groups, in textual order
    fn parse_brackets(brackets: &str, descriptor: &str) -> Result<Vec<ArrayLen>, DecodeError> {
        let unsupported = || DecodeError::UnsupportedType(descriptor.to_string());

        let mut groups = Vec::new();
        let mut rest = brackets;
        while !rest.is_empty() {
            let inner = rest
                .strip_prefix('[')
                .and_then(|r| r.split_once(']'))
                .ok_or_else(unsupported)?;
            let (digits, remainder) = inner;
            if digits.is_empty() {
                groups.push(ArrayLen::Dynamic);
            } else {
                let count: usize = digits.parse().map_err(|_| unsupported())?;
                groups.push(ArrayLen::Fixed(count));
            }
            rest = remainder;
        }
        Ok(groups)
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Uint(width) => write!(f, "uint{}", width),
            ParamType::Int(width) => write!(f, "int{}", width),
            ParamType::Bool => write!(f, "bool"),
            ParamType::String => write!(f, "string"),
            ParamType::Bytes => write!(f, "bytes"),
            ParamType::FixedBytes(size) => write!(f, "bytes{}", size),
            ParamType::Array(elem, len) => {
                // This node is the outermost dimension, so its bracket
                // group goes right after the element's base name
                let elem = elem.to_string();
                let (base, rest) = match elem.find('[') {
                    Some(i) => elem.split_at(i),
                    None => (elem.as_str(), ""),
                };
                match len {
                    ArrayLen::Dynamic => write!(f, "{}[]{}", base, rest),
                    ArrayLen::Fixed(count) => write!(f, "{}[{}]{}", base, count, rest),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalars() {
        assert_eq!(ParamType::parse("uint256").unwrap(), ParamType::Uint(256));
        assert_eq!(ParamType::parse("uint").unwrap(), ParamType::Uint(256));
        assert_eq!(ParamType::parse("uint8").unwrap(), ParamType::Uint(8));
        assert_eq!(ParamType::parse("int80").unwrap(), ParamType::Int(80));
        assert_eq!(ParamType::parse("int").unwrap(), ParamType::Int(256));
        assert_eq!(ParamType::parse("bool").unwrap(), ParamType::Bool);
        assert_eq!(ParamType::parse("string").unwrap(), ParamType::String);
        assert_eq!(ParamType::parse("bytes").unwrap(), ParamType::Bytes);
        assert_eq!(ParamType::parse("bytes32").unwrap(), ParamType::FixedBytes(32));
    }

    #[test]
    fn test_parse_arrays() {
        assert_eq!(
            ParamType::parse("uint256[]").unwrap(),
            ParamType::Array(Box::new(ParamType::Uint(256)), ArrayLen::Dynamic)
        );
        assert_eq!(
            ParamType::parse("int[3]").unwrap(),
            ParamType::Array(Box::new(ParamType::Int(256)), ArrayLen::Fixed(3))
        );
        assert_eq!(
            ParamType::parse("bytes[]").unwrap(),
            ParamType::Array(Box::new(ParamType::Bytes), ArrayLen::Dynamic)
        );
    }

    #[test]
    fn test_parse_nested_first_group_is_outermost() {
        // uint128[2][3] is a two-element array of uint128[3]
        let ty = ParamType::parse("uint128[2][3]").unwrap();
        let inner = ParamType::Array(Box::new(ParamType::Uint(128)), ArrayLen::Fixed(3));
        assert_eq!(ty, ParamType::Array(Box::new(inner), ArrayLen::Fixed(2)));
    }

    #[test]
    fn test_parse_mixed_groups() {
        let ty = ParamType::parse("uint[3][]").unwrap();
        let inner = ParamType::Array(Box::new(ParamType::Uint(256)), ArrayLen::Dynamic);
        assert_eq!(ty, ParamType::Array(Box::new(inner), ArrayLen::Fixed(3)));
    }

    #[test]
    fn test_parse_multi_digit_dimension() {
        assert_eq!(
            ParamType::parse("uint[12]").unwrap(),
            ParamType::Array(Box::new(ParamType::Uint(256)), ArrayLen::Fixed(12))
        );
    }

    #[test]
    fn test_parse_unsupported() {
        assert!(ParamType::parse("tuple").is_err());
        assert!(ParamType::parse("(uint256,bool)").is_err());
        assert!(ParamType::parse("address").is_err());
        assert!(ParamType::parse("uint512").is_err());
        assert!(ParamType::parse("uint0").is_err());
        assert!(ParamType::parse("").is_err());
        assert!(ParamType::parse("uint256[abc]").is_err());
        assert!(ParamType::parse("uint256[3").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for descriptor in [
            "uint256",
            "int80",
            "bool",
            "string",
            "bytes",
            "bytes32",
            "uint256[]",
            "int256[3]",
            "uint128[2][3]",
            "uint256[3][]",
            "uint256[][3]",
            "uint128[2][3][2]",
        ] {
            let ty = ParamType::parse(descriptor).unwrap();
            assert_eq!(ty.to_string(), descriptor, "descriptor = {}", descriptor);
        }
    }
}
