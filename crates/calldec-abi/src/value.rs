//! Decoded value tree and its canonical text rendering

use std::fmt;

use calldec_primitives::{I256, U256};

/// A decoded value.
///
/// The decoder builds this tree internally; the public contract is the
/// flattened text produced by [`render`] and the `Display` impls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Unsigned integer, rendered as decimal
    Uint(U256),
    /// Signed integer, rendered as decimal with a leading `-` if negative
    Int(I256),
    /// Boolean, rendered as `true`/`false`
    Bool(bool),
    /// Text decoded from length-prefixed tail data
    Text(String),
    /// Opaque byte word, rendered as `0x`-prefixed hex
    Opaque(String),
    /// Homogeneous list, rendered bracket-delimited
    Array(Vec<Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Uint(value) => write!(f, "{}", value),
            Value::Int(value) => write!(f, "{}", value),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Text(text) => write!(f, "{}", text),
            Value::Opaque(hex) => write!(f, "{}", hex),
            Value::Array(values) => write!(f, "[{}]", render(values)),
        }
    }
}

/// Join sibling renderings with `", "`, without surrounding brackets.
///
/// This is the top-level scope rendering; brackets are only added by the
/// array that owns a nested scope.
pub fn render(values: &[Value]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::Uint(U256::from(42u64)).to_string(), "42");
        assert_eq!(Value::Int(I256::from_i128(-3)).to_string(), "-3");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Text("hello world".to_string()).to_string(), "hello world");
        assert_eq!(Value::Opaque("0xdead".to_string()).to_string(), "0xdead");
    }

    #[test]
    fn test_display_array() {
        let array = Value::Array(vec![
            Value::Uint(U256::from(1u64)),
            Value::Int(I256::from_i128(-5)),
        ]);
        assert_eq!(array.to_string(), "[1, -5]");
    }

    #[test]
    fn test_display_nested_array() {
        let inner = |a: u64, b: u64| {
            Value::Array(vec![
                Value::Uint(U256::from(a)),
                Value::Uint(U256::from(b)),
            ])
        };
        let outer = Value::Array(vec![inner(1, 2), inner(3, 4)]);
        assert_eq!(outer.to_string(), "[[1, 2], [3, 4]]");
    }

    #[test]
    fn test_render_top_level() {
        let values = vec![
            Value::Array(vec![Value::Uint(U256::from(6u64))]),
            Value::Uint(U256::from(10u64)),
        ];
        assert_eq!(render(&values), "[6], 10");
        assert_eq!(render(&[]), "");
    }
}
