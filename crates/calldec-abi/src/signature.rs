//! Function signature parsing

use crate::{DecodeError, ParamType};

/// A parsed function signature: name plus ordered parameter types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Function name
    pub name: String,
    /// Parameter types, in declaration order
    pub params: Vec<ParamType>,
}

impl Signature {
    /// Parse a signature of the form `[function ]NAME(T1, T2, ...)`.
    ///
    /// The name starts right after the literal keyword `function` when
    /// present, otherwise at the start of the string, and ends at the
    /// first `(`. The parameter substring runs from the first `(` to the
    /// last `)`. Explicitly named parameters (`uint256 amount`) keep only
    /// the type before the space. An empty parameter list yields an empty
    /// descriptor list.
    pub fn parse(signature: &str) -> Result<Self, DecodeError> {
        let open = signature
            .find('(')
            .ok_or_else(|| DecodeError::MalformedSignature("missing '('".to_string()))?;
        let close = signature
            .rfind(')')
            .ok_or_else(|| DecodeError::MalformedSignature("missing ')'".to_string()))?;
        if close < open {
            return Err(DecodeError::MalformedSignature(
                "')' before '('".to_string(),
            ));
        }

        let head = &signature[..open];
        let name_start = head
            .find("function")
            .map(|i| i + "function".len())
            .unwrap_or(0);
        let name = head[name_start..].trim().to_string();

        // An empty parameter substring is a parameterless function, not a
        // single empty descriptor
        let inner = &signature[open + 1..close];
        let params = if inner.trim().is_empty() {
            Vec::new()
        } else {
            inner
                .split(',')
                .map(str::trim)
                .map(|piece| {
                    // Named parameter: keep only the type before the space
                    let descriptor = match piece.find(' ') {
                        Some(i) => &piece[..i],
                        None => piece,
                    };
                    ParamType::parse(descriptor)
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Signature { name, params })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArrayLen;

    #[test]
    fn test_parse_with_function_keyword() {
        let sig = Signature::parse("function baz(uint256,string)").unwrap();
        assert_eq!(sig.name, "baz");
        assert_eq!(sig.params, vec![ParamType::Uint(256), ParamType::String]);
    }

    #[test]
    fn test_parse_without_function_keyword() {
        let sig = Signature::parse("transfer(uint256)").unwrap();
        assert_eq!(sig.name, "transfer");
        assert_eq!(sig.params, vec![ParamType::Uint(256)]);
    }

    #[test]
    fn test_parse_named_parameters() {
        let sig = Signature::parse("function baz(bytes[] a, bytes32 b)").unwrap();
        assert_eq!(sig.name, "baz");
        assert_eq!(
            sig.params,
            vec![
                ParamType::Array(Box::new(ParamType::Bytes), ArrayLen::Dynamic),
                ParamType::FixedBytes(32),
            ]
        );
    }

    #[test]
    fn test_parse_whitespace_between_params() {
        let sig = Signature::parse("function baz(uint128[2][3], uint)").unwrap();
        assert_eq!(sig.params.len(), 2);
        assert_eq!(sig.params[1], ParamType::Uint(256));
    }

    #[test]
    fn test_parse_empty_parameter_list() {
        let sig = Signature::parse("function noop()").unwrap();
        assert_eq!(sig.name, "noop");
        assert!(sig.params.is_empty());
    }

    #[test]
    fn test_parse_missing_parens() {
        assert!(matches!(
            Signature::parse("function baz"),
            Err(DecodeError::MalformedSignature(_))
        ));
        assert!(matches!(
            Signature::parse("function baz(uint256"),
            Err(DecodeError::MalformedSignature(_))
        ));
        assert!(matches!(
            Signature::parse("function baz)uint256("),
            Err(DecodeError::MalformedSignature(_))
        ));
    }

    #[test]
    fn test_parse_unknown_type() {
        assert!(matches!(
            Signature::parse("function baz(tuple)"),
            Err(DecodeError::UnsupportedType(_))
        ));
    }
}
