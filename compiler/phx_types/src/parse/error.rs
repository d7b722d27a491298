//! Annotation parse errors.

/// Error produced when an annotation string is not a valid type.
///
/// Every variant carries the byte offset into the input where parsing
/// stopped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input ended where a type or delimiter was required.
    #[error("unexpected end of input at offset {offset}, expected {expected}")]
    UnexpectedEnd {
        expected: &'static str,
        offset: usize,
    },
    /// A character that cannot start or continue the current construct.
    #[error("unexpected `{found}` at offset {offset}, expected {expected}")]
    Unexpected {
        found: char,
        expected: &'static str,
        offset: usize,
    },
    /// A bare word that is not a type keyword.
    #[error("unknown type `{word}` at offset {offset}")]
    UnknownType { word: String, offset: usize },
    /// The first argument of a two-argument array is not `int` or `string`.
    #[error("invalid array key type `{key}` at offset {offset}")]
    InvalidKey { key: String, offset: usize },
    /// A complete type was followed by more input.
    #[error("trailing input at offset {offset}")]
    TrailingInput { offset: usize },
}

impl ParseError {
    /// Byte offset of the error in the parsed text.
    pub fn offset(&self) -> usize {
        match self {
            Self::UnexpectedEnd { offset, .. }
            | Self::Unexpected { offset, .. }
            | Self::UnknownType { offset, .. }
            | Self::InvalidKey { offset, .. }
            | Self::TrailingInput { offset } => *offset,
        }
    }
}
