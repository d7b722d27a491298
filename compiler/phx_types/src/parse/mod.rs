//! Annotation parser.
//!
//! Reads back the strings produced by [`Pool::format_type`]:
//!
//! ```text
//! type   := '?'? atom
//! atom   := keyword | '\' qualified | array
//! array  := ('array' | 'non-empty-array') ('<' [key ','] type '>')?
//! key    := 'int' | 'string'
//! ```
//!
//! Whitespace is allowed between tokens. A bare `array` means `array<mixed>`.
//! An array written without a key gets [`KeyKind::Mixed`].

mod error;

pub use error::ParseError;

use phx_ir::{is_name_char, is_qualified_name};

use crate::stack::ensure_sufficient_stack;
use crate::{Idx, KeyKind, Kind, Pool};

/// Parse an annotation string into an interned type.
///
/// # Errors
/// Returns a [`ParseError`] with the byte offset of the first problem.
#[tracing::instrument(level = "trace", skip(pool), ret)]
pub fn parse_type(pool: &Pool, text: &str) -> Result<Idx, ParseError> {
    let mut parser = Parser {
        pool,
        text,
        pos: 0,
    };
    let idx = parser.parse_type()?;
    parser.skip_whitespace();
    if parser.pos < text.len() {
        return Err(ParseError::TrailingInput { offset: parser.pos });
    }
    Ok(idx)
}

struct Parser<'a> {
    pool: &'a Pool,
    text: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    #[inline]
    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    #[inline]
    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.bump(c);
        }
    }

    /// Consume `expected` after optional whitespace, or report what was found.
    fn expect(&mut self, expected: char, what: &'static str) -> Result<(), ParseError> {
        self.skip_whitespace();
        match self.peek() {
            Some(c) if c == expected => {
                self.bump(c);
                Ok(())
            }
            Some(found) => Err(ParseError::Unexpected {
                found,
                expected: what,
                offset: self.pos,
            }),
            None => Err(ParseError::UnexpectedEnd {
                expected: what,
                offset: self.pos,
            }),
        }
    }

    /// Consume a run of characters matching `accept`, returning the slice.
    fn take_while(&mut self, accept: impl Fn(char) -> bool) -> &'a str {
        let text = self.text;
        let start = self.pos;
        while let Some(c) = self.peek().filter(|&c| accept(c)) {
            self.bump(c);
        }
        &text[start..self.pos]
    }

    fn parse_type(&mut self) -> Result<Idx, ParseError> {
        self.skip_whitespace();
        let nullable = match self.peek() {
            Some('?') => {
                self.bump('?');
                self.skip_whitespace();
                true
            }
            _ => false,
        };

        let idx = ensure_sufficient_stack(|| self.parse_atom())?;
        if nullable {
            Ok(self.pool.with_is_nullable(idx, true))
        } else {
            Ok(idx)
        }
    }

    fn parse_atom(&mut self) -> Result<Idx, ParseError> {
        let start = self.pos;
        match self.peek() {
            Some('\\') => {
                self.bump('\\');
                self.parse_class(start)
            }
            Some(c) if is_word_char(c) => {
                let word = self.take_while(is_word_char);
                match word {
                    "array" => self.parse_array(false),
                    "non-empty-array" => self.parse_array(true),
                    _ => match Kind::from_keyword(word) {
                        Some(kind) => Ok(self.pool.instance(kind, false)),
                        None => Err(ParseError::UnknownType {
                            word: word.to_owned(),
                            offset: start,
                        }),
                    },
                }
            }
            Some(found) => Err(ParseError::Unexpected {
                found,
                expected: "a type",
                offset: start,
            }),
            None => Err(ParseError::UnexpectedEnd {
                expected: "a type",
                offset: start,
            }),
        }
    }

    fn parse_class(&mut self, start: usize) -> Result<Idx, ParseError> {
        let name = self.take_while(|c| is_name_char(c) || c == '\\');
        if name.is_empty() {
            return Err(match self.peek() {
                Some(found) => ParseError::Unexpected {
                    found,
                    expected: "a class name",
                    offset: self.pos,
                },
                None => ParseError::UnexpectedEnd {
                    expected: "a class name",
                    offset: self.pos,
                },
            });
        }
        if !is_qualified_name(name) {
            return Err(ParseError::UnknownType {
                word: self.text[start..self.pos].to_owned(),
                offset: start,
            });
        }
        Ok(self.pool.class(name))
    }

    fn parse_array(&mut self, non_empty: bool) -> Result<Idx, ParseError> {
        let save = self.pos;
        self.skip_whitespace();
        if self.peek() != Some('<') {
            self.pos = save;
            return Ok(self.build_array(non_empty, Idx::MIXED, KeyKind::Mixed));
        }
        self.bump('<');

        self.skip_whitespace();
        let first_start = self.pos;
        let first = self.parse_type()?;
        let first_end = self.pos;

        self.skip_whitespace();
        if self.peek() != Some(',') {
            self.expect('>', "`,` or `>`")?;
            return Ok(self.build_array(non_empty, first, KeyKind::Mixed));
        }
        self.bump(',');

        let key = match first {
            Idx::INT => KeyKind::Int,
            Idx::STRING => KeyKind::String,
            _ => {
                return Err(ParseError::InvalidKey {
                    key: self.text[first_start..first_end].to_owned(),
                    offset: first_start,
                })
            }
        };
        let elem = self.parse_type()?;
        self.expect('>', "`>`")?;
        Ok(self.build_array(non_empty, elem, key))
    }

    fn build_array(&self, non_empty: bool, elem: Idx, key: KeyKind) -> Idx {
        if non_empty {
            self.pool.non_empty_array(elem, key)
        } else {
            self.pool.array(elem, key)
        }
    }
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
