//! Lattice variants.
//!
//! `Kind` is the closed set of type shapes the analyzer knows about. Every
//! rule in the cast engine, the truthiness classifier and the specializer
//! matches on it exhaustively, so adding a variant is a compile error until
//! each of those rules has been written for it.
//!
//! # Kind Families
//!
//! - Mixed family: `mixed`, `non-null-mixed`, `non-empty-mixed`,
//!   `non-null-non-empty-mixed`
//! - Bottom and null: `never`, `null`
//! - Scalars: `bool`, `true`, `false`, `int`, `non-zero-int`, `float`, `string`
//! - Objects: `object`, declared classes
//! - Arrays: `array<…>`, `non-empty-array<…>`

use std::fmt;

use phx_ir::Name;

use crate::Idx;

/// Type variant discriminant, carrying the payload of parameterized kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Kind {
    /// Any value, including null.
    Mixed,
    /// Any value except null.
    NonNullMixed,
    /// Any truthy value; null only when the nullable flag is set.
    NonEmptyMixed,
    /// Any truthy value, never null.
    NonNullNonEmptyMixed,
    /// Only null.
    Null,
    /// No values (bottom).
    Never,
    /// `true` or `false`.
    Bool,
    /// The literal `true`.
    True,
    /// The literal `false`.
    False,
    /// Any integer.
    Int,
    /// Any integer except zero.
    NonZeroInt,
    /// Any float.
    Float,
    /// Any string.
    String,
    /// Any object.
    Object,
    /// An instance of a declared class or interface.
    Class(Name),
    /// An array, possibly empty.
    Array { elem: Idx, key: KeyKind },
    /// An array with at least one element.
    NonEmptyArray { elem: Idx, key: KeyKind },
}

impl Kind {
    /// The annotation keyword of a nullary kind.
    ///
    /// Returns `None` for classes and arrays, whose rendering depends on
    /// their payload.
    #[inline]
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Mixed => Some("mixed"),
            Self::NonNullMixed => Some("non-null-mixed"),
            Self::NonEmptyMixed => Some("non-empty-mixed"),
            Self::NonNullNonEmptyMixed => Some("non-null-non-empty-mixed"),
            Self::Null => Some("null"),
            Self::Never => Some("never"),
            Self::Bool => Some("bool"),
            Self::True => Some("true"),
            Self::False => Some("false"),
            Self::Int => Some("int"),
            Self::NonZeroInt => Some("non-zero-int"),
            Self::Float => Some("float"),
            Self::String => Some("string"),
            Self::Object => Some("object"),
            Self::Class(_) | Self::Array { .. } | Self::NonEmptyArray { .. } => None,
        }
    }

    /// Resolve a nullary kind from its annotation keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let kind = match keyword {
            "mixed" => Self::Mixed,
            "non-null-mixed" => Self::NonNullMixed,
            "non-empty-mixed" => Self::NonEmptyMixed,
            "non-null-non-empty-mixed" => Self::NonNullNonEmptyMixed,
            "null" => Self::Null,
            "never" => Self::Never,
            "bool" => Self::Bool,
            "true" => Self::True,
            "false" => Self::False,
            "int" => Self::Int,
            "non-zero-int" => Self::NonZeroInt,
            "float" => Self::Float,
            "string" => Self::String,
            "object" => Self::Object,
            _ => return None,
        };
        Some(kind)
    }

    /// Short name of the variant for logs and debug output.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self.keyword() {
            Some(keyword) => keyword,
            None => match self {
                Self::Class(_) => "class",
                Self::NonEmptyArray { .. } => "non-empty-array",
                _ => "array",
            },
        }
    }

    /// Nullability fixed by the kind itself, independent of the flag.
    ///
    /// `mixed` and `null` always admit null; `never` and the `non-null-*`
    /// kinds never do. Such kinds have a single canonical instance.
    #[inline]
    pub const fn inherent_nullability(self) -> Option<bool> {
        match self {
            Self::Mixed | Self::Null => Some(true),
            Self::Never | Self::NonNullMixed | Self::NonNullNonEmptyMixed => Some(false),
            _ => None,
        }
    }

    /// Check if this is one of the four `mixed` variants.
    #[inline]
    pub const fn is_mixed_family(self) -> bool {
        matches!(
            self,
            Self::Mixed | Self::NonNullMixed | Self::NonEmptyMixed | Self::NonNullNonEmptyMixed
        )
    }

    /// Check if this is a scalar kind.
    #[inline]
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::True
                | Self::False
                | Self::Int
                | Self::NonZeroInt
                | Self::Float
                | Self::String
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Key type of an array.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyKind {
    /// No key is known (array literal `[]`).
    Empty,
    /// Integer keys only (lists).
    Int,
    /// String keys only.
    String,
    /// Integer or string keys.
    Mixed,
}

impl KeyKind {
    /// Check if an array keyed by `source` may flow where `self` keys are required.
    #[inline]
    pub const fn accepts(self, source: KeyKind) -> bool {
        match (self, source) {
            (Self::Mixed, _) | (_, Self::Empty) => true,
            (Self::Int, Self::Int) | (Self::String, Self::String) => true,
            _ => false,
        }
    }

    /// Keyword used in the first argument of `array<key, value>`.
    ///
    /// `None` when the key is rendered implicitly (`array<value>`).
    #[inline]
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Int => Some("int"),
            Self::String => Some("string"),
            Self::Empty | Self::Mixed => None,
        }
    }
}

/// Interning key of a type: its kind plus the nullable flag.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeData {
    pub kind: Kind,
    pub nullable: bool,
}

impl TypeData {
    /// Build the canonical data for `kind` with the requested nullability.
    ///
    /// Kinds with inherent nullability ignore the request and always store
    /// `false`, so there is exactly one entry per such kind.
    #[inline]
    pub const fn new(kind: Kind, nullable: bool) -> Self {
        let nullable = match kind.inherent_nullability() {
            Some(_) => false,
            None => nullable,
        };
        Self { kind, nullable }
    }

    /// Whether values of this type may be null.
    #[inline]
    pub const fn admits_null(self) -> bool {
        match self.kind.inherent_nullability() {
            Some(inherent) => inherent,
            None => self.nullable,
        }
    }
}
