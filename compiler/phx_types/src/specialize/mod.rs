//! Specialization transforms.
//!
//! Each operation maps a type to a related, more or less specific type. None
//! of them mutate anything; they return the canonical `Idx` of the result,
//! which may be the receiver itself.

use crate::{Idx, KeyKind, Kind, Pool};

impl Pool {
    /// The same type with null added or removed.
    ///
    /// Removing null from a `mixed` variant is not a flag flip: it moves to
    /// the dedicated non-null sibling kind.
    pub fn with_is_nullable(&self, idx: Idx, is_nullable: bool) -> Idx {
        let data = self.data(idx);
        match data.kind {
            Kind::NonEmptyMixed => {
                if !is_nullable {
                    Idx::NON_NULL_NON_EMPTY_MIXED
                } else if data.nullable {
                    idx
                } else {
                    Idx::NULLABLE_NON_EMPTY_MIXED
                }
            }
            Kind::NonNullNonEmptyMixed => {
                if is_nullable {
                    Idx::NULLABLE_NON_EMPTY_MIXED
                } else {
                    idx
                }
            }
            Kind::Mixed => {
                if is_nullable {
                    idx
                } else {
                    Idx::NON_NULL_MIXED
                }
            }
            Kind::NonNullMixed => {
                if is_nullable {
                    Idx::MIXED
                } else {
                    idx
                }
            }
            Kind::Null => {
                if is_nullable {
                    idx
                } else {
                    Idx::NEVER
                }
            }
            Kind::Never => {
                if is_nullable {
                    Idx::NULL
                } else {
                    idx
                }
            }
            Kind::Bool
            | Kind::True
            | Kind::False
            | Kind::Int
            | Kind::NonZeroInt
            | Kind::Float
            | Kind::String
            | Kind::Object
            | Kind::Class(_)
            | Kind::Array { .. }
            | Kind::NonEmptyArray { .. } => {
                if data.nullable == is_nullable {
                    idx
                } else {
                    self.instance(data.kind, is_nullable)
                }
            }
        }
    }

    /// The type a value becomes once it is known to be an object.
    ///
    /// `None` when no value of the type can be an object.
    pub fn as_object_type(&self, idx: Idx) -> Option<Idx> {
        match self.kind(idx) {
            Kind::Mixed | Kind::NonNullMixed | Kind::NonEmptyMixed | Kind::NonNullNonEmptyMixed => {
                Some(Idx::OBJECT)
            }
            Kind::Object | Kind::Class(_) => Some(self.with_is_nullable(idx, false)),
            Kind::Null
            | Kind::Never
            | Kind::Bool
            | Kind::True
            | Kind::False
            | Kind::Int
            | Kind::NonZeroInt
            | Kind::Float
            | Kind::String
            | Kind::Array { .. }
            | Kind::NonEmptyArray { .. } => None,
        }
    }

    /// The type a value becomes once it is known to be an array.
    ///
    /// Non-emptiness carries over: a truthy value that is an array has at
    /// least one element. `None` when no value of the type can be an array.
    pub fn as_array_type(&self, idx: Idx) -> Option<Idx> {
        match self.kind(idx) {
            Kind::Mixed | Kind::NonNullMixed => Some(self.array(Idx::MIXED, KeyKind::Mixed)),
            Kind::NonEmptyMixed | Kind::NonNullNonEmptyMixed => {
                Some(self.non_empty_array(Idx::MIXED, KeyKind::Mixed))
            }
            Kind::Array { .. } | Kind::NonEmptyArray { .. } => {
                Some(self.with_is_nullable(idx, false))
            }
            Kind::Null
            | Kind::Never
            | Kind::Bool
            | Kind::True
            | Kind::False
            | Kind::Int
            | Kind::NonZeroInt
            | Kind::Float
            | Kind::String
            | Kind::Object
            | Kind::Class(_) => None,
        }
    }

    /// An array keyed by `key` whose elements are this type.
    pub fn as_generic_array_type(&self, idx: Idx, key: KeyKind) -> Idx {
        self.array(idx, key)
    }

    /// The type restricted to its truthy values.
    ///
    /// Idempotent. Types without truthy values become `never`.
    pub fn as_non_falsey_type(&self, idx: Idx) -> Idx {
        let data = self.data(idx);
        match data.kind {
            Kind::NonEmptyMixed => {
                if data.nullable {
                    self.with_is_nullable(idx, false)
                } else {
                    idx
                }
            }
            Kind::Mixed | Kind::NonNullMixed => Idx::NON_EMPTY_MIXED,
            Kind::Null | Kind::False | Kind::Never => Idx::NEVER,
            Kind::Bool => Idx::TRUE,
            Kind::Int => Idx::NON_ZERO_INT,
            Kind::Array { elem, key } => self.non_empty_array(elem, key),
            Kind::NonNullNonEmptyMixed
            | Kind::True
            | Kind::NonZeroInt
            | Kind::Float
            | Kind::String
            | Kind::Object
            | Kind::Class(_)
            | Kind::NonEmptyArray { .. } => self.with_is_nullable(idx, false),
        }
    }
}
