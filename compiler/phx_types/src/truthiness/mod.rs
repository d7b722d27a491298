//! Truthiness classification.
//!
//! Models the host language's implicit boolean coercion at the type level.
//! The falsey values are `null`, `false`, `0`, `0.0`, `""`, `"0"` and the
//! empty array; everything else is truthy.
//!
//! The four answers are computed by [`classify`] once per type, at interning
//! time, and read back from [`TypeFlags`] afterwards. They always satisfy:
//! - `is_always_truthy` implies `!is_possibly_falsey`
//! - `is_possibly_false` implies `is_possibly_falsey`

use crate::{Idx, Kind, Pool, TypeData, TypeFlags};

/// Compute the value and family flags of a type.
pub(crate) fn classify(data: TypeData) -> TypeFlags {
    let nullable = data.admits_null();

    let possibly_truthy = !matches!(data.kind, Kind::Null | Kind::False | Kind::Never);

    let kind_admits_falsey = match data.kind {
        Kind::Mixed
        | Kind::NonNullMixed
        | Kind::Null
        | Kind::Bool
        | Kind::False
        | Kind::Int
        | Kind::Float
        | Kind::String
        | Kind::Array { .. } => true,
        Kind::NonEmptyMixed
        | Kind::NonNullNonEmptyMixed
        | Kind::Never
        | Kind::True
        | Kind::NonZeroInt
        | Kind::Object
        | Kind::Class(_)
        | Kind::NonEmptyArray { .. } => false,
    };
    let possibly_falsey = nullable || kind_admits_falsey;

    let possibly_false = matches!(
        data.kind,
        Kind::Mixed | Kind::NonNullMixed | Kind::Bool | Kind::False
    );

    let mut flags = TypeFlags::empty();
    flags.set(TypeFlags::NULLABLE, nullable);
    flags.set(TypeFlags::POSSIBLY_TRUTHY, possibly_truthy);
    flags.set(TypeFlags::POSSIBLY_FALSEY, possibly_falsey);
    flags.set(TypeFlags::POSSIBLY_FALSE, possibly_false);
    flags.set(TypeFlags::ALWAYS_TRUTHY, possibly_truthy && !possibly_falsey);

    flags.set(TypeFlags::IS_MIXED, data.kind.is_mixed_family());
    flags.set(TypeFlags::IS_SCALAR, data.kind.is_scalar());
    flags
}

impl Pool {
    /// Whether the type can hold a truthy value.
    ///
    /// False only for `null`, `false` and `never`.
    #[inline]
    pub fn is_possibly_truthy(&self, idx: Idx) -> bool {
        self.flags(idx).is_possibly_truthy()
    }

    /// Whether the type can hold a falsey value.
    ///
    /// For `non-empty-mixed` this is exactly its nullability: null is the
    /// only falsey value it admits.
    #[inline]
    pub fn is_possibly_falsey(&self, idx: Idx) -> bool {
        self.flags(idx).is_possibly_falsey()
    }

    /// Whether the type can hold the boolean `false`.
    #[inline]
    pub fn is_possibly_false(&self, idx: Idx) -> bool {
        self.flags(idx).is_possibly_false()
    }

    /// Whether every value of the type is truthy.
    #[inline]
    pub fn is_always_truthy(&self, idx: Idx) -> bool {
        self.flags(idx).is_always_truthy()
    }
}
