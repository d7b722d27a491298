//! Pre-computed type metadata flags.
//!
//! `TypeFlags` are computed once when a type is interned and cached next to
//! its data, so truthiness queries are a single bit test.
//!
//! - **Value flags**: which values the type admits (null, truthy, falsey)
//! - **Family flags**: kind families the cast engine tests without a lookup

use bitflags::bitflags;

bitflags! {
    /// Pre-computed type properties for O(1) queries.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeFlags: u32 {
        // === Value Flags (bits 0-7) ===

        /// Admits null.
        const NULLABLE = 1 << 0;
        /// Admits at least one truthy value.
        const POSSIBLY_TRUTHY = 1 << 1;
        /// Admits at least one falsey value (null, false, 0, 0.0, "", "0", []).
        const POSSIBLY_FALSEY = 1 << 2;
        /// Admits the boolean `false` itself.
        const POSSIBLY_FALSE = 1 << 3;
        /// Admits truthy values only.
        const ALWAYS_TRUTHY = 1 << 4;

        // === Family Flags (bits 8-15) ===

        /// One of the `mixed` variants.
        const IS_MIXED = 1 << 8;
        /// Scalar (bool, int, float, string and their refinements).
        const IS_SCALAR = 1 << 9;
    }
}

impl TypeFlags {
    /// Check if the type admits null.
    #[inline]
    pub const fn is_nullable(self) -> bool {
        self.contains(Self::NULLABLE)
    }

    /// Check if the type admits a truthy value.
    #[inline]
    pub const fn is_possibly_truthy(self) -> bool {
        self.contains(Self::POSSIBLY_TRUTHY)
    }

    /// Check if the type admits a falsey value.
    #[inline]
    pub const fn is_possibly_falsey(self) -> bool {
        self.contains(Self::POSSIBLY_FALSEY)
    }

    /// Check if the type admits `false`.
    #[inline]
    pub const fn is_possibly_false(self) -> bool {
        self.contains(Self::POSSIBLY_FALSE)
    }

    /// Check if every value of the type is truthy.
    #[inline]
    pub const fn is_always_truthy(self) -> bool {
        self.contains(Self::ALWAYS_TRUTHY)
    }
}

impl Default for TypeFlags {
    fn default() -> Self {
        Self::empty()
    }
}
