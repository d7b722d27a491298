//! Canonical type handle.
//!
//! Every type value lives in the [`Pool`](crate::Pool) and is referred to by
//! a 32-bit `Idx`. Because the pool interns structurally equal types into a
//! single entry, `Idx` equality is type equality.
//!
//! # Layout
//! - Bits 31-28: shard index (0-15)
//! - Bits 27-0: local index within the shard
//!
//! The nullary canonical instances are pre-interned in shard 0 at the fixed
//! indices below, so hot paths never touch a lock to obtain them.

use std::fmt;

/// A 32-bit handle to a canonical type instance.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Pre-interned canonical instances (shard 0) ===

    /// `mixed`: any value, including null.
    pub const MIXED: Self = Self(0);
    /// `non-null-mixed`: any value except null.
    pub const NON_NULL_MIXED: Self = Self(1);
    /// `non-empty-mixed`: any truthy value.
    pub const NON_EMPTY_MIXED: Self = Self(2);
    /// `?non-empty-mixed`: any truthy value, or null.
    pub const NULLABLE_NON_EMPTY_MIXED: Self = Self(3);
    /// `non-null-non-empty-mixed`: what `non-empty-mixed` narrows to once null is removed.
    pub const NON_NULL_NON_EMPTY_MIXED: Self = Self(4);
    /// `null`.
    pub const NULL: Self = Self(5);
    /// `never`: no values.
    pub const NEVER: Self = Self(6);
    /// `bool`.
    pub const BOOL: Self = Self(7);
    /// `true`.
    pub const TRUE: Self = Self(8);
    /// `false`.
    pub const FALSE: Self = Self(9);
    /// `int`.
    pub const INT: Self = Self(10);
    /// `non-zero-int`.
    pub const NON_ZERO_INT: Self = Self(11);
    /// `float`.
    pub const FLOAT: Self = Self(12);
    /// `string`.
    pub const STRING: Self = Self(13);
    /// `object`.
    pub const OBJECT: Self = Self(14);

    /// Number of pre-interned instances.
    pub const PRE_INTERNED_COUNT: u32 = 15;

    /// Maximum local index per shard (2^28 - 1).
    pub const MAX_LOCAL: u32 = 0x0FFF_FFFF;

    /// Number of interner shards.
    pub const NUM_SHARDS: usize = 16;

    /// Create from shard and local index.
    #[inline]
    pub const fn from_shard_local(shard: u32, local: u32) -> Self {
        debug_assert!(shard < 16);
        debug_assert!(local <= Self::MAX_LOCAL);
        Self((shard << 28) | local)
    }

    /// Extract the shard index (bits 31-28).
    #[inline]
    pub const fn shard(self) -> usize {
        (self.0 >> 28) as usize
    }

    /// Extract the local index within the shard (bits 27-0).
    #[inline]
    pub const fn local(self) -> usize {
        (self.0 & Self::MAX_LOCAL) as usize
    }

    /// Create an index from a raw u32 value.
    ///
    /// The caller must ensure the index came from the pool it is used with.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is one of the fixed pre-interned instances.
    #[inline]
    pub const fn is_pre_interned(self) -> bool {
        self.0 < Self::PRE_INTERNED_COUNT
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::MIXED => write!(f, "Idx::MIXED"),
            Self::NON_NULL_MIXED => write!(f, "Idx::NON_NULL_MIXED"),
            Self::NON_EMPTY_MIXED => write!(f, "Idx::NON_EMPTY_MIXED"),
            Self::NULLABLE_NON_EMPTY_MIXED => write!(f, "Idx::NULLABLE_NON_EMPTY_MIXED"),
            Self::NON_NULL_NON_EMPTY_MIXED => write!(f, "Idx::NON_NULL_NON_EMPTY_MIXED"),
            Self::NULL => write!(f, "Idx::NULL"),
            Self::NEVER => write!(f, "Idx::NEVER"),
            Self::BOOL => write!(f, "Idx::BOOL"),
            Self::TRUE => write!(f, "Idx::TRUE"),
            Self::FALSE => write!(f, "Idx::FALSE"),
            Self::INT => write!(f, "Idx::INT"),
            Self::NON_ZERO_INT => write!(f, "Idx::NON_ZERO_INT"),
            Self::FLOAT => write!(f, "Idx::FLOAT"),
            Self::STRING => write!(f, "Idx::STRING"),
            Self::OBJECT => write!(f, "Idx::OBJECT"),
            _ => write!(f, "Idx(shard={}, local={})", self.shard(), self.local()),
        }
    }
}

// Compile-time size assertion: Idx must be exactly 4 bytes
const _: () = assert!(std::mem::size_of::<Idx>() == 4);
