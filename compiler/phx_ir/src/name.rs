//! Handles and syntax of class-like names.

use std::fmt;

/// Handle of an interned class, interface or trait name.
///
/// Produced by a [`NameTable`](crate::NameTable). Two spellings that differ
/// only in ASCII case, or by a leading `\`, get the same handle, matching
/// how the host language resolves class names.
///
/// Layout: shard index in bits 31-28, local index in bits 27-0.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Maximum local index per shard.
    pub(crate) const MAX_LOCAL: u32 = 0x0FFF_FFFF;

    pub(crate) const NUM_SHARDS: usize = 16;

    #[inline]
    pub(crate) const fn new(shard: u32, local: u32) -> Self {
        debug_assert!(shard < 16);
        debug_assert!(local <= Self::MAX_LOCAL);
        Name((shard << 28) | local)
    }

    #[inline]
    pub(crate) const fn shard(self) -> usize {
        (self.0 >> 28) as usize
    }

    #[inline]
    pub(crate) const fn local(self) -> usize {
        (self.0 & Self::MAX_LOCAL) as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({}:{})", self.shard(), self.local())
    }
}

/// Whether `c` may appear inside one segment of a qualified name.
#[inline]
pub fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether `name` is a qualified class name such as `App\Models\User`.
///
/// Segments are separated by single `\` and start with a letter or `_`.
/// One leading `\` (fully qualified form) is accepted.
pub fn is_qualified_name(name: &str) -> bool {
    let name = name.strip_prefix('\\').unwrap_or(name);
    !name.is_empty() && name.split('\\').all(is_segment)
}

fn is_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && chars.all(is_name_char)
}
