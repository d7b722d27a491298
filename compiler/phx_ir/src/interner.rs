//! Case-insensitive table of class-like names.
//!
//! The host language resolves class, interface and trait names without
//! regard to ASCII case, so `App\User`, `app\USER` and `\App\User` intern to
//! one [`Name`]. The table keeps the spelling it saw first and renders that.
//!
//! Sharded like the type pool: a read lock for hits, a write lock with a
//! re-check for inserts.

use std::borrow::Cow;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHasher};

use crate::Name;

/// Error when interning a name fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    /// Shard exceeded the 28-bit local index space.
    #[error("name table shard {shard_idx} is full")]
    ShardOverflow { shard_idx: usize },
}

/// Names owned by one shard.
#[derive(Default)]
struct NameShard {
    /// Folded name to local index.
    by_folded: FxHashMap<Box<str>, u32>,
    /// First-seen spelling, indexed by local index.
    spellings: Vec<&'static str>,
}

/// Comparison key of a name: no leading `\`, ASCII lowercased.
fn fold(name: &str) -> Cow<'_, str> {
    let name = name.strip_prefix('\\').unwrap_or(name);
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

/// Thread-safe, case-insensitive name table.
pub struct NameTable {
    shards: [RwLock<NameShard>; Name::NUM_SHARDS],
}

impl NameTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            shards: std::array::from_fn(|_| RwLock::new(NameShard::default())),
        }
    }

    #[inline]
    fn shard_for(folded: &str) -> usize {
        let mut hasher = FxHasher::default();
        folded.hash(&mut hasher);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "truncation is fine for hash-based shard selection"
        )]
        let hash = hasher.finish() as usize;
        hash % Name::NUM_SHARDS
    }

    /// Intern `name`, returning the handle shared by all its spellings.
    pub fn try_intern(&self, name: &str) -> Result<Name, InternError> {
        let folded = fold(name);
        let shard_idx = Self::shard_for(&folded);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "shard_idx is bounded by NUM_SHARDS (16)"
        )]
        let shard_idx_u32 = shard_idx as u32;
        let shard = &self.shards[shard_idx];

        {
            let guard = shard.read();
            if let Some(&local) = guard.by_folded.get(folded.as_ref()) {
                return Ok(Name::new(shard_idx_u32, local));
            }
        }

        let mut guard = shard.write();
        if let Some(&local) = guard.by_folded.get(folded.as_ref()) {
            return Ok(Name::new(shard_idx_u32, local));
        }

        let local = u32::try_from(guard.spellings.len())
            .ok()
            .filter(|&local| local <= Name::MAX_LOCAL)
            .ok_or(InternError::ShardOverflow { shard_idx })?;

        // Names live as long as the analysis run.
        let spelling: &'static str = Box::leak(Box::from(name.strip_prefix('\\').unwrap_or(name)));
        guard.spellings.push(spelling);
        guard.by_folded.insert(folded.into_owned().into_boxed_str(), local);
        Ok(Name::new(shard_idx_u32, local))
    }

    /// Intern `name`.
    ///
    /// # Panics
    /// Panics if a shard exceeds capacity. Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, name: &str) -> Name {
        self.try_intern(name).unwrap_or_else(|e| panic!("{}", e))
    }

    /// The first-seen spelling of `name`, without a leading `\`.
    ///
    /// # Panics
    /// Panics if `name` was not produced by this table.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.shards[name.shard()].read().spellings[name.local()]
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.read().spellings.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for NameTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Name table shared by the type pool and the embedder's symbol table.
///
/// Clones hand out the same storage, so a name interned through either side
/// compares equal.
#[derive(Clone, Default)]
pub struct SharedNameTable(Arc<NameTable>);

impl SharedNameTable {
    pub fn new() -> Self {
        SharedNameTable(Arc::new(NameTable::new()))
    }
}

impl std::fmt::Debug for SharedNameTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedNameTable")
            .field("len", &self.0.len())
            .finish()
    }
}

impl std::ops::Deref for SharedNameTable {
    type Target = NameTable;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
