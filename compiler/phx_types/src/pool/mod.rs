//! Sharded type pool.
//!
//! The pool is the canonicalization registry of the lattice: every type value
//! is interned here exactly once and handed out as an [`Idx`]. Lookups take
//! a read lock on one shard; inserts take the write lock and re-check, so two
//! threads racing to create the same type both receive the same `Idx`.
//!
//! The nullary canonical instances are pre-interned at fixed indices in
//! shard 0 (see [`Idx::MIXED`] and friends).

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use parking_lot::RwLock;
use phx_ir::{InternError, Name, SharedNameTable};
use rustc_hash::{FxHashMap, FxHasher};

use crate::{truthiness, Idx, Kind, TypeData, TypeFlags};

mod construct;
mod format;

/// Error when interning a type fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Shard exceeded the 28-bit local index space.
    #[error("type pool shard {shard_idx} exceeded capacity")]
    ShardOverflow { shard_idx: usize },
    /// A class type was requested for a string that is not a qualified name.
    #[error("`{name}` is not a valid class name")]
    InvalidClassName { name: String },
    /// The name table is full.
    #[error(transparent)]
    Names(#[from] InternError),
}

/// Canonical instances pre-interned in shard 0, in `Idx` order.
const PRE_INTERNED: [TypeData; Idx::PRE_INTERNED_COUNT as usize] = [
    TypeData::new(Kind::Mixed, false), // MIXED
    TypeData::new(Kind::NonNullMixed, false), // NON_NULL_MIXED
    TypeData::new(Kind::NonEmptyMixed, false), // NON_EMPTY_MIXED
    TypeData::new(Kind::NonEmptyMixed, true), // NULLABLE_NON_EMPTY_MIXED
    TypeData::new(Kind::NonNullNonEmptyMixed, false), // NON_NULL_NON_EMPTY_MIXED
    TypeData::new(Kind::Null, false), // NULL
    TypeData::new(Kind::Never, false), // NEVER
    TypeData::new(Kind::Bool, false), // BOOL
    TypeData::new(Kind::True, false), // TRUE
    TypeData::new(Kind::False, false), // FALSE
    TypeData::new(Kind::Int, false), // INT
    TypeData::new(Kind::NonZeroInt, false), // NON_ZERO_INT
    TypeData::new(Kind::Float, false), // FLOAT
    TypeData::new(Kind::String, false), // STRING
    TypeData::new(Kind::Object, false), // OBJECT
];

/// A stored type: its data and the flags computed when it was interned.
#[derive(Copy, Clone, Debug)]
struct Entry {
    data: TypeData,
    flags: TypeFlags,
}

/// Per-shard storage for interned types.
struct PoolShard {
    /// Map from type data to local index for deduplication.
    map: FxHashMap<TypeData, u32>,
    /// Storage for entries, indexed by local index.
    entries: Vec<Entry>,
}

impl PoolShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            entries: Vec::with_capacity(64),
        }
    }

    /// Create shard 0 with the canonical nullary instances.
    fn with_pre_interned() -> Self {
        let mut shard = Self::new();
        for (local, data) in (0u32..).zip(PRE_INTERNED) {
            shard.map.insert(data, local);
            shard.entries.push(Entry {
                data,
                flags: truthiness::classify(data),
            });
        }
        shard
    }
}

/// Sharded, thread-safe type pool.
///
/// # Thread Safety
/// Uses `RwLock` per shard. Share across threads with [`SharedPool`].
pub struct Pool {
    shards: [RwLock<PoolShard>; Idx::NUM_SHARDS],
    /// Class and interface names referenced by `Kind::Class`.
    names: SharedNameTable,
}

impl Pool {
    /// Create a pool with its own name table.
    pub fn new() -> Self {
        Self::with_names(SharedNameTable::new())
    }

    /// Create a pool that shares `names` with the embedder's symbol table.
    pub fn with_names(names: SharedNameTable) -> Self {
        let shards = std::array::from_fn(|i| {
            if i == 0 {
                RwLock::new(PoolShard::with_pre_interned())
            } else {
                RwLock::new(PoolShard::new())
            }
        });
        Self { shards, names }
    }

    #[inline]
    fn pre_interned(data: TypeData) -> Option<Idx> {
        PRE_INTERNED
            .iter()
            .position(|&pre| pre == data)
            .and_then(|local| u32::try_from(local).ok())
            .map(Idx::from_raw)
    }

    /// Compute shard index for a type based on its hash.
    #[inline]
    fn shard_for(data: &TypeData) -> usize {
        let mut hasher = FxHasher::default();
        data.hash(&mut hasher);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "truncation is fine for hash-based shard selection"
        )]
        let hash = hasher.finish() as usize;
        hash % Idx::NUM_SHARDS
    }

    /// Try to intern a type, returning its canonical `Idx` or an error on overflow.
    ///
    /// `data` should come from [`TypeData::new`] so kinds with inherent
    /// nullability are already collapsed to their single instance.
    pub fn try_intern(&self, data: TypeData) -> Result<Idx, PoolError> {
        let data = TypeData::new(data.kind, data.nullable);
        if let Some(idx) = Self::pre_interned(data) {
            return Ok(idx);
        }

        let shard_idx = Self::shard_for(&data);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "shard_idx is bounded by NUM_SHARDS (16)"
        )]
        let shard_idx_u32 = shard_idx as u32;
        let shard = &self.shards[shard_idx];

        // Fast path: already interned
        {
            let guard = shard.read();
            if let Some(&local) = guard.map.get(&data) {
                return Ok(Idx::from_shard_local(shard_idx_u32, local));
            }
        }

        let mut guard = shard.write();

        // Double-check after acquiring write lock
        if let Some(&local) = guard.map.get(&data) {
            return Ok(Idx::from_shard_local(shard_idx_u32, local));
        }

        let local = u32::try_from(guard.entries.len())
            .ok()
            .filter(|&local| local <= Idx::MAX_LOCAL)
            .ok_or(PoolError::ShardOverflow { shard_idx })?;

        guard.entries.push(Entry {
            data,
            flags: truthiness::classify(data),
        });
        guard.map.insert(data, local);

        let idx = Idx::from_shard_local(shard_idx_u32, local);
        tracing::trace!(kind = %data.kind, nullable = data.nullable, ?idx, "interned type");
        Ok(idx)
    }

    /// Intern a type, returning its canonical `Idx`.
    ///
    /// # Panics
    /// Panics if a shard exceeds capacity. Use `try_intern` for fallible interning.
    pub fn intern(&self, data: TypeData) -> Idx {
        self.try_intern(data).unwrap_or_else(|e| panic!("{}", e))
    }

    /// The canonical instance of `kind` with the given nullability.
    pub fn instance(&self, kind: Kind, nullable: bool) -> Idx {
        self.intern(TypeData::new(kind, nullable))
    }

    #[inline]
    fn entry(&self, idx: Idx) -> Entry {
        let guard = self.shards[idx.shard()].read();
        guard.entries[idx.local()]
    }

    /// Look up the data of an interned type.
    ///
    /// # Panics
    /// Panics if `idx` was not created by this pool.
    pub fn data(&self, idx: Idx) -> TypeData {
        self.entry(idx).data
    }

    /// Get the kind of an interned type.
    #[inline]
    pub fn kind(&self, idx: Idx) -> Kind {
        self.data(idx).kind
    }

    /// Get the flags computed when the type was interned.
    #[inline]
    pub fn flags(&self, idx: Idx) -> TypeFlags {
        self.entry(idx).flags
    }

    /// Whether values of the type may be null.
    ///
    /// True for `mixed` and `null` regardless of the stored flag.
    #[inline]
    pub fn is_nullable(&self, idx: Idx) -> bool {
        self.flags(idx).is_nullable()
    }

    /// The name table used by declared class types.
    pub fn names(&self) -> &SharedNameTable {
        &self.names
    }

    /// Intern a class or interface name.
    ///
    /// `\Foo`, `Foo` and `foo` name the same class.
    pub fn intern_name(&self, name: &str) -> Name {
        self.names.intern(name)
    }

    /// Get the number of interned types.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.read().entries.len()).sum()
    }

    /// Check if the pool holds only the pre-interned instances.
    pub fn is_empty(&self) -> bool {
        self.len() <= Idx::PRE_INTERNED_COUNT as usize
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pool").field("len", &self.len()).finish()
    }
}

/// Shared pool handle for analysis phases running on several threads.
#[derive(Clone, Debug, Default)]
pub struct SharedPool(Arc<Pool>);

impl SharedPool {
    /// Create a new shared pool.
    pub fn new() -> Self {
        SharedPool(Arc::new(Pool::new()))
    }

    /// Create a shared pool over an existing name table.
    pub fn with_names(names: SharedNameTable) -> Self {
        SharedPool(Arc::new(Pool::with_names(names)))
    }
}

impl std::ops::Deref for SharedPool {
    type Target = Pool;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
