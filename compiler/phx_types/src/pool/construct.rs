//! Type construction helpers for the Pool.
//!
//! Provides ergonomic constructors for the parameterized kinds. Nullary
//! kinds are reached through the `Idx` constants or [`Pool::instance`].

use phx_ir::{is_qualified_name, Name};

use crate::{Idx, KeyKind, Kind, Pool, PoolError};

impl Pool {
    // === Array Constructors ===

    /// Create a possibly-empty array type with the given element and key types.
    pub fn array(&self, elem: Idx, key: KeyKind) -> Idx {
        self.instance(Kind::Array { elem, key }, false)
    }

    /// Create a non-empty array type with the given element and key types.
    pub fn non_empty_array(&self, elem: Idx, key: KeyKind) -> Idx {
        self.instance(Kind::NonEmptyArray { elem, key }, false)
    }

    /// Element type of an array kind, `None` for every other kind.
    pub fn array_elem(&self, idx: Idx) -> Option<Idx> {
        match self.kind(idx) {
            Kind::Array { elem, .. } | Kind::NonEmptyArray { elem, .. } => Some(elem),
            _ => None,
        }
    }

    /// Key type of an array kind, `None` for every other kind.
    pub fn array_key(&self, idx: Idx) -> Option<KeyKind> {
        match self.kind(idx) {
            Kind::Array { key, .. } | Kind::NonEmptyArray { key, .. } => Some(key),
            _ => None,
        }
    }

    // === Declared Types ===

    /// Create the (non-nullable) instance type of a declared class or interface.
    ///
    /// `name` must be a qualified name (`App\User`, `\Closure`), so the
    /// rendered type parses back.
    pub fn try_class(&self, name: &str) -> Result<Idx, PoolError> {
        if !is_qualified_name(name) {
            return Err(PoolError::InvalidClassName {
                name: name.to_owned(),
            });
        }
        let name = self.names().try_intern(name)?;
        Ok(self.class_named(name))
    }

    /// Create the instance type of a declared class or interface.
    ///
    /// # Panics
    /// Panics if `name` is not a qualified name. Use `try_class` for
    /// untrusted input.
    pub fn class(&self, name: &str) -> Idx {
        self.try_class(name).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Create a class type from an already interned name.
    pub fn class_named(&self, name: Name) -> Idx {
        self.instance(Kind::Class(name), false)
    }

    /// Name of a declared class type, `None` for every other kind.
    pub fn class_name(&self, idx: Idx) -> Option<Name> {
        match self.kind(idx) {
            Kind::Class(name) => Some(name),
            _ => None,
        }
    }
}
