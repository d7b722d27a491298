//! Type lattice core for the phx static analyzer.
//!
//! Types are interned in a [`Pool`] and handled as [`Idx`] values. Each type
//! is a [`Kind`] plus a nullable flag. On top of the pool this crate
//! provides:
//! - truthiness queries (`is_possibly_truthy` and friends on [`Pool`])
//! - specialization (`with_is_nullable`, `as_non_falsey_type`, ...)
//! - cast compatibility through [`Caster`], configured by [`CastConfig`]
//! - rendering ([`Pool::format_type`]) and its inverse [`parse_type`]
//!
//! # The `non-empty-mixed` Family
//!
//! `non-empty-mixed` is any truthy value. Its cast relation is decided by
//! truthiness alone, so it never consults configuration or the codebase.
//! Removing null from it yields the distinct `non-null-non-empty-mixed`
//! kind, keeping `?non-empty-mixed` and `non-empty-mixed` as two instances
//! of one kind.

mod cast;
mod declared;
mod flags;
mod idx;
mod kind;
mod parse;
mod pool;
mod specialize;
mod stack;
mod truthiness;

pub use cast::{CastConfig, Caster};
pub use declared::{ClassHierarchy, DeclaredTypeResolver, NoDeclarations};
pub use flags::TypeFlags;
pub use idx::Idx;
pub use kind::{KeyKind, Kind, TypeData};
pub use parse::{parse_type, ParseError};
pub use pool::{Pool, PoolError, SharedPool};

