//! Cast compatibility: the subtyping relation of the lattice.
//!
//! [`Caster`] answers "may a value of type `source` flow where `target` is
//! required?". Dispatch is on the source kind first:
//!
//! - The `mixed` variants define their whole relation themselves. For
//!   `non-empty-mixed` it is a pure truthiness question, and it does not
//!   depend on configuration.
//! - Every other kind goes through the shared protocol: nullability is
//!   checked first, then [`Caster::can_cast_to_non_nullable_type`] decides
//!   the structural part.
//!
//! The `*_without_config` entry points ignore [`CastConfig`] and apply the
//! strict rules. Only [`Caster::can_cast_to_declared_type`] consults the
//! codebase, for class-to-class casts.

mod config;

pub use config::CastConfig;

use phx_ir::Name;

use crate::stack::ensure_sufficient_stack;
use crate::{DeclaredTypeResolver, Idx, Kind, Pool, TypeFlags};

/// Rule set of a single query.
#[derive(Copy, Clone)]
struct Rules<'r> {
    /// `None` in without-config mode.
    config: Option<CastConfig>,
    /// Present only for declared-type queries.
    resolver: Option<&'r dyn DeclaredTypeResolver>,
}

/// Strict rules with no codebase access.
const WITHOUT_CONFIG: Rules<'static> = Rules {
    config: None,
    resolver: None,
};

impl Rules<'_> {
    #[inline]
    fn null_casts_as_any_type(self) -> bool {
        self.config.is_some_and(|c| c.null_casts_as_any_type)
    }

    #[inline]
    fn scalar_implicit_cast(self) -> bool {
        self.config.is_some_and(|c| c.scalar_implicit_cast)
    }
}

/// Cast-compatibility queries over one pool.
#[derive(Copy, Clone, Debug)]
pub struct Caster<'pool> {
    pool: &'pool Pool,
    config: CastConfig,
}

impl<'pool> Caster<'pool> {
    /// Create a caster applying `config` in configured mode.
    pub fn new(pool: &'pool Pool, config: CastConfig) -> Self {
        Self { pool, config }
    }

    /// Create a caster with the strict configuration.
    pub fn strict(pool: &'pool Pool) -> Self {
        Self::new(pool, CastConfig::STRICT)
    }

    /// The pool the queried types live in.
    pub fn pool(&self) -> &'pool Pool {
        self.pool
    }

    /// The configuration applied in configured mode.
    pub fn config(&self) -> CastConfig {
        self.config
    }

    #[inline]
    fn configured(&self) -> Rules<'static> {
        Rules {
            config: Some(self.config),
            resolver: None,
        }
    }

    /// Whether `source` may flow into `target` under the configured rules.
    #[tracing::instrument(level = "trace", skip(self), ret)]
    pub fn can_cast_to_type(&self, source: Idx, target: Idx) -> bool {
        self.cast(source, target, self.configured())
    }

    /// Whether `source` may flow into `target` under the strict rules.
    #[tracing::instrument(level = "trace", skip(self), ret)]
    pub fn can_cast_to_type_without_config(&self, source: Idx, target: Idx) -> bool {
        self.cast(source, target, WITHOUT_CONFIG)
    }

    /// Whether `source` may flow into at least one of `targets`.
    ///
    /// An empty target set is accepted and yields `false`.
    #[tracing::instrument(level = "trace", skip(self), ret)]
    pub fn can_cast_to_any_type_in_set(&self, source: Idx, targets: &[Idx]) -> bool {
        let rules = self.configured();
        targets.iter().any(|&target| self.cast(source, target, rules))
    }

    /// The structural part of a cast, once the caller has dealt with null.
    #[tracing::instrument(level = "trace", skip(self), ret)]
    pub fn can_cast_to_non_nullable_type(&self, source: Idx, target: Idx) -> bool {
        self.cast_non_nullable(source, target, self.configured())
    }

    /// [`Self::can_cast_to_non_nullable_type`] under the strict rules.
    #[tracing::instrument(level = "trace", skip(self), ret)]
    pub fn can_cast_to_non_nullable_type_without_config(&self, source: Idx, target: Idx) -> bool {
        self.cast_non_nullable(source, target, WITHOUT_CONFIG)
    }

    /// Whether `source` may flow into the declared type `target`, resolving
    /// class relationships through `resolver`.
    #[tracing::instrument(level = "trace", skip(self, resolver), ret)]
    pub fn can_cast_to_declared_type(
        &self,
        source: Idx,
        target: Idx,
        resolver: &dyn DeclaredTypeResolver,
    ) -> bool {
        if let Kind::NonEmptyMixed = self.pool.kind(source) {
            // Fully structural: the resolver has nothing to add.
            return self.pool.is_possibly_truthy(target);
        }
        let rules = Rules {
            config: Some(self.config),
            resolver: Some(resolver),
        };
        self.cast(source, target, rules)
    }

    /// Whether the two types may describe overlapping sets of values.
    ///
    /// Looser than casting in either direction; used when narrowing unions.
    /// Symmetric, and `never` overlaps nothing.
    #[tracing::instrument(level = "trace", skip(self), ret)]
    pub fn weakly_overlaps(&self, ty: Idx, other: Idx) -> bool {
        match self.pool.kind(ty) {
            Kind::NonEmptyMixed | Kind::NonNullNonEmptyMixed => self.pool.is_possibly_truthy(other),
            Kind::Mixed => !matches!(self.pool.kind(other), Kind::Never),
            Kind::NonNullMixed => !matches!(self.pool.kind(other), Kind::Null | Kind::Never),
            Kind::Never => false,
            Kind::Null
            | Kind::Bool
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
                let other_flags = self.pool.flags(other);
                if other_flags.contains(TypeFlags::IS_MIXED) {
                    return self.weakly_overlaps(other, ty);
                }
                if let Kind::Never = self.pool.kind(other) {
                    return false;
                }
                if self.pool.is_nullable(ty) && other_flags.is_nullable() {
                    return true;
                }
                self.cast(ty, other, WITHOUT_CONFIG)
                    || self.cast(other, ty, WITHOUT_CONFIG)
            }
        }
    }

    fn cast(&self, source: Idx, target: Idx, rules: Rules<'_>) -> bool {
        if source == target {
            return true;
        }

        let src = self.pool.data(source);
        match src.kind {
            Kind::NonEmptyMixed => {
                self.pool.is_possibly_truthy(target)
                    || (src.nullable && self.pool.is_nullable(target))
            }
            Kind::Mixed | Kind::NonNullMixed | Kind::NonNullNonEmptyMixed | Kind::Never => {
                self.cast_non_nullable(source, target, rules)
            }
            Kind::Null
            | Kind::Bool
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
                if src.admits_null()
                    && !self.pool.is_nullable(target)
                    && !rules.null_casts_as_any_type()
                {
                    return false;
                }
                self.cast_non_nullable(source, target, rules)
            }
        }
    }

    fn cast_non_nullable(&self, source: Idx, target: Idx, rules: Rules<'_>) -> bool {
        let src = self.pool.kind(source);
        let dst = self.pool.kind(target);
        match src {
            Kind::NonEmptyMixed | Kind::NonNullNonEmptyMixed => self.pool.is_possibly_truthy(target),
            Kind::Mixed | Kind::Never => true,
            Kind::NonNullMixed => !matches!(dst, Kind::Null | Kind::Never),
            Kind::Null => rules.null_casts_as_any_type() || self.pool.is_nullable(target),
            Kind::Bool
            | Kind::True
            | Kind::False
            | Kind::Int
            | Kind::NonZeroInt
            | Kind::Float
            | Kind::String => self.mixed_target_accepts(dst, source).unwrap_or_else(|| {
                scalar_widens(src, dst)
                    || (rules.scalar_implicit_cast()
                        && self.pool.flags(target).contains(TypeFlags::IS_SCALAR))
            }),
            Kind::Object => self
                .mixed_target_accepts(dst, source)
                .unwrap_or(matches!(dst, Kind::Object | Kind::Class(_))),
            Kind::Class(name) => {
                self.mixed_target_accepts(dst, source)
                    .unwrap_or_else(|| match dst {
                        Kind::Object => true,
                        Kind::Class(other) => self.class_extends(name, other, rules),
                        _ => false,
                    })
            }
            Kind::Array { elem, key } => {
                self.mixed_target_accepts(dst, source)
                    .unwrap_or_else(|| match dst {
                        Kind::Array {
                            elem: target_elem,
                            key: target_key,
                        } => target_key.accepts(key) && self.cast_elem(elem, target_elem, rules),
                        _ => false,
                    })
            }
            Kind::NonEmptyArray { elem, key } => {
                self.mixed_target_accepts(dst, source)
                    .unwrap_or_else(|| match dst {
                        Kind::Array {
                            elem: target_elem,
                            key: target_key,
                        }
                        | Kind::NonEmptyArray {
                            elem: target_elem,
                            key: target_key,
                        } => target_key.accepts(key) && self.cast_elem(elem, target_elem, rules),
                        _ => false,
                    })
            }
        }
    }

    /// Cast between array elements, one nesting level down.
    fn cast_elem(&self, elem: Idx, target_elem: Idx, rules: Rules<'_>) -> bool {
        ensure_sufficient_stack(|| self.cast(elem, target_elem, rules))
    }

    /// The answer of a `mixed` target for a non-mixed, non-null source.
    ///
    /// `None` when the target is not a `mixed` variant.
    #[inline]
    fn mixed_target_accepts(&self, dst: Kind, source: Idx) -> Option<bool> {
        match dst {
            Kind::Mixed | Kind::NonNullMixed => Some(true),
            Kind::NonEmptyMixed | Kind::NonNullNonEmptyMixed => {
                Some(self.pool.is_possibly_truthy(source))
            }
            _ => None,
        }
    }

    fn class_extends(&self, class: Name, other: Name, rules: Rules<'_>) -> bool {
        if class == other {
            return true;
        }
        let Some(resolver) = rules.resolver else {
            return false;
        };
        let extends = resolver.is_subclass_of(class, other);
        tracing::debug!(
            class = self.pool.names().lookup(class),
            other = self.pool.names().lookup(other),
            extends,
            "resolved declared class cast"
        );
        extends
    }
}

/// Widening between scalar kinds that holds in every mode.
#[inline]
fn scalar_widens(source: Kind, target: Kind) -> bool {
    match (source, target) {
        (Kind::True | Kind::False, Kind::Bool)
        | (Kind::NonZeroInt, Kind::Int | Kind::Float)
        | (Kind::Int, Kind::Float) => true,
        _ => source == target,
    }
}

#[cfg(test)]
mod tests;
