//! Bridge to declared (nominal) types.
//!
//! Most cast rules are structural. Class-to-class casts are not: whether
//! `\App\Admin` may flow into `\App\User` depends on the codebase being
//! analysed. The cast engine asks a [`DeclaredTypeResolver`] in that one
//! place and nowhere else.

use phx_ir::Name;
use rustc_hash::{FxHashMap, FxHashSet};

/// Symbol-resolution callback supplied by the analysis context.
pub trait DeclaredTypeResolver {
    /// Whether `sub` is `sup`, extends it, or implements it (transitively).
    fn is_subclass_of(&self, sub: Name, sup: Name) -> bool;
}

/// Resolver that knows no declarations: only identical names match.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoDeclarations;

impl DeclaredTypeResolver for NoDeclarations {
    fn is_subclass_of(&self, sub: Name, sup: Name) -> bool {
        sub == sup
    }
}

/// In-memory class hierarchy.
///
/// Records direct `extends`/`implements` edges and answers transitive
/// queries. Cycles (which only malformed code produces) terminate.
#[derive(Clone, Debug, Default)]
pub struct ClassHierarchy {
    parents: FxHashMap<Name, Vec<Name>>,
}

impl ClassHierarchy {
    /// Create an empty hierarchy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `class` directly extends or implements `parent`.
    pub fn add_parent(&mut self, class: Name, parent: Name) {
        let parents = self.parents.entry(class).or_default();
        if !parents.contains(&parent) {
            parents.push(parent);
        }
    }

    /// Direct parents of `class`.
    pub fn parents(&self, class: Name) -> &[Name] {
        self.parents.get(&class).map(Vec::as_slice).unwrap_or_default()
    }
}

impl DeclaredTypeResolver for ClassHierarchy {
    fn is_subclass_of(&self, sub: Name, sup: Name) -> bool {
        if sub == sup {
            return true;
        }

        let mut visited = FxHashSet::default();
        let mut stack = vec![sub];
        while let Some(class) = stack.pop() {
            if !visited.insert(class) {
                continue;
            }
            for &parent in self.parents(class) {
                if parent == sup {
                    return true;
                }
                stack.push(parent);
            }
        }
        false
    }
}

impl<R: DeclaredTypeResolver + ?Sized> DeclaredTypeResolver for &R {
    fn is_subclass_of(&self, sub: Name, sup: Name) -> bool {
        (**self).is_subclass_of(sub, sup)
    }
}
