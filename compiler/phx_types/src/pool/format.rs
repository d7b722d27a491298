//! Type rendering.
//!
//! Produces the annotation form of a type. The output is stable and is
//! exactly the grammar accepted by [`parse_type`](crate::parse_type), for
//! every class type built through [`Pool::try_class`] (which rejects names
//! that are not qualified names):
//! - nullary kinds render as their keyword, `?`-prefixed when nullable
//! - classes render fully qualified with a leading `\`, in the spelling the
//!   name table saw first
//! - arrays render as `array<elem>` / `array<int, elem>` / `non-empty-array<…>`

use crate::stack::ensure_sufficient_stack;
use crate::{Idx, Kind, Pool};

impl Pool {
    /// Format a type as its annotation string.
    pub fn format_type(&self, idx: Idx) -> String {
        let mut buf = String::new();
        self.format_type_into(idx, &mut buf);
        buf
    }

    /// Format a type into an existing string buffer.
    pub fn format_type_into(&self, idx: Idx, buf: &mut String) {
        let data = self.data(idx);
        if data.nullable {
            buf.push('?');
        }

        match data.kind {
            Kind::Class(name) => {
                buf.push('\\');
                buf.push_str(self.names().lookup(name));
            }
            Kind::Array { elem, key } | Kind::NonEmptyArray { elem, key } => {
                buf.push_str(data.kind.name());
                buf.push('<');
                if let Some(key) = key.keyword() {
                    buf.push_str(key);
                    buf.push_str(", ");
                }
                ensure_sufficient_stack(|| self.format_type_into(elem, buf));
                buf.push('>');
            }
            Kind::Mixed
            | Kind::NonNullMixed
            | Kind::NonEmptyMixed
            | Kind::NonNullNonEmptyMixed
            | Kind::Null
            | Kind::Never
            | Kind::Bool
            | Kind::True
            | Kind::False
            | Kind::Int
            | Kind::NonZeroInt
            | Kind::Float
            | Kind::String
            | Kind::Object => buf.push_str(data.kind.name()),
        }
    }
}
