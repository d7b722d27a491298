//! phx IR - shared identifier types.
//!
//! Class, interface and trait names are interned once into a [`NameTable`]
//! and passed around as 32-bit [`Name`] handles, so the type lattice compares
//! declared types by integer equality. Comparison follows the host language:
//! ASCII case and a leading `\` do not matter.

mod interner;
mod name;

pub use interner::{InternError, NameTable, SharedNameTable};
pub use name::{is_name_char, is_qualified_name, Name};
