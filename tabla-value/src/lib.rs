//! Dynamic values and tables.
//!
//! A [`Value`] is nil, a boolean, a number, a string or a [`Table`]. Tables
//! are associative structures with a sequence part, so the same type serves
//! as both list and map. Keys are normalized through [`Key`].
mod error;
mod key;
mod macros;
mod profile;
mod table;
mod value;

pub use error::{Error, Result};
pub use key::{Key, KeyError};
pub use profile::{EqualityFn, Profile};
pub use table::Table;
pub use value::Value;
