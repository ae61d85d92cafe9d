//! Sequence, table and string utilities over dynamic values.
//!
//! - [`sequence`]: map, fold, slice, splice, concat, flatten and friends over
//!   slices.
//! - [`structure`]: deep comparison, deep copy, inversion and sorted
//!   iteration over [`Table`]s.
//! - [`string`]: a few string helpers.
//!
//! The data model ([`Value`], [`Table`], [`Key`]) lives in `tabla-value` and
//! is re-exported here.
//!
//! Every operation is pure except for the ones that take a `&mut` argument
//! ([`sequence::merge`], [`structure::insert_with`]), which mutate that
//! argument in place.
mod assert;
pub mod iter;
pub mod sequence;
pub mod string;
pub mod structure;

pub use tabla_value::*;
