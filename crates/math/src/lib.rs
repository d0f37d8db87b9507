// Copyright 2024-2025 Irreducible Inc.

//! Matrix arithmetic over GF(16), built atop the `xgf16_field` crate.
//!
//! [`PackedMatrix`] multiplies matrices of packed elements with plain integer multiplications,
//! either reducing every product or accumulating raw products and reducing once per output
//! cell. [`Matrix`] is the straightforward table-driven counterpart used as a reference.

mod chained;
mod error;
mod matrix;
mod packed_matrix;

pub use chained::*;
pub use error::*;
pub use matrix::*;
pub use packed_matrix::*;
