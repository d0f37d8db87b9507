// Copyright 2024-2025 Irreducible Inc.

//! Arithmetic over GF(16) = GF(2)[x]/(x^4 + x + 1) in a redundant packed representation.
//!
//! A field element is stored in a machine word with one polynomial coefficient per lane. The
//! lanes are wider than a single bit, so a plain integer multiplication of two packed elements
//! computes all the partial products of the polynomial multiplication at once without any carry
//! crossing a lane boundary. The low bit of every lane then holds the GF(2) coefficient of the
//! unreduced product, which is folded back into the field with a fixed number of shift/XOR
//! steps. There are no table lookups and no data-dependent branches on this path.
//!
//! The scalar type [`GF16`] uses log/antilog tables instead and serves as the natural nibble
//! representation as well as an independent reference for the packed arithmetic.

mod codec;
pub mod error;
mod gf16;
pub mod layout;
mod packed;
mod reduction;

pub use codec::{compress_slice, expand_slice};
pub use error::*;
pub use gf16::GF16;
pub use layout::{PackedLayout, GF16_LAYOUT};
pub use packed::PackedGF16;
