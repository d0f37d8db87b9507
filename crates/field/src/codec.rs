// Copyright 2024-2025 Irreducible Inc.

//! Conversion between nibble bytes and packed words.

use crate::{
	layout::{PackedLayout, Underlier},
	reduction::reduce,
	PackedGF16,
};

/// Spreads the low `degree` bits of `value` into the low bits of consecutive lanes.
///
/// Bits of `value` above the field degree are ignored.
#[inline]
pub(crate) const fn expand(layout: &PackedLayout, value: u8) -> Underlier {
	let mut word = 0;
	let mut i = 0;
	while i < layout.degree() {
		word |= (((value >> i) & 1) as Underlier) << (i * layout.lane_bits());
		i += 1;
	}
	word
}

/// Gathers the low bit of every lane of the reduced word back into a nibble.
///
/// The word is reduced first, which makes this the inverse of [`expand`] on canonical words and
/// also accepts filtered, not yet reduced accumulators.
#[inline]
pub(crate) const fn compress(layout: &PackedLayout, word: Underlier) -> u8 {
	let reduced = reduce(layout, word);
	let mut value = 0;
	let mut i = 0;
	while i < layout.degree() {
		value |= (((reduced >> (i * layout.lane_bits())) & 1) as u8) << i;
		i += 1;
	}
	value
}

/// Expands every byte of `src` into the corresponding element of `dst`.
///
/// ## Preconditions
///
/// * `dst` and `src` must have the same length
pub fn expand_slice(dst: &mut [PackedGF16], src: &[u8]) {
	assert_eq!(dst.len(), src.len());
	for (dst_i, &src_i) in dst.iter_mut().zip(src) {
		*dst_i = PackedGF16::expand(src_i);
	}
}

/// Compresses every element of `src` into the corresponding byte of `dst`.
///
/// ## Preconditions
///
/// * `dst` and `src` must have the same length
pub fn compress_slice(dst: &mut [u8], src: &[PackedGF16]) {
	assert_eq!(dst.len(), src.len());
	for (dst_i, &src_i) in dst.iter_mut().zip(src) {
		*dst_i = src_i.compress();
	}
}
