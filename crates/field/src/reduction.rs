// Copyright 2024-2025 Irreducible Inc.

//! Folding of unreduced packed products back into the field.
//!
//! An integer product of two packed polynomials carries, in lane $k$, the number of partial
//! products contributing to $x^k$. Only the parity of that count matters over GF(2), and it sits
//! in the low bit of the lane, so masking with [`PackedLayout::lane_mask`] yields the carry-less
//! product. The reducer then replaces every $x^{d + i}$ with $x^i \cdot t(x)$, where
//! $x^d = t(x)$ is the reduction relation, a fixed number of times.
//!
//! Both steps are GF(2)-linear in the input word. Reducing the XOR of several unreduced products
//! therefore gives the XOR of their reductions, which is what lets the matrix engine defer
//! filtering and reduction until a whole inner product has been accumulated.

use crate::layout::{PackedLayout, Underlier};

/// Clears every bit that is not the low bit of a lane.
#[inline]
pub(crate) const fn filter(layout: &PackedLayout, word: Underlier) -> Underlier {
	word & layout.lane_mask()
}

/// Multiplies the lane-clean polynomial `high` by the reduction tail.
#[inline]
const fn fold(layout: &PackedLayout, high: Underlier) -> Underlier {
	let mut folded = 0;
	let mut i = 0;
	while i <= layout.tail_degree() {
		if (layout.reduction_tail() >> i) & 1 == 1 {
			folded ^= high << (i * layout.lane_bits());
		}
		i += 1;
	}
	folded
}

/// Reduces a packed polynomial of degree at most [`PackedLayout::max_degree`] modulo the
/// field polynomial.
///
/// The input is filtered first, so raw products and XOR sums of raw products are accepted as
/// long as no lane ever overflowed into its neighbour. The result is canonical.
#[inline]
pub(crate) const fn reduce(layout: &PackedLayout, word: Underlier) -> Underlier {
	let mut res = filter(layout, word);
	let mut i = 0;
	while i < layout.n_folds() {
		let high = res >> layout.fold_shift();
		res = (res & layout.window_mask()) ^ fold(layout, high);
		i += 1;
	}
	debug_assert!(res & !layout.window_mask() == 0);
	res
}
