// Copyright 2024-2025 Irreducible Inc.

//! Lane layout of the packed representation.
//!
//! Everything the codec and the reducer need (masks, fold shifts and the number of fold steps)
//! is derived here from the field degree, the tail of the reduction polynomial and the lane
//! width. The word width is fixed by [`Underlier`].

use static_assertions::const_assert_eq;

use crate::error::LayoutError;

/// Machine word holding one packed field element.
pub type Underlier = u32;

/// Packing parameters of a binary field $GF(2)[x] / (x^d + t(x))$ together with the constants
/// derived from them.
///
/// Coefficient $i$ of a packed polynomial lives in the lowest bit of lane $i$, a run of
/// `lane_bits` bits starting at bit `i * lane_bits`. The remaining bits of a lane absorb the
/// integer sum of partial products when two packed values are multiplied as plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedLayout {
	degree: u32,
	reduction_tail: u32,
	lane_bits: u32,
	lane_mask: Underlier,
	window_mask: Underlier,
	max_degree: u32,
	tail_degree: u32,
	n_folds: u32,
}

impl PackedLayout {
	pub const WORD_BITS: u32 = Underlier::BITS;

	/// Derives the layout for the field $GF(2)[x] / (x^{degree} + tail(x))$.
	///
	/// `reduction_tail` holds the coefficients of the reduction polynomial below the leading
	/// term, bit $i$ being the coefficient of $x^i$.
	///
	/// ## Throws
	///
	/// * [`LayoutError::ZeroDegree`]
	/// * [`LayoutError::LaneTooNarrow`] if a lane cannot count `degree` partial products
	/// * [`LayoutError::WordTooNarrow`] if the product of two reduced elements does not fit
	/// * [`LayoutError::TailTooWide`]
	/// * [`LayoutError::MissingConstantTerm`]
	pub const fn new(degree: u32, reduction_tail: u32, lane_bits: u32) -> Result<Self, LayoutError> {
		if degree == 0 {
			return Err(LayoutError::ZeroDegree);
		}

		// A lane of a product sums at most `degree` partial products, one per coefficient of
		// the reduced operand.
		let lane_capacity = if lane_bits >= Self::WORD_BITS {
			Underlier::MAX
		} else {
			(1 << lane_bits) - 1
		};
		if lane_capacity < degree {
			return Err(LayoutError::LaneTooNarrow { lane_bits, degree });
		}

		let required_bits = lane_bits.saturating_mul(degree.saturating_mul(2) - 1);
		if required_bits > Self::WORD_BITS {
			return Err(LayoutError::WordTooNarrow {
				required_bits,
				word_bits: Self::WORD_BITS,
			});
		}

		if reduction_tail >> degree != 0 {
			return Err(LayoutError::TailTooWide {
				tail: reduction_tail,
				degree,
			});
		}
		if reduction_tail & 1 == 0 {
			return Err(LayoutError::MissingConstantTerm);
		}

		let n_lanes = Self::WORD_BITS / lane_bits;
		let max_degree = n_lanes - 1;
		let tail_degree = Underlier::BITS - 1 - reduction_tail.leading_zeros();

		// Every fold lowers the highest occupied lane by `degree - tail_degree`.
		let n_folds = (max_degree + 1 - degree).div_ceil(degree - tail_degree);

		Ok(Self {
			degree,
			reduction_tail,
			lane_bits,
			lane_mask: low_bit_mask(n_lanes, lane_bits),
			window_mask: low_bit_mask(degree, lane_bits),
			max_degree,
			tail_degree,
			n_folds,
		})
	}

	/// Extension degree of the field over GF(2).
	pub const fn degree(&self) -> u32 {
		self.degree
	}

	pub const fn reduction_tail(&self) -> u32 {
		self.reduction_tail
	}

	pub const fn lane_bits(&self) -> u32 {
		self.lane_bits
	}

	/// Low bit of every lane that fits in the word.
	pub const fn lane_mask(&self) -> Underlier {
		self.lane_mask
	}

	/// Low bit of the lanes of a reduced element.
	pub const fn window_mask(&self) -> Underlier {
		self.window_mask
	}

	/// Highest polynomial degree representable without a lane leaving the word.
	pub const fn max_degree(&self) -> u32 {
		self.max_degree
	}

	pub const fn tail_degree(&self) -> u32 {
		self.tail_degree
	}

	/// Number of fold steps that bring a polynomial of degree `max_degree` below `degree`.
	pub const fn n_folds(&self) -> u32 {
		self.n_folds
	}

	/// Bit distance between the lane of $x^i$ and the lane of $x^{i + degree}$.
	pub const fn fold_shift(&self) -> u32 {
		self.degree * self.lane_bits
	}

	/// Highest degree an unreduced multiplicand may have when the other operand is reduced.
	pub const fn max_operand_degree(&self) -> u32 {
		self.max_degree + 1 - self.degree
	}
}

const fn low_bit_mask(n_lanes: u32, lane_bits: u32) -> Underlier {
	let mut mask = 0;
	let mut i = 0;
	while i < n_lanes {
		mask |= 1 << (i * lane_bits);
		i += 1;
	}
	mask
}

/// Layout of GF(16) = GF(2)[x] / (x^4 + x + 1) in 3-bit lanes.
pub const GF16_LAYOUT: PackedLayout = match PackedLayout::new(4, 0b0011, 3) {
	Ok(layout) => layout,
	Err(_) => panic!("GF(16) does not fit its packing layout"),
};

const_assert_eq!(GF16_LAYOUT.window_mask(), 0o1111);
const_assert_eq!(GF16_LAYOUT.max_degree(), 9);
