// Copyright 2024-2025 Irreducible Inc.

use std::{
	fmt::{Debug, Formatter},
	ops::{BitXor, BitXorAssign, Mul},
};

use bytemuck::Zeroable;

use crate::{
	codec::{compress, expand},
	gf16::GF16,
	layout::{Underlier, GF16_LAYOUT},
	reduction::{filter, reduce},
};

/// A GF(16) element, or an intermediate sum of products of such elements, in the packed
/// representation described by [`GF16_LAYOUT`].
///
/// A value is in one of three states:
///
/// * canonical: a reduced field element, as returned by [`Self::expand`] or [`Self::reduce`];
/// * filtered: an unreduced polynomial with clean lanes, as returned by [`Self::filter`];
/// * raw: a product from [`Self::mul_unreduced`] or an XOR of such products, whose lanes may
///   hold integer partial-product counts.
///
/// Raw values may be XORed together and then filtered or reduced, but must be filtered before
/// they are used as a multiplicand.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash, Zeroable)]
#[repr(transparent)]
pub struct PackedGF16(Underlier);

impl PackedGF16 {
	pub const ZERO: Self = Self(0);
	pub const ONE: Self = Self::expand(1);

	/// Encodes the low nibble of `value`.
	#[inline]
	pub const fn expand(value: u8) -> Self {
		Self(expand(&GF16_LAYOUT, value))
	}

	/// Decodes the element back into a nibble, reducing it first.
	///
	/// Accepts canonical and filtered values as well as raw sums of products.
	#[inline]
	pub const fn compress(self) -> u8 {
		compress(&GF16_LAYOUT, self.0)
	}

	/// Clears the partial-product carries, keeping only the low bit of every lane.
	#[inline]
	pub const fn filter(self) -> Self {
		Self(filter(&GF16_LAYOUT, self.0))
	}

	/// Reduces the value to its canonical form.
	#[inline]
	pub const fn reduce(self) -> Self {
		Self(reduce(&GF16_LAYOUT, self.0))
	}

	/// Multiplies two filtered values as plain integers.
	///
	/// The result is raw: lane $k$ counts the partial products contributing to $x^k$. It has to
	/// be filtered before it is used as a multiplicand again.
	///
	/// ## Preconditions
	///
	/// * both operands are filtered
	/// * at least one operand is canonical
	/// * the sum of the operand degrees does not exceed [`PackedLayout::max_degree`]
	///
	/// [`PackedLayout::max_degree`]: crate::PackedLayout::max_degree
	#[inline]
	pub fn mul_unreduced(self, rhs: Self) -> Self {
		debug_assert!(self.is_filtered() && rhs.is_filtered(), "multiplicands must be filtered");
		debug_assert!(
			self.is_canonical() || rhs.is_canonical(),
			"at least one multiplicand must be reduced"
		);
		debug_assert!(
			self.lane_degree() + rhs.lane_degree() <= GF16_LAYOUT.max_degree(),
			"product of degree {} does not fit the packed word",
			self.lane_degree() + rhs.lane_degree()
		);
		Self(self.0.wrapping_mul(rhs.0))
	}

	/// Whether only the low bit of each lane may be set.
	#[inline]
	pub const fn is_filtered(self) -> bool {
		self.0 & !GF16_LAYOUT.lane_mask() == 0
	}

	/// Whether the value is a reduced field element.
	#[inline]
	pub const fn is_canonical(self) -> bool {
		self.0 & !GF16_LAYOUT.window_mask() == 0
	}

	/// Index of the highest occupied lane, zero for zero.
	const fn lane_degree(self) -> u32 {
		match self.0.checked_ilog2() {
			Some(bit) => bit / GF16_LAYOUT.lane_bits(),
			None => 0,
		}
	}
}

impl Debug for PackedGF16 {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "PackedGF16({:#010x})", self.0)
	}
}

impl From<GF16> for PackedGF16 {
	fn from(value: GF16) -> Self {
		Self::expand(value.val())
	}
}

impl From<PackedGF16> for GF16 {
	fn from(value: PackedGF16) -> Self {
		Self::new(value.compress())
	}
}

/// XOR accumulation. Valid on values in any state.
impl BitXor<Self> for PackedGF16 {
	type Output = Self;

	fn bitxor(self, rhs: Self) -> Self::Output {
		Self(self.0 ^ rhs.0)
	}
}

impl BitXorAssign<Self> for PackedGF16 {
	fn bitxor_assign(&mut self, rhs: Self) {
		self.0 ^= rhs.0;
	}
}

/// Field multiplication of filtered operands; the product is canonical.
impl Mul<Self> for PackedGF16 {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self::Output {
		self.mul_unreduced(rhs).reduce()
	}
}
