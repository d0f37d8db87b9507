// Copyright 2024-2025 Irreducible Inc.

use std::{
	fmt::{Display, Formatter},
	iter::{Product, Sum},
	ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use bytemuck::Zeroable;
use rand::RngCore;

use crate::{error::Error, layout::GF16_LAYOUT};

const NIBBLE_MASK: u8 = 0x0f;

/// Size of the multiplicative group.
const ORDER: usize = 15;

/// $x^4 + x + 1$
const MODULUS: u8 = (1 << GF16_LAYOUT.degree()) | GF16_LAYOUT.reduction_tail() as u8;

/// Powers of the generator $x$. The table is doubled so that the sum of two logarithms can index
/// it directly.
const EXP_TABLE: [u8; 2 * ORDER] = {
	let mut table = [0; 2 * ORDER];
	let mut power = 1u8;
	let mut i = 0;
	while i < 2 * ORDER {
		table[i] = power;
		power <<= 1;
		if power & (1 << GF16_LAYOUT.degree()) != 0 {
			power ^= MODULUS;
		}
		i += 1;
	}
	table
};

/// Discrete logarithms base $x$. The entry for zero is unused.
const LOG_TABLE: [u8; 16] = {
	let mut table = [0; 16];
	let mut i = 0;
	while i < ORDER {
		table[EXP_TABLE[i] as usize] = i as u8;
		i += 1;
	}
	table
};

/// An element of GF(16) = GF(2)[x] / (x^4 + x + 1) in its natural nibble representation.
///
/// Multiplication goes through log/antilog tables. The type is the byte-level interface of the
/// crate and the reference the packed arithmetic is tested against.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Zeroable)]
#[repr(transparent)]
pub struct GF16(u8);

impl GF16 {
	pub const ZERO: Self = Self(0);
	pub const ONE: Self = Self(1);
	pub const MULTIPLICATIVE_GENERATOR: Self = Self(0b0010);

	/// Creates an element from the low nibble of `value`.
	pub const fn new(value: u8) -> Self {
		Self(value & NIBBLE_MASK)
	}

	pub const fn val(self) -> u8 {
		self.0
	}

	pub fn random(mut rng: impl RngCore) -> Self {
		Self::new(rng.next_u32() as u8)
	}
}

impl TryFrom<u8> for GF16 {
	type Error = Error;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		if value & !NIBBLE_MASK != 0 {
			return Err(Error::NotInField(value));
		}
		Ok(Self(value))
	}
}

impl From<GF16> for u8 {
	fn from(value: GF16) -> Self {
		value.0
	}
}

impl Display for GF16 {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "0x{:x}", self.0)
	}
}

impl Neg for GF16 {
	type Output = Self;

	fn neg(self) -> Self::Output {
		self
	}
}

impl Add<Self> for GF16 {
	type Output = Self;

	#[allow(clippy::suspicious_arithmetic_impl)]
	fn add(self, rhs: Self) -> Self::Output {
		Self(self.0 ^ rhs.0)
	}
}

impl Sub<Self> for GF16 {
	type Output = Self;

	#[allow(clippy::suspicious_arithmetic_impl)]
	fn sub(self, rhs: Self) -> Self::Output {
		Self(self.0 ^ rhs.0)
	}
}

impl Mul<Self> for GF16 {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self::Output {
		if self.0 == 0 || rhs.0 == 0 {
			return Self::ZERO;
		}
		let log = LOG_TABLE[self.0 as usize] as usize + LOG_TABLE[rhs.0 as usize] as usize;
		Self(EXP_TABLE[log])
	}
}

impl AddAssign<Self> for GF16 {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl SubAssign<Self> for GF16 {
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

impl MulAssign<Self> for GF16 {
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

impl Sum<Self> for GF16 {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

impl Product<Self> for GF16 {
	fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ONE, |acc, x| acc * x)
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_generator_spans_group() {
		let mut seen = [false; 16];
		for &power in &EXP_TABLE[..ORDER] {
			assert!(!seen[power as usize]);
			seen[power as usize] = true;
		}
		assert!(!seen[0]);
		assert_eq!(EXP_TABLE[ORDER], 1);
	}

	#[test]
	fn test_reduction_relation() {
		let x = GF16::MULTIPLICATIVE_GENERATOR;
		assert_eq!(std::iter::repeat(x).take(4).product::<GF16>(), GF16::new(0b0011));
	}

	#[test]
	fn test_try_from() {
		assert_eq!(GF16::try_from(15), Ok(GF16::new(15)));
		assert_eq!(GF16::try_from(16), Err(Error::NotInField(16)));
		assert_eq!(GF16::new(0xa7), GF16::new(7));
	}

	#[test]
	fn test_field_text_debug() {
		assert_eq!(format!("{:?}", GF16::ONE), "GF16(1)");
		assert_eq!(format!("{}", GF16::new(11)), "0xb");
	}

	proptest! {
		#[test]
		fn test_mul_identity_and_zero(a in 0..16u8) {
			let a = GF16::new(a);
			prop_assert_eq!(a * GF16::ONE, a);
			prop_assert_eq!(a * GF16::ZERO, GF16::ZERO);
		}

		#[test]
		fn test_mul_commutative_and_associative(a in 0..16u8, b in 0..16u8, c in 0..16u8) {
			let (a, b, c) = (GF16::new(a), GF16::new(b), GF16::new(c));
			prop_assert_eq!(a * b, b * a);
			prop_assert_eq!((a * b) * c, a * (b * c));
		}

		#[test]
		fn test_mul_distributes_over_add(a in 0..16u8, b in 0..16u8, c in 0..16u8) {
			let (a, b, c) = (GF16::new(a), GF16::new(b), GF16::new(c));
			prop_assert_eq!(a * (b + c), a * b + a * c);
		}
	}
}
