// Copyright 2024-2025 Irreducible Inc.

use std::{
	iter::repeat_with,
	ops::{Add, AddAssign, Index, IndexMut},
};

use bytemuck::zeroed_slice_box;
use getset::CopyGetters;
use rand::RngCore;
use xgf16_field::GF16;
use xgf16_utils::ensure;

use super::{error::Error, packed_matrix::PackedMatrix};

/// A row-major m×n matrix over GF(16) in the natural nibble representation.
#[derive(Debug, Clone, PartialEq, Eq, CopyGetters)]
pub struct Matrix {
	#[getset(get_copy = "pub")]
	m: usize,
	#[getset(get_copy = "pub")]
	n: usize,
	elements: Box<[GF16]>,
}

impl Matrix {
	pub fn new(m: usize, n: usize, elements: &[GF16]) -> Result<Self, Error> {
		ensure!(
			elements.len() == m * n,
			Error::IncorrectArgumentLength {
				arg: "elements".into(),
				expected: m * n,
			}
		);
		Ok(Self {
			m,
			n,
			elements: elements.into(),
		})
	}

	/// Reads one element per byte.
	///
	/// ## Throws
	///
	/// * [`Error::IncorrectArgumentLength`] if `bytes` does not hold `m * n` elements
	/// * [`Error::FieldError`] if a byte does not fit in a nibble
	pub fn from_bytes(m: usize, n: usize, bytes: &[u8]) -> Result<Self, Error> {
		ensure!(
			bytes.len() == m * n,
			Error::IncorrectArgumentLength {
				arg: "bytes".into(),
				expected: m * n,
			}
		);
		let elements = bytes
			.iter()
			.map(|&byte| GF16::try_from(byte))
			.collect::<Result<_, _>>()?;
		Ok(Self { m, n, elements })
	}

	pub fn zeros(m: usize, n: usize) -> Self {
		Self {
			m,
			n,
			elements: zeroed_slice_box(m * n),
		}
	}

	pub fn identity(n: usize) -> Self {
		let mut out = Self::zeros(n, n);
		for i in 0..n {
			out[(i, i)] = GF16::ONE;
		}
		out
	}

	pub fn random(m: usize, n: usize, mut rng: impl RngCore) -> Self {
		Self {
			m,
			n,
			elements: repeat_with(|| GF16::random(&mut rng)).take(m * n).collect(),
		}
	}

	pub fn elements(&self) -> &[GF16] {
		&self.elements
	}

	pub fn to_bytes(&self) -> Vec<u8> {
		self.elements.iter().map(|&x| x.into()).collect()
	}

	pub fn dim(&self) -> (usize, usize) {
		(self.m, self.n)
	}

	/// Computes `c = a * b` with the schoolbook triple loop.
	pub fn mul_into(a: &Self, b: &Self, c: &mut Self) {
		assert_eq!(a.n(), b.m());
		assert_eq!(a.m(), c.m());
		assert_eq!(b.n(), c.n());

		for i in 0..c.m() {
			for j in 0..c.n() {
				c[(i, j)] = (0..a.n()).map(|k| a[(i, k)] * b[(k, j)]).sum();
			}
		}
	}
}

impl From<&PackedMatrix> for Matrix {
	fn from(matrix: &PackedMatrix) -> Self {
		Self {
			m: matrix.m(),
			n: matrix.n(),
			elements: matrix.elements().iter().map(|&x| GF16::from(x)).collect(),
		}
	}
}

impl Index<(usize, usize)> for Matrix {
	type Output = GF16;

	fn index(&self, index: (usize, usize)) -> &Self::Output {
		let (i, j) = index;
		assert!(i < self.m);
		assert!(j < self.n);
		&self.elements[i * self.n + j]
	}
}

impl IndexMut<(usize, usize)> for Matrix {
	fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
		let (i, j) = index;
		assert!(i < self.m);
		assert!(j < self.n);
		&mut self.elements[i * self.n + j]
	}
}

impl Add<Self> for &Matrix {
	type Output = Matrix;

	fn add(self, rhs: Self) -> Matrix {
		let mut out = self.clone();
		out += rhs;
		out
	}
}

impl AddAssign<&Self> for Matrix {
	fn add_assign(&mut self, rhs: &Self) {
		assert_eq!(self.dim(), rhs.dim());
		for (a_ij, &b_ij) in self.elements.iter_mut().zip(rhs.elements.iter()) {
			*a_ij += b_ij;
		}
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rand::{rngs::StdRng, SeedableRng};

	use super::*;

	#[test]
	fn test_from_bytes() {
		let matrix = Matrix::from_bytes(2, 2, &[1, 0, 0, 1]).unwrap();
		assert_eq!(matrix, Matrix::identity(2));
		assert_eq!(matrix.to_bytes(), vec![1, 0, 0, 1]);

		assert!(matches!(
			Matrix::from_bytes(2, 2, &[1, 0, 0]),
			Err(Error::IncorrectArgumentLength { expected: 4, .. })
		));
		assert!(matches!(
			Matrix::new(2, 2, &[GF16::ONE; 3]),
			Err(Error::IncorrectArgumentLength { ref arg, expected: 4 }) if arg == "elements"
		));
		assert!(matches!(
			Matrix::from_bytes(1, 2, &[1, 0x10]),
			Err(Error::FieldError(xgf16_field::Error::NotInField(0x10)))
		));
	}

	proptest! {
		#[test]
		fn test_left_linearity(c_m in 0..8usize, c_n in 0..8usize, a_n in 0..8usize) {
			let mut rng = StdRng::seed_from_u64(0);
			let a0 = Matrix::random(c_m, a_n, &mut rng);
			let a1 = Matrix::random(c_m, a_n, &mut rng);
			let b = Matrix::random(a_n, c_n, &mut rng);
			let mut c0 = Matrix::zeros(c_m, c_n);
			let mut c1 = Matrix::zeros(c_m, c_n);

			let a0p1 = &a0 + &a1;
			let mut c0p1 = Matrix::zeros(c_m, c_n);

			Matrix::mul_into(&a0, &b, &mut c0);
			Matrix::mul_into(&a1, &b, &mut c1);
			Matrix::mul_into(&a0p1, &b, &mut c0p1);

			assert_eq!(c0p1, &c0 + &c1);
		}

		#[test]
		fn test_identity(m in 0..8usize, n in 0..8usize) {
			let mut rng = StdRng::seed_from_u64(0);
			let a = Matrix::random(m, n, &mut rng);
			let mut prod = Matrix::zeros(m, n);

			Matrix::mul_into(&Matrix::identity(m), &a, &mut prod);
			assert_eq!(prod, a);

			Matrix::mul_into(&a, &Matrix::identity(n), &mut prod);
			assert_eq!(prod, a);
		}
	}
}
