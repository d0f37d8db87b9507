// Copyright 2024-2025 Irreducible Inc.

use std::{
	iter::repeat_with,
	ops::{BitXorAssign, Index, IndexMut, Mul},
};

use bytemuck::zeroed_slice_box;
use getset::CopyGetters;
use itertools::izip;
use rand::RngCore;
use tracing::instrument;
use xgf16_field::{compress_slice, expand_slice, PackedGF16, GF16};
use xgf16_utils::ensure;

use super::{error::Error, matrix::Matrix};

/// A row-major m×n matrix of packed GF(16) elements.
///
/// Matrices built by [`Self::from_bytes`] and results of [`Self::mul_into`] are canonical. The
/// accumulator of [`Self::affine_mul_acc_into`] is raw until it is filtered or reduced.
#[derive(Debug, Clone, PartialEq, Eq, CopyGetters)]
pub struct PackedMatrix {
	#[getset(get_copy = "pub")]
	m: usize,
	#[getset(get_copy = "pub")]
	n: usize,
	elements: Box<[PackedGF16]>,
}

impl PackedMatrix {
	pub fn new(m: usize, n: usize, elements: &[PackedGF16]) -> Result<Self, Error> {
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

	/// Expands one nibble per byte; the high nibble of every byte is ignored.
	pub fn from_bytes(m: usize, n: usize, bytes: &[u8]) -> Result<Self, Error> {
		ensure!(
			bytes.len() == m * n,
			Error::IncorrectArgumentLength {
				arg: "bytes".into(),
				expected: m * n,
			}
		);
		let mut out = Self::zeros(m, n);
		expand_slice(&mut out.elements, bytes);
		Ok(out)
	}

	/// Writes one nibble per byte into `bytes`.
	///
	/// Every element is masked and reduced first, so canonical matrices and unreduced
	/// accumulators, filtered or not, decode alike.
	///
	/// ## Preconditions
	///
	/// * `bytes` must have length `m * n`
	pub fn compress_into(&self, bytes: &mut [u8]) {
		compress_slice(bytes, &self.elements);
	}

	pub fn to_bytes(&self) -> Vec<u8> {
		let mut bytes = vec![0; self.elements.len()];
		self.compress_into(&mut bytes);
		bytes
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
			out[(i, i)] = PackedGF16::ONE;
		}
		out
	}

	pub fn random(m: usize, n: usize, mut rng: impl RngCore) -> Self {
		Self {
			m,
			n,
			elements: repeat_with(|| PackedGF16::from(GF16::random(&mut rng)))
				.take(m * n)
				.collect(),
		}
	}

	pub fn elements(&self) -> &[PackedGF16] {
		&self.elements
	}

	pub fn dim(&self) -> (usize, usize) {
		(self.m, self.n)
	}

	pub fn is_filtered(&self) -> bool {
		self.elements.iter().all(|x| x.is_filtered())
	}

	pub fn is_canonical(&self) -> bool {
		self.elements.iter().all(|x| x.is_canonical())
	}

	/// Drops the partial-product carries of every element.
	///
	/// Required before an accumulator of raw products is used as a multiplicand.
	pub fn filter(&mut self) {
		for x in self.elements.iter_mut() {
			*x = x.filter();
		}
	}

	/// Brings every element to canonical form.
	pub fn reduce(&mut self) {
		for x in self.elements.iter_mut() {
			*x = x.reduce();
		}
	}

	pub(crate) fn fill_zero(&mut self) {
		self.elements.fill(PackedGF16::ZERO);
	}

	/// Computes `c = a * b`.
	///
	/// ## Preconditions
	///
	/// * `a` and `b` are canonical
	/// * the dimensions of `a`, `b` and `c` are compatible
	pub fn mul_into(a: &Self, b: &Self, c: &mut Self) {
		c.fill_zero();
		Self::mul_acc_into(a, b, c);
	}

	/// Computes `c += a * b`, reducing every product before it is accumulated.
	///
	/// `c` keeps whatever state it had: a canonical `c` stays canonical.
	#[instrument(skip_all, level = "trace", fields(m = a.m(), k = a.n(), n = b.n()))]
	pub fn mul_acc_into(a: &Self, b: &Self, c: &mut Self) {
		assert_eq!(a.n(), b.m());
		assert_eq!(a.m(), c.m());
		assert_eq!(b.n(), c.n());

		for i in 0..c.m() {
			for j in 0..c.n() {
				c[(i, j)] ^= (0..a.n()).fold(PackedGF16::ZERO, |sum, k| sum ^ a[(i, k)] * b[(k, j)]);
			}
		}
	}

	/// Computes `c += a * b` on unreduced products.
	///
	/// Every cell of `c` receives the XOR of the raw integer products, with neither filtering nor
	/// reduction. This is sound because both steps are linear over GF(2): the low bit of a lane
	/// of an XOR of raw products is the XOR of the low bits, and reducing a sum equals summing
	/// the reductions. Filtering or reducing `c` once therefore gives the same result as
	/// reducing every product. The order is what matters: `c` must be filtered before it is used
	/// as a multiplicand, while any number of XOR accumulations may happen before that.
	///
	/// ## Preconditions
	///
	/// * `a` and `b` are filtered, and one of them is canonical
	/// * the dimensions of `a`, `b` and `c` are compatible
	#[instrument(skip_all, level = "trace", fields(m = a.m(), k = a.n(), n = b.n()))]
	pub fn affine_mul_acc_into(a: &Self, b: &Self, c: &mut Self) {
		assert_eq!(a.n(), b.m());
		assert_eq!(a.m(), c.m());
		assert_eq!(b.n(), c.n());

		for i in 0..c.m() {
			for j in 0..c.n() {
				c[(i, j)] ^= (0..a.n())
					.fold(PackedGF16::ZERO, |sum, k| sum ^ a[(i, k)].mul_unreduced(b[(k, j)]));
			}
		}
	}
}

impl From<&Matrix> for PackedMatrix {
	fn from(matrix: &Matrix) -> Self {
		Self {
			m: matrix.m(),
			n: matrix.n(),
			elements: matrix
				.elements()
				.iter()
				.map(|&x| PackedGF16::from(x))
				.collect(),
		}
	}
}

impl Index<(usize, usize)> for PackedMatrix {
	type Output = PackedGF16;

	fn index(&self, index: (usize, usize)) -> &Self::Output {
		let (i, j) = index;
		assert!(i < self.m);
		assert!(j < self.n);
		&self.elements[i * self.n + j]
	}
}

impl IndexMut<(usize, usize)> for PackedMatrix {
	fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
		let (i, j) = index;
		assert!(i < self.m);
		assert!(j < self.n);
		&mut self.elements[i * self.n + j]
	}
}

impl BitXorAssign<&Self> for PackedMatrix {
	fn bitxor_assign(&mut self, rhs: &Self) {
		assert_eq!(self.dim(), rhs.dim());
		for (a_ij, &b_ij) in izip!(self.elements.iter_mut(), rhs.elements.iter()) {
			*a_ij ^= b_ij;
		}
	}
}

impl Mul<Self> for &PackedMatrix {
	type Output = PackedMatrix;

	fn mul(self, rhs: Self) -> PackedMatrix {
		let mut out = PackedMatrix::zeros(self.m(), rhs.n());
		PackedMatrix::mul_into(self, rhs, &mut out);
		out
	}
}
