// Copyright 2024-2025 Irreducible Inc.

use tracing::instrument;

use crate::PackedMatrix;

/// Evaluates $a = \sum_i b_i \cdot \left(\sum_j c_{ij} \cdot d_j\right)$ with one reduction per
/// output cell.
///
/// Each inner sum is accumulated from raw products and filtered, but not reduced, before it
/// becomes the right operand of the outer product. The outer sum is accumulated raw across all
/// `i` and reduced once at the end. With 32-bit words the filtered inner sums have degree at
/// most 6 and the outer products degree at most 9, which still fits the word.
///
/// ## Preconditions
///
/// * `b`, `c` and `d` are canonical
/// * `b` and `d` are not empty, `c.len() == b.len()` and `c[i].len() == d.len()`
/// * the shapes chain: `b[i]` is m×k, `c[i][j]` is k×l and `d[j]` is l×n
#[instrument(skip_all, level = "debug", fields(n_outer = b.len(), n_inner = d.len()))]
pub fn sum_of_triple_products<C>(b: &[PackedMatrix], c: &[C], d: &[PackedMatrix]) -> PackedMatrix
where
	C: AsRef<[PackedMatrix]>,
{
	assert!(!b.is_empty());
	assert!(!d.is_empty());
	assert_eq!(b.len(), c.len());

	let mut acc = PackedMatrix::zeros(b[0].m(), d[0].n());
	let mut inner = PackedMatrix::zeros(b[0].n(), d[0].n());
	for (b_i, c_i) in b.iter().zip(c) {
		let c_i = c_i.as_ref();
		assert_eq!(c_i.len(), d.len());

		inner.fill_zero();
		for (c_ij, d_j) in c_i.iter().zip(d) {
			PackedMatrix::affine_mul_acc_into(c_ij, d_j, &mut inner);
		}
		// Multiplicands need clean lanes; reduction can wait.
		inner.filter();
		PackedMatrix::affine_mul_acc_into(b_i, &inner, &mut acc);
	}
	acc.reduce();
	acc
}
