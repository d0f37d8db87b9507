// Copyright 2024-2025 Irreducible Inc.

use rand::{rngs::StdRng, RngCore, SeedableRng};
use xgf16_math::{sum_of_triple_products, Matrix, PackedMatrix};

const DIM: usize = 4;
const NB: usize = 2;
const NC: usize = 3;

/// Byte-level operands: `NB` matrices `b`, `NB × NC` matrices `c` and `NC` matrices `d`.
struct Operands {
	b: Vec<Vec<u8>>,
	c: Vec<Vec<Vec<u8>>>,
	d: Vec<Vec<u8>>,
}

impl Operands {
	fn from_fn(mut byte: impl FnMut() -> u8) -> Self {
		let mut matrix = || (0..DIM * DIM).map(|_| byte()).collect::<Vec<_>>();
		let b = (0..NB).map(|_| matrix()).collect();
		let c = (0..NB)
			.map(|_| (0..NC).map(|_| matrix()).collect())
			.collect();
		let d = (0..NC).map(|_| matrix()).collect();
		Self { b, c, d }
	}

	fn packed(&self) -> Vec<u8> {
		let expand = |bytes: &Vec<u8>| PackedMatrix::from_bytes(DIM, DIM, bytes).unwrap();
		let b: Vec<_> = self.b.iter().map(expand).collect();
		let c: Vec<Vec<_>> = self
			.c
			.iter()
			.map(|c_i| c_i.iter().map(expand).collect())
			.collect();
		let d: Vec<_> = self.d.iter().map(expand).collect();

		sum_of_triple_products(&b, &c, &d).to_bytes()
	}

	fn reference(&self) -> Vec<u8> {
		let load = |bytes: &Vec<u8>| {
			let nibbles: Vec<u8> = bytes.iter().map(|&x| x & 0x0f).collect();
			Matrix::from_bytes(DIM, DIM, &nibbles).unwrap()
		};

		let mut result = Matrix::zeros(DIM, DIM);
		let mut term = Matrix::zeros(DIM, DIM);
		for (b_i, c_i) in self.b.iter().zip(&self.c) {
			let mut inner = Matrix::zeros(DIM, DIM);
			for (c_ij, d_j) in c_i.iter().zip(&self.d) {
				Matrix::mul_into(&load(c_ij), &load(d_j), &mut term);
				inner += &term;
			}
			Matrix::mul_into(&load(b_i), &inner, &mut term);
			result += &term;
		}
		result.to_bytes()
	}
}

#[test]
fn test_all_zero_operands() {
	let operands = Operands::from_fn(|| 0);
	assert_eq!(operands.packed(), vec![0; DIM * DIM]);
	assert_eq!(operands.reference(), vec![0; DIM * DIM]);
}

#[test]
fn test_all_ones_operands() {
	for value in [0x01, 0x0f, 0xff] {
		let operands = Operands::from_fn(|| value);
		assert_eq!(operands.packed(), operands.reference());
	}
}

#[test]
fn test_seeded_random_operands() {
	for seed in 0..200 {
		let mut rng = StdRng::seed_from_u64(seed);
		let operands = Operands::from_fn(|| rng.next_u32() as u8);
		assert_eq!(operands.packed(), operands.reference());
	}
}

#[test]
fn test_identity_operands() {
	let mut rng = StdRng::seed_from_u64(7);
	let identity = Matrix::identity(DIM).to_bytes();
	let mut operands = Operands::from_fn(|| rng.next_u32() as u8);
	operands.b = vec![identity.clone(); NB];
	for c_i in operands.c.iter_mut() {
		*c_i = vec![identity.clone(); NC];
	}

	// a = NB * (d_0 + d_1 + d_2), and NB is even.
	assert_eq!(operands.packed(), vec![0; DIM * DIM]);
	assert_eq!(operands.packed(), operands.reference());
}
