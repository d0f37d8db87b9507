// Copyright 2024-2025 Irreducible Inc.

//! Evaluates a = sum_i b_i * (sum_j c_ij * d_j) over GF(16) on matrices drawn from SHAKE256 and
//! checks the packed result against the table-driven reference.

use anyhow::{ensure, Result};
use clap::{value_parser, Parser};
use tiny_keccak::{Hasher, Shake, Xof};
use xgf16_math::{sum_of_triple_products, Matrix, PackedMatrix};
use xgf16_utils::tracing::init_tracing;

const SEED_LEN: usize = 16;

#[derive(Debug, Parser)]
struct Args {
	/// The SHAKE256 seed as hex, zero-padded to 16 bytes.
	#[arg(long, default_value = "", value_parser = parse_seed)]
	seed: [u8; SEED_LEN],
	/// The number of b matrices.
	#[arg(long, default_value_t = 2, value_parser = value_parser!(u32).range(1..))]
	nb: u32,
	/// The number of d matrices.
	#[arg(long, default_value_t = 3, value_parser = value_parser!(u32).range(1..))]
	nc: u32,
	/// The matrix dimension.
	#[arg(long, default_value_t = 4, value_parser = value_parser!(u32).range(1..=16))]
	dim: u32,
}

fn parse_seed(hex: &str) -> Result<[u8; SEED_LEN], String> {
	if hex.len() % 2 != 0 || hex.len() > 2 * SEED_LEN {
		return Err(format!("expected at most {SEED_LEN} hex-encoded bytes"));
	}
	let mut seed = [0; SEED_LEN];
	for (byte, chunk) in seed.iter_mut().zip(hex.as_bytes().chunks(2)) {
		let digits = std::str::from_utf8(chunk).map_err(|e| e.to_string())?;
		*byte = u8::from_str_radix(digits, 16).map_err(|e| e.to_string())?;
	}
	Ok(seed)
}

/// Operand layout within the SHAKE256 stream, one byte per element.
struct Offsets {
	n2: usize,
}

impl Offsets {
	fn b(&self, i: usize) -> usize {
		20 + i * self.n2
	}

	fn c(&self, i: usize, j: usize) -> usize {
		200 + 30 * i + j * self.n2
	}

	fn d(&self, j: usize) -> usize {
		500 + j * self.n2
	}

	fn stream_len(&self, nb: usize, nc: usize) -> usize {
		[self.b(nb), self.c(nb - 1, nc), self.d(nc)]
			.into_iter()
			.max()
			.unwrap_or_default()
	}
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_tracing();

	let (nb, nc, dim) = (args.nb as usize, args.nc as usize, args.dim as usize);
	let offsets = Offsets { n2: dim * dim };

	let mut stream = vec![0; offsets.stream_len(nb, nc)];
	let mut shake = Shake::v256();
	shake.update(&args.seed);
	shake.squeeze(&mut stream);

	let bytes = |offset: usize| &stream[offset..offset + offsets.n2];

	let sample_span = tracing::info_span!("Sampling operands", nb, nc, dim).entered();
	let b = (0..nb)
		.map(|i| PackedMatrix::from_bytes(dim, dim, bytes(offsets.b(i))))
		.collect::<Result<Vec<_>, _>>()?;
	let c = (0..nb)
		.map(|i| {
			(0..nc)
				.map(|j| PackedMatrix::from_bytes(dim, dim, bytes(offsets.c(i, j))))
				.collect::<Result<Vec<_>, _>>()
		})
		.collect::<Result<Vec<_>, _>>()?;
	let d = (0..nc)
		.map(|j| PackedMatrix::from_bytes(dim, dim, bytes(offsets.d(j))))
		.collect::<Result<Vec<_>, _>>()?;
	drop(sample_span);

	let result = sum_of_triple_products(&b, &c, &d).to_bytes();

	println!("Result:");
	for byte in &result {
		print!("{byte:02X} ");
	}
	println!();

	let check_span = tracing::info_span!("Table-driven check").entered();
	let mut expected = Matrix::zeros(dim, dim);
	let mut term = Matrix::zeros(dim, dim);
	for (b_i, c_i) in b.iter().zip(&c) {
		let mut inner = Matrix::zeros(dim, dim);
		for (c_ij, d_j) in c_i.iter().zip(&d) {
			Matrix::mul_into(&Matrix::from(c_ij), &Matrix::from(d_j), &mut term);
			inner += &term;
		}
		Matrix::mul_into(&Matrix::from(b_i), &inner, &mut term);
		expected += &term;
	}
	drop(check_span);

	ensure!(result == expected.to_bytes(), "packed result differs from the table-driven reference");
	tracing::info!("packed result matches the table-driven reference");

	Ok(())
}
