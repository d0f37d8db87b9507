// Copyright 2024-2025 Irreducible Inc.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{thread_rng, RngCore};
use xgf16_field::{PackedGF16, GF16};

fn scalar_mul(c: &mut Criterion) {
	let mut rng = thread_rng();
	let a = GF16::random(&mut rng);
	let b = GF16::random(&mut rng);
	c.bench_function("GF16::mul", |bench| bench.iter(|| black_box(a) * black_box(b)));
}

fn packed_mul(c: &mut Criterion) {
	let mut rng = thread_rng();
	let a = PackedGF16::expand(rng.next_u32() as u8);
	let b = PackedGF16::expand(rng.next_u32() as u8);
	c.bench_function("PackedGF16::mul", |bench| bench.iter(|| black_box(a) * black_box(b)));
}

fn packed_mul_unreduced(c: &mut Criterion) {
	let mut rng = thread_rng();
	let a = PackedGF16::expand(rng.next_u32() as u8);
	let b = PackedGF16::expand(rng.next_u32() as u8);
	c.bench_function("PackedGF16::mul_unreduced", |bench| {
		bench.iter(|| black_box(a).mul_unreduced(black_box(b)))
	});
}

fn codec(c: &mut Criterion) {
	let mut rng = thread_rng();
	let value = rng.next_u32() as u8;
	c.bench_function("PackedGF16::expand", |bench| {
		bench.iter(|| PackedGF16::expand(black_box(value)))
	});
	let packed = PackedGF16::expand(value);
	c.bench_function("PackedGF16::compress", |bench| bench.iter(|| black_box(packed).compress()));
}

criterion_group!(multiply, scalar_mul, packed_mul, packed_mul_unreduced);
criterion_group!(convert, codec);
criterion_main!(multiply, convert);
