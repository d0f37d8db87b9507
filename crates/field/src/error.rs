// Copyright 2024-2025 Irreducible Inc.

/// Error thrown when a field operation fails.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
	/// Thrown when trying to initialize a field element with a value that does not fit in a
	/// nibble.
	#[error("value {0:#x} is not in the field")]
	NotInField(u8),
}

/// Error thrown when a packing layout cannot hold the convolutions it has to represent.
#[derive(Clone, Copy, thiserror::Error, Debug, PartialEq, Eq)]
pub enum LayoutError {
	#[error("the field degree must be at least 1")]
	ZeroDegree,
	#[error("the reduction polynomial tail {tail:#b} has degree not below the field degree {degree}")]
	TailTooWide { tail: u32, degree: u32 },
	#[error("the reduction polynomial has no constant term")]
	MissingConstantTerm,
	#[error("a {lane_bits}-bit lane cannot hold a sum of {degree} partial products")]
	LaneTooNarrow { lane_bits: u32, degree: u32 },
	#[error("a product needs {required_bits} bits but the packed word has {word_bits}")]
	WordTooNarrow { required_bits: u32, word_bits: u32 },
}
