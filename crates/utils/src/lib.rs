// Copyright 2024-2025 Irreducible Inc.

//! Small helpers shared by the xgf16 crates: error-return macros and tracing setup.

pub mod error_utils;
pub mod tracing;
