// Copyright 2024-2025 Irreducible Inc.

/// Returns early with the given error, converted into the function's error type.
///
/// With the `bail_panic` feature enabled the macro panics instead, which gives a backtrace at
/// the exact point a precondition was rejected.
#[cfg(feature = "bail_panic")]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		panic!("{}", $err);
	};
}

#[cfg(not(feature = "bail_panic"))]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		return Err($err.into());
	};
}

/// Bails with `$err` unless `$cond` holds.
#[macro_export]
macro_rules! ensure {
	($cond:expr, $err:expr) => {
		if !$cond {
			$crate::bail!($err);
		}
	};
}

#[cfg(test)]
mod tests {
	#[derive(Debug, PartialEq, Eq)]
	struct TooLarge(usize);

	impl std::fmt::Display for TooLarge {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			write!(f, "{} is too large", self.0)
		}
	}

	fn check_small(value: usize) -> Result<usize, TooLarge> {
		crate::ensure!(value < 16, TooLarge(value));
		Ok(value)
	}

	#[test]
	fn test_ensure_passes() {
		assert_eq!(check_small(15), Ok(15));
	}

	#[cfg(not(feature = "bail_panic"))]
	#[test]
	fn test_ensure_bails() {
		assert_eq!(check_small(16), Err(TooLarge(16)));
	}
}
