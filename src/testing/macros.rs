//! Assertion macros that return an error instead of panicking.
//!
//! Tests return [`testing::Result`](super::Result), so a failed assertion shows up as an
//! `Err` with the stringified condition and, where possible, both operands.

#![allow(unused_macros, unused_macro_rules)]

macro_rules! assert {
	($cond:expr $(,)?) => {
		if !($cond) {
			anyhow::bail!("assertion failed: `{}`", std::stringify!($cond));
		}
	};
	($cond:expr, $msg:literal $(, $($fmt:tt)*)?) => {
		if !($cond) {
			anyhow::bail!(
				"assertion failed: `{}` ({})",
				std::stringify!($cond),
				std::format_args!($msg $(, $($fmt)*)?),
			);
		}
	};
}

macro_rules! assert_eq {
	($lhs:expr, $rhs:expr $(,)?) => {
		match (&$lhs, &$rhs) {
			(lhs, rhs) => {
				if !(*lhs == *rhs) {
					anyhow::bail!(
						"assertion failed: `{}` == `{}`\n  lhs: {:?}\n  rhs: {:?}",
						std::stringify!($lhs),
						std::stringify!($rhs),
						lhs,
						rhs,
					);
				}
			},
		}
	};
	($lhs:expr, $rhs:expr, $msg:literal $(, $($fmt:tt)*)?) => {
		match (&$lhs, &$rhs) {
			(lhs, rhs) => {
				if !(*lhs == *rhs) {
					anyhow::bail!(
						"assertion failed: `{}` == `{}` ({})\n  lhs: {:?}\n  rhs: {:?}",
						std::stringify!($lhs),
						std::stringify!($rhs),
						std::format_args!($msg $(, $($fmt)*)?),
						lhs,
						rhs,
					);
				}
			},
		}
	};
}

macro_rules! assert_matches {
	($expr:expr, $pat:pat $(if $guard:expr)? $(,)?) => {
		if !std::matches!($expr, $pat $(if $guard)?) {
			anyhow::bail!(
				"assertion failed: `{}` does not match `{}`",
				std::stringify!($expr),
				std::stringify!($pat),
			);
		}
	};
}

pub(crate) use {assert, assert_eq, assert_matches};
