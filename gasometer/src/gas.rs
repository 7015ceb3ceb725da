use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul};
use core::str::FromStr;

use num_bigint::{BigInt, BigUint, ParseBigIntError};
use num_traits::{Num, ToPrimitive, Zero};
use primitive_types::U256;

/// Unbounded-precision, non-negative gas amount.
///
/// Every cost the table hands out is an independently owned value. There is
/// no subtraction that can go below zero: use [`Gas::saturating_sub`].
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gas(BigUint);

impl Gas {
	pub fn zero() -> Gas {
		Gas(BigUint::zero())
	}

	pub fn is_zero(&self) -> bool {
		self.0.is_zero()
	}

	/// `self - other`, or zero when `other` is larger.
	pub fn saturating_sub(&self, other: &Gas) -> Gas {
		if self.0 > other.0 {
			Gas(&self.0 - &other.0)
		} else {
			Gas::zero()
		}
	}

	/// Value as a stack word, if it fits in 256 bits.
	pub fn to_u256(&self) -> Option<U256> {
		if self.0.bits() > 256 {
			return None;
		}
		Some(U256::from_big_endian(&self.0.to_bytes_be()))
	}

	pub fn to_u64(&self) -> Option<u64> {
		self.0.to_u64()
	}

	pub fn as_biguint(&self) -> &BigUint {
		&self.0
	}
}

/// Widen a stack word to an unbounded integer.
pub fn u256_to_biguint(value: U256) -> BigUint {
	let mut buf = [0u8; 32];
	value.to_big_endian(&mut buf);
	BigUint::from_bytes_be(&buf)
}

impl From<u64> for Gas {
	fn from(val: u64) -> Gas {
		Gas(BigUint::from(val))
	}
}

impl From<U256> for Gas {
	fn from(val: U256) -> Gas {
		Gas(u256_to_biguint(val))
	}
}

impl From<BigUint> for Gas {
	fn from(val: BigUint) -> Gas {
		Gas(val)
	}
}

impl From<Gas> for BigInt {
	fn from(val: Gas) -> BigInt {
		BigInt::from(val.0)
	}
}

impl FromStr for Gas {
	type Err = ParseBigIntError;

	/// Parses decimal, or hex with a `0x` prefix.
	fn from_str(s: &str) -> Result<Gas, ParseBigIntError> {
		match s.strip_prefix("0x") {
			Some(hex) => BigUint::from_str_radix(hex, 16).map(Gas),
			None => BigUint::from_str_radix(s, 10).map(Gas),
		}
	}
}

impl fmt::Display for Gas {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Add for Gas {
	type Output = Gas;

	fn add(self, other: Gas) -> Gas {
		Gas(self.0 + other.0)
	}
}

impl<'a> Add<&'a Gas> for Gas {
	type Output = Gas;

	fn add(self, other: &'a Gas) -> Gas {
		Gas(self.0 + &other.0)
	}
}

impl Add<u64> for Gas {
	type Output = Gas;

	fn add(self, other: u64) -> Gas {
		Gas(self.0 + other)
	}
}

impl AddAssign for Gas {
	fn add_assign(&mut self, other: Gas) {
		self.0 += other.0
	}
}

impl AddAssign<u64> for Gas {
	fn add_assign(&mut self, other: u64) {
		self.0 += other
	}
}

impl Mul<u64> for Gas {
	type Output = Gas;

	fn mul(self, other: u64) -> Gas {
		Gas(self.0 * other)
	}
}

impl Div<u64> for &Gas {
	type Output = Gas;

	fn div(self, other: u64) -> Gas {
		Gas(&self.0 / other)
	}
}
