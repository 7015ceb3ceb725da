use core::cmp::max;
use core::num::NonZeroU64;

use evm_gastable_core::{ExitError, Opcode, Stack, WORD_SIZE};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::consts;
use crate::gas::u256_to_biguint;
use crate::Gas;

/// Prices growth of the linear memory: a linear charge per word plus a
/// quadratic term, `words * gas_per_word + words^2 / quad_coeff_div`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryCostModel {
	/// Linear gas paid per word of memory.
	pub gas_per_word: u64,
	/// Divisor of the quadratic term. A zero divisor is rejected, also when
	/// deserializing.
	pub quad_coeff_div: NonZeroU64,
}

impl Default for MemoryCostModel {
	fn default() -> Self {
		Self::STANDARD
	}
}

impl MemoryCostModel {
	/// Published memory pricing.
	pub const STANDARD: MemoryCostModel = MemoryCostModel {
		gas_per_word: consts::G_MEMORY,
		quad_coeff_div: match NonZeroU64::new(consts::G_QUADCOEFFDIV) {
			Some(div) => div,
			None => panic!("quadratic divisor is zero"),
		},
	};

	/// Custom pricing. `None` if `quad_coeff_div` is zero.
	pub fn new(gas_per_word: u64, quad_coeff_div: u64) -> Option<Self> {
		Some(Self {
			gas_per_word,
			quad_coeff_div: NonZeroU64::new(quad_coeff_div)?,
		})
	}

	/// Total gas paid for a memory of `words` words.
	pub fn total(&self, words: &BigUint) -> Gas {
		let linear = words * self.gas_per_word;
		let quadratic = (words * words) / self.quad_coeff_div.get();
		Gas::from(linear + quadratic)
	}

	/// Incremental gas for growing a memory of `current_words` so that it
	/// covers `requested_bytes`. Zero when no growth is needed.
	///
	/// Charged as a difference of totals, so the floor in the quadratic
	/// term never rounds differently across split expansions.
	pub fn cost(&self, current_words: &BigUint, requested_bytes: &BigUint) -> Gas {
		if requested_bytes.is_zero() {
			return Gas::zero();
		}

		let new_words = to_word_size(requested_bytes);
		if &new_words <= current_words {
			return Gas::zero();
		}

		self.total(&new_words).saturating_sub(&self.total(current_words))
	}
}

/// Number of whole words needed to hold `size` bytes.
pub fn to_word_size(size: &BigUint) -> BigUint {
	size.div_ceil(&BigUint::from(WORD_SIZE))
}

/// Bytes of memory `opcode` needs to cover, derived from its operands.
/// Zero for opcodes that do not touch memory and for empty regions.
pub fn memory_size(opcode: Opcode, stack: &Stack) -> Result<BigUint, ExitError> {
	if opcode.is_log().is_some() {
		return region(stack, 0, 1);
	}

	Ok(match opcode {
		Opcode::SHA3 | Opcode::RETURN => region(stack, 0, 1)?,
		Opcode::CALLDATACOPY | Opcode::CODECOPY => region(stack, 0, 2)?,
		Opcode::EXTCODECOPY => region(stack, 1, 3)?,
		Opcode::MLOAD | Opcode::MSTORE => fixed_region(stack, 0, 32)?,
		Opcode::MSTORE8 => fixed_region(stack, 0, 1)?,
		Opcode::CREATE => region(stack, 1, 2)?,
		Opcode::CALL | Opcode::CALLCODE => max(region(stack, 3, 4)?, region(stack, 5, 6)?),
		Opcode::DELEGATECALL => max(region(stack, 2, 3)?, region(stack, 4, 5)?),
		_ => BigUint::zero(),
	})
}

fn region(stack: &Stack, offset: usize, len: usize) -> Result<BigUint, ExitError> {
	let len = stack.peek(len)?;
	if len.is_zero() {
		return Ok(BigUint::zero());
	}

	Ok(u256_to_biguint(stack.peek(offset)?) + u256_to_biguint(len))
}

fn fixed_region(stack: &Stack, offset: usize, len: u64) -> Result<BigUint, ExitError> {
	Ok(u256_to_biguint(stack.peek(offset)?) + len)
}
