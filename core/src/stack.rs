use crate::ExitError;
use alloc::vec::Vec;
use primitive_types::{H160, H256, U256};

/// Maximum depth of the machine stack.
pub const STACK_LIMIT: usize = 1024;

/// EVM stack.
#[derive(Clone, Debug)]
pub struct Stack {
	data: Vec<U256>,
	limit: usize,
}

impl Default for Stack {
	fn default() -> Self {
		Self::new(STACK_LIMIT)
	}
}

impl Stack {
	/// Create a new stack with given limit.
	#[must_use]
	pub const fn new(limit: usize) -> Self {
		Self {
			data: Vec::new(),
			limit,
		}
	}

	/// Stack limit.
	#[inline]
	#[must_use]
	pub const fn limit(&self) -> usize {
		self.limit
	}

	/// Stack length.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Whether the stack is empty.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Pop a value from the stack. If the stack is already empty, returns the
	/// `StackUnderflow` error.
	///
	/// # Errors
	/// Return `ExitError`
	#[inline]
	pub fn pop(&mut self) -> Result<U256, ExitError> {
		self.data.pop().ok_or(ExitError::StackUnderflow)
	}

	/// Push a new value into the stack. If it will exceed the stack limit,
	/// returns `StackOverflow` error and leaves the stack unchanged.
	///
	/// # Errors
	/// Return `ExitError`
	#[inline]
	pub fn push(&mut self, value: U256) -> Result<(), ExitError> {
		if self.data.len() + 1 > self.limit {
			return Err(ExitError::StackOverflow);
		}
		self.data.push(value);
		Ok(())
	}

	/// Peek a value at given index for the stack, where the top of
	/// the stack is at index `0`. If the index is too large,
	/// `StackUnderflow` is returned.
	///
	/// # Errors
	/// Return `ExitError`
	#[inline]
	pub fn peek(&self, no_from_top: usize) -> Result<U256, ExitError> {
		if self.data.len() > no_from_top {
			Ok(self.data[self.data.len() - no_from_top - 1])
		} else {
			Err(ExitError::StackUnderflow)
		}
	}

	/// Peek a value as a storage key.
	///
	/// # Errors
	/// Return `ExitError`
	#[inline]
	pub fn peek_h256(&self, no_from_top: usize) -> Result<H256, ExitError> {
		self.peek(no_from_top).map(|it| {
			let mut res = H256([0; 32]);
			it.to_big_endian(&mut res.0);
			res
		})
	}

	/// Peek a value as an account address, keeping the low 20 bytes.
	///
	/// # Errors
	/// Return `ExitError`
	#[inline]
	pub fn peek_address(&self, no_from_top: usize) -> Result<H160, ExitError> {
		self.peek_h256(no_from_top).map(H160::from)
	}

	/// Set a value at given index for the stack, where the top of the
	/// stack is at index `0`. If the index is too large,
	/// `StackUnderflow` is returned.
	///
	/// # Errors
	/// Return `ExitError`
	#[inline]
	pub fn set(&mut self, no_from_top: usize, val: U256) -> Result<(), ExitError> {
		if self.data.len() > no_from_top {
			let len = self.data.len();
			self.data[len - no_from_top - 1] = val;
			Ok(())
		} else {
			Err(ExitError::StackUnderflow)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn peek_counts_from_top() {
		let mut stack = Stack::default();
		stack.push(U256::from(1)).unwrap();
		stack.push(U256::from(2)).unwrap();

		assert_eq!(stack.peek(0), Ok(U256::from(2)));
		assert_eq!(stack.peek(1), Ok(U256::from(1)));
		assert_eq!(stack.peek(2), Err(ExitError::StackUnderflow));
	}

	#[test]
	fn push_respects_limit() {
		let mut stack = Stack::new(1);
		stack.push(U256::one()).unwrap();
		assert_eq!(stack.push(U256::one()), Err(ExitError::StackOverflow));
		assert_eq!(stack.len(), 1);
	}

	#[test]
	fn address_keeps_low_bytes() {
		let mut stack = Stack::default();
		stack.push(U256::MAX).unwrap();
		assert_eq!(stack.peek_address(0), Ok(H160::repeat_byte(0xff)));

		stack.set(0, U256::from(0x1234)).unwrap();
		assert_eq!(stack.peek_address(0), Ok(H160::from_low_u64_be(0x1234)));
	}
}
