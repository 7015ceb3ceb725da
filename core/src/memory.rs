use crate::ExitError;
use alloc::vec::Vec;
use core::cmp::min;
use core::ops::{BitAnd, Not};
use primitive_types::U256;

/// Size of a memory word in bytes.
pub const WORD_SIZE: usize = 32;

/// A sequencial memory. It uses Rust's `Vec` for internal
/// representation. The length only ever grows, in whole words.
#[derive(Clone, Debug)]
pub struct Memory {
	data: Vec<u8>,
	limit: usize,
}

impl Memory {
	/// Create a new memory with the given limit.
	pub fn new(limit: usize) -> Self {
		Self {
			data: Vec::new(),
			limit,
		}
	}

	/// Memory limit.
	pub fn limit(&self) -> usize {
		self.limit
	}

	/// Get the length of the current memory range.
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Return true if current memory range is zero.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Return the full memory.
	pub fn data(&self) -> &Vec<u8> {
		&self.data
	}

	/// Resize the memory, making it cover to `end`, with 32 bytes as the step.
	pub fn resize_end(&mut self, end: U256) -> Result<(), ExitError> {
		if end <= U256::from(self.data.len()) {
			return Ok(());
		}

		let new_end = next_multiple_of_32(end).ok_or(ExitError::InvalidRange)?;
		if new_end > U256::from(self.limit) {
			return Err(ExitError::InvalidRange);
		}

		self.data.resize(new_end.as_usize(), 0);
		Ok(())
	}

	/// Get memory region at given offset. Bytes beyond the current length
	/// read as zero.
	pub fn get(&self, offset: usize, size: usize) -> Vec<u8> {
		let mut ret = alloc::vec![0; size];

		if offset < self.data.len() {
			let end = min(offset.saturating_add(size), self.data.len());
			ret[..end - offset].copy_from_slice(&self.data[offset..end]);
		}

		ret
	}

	/// Set memory region at given offset. The memory must already cover the region.
	pub fn set(&mut self, offset: usize, value: &[u8]) -> Result<(), ExitError> {
		let end = offset
			.checked_add(value.len())
			.ok_or(ExitError::InvalidRange)?;
		if end > self.data.len() {
			return Err(ExitError::InvalidRange);
		}

		self.data[offset..end].copy_from_slice(value);
		Ok(())
	}
}

/// Rounds up `x` to the closest multiple of 32. If `x % 32 == 0` then `x` is returned.
#[inline]
fn next_multiple_of_32(x: U256) -> Option<U256> {
	let r = x.low_u32().bitand(31).not().wrapping_add(1).bitand(31);
	x.checked_add(r.into())
}
