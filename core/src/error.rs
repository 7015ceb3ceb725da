use crate::Opcode;

/// Exit error reason.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExitError {
	/// Trying to pop from an empty stack.
	StackUnderflow,
	/// Trying to push into a stack over stack limit.
	StackOverflow,
	/// Memory range is beyond the addressable limit.
	InvalidRange,
	/// Opcode has no assigned cost.
	InvalidOpcode(Opcode),

	/// Execution runs out of gas.
	OutOfGas,
}

impl core::fmt::Display for ExitError {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			ExitError::StackUnderflow => write!(f, "stack underflow"),
			ExitError::StackOverflow => write!(f, "stack overflow"),
			ExitError::InvalidRange => write!(f, "invalid memory range"),
			ExitError::InvalidOpcode(opcode) => write!(f, "invalid opcode {}", opcode),
			ExitError::OutOfGas => write!(f, "out of gas"),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for ExitError {}
