//! Opcode, stack and memory primitives the gas table peeks at.

#![deny(warnings)]
#![forbid(unsafe_code, unused_variables)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
mod memory;
mod opcode;
mod stack;

pub use crate::error::ExitError;
pub use crate::memory::{Memory, WORD_SIZE};
pub use crate::opcode::Opcode;
pub use crate::stack::{Stack, STACK_LIMIT};
