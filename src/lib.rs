//! Fork-aware gas metering for the Ethereum Virtual Machine.

#![deny(warnings)]
#![forbid(unsafe_code, unused_variables)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use evm_gastable_core::*;
pub use evm_gastable_gasometer as gasometer;

pub mod backend;
pub mod executor;
