//! State the gas table reads from.

mod memory;

pub use self::memory::{MemoryAccount, MemoryBackend};
pub use evm_gastable_gasometer::Backend;
