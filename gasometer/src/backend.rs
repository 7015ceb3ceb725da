use primitive_types::{H160, H256, U256};

/// Read-only view of the state the gas table consults. All reads are
/// synchronous and reflect the state before the priced opcode runs.
#[auto_impl::auto_impl(&, &mut)]
pub trait Backend {
	/// Current value stored at `index` of `address`.
	fn storage(&self, address: H160, index: H256) -> H256;
	/// Balance of `address`.
	fn balance(&self, address: H160) -> U256;
	/// Whether `address` exists in the state.
	fn exists(&self, address: H160) -> bool;
	/// Whether `address` has zero nonce, zero balance and no code.
	fn is_empty(&self, address: H160) -> bool;
	/// Whether `address` is already scheduled for removal in this transaction.
	fn deleted(&self, address: H160) -> bool;
}
