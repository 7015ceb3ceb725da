use super::Backend;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;
use primitive_types::{H160, H256, U256};

/// Account information of a memory backend.
#[derive(Default, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryAccount {
	/// Account nonce.
	pub nonce: U256,
	/// Account balance.
	pub balance: U256,
	/// Full account storage.
	pub storage: BTreeMap<H256, H256>,
	/// Account code.
	pub code: Vec<u8>,
}

impl MemoryAccount {
	/// Zero nonce, zero balance and no code.
	pub fn is_empty(&self) -> bool {
		self.nonce.is_zero() && self.balance.is_zero() && self.code.is_empty()
	}
}

/// Memory backend, storing all state values in a `BTreeMap` in memory,
/// together with the contracts scheduled for removal by SUICIDE in the
/// current transaction.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
	state: BTreeMap<H160, MemoryAccount>,
	deleted: BTreeSet<H160>,
}

impl MemoryBackend {
	/// Create a new memory backend.
	pub fn new(state: BTreeMap<H160, MemoryAccount>) -> Self {
		Self {
			state,
			deleted: BTreeSet::new(),
		}
	}

	/// Get the underlying `BTreeMap` storing the state.
	pub fn state(&self) -> &BTreeMap<H160, MemoryAccount> {
		&self.state
	}

	/// Account at `address`, created empty if missing.
	pub fn account_mut(&mut self, address: H160) -> &mut MemoryAccount {
		self.state.entry(address).or_default()
	}

	/// Write a storage slot. Zero values are removed.
	pub fn set_storage(&mut self, address: H160, index: H256, value: H256) {
		let account = self.account_mut(address);
		if value == H256::default() {
			account.storage.remove(&index);
		} else {
			account.storage.insert(index, value);
		}
	}

	/// Schedule `address` for removal at the end of the transaction.
	/// Returns `false` if it was already scheduled.
	pub fn schedule_deletion(&mut self, address: H160) -> bool {
		let inserted = self.deleted.insert(address);
		if !inserted {
			log::trace!(target: "evm", "{:?} already scheduled for deletion", address);
		}
		inserted
	}

	/// Contracts scheduled for removal so far.
	pub fn deletions(&self) -> &BTreeSet<H160> {
		&self.deleted
	}

	/// End the transaction: remove every scheduled contract and clear the
	/// schedule.
	pub fn apply_deletions(&mut self) {
		for address in core::mem::take(&mut self.deleted) {
			self.state.remove(&address);
		}
	}
}

impl Backend for MemoryBackend {
	fn storage(&self, address: H160, index: H256) -> H256 {
		self.state
			.get(&address)
			.map(|v| v.storage.get(&index).cloned().unwrap_or_default())
			.unwrap_or_default()
	}

	fn balance(&self, address: H160) -> U256 {
		self.state
			.get(&address)
			.map(|a| a.balance)
			.unwrap_or_default()
	}

	fn exists(&self, address: H160) -> bool {
		self.state.contains_key(&address)
	}

	fn is_empty(&self, address: H160) -> bool {
		self.state
			.get(&address)
			.map(MemoryAccount::is_empty)
			.unwrap_or(true)
	}

	fn deleted(&self, address: H160) -> bool {
		self.deleted.contains(&address)
	}
}
