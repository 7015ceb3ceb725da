//! Fork policy: which protocol upgrades are active at a block height.

use primitive_types::U256;

/// Activation heights of the upgrades that change gas rules. `None` means
/// the upgrade never activates on this chain.
///
/// EIP158 builds on EIP150: wherever EIP158 is active EIP150 is treated as
/// active too, even if `eip150_block` is later or missing.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainConfig {
	/// EIP150: state access repricing and the all-but-one-64th call rule.
	pub eip150_block: Option<U256>,
	/// EIP158: empty-account semantics and the EXP byte repricing.
	pub eip158_block: Option<U256>,
}

impl ChainConfig {
	/// Ethereum mainnet activation heights.
	pub fn mainnet() -> Self {
		Self {
			eip150_block: Some(U256::from(2_463_000u64)),
			eip158_block: Some(U256::from(2_675_000u64)),
		}
	}

	/// Every upgrade active from genesis.
	pub fn all_active() -> Self {
		Self {
			eip150_block: Some(U256::zero()),
			eip158_block: Some(U256::zero()),
		}
	}

	/// No upgrade ever active.
	pub const fn legacy() -> Self {
		Self {
			eip150_block: None,
			eip158_block: None,
		}
	}

	pub fn is_eip150(&self, number: U256) -> bool {
		is_active(self.eip150_block, number) || self.is_eip158(number)
	}

	pub fn is_eip158(&self, number: U256) -> bool {
		is_active(self.eip158_block, number)
	}

	/// Derive the flags every opcode of the block at `number` is priced with.
	pub fn flags(&self, number: U256) -> ForkFlags {
		ForkFlags {
			eip150: self.is_eip150(number),
			eip158: self.is_eip158(number),
		}
	}
}

fn is_active(activation: Option<U256>, number: U256) -> bool {
	match activation {
		Some(block) => number >= block,
		None => false,
	}
}

/// Upgrade rules active for one execution. Derived once per block height
/// and threaded into every cost computation of that execution.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ForkFlags {
	pub eip150: bool,
	pub eip158: bool,
}
