use crate::ForkFlags;

/// Fork-dependent prices of the state access, call and suicide opcodes.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GasSchedule {
	/// Gas paid for EXTCODESIZE.
	pub ext_code_size: u64,
	/// Base gas paid for EXTCODECOPY.
	pub ext_code_copy: u64,
	/// Gas paid for BALANCE.
	pub balance: u64,
	/// Gas paid for SLOAD.
	pub sload: u64,
	/// Base gas paid for CALL, CALLCODE and DELEGATECALL.
	pub call: u64,
	/// Base gas paid for SUICIDE.
	pub suicide: u64,
	/// Gas paid for SUICIDE when the beneficiary has to be created.
	pub create_by_suicide: u64,
	/// Gas paid for EXP for every byte of the exponent.
	pub exp_byte: u64,
}

impl GasSchedule {
	/// Prices before any upgrade. The state access entries equal the legacy
	/// fixed tiers.
	pub const HOMESTEAD: GasSchedule = GasSchedule {
		ext_code_size: 20,
		ext_code_copy: 20,
		balance: 20,
		sload: 50,
		call: 40,
		suicide: 0,
		create_by_suicide: 0,
		exp_byte: 10,
	};

	/// EIP150 state access repricing.
	pub const EIP150: GasSchedule = GasSchedule {
		ext_code_size: 700,
		ext_code_copy: 700,
		balance: 400,
		sload: 200,
		call: 700,
		suicide: 5000,
		create_by_suicide: 25000,
		exp_byte: 10,
	};

	/// EIP158 keeps the EIP150 prices and reprices EXP.
	pub const EIP158: GasSchedule = GasSchedule {
		ext_code_size: 700,
		ext_code_copy: 700,
		balance: 400,
		sload: 200,
		call: 700,
		suicide: 5000,
		create_by_suicide: 25000,
		exp_byte: 50,
	};
}

/// The three schedules a ruleset switches between.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedules {
	pub homestead: GasSchedule,
	pub eip150: GasSchedule,
	pub eip158: GasSchedule,
}

impl Default for Schedules {
	fn default() -> Self {
		Self {
			homestead: GasSchedule::HOMESTEAD,
			eip150: GasSchedule::EIP150,
			eip158: GasSchedule::EIP158,
		}
	}
}

impl Schedules {
	/// Schedule in force under `flags`. The latest active upgrade wins.
	pub fn select(&self, flags: ForkFlags) -> &GasSchedule {
		if flags.eip158 {
			&self.eip158
		} else if flags.eip150 {
			&self.eip150
		} else {
			&self.homestead
		}
	}
}
