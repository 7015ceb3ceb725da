use num_bigint::BigUint;
use primitive_types::{H160, H256, U256};

use crate::consts::*;
use crate::gas::u256_to_biguint;
use crate::memory::to_word_size;
use crate::{ForkFlags, Gas, GasSchedule};

fn words(len: U256) -> BigUint {
	to_word_size(&u256_to_biguint(len))
}

/// SSTORE cost and refund, comparing the value stored before the write
/// with the value about to be written.
pub fn sstore_cost(current: H256, new: H256) -> (Gas, Option<Gas>) {
	if current == H256::zero() && new != H256::zero() {
		log::trace!(target: "evm", "sstore: zero to non-zero, charging set gas");
		(Gas::from(G_SSET), None)
	} else if current != H256::zero() && new == H256::zero() {
		log::trace!(target: "evm", "sstore: non-zero to zero, queueing clear refund");
		(Gas::from(G_SCLEAR), Some(Gas::from(R_SCLEAR)))
	} else {
		(Gas::from(G_SRESET), None)
	}
}

pub fn exp_cost(power: U256, schedule: &GasSchedule) -> Gas {
	#[allow(clippy::as_conversions)]
	let bytes = (power.bits() as u64 + 7) / 8;
	Gas::from(G_EXP) + Gas::from(bytes) * schedule.exp_byte
}

pub fn sha3_cost(len: U256) -> Gas {
	Gas::from(G_SHA3) + Gas::from(words(len)) * G_SHA3WORD
}

pub fn copy_cost(base: u64, len: U256) -> Gas {
	Gas::from(base) + Gas::from(words(len)) * G_COPY
}

pub fn log_cost(n: u8, len: U256) -> Gas {
	Gas::from(G_LOG) + Gas::from(G_LOGTOPIC * u64::from(n)) + Gas::from(len) * G_LOGDATA
}

/// Base cost of a CALL-family opcode plus its value transfer and
/// new account surcharges. Excludes memory and the forwarded gas.
#[allow(clippy::too_many_arguments)]
pub fn call_cost(
	target: H160,
	value: U256,
	is_call_or_callcode: bool,
	is_call: bool,
	target_exists: bool,
	target_empty: bool,
	schedule: &GasSchedule,
	flags: ForkFlags,
) -> u64 {
	let transfers_value = value != U256::zero();
	let new_account = new_cost(is_call, transfers_value, target_exists, target_empty, flags);
	if new_account != 0 {
		log::trace!(target: "evm", "call to {:?} charges new account gas", target);
	}

	schedule.call + xfer_cost(is_call_or_callcode, transfers_value) + new_account
}

fn xfer_cost(is_call_or_callcode: bool, transfers_value: bool) -> u64 {
	if is_call_or_callcode && transfers_value {
		G_CALLVALUE
	} else {
		0
	}
}

fn new_cost(
	is_call: bool,
	transfers_value: bool,
	target_exists: bool,
	target_empty: bool,
	flags: ForkFlags,
) -> u64 {
	if !is_call {
		return 0;
	}

	if flags.eip158 {
		if target_empty && transfers_value {
			G_NEWACCOUNT
		} else {
			0
		}
	} else if !target_exists {
		G_NEWACCOUNT
	} else {
		0
	}
}

/// Gas added on top of the granted gas for a value-bearing call.
pub fn call_stipend(value: U256) -> Gas {
	if value != U256::zero() {
		let stipend = Gas::from(G_CALLSTIPEND);
		event!(RecordStipend {
			stipend: stipend.clone()
		});
		stipend
	} else {
		Gas::zero()
	}
}

/// SUICIDE cost. `value` is the balance of the executing contract, which
/// moves to the beneficiary `target`.
pub fn suicide_cost(
	target: H160,
	value: U256,
	target_exists: bool,
	target_empty: bool,
	schedule: &GasSchedule,
	flags: ForkFlags,
) -> u64 {
	if !flags.eip150 {
		return 0;
	}

	let creates_target = if flags.eip158 {
		target_empty && value != U256::zero()
	} else {
		!target_exists
	};

	log::debug!(target: "evm", "suicide in favor of {:?}, exists: {}", target, target_exists);

	if creates_target {
		log::trace!(target: "evm", "suicide with new account gas topup");
		schedule.suicide + schedule.create_by_suicide
	} else {
		schedule.suicide
	}
}

/// The flat suicide refund, unless the contract is already scheduled for
/// removal in this transaction.
pub fn suicide_refund(already_removed: bool) -> Option<Gas> {
	if already_removed {
		None
	} else {
		Some(Gas::from(R_SUICIDE))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const PRE: ForkFlags = ForkFlags {
		eip150: false,
		eip158: false,
	};
	const EIP150: ForkFlags = ForkFlags {
		eip150: true,
		eip158: false,
	};
	const EIP158: ForkFlags = ForkFlags {
		eip150: true,
		eip158: true,
	};

	fn h256(v: u64) -> H256 {
		H256::from_low_u64_be(v)
	}

	#[test]
	fn sstore_classes() {
		assert_eq!(sstore_cost(h256(0), h256(1)), (Gas::from(20000u64), None));
		assert_eq!(
			sstore_cost(h256(1), h256(0)),
			(Gas::from(5000u64), Some(Gas::from(15000u64)))
		);
		assert_eq!(sstore_cost(h256(1), h256(2)), (Gas::from(5000u64), None));
		assert_eq!(sstore_cost(h256(0), h256(0)), (Gas::from(5000u64), None));
	}

	#[test]
	fn exp_charges_per_exponent_byte() {
		let schedule = &GasSchedule::EIP158;

		assert_eq!(exp_cost(U256::zero(), schedule), Gas::from(10u64));
		assert_eq!(exp_cost(U256::from(1), schedule), Gas::from(60u64));
		assert_eq!(exp_cost(U256::from(255), schedule), Gas::from(60u64));
		assert_eq!(exp_cost(U256::from(256), schedule), Gas::from(110u64));
		assert_eq!(exp_cost(U256::MAX, schedule), Gas::from(10u64 + 32 * 50));
		assert_eq!(
			exp_cost(U256::from(256), &GasSchedule::HOMESTEAD),
			Gas::from(30u64)
		);
	}

	#[test]
	fn per_word_charges_round_up() {
		assert_eq!(sha3_cost(U256::zero()), Gas::from(30u64));
		assert_eq!(sha3_cost(U256::from(33)), Gas::from(42u64));
		assert_eq!(copy_cost(3, U256::from(32)), Gas::from(6u64));
		assert_eq!(copy_cost(700, U256::from(64)), Gas::from(706u64));
	}

	#[test]
	fn log_data_is_charged_per_byte() {
		assert_eq!(log_cost(0, U256::zero()), Gas::from(375u64));
		assert_eq!(log_cost(2, U256::from(10)), Gas::from(375u64 + 750 + 80));
	}

	#[test]
	fn new_account_surcharge_by_fork() {
		let target = H160::repeat_byte(0x42);
		let call = |value: u64, exists: bool, empty: bool, flags: ForkFlags| {
			call_cost(
				target,
				U256::from(value),
				true,
				true,
				exists,
				empty,
				&GasSchedule::EIP150,
				flags,
			)
		};

		// Raw non-existence before EIP158, regardless of value.
		assert_eq!(call(0, false, true, EIP150), 700 + 25000);
		assert_eq!(call(0, true, true, EIP150), 700);

		// Emptiness and value after EIP158.
		assert_eq!(call(0, false, true, EIP158), 700);
		assert_eq!(call(1, false, true, EIP158), 700 + 9000 + 25000);
		assert_eq!(call(1, false, false, EIP158), 700 + 9000);
		assert_eq!(call(0, false, false, EIP158), 700);
	}

	#[test]
	fn callcode_and_delegatecall_never_create() {
		let target = H160::repeat_byte(0x42);
		let schedule = &GasSchedule::HOMESTEAD;

		assert_eq!(
			call_cost(target, U256::one(), true, false, false, true, schedule, PRE),
			40 + 9000
		);
		assert_eq!(
			call_cost(target, U256::zero(), false, false, false, true, schedule, PRE),
			40
		);
	}

	#[test]
	fn suicide_by_fork() {
		let target = H160::repeat_byte(0x42);
		let eip150 = &GasSchedule::EIP150;

		assert_eq!(
			suicide_cost(target, U256::one(), false, true, &GasSchedule::HOMESTEAD, PRE),
			0
		);
		assert_eq!(suicide_cost(target, U256::zero(), false, true, eip150, EIP150), 30000);
		assert_eq!(suicide_cost(target, U256::zero(), true, false, eip150, EIP150), 5000);
		assert_eq!(suicide_cost(target, U256::one(), false, true, eip150, EIP158), 30000);
		assert_eq!(suicide_cost(target, U256::zero(), false, true, eip150, EIP158), 5000);
	}

	#[test]
	fn suicide_refund_once() {
		assert_eq!(suicide_refund(false), Some(Gas::from(24000u64)));
		assert_eq!(suicide_refund(true), None);
	}

	#[test]
	fn stipend_only_with_value() {
		assert_eq!(call_stipend(U256::zero()), Gas::zero());
		assert_eq!(call_stipend(U256::one()), Gas::from(2300u64));
	}
}
