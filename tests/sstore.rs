
use evm_gastable::backend::MemoryBackend;
use evm_gastable::gasometer::{ChainConfig, Gas, GasTable};
use evm_gastable::Opcode;
use mock::{Frame, CONTRACT};
use primitive_types::{H256, U256};

fn backend_with(key: u64, value: u64) -> MemoryBackend {
	let mut backend = MemoryBackend::default();
	backend.set_storage(
		CONTRACT,
		H256::from_low_u64_be(key),
		H256::from_low_u64_be(value),
	);
	backend
}

fn sstore(backend: &MemoryBackend, key: u64, value: u64) -> evm_gastable::gasometer::Cost {
	let table = GasTable::default();
	let mut frame = Frame::new(&table, &ChainConfig::mainnet(), 3_000_000, 100_000);
	frame
		.run(Opcode::SSTORE, &[U256::from(key), U256::from(value)], backend)
		.unwrap()
}

#[test]
fn zero_to_nonzero_charges_set() {
	let cost = sstore(&MemoryBackend::default(), 1, 1);
	assert_eq!(cost.gas, Gas::from(20000u64));
	assert_eq!(cost.refund, None);
}

#[test]
fn nonzero_to_zero_charges_clear_and_refunds() {
	let cost = sstore(&backend_with(1, 5), 1, 0);
	assert_eq!(cost.gas, Gas::from(5000u64));
	assert_eq!(cost.refund, Some(Gas::from(15000u64)));
}

#[test]
fn nonzero_to_nonzero_charges_reset() {
	let cost = sstore(&backend_with(1, 5), 1, 6);
	assert_eq!(cost.gas, Gas::from(5000u64));
	assert_eq!(cost.refund, None);
}

#[test]
fn zero_to_zero_charges_reset() {
	let cost = sstore(&MemoryBackend::default(), 1, 0);
	assert_eq!(cost.gas, Gas::from(5000u64));
	assert_eq!(cost.refund, None);
}

#[test]
fn clearing_two_slots_refunds_twice() {
	let table = GasTable::default();
	let mut backend = backend_with(1, 5);
	backend.set_storage(CONTRACT, H256::from_low_u64_be(2), H256::from_low_u64_be(7));

	let mut frame = Frame::new(&table, &ChainConfig::mainnet(), 3_000_000, 100_000);
	for key in [1u64, 2] {
		frame
			.run(Opcode::SSTORE, &[U256::from(key), U256::zero()], &backend)
			.unwrap();
	}

	assert_eq!(frame.gasometer.refunds().credited(), Gas::from(30000u64));
	// Capped at half of the 10000 used.
	assert_eq!(frame.gasometer.effective_refund(), Gas::from(5000u64));
}
