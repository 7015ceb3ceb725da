//! Gas metering for EVM opcodes: per-opcode costs, memory expansion,
//! call gas forwarding, fork-dependent pricing and refund accounting.

#![deny(warnings)]
#![forbid(unsafe_code, unused_variables)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "tracing")]
pub mod tracing;

#[cfg(feature = "tracing")]
macro_rules! event {
	($x:expr) => {{
		use crate::tracing::Event::*;
		$x.emit();
	}};
}

#[cfg(not(feature = "tracing"))]
macro_rules! event {
	($x:expr) => {};
}

mod backend;
pub mod consts;
mod costs;
mod fork;
mod forward;
mod gas;
mod memory;
mod refund;
mod schedule;

pub use crate::backend::Backend;
pub use crate::costs::call_stipend;
pub use crate::fork::{ChainConfig, ForkFlags};
pub use crate::forward::call_gas;
pub use crate::gas::{u256_to_biguint, Gas};
pub use crate::memory::{memory_size, to_word_size, MemoryCostModel};
pub use crate::refund::RefundLedger;
pub use crate::schedule::{GasSchedule, Schedules};
pub use num_bigint::BigUint;

use evm_gastable_core::{ExitError, Memory, Opcode, Stack};
use primitive_types::{H160, H256, U256};

/// The contract an opcode executes in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Context {
	/// Address of the executing contract.
	pub address: H160,
	/// Gas remaining before the current opcode is charged.
	pub gas: Gas,
}

/// Price of a single opcode.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Cost {
	/// Gas to deduct, memory expansion included.
	pub gas: Gas,
	/// Refund credit to queue in the transaction's ledger.
	pub refund: Option<Gas>,
	/// Replacement for the gas argument on top of the stack. Only set for
	/// CALL, CALLCODE and DELEGATECALL.
	pub rewritten_top: Option<U256>,
}

impl Cost {
	fn new(gas: Gas) -> Self {
		Self {
			gas,
			refund: None,
			rewritten_top: None,
		}
	}
}

/// Prices opcodes. Immutable once built, so one table can be shared by any
/// number of concurrent executions.
#[derive(Clone, Debug)]
pub struct GasTable {
	static_costs: [Option<u64>; 256],
	schedules: Schedules,
	memory: MemoryCostModel,
}

impl Default for GasTable {
	fn default() -> Self {
		Self::new(Schedules::default(), MemoryCostModel::STANDARD)
	}
}

impl GasTable {
	pub fn new(schedules: Schedules, memory: MemoryCostModel) -> Self {
		Self {
			static_costs: consts::STATIC_COST_TABLE,
			schedules,
			memory,
		}
	}

	pub fn schedules(&self) -> &Schedules {
		&self.schedules
	}

	pub fn memory_model(&self) -> &MemoryCostModel {
		&self.memory
	}

	/// Price `opcode` given the stack and memory before it executes.
	///
	/// `memory_size` is the number of bytes the opcode needs memory to
	/// cover, see [`memory_size`]. State is read from `backend` before any of
	/// the opcode's effects are applied. Only fails on a stack shorter than
	/// the opcode's operands or an unassigned opcode.
	#[allow(clippy::too_many_arguments)]
	pub fn cost<B: Backend>(
		&self,
		opcode: Opcode,
		stack: &Stack,
		memory: &Memory,
		memory_size: &BigUint,
		context: &Context,
		flags: ForkFlags,
		backend: &B,
	) -> Result<Cost, ExitError> {
		let schedule = self.schedules.select(flags);

		let gas_cost = match self.static_costs[opcode.as_usize()] {
			Some(cost) => GasCost::Fixed(cost),
			None => dynamic_opcode_cost(opcode, stack, context, schedule, backend)?,
		};

		let current_words = to_word_size(&BigUint::from(memory.len()));
		let memory_gas = self.memory.cost(&current_words, memory_size);

		let cost = gas_cost.price(memory_gas, context, schedule, flags);
		log::trace!(target: "evm", "{} costs {}", opcode, cost.gas);

		event!(RecordCost {
			opcode,
			cost: cost.gas.clone(),
		});
		#[cfg(feature = "tracing")]
		if let Some(refund) = &cost.refund {
			event!(RecordRefund {
				opcode,
				refund: refund.clone(),
			});
		}

		Ok(cost)
	}
}

enum GasCost {
	Fixed(u64),
	Exp {
		power: U256,
	},
	Sha3 {
		len: U256,
	},
	Copy {
		base: u64,
		len: U256,
	},
	Log {
		n: u8,
		len: U256,
	},
	SStore {
		current: H256,
		new: H256,
	},
	Call {
		target: H160,
		value: U256,
		requested: U256,
		is_call_or_callcode: bool,
		is_call: bool,
		target_exists: bool,
		target_empty: bool,
	},
	Suicide {
		target: H160,
		value: U256,
		target_exists: bool,
		target_empty: bool,
		already_removed: bool,
	},
}

impl GasCost {
	fn price(
		self,
		memory_gas: Gas,
		context: &Context,
		schedule: &GasSchedule,
		flags: ForkFlags,
	) -> Cost {
		match self {
			GasCost::Fixed(cost) => Cost::new(Gas::from(cost) + memory_gas),
			GasCost::Exp { power } => Cost::new(costs::exp_cost(power, schedule) + memory_gas),
			GasCost::Sha3 { len } => Cost::new(costs::sha3_cost(len) + memory_gas),
			GasCost::Copy { base, len } => Cost::new(costs::copy_cost(base, len) + memory_gas),
			GasCost::Log { n, len } => Cost::new(costs::log_cost(n, len) + memory_gas),
			GasCost::SStore { current, new } => {
				let (gas, refund) = costs::sstore_cost(current, new);
				Cost {
					gas: gas + memory_gas,
					refund,
					rewritten_top: None,
				}
			}
			GasCost::Call {
				target,
				value,
				requested,
				is_call_or_callcode,
				is_call,
				target_exists,
				target_empty,
			} => {
				let base = Gas::from(costs::call_cost(
					target,
					value,
					is_call_or_callcode,
					is_call,
					target_exists,
					target_empty,
					schedule,
					flags,
				)) + memory_gas;

				let available = context.gas.saturating_sub(&base);
				let requested = Gas::from(requested);
				let granted = call_gas(&available, &requested, flags.eip150);

				// Legacy calls pay for everything they ask for, so an
				// over-request runs out of gas instead of being trimmed.
				let charged = if flags.eip150 {
					granted.clone()
				} else {
					requested
				};

				Cost {
					gas: base + charged,
					refund: None,
					rewritten_top: granted.to_u256(),
				}
			}
			GasCost::Suicide {
				target,
				value,
				target_exists,
				target_empty,
				already_removed,
			} => Cost {
				gas: Gas::from(costs::suicide_cost(
					target,
					value,
					target_exists,
					target_empty,
					schedule,
					flags,
				)) + memory_gas,
				refund: costs::suicide_refund(already_removed),
				rewritten_top: None,
			},
		}
	}
}

fn dynamic_opcode_cost<B: Backend>(
	opcode: Opcode,
	stack: &Stack,
	context: &Context,
	schedule: &GasSchedule,
	backend: &B,
) -> Result<GasCost, ExitError> {
	if let Some(n) = opcode.is_log() {
		return Ok(GasCost::Log {
			n,
			len: stack.peek(1)?,
		});
	}

	let gas_cost = match opcode {
		Opcode::RETURN => GasCost::Fixed(consts::G_ZERO),
		Opcode::MLOAD | Opcode::MSTORE | Opcode::MSTORE8 => GasCost::Fixed(consts::G_FASTESTSTEP),
		Opcode::CREATE => GasCost::Fixed(consts::G_CREATE),

		Opcode::BALANCE => GasCost::Fixed(schedule.balance),
		Opcode::EXTCODESIZE => GasCost::Fixed(schedule.ext_code_size),
		Opcode::SLOAD => GasCost::Fixed(schedule.sload),

		Opcode::EXP => GasCost::Exp {
			power: stack.peek(1)?,
		},
		Opcode::SHA3 => GasCost::Sha3 {
			len: stack.peek(1)?,
		},
		Opcode::CALLDATACOPY | Opcode::CODECOPY => GasCost::Copy {
			base: consts::G_FASTESTSTEP,
			len: stack.peek(2)?,
		},
		Opcode::EXTCODECOPY => GasCost::Copy {
			base: schedule.ext_code_copy,
			len: stack.peek(3)?,
		},

		Opcode::SSTORE => {
			let index = stack.peek_h256(0)?;
			GasCost::SStore {
				current: backend.storage(context.address, index),
				new: stack.peek_h256(1)?,
			}
		}

		Opcode::CALL | Opcode::CALLCODE => {
			let target = stack.peek_address(1)?;
			GasCost::Call {
				target,
				value: stack.peek(2)?,
				requested: stack.peek(0)?,
				is_call_or_callcode: true,
				is_call: opcode == Opcode::CALL,
				target_exists: backend.exists(target),
				target_empty: backend.is_empty(target),
			}
		}
		Opcode::DELEGATECALL => {
			let target = stack.peek_address(1)?;
			GasCost::Call {
				target,
				value: U256::zero(),
				requested: stack.peek(0)?,
				is_call_or_callcode: false,
				is_call: false,
				target_exists: backend.exists(target),
				target_empty: backend.is_empty(target),
			}
		}

		Opcode::SUICIDE => {
			let target = stack.peek_address(0)?;
			GasCost::Suicide {
				target,
				value: backend.balance(context.address),
				target_exists: backend.exists(target),
				target_empty: backend.is_empty(target),
				already_removed: backend.deleted(context.address),
			}
		}

		_ => return Err(ExitError::InvalidOpcode(opcode)),
	};

	Ok(gas_cost)
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloc::collections::{BTreeMap, BTreeSet};

	#[derive(Default)]
	struct MockBackend {
		storage: BTreeMap<(H160, H256), H256>,
		balances: BTreeMap<H160, U256>,
		deleted: BTreeSet<H160>,
	}

	impl Backend for MockBackend {
		fn storage(&self, address: H160, index: H256) -> H256 {
			self.storage
				.get(&(address, index))
				.copied()
				.unwrap_or_default()
		}

		fn balance(&self, address: H160) -> U256 {
			self.balances.get(&address).copied().unwrap_or_default()
		}

		fn exists(&self, address: H160) -> bool {
			self.balances.contains_key(&address)
		}

		fn is_empty(&self, address: H160) -> bool {
			self.balance(address).is_zero()
		}

		fn deleted(&self, address: H160) -> bool {
			self.deleted.contains(&address)
		}
	}

	const PRE: ForkFlags = ForkFlags {
		eip150: false,
		eip158: false,
	};
	const EIP158: ForkFlags = ForkFlags {
		eip150: true,
		eip158: true,
	};

	fn stack(items: &[U256]) -> Stack {
		let mut stack = Stack::default();
		for item in items.iter().rev() {
			stack.push(*item).unwrap();
		}
		stack
	}

	fn context(gas: u64) -> Context {
		Context {
			address: H160::repeat_byte(0xaa),
			gas: Gas::from(gas),
		}
	}

	fn price(
		opcode: Opcode,
		items: &[U256],
		ctx: &Context,
		flags: ForkFlags,
		backend: &MockBackend,
	) -> Result<Cost, ExitError> {
		let stack = stack(items);
		let size = memory_size(opcode, &stack)?;
		GasTable::default().cost(
			opcode,
			&stack,
			&Memory::new(usize::MAX),
			&size,
			ctx,
			flags,
			backend,
		)
	}

	fn word(v: u64) -> U256 {
		U256::from(v)
	}

	#[test]
	fn fixed_tiers() {
		let backend = MockBackend::default();
		let ctx = context(100);
		let gas = |opcode, items: &[U256]| price(opcode, items, &ctx, PRE, &backend).unwrap().gas;

		assert_eq!(gas(Opcode::STOP, &[]), Gas::zero());
		assert_eq!(gas(Opcode::ADD, &[]), Gas::from(3u64));
		assert_eq!(gas(Opcode::PUSH32, &[]), Gas::from(3u64));
		assert_eq!(gas(Opcode::MUL, &[]), Gas::from(5u64));
		assert_eq!(gas(Opcode::JUMP, &[]), Gas::from(8u64));
		assert_eq!(gas(Opcode::JUMPI, &[]), Gas::from(10u64));
		assert_eq!(gas(Opcode::GAS, &[]), Gas::from(2u64));
		assert_eq!(gas(Opcode::BLOCKHASH, &[]), Gas::from(20u64));
		assert_eq!(gas(Opcode::JUMPDEST, &[]), Gas::from(1u64));
	}

	#[test]
	fn unassigned_opcode_is_rejected() {
		let backend = MockBackend::default();
		assert_eq!(
			price(Opcode(0x0c), &[], &context(100), PRE, &backend),
			Err(ExitError::InvalidOpcode(Opcode(0x0c)))
		);
	}

	#[test]
	fn memory_opcodes_pay_expansion() {
		let backend = MockBackend::default();
		let ctx = context(100);

		let mstore = price(Opcode::MSTORE, &[word(0), word(1)], &ctx, PRE, &backend).unwrap();
		assert_eq!(mstore.gas, Gas::from(3u64 + 3));

		// 3 base, 2 words copied, 2 words of memory.
		let copy = price(
			Opcode::CALLDATACOPY,
			&[word(0), word(0), word(64)],
			&ctx,
			PRE,
			&backend,
		)
		.unwrap();
		assert_eq!(copy.gas, Gas::from(3u64 + 6 + 6));

		let ret = price(Opcode::RETURN, &[word(0), word(0)], &ctx, PRE, &backend).unwrap();
		assert_eq!(ret.gas, Gas::zero());
	}

	#[test]
	fn state_access_follows_schedule() {
		let backend = MockBackend::default();
		let ctx = context(100);
		let gas = |opcode, flags| {
			price(opcode, &[word(1)], &ctx, flags, &backend)
				.unwrap()
				.gas
		};

		assert_eq!(gas(Opcode::SLOAD, PRE), Gas::from(50u64));
		assert_eq!(gas(Opcode::SLOAD, EIP158), Gas::from(200u64));
		assert_eq!(gas(Opcode::BALANCE, PRE), Gas::from(20u64));
		assert_eq!(gas(Opcode::BALANCE, EIP158), Gas::from(400u64));
		assert_eq!(gas(Opcode::EXTCODESIZE, EIP158), Gas::from(700u64));
	}

	#[test]
	fn sstore_reads_current_value() {
		let mut backend = MockBackend::default();
		let ctx = context(100_000);
		let key = H256::from_low_u64_be(7);
		backend
			.storage
			.insert((ctx.address, key), H256::from_low_u64_be(1));

		let clear = price(Opcode::SSTORE, &[word(7), word(0)], &ctx, PRE, &backend).unwrap();
		assert_eq!(clear.gas, Gas::from(5000u64));
		assert_eq!(clear.refund, Some(Gas::from(15000u64)));

		let set = price(Opcode::SSTORE, &[word(8), word(1)], &ctx, PRE, &backend).unwrap();
		assert_eq!(set.gas, Gas::from(20000u64));
		assert_eq!(set.refund, None);
	}

	#[test]
	fn call_rewrites_requested_gas() {
		let mut backend = MockBackend::default();
		let target = H160::repeat_byte(0x42);
		backend.balances.insert(target, U256::one());

		let target_word = U256::from_big_endian(H256::from(target).as_bytes());
		let items = [
			U256::MAX,
			target_word,
			word(0),
			word(0),
			word(0),
			word(0),
			word(0),
		];

		// 700 base, 999_300 left, of which 15_614 is retained.
		let cost = price(Opcode::CALL, &items, &context(1_000_000), EIP158, &backend).unwrap();
		assert_eq!(cost.rewritten_top, Some(U256::from(983_686u64)));
		assert_eq!(cost.gas, Gas::from(700u64 + 983_686));
	}

	#[test]
	fn legacy_call_over_request_exceeds_gas() {
		let mut backend = MockBackend::default();
		let target = H160::repeat_byte(0x42);
		backend.balances.insert(target, U256::one());

		let target_word = U256::from_big_endian(H256::from(target).as_bytes());
		let items = [
			word(5000),
			target_word,
			word(0),
			word(0),
			word(0),
			word(0),
			word(0),
		];

		let cost = price(Opcode::CALL, &items, &context(1000), PRE, &backend).unwrap();
		assert_eq!(cost.rewritten_top, Some(U256::from(960u64)));
		assert_eq!(cost.gas, Gas::from(40u64 + 5000));
		assert!(cost.gas > Gas::from(1000u64));
	}

	#[test]
	fn suicide_refund_is_queued_once() {
		let mut backend = MockBackend::default();
		let ctx = context(100_000);
		let beneficiary = U256::from(0x42);

		let first = price(Opcode::SUICIDE, &[beneficiary], &ctx, EIP158, &backend).unwrap();
		assert_eq!(first.refund, Some(Gas::from(24000u64)));

		backend.deleted.insert(ctx.address);
		let second = price(Opcode::SUICIDE, &[beneficiary], &ctx, EIP158, &backend).unwrap();
		assert_eq!(second.refund, None);
		assert_eq!(second.gas, Gas::from(5000u64));
	}

	#[cfg(feature = "tracing")]
	#[test]
	fn listener_sees_cost_refund_and_stipend() {
		use crate::tracing::{using, Event, EventListener};
		use alloc::vec::Vec;

		#[derive(Default)]
		struct Collector(Vec<Event>);

		impl EventListener for Collector {
			fn event(&mut self, event: Event) {
				self.0.push(event);
			}
		}

		let mut backend = MockBackend::default();
		let ctx = context(100_000);
		backend.storage.insert(
			(ctx.address, H256::from_low_u64_be(7)),
			H256::from_low_u64_be(1),
		);

		let mut collector = Collector::default();
		using(&mut collector, || {
			price(Opcode::SSTORE, &[word(7), word(0)], &ctx, PRE, &backend).unwrap();
			call_stipend(U256::one());
		});

		assert_eq!(
			collector.0,
			alloc::vec![
				Event::RecordCost {
					opcode: Opcode::SSTORE,
					cost: Gas::from(5000u64),
				},
				Event::RecordRefund {
					opcode: Opcode::SSTORE,
					refund: Gas::from(15000u64),
				},
				Event::RecordStipend {
					stipend: Gas::from(2300u64),
				},
			]
		);
	}

	#[test]
	fn short_stack_underflows() {
		let backend = MockBackend::default();
		assert_eq!(
			price(Opcode::SSTORE, &[word(1)], &context(100), PRE, &backend),
			Err(ExitError::StackUnderflow)
		);
	}
}
