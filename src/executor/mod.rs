//! Caller-side gas accounting for one call frame.

use core::cmp::min;

use evm_gastable_core::{ExitError, Memory, Opcode, Stack};
use evm_gastable_gasometer::{
	call_stipend, consts, memory_size, Backend, BigUint, Context, Cost, ForkFlags, Gas, GasTable,
	RefundLedger,
};
use primitive_types::{H160, U256};

/// Remaining gas, used gas and refunds of one execution, priced by a
/// shared [`GasTable`] under fixed fork flags.
pub struct GasometerState<'config> {
	gas_limit: Gas,
	used_gas: Gas,
	refunds: RefundLedger,
	pub flags: ForkFlags,
	pub table: &'config GasTable,
}

impl<'config> GasometerState<'config> {
	/// Create a new gasometer with the given gas limit, fork flags and table.
	pub fn new(gas_limit: Gas, flags: ForkFlags, table: &'config GasTable) -> Self {
		Self {
			gas_limit,
			used_gas: Gas::zero(),
			refunds: RefundLedger::new(),
			flags,
			table,
		}
	}

	/// Perform any operation on the gasometer. Set the gasometer to `OutOfGas`
	/// if the operation fails.
	#[inline]
	pub fn perform<R, F: FnOnce(&mut Self) -> Result<R, ExitError>>(
		&mut self,
		f: F,
	) -> Result<R, ExitError> {
		match f(self) {
			Ok(r) => Ok(r),
			Err(e) => {
				self.oog();
				Err(e)
			}
		}
	}

	/// Consume all remaining gas and drop the queued refunds.
	pub fn oog(&mut self) {
		self.used_gas = self.gas_limit.clone();
		self.refunds = RefundLedger::new();
	}

	pub fn gas_limit(&self) -> &Gas {
		&self.gas_limit
	}

	pub fn used_gas(&self) -> &Gas {
		&self.used_gas
	}

	/// Gas left to the current frame.
	pub fn gas(&self) -> Gas {
		self.gas_limit.saturating_sub(&self.used_gas)
	}

	pub fn refunds(&self) -> &RefundLedger {
		&self.refunds
	}

	/// Record an explicit cost.
	pub fn record_gas(&mut self, cost: Gas) -> Result<(), ExitError> {
		self.perform(|gasometer| {
			if cost > gasometer.gas() {
				log::debug!(target: "evm", "out of gas: {} needed, {} left", cost, gasometer.gas());
				return Err(ExitError::OutOfGas);
			}

			gasometer.used_gas += cost;
			Ok(())
		})
	}

	/// Price and charge `opcode` before it executes.
	///
	/// On success the refund is queued, the gas argument of a CALL-family
	/// opcode is replaced by the granted gas, and memory is grown to cover
	/// the opcode's operands. On failure all gas is consumed.
	pub fn record_opcode<B: Backend>(
		&mut self,
		opcode: Opcode,
		stack: &mut Stack,
		memory: &mut Memory,
		address: H160,
		backend: &B,
	) -> Result<Cost, ExitError> {
		self.perform(|gasometer| {
			let size = memory_size(opcode, stack)?;
			let context = Context {
				address,
				gas: gasometer.gas(),
			};

			let cost = gasometer.table.cost(
				opcode,
				stack,
				memory,
				&size,
				&context,
				gasometer.flags,
				backend,
			)?;

			if cost.gas > context.gas {
				log::debug!(
					target: "evm",
					"out of gas: {} needs {}, {} left",
					opcode,
					cost.gas,
					context.gas
				);
				return Err(ExitError::OutOfGas);
			}

			gasometer.used_gas += cost.gas.clone();
			if let Some(refund) = &cost.refund {
				gasometer.refunds.add(refund.clone());
			}
			if let Some(granted) = cost.rewritten_top {
				stack.set(0, granted)?;
			}
			memory.resize_end(size_to_u256(&size)?)?;

			Ok(cost)
		})
	}

	/// Refund handed back at the end of the transaction, capped at a
	/// fraction of the gas used.
	pub fn effective_refund(&self) -> Gas {
		let cap = &self.used_gas / consts::MAX_REFUND_QUOTIENT;
		min(self.refunds.credited(), cap)
	}
}

/// Gas handed to the callee of a CALL-family opcode: the granted gas plus
/// the stipend of a value-bearing call.
pub fn callee_gas(cost: &Cost, value: U256) -> Gas {
	let granted = cost.rewritten_top.map(Gas::from).unwrap_or_default();
	granted + call_stipend(value)
}

fn size_to_u256(size: &BigUint) -> Result<U256, ExitError> {
	if size.bits() > 256 {
		return Err(ExitError::InvalidRange);
	}

	Ok(U256::from_big_endian(&size.to_bytes_be()))
}
