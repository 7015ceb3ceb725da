use evm_gastable_core::Opcode;

pub const G_ZERO: u64 = 0;
pub const G_QUICKSTEP: u64 = 2;
pub const G_FASTESTSTEP: u64 = 3;
pub const G_FASTSTEP: u64 = 5;
pub const G_MIDSTEP: u64 = 8;
pub const G_SLOWSTEP: u64 = 10;
pub const G_EXTSTEP: u64 = 20;

pub const G_JUMPDEST: u64 = 1;
pub const G_SHA3: u64 = 30;
pub const G_SHA3WORD: u64 = 6;
pub const G_COPY: u64 = 3;
pub const G_CREATE: u64 = 32000;
pub const G_EXP: u64 = G_SLOWSTEP;

pub const G_LOG: u64 = 375;
pub const G_LOGTOPIC: u64 = 375;
pub const G_LOGDATA: u64 = 8;

pub const G_SSET: u64 = 20000;
pub const G_SRESET: u64 = 5000;
pub const G_SCLEAR: u64 = 5000;
pub const R_SCLEAR: u64 = 15000;

pub const G_CALLVALUE: u64 = 9000;
pub const G_NEWACCOUNT: u64 = 25000;
pub const G_CALLSTIPEND: u64 = 2300;
pub const R_SUICIDE: u64 = 24000;

pub const G_MEMORY: u64 = 3;
pub const G_QUADCOEFFDIV: u64 = 512;

/// Maximum share of used gas that refunds may give back at finalization.
pub const MAX_REFUND_QUOTIENT: u64 = 2;

/// Cost of every opcode whose price never depends on its operands, the
/// state, or the active fork. `None` means the opcode is priced dynamically
/// or the slot is unassigned.
pub const STATIC_COST_TABLE: [Option<u64>; 256] = {
	let mut table = [None; 256];

	table[Opcode::STOP.as_usize()] = Some(G_ZERO);

	table[Opcode::ADD.as_usize()] = Some(G_FASTESTSTEP);
	table[Opcode::SUB.as_usize()] = Some(G_FASTESTSTEP);
	table[Opcode::NOT.as_usize()] = Some(G_FASTESTSTEP);
	table[Opcode::LT.as_usize()] = Some(G_FASTESTSTEP);
	table[Opcode::GT.as_usize()] = Some(G_FASTESTSTEP);
	table[Opcode::SLT.as_usize()] = Some(G_FASTESTSTEP);
	table[Opcode::SGT.as_usize()] = Some(G_FASTESTSTEP);
	table[Opcode::EQ.as_usize()] = Some(G_FASTESTSTEP);
	table[Opcode::ISZERO.as_usize()] = Some(G_FASTESTSTEP);
	table[Opcode::AND.as_usize()] = Some(G_FASTESTSTEP);
	table[Opcode::OR.as_usize()] = Some(G_FASTESTSTEP);
	table[Opcode::XOR.as_usize()] = Some(G_FASTESTSTEP);
	table[Opcode::BYTE.as_usize()] = Some(G_FASTESTSTEP);
	table[Opcode::CALLDATALOAD.as_usize()] = Some(G_FASTESTSTEP);

	table[Opcode::MUL.as_usize()] = Some(G_FASTSTEP);
	table[Opcode::DIV.as_usize()] = Some(G_FASTSTEP);
	table[Opcode::SDIV.as_usize()] = Some(G_FASTSTEP);
	table[Opcode::MOD.as_usize()] = Some(G_FASTSTEP);
	table[Opcode::SMOD.as_usize()] = Some(G_FASTSTEP);
	table[Opcode::SIGNEXTEND.as_usize()] = Some(G_FASTSTEP);

	table[Opcode::ADDMOD.as_usize()] = Some(G_MIDSTEP);
	table[Opcode::MULMOD.as_usize()] = Some(G_MIDSTEP);
	table[Opcode::JUMP.as_usize()] = Some(G_MIDSTEP);

	table[Opcode::JUMPI.as_usize()] = Some(G_SLOWSTEP);

	table[Opcode::ADDRESS.as_usize()] = Some(G_QUICKSTEP);
	table[Opcode::ORIGIN.as_usize()] = Some(G_QUICKSTEP);
	table[Opcode::CALLER.as_usize()] = Some(G_QUICKSTEP);
	table[Opcode::CALLVALUE.as_usize()] = Some(G_QUICKSTEP);
	table[Opcode::CALLDATASIZE.as_usize()] = Some(G_QUICKSTEP);
	table[Opcode::CODESIZE.as_usize()] = Some(G_QUICKSTEP);
	table[Opcode::GASPRICE.as_usize()] = Some(G_QUICKSTEP);
	table[Opcode::COINBASE.as_usize()] = Some(G_QUICKSTEP);
	table[Opcode::TIMESTAMP.as_usize()] = Some(G_QUICKSTEP);
	table[Opcode::NUMBER.as_usize()] = Some(G_QUICKSTEP);
	table[Opcode::DIFFICULTY.as_usize()] = Some(G_QUICKSTEP);
	table[Opcode::GASLIMIT.as_usize()] = Some(G_QUICKSTEP);
	table[Opcode::POP.as_usize()] = Some(G_QUICKSTEP);
	table[Opcode::PC.as_usize()] = Some(G_QUICKSTEP);
	table[Opcode::MSIZE.as_usize()] = Some(G_QUICKSTEP);
	table[Opcode::GAS.as_usize()] = Some(G_QUICKSTEP);

	table[Opcode::BLOCKHASH.as_usize()] = Some(G_EXTSTEP);
	table[Opcode::JUMPDEST.as_usize()] = Some(G_JUMPDEST);

	// PUSH1..PUSH32, DUP1..DUP16, SWAP1..SWAP16
	let mut i = Opcode::PUSH1.as_usize();
	while i <= Opcode::SWAP16.as_usize() {
		table[i] = Some(G_FASTESTSTEP);
		i += 1;
	}

	table
};

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dynamic_opcodes_have_no_static_cost() {
		for opcode in [
			Opcode::EXP,
			Opcode::SHA3,
			Opcode::BALANCE,
			Opcode::EXTCODESIZE,
			Opcode::SLOAD,
			Opcode::SSTORE,
			Opcode::CALL,
			Opcode::SUICIDE,
			Opcode::LOG2,
		] {
			assert_eq!(STATIC_COST_TABLE[opcode.as_usize()], None, "{}", opcode);
		}
	}

	#[test]
	fn stack_opcodes_cost_fastest_step() {
		assert_eq!(STATIC_COST_TABLE[Opcode::PUSH1.as_usize()], Some(3));
		assert_eq!(STATIC_COST_TABLE[Opcode::DUP16.as_usize()], Some(3));
		assert_eq!(STATIC_COST_TABLE[Opcode::SWAP1.as_usize()], Some(3));
		assert_eq!(STATIC_COST_TABLE[Opcode::LOG0.as_usize()], None);
		assert_eq!(STATIC_COST_TABLE[0xef], None);
	}
}
