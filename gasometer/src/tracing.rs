//! Allows to listen to gasometer events.

use crate::Gas;
use evm_gastable_core::Opcode;

environmental::environmental!(listener: dyn EventListener + 'static);

pub trait EventListener {
	fn event(&mut self, event: Event);
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Event {
	RecordCost {
		opcode: Opcode,
		cost: Gas,
	},
	RecordRefund {
		opcode: Opcode,
		refund: Gas,
	},
	RecordStipend {
		stipend: Gas,
	},
}

impl Event {
	pub(crate) fn emit(self) {
		listener::with(|listener| listener.event(self));
	}
}

/// Run closure with provided listener.
pub fn using<R, F: FnOnce() -> R>(new: &mut (dyn EventListener + 'static), f: F) -> R {
	listener::using(new, f)
}
