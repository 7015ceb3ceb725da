use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::Gas;

/// Refund credits accumulated over one transaction. Cleared with the
/// transaction; capped by the caller at finalization.
///
/// The ledger does no deduplication: callers decide whether a credit is due
/// (the suicide refund is only handed out for an address not yet scheduled
/// for removal).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RefundLedger {
	refunded: BigInt,
}

impl RefundLedger {
	pub fn new() -> Self {
		Self::default()
	}

	/// Accumulate a credit. Negative deltas debit the ledger.
	pub fn add<D: Into<BigInt>>(&mut self, delta: D) {
		self.refunded += delta.into();
	}

	/// Current signed balance.
	pub fn total(&self) -> &BigInt {
		&self.refunded
	}

	/// Balance clamped to zero, as a gas amount.
	pub fn credited(&self) -> Gas {
		if self.refunded.is_positive() {
			Gas::from(self.refunded.magnitude().clone())
		} else {
			Gas::zero()
		}
	}

	pub fn is_empty(&self) -> bool {
		self.refunded.is_zero()
	}
}
