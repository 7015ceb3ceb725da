use crate::Gas;

/// Gas granted to the callee of a CALL-family opcode.
///
/// `available` is the caller's gas after the call's own base cost,
/// surcharges and memory expansion are deducted. Under the
/// all-but-one-64th rule the caller keeps `available / 64`; under the
/// legacy rule the whole remainder can be granted.
pub fn call_gas(available: &Gas, requested: &Gas, all_but_one_64th: bool) -> Gas {
	let grantable = if all_but_one_64th {
		available.saturating_sub(&(available / 64))
	} else {
		available.clone()
	};

	if requested < &grantable {
		requested.clone()
	} else {
		grantable
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn retains_one_64th() {
		let available = Gas::from(1_000_000u64);

		assert_eq!(
			call_gas(&available, &available, true),
			Gas::from(984_375u64)
		);
		assert_eq!(
			call_gas(&available, &Gas::from(10_000u64), true),
			Gas::from(10_000u64)
		);
	}

	#[test]
	fn legacy_grants_up_to_available() {
		let available = Gas::from(1_000_000u64);

		assert_eq!(
			call_gas(&available, &Gas::from(2_000_000u64), false),
			available
		);
		assert_eq!(
			call_gas(&available, &Gas::from(999u64), false),
			Gas::from(999u64)
		);
	}

	#[test]
	fn never_exceeds_available() {
		for available in [0u64, 1, 63, 64, 65, 6400, 1_000_003] {
			let available = Gas::from(available);
			for rule in [true, false] {
				let granted = call_gas(&available, &Gas::from(u64::MAX), rule);
				assert!(granted <= available);
			}
		}
	}
}
