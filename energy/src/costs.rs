use avm_core::ExitError;

/// Number of elements an operation is charged for. Negative lengths are
/// clamped to zero rather than rejected.
#[inline]
pub fn billable_length(length: i32) -> u64 {
	if length < 0 {
		0
	} else {
		length as u64
	}
}

/// `max(length, 0) * per_element_fee`.
pub fn init_cost(length: i32, per_element_fee: u64) -> Result<u64, ExitError> {
	billable_length(length)
		.checked_mul(per_element_fee)
		.ok_or(ExitError::ArithmeticOverflow)
}

/// `base_fee + max(length, 0) * reference_type_fee`.
pub fn clone_cost(length: i32, base_fee: u64, reference_type_fee: u64) -> Result<u64, ExitError> {
	billable_length(length)
		.checked_mul(reference_type_fee)
		.ok_or(ExitError::ArithmeticOverflow)?
		.checked_add(base_fee)
		.ok_or(ExitError::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn init_cost_is_linear_in_length() {
		assert_eq!(init_cost(10, 2), Ok(20));
		assert_eq!(init_cost(0, 1_000), Ok(0));
		assert_eq!(init_cost(i32::MAX, 1), Ok(i32::MAX as u64));
	}

	#[test]
	fn negative_length_is_free() {
		assert_eq!(init_cost(-1, 2), Ok(0));
		assert_eq!(init_cost(i32::MIN, u64::MAX), Ok(0));
		assert_eq!(clone_cost(-5, 3, 7), Ok(3));
	}

	#[test]
	fn clone_cost_is_base_plus_linear() {
		assert_eq!(clone_cost(10, 1, 1), Ok(11));
		assert_eq!(clone_cost(0, 100, 8), Ok(100));
		assert_eq!(clone_cost(4, 100, 8), Ok(132));
	}

	#[test]
	fn overflow_faults_instead_of_wrapping() {
		assert_eq!(init_cost(2, u64::MAX), Err(ExitError::ArithmeticOverflow));
		assert_eq!(clone_cost(2, 0, u64::MAX), Err(ExitError::ArithmeticOverflow));
		assert_eq!(clone_cost(1, u64::MAX, 1), Err(ExitError::ArithmeticOverflow));
		assert_eq!(clone_cost(0, u64::MAX, u64::MAX), Ok(u64::MAX));
	}
}
