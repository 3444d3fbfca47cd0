//! Energy cost model and per-invocation energy meter.
//!
//! Costs are pure functions of the operation and the fee schedule, computed
//! with checked arithmetic so that every node derives the same number or the
//! same fault.

#![forbid(unsafe_code, unused_variables)]
#![cfg_attr(not(feature = "std"), no_std)]

mod config;
mod consts;
mod costs;

#[cfg(feature = "tracing")]
pub mod tracing;

#[cfg(feature = "tracing")]
macro_rules! event {
	($x:expr) => {
		use crate::tracing::Event::*;
		$x.emit();
	};
}

#[cfg(not(feature = "tracing"))]
macro_rules! event {
	($x:expr) => {};
}

pub use crate::config::Config;
pub use crate::costs::{billable_length, clone_cost, init_cost};

use avm_core::{ElementKind, ExitError};

/// Metered operation of the shadow-array layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EnergyCost {
	/// Allocation of a fresh array.
	Initialize { kind: ElementKind, length: i32 },
	/// Clone of an array of any kind.
	Clone { length: i32 },
}

impl EnergyCost {
	pub fn cost(&self, config: &Config) -> Result<u64, ExitError> {
		match *self {
			EnergyCost::Initialize { kind, length } => {
				costs::init_cost(length, config.per_element_fee(kind))
			}
			EnergyCost::Clone { length } => {
				costs::clone_cost(length, config.clone_base_fee, config.reference_type_fee)
			}
		}
	}
}

/// Ledger state at a point in time.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Snapshot {
	pub limit: u64,
	pub used: u64,
}

impl Snapshot {
	pub fn remaining(&self) -> u64 {
		self.limit - self.used
	}
}

/// Remaining-energy ledger of one invocation. The remaining amount never
/// increases and never goes below zero.
pub struct Energymeter<'config> {
	limit: u64,
	used: u64,
	config: &'config Config,
}

impl<'config> Energymeter<'config> {
	/// Create a meter holding the declared budget of the transaction.
	pub fn new(limit: u64, config: &'config Config) -> Self {
		Self {
			limit,
			used: 0,
			config,
		}
	}

	pub fn config(&self) -> &'config Config {
		self.config
	}

	pub fn limit(&self) -> u64 {
		self.limit
	}

	pub fn used(&self) -> u64 {
		self.used
	}

	pub fn remaining(&self) -> u64 {
		self.limit - self.used
	}

	pub fn snapshot(&self) -> Snapshot {
		Snapshot {
			limit: self.limit,
			used: self.used,
		}
	}

	/// Charge `amount`. Nothing is deducted when the charge is refused.
	pub fn charge(&mut self, amount: u64) -> Result<(), ExitError> {
		if amount > self.remaining() {
			log::trace!(target: "avm", "Refused charge {}, remaining {}", amount, self.remaining());
			event!(Exhausted {
				cost: amount,
				snapshot: self.snapshot(),
			});
			return Err(ExitError::OutOfEnergy);
		}

		self.used += amount;
		log::trace!(target: "avm", "Charged {}, remaining {}", amount, self.remaining());
		event!(Charge {
			cost: amount,
			snapshot: self.snapshot(),
		});
		Ok(())
	}

	/// Compute the cost of `cost` under this meter's schedule and charge it.
	/// Returns the charged amount.
	pub fn record_cost(&mut self, cost: EnergyCost) -> Result<u64, ExitError> {
		let amount = cost.cost(self.config)?;
		self.charge(amount)?;
		Ok(amount)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn charge_within_budget_deducts() {
		let config = Config::mainnet();
		let mut meter = Energymeter::new(25, &config);
		meter.charge(20).unwrap();
		assert_eq!(meter.remaining(), 5);
		assert_eq!(meter.used(), 20);
		meter.charge(5).unwrap();
		assert_eq!(meter.remaining(), 0);
		meter.charge(0).unwrap();
	}

	#[test]
	fn refused_charge_leaves_ledger_unchanged() {
		let config = Config::mainnet();
		let mut meter = Energymeter::new(5, &config);
		assert_eq!(meter.charge(11), Err(ExitError::OutOfEnergy));
		assert_eq!(meter.remaining(), 5);
		assert_eq!(meter.used(), 0);
	}

	#[test]
	fn record_cost_uses_schedule() {
		let config = Config {
			int_element_fee: 2,
			clone_base_fee: 1,
			reference_type_fee: 1,
			..Config::mainnet()
		};
		let mut meter = Energymeter::new(25, &config);
		assert_eq!(
			meter.record_cost(EnergyCost::Initialize {
				kind: ElementKind::Int,
				length: 10,
			}),
			Ok(20)
		);
		assert_eq!(
			meter.record_cost(EnergyCost::Clone { length: 10 }),
			Err(ExitError::OutOfEnergy)
		);
		assert_eq!(meter.remaining(), 5);
	}

	#[test]
	fn overflowing_cost_is_not_charged() {
		let config = Config {
			long_element_fee: u64::MAX,
			..Config::free()
		};
		let mut meter = Energymeter::new(u64::MAX, &config);
		assert_eq!(
			meter.record_cost(EnergyCost::Initialize {
				kind: ElementKind::Long,
				length: 2,
			}),
			Err(ExitError::ArithmeticOverflow)
		);
		assert_eq!(meter.used(), 0);
	}
}
