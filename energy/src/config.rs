use avm_core::ElementKind;

use crate::consts::*;

/// Energy fee schedule.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
	/// Energy paid per element when allocating a `boolean` array.
	pub boolean_element_fee: u64,
	/// Energy paid per element when allocating a `byte` array.
	pub byte_element_fee: u64,
	/// Energy paid per element when allocating a `char` array.
	pub char_element_fee: u64,
	/// Energy paid per element when allocating a `short` array.
	pub short_element_fee: u64,
	/// Energy paid per element when allocating an `int` array.
	pub int_element_fee: u64,
	/// Energy paid per element when allocating a `long` array.
	pub long_element_fee: u64,
	/// Energy paid per element when allocating a `float` array.
	pub float_element_fee: u64,
	/// Energy paid per element when allocating a `double` array.
	pub double_element_fee: u64,
	/// Energy paid per element when allocating an object-reference array.
	pub reference_element_fee: u64,
	/// Flat part of the clone fee.
	pub clone_base_fee: u64,
	/// Per-element part of the clone fee, applied to every element kind.
	pub reference_type_fee: u64,
}

impl Config {
	/// Fee schedule used on the main network.
	pub const fn mainnet() -> Config {
		Config {
			boolean_element_fee: E_BOOLEAN_ELEMENT,
			byte_element_fee: E_BYTE_ELEMENT,
			char_element_fee: E_CHAR_ELEMENT,
			short_element_fee: E_SHORT_ELEMENT,
			int_element_fee: E_INT_ELEMENT,
			long_element_fee: E_LONG_ELEMENT,
			float_element_fee: E_FLOAT_ELEMENT,
			double_element_fee: E_DOUBLE_ELEMENT,
			reference_element_fee: E_REFERENCE_ELEMENT,
			clone_base_fee: E_CLONE_BASE,
			reference_type_fee: E_REFERENCE_TYPE,
		}
	}

	/// Schedule where every operation is free.
	pub const fn free() -> Config {
		Config {
			boolean_element_fee: E_ZERO,
			byte_element_fee: E_ZERO,
			char_element_fee: E_ZERO,
			short_element_fee: E_ZERO,
			int_element_fee: E_ZERO,
			long_element_fee: E_ZERO,
			float_element_fee: E_ZERO,
			double_element_fee: E_ZERO,
			reference_element_fee: E_ZERO,
			clone_base_fee: E_ZERO,
			reference_type_fee: E_ZERO,
		}
	}

	/// Per-element allocation fee of `kind`.
	pub fn per_element_fee(&self, kind: ElementKind) -> u64 {
		match kind {
			ElementKind::Boolean => self.boolean_element_fee,
			ElementKind::Byte => self.byte_element_fee,
			ElementKind::Char => self.char_element_fee,
			ElementKind::Short => self.short_element_fee,
			ElementKind::Int => self.int_element_fee,
			ElementKind::Long => self.long_element_fee,
			ElementKind::Float => self.float_element_fee,
			ElementKind::Double => self.double_element_fee,
			ElementKind::Reference => self.reference_element_fee,
		}
	}
}

impl Default for Config {
	fn default() -> Self {
		Self::mainnet()
	}
}
