/// Why a persisted record was rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
	feature = "with-codec",
	derive(scale_codec::Encode, scale_codec::Decode, scale_info::TypeInfo)
)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Corruption {
	/// No record exists at the bound slot.
	#[cfg_attr(feature = "with-codec", codec(index = 0))]
	NotFound,
	/// The record bytes are not a well-formed record.
	#[cfg_attr(feature = "with-codec", codec(index = 1))]
	Malformed,
	/// The record holds a different element kind than the handle expects.
	#[cfg_attr(feature = "with-codec", codec(index = 2))]
	KindMismatch,
	/// The declared length disagrees with the payload.
	#[cfg_attr(feature = "with-codec", codec(index = 3))]
	LengthMismatch,
}

/// Exit reason of an invocation. Every variant is fatal: once raised, the
/// invocation halts and only the surrounding transaction layer can recover.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
	feature = "with-codec",
	derive(scale_codec::Encode, scale_codec::Decode, scale_info::TypeInfo)
)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExitError {
	/// A charge exceeds the remaining energy.
	#[cfg_attr(feature = "with-codec", codec(index = 0))]
	OutOfEnergy,
	/// Element access outside `[0, length)`.
	#[cfg_attr(feature = "with-codec", codec(index = 1))]
	InvalidIndex,
	/// A cost computation overflowed.
	#[cfg_attr(feature = "with-codec", codec(index = 2))]
	ArithmeticOverflow,
	/// A persisted record could not be read or decoded.
	#[cfg_attr(feature = "with-codec", codec(index = 3))]
	StorageCorruption(Corruption),
	/// Allocation requested with a negative length.
	#[cfg_attr(feature = "with-codec", codec(index = 4))]
	NegativeLength,
	/// Bulk access to an array whose backing store is not yet populated.
	#[cfg_attr(feature = "with-codec", codec(index = 5))]
	NotMaterialized,
	/// Bulk store of a buffer with the wrong kind or length.
	#[cfg_attr(feature = "with-codec", codec(index = 6))]
	InvalidBackingStore,
	/// Element store of a value with the wrong kind.
	#[cfg_attr(feature = "with-codec", codec(index = 7))]
	TypeMismatch,
	/// An array id that is not owned by the current invocation.
	#[cfg_attr(feature = "with-codec", codec(index = 8))]
	DanglingReference,
	/// The surrounding transaction layer aborted the invocation.
	#[cfg_attr(feature = "with-codec", codec(index = 9))]
	Aborted,
}

impl ExitError {
	/// Whether the invocation ran out of resources. Overflow in cost
	/// computation counts as running out.
	pub fn is_out_of_energy(&self) -> bool {
		matches!(self, Self::OutOfEnergy | Self::ArithmeticOverflow)
	}
}

impl From<Corruption> for ExitError {
	fn from(corruption: Corruption) -> Self {
		Self::StorageCorruption(corruption)
	}
}

#[cfg(feature = "std")]
impl std::error::Error for ExitError {}

#[cfg(feature = "std")]
impl std::fmt::Display for ExitError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::OutOfEnergy => write!(f, "out of energy"),
			Self::InvalidIndex => write!(f, "array index out of bounds"),
			Self::ArithmeticOverflow => write!(f, "energy cost overflow"),
			Self::StorageCorruption(c) => write!(f, "storage corruption: {:?}", c),
			_ => write!(f, "{:?}", self),
		}
	}
}
