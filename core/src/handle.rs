/// Opaque, backend-assigned identifier of one persisted record.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(
	feature = "with-codec",
	derive(scale_codec::Encode, scale_codec::Decode, scale_info::TypeInfo)
)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot(pub u64);

/// Index of a shadow array in the arena of one invocation. Only meaningful
/// inside the invocation that produced it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ArrayId(pub usize);

/// Where a shadow array lives in storage.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PersistenceHandle {
	/// No slot assigned yet.
	Unbound,
	/// Tied to a storage slot. Assigned once, never changes.
	Bound(Slot),
}

impl PersistenceHandle {
	pub fn slot(&self) -> Option<Slot> {
		match self {
			Self::Unbound => None,
			Self::Bound(slot) => Some(*slot),
		}
	}

	pub fn is_bound(&self) -> bool {
		matches!(self, Self::Bound(_))
	}
}
