/// Element kind of a shadow array.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(
	feature = "with-codec",
	derive(scale_codec::Encode, scale_codec::Decode, scale_info::TypeInfo)
)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
	Boolean,
	Byte,
	Char,
	Short,
	Int,
	Long,
	Float,
	Double,
	/// Reference to another shadow array, possibly null.
	Reference,
}

impl ElementKind {
	/// All kinds, in tag order.
	pub const ALL: [ElementKind; 9] = [
		ElementKind::Boolean,
		ElementKind::Byte,
		ElementKind::Char,
		ElementKind::Short,
		ElementKind::Int,
		ElementKind::Long,
		ElementKind::Float,
		ElementKind::Double,
		ElementKind::Reference,
	];

	/// Tag of the kind in persisted records. Part of the storage format and
	/// must never be renumbered.
	pub const fn tag(self) -> u8 {
		match self {
			Self::Boolean => 0x01,
			Self::Byte => 0x02,
			Self::Char => 0x03,
			Self::Short => 0x04,
			Self::Int => 0x05,
			Self::Long => 0x06,
			Self::Float => 0x07,
			Self::Double => 0x08,
			Self::Reference => 0x09,
		}
	}

	pub fn from_tag(tag: u8) -> Option<Self> {
		Self::ALL.iter().copied().find(|kind| kind.tag() == tag)
	}

	/// Width in bytes of one encoded element, `None` for references.
	pub const fn width(self) -> Option<usize> {
		match self {
			Self::Boolean | Self::Byte => Some(1),
			Self::Char | Self::Short => Some(2),
			Self::Int | Self::Float => Some(4),
			Self::Long | Self::Double => Some(8),
			Self::Reference => None,
		}
	}

	pub const fn is_primitive(self) -> bool {
		!matches!(self, Self::Reference)
	}
}
