use crate::{ArrayId, ElementKind};

/// One element read from or written to a shadow array.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
	Boolean(bool),
	Byte(i8),
	Char(u16),
	Short(i16),
	Int(i32),
	Long(i64),
	Float(f32),
	Double(f64),
	Reference(Option<ArrayId>),
}

impl Value {
	pub fn kind(&self) -> ElementKind {
		match self {
			Self::Boolean(_) => ElementKind::Boolean,
			Self::Byte(_) => ElementKind::Byte,
			Self::Char(_) => ElementKind::Char,
			Self::Short(_) => ElementKind::Short,
			Self::Int(_) => ElementKind::Int,
			Self::Long(_) => ElementKind::Long,
			Self::Float(_) => ElementKind::Float,
			Self::Double(_) => ElementKind::Double,
			Self::Reference(_) => ElementKind::Reference,
		}
	}

	/// Default element of a freshly allocated array of `kind`.
	pub fn default_of(kind: ElementKind) -> Self {
		match kind {
			ElementKind::Boolean => Self::Boolean(false),
			ElementKind::Byte => Self::Byte(0),
			ElementKind::Char => Self::Char(0),
			ElementKind::Short => Self::Short(0),
			ElementKind::Int => Self::Int(0),
			ElementKind::Long => Self::Long(0),
			ElementKind::Float => Self::Float(0.0),
			ElementKind::Double => Self::Double(0.0),
			ElementKind::Reference => Self::Reference(None),
		}
	}
}
