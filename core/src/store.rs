use alloc::vec;
use alloc::vec::Vec;

use crate::{ArrayId, ElementKind, ExitError, Value};

/// Backing store of a materialized shadow array: a flat value buffer for
/// primitive kinds, or an ordered sequence of references.
///
/// Cloning a `Reference` store copies the references, never the arrays they
/// point to.
#[derive(Clone, Debug, PartialEq)]
pub enum BackingStore {
	Boolean(Vec<bool>),
	Byte(Vec<i8>),
	Char(Vec<u16>),
	Short(Vec<i16>),
	Int(Vec<i32>),
	Long(Vec<i64>),
	Float(Vec<f32>),
	Double(Vec<f64>),
	Reference(Vec<Option<ArrayId>>),
}

macro_rules! each_store {
	($store:expr, $buf:ident => $body:expr) => {
		match $store {
			BackingStore::Boolean($buf) => $body,
			BackingStore::Byte($buf) => $body,
			BackingStore::Char($buf) => $body,
			BackingStore::Short($buf) => $body,
			BackingStore::Int($buf) => $body,
			BackingStore::Long($buf) => $body,
			BackingStore::Float($buf) => $body,
			BackingStore::Double($buf) => $body,
			BackingStore::Reference($buf) => $body,
		}
	};
}

impl BackingStore {
	/// Allocate `len` default-initialized elements of `kind`.
	pub fn new(kind: ElementKind, len: usize) -> Self {
		match kind {
			ElementKind::Boolean => Self::Boolean(vec![false; len]),
			ElementKind::Byte => Self::Byte(vec![0; len]),
			ElementKind::Char => Self::Char(vec![0; len]),
			ElementKind::Short => Self::Short(vec![0; len]),
			ElementKind::Int => Self::Int(vec![0; len]),
			ElementKind::Long => Self::Long(vec![0; len]),
			ElementKind::Float => Self::Float(vec![0.0; len]),
			ElementKind::Double => Self::Double(vec![0.0; len]),
			ElementKind::Reference => Self::Reference(vec![None; len]),
		}
	}

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

	pub fn len(&self) -> usize {
		each_store!(self, buf => buf.len())
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Element at `index`, `None` when out of range.
	pub fn get(&self, index: usize) -> Option<Value> {
		Some(match self {
			Self::Boolean(buf) => Value::Boolean(*buf.get(index)?),
			Self::Byte(buf) => Value::Byte(*buf.get(index)?),
			Self::Char(buf) => Value::Char(*buf.get(index)?),
			Self::Short(buf) => Value::Short(*buf.get(index)?),
			Self::Int(buf) => Value::Int(*buf.get(index)?),
			Self::Long(buf) => Value::Long(*buf.get(index)?),
			Self::Float(buf) => Value::Float(*buf.get(index)?),
			Self::Double(buf) => Value::Double(*buf.get(index)?),
			Self::Reference(buf) => Value::Reference(*buf.get(index)?),
		})
	}

	/// Store `value` at `index`.
	pub fn set(&mut self, index: usize, value: Value) -> Result<(), ExitError> {
		if index >= self.len() {
			return Err(ExitError::InvalidIndex);
		}

		match (self, value) {
			(Self::Boolean(buf), Value::Boolean(v)) => buf[index] = v,
			(Self::Byte(buf), Value::Byte(v)) => buf[index] = v,
			(Self::Char(buf), Value::Char(v)) => buf[index] = v,
			(Self::Short(buf), Value::Short(v)) => buf[index] = v,
			(Self::Int(buf), Value::Int(v)) => buf[index] = v,
			(Self::Long(buf), Value::Long(v)) => buf[index] = v,
			(Self::Float(buf), Value::Float(v)) => buf[index] = v,
			(Self::Double(buf), Value::Double(v)) => buf[index] = v,
			(Self::Reference(buf), Value::Reference(v)) => buf[index] = v,
			_ => return Err(ExitError::TypeMismatch),
		}

		Ok(())
	}

	/// Non-null references held by this store, in element order. Empty for
	/// primitive kinds.
	pub fn references(&self) -> impl Iterator<Item = ArrayId> + '_ {
		let refs: &[Option<ArrayId>] = match self {
			Self::Reference(buf) => buf,
			_ => &[],
		};
		refs.iter().filter_map(|r| *r)
	}
}
