use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::shadow::ShadowArray;
use crate::{ArrayId, Corruption, ElementKind, ExitError, Slot};

/// Arena owning every shadow array of one invocation.
///
/// A slot maps to at most one array, so repeated references to the same
/// persisted record share a single backing store.
#[derive(Clone, Debug, Default)]
pub struct Heap {
	arrays: Vec<ShadowArray>,
	bound: BTreeMap<Slot, ArrayId>,
}

impl Heap {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.arrays.len()
	}

	pub fn is_empty(&self) -> bool {
		self.arrays.is_empty()
	}

	pub fn get(&self, id: ArrayId) -> Result<&ShadowArray, ExitError> {
		self.arrays.get(id.0).ok_or(ExitError::DanglingReference)
	}

	pub(crate) fn get_mut(&mut self, id: ArrayId) -> Result<&mut ShadowArray, ExitError> {
		self.arrays.get_mut(id.0).ok_or(ExitError::DanglingReference)
	}

	/// Array already handed out for `slot` in this invocation.
	pub fn bound(&self, slot: Slot) -> Option<ArrayId> {
		self.bound.get(&slot).copied()
	}

	pub(crate) fn insert(&mut self, array: ShadowArray) -> ArrayId {
		let id = ArrayId(self.arrays.len());
		if let Some(slot) = array.handle().slot() {
			self.bound.insert(slot, id);
		}
		self.arrays.push(array);
		id
	}

	/// Handle for the record at `slot`, reusing the array already bound to it.
	pub(crate) fn handle_for(&mut self, slot: Slot, kind: ElementKind) -> Result<ArrayId, ExitError> {
		match self.bound(slot) {
			Some(id) if self.get(id)?.kind() == kind => Ok(id),
			Some(_) => Err(Corruption::KindMismatch.into()),
			None => Ok(self.insert(ShadowArray::from_storage(slot, kind))),
		}
	}

	pub(crate) fn bind(&mut self, id: ArrayId, slot: Slot) -> Result<(), ExitError> {
		self.get_mut(id)?.bind(slot);
		self.bound.insert(slot, id);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::BackingStore;

	#[test]
	fn same_slot_yields_same_array() {
		let mut heap = Heap::new();
		let a = heap.handle_for(Slot(7), ElementKind::Int).unwrap();
		let b = heap.handle_for(Slot(7), ElementKind::Int).unwrap();
		assert_eq!(a, b);
		assert_eq!(heap.len(), 1);
	}

	#[test]
	fn same_slot_with_other_kind_is_corruption() {
		let mut heap = Heap::new();
		heap.handle_for(Slot(7), ElementKind::Int).unwrap();
		assert_eq!(
			heap.handle_for(Slot(7), ElementKind::Long),
			Err(ExitError::StorageCorruption(Corruption::KindMismatch))
		);
	}

	#[test]
	fn bind_registers_slot() {
		let mut heap = Heap::new();
		let id = heap.insert(ShadowArray::fresh(BackingStore::new(ElementKind::Byte, 2)));
		assert_eq!(heap.bound(Slot(3)), None);
		heap.bind(id, Slot(3)).unwrap();
		assert_eq!(heap.bound(Slot(3)), Some(id));
		assert_eq!(heap.get(id).unwrap().handle().slot(), Some(Slot(3)));
	}

	#[test]
	fn unknown_id_is_dangling() {
		let heap = Heap::new();
		assert_eq!(heap.get(ArrayId(0)).err(), Some(ExitError::DanglingReference));
	}
}
