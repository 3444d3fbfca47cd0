use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use super::{MergeStrategy, Storage};
use crate::{ExitError, Slot};

/// Buffers the writes of one transaction on top of a backend, so that the
/// transaction layer can apply or drop them atomically.
///
/// Slots are allocated from the underlying backend, so a discarded
/// transaction still consumes the slots it reserved.
pub struct OverlayedStorage<B> {
	backend: B,
	writes: BTreeMap<Slot, Vec<u8>>,
}

impl<B: Storage> OverlayedStorage<B> {
	pub fn new(backend: B) -> Self {
		Self {
			backend,
			writes: BTreeMap::new(),
		}
	}

	/// Writes buffered so far.
	pub fn writes(&self) -> &BTreeMap<Slot, Vec<u8>> {
		&self.writes
	}

	/// Apply or drop the buffered writes and hand the backend back.
	pub fn deconstruct(mut self, strategy: MergeStrategy) -> Result<B, ExitError> {
		match strategy {
			MergeStrategy::Commit => {
				log::debug!(target: "avm", "Committing {} buffered records", self.writes.len());
				for (slot, record) in core::mem::take(&mut self.writes) {
					self.backend.put(slot, record)?;
				}
			}
			MergeStrategy::Discard => {
				log::debug!(target: "avm", "Discarding {} buffered records", self.writes.len());
			}
		}

		Ok(self.backend)
	}
}

impl<B: Storage> Storage for OverlayedStorage<B> {
	fn get(&self, slot: Slot) -> Option<Vec<u8>> {
		if let Some(record) = self.writes.get(&slot) {
			Some(record.clone())
		} else {
			self.backend.get(slot)
		}
	}

	fn allocate(&mut self) -> Slot {
		self.backend.allocate()
	}

	fn put(&mut self, slot: Slot, record: Vec<u8>) -> Result<(), ExitError> {
		self.writes.insert(slot, record);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::backend::InMemoryStorage;

	#[test]
	fn reads_see_buffered_writes_first() {
		let mut base = InMemoryStorage::new();
		base.insert(Slot(0), vec![1]);
		let mut overlay = OverlayedStorage::new(base);
		assert_eq!(overlay.get(Slot(0)), Some(vec![1]));
		overlay.put(Slot(0), vec![2]).unwrap();
		assert_eq!(overlay.get(Slot(0)), Some(vec![2]));
	}

	#[test]
	fn discard_leaves_backend_untouched() {
		let mut overlay = OverlayedStorage::new(InMemoryStorage::new());
		let slot = overlay.allocate();
		overlay.put(slot, vec![9]).unwrap();
		let base = overlay.deconstruct(MergeStrategy::Discard).unwrap();
		assert!(base.is_empty());
	}

	#[test]
	fn commit_applies_writes() {
		let mut overlay = OverlayedStorage::new(InMemoryStorage::new());
		let slot = overlay.allocate();
		overlay.put(slot, vec![9]).unwrap();
		let base = overlay.deconstruct(MergeStrategy::Commit).unwrap();
		assert_eq!(base.get(slot), Some(vec![9]));
	}
}
