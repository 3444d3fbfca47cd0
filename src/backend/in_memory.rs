use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use super::Storage;
use crate::{ExitError, Slot};

#[derive(Clone, Debug, Default)]
pub struct InMemoryStorage {
	pub records: BTreeMap<Slot, Vec<u8>>,
	next_slot: u64,
}

impl InMemoryStorage {
	pub fn new() -> Self {
		Self::default()
	}

	/// Seed a record, bypassing slot allocation.
	pub fn insert(&mut self, slot: Slot, record: Vec<u8>) {
		self.records.insert(slot, record);
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

impl Storage for InMemoryStorage {
	fn get(&self, slot: Slot) -> Option<Vec<u8>> {
		self.records.get(&slot).cloned()
	}

	fn allocate(&mut self) -> Slot {
		while self.records.contains_key(&Slot(self.next_slot)) {
			self.next_slot += 1;
		}
		let slot = Slot(self.next_slot);
		self.next_slot += 1;
		slot
	}

	fn put(&mut self, slot: Slot, record: Vec<u8>) -> Result<(), ExitError> {
		self.records.insert(slot, record);
		Ok(())
	}
}
