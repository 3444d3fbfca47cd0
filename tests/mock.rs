extern crate avm;

use std::cell::Cell;

use avm::backend::{InMemoryStorage, Storage};
use avm::{ExitError, Slot};

/// In-memory storage that counts traffic.
#[derive(Debug, Default)]
pub struct MockStorage {
	pub inner: InMemoryStorage,
	pub reads: Cell<usize>,
	pub writes: usize,
}

impl MockStorage {
	pub fn with_record(slot: Slot, record: Vec<u8>) -> Self {
		let mut storage = Self::default();
		storage.inner.insert(slot, record);
		storage
	}
}

impl Storage for MockStorage {
	fn get(&self, slot: Slot) -> Option<Vec<u8>> {
		self.reads.set(self.reads.get() + 1);
		self.inner.get(slot)
	}

	fn allocate(&mut self) -> Slot {
		self.inner.allocate()
	}

	fn put(&mut self, slot: Slot, record: Vec<u8>) -> Result<(), ExitError> {
		self.writes += 1;
		self.inner.put(slot, record)
	}
}
