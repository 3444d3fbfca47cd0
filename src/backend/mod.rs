//! Storage collaborators of the object-graph serializer.
//!
//! The byte layout of a record is opaque to the backend. A backend only
//! hands out slots and stores and returns bytes, and must do both
//! deterministically.

mod in_memory;
mod overlayed;

pub use self::in_memory::InMemoryStorage;
pub use self::overlayed::OverlayedStorage;

use alloc::vec::Vec;

use crate::{ExitError, Slot};

/// Node storage as seen by one invocation.
#[auto_impl::auto_impl(&mut, Box)]
pub trait Storage {
	/// Record persisted at `slot`, `None` when absent.
	fn get(&self, slot: Slot) -> Option<Vec<u8>>;
	/// Reserve a fresh slot. A slot is handed out at most once.
	fn allocate(&mut self) -> Slot;
	/// Write the record of `slot`.
	fn put(&mut self, slot: Slot, record: Vec<u8>) -> Result<(), ExitError>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MergeStrategy {
	Commit,
	Discard,
}
