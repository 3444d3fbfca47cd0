use crate::{BackingStore, ElementKind, PersistenceHandle, Slot};

/// Contract-visible surrogate of a native array.
///
/// States reachable within one invocation:
///
/// * `Unbound`, materialized: fresh arrays.
/// * `Bound`, unmaterialized: handles created from storage.
/// * `Bound`, materialized: after first access or after commit. Terminal.
#[derive(Clone, Debug)]
pub struct ShadowArray {
	kind: ElementKind,
	handle: PersistenceHandle,
	store: Option<BackingStore>,
	dirty: bool,
}

impl ShadowArray {
	pub(crate) fn fresh(store: BackingStore) -> Self {
		Self {
			kind: store.kind(),
			handle: PersistenceHandle::Unbound,
			store: Some(store),
			dirty: false,
		}
	}

	pub(crate) fn from_storage(slot: Slot, kind: ElementKind) -> Self {
		Self {
			kind,
			handle: PersistenceHandle::Bound(slot),
			store: None,
			dirty: false,
		}
	}

	pub fn kind(&self) -> ElementKind {
		self.kind
	}

	pub fn handle(&self) -> PersistenceHandle {
		self.handle
	}

	pub fn is_materialized(&self) -> bool {
		self.store.is_some()
	}

	/// Whether a bound array changed since it was materialized and has to be
	/// written back at commit.
	pub fn is_dirty(&self) -> bool {
		self.dirty
	}

	/// Backing store, `None` while unmaterialized.
	pub fn store(&self) -> Option<&BackingStore> {
		self.store.as_ref()
	}

	/// Length, `None` while unmaterialized.
	pub fn length(&self) -> Option<usize> {
		self.store.as_ref().map(BackingStore::len)
	}

	pub(crate) fn store_mut(&mut self) -> Option<&mut BackingStore> {
		if self.store.is_some() {
			self.dirty = true;
		}
		self.store.as_mut()
	}

	pub(crate) fn materialize(&mut self, store: BackingStore) {
		debug_assert!(self.store.is_none());
		self.store = Some(store);
	}

	pub(crate) fn bind(&mut self, slot: Slot) {
		debug_assert!(!self.handle.is_bound());
		self.handle = PersistenceHandle::Bound(slot);
	}

	pub(crate) fn mark_clean(&mut self) {
		self.dirty = false;
	}
}
