//! Bridges live shadow arrays and node storage.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::backend::Storage;
use crate::codec::{self, Decoded};
use crate::heap::Heap;
use crate::{ArrayId, BackingStore, Corruption, ExitError, PersistenceHandle, Slot};

/// Outcome of persisting an object graph.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Persisted {
	/// Slot of each root, in root order.
	pub roots: Vec<Slot>,
	/// Number of records written.
	pub written: usize,
}

/// Populate the backing store of `id` from its bound slot. No-op for arrays
/// that are already materialized.
///
/// Children of a reference array become unmaterialized handles; they are
/// decoded on their own first access.
pub fn materialize<S: Storage>(heap: &mut Heap, storage: &S, id: ArrayId) -> Result<(), ExitError> {
	let array = heap.get(id)?;
	if array.is_materialized() {
		return Ok(());
	}

	let kind = array.kind();
	let slot = match array.handle() {
		PersistenceHandle::Bound(slot) => slot,
		// Fresh arrays are materialized at creation.
		PersistenceHandle::Unbound => return Err(ExitError::NotMaterialized),
	};

	let bytes = storage.get(slot).ok_or(Corruption::NotFound)?;
	let store = match codec::decode(kind, &bytes)? {
		Decoded::Values(store) => store,
		Decoded::Children(children) => BackingStore::Reference(
			children
				.into_iter()
				.map(|child| {
					child
						.map(|(kind, slot)| heap.handle_for(slot, kind))
						.transpose()
				})
				.collect::<Result<_, _>>()?,
		),
	};

	log::debug!(target: "avm", "Materialized {:?} from {:?}: {} elements", id, slot, store.len());
	event!(Materialize { id, slot });

	heap.get_mut(id)?.materialize(store);
	Ok(())
}

/// Persist everything reachable from `roots`.
///
/// Unbound arrays are assigned fresh slots and encoded. Bound arrays are
/// referenced by slot and re-encoded only when they changed after
/// materialization. Unmaterialized arrays cannot have changed and are not
/// descended into. The walk is depth-first over an identity-keyed visited
/// set, so cycles terminate and each array is handled once.
pub fn persist<S: Storage>(
	heap: &mut Heap,
	storage: &mut S,
	roots: &[ArrayId],
) -> Result<Persisted, ExitError> {
	let mut visited = BTreeSet::new();
	let mut pending = Vec::new();
	let mut stack: Vec<ArrayId> = roots.iter().rev().copied().collect();

	while let Some(id) = stack.pop() {
		if !visited.insert(id) {
			continue;
		}

		let array = heap.get(id)?;
		let store = match array.store() {
			Some(store) => store,
			None => continue,
		};
		let unbound = !array.handle().is_bound();
		let write = unbound || array.is_dirty();

		let children: Vec<ArrayId> = store.references().collect();
		stack.extend(children.into_iter().rev().filter(|child| !visited.contains(child)));

		if unbound {
			let slot = storage.allocate();
			heap.bind(id, slot)?;
		}
		if write {
			pending.push(id);
		}
	}

	for id in &pending {
		let array = heap.get(*id)?;
		let slot = array.handle().slot().ok_or(ExitError::DanglingReference)?;
		let store = array.store().ok_or(ExitError::NotMaterialized)?;
		let record = codec::encode(store, |child| {
			let child = heap.get(child)?;
			let slot = child.handle().slot().ok_or(ExitError::DanglingReference)?;
			Ok((child.kind(), slot))
		})?;

		log::debug!(target: "avm", "Persisting {:?} to {:?}: {} bytes", id, slot, record.len());
		event!(Persist { id: *id, slot });

		storage.put(slot, record)?;
		heap.get_mut(*id)?.mark_clean();
	}

	let roots = roots
		.iter()
		.map(|root| {
			heap.get(*root)?
				.handle()
				.slot()
				.ok_or(ExitError::DanglingReference)
		})
		.collect::<Result<_, _>>()?;

	Ok(Persisted {
		roots,
		written: pending.len(),
	})
}
