use alloc::vec::Vec;

use crate::backend::Storage;
use crate::energy::{Config, EnergyCost, Energymeter};
use crate::heap::Heap;
use crate::serializer;
use crate::shadow::ShadowArray;
use crate::{ArrayId, BackingStore, ElementKind, ExitError, Slot, Value};

/// Result of a successful invocation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Finalized {
	/// Energy consumed by the invocation.
	pub used_energy: u64,
	/// Slot of each root, in the order the roots were added.
	pub roots: Vec<Slot>,
	/// Number of records written to storage.
	pub written: usize,
}

/// One execution of contract bytecode under a fixed energy budget.
///
/// Owns the energy meter and every shadow array of the execution. The first
/// fatal error halts the invocation: it is recorded, and every later
/// operation fails with it. Writes already made to storage are not undone
/// here; the transaction layer owns atomic rollback.
pub struct Invocation<'config, 'storage, S> {
	meter: Energymeter<'config>,
	heap: Heap,
	storage: &'storage mut S,
	roots: Vec<ArrayId>,
	exit: Option<ExitError>,
}

impl<'config, 'storage, S: Storage> Invocation<'config, 'storage, S> {
	pub fn new(energy_limit: u64, config: &'config Config, storage: &'storage mut S) -> Self {
		Self {
			meter: Energymeter::new(energy_limit, config),
			heap: Heap::new(),
			storage,
			roots: Vec::new(),
			exit: None,
		}
	}

	pub fn meter(&self) -> &Energymeter<'config> {
		&self.meter
	}

	pub fn remaining_energy(&self) -> u64 {
		self.meter.remaining()
	}

	/// The fatal error that halted the invocation, if any.
	pub fn exit_reason(&self) -> Option<ExitError> {
		self.exit
	}

	/// Array owned by this invocation, in whatever state it currently is.
	pub fn array(&self, id: ArrayId) -> Result<&ShadowArray, ExitError> {
		self.heap.get(id)
	}

	/// External abort signal from the transaction layer.
	pub fn abort(&mut self) {
		if self.exit.is_none() {
			log::debug!(target: "avm", "Invocation aborted");
			self.exit = Some(ExitError::Aborted);
		}
	}

	/// Perform an operation, halting the invocation if it fails.
	fn perform<R, F: FnOnce(&mut Self) -> Result<R, ExitError>>(
		&mut self,
		f: F,
	) -> Result<R, ExitError> {
		if let Some(exit) = self.exit {
			return Err(exit);
		}

		match f(self) {
			Ok(r) => Ok(r),
			Err(e) => {
				log::debug!(
					target: "avm",
					"Invocation halted: {:?}, remaining energy {}",
					e,
					self.meter.remaining()
				);
				self.exit = Some(e);
				Err(e)
			}
		}
	}

	fn materialize(&mut self, id: ArrayId) -> Result<&BackingStore, ExitError> {
		serializer::materialize(&mut self.heap, &*self.storage, id)?;
		self.heap
			.get(id)?
			.store()
			.ok_or(ExitError::NotMaterialized)
	}

	/// Allocate a fresh array of `length` default elements.
	///
	/// Charged `length * per_element_fee(kind)` before anything is allocated.
	/// The cost model clamps a negative length to zero and accepts it; the
	/// allocation that follows is what fails, with `NegativeLength`.
	pub fn create(&mut self, length: i32, kind: ElementKind) -> Result<ArrayId, ExitError> {
		self.perform(|s| {
			s.meter.record_cost(EnergyCost::Initialize { kind, length })?;
			if length < 0 {
				return Err(ExitError::NegativeLength);
			}

			let id = s.heap.insert(ShadowArray::fresh(BackingStore::new(kind, length as usize)));
			event!(Create { id, kind, length });
			Ok(id)
		})
	}

	/// Handle to the array persisted at `slot`. Free; nothing is read until
	/// first access.
	pub fn create_from_storage(&mut self, slot: Slot, kind: ElementKind) -> Result<ArrayId, ExitError> {
		self.perform(|s| {
			let id = s.heap.handle_for(slot, kind)?;
			log::debug!(target: "avm", "Handle {:?} for {:?} ({:?})", id, slot, kind);
			Ok(id)
		})
	}

	/// Number of elements. Materializes the array if needed.
	pub fn length(&mut self, id: ArrayId) -> Result<usize, ExitError> {
		self.perform(|s| Ok(s.materialize(id)?.len()))
	}

	/// Element at `index`. Materializes the array if needed.
	pub fn get(&mut self, id: ArrayId, index: i32) -> Result<Value, ExitError> {
		self.perform(|s| {
			let store = s.materialize(id)?;
			usize::try_from(index)
				.ok()
				.and_then(|index| store.get(index))
				.ok_or(ExitError::InvalidIndex)
		})
	}

	/// Store `value` at `index`. Materializes the array if needed.
	pub fn set(&mut self, id: ArrayId, index: i32, value: Value) -> Result<(), ExitError> {
		self.perform(|s| {
			if let Value::Reference(Some(target)) = value {
				s.heap.get(target)?;
			}
			let index = usize::try_from(index).map_err(|_| ExitError::InvalidIndex)?;

			s.materialize(id)?;
			s.heap
				.get_mut(id)?
				.store_mut()
				.ok_or(ExitError::NotMaterialized)?
				.set(index, value)
		})
	}

	/// Bulk read access to the backing store. Materializes the array if
	/// needed.
	pub fn backing_store(&mut self, id: ArrayId) -> Result<&BackingStore, ExitError> {
		self.perform(|s| s.materialize(id).map(|_| ()))?;
		self.heap.get(id)?.store().ok_or(ExitError::NotMaterialized)
	}

	/// Replace the backing store of a materialized array. The replacement
	/// must have the same kind and length.
	pub fn set_backing_store(&mut self, id: ArrayId, store: BackingStore) -> Result<(), ExitError> {
		self.perform(|s| {
			for target in store.references() {
				s.heap.get(target)?;
			}

			let current = s.heap.get(id)?.store().ok_or(ExitError::NotMaterialized)?;
			if current.kind() != store.kind() || current.len() != store.len() {
				return Err(ExitError::InvalidBackingStore);
			}

			if let Some(current) = s.heap.get_mut(id)?.store_mut() {
				*current = store;
			}
			Ok(())
		})
	}

	/// Shallow copy of an array into a new, unbound array.
	///
	/// Charged `clone_base_fee + length * reference_type_fee` whatever the
	/// element kind. Nothing changes when the charge is refused.
	pub fn clone_array(&mut self, id: ArrayId) -> Result<ArrayId, ExitError> {
		self.perform(|s| {
			let length = s.materialize(id)?.len();
			let length = i32::try_from(length).map_err(|_| ExitError::ArithmeticOverflow)?;
			s.meter.record_cost(EnergyCost::Clone { length })?;

			let store = s.heap.get(id)?.store().ok_or(ExitError::NotMaterialized)?.clone();
			let clone = s.heap.insert(ShadowArray::fresh(store));
			event!(CloneArray { source: id, id: clone });
			Ok(clone)
		})
	}

	/// Add an array to the root set persisted at commit.
	pub fn add_root(&mut self, id: ArrayId) -> Result<(), ExitError> {
		self.perform(|s| {
			s.heap.get(id)?;
			s.roots.push(id);
			Ok(())
		})
	}

	/// Commit hook: persist everything reachable from the root set.
	pub fn finalize(mut self) -> Result<Finalized, ExitError> {
		let roots = core::mem::take(&mut self.roots);
		let persisted = self.perform(|s| serializer::persist(&mut s.heap, &mut *s.storage, &roots))?;

		log::debug!(
			target: "avm",
			"Invocation finalized: {} records written, {} energy used",
			persisted.written,
			self.meter.used()
		);

		Ok(Finalized {
			used_energy: self.meter.used(),
			roots: persisted.roots,
			written: persisted.written,
		})
	}

	/// Rollback hook: drop every array of the invocation. Returns the energy
	/// consumed, which is not refunded.
	pub fn rollback(self) -> u64 {
		log::debug!(
			target: "avm",
			"Invocation rolled back: {} arrays dropped, {} energy used",
			self.heap.len(),
			self.meter.used()
		);
		self.meter.used()
	}
}
