//! Allows to listen to shadow-array lifecycle events.

use crate::{ArrayId, ElementKind, Slot};

environmental::environmental!(listener: dyn EventListener + 'static);

pub trait EventListener {
	fn event(&mut self, event: Event);
}

#[derive(Debug, Copy, Clone)]
pub enum Event {
	Create {
		id: ArrayId,
		kind: ElementKind,
		length: i32,
	},
	CloneArray {
		source: ArrayId,
		id: ArrayId,
	},
	Materialize {
		id: ArrayId,
		slot: Slot,
	},
	Persist {
		id: ArrayId,
		slot: Slot,
	},
}

impl Event {
	pub(crate) fn emit(self) {
		listener::with(|listener| listener.event(self));
	}
}

/// Run closure with provided listener.
pub fn using<R, F: FnOnce() -> R>(new: &mut (dyn EventListener + 'static), f: F) -> R {
	listener::using(new, f)
}
