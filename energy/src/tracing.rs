//! Allows to listen to energy meter events.

use super::Snapshot;

environmental::environmental!(listener: dyn EventListener + 'static);

pub trait EventListener {
	fn event(&mut self, event: Event);
}

#[derive(Debug, Copy, Clone)]
pub enum Event {
	/// A charge was applied.
	Charge { cost: u64, snapshot: Snapshot },
	/// A charge was refused. The snapshot is the unchanged ledger.
	Exhausted { cost: u64, snapshot: Snapshot },
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
