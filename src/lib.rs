//! Metered shadow arrays for a deterministic contract virtual machine.
//!
//! Contract bytecode never touches native arrays. Every array it sees is a
//! shadow array owned by an [`Invocation`], which charges energy before each
//! allocating operation, loads persisted arrays lazily on first access and
//! writes the reachable object graph back to node storage at commit.

#![forbid(unsafe_code, unused_variables)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use avm_core::*;
pub use avm_energy as energy;

#[cfg(feature = "tracing")]
pub mod tracing;

#[cfg(feature = "tracing")]
macro_rules! event {
	($x:expr) => {
		use crate::tracing::Event::*;
		$x.emit();
	};
}

#[cfg(not(feature = "tracing"))]
macro_rules! event {
	($x:expr) => {};
}

pub mod backend;
pub mod codec;
mod heap;
mod invocation;
pub mod serializer;
mod shadow;

pub use crate::heap::Heap;
pub use crate::invocation::{Finalized, Invocation};
pub use crate::shadow::ShadowArray;
