//! Core data model of the metered shadow-array layer.

#![forbid(unsafe_code, unused_variables)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
mod handle;
mod kind;
mod store;
mod value;

pub use crate::error::{Corruption, ExitError};
pub use crate::handle::{ArrayId, PersistenceHandle, Slot};
pub use crate::kind::ElementKind;
pub use crate::store::BackingStore;
pub use crate::value::Value;
