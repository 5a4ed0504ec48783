//! bl2rust host - typed adapter over the modding runtime
//!
//! The real engine is an external collaborator: it owns every object the
//! mods touch and drives every callback. This crate pins that contract
//! down as a trait so mod logic never handles raw engine references:
//!
//! - [`Host`] - hook installation/removal by symbolic `EventId`,
//!   live-object enumeration, and field access through handles
//! - [`ObjectHandle`] - generational handle, never dereferenced without
//!   a liveness check
//! - [`sim`] - an engine-free in-memory host used by tests

pub mod adapter;
pub mod handle;
pub mod sim;

pub use adapter::{Host, HookCtx, HookFn, HookResult};
pub use handle::ObjectHandle;
pub use sim::SimHost;
