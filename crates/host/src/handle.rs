//! Generational object handles
//!
//! The engine's memory manager may collect any object between two hook
//! invocations, so mods hold handles instead of references. A handle
//! pairs an arena slot with a generation counter; once the slot is
//! reused the old handle stops resolving, the same way the engine's
//! serial-numbered object handles invalidate recycled entries.
//!
//! A handle is only ever dereferenced through [`Host`] accessors, which
//! return `None` for anything no longer live.
//!
//! [`Host`]: crate::adapter::Host

use slotmap::new_key_type;

new_key_type! {
    /// Handle to an object owned by the host engine
    pub struct ObjectHandle;
}
