//! The host adapter trait and hook dispatch types
//!
//! Hooks are installed against symbolic [`EventId`]s under an owner name,
//! mirroring how the runtime registers callbacks against named native
//! functions. A handler decides what happens to the native
//! implementation through its [`HookResult`], or runs it early with
//! [`HookCtx::call_native`].

use bl2rust_sdk::{EngineClass, EventId, PopulationController, PopulationDen, PressStartMovie};

use crate::handle::ObjectHandle;

/// What a hook handler wants done with the native implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookResult {
    /// Let the native implementation run after the handlers
    Continue,
    /// The handler dealt with the call; skip the native implementation
    /// (unless the handler already ran it via [`HookCtx::call_native`])
    Handled,
}

/// Per-invocation context handed to hook handlers
pub struct HookCtx {
    event: EventId,
    caller: ObjectHandle,
    native_called: bool,
}

impl HookCtx {
    /// Context for one native call interception
    pub fn new(event: EventId, caller: ObjectHandle) -> Self {
        Self {
            event,
            caller,
            native_called: false,
        }
    }

    /// The hook point being dispatched
    pub fn event(&self) -> EventId {
        self.event
    }

    /// The engine object the native function was called on
    pub fn caller(&self) -> ObjectHandle {
        self.caller
    }

    /// Run the native implementation now, before the handler continues
    ///
    /// Runs at most once per invocation; the dispatcher will not run the
    /// native path a second time afterwards.
    pub fn call_native(&mut self, host: &mut dyn Host) {
        if !self.native_called {
            self.native_called = true;
            host.call_native(self.event, self.caller);
        }
    }

    /// Whether the native implementation has already run
    pub fn native_called(&self) -> bool {
        self.native_called
    }
}

/// A hook handler
///
/// Handlers are `FnMut` so they can carry shared mod state; the host
/// invokes them synchronously on its own event thread.
pub type HookFn = Box<dyn FnMut(&mut dyn Host, &mut HookCtx) -> HookResult + Send>;

/// The contract the modding runtime exposes to mods
///
/// Everything a mod may do to the engine goes through this trait: hook
/// table mutation, live-object enumeration, and field access by handle.
/// Accessors return `None` for handles the engine has collected.
pub trait Host {
    /// Install `hook` on `event` under `owner`, replacing any hook the
    /// same owner already has on that event
    fn install_hook(&mut self, event: EventId, owner: &str, hook: HookFn);

    /// Remove the hook `owner` installed on `event`
    ///
    /// Returns `true` if a hook was present.
    fn remove_hook(&mut self, event: EventId, owner: &str) -> bool;

    /// All live instances of `class`, oldest first
    ///
    /// The last entry is the most recently created instance, which for
    /// singleton-like classes is the current one.
    fn find_all(&self, class: EngineClass) -> Vec<ObjectHandle>;

    /// Whether `handle` still refers to a live object
    fn is_live(&self, handle: ObjectHandle) -> bool;

    /// Run the native implementation of `event` on `caller`
    fn call_native(&mut self, event: EventId, caller: ObjectHandle);

    fn den(&self, handle: ObjectHandle) -> Option<&PopulationDen>;
    fn den_mut(&mut self, handle: ObjectHandle) -> Option<&mut PopulationDen>;
    fn controller(&self, handle: ObjectHandle) -> Option<&PopulationController>;
    fn controller_mut(&mut self, handle: ObjectHandle) -> Option<&mut PopulationController>;
    fn press_start(&self, handle: ObjectHandle) -> Option<&PressStartMovie>;
    fn press_start_mut(&mut self, handle: ObjectHandle) -> Option<&mut PressStartMovie>;
}
