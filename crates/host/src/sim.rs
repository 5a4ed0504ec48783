//! Engine-free host used by tests
//!
//! `SimHost` keeps the object model in a generational arena and gives
//! the native hook points just enough behavior to observe dispatch
//! semantics: authentication starts a session when its flag allows it,
//! den initialization marks the den as begun, and spawn requests consume
//! actor cost while under the cap.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::SlotMap;

use bl2rust_sdk::{EngineClass, EventId, PopulationController, PopulationDen, PressStartMovie};

use crate::adapter::{Host, HookCtx, HookFn, HookResult};
use crate::handle::ObjectHandle;

/// One engine-owned object in the arena
enum EngineObject {
    Den(PopulationDen),
    Controller(PopulationController),
    PressStart(PressStartMovie),
}

impl EngineObject {
    fn class(&self) -> EngineClass {
        match self {
            EngineObject::Den(_) => EngineClass::PopulationOpportunityDen,
            EngineObject::Controller(_) => EngineClass::WillowPopulationMaster,
            EngineObject::PressStart(_) => EngineClass::WillowGFxMoviePressStart,
        }
    }
}

struct Hook {
    owner: String,
    func: Arc<Mutex<HookFn>>,
}

/// In-memory stand-in for the modding runtime
#[derive(Default)]
pub struct SimHost {
    objects: SlotMap<ObjectHandle, EngineObject>,
    /// Creation order, so `find_all` can report oldest-first
    spawn_order: Vec<ObjectHandle>,
    hooks: HashMap<EventId, Vec<Hook>>,
}

impl SimHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a den owned by the simulated engine
    pub fn spawn_den(&mut self, den: PopulationDen) -> ObjectHandle {
        self.spawn(EngineObject::Den(den))
    }

    /// Create a population controller owned by the simulated engine
    pub fn spawn_controller(&mut self, controller: PopulationController) -> ObjectHandle {
        self.spawn(EngineObject::Controller(controller))
    }

    /// Create a press-start menu movie owned by the simulated engine
    pub fn spawn_press_start(&mut self, movie: PressStartMovie) -> ObjectHandle {
        self.spawn(EngineObject::PressStart(movie))
    }

    fn spawn(&mut self, object: EngineObject) -> ObjectHandle {
        let class = object.class();
        let handle = self.objects.insert(object);
        self.spawn_order.push(handle);
        tracing::trace!("spawned {class} -> {handle:?}");
        handle
    }

    /// Collect an object, as the engine's memory manager would
    ///
    /// Stale handles stop resolving from this point on.
    pub fn destroy(&mut self, handle: ObjectHandle) -> bool {
        let removed = self.objects.remove(handle).is_some();
        if removed {
            self.spawn_order.retain(|&h| h != handle);
        }
        removed
    }

    /// Whether `owner` currently has a hook on `event`
    pub fn hook_installed(&self, event: EventId, owner: &str) -> bool {
        self.hooks
            .get(&event)
            .is_some_and(|hooks| hooks.iter().any(|h| h.owner == owner))
    }

    /// Number of hooks installed on `event`
    pub fn hook_count(&self, event: EventId) -> usize {
        self.hooks.get(&event).map_or(0, Vec::len)
    }

    /// Simulate the engine reaching `event`'s native call on `caller`
    ///
    /// Handlers run first; the native implementation runs afterwards
    /// unless a handler reported [`HookResult::Handled`], in which case
    /// it only runs if the handler invoked it explicitly. Returns
    /// whether the native implementation ran.
    pub fn dispatch(&mut self, event: EventId, caller: ObjectHandle) -> bool {
        // Clone the handler list so handlers may mutate the hook table.
        let handlers: Vec<Arc<Mutex<HookFn>>> = self
            .hooks
            .get(&event)
            .map(|hooks| hooks.iter().map(|h| h.func.clone()).collect())
            .unwrap_or_default();

        let mut ctx = HookCtx::new(event, caller);
        let mut suppressed = false;
        for handler in handlers {
            let mut func = handler.lock();
            if (*func)(self, &mut ctx) == HookResult::Handled {
                suppressed = true;
            }
        }

        if !suppressed && !ctx.native_called() {
            self.call_native(event, caller);
            return true;
        }
        ctx.native_called()
    }
}

impl Host for SimHost {
    fn install_hook(&mut self, event: EventId, owner: &str, hook: HookFn) {
        let func = Arc::new(Mutex::new(hook));
        let hooks = self.hooks.entry(event).or_default();
        if let Some(existing) = hooks.iter_mut().find(|h| h.owner == owner) {
            tracing::debug!("replacing hook on {event} for {owner}");
            existing.func = func;
        } else {
            tracing::debug!("installing hook on {event} for {owner}");
            hooks.push(Hook {
                owner: owner.to_string(),
                func,
            });
        }
    }

    fn remove_hook(&mut self, event: EventId, owner: &str) -> bool {
        let Some(hooks) = self.hooks.get_mut(&event) else {
            return false;
        };
        let before = hooks.len();
        hooks.retain(|h| h.owner != owner);
        let removed = hooks.len() != before;
        if removed {
            tracing::debug!("removed hook on {event} for {owner}");
        }
        removed
    }

    fn find_all(&self, class: EngineClass) -> Vec<ObjectHandle> {
        self.spawn_order
            .iter()
            .copied()
            .filter(|&h| self.objects.get(h).is_some_and(|o| o.class() == class))
            .collect()
    }

    fn is_live(&self, handle: ObjectHandle) -> bool {
        self.objects.contains_key(handle)
    }

    fn call_native(&mut self, event: EventId, caller: ObjectHandle) {
        tracing::trace!("native {event} on {caller:?}");
        match event {
            EventId::SparkAuthentication => {
                if let Some(movie) = self.press_start_mut(caller) {
                    if movie.should_start_spark_initialization {
                        movie.spark_session_started = true;
                    }
                }
            }
            EventId::DenPostBeginPlay => {
                if let Some(den) = self.den_mut(caller) {
                    den.has_begun_play = true;
                }
            }
            EventId::SpawnPopulationControlledActor => {
                if let Some(controller) = self.controller_mut(caller) {
                    if controller.actor_cost_used < controller.max_actor_cost {
                        controller.actor_cost_used += 1;
                    }
                }
            }
        }
    }

    fn den(&self, handle: ObjectHandle) -> Option<&PopulationDen> {
        match self.objects.get(handle) {
            Some(EngineObject::Den(den)) => Some(den),
            _ => None,
        }
    }

    fn den_mut(&mut self, handle: ObjectHandle) -> Option<&mut PopulationDen> {
        match self.objects.get_mut(handle) {
            Some(EngineObject::Den(den)) => Some(den),
            _ => None,
        }
    }

    fn controller(&self, handle: ObjectHandle) -> Option<&PopulationController> {
        match self.objects.get(handle) {
            Some(EngineObject::Controller(controller)) => Some(controller),
            _ => None,
        }
    }

    fn controller_mut(&mut self, handle: ObjectHandle) -> Option<&mut PopulationController> {
        match self.objects.get_mut(handle) {
            Some(EngineObject::Controller(controller)) => Some(controller),
            _ => None,
        }
    }

    fn press_start(&self, handle: ObjectHandle) -> Option<&PressStartMovie> {
        match self.objects.get(handle) {
            Some(EngineObject::PressStart(movie)) => Some(movie),
            _ => None,
        }
    }

    fn press_start_mut(&mut self, handle: ObjectHandle) -> Option<&mut PressStartMovie> {
        match self.objects.get_mut(handle) {
            Some(EngineObject::PressStart(movie)) => Some(movie),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn den_with_counts(n: i32) -> PopulationDen {
        PopulationDen {
            counts: bl2rust_sdk::SpawnCounts {
                max_active: n,
                max_active_normal: n,
                max_active_threatened: n,
                max_total: n,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_stale_handle_stops_resolving() {
        let mut host = SimHost::new();
        let den = host.spawn_den(den_with_counts(3));
        assert!(host.is_live(den));
        assert!(host.den(den).is_some());

        assert!(host.destroy(den));
        assert!(!host.is_live(den));
        assert!(host.den(den).is_none());
        assert!(!host.destroy(den));
    }

    #[test]
    fn test_find_all_is_oldest_first_and_skips_collected() {
        let mut host = SimHost::new();
        let first = host.spawn_controller(PopulationController::default());
        let second = host.spawn_controller(PopulationController::default());
        let _den = host.spawn_den(den_with_counts(1));

        let controllers = host.find_all(EngineClass::WillowPopulationMaster);
        assert_eq!(controllers, vec![first, second]);

        host.destroy(second);
        let controllers = host.find_all(EngineClass::WillowPopulationMaster);
        assert_eq!(controllers, vec![first]);
    }

    #[test]
    fn test_hook_install_replace_remove() {
        let mut host = SimHost::new();
        let event = EventId::SparkAuthentication;

        host.install_hook(event, "a", Box::new(|_, _| HookResult::Continue));
        host.install_hook(event, "b", Box::new(|_, _| HookResult::Continue));
        assert_eq!(host.hook_count(event), 2);

        // Same owner replaces rather than stacking
        host.install_hook(event, "a", Box::new(|_, _| HookResult::Handled));
        assert_eq!(host.hook_count(event), 2);

        assert!(host.remove_hook(event, "a"));
        assert!(!host.remove_hook(event, "a"));
        assert!(host.hook_installed(event, "b"));
    }

    #[test]
    fn test_dispatch_without_hooks_runs_native() {
        let mut host = SimHost::new();
        let movie = host.spawn_press_start(PressStartMovie::default());
        assert!(host.dispatch(EventId::SparkAuthentication, movie));
        assert!(host.press_start(movie).unwrap().spark_session_started);
    }

    #[test]
    fn test_handled_suppresses_native() {
        let mut host = SimHost::new();
        let movie = host.spawn_press_start(PressStartMovie::default());
        host.install_hook(
            EventId::SparkAuthentication,
            "t",
            Box::new(|_, _| HookResult::Handled),
        );
        assert!(!host.dispatch(EventId::SparkAuthentication, movie));
        assert!(!host.press_start(movie).unwrap().spark_session_started);
    }

    #[test]
    fn test_call_native_runs_once_before_handler_logic() {
        let mut host = SimHost::new();
        let den = host.spawn_den(den_with_counts(2));
        host.install_hook(
            EventId::DenPostBeginPlay,
            "t",
            Box::new(|host, ctx| {
                ctx.call_native(host);
                // A second request must be a no-op
                ctx.call_native(host);
                let caller = ctx.caller();
                let den = host.den_mut(caller).unwrap();
                assert!(den.has_begun_play);
                den.counts.max_total += 1;
                HookResult::Handled
            }),
        );
        assert!(host.dispatch(EventId::DenPostBeginPlay, den));
        let den = host.den(den).unwrap();
        assert!(den.has_begun_play);
        assert_eq!(den.counts.max_total, 3);
    }

    #[test]
    fn test_native_spawn_respects_cap() {
        let mut host = SimHost::new();
        let controller = host.spawn_controller(PopulationController {
            max_actor_cost: 2,
            actor_cost_used: 0,
        });
        for _ in 0..5 {
            host.dispatch(EventId::SpawnPopulationControlledActor, controller);
        }
        assert_eq!(host.controller(controller).unwrap().actor_cost_used, 2);
    }
}
