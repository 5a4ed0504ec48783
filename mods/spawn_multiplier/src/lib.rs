//! # Spawn Multiplier
//!
//! Multiplies the amount of spawns you're getting. Every eligible den's
//! spawn caps are scaled by a configurable multiplier, newly created
//! dens are scaled as they initialize, and the population controller's
//! global actor-cost cap follows one of three spawn-limit modes.
//!
//! State the hooks share (the tracked controller, its pre-scaling cap,
//! and the last multiplier applied) lives in one struct behind a mutex,
//! cloned into each handler.

mod den;

use std::sync::Arc;

use parking_lot::Mutex;

use bl2rust_core::host::{Host, HookResult, ObjectHandle};
use bl2rust_core::sdk::{EngineClass, EventId, UNLIMITED_ACTOR_COST};
use bl2rust_core::{
    GameMod, ModError, ModKey, ModMeta, ModRegistry, ModType, OptionChange, OptionDesc,
    OptionValue, Slider, Spinner,
};

use den::multiply_den_if_able;

const MULTIPLIER_OPTION: &str = "Multiplier";
const SPAWN_LIMIT_OPTION: &str = "Spawn Limit";

/// How the population controller's global cap reacts to the multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpawnLimit {
    /// Leave the cap alone
    Standard,
    /// Scale the cap with the multiplier
    #[default]
    Linear,
    /// Remove the cap
    Unlimited,
}

impl SpawnLimit {
    pub const CHOICES: [&'static str; 3] = ["Standard", "Linear", "Unlimited"];

    pub fn as_str(self) -> &'static str {
        match self {
            SpawnLimit::Standard => "Standard",
            SpawnLimit::Linear => "Linear",
            SpawnLimit::Unlimited => "Unlimited",
        }
    }

    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "Standard" => Some(SpawnLimit::Standard),
            "Linear" => Some(SpawnLimit::Linear),
            "Unlimited" => Some(SpawnLimit::Unlimited),
            _ => None,
        }
    }

    /// The cap this mode produces from a pre-scaling cap and multiplier
    fn cap(self, original: i32, multiplier: i32) -> i32 {
        match self {
            SpawnLimit::Standard => original,
            SpawnLimit::Linear => original.saturating_mul(multiplier),
            SpawnLimit::Unlimited => UNLIMITED_ACTOR_COST,
        }
    }
}

/// State shared between the mod and its hook handlers
struct State {
    multiplier: Slider,
    spawn_limit: Spinner,
    /// Multiplier in effect at the last den rescale
    old_multiplier: i32,
    /// Most recently observed population controller
    current_pop_master: Option<ObjectHandle>,
    /// The tracked controller's cap before any scaling
    original_limit: Option<i32>,
}

impl State {
    fn new() -> Self {
        let multiplier = Slider::new(
            MULTIPLIER_OPTION,
            "The amount to multiply spawns by.",
            1,
        )
        .with_min(1)
        .with_max(25)
        .with_step(1);
        let spawn_limit = Spinner::new(
            SPAWN_LIMIT_OPTION,
            "How to handle the spawn limit. Standard: Don't change it; Linear: Increase \
             linearly with the multiplier; Unlimited: Remove it.",
            SpawnLimit::default().as_str(),
            &SpawnLimit::CHOICES,
        );
        let old_multiplier = multiplier.value();
        Self {
            multiplier,
            spawn_limit,
            old_multiplier,
            current_pop_master: None,
            original_limit: None,
        }
    }

    fn spawn_limit(&self) -> SpawnLimit {
        SpawnLimit::from_choice(self.spawn_limit.current()).unwrap_or_default()
    }

    /// Adopt `caller` as the tracked controller if it is new, recording
    /// its current cap as the pre-scaling original
    fn track_controller(&mut self, host: &dyn Host, caller: ObjectHandle) -> bool {
        if self.current_pop_master == Some(caller) {
            return false;
        }
        let Some(controller) = host.controller(caller) else {
            return false;
        };
        self.current_pop_master = Some(caller);
        self.original_limit = Some(controller.max_actor_cost);
        true
    }
}

pub struct SpawnMultiplier {
    meta: ModMeta,
    state: Arc<Mutex<State>>,
}

impl SpawnMultiplier {
    pub fn new() -> Self {
        Self {
            meta: ModMeta {
                name: "Spawn Multiplier",
                author: "apple1417",
                description: "Adds an option to let you easily multiply the amount of spawns \
                              you're getting.\n\
                              Make sure to go to settings to configure what the multiplier is.",
                version: "1.3",
                mod_type: ModType::Gameplay,
            },
            state: Arc::new(Mutex::new(State::new())),
        }
    }
}

impl Default for SpawnMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl GameMod for SpawnMultiplier {
    fn meta(&self) -> &ModMeta {
        &self.meta
    }

    fn options(&self) -> Vec<OptionDesc> {
        let state = self.state.lock();
        vec![state.multiplier.descriptor(), state.spawn_limit.descriptor()]
    }

    fn enable(&mut self, host: &mut dyn Host) -> Result<(), ModError> {
        let multiplier = {
            let mut state = self.state.lock();
            state.old_multiplier = state.multiplier.value();
            state.multiplier.value()
        };

        // Dens already in the world
        for den in host.find_all(EngineClass::PopulationOpportunityDen) {
            multiply_den_if_able(host, den, multiplier as f64);
        }

        let state = Arc::clone(&self.state);
        host.install_hook(
            EventId::SpawnPopulationControlledActor,
            self.meta.name,
            Box::new(move |host, ctx| {
                let mut state = state.lock();
                let caller = ctx.caller();
                if state.track_controller(&*host, caller) {
                    let original = state.original_limit.unwrap_or_default();
                    let mode = state.spawn_limit();
                    if mode != SpawnLimit::Standard {
                        let cap = mode.cap(original, state.multiplier.value());
                        if let Some(controller) = host.controller_mut(caller) {
                            controller.max_actor_cost = cap;
                        }
                    }
                }
                // The native spawn logic must still run
                HookResult::Continue
            }),
        );

        let state = Arc::clone(&self.state);
        host.install_hook(
            EventId::DenPostBeginPlay,
            self.meta.name,
            Box::new(move |host, ctx| {
                // Let the engine finish initializing the den first
                ctx.call_native(host);
                let multiplier = state.lock().multiplier.value();
                multiply_den_if_able(host, ctx.caller(), multiplier as f64);
                HookResult::Handled
            }),
        );

        tracing::debug!("spawn hooks installed, multiplier x{multiplier}");
        Ok(())
    }

    fn disable(&mut self, host: &mut dyn Host) -> Result<(), ModError> {
        host.remove_hook(EventId::SpawnPopulationControlledActor, self.meta.name);
        host.remove_hook(EventId::DenPostBeginPlay, self.meta.name);

        let mut state = self.state.lock();
        let inverse = 1.0 / state.multiplier.value() as f64;
        for den in host.find_all(EngineClass::PopulationOpportunityDen) {
            multiply_den_if_able(host, den, inverse);
        }

        // Careful in case our reference has been collected
        if let (Some(tracked), Some(original)) = (state.current_pop_master, state.original_limit) {
            let masters = host.find_all(EngineClass::WillowPopulationMaster);
            if masters.last() == Some(&tracked) {
                if let Some(controller) = host.controller_mut(tracked) {
                    controller.max_actor_cost = original;
                }
            }
        }
        state.current_pop_master = None;
        state.original_limit = None;

        tracing::debug!("spawn hooks removed, dens restored");
        Ok(())
    }

    fn option_changed(&mut self, host: &mut dyn Host, change: &OptionChange) {
        let mut state = self.state.lock();

        // Only den numbers need redoing on a multiplier change; the spawn
        // limit is always recomputed below
        if change.caption == MULTIPLIER_OPTION {
            let OptionValue::Int(value) = &change.value else {
                return;
            };
            let new_multiplier = state.multiplier.set(*value);
            // The menu delivers this after the value change, so rescale by
            // the ratio rather than the absolute value
            let adjustment = new_multiplier as f64 / state.old_multiplier as f64;
            state.old_multiplier = new_multiplier;

            for den in host.find_all(EngineClass::PopulationOpportunityDen) {
                multiply_den_if_able(host, den, adjustment);
            }
        } else if change.caption == SPAWN_LIMIT_OPTION {
            let OptionValue::Choice(choice) = &change.value else {
                return;
            };
            state.spawn_limit.set(choice);
        } else {
            // Not one of ours
            return;
        }

        // Again careful in case our reference has been collected
        let masters = host.find_all(EngineClass::WillowPopulationMaster);
        let Some(&master) = masters.last() else {
            return;
        };
        state.track_controller(&*host, master);
        if let Some(original) = state.original_limit {
            let cap = state.spawn_limit().cap(original, state.multiplier.value());
            if let Some(controller) = host.controller_mut(master) {
                controller.max_actor_cost = cap;
            }
        }
    }
}

/// Register the mod, auto-enabling it if its marker file is present
pub fn register(registry: &mut ModRegistry, host: &mut dyn Host) -> Result<ModKey, ModError> {
    registry.register(host, Box::new(SpawnMultiplier::new()))
}
