//! Population system field types
//!
//! Mirrors the den and controller fields the engine exposes to mods:
//! the four spawn-count caps on a den, the archetype list its spawns are
//! drawn from, and the controller's global actor-cost cap.

/// Sentinel cap value meaning "no spawn limit"
pub const UNLIMITED_ACTOR_COST: i32 = 0x7FFF_FFFF;

/// Factory class names for non-combat spawn points
///
/// Dens whose archetypes spawn through any of these factories are shop or
/// prop spawners, not encounters, and must never be scaled.
pub mod factory {
    pub const BLACK_MARKET: &str = "PopulationFactoryBlackMarket";
    pub const INTERACTIVE_OBJECT: &str = "PopulationFactoryInteractiveObject";
    pub const VENDING_MACHINE: &str = "PopulationFactoryVendingMachine";

    /// The standard combat actor factory
    pub const BALANCED_AI_PAWN: &str = "PopulationFactoryBalancedAIPawn";
}

/// The four per-den spawn caps
///
/// `max_active` lives on the den's `SpawnData` in the engine; the other
/// three are direct den fields. They are kept together here because every
/// mod operation reads and writes them as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpawnCounts {
    /// `SpawnData.MaxActiveActors`
    pub max_active: i32,
    /// `MaxActiveActorsIsNormal`
    pub max_active_normal: i32,
    /// `MaxActiveActorsThreatened`
    pub max_active_threatened: i32,
    /// `MaxTotalActors`
    pub max_total: i32,
}

impl SpawnCounts {
    /// Multiply every cap by `factor`, rounding each to the nearest
    /// integer independently (ties away from zero)
    pub fn scaled(self, factor: f64) -> SpawnCounts {
        let scale = |v: i32| (v as f64 * factor).round() as i32;
        SpawnCounts {
            max_active: scale(self.max_active),
            max_active_normal: scale(self.max_active_normal),
            max_active_threatened: scale(self.max_active_threatened),
            max_total: scale(self.max_total),
        }
    }
}

/// One entry of a population definition's actor archetype list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorArchetype {
    /// Class name of the spawn factory, absent if the archetype has none
    pub spawn_factory: Option<String>,
}

impl ActorArchetype {
    /// Archetype spawning through the given factory class
    pub fn with_factory(class_name: impl Into<String>) -> Self {
        Self {
            spawn_factory: Some(class_name.into()),
        }
    }

    /// Archetype with no spawn factory assigned
    pub fn without_factory() -> Self {
        Self {
            spawn_factory: None,
        }
    }
}

/// A den's population definition: the archetypes it may spawn
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulationDef {
    pub archetypes: Vec<ActorArchetype>,
}

/// A spawn-point den as exposed by the engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulationDen {
    /// Population definition, absent on uninitialized dens
    pub population_def: Option<PopulationDef>,
    /// The four spawn caps
    pub counts: SpawnCounts,
    /// Set by the engine once native initialization has run
    pub has_begun_play: bool,
}

/// The global population controller as exposed by the engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulationController {
    /// `MaxActorCost` - global cap on simultaneously active spawned actors
    pub max_actor_cost: i32,
    /// Actor cost currently in use, maintained by the native spawn path
    pub actor_cost_used: i32,
}
