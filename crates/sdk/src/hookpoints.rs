//! Hook-point identifiers and engine class names
//!
//! These strings must match exactly what the engine exports.
//! Derived from the WillowGame / GearboxFramework script exports.

use std::fmt;

/// Native function path for the press-start menu's SHiFT authentication call
pub const SPARK_AUTHENTICATION: &str =
    "WillowGame.WillowGFxMoviePressStart.DoSparkAuthentication";

/// Native function path for the population controller's spawn request
pub const SPAWN_POPULATION_CONTROLLED_ACTOR: &str =
    "GearboxFramework.PopulationMaster.SpawnPopulationControlledActor";

/// Native function path for den post-initialization
pub const DEN_POST_BEGIN_PLAY: &str = "WillowGame.PopulationOpportunityDen.PostBeginPlay";

/// Symbolic identifier for a hookable native function
///
/// The host dispatches hooks by this identifier rather than by raw path
/// string; [`EventId::native_path`] returns the exact engine export the
/// identifier stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventId {
    /// SHiFT authentication start on the press-start menu movie
    SparkAuthentication,
    /// Population controller asked to spawn a controlled actor
    SpawnPopulationControlledActor,
    /// A population den finished its engine-side initialization
    DenPostBeginPlay,
}

impl EventId {
    /// The engine's fully qualified native function path
    pub const fn native_path(self) -> &'static str {
        match self {
            EventId::SparkAuthentication => SPARK_AUTHENTICATION,
            EventId::SpawnPopulationControlledActor => SPAWN_POPULATION_CONTROLLED_ACTOR,
            EventId::DenPostBeginPlay => DEN_POST_BEGIN_PLAY,
        }
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.native_path())
    }
}

/// Engine classes the mods enumerate live instances of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineClass {
    /// A spawn point that periodically creates enemy actors
    PopulationOpportunityDen,
    /// The singleton-like controller enforcing the global actor-cost cap
    WillowPopulationMaster,
    /// The press-start menu movie that owns the authentication flow
    WillowGFxMoviePressStart,
}

impl EngineClass {
    /// The engine's class name as used by the find-all query
    pub const fn name(self) -> &'static str {
        match self {
            EngineClass::PopulationOpportunityDen => "PopulationOpportunityDen",
            EngineClass::WillowPopulationMaster => "WillowPopulationMaster",
            EngineClass::WillowGFxMoviePressStart => "WillowGFxMoviePressStart",
        }
    }
}

impl fmt::Display for EngineClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
