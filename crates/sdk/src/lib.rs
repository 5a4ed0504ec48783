//! bl2rust SDK - WillowGame Engine Type Definitions
//!
//! This crate contains plain-data definitions of the slice of the engine
//! surface the mods consume: the engine classes they enumerate, the object
//! fields they mutate, and the native hook points they intercept.
//! It has no dependencies and compiles quickly, allowing parallel
//! compilation of dependent crates.
//!
//! # Modules
//!
//! - [`hookpoints`] - Symbolic hook-point identifiers and native paths
//! - [`population`] - Spawn den and population controller field types
//! - [`menu`] - Press-start menu movie fields

pub mod hookpoints;
pub mod menu;
pub mod population;

pub use hookpoints::{EngineClass, EventId};
pub use menu::PressStartMovie;
pub use population::{
    ActorArchetype, PopulationController, PopulationDef, PopulationDen, SpawnCounts,
    UNLIMITED_ACTOR_COST,
};
