//! # Cavern World Generation
//!
//! Seeded, deterministic generation of Metroidvania worlds.
//!
//! Generation runs in stages on a single RNG stream:
//! - Biome catalog ([`biome`])
//! - Level graph with a gated critical path, branches and shortcuts ([`graph`])
//! - Rooms, connections and doors ([`instantiate`])
//! - Hazards and entity slots ([`populate`])
//! - Platform layouts, each on its own derived seed ([`layout`])
//!
//! [`reachability`] analyses finished rooms. [`WorldGenerator`] ties the
//! stages together:
//!
//! ```no_run
//! use cavern_worldgen::{Constraints, WorldGenerator};
//!
//! let world = WorldGenerator::new(15, 10, 50, 3)
//!     .generate(42, &Constraints::new())
//!     .expect("generation");
//! assert!(world.start_room().is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod biome;
pub mod config;
pub mod graph;
pub mod instantiate;
pub mod layout;
pub mod populate;
pub mod reachability;
pub mod rng;
pub mod room;
pub mod world;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::biome::Biome;
    pub use crate::config::WorldGenConfig;
    pub use crate::graph::{build_graph, GraphEdge, GraphNode, WorldGraph};
    pub use crate::instantiate::BossPolicy;
    pub use crate::layout::{Difficulty, LayoutKind};
    pub use crate::reachability::{analyze_room, JumpProfile, TraversalReport};
    pub use crate::room::{Direction, Door, EntitySlot, Hazard, HazardKind, Platform, Room, RoomType};
    pub use crate::world::{Constraints, World, WorldGenerator};
}

pub use prelude::*;
