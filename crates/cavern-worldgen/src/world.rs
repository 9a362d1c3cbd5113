//! The generated world and the generator that builds it.

use std::collections::{BTreeMap, BTreeSet};

use cavern_common::{AbilitySet, BiomeId, RoomId, Viewport, WorldError};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::biome::{self, Biome};
use crate::config::WorldGenConfig;
use crate::graph::{build_graph, WorldGraph};
use crate::instantiate::{instantiate, InstantiateParams, Instantiated};
use crate::layout::generate_platforms;
use crate::populate::populate;
use crate::reachability::{analyze_room, TraversalReport};
use crate::rng::derive_seed;
use crate::room::{Room, RoomType};

/// Extra generation constraints. Reserved; the generator ignores them.
pub type Constraints = BTreeMap<String, String>;

// ============================================================================
// World
// ============================================================================

/// A fully generated world.
///
/// Rooms are stored in ascending ID order. After generation the only
/// intended mutations are door locks and enemy/item slot filling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    seed: u64,
    viewport: Viewport,
    rooms: Vec<Room>,
    biomes: Vec<Biome>,
    graph: WorldGraph,
    start_room: RoomId,
    boss_rooms: Vec<RoomId>,
}

impl World {
    /// Seed the world was generated from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Viewport the layouts were generated in.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// All rooms, ascending by ID.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Room lookup by ID.
    #[must_use]
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms
            .binary_search_by_key(&id, |r| r.id)
            .ok()
            .map(|i| &self.rooms[i])
    }

    /// Mutable room lookup by ID.
    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        match self.rooms.binary_search_by_key(&id, |r| r.id) {
            Ok(i) => Some(&mut self.rooms[i]),
            Err(_) => None,
        }
    }

    /// Biomes in depth order.
    #[must_use]
    pub fn biomes(&self) -> &[Biome] {
        &self.biomes
    }

    /// Biome lookup.
    #[must_use]
    pub fn biome(&self, id: BiomeId) -> Option<&Biome> {
        self.biomes.get(id.index())
    }

    /// The level graph the rooms were built from.
    #[must_use]
    pub fn graph(&self) -> &WorldGraph {
        &self.graph
    }

    /// The start room.
    #[must_use]
    pub fn start_room(&self) -> Option<&Room> {
        self.room(self.start_room)
    }

    /// IDs of every boss room.
    #[must_use]
    pub fn boss_room_ids(&self) -> &[RoomId] {
        &self.boss_rooms
    }

    /// Every boss room.
    pub fn boss_rooms(&self) -> impl Iterator<Item = &Room> {
        self.boss_rooms.iter().filter_map(|id| self.room(*id))
    }

    /// Rooms a connection list points at, resolved through the ID lookup.
    ///
    /// Fails on the first connection that does not resolve.
    pub fn connected_rooms(&self, room: &Room) -> Result<Vec<&Room>, WorldError> {
        room.connections
            .iter()
            .map(|id| self.room(*id).ok_or(WorldError::UnknownRoom(*id)))
            .collect()
    }

    /// Depth-first walk over connections from the start room.
    ///
    /// Returns the visit order, or the first connection that fails to resolve.
    pub fn walk_from_start(&self) -> Result<Vec<RoomId>, WorldError> {
        let start = self
            .start_room()
            .ok_or(WorldError::UnknownRoom(self.start_room))?;
        let mut visited = BTreeSet::new();
        let mut order = Vec::new();
        let mut stack = vec![start];
        while let Some(room) = stack.pop() {
            if !visited.insert(room.id) {
                continue;
            }
            order.push(room.id);
            for next in self.connected_rooms(room)?.into_iter().rev() {
                if !visited.contains(&next.id) {
                    stack.push(next);
                }
            }
        }
        Ok(order)
    }

    /// Rooms reachable from the start through edges `abilities` can open.
    #[must_use]
    pub fn reachable_rooms(&self, abilities: AbilitySet) -> BTreeSet<RoomId> {
        self.graph.reachable(abilities).into_iter().collect()
    }

    /// Locks every door whose requirement `abilities` lacks and unlocks the
    /// rest. Returns the number of locked doors.
    pub fn apply_ability_gates(&mut self, abilities: AbilitySet) -> usize {
        let mut locked = 0;
        for door in self.rooms.iter_mut().flat_map(|r| r.doors.iter_mut()) {
            door.locked = !abilities.satisfies(door.requires);
            if door.locked {
                locked += 1;
            }
        }
        debug!(locked, abilities = abilities.len(), "applied ability gates");
        locked
    }

    /// Jump-arc traversal analysis of one room.
    #[must_use]
    pub fn traversal_report(&self, id: RoomId, abilities: AbilitySet) -> Option<TraversalReport> {
        self.room(id)
            .map(|room| analyze_room(room, abilities, self.viewport))
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Builds worlds from seeds.
///
/// Holds only configuration; every [`Self::generate`] call owns its RNG, so
/// one generator can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct WorldGenerator {
    config: WorldGenConfig,
}

impl WorldGenerator {
    /// Creates a generator for a `width` x `height` room grid with a target
    /// room count and biome count. Non-positive values fall back to defaults.
    #[must_use]
    pub fn new(width: i32, height: i32, room_count: i32, biome_count: i32) -> Self {
        Self::with_config(WorldGenConfig {
            width,
            height,
            room_count,
            biome_count,
            ..WorldGenConfig::default()
        })
    }

    /// Creates a generator from a full configuration.
    #[must_use]
    pub fn with_config(config: WorldGenConfig) -> Self {
        Self {
            config: config.sanitized(),
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &WorldGenConfig {
        &self.config
    }

    /// Generates a world.
    ///
    /// The seed fully determines the result. `constraints` is reserved.
    pub fn generate(&self, seed: u64, constraints: &Constraints) -> Result<World, WorldError> {
        if !constraints.is_empty() {
            debug!(count = constraints.len(), "ignoring reserved constraints");
        }
        let config = &self.config;
        let viewport = config.viewport();
        let mut rng = Rng::with_seed(seed);

        let biomes = biome::catalog(config.biome_count as usize, seed);
        let graph = build_graph(
            &mut rng,
            config.room_count as usize,
            config.shortcut_count as usize,
        );
        graph.validate()?;

        let Instantiated {
            mut rooms,
            start_room,
            boss_rooms,
        } = instantiate(
            &graph,
            &biomes,
            &mut rng,
            &InstantiateParams {
                grid_width: config.width as u32,
                grid_height: config.height as u32,
                boss_policy: config.boss_policy,
            },
        )?;

        for room in &mut rooms {
            if let Some(biome) = biomes.get(room.biome.index()) {
                populate(room, biome, &mut rng);
            }
        }

        for room in &mut rooms {
            let abilities = graph.required_abilities(room.id);
            let room_seed = derive_seed(seed, u64::from(room.id.raw()));
            generate_platforms(
                room,
                biomes.get(room.biome.index()),
                room_seed,
                abilities,
                viewport,
            );
        }

        info!(
            seed,
            rooms = rooms.len(),
            edges = graph.edge_count(),
            bosses = boss_rooms.len(),
            treasure = rooms.iter().filter(|r| r.room_type == RoomType::Treasure).count(),
            "generated world"
        );

        Ok(World {
            seed,
            viewport,
            rooms,
            biomes,
            graph,
            start_room,
            boss_rooms,
        })
    }
}
