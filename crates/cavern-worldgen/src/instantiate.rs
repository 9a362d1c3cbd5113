//! Turns graph nodes into rooms and graph edges into connections and doors.

use ahash::AHashMap;
use cavern_common::{Ability, BiomeId, RoomId, WorldError};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::biome::{self, Biome};
use crate::graph::{GraphNode, WorldGraph};
use crate::rng::range_u32;
use crate::room::{Direction, Door, Room, RoomType};

/// Room width range in tiles, `[min, max)`.
pub const ROOM_WIDTH_TILES: (u32, u32) = (20, 30);
/// Room height range in tiles, `[min, max)`.
pub const ROOM_HEIGHT_TILES: (u32, u32) = (15, 20);
/// Required nodes deeper than this are boss candidates under
/// [`BossPolicy::DeepRequired`].
pub const BOSS_DEPTH: u32 = 10;

/// Which graph nodes become boss rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BossPolicy {
    /// Only the terminal node of the critical path.
    #[default]
    Terminal,
    /// Every required node deeper than [`BOSS_DEPTH`].
    DeepRequired,
}

/// Parameters for room instantiation.
#[derive(Debug, Clone, Copy)]
pub struct InstantiateParams {
    /// World grid width in room cells
    pub grid_width: u32,
    /// World grid height in room cells
    pub grid_height: u32,
    /// Boss classification rule
    pub boss_policy: BossPolicy,
}

/// Rooms produced from a graph, sorted by ID.
#[derive(Debug, Clone)]
pub struct Instantiated {
    /// All rooms, ascending by ID
    pub rooms: Vec<Room>,
    /// The start room
    pub start_room: RoomId,
    /// Every room classified as a boss
    pub boss_rooms: Vec<RoomId>,
}

/// Classifies a node.
///
/// Evaluated in priority order: start, boss, optional branch (treasure or
/// puzzle), then a cumulative roll for main-path rooms.
pub fn infer_room_type(
    node: &GraphNode,
    graph: &WorldGraph,
    policy: BossPolicy,
    rng: &mut Rng,
) -> RoomType {
    if node.depth == 0 {
        return RoomType::Start;
    }
    let is_boss = match policy {
        BossPolicy::Terminal => graph.boss() == Some(node.id),
        BossPolicy::DeepRequired => node.required && node.depth > BOSS_DEPTH,
    };
    if is_boss {
        return RoomType::Boss;
    }
    if !node.required {
        return if rng.bool() {
            RoomType::Treasure
        } else {
            RoomType::Puzzle
        };
    }

    let roll = rng.f32();
    if roll < 0.5 {
        RoomType::Combat
    } else if roll < 0.7 {
        RoomType::Corridor
    } else if roll < 0.85 {
        RoomType::Puzzle
    } else {
        RoomType::Save
    }
}

/// Instantiates every graph node as a room, then connects and doors them.
///
/// Rooms are created in ascending ID order and connected through an ID
/// lookup table, never by position. An edge naming a missing room is a
/// construction error.
pub fn instantiate(
    graph: &WorldGraph,
    biomes: &[Biome],
    rng: &mut Rng,
    params: &InstantiateParams,
) -> Result<Instantiated, WorldError> {
    let mut rooms: Vec<Room> = Vec::with_capacity(graph.node_count());
    for node in graph.nodes() {
        let room_type = infer_room_type(node, graph, params.boss_policy, rng);
        let mut room = Room::new(
            node.id,
            room_type,
            range_u32(rng, ROOM_WIDTH_TILES.0, ROOM_WIDTH_TILES.1),
            range_u32(rng, ROOM_HEIGHT_TILES.0, ROOM_HEIGHT_TILES.1),
        );
        room.grid_x = range_u32(rng, 0, params.grid_width);
        room.grid_y = range_u32(rng, 0, params.grid_height);
        let biome_index = biome::index_for_depth(node.depth, biomes.len());
        room.biome = BiomeId::new(u16::try_from(biome_index).unwrap_or(u16::MAX));
        trace!(room = %room.id, ?room_type, depth = node.depth, "instantiated room");
        rooms.push(room);
    }

    let mut index: AHashMap<RoomId, usize> = AHashMap::with_capacity(rooms.len());
    for (i, room) in rooms.iter().enumerate() {
        if index.insert(room.id, i).is_some() {
            return Err(WorldError::DuplicateRoom(room.id));
        }
    }

    let mut gates: AHashMap<(RoomId, RoomId), Option<Ability>> = AHashMap::new();
    for edge in graph.edges() {
        let dangling = WorldError::DanglingEdge {
            from: edge.from,
            to: edge.to,
        };
        let from = *index.get(&edge.from).ok_or_else(|| dangling.clone())?;
        if !index.contains_key(&edge.to) {
            return Err(dangling);
        }
        rooms[from].connections.push(edge.to);
        gates.insert((edge.from, edge.to), edge.requires);
    }

    for room in &mut rooms {
        place_doors(room, &gates);
    }

    let boss_rooms: Vec<RoomId> = rooms
        .iter()
        .filter(|r| r.room_type == RoomType::Boss)
        .map(|r| r.id)
        .collect();
    debug!(
        rooms = rooms.len(),
        bosses = boss_rooms.len(),
        "instantiated rooms"
    );

    Ok(Instantiated {
        rooms,
        start_room: graph.start(),
        boss_rooms,
    })
}

fn place_doors(room: &mut Room, gates: &AHashMap<(RoomId, RoomId), Option<Ability>>) {
    let (width, height) = (room.pixel_width(), room.pixel_height());
    room.doors = room
        .connections
        .iter()
        .enumerate()
        .map(|(i, &target)| {
            let direction = Direction::CYCLE[i % Direction::CYCLE.len()];
            Door {
                rect: direction.door_rect(width, height),
                direction,
                leads_to: target,
                requires: gates.get(&(room.id, target)).copied().flatten(),
                locked: false,
            }
        })
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_graph, GraphEdge};

    fn params(policy: BossPolicy) -> InstantiateParams {
        InstantiateParams {
            grid_width: 15,
            grid_height: 10,
            boss_policy: policy,
        }
    }

    fn build(seed: u64, policy: BossPolicy) -> (WorldGraph, Instantiated) {
        let mut rng = Rng::with_seed(seed);
        let graph = build_graph(&mut rng, 60, 3);
        let biomes = biome::catalog(5, seed);
        let out = instantiate(&graph, &biomes, &mut rng, &params(policy)).expect("instantiate");
        (graph, out)
    }

    #[test]
    fn test_every_edge_becomes_a_connection() {
        let (graph, out) = build(42, BossPolicy::Terminal);
        assert_eq!(out.rooms.len(), graph.node_count());
        for edge in graph.edges() {
            let room = out
                .rooms
                .iter()
                .find(|r| r.id == edge.from)
                .expect("source room");
            assert!(room.connects_to(edge.to));
        }
    }

    #[test]
    fn test_connections_are_one_directional() {
        let (graph, out) = build(8, BossPolicy::Terminal);
        let start = &out.rooms[0];
        let first = graph.critical_path()[1];
        assert!(start.connects_to(first));
        let next = out.rooms.iter().find(|r| r.id == first).expect("room");
        let has_reverse = graph
            .edges()
            .iter()
            .any(|e| e.from == first && e.to == start.id);
        assert_eq!(next.connects_to(start.id), has_reverse);
    }

    #[test]
    fn test_room_geometry_ranges() {
        let (_, out) = build(5, BossPolicy::Terminal);
        for room in &out.rooms {
            assert!((20..30).contains(&room.width_tiles));
            assert!((15..20).contains(&room.height_tiles));
            assert!(room.grid_x < 15 && room.grid_y < 10);
            assert!(room.biome.index() < 5);
        }
    }

    #[test]
    fn test_doors_cycle_directions() {
        let (_, out) = build(12, BossPolicy::Terminal);
        for room in &out.rooms {
            assert_eq!(room.doors.len(), room.connections.len());
            for (i, door) in room.doors.iter().enumerate() {
                assert_eq!(door.direction, Direction::CYCLE[i % 4]);
                assert_eq!(door.leads_to, room.connections[i]);
                assert!(!door.locked);
            }
        }
    }

    #[test]
    fn test_gated_edges_mark_doors() {
        let (graph, out) = build(19, BossPolicy::Terminal);
        for edge in graph.edges().iter().filter(|e| e.requires.is_some()) {
            let room = out.rooms.iter().find(|r| r.id == edge.from).expect("room");
            let door = room.door_to(edge.to).expect("door");
            assert_eq!(door.requires, edge.requires);
        }
    }

    #[test]
    fn test_terminal_policy_single_boss() {
        let (graph, out) = build(3, BossPolicy::Terminal);
        assert_eq!(out.boss_rooms, vec![graph.boss().expect("boss")]);
        assert_eq!(out.rooms[0].room_type, RoomType::Start);
        assert_eq!(out.start_room, RoomId::START);
    }

    #[test]
    fn test_deep_required_policy_tags_many_bosses() {
        let (graph, out) = build(3, BossPolicy::DeepRequired);
        let expected = graph
            .nodes()
            .filter(|n| n.required && n.depth > BOSS_DEPTH)
            .count();
        assert_eq!(out.boss_rooms.len(), expected);
        assert!(out.boss_rooms.len() > 1);
    }

    #[test]
    fn test_branch_rooms_are_treasure_or_puzzle() {
        let (graph, out) = build(77, BossPolicy::Terminal);
        for node in graph.nodes().filter(|n| !n.required) {
            let room = out.rooms.iter().find(|r| r.id == node.id).expect("room");
            assert!(matches!(
                room.room_type,
                RoomType::Treasure | RoomType::Puzzle
            ));
        }
    }

    #[test]
    fn test_dangling_edge_is_an_error() {
        let mut rng = Rng::with_seed(1);
        let mut graph = WorldGraph::new();
        graph.add_node(GraphNode {
            id: RoomId::START,
            depth: 0,
            required: true,
        });
        graph.add_edge(GraphEdge {
            from: RoomId::START,
            to: RoomId::new(4),
            requires: None,
            is_shortcut: false,
        });
        let biomes = biome::catalog(1, 0);
        let err = instantiate(&graph, &biomes, &mut rng, &params(BossPolicy::Terminal))
            .expect_err("dangling edge");
        assert_eq!(
            err,
            WorldError::DanglingEdge {
                from: RoomId::START,
                to: RoomId::new(4)
            }
        );
    }
}
