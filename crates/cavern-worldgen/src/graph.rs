//! Abstract level graph: critical path, side branches, and shortcuts.
//!
//! The builder draws every random decision from the RNG it is handed, so a
//! graph is a pure function of the seed the caller used for that RNG.

use std::collections::{BTreeMap, VecDeque};

use ahash::{AHashMap, AHashSet};
use cavern_common::{Ability, AbilitySet, RoomId, WorldError};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rng::{pick, range_usize};

/// Shortest critical path, in nodes, including the start node.
pub const CRITICAL_PATH_MIN: usize = 15;
/// Critical path length upper bound (exclusive).
pub const CRITICAL_PATH_MAX: usize = 25;
/// Every `GATE_INTERVAL`-th critical-path edge requires an ability.
pub const GATE_INTERVAL: usize = 5;
/// Shortcuts leave from critical-path nodes at least this deep.
pub const SHORTCUT_MIN_DEPTH: usize = 6;
/// Shortcuts jump back at least this many hops.
pub const SHORTCUT_MIN_SPAN: usize = 3;

const SHORTCUT_ATTEMPTS: usize = 10;

/// An abstract room in the level graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Room this node becomes
    pub id: RoomId,
    /// Hops from the start along the generation order
    pub depth: u32,
    /// True for critical-path nodes (boss included)
    pub required: bool,
}

/// A directed connection between two graph nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Source node
    pub from: RoomId,
    /// Destination node
    pub to: RoomId,
    /// Ability needed to traverse, if any
    pub requires: Option<Ability>,
    /// Backtracking edge added after the main structure
    pub is_shortcut: bool,
}

/// Directed level graph keyed by room ID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldGraph {
    nodes: BTreeMap<RoomId, GraphNode>,
    edges: Vec<GraphEdge>,
    critical_path: Vec<RoomId>,
    boss: Option<RoomId>,
}

impl WorldGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node. Returns `false` if the ID was already present.
    pub fn add_node(&mut self, node: GraphNode) -> bool {
        if self.nodes.contains_key(&node.id) {
            return false;
        }
        self.nodes.insert(node.id, node);
        true
    }

    /// Appends an edge. Endpoints are not checked; see [`Self::validate`].
    pub fn add_edge(&mut self, edge: GraphEdge) {
        self.edges.push(edge);
    }

    /// Marks the terminal boss node.
    pub fn set_boss(&mut self, id: RoomId) {
        self.boss = Some(id);
    }

    /// The start node ID.
    #[must_use]
    pub fn start(&self) -> RoomId {
        RoomId::START
    }

    /// The terminal boss node, if the graph has one.
    #[must_use]
    pub fn boss(&self) -> Option<RoomId> {
        self.boss
    }

    /// Node lookup.
    #[must_use]
    pub fn node(&self, id: RoomId) -> Option<&GraphNode> {
        self.nodes.get(&id)
    }

    /// Nodes in ascending ID order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    /// Edges in generation order.
    #[must_use]
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Critical-path node IDs from start, boss excluded.
    #[must_use]
    pub fn critical_path(&self) -> &[RoomId] {
        &self.critical_path
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Outgoing edges of a node, in generation order.
    pub fn outgoing(&self, id: RoomId) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter().filter(move |e| e.from == id)
    }

    /// Checks that every edge endpoint exists as a node.
    pub fn validate(&self) -> Result<(), WorldError> {
        for edge in &self.edges {
            if !self.nodes.contains_key(&edge.from) || !self.nodes.contains_key(&edge.to) {
                return Err(WorldError::DanglingEdge {
                    from: edge.from,
                    to: edge.to,
                });
            }
        }
        Ok(())
    }

    /// Abilities gating the primary route from the start to `id`.
    ///
    /// Follows non-shortcut edges only. Each non-start node has exactly one
    /// incoming primary edge, so the route is unique.
    #[must_use]
    pub fn required_abilities(&self, id: RoomId) -> AbilitySet {
        let parents: AHashMap<RoomId, &GraphEdge> = self
            .edges
            .iter()
            .filter(|e| !e.is_shortcut)
            .map(|e| (e.to, e))
            .collect();

        let mut abilities = AbilitySet::empty();
        let mut current = id;
        let mut visited = AHashSet::new();
        while let Some(edge) = parents.get(&current) {
            if !visited.insert(current) {
                break;
            }
            abilities.extend(edge.requires);
            current = edge.from;
        }
        abilities
    }

    /// Nodes reachable from the start using only edges `abilities` satisfies.
    #[must_use]
    pub fn reachable(&self, abilities: AbilitySet) -> Vec<RoomId> {
        let mut seen = AHashSet::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::new();
        if self.nodes.contains_key(&self.start()) {
            seen.insert(self.start());
            queue.push_back(self.start());
        }
        while let Some(id) = queue.pop_front() {
            order.push(id);
            for edge in self.outgoing(id) {
                if abilities.satisfies(edge.requires) && seen.insert(edge.to) {
                    queue.push_back(edge.to);
                }
            }
        }
        order
    }
}

/// Incremental graph construction state.
struct GraphBuilder<'a> {
    rng: &'a mut Rng,
    graph: WorldGraph,
    next_id: RoomId,
}

impl<'a> GraphBuilder<'a> {
    fn new(rng: &'a mut Rng) -> Self {
        Self {
            rng,
            graph: WorldGraph::new(),
            next_id: RoomId::START,
        }
    }

    fn add_node(&mut self, depth: u32, required: bool) -> RoomId {
        let id = self.next_id;
        self.next_id = id.next();
        self.graph.add_node(GraphNode {
            id,
            depth,
            required,
        });
        id
    }

    fn connect(&mut self, from: RoomId, to: RoomId, requires: Option<Ability>, is_shortcut: bool) {
        self.graph.add_edge(GraphEdge {
            from,
            to,
            requires,
            is_shortcut,
        });
    }

    fn depth_of(&self, id: RoomId) -> u32 {
        self.graph.node(id).map_or(0, |n| n.depth)
    }

    fn critical_path(&mut self) {
        let start = self.add_node(0, true);
        let length = range_usize(self.rng, CRITICAL_PATH_MIN, CRITICAL_PATH_MAX);
        let mut path = vec![start];
        let mut prev = start;
        for i in 1..length {
            let id = self.add_node(i as u32, true);
            let requires = if i % GATE_INTERVAL == 0 {
                pick(self.rng, &Ability::ALL)
            } else {
                None
            };
            self.connect(prev, id, requires, false);
            path.push(id);
            prev = id;
        }

        let boss = self.add_node(length as u32, true);
        self.connect(prev, boss, None, false);
        self.graph.set_boss(boss);
        self.graph.critical_path = path;
    }

    fn branches(&mut self, total_room_budget: usize) {
        let used = self.graph.node_count() as i64;
        let branch_count = (total_room_budget as i64 - used) / 3;
        if branch_count <= 0 {
            debug!(budget = total_room_budget, used, "no room left for branches");
            return;
        }

        let path_len = self.graph.critical_path.len();
        for _ in 0..branch_count {
            let source = self.graph.critical_path[range_usize(self.rng, 0, path_len)];
            let source_depth = self.depth_of(source);
            let chain = range_usize(self.rng, 2, 4);
            let mut prev = source;
            for step in 1..=chain {
                let id = self.add_node(source_depth + step as u32, false);
                self.connect(prev, id, None, false);
                prev = id;
            }
        }
    }

    fn shortcuts(&mut self, count: usize) {
        let path_len = self.graph.critical_path.len();
        if path_len <= SHORTCUT_MIN_DEPTH {
            return;
        }

        for _ in 0..count {
            for _ in 0..SHORTCUT_ATTEMPTS {
                let from_idx = range_usize(self.rng, SHORTCUT_MIN_DEPTH, path_len);
                let to_idx = range_usize(self.rng, 0, from_idx - SHORTCUT_MIN_SPAN + 1);
                let from = self.graph.critical_path[from_idx];
                let to = self.graph.critical_path[to_idx];
                let exists = self
                    .graph
                    .edges
                    .iter()
                    .any(|e| e.from == from && e.to == to);
                if !exists {
                    self.connect(from, to, None, true);
                    break;
                }
            }
        }
    }
}

/// Builds a level graph.
///
/// The critical path runs from node 0 to a boss node; ability gates sit on
/// every fifth critical edge. Leftover budget becomes 2–3 node branches hung
/// off critical-path nodes, and up to `shortcut_count` backtracking edges
/// are added last.
#[must_use]
pub fn build_graph(rng: &mut Rng, total_room_budget: usize, shortcut_count: usize) -> WorldGraph {
    let mut builder = GraphBuilder::new(rng);
    builder.critical_path();
    builder.branches(total_room_budget);
    builder.shortcuts(shortcut_count);

    debug!(
        nodes = builder.graph.node_count(),
        edges = builder.graph.edge_count(),
        critical = builder.graph.critical_path.len(),
        "built world graph"
    );
    builder.graph
}
