//! Human-readable world summaries.

use std::fmt;

use cavern_common::{AbilitySet, RoomId};
use cavern_worldgen::{LayoutKind, RoomType, TraversalReport, World};
use serde::Serialize;

/// Aggregate statistics for a generated world.
#[derive(Debug, Clone, Serialize)]
pub struct WorldSummary {
    /// World seed
    pub seed: u64,
    /// Total rooms
    pub rooms: usize,
    /// Total graph edges
    pub edges: usize,
    /// Backtracking edges
    pub shortcuts: usize,
    /// Critical path length, boss excluded
    pub critical_path: usize,
    /// Boss room IDs
    pub bosses: Vec<RoomId>,
    /// Biome names in depth order
    pub biomes: Vec<String>,
    /// Room count per type, in type order
    pub room_types: Vec<(RoomType, usize)>,
    /// Room count per layout, in layout order
    pub layouts: Vec<(LayoutKind, usize)>,
    /// Abilities the player holds
    pub abilities: Vec<String>,
    /// Rooms reachable with those abilities
    pub reachable: usize,
    /// Doors locked for those abilities
    pub locked_doors: usize,
}

impl WorldSummary {
    /// Summarizes a world for the given ability set.
    ///
    /// Applies the ability gates, so door locks reflect `abilities` afterwards.
    pub fn build(world: &mut World, abilities: AbilitySet) -> Self {
        let locked_doors = world.apply_ability_gates(abilities);
        let graph = world.graph();
        let count_type = |t: RoomType| world.rooms().iter().filter(|r| r.room_type == t).count();
        let count_layout = |k: LayoutKind| world.rooms().iter().filter(|r| r.layout == Some(k)).count();

        Self {
            seed: world.seed(),
            rooms: world.rooms().len(),
            edges: graph.edge_count(),
            shortcuts: graph.edges().iter().filter(|e| e.is_shortcut).count(),
            critical_path: graph.critical_path().len(),
            bosses: world.boss_room_ids().to_vec(),
            biomes: world.biomes().iter().map(|b| b.name.clone()).collect(),
            room_types: RoomType::ALL.into_iter().map(|t| (t, count_type(t))).collect(),
            layouts: LayoutKind::ALL
                .into_iter()
                .map(|k| (k, count_layout(k)))
                .filter(|(_, n)| *n > 0)
                .collect(),
            abilities: abilities.iter().map(|a| a.to_string()).collect(),
            reachable: world.reachable_rooms(abilities).len(),
            locked_doors,
        }
    }
}

impl fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "seed:          {}", self.seed)?;
        writeln!(f, "rooms:         {}", self.rooms)?;
        writeln!(
            f,
            "edges:         {} ({} shortcuts)",
            self.edges, self.shortcuts
        )?;
        writeln!(f, "critical path: {}", self.critical_path)?;
        let bosses: Vec<String> = self.bosses.iter().map(ToString::to_string).collect();
        writeln!(f, "bosses:        {}", bosses.join(", "))?;
        writeln!(f, "biomes:        {}", self.biomes.join(", "))?;
        writeln!(f, "room types:")?;
        for (room_type, count) in &self.room_types {
            writeln!(f, "  {room_type:?}: {count}")?;
        }
        writeln!(f, "layouts:")?;
        for (layout, count) in &self.layouts {
            writeln!(f, "  {layout:?}: {count}")?;
        }
        let abilities = if self.abilities.is_empty() {
            "none".to_string()
        } else {
            self.abilities.join(", ")
        };
        writeln!(f, "abilities:     {abilities}")?;
        writeln!(f, "reachable:     {}/{}", self.reachable, self.rooms)?;
        write!(f, "locked doors:  {}", self.locked_doors)
    }
}

/// One line per room describing jump-arc traversal.
pub fn traversal_lines(world: &World, abilities: AbilitySet) -> Vec<String> {
    world
        .rooms()
        .iter()
        .filter_map(|room| {
            world
                .traversal_report(room.id, abilities)
                .map(|report| traversal_line(room.id, room.room_type, &report))
        })
        .collect()
}

fn traversal_line(id: RoomId, room_type: RoomType, report: &TraversalReport) -> String {
    let doors_ok = report.doors.iter().filter(|d| d.reachable).count();
    let flag = if report.is_fully_traversable() { "ok" } else { "STRANDED" };
    format!(
        "{id} {room_type:?}: platforms {}/{} doors {doors_ok}/{} {flag}",
        report.reachable_count(),
        report.reachable.len(),
        report.doors.len(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cavern_worldgen::{Constraints, WorldGenerator};

    fn world() -> World {
        WorldGenerator::new(15, 10, 50, 3)
            .generate(42, &Constraints::new())
            .expect("generate")
    }

    #[test]
    fn test_summary_counts() {
        let mut world = world();
        let summary = WorldSummary::build(&mut world, AbilitySet::all());
        assert_eq!(summary.rooms, world.rooms().len());
        assert_eq!(summary.reachable, summary.rooms);
        assert_eq!(summary.locked_doors, 0);
        let typed: usize = summary.room_types.iter().map(|(_, n)| n).sum();
        assert_eq!(typed, summary.rooms);
        let laid_out: usize = summary.layouts.iter().map(|(_, n)| n).sum();
        assert_eq!(laid_out, summary.rooms);
        assert_eq!(summary.bosses.len(), 1);
    }

    #[test]
    fn test_summary_without_abilities_locks_doors() {
        let mut world = world();
        let summary = WorldSummary::build(&mut world, AbilitySet::empty());
        assert!(summary.locked_doors > 0);
        assert!(summary.reachable < summary.rooms);
        let text = summary.to_string();
        assert!(text.contains("abilities:     none"));
        assert!(text.contains("seed:          42"));
    }

    #[test]
    fn test_traversal_lines_cover_every_room() {
        let world = world();
        let lines = traversal_lines(&world, AbilitySet::all());
        assert_eq!(lines.len(), world.rooms().len());
        assert!(lines[0].starts_with("room#0 Start"));
    }
}
