//! Platform layout generation.
//!
//! Six placement strategies, chosen per room from its type and biome. Every
//! layout is generated in the fixed [`Viewport`] pixel space and then run
//! through the same post-processing:
//!
//! 1. a full-width ground platform is appended as a safety net,
//! 2. platforms overlapping any door are removed,
//! 3. if fewer than [`MIN_PLATFORMS`] remain, two emergency platforms are added.
//!
//! Step 3 only enforces a count. It does not prove the room can be crossed;
//! see [`crate::reachability`] for the jump-arc analysis.

use std::f32::consts::TAU;

use cavern_common::{Ability, AbilitySet, Rect, Viewport};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::biome::Biome;
use crate::rng::{pick, range_f32, range_usize};
use crate::room::{Door, Platform, Room, RoomType};

/// Thickness of generated platforms.
pub const PLATFORM_HEIGHT: f32 = 16.0;
/// Thickness of the ground safety net.
pub const GROUND_HEIGHT: f32 = 32.0;
/// Fewer platforms than this triggers emergency injection.
pub const MIN_PLATFORMS: usize = 2;

/// Emergency platforms, clear of every canonical door position for rooms of
/// at least 20x15 tiles.
pub const EMERGENCY_PLATFORMS: [Platform; 2] = [
    Platform::new(96.0, 360.0, 160.0, PLATFORM_HEIGHT),
    Platform::new(352.0, 280.0, 160.0, PLATFORM_HEIGHT),
];

/// Vertical margin kept clear by scattered placement.
const SCATTER_MARGIN: f32 = 64.0;
const SCATTER_ATTEMPTS: usize = 10;
const MAZE_COLUMNS: usize = 8;
const MAZE_ROWS: usize = 5;

// ============================================================================
// Layout selection
// ============================================================================

/// A platform placement strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutKind {
    /// Evenly spaced platforms at roughly one height.
    Linear,
    /// A monotonic ramp up or down.
    Staircase,
    /// Random hops within jump distance of earlier platforms.
    Scattered,
    /// Stacked levels forming a climbing course.
    Tower,
    /// Islands joined by stepping stones.
    Bridge,
    /// Coarse grid with randomly occupied cells.
    Maze,
}

impl LayoutKind {
    /// Every layout.
    pub const ALL: [Self; 6] = [
        Self::Linear,
        Self::Staircase,
        Self::Scattered,
        Self::Tower,
        Self::Bridge,
        Self::Maze,
    ];

    /// Layouts drawn for room types without a fixed choice.
    pub const FALLBACK: [Self; 3] = [Self::Linear, Self::Staircase, Self::Scattered];
}

/// Picks a layout from room type and biome name.
///
/// Puzzle and corridor rooms draw uniformly from [`LayoutKind::FALLBACK`].
pub fn select_layout(room_type: RoomType, biome: Option<&str>, rng: &mut Rng) -> LayoutKind {
    match room_type {
        RoomType::Start | RoomType::Save => LayoutKind::Linear,
        RoomType::Treasure => LayoutKind::Scattered,
        RoomType::Boss => LayoutKind::Tower,
        RoomType::Combat => match biome {
            Some("cave") => LayoutKind::Staircase,
            Some("crystal") => LayoutKind::Tower,
            Some("ruins") => LayoutKind::Maze,
            Some("abyss") => LayoutKind::Scattered,
            _ => LayoutKind::Linear,
        },
        RoomType::Puzzle | RoomType::Corridor => {
            pick(rng, &LayoutKind::FALLBACK).unwrap_or(LayoutKind::Linear)
        },
    }
}

// ============================================================================
// Difficulty
// ============================================================================

/// Difficulty tier driving platform count, size, and density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Wide platforms, few gaps.
    Easy,
    /// Moderate.
    Medium,
    /// Narrow platforms, more of them.
    Hard,
}

impl Difficulty {
    /// Derives the tier from biome danger and the player's ability count.
    ///
    /// Four or more abilities always mean Hard and two or three always mean
    /// Medium; only with fewer than two does biome danger decide.
    #[must_use]
    pub fn from_danger_and_abilities(danger_level: u8, abilities: AbilitySet) -> Self {
        match abilities.len() {
            n if n >= 4 => Self::Hard,
            n if n >= 2 => Self::Medium,
            _ => match danger_level {
                d if d >= 5 => Self::Hard,
                d if d >= 3 => Self::Medium,
                _ => Self::Easy,
            },
        }
    }

    /// Platform width for this tier.
    #[must_use]
    pub const fn platform_width(self) -> f32 {
        match self {
            Self::Easy => 160.0,
            Self::Medium => 128.0,
            Self::Hard => 96.0,
        }
    }

    /// Probability that a maze cell holds a platform.
    #[must_use]
    pub const fn maze_density(self) -> f32 {
        match self {
            Self::Easy => 0.3,
            Self::Medium => 0.45,
            Self::Hard => 0.6,
        }
    }

    const fn is_hard(self) -> bool {
        matches!(self, Self::Hard)
    }
}

/// Maximum hop distance scattered placement allows between platforms.
#[must_use]
pub fn jump_budget(abilities: AbilitySet) -> f32 {
    if abilities.contains(Ability::Dash) {
        300.0
    } else if abilities.contains(Ability::DoubleJump) {
        250.0
    } else {
        150.0
    }
}

// ============================================================================
// Layout algorithms
// ============================================================================

/// Generates raw platforms for a layout, before post-processing.
pub fn generate_layout(
    kind: LayoutKind,
    difficulty: Difficulty,
    abilities: AbilitySet,
    viewport: Viewport,
    rng: &mut Rng,
) -> Vec<Platform> {
    match kind {
        LayoutKind::Linear => linear(difficulty, viewport, rng),
        LayoutKind::Staircase => staircase(difficulty, viewport, rng),
        LayoutKind::Scattered => scattered(difficulty, abilities, viewport, rng),
        LayoutKind::Tower => tower(difficulty, viewport, rng),
        LayoutKind::Bridge => bridge(difficulty, viewport, rng),
        LayoutKind::Maze => maze(difficulty, viewport, rng),
    }
}

/// Keeps a platform of `width` inside the viewport horizontally. Pins it to
/// the left edge when it is wider than the viewport.
fn clamp_x(x: f32, width: f32, viewport: Viewport) -> f32 {
    x.clamp(0.0, (viewport.width - width).max(0.0))
}

fn linear(difficulty: Difficulty, viewport: Viewport, rng: &mut Rng) -> Vec<Platform> {
    let count = range_usize(rng, 3, 6) + if difficulty.is_hard() { 2 } else { 0 };
    let width = difficulty.platform_width();
    let spacing = viewport.width / (count + 1) as f32;
    let base_y = viewport.height * 0.6;

    (0..count)
        .map(|i| {
            let center = spacing * (i + 1) as f32;
            let x = clamp_x(center - width / 2.0, width, viewport);
            Platform::new(x, base_y + range_f32(rng, -24.0, 24.0), width, PLATFORM_HEIGHT)
        })
        .collect()
}

fn staircase(difficulty: Difficulty, viewport: Viewport, rng: &mut Rng) -> Vec<Platform> {
    let count = range_usize(rng, 5, 8);
    let ascending = rng.bool();
    let width = difficulty.platform_width().min(viewport.width / (count + 1) as f32);
    let spacing = viewport.width / (count + 1) as f32;
    let top = 128.0;
    let bottom = viewport.height - 112.0;
    let step = (bottom - top) / (count - 1) as f32;

    (0..count)
        .map(|i| {
            let level = if ascending { i } else { count - 1 - i };
            let x = spacing * (i + 1) as f32 - width / 2.0;
            Platform::new(x, bottom - step * level as f32, width, PLATFORM_HEIGHT)
        })
        .collect()
}

fn scattered(
    difficulty: Difficulty,
    abilities: AbilitySet,
    viewport: Viewport,
    rng: &mut Rng,
) -> Vec<Platform> {
    let budget = jump_budget(abilities);
    let width = difficulty.platform_width();
    let target = range_usize(rng, 6, 10) + if difficulty.is_hard() { 2 } else { 0 };

    let mut platforms = vec![Platform::new(
        range_f32(rng, 32.0, 200.0),
        viewport.height - 160.0,
        width,
        PLATFORM_HEIGHT,
    )];

    for _ in 1..target {
        for _ in 0..SCATTER_ATTEMPTS {
            let anchor = platforms[range_usize(rng, 0, platforms.len())].rect;
            let angle = rng.f32() * TAU;
            let distance = range_f32(rng, 60.0, budget);
            let rect = Rect::new(
                anchor.center_x() + angle.cos() * distance - width / 2.0,
                anchor.y + angle.sin() * distance,
                width,
                PLATFORM_HEIGHT,
            );
            if viewport.contains(&rect, SCATTER_MARGIN) {
                platforms.push(Platform { rect });
                break;
            }
        }
    }
    platforms
}

fn tower(difficulty: Difficulty, viewport: Viewport, rng: &mut Rng) -> Vec<Platform> {
    let levels = range_usize(rng, 4, 7) + if difficulty.is_hard() { 1 } else { 0 };
    let width = difficulty.platform_width();
    let level_height = (viewport.height - 192.0) / levels as f32;
    let mut platforms = Vec::new();

    for level in 0..levels {
        let y = viewport.height - 128.0 - level_height * level as f32;
        let count = range_usize(rng, 2, 5);
        let spacing = viewport.width / (count + 1) as f32;
        for j in 0..count {
            let x = spacing * (j + 1) as f32 - width / 2.0 + range_f32(rng, -32.0, 32.0);
            platforms.push(Platform::new(
                clamp_x(x, width, viewport),
                y,
                width,
                PLATFORM_HEIGHT,
            ));
        }
    }
    platforms
}

fn bridge(_difficulty: Difficulty, viewport: Viewport, rng: &mut Rng) -> Vec<Platform> {
    const STONE_WIDTH: f32 = 48.0;

    let islands = range_usize(rng, 2, 4);
    let segment = viewport.width / islands as f32;
    let island_width = segment * 0.5;
    let mut platforms: Vec<Platform> = (0..islands)
        .map(|k| {
            Platform::new(
                segment * k as f32 + (segment - island_width) / 2.0,
                viewport.height * 0.7 + range_f32(rng, -16.0, 16.0),
                island_width,
                PLATFORM_HEIGHT,
            )
        })
        .collect();

    for k in 0..islands - 1 {
        let (left, right) = (platforms[k].rect, platforms[k + 1].rect);
        let gap_start = left.right();
        let gap = right.x - gap_start;
        let stones = range_usize(rng, 1, 3);
        for s in 0..stones {
            let center = gap_start + gap * (s + 1) as f32 / (stones + 1) as f32;
            let y = left.y.min(right.y) - 24.0 - range_f32(rng, 0.0, 24.0);
            platforms.push(Platform::new(
                center - STONE_WIDTH / 2.0,
                y,
                STONE_WIDTH,
                PLATFORM_HEIGHT / 2.0,
            ));
        }
    }
    platforms
}

fn maze(difficulty: Difficulty, viewport: Viewport, rng: &mut Rng) -> Vec<Platform> {
    let cell_width = viewport.width / MAZE_COLUMNS as f32;
    let cell_height = viewport.height / MAZE_ROWS as f32;
    let width = difficulty
        .platform_width()
        .min(cell_width - 16.0)
        .max(PLATFORM_HEIGHT);
    let density = difficulty.maze_density();
    let mut platforms = Vec::new();

    for row in 0..MAZE_ROWS {
        for col in 0..MAZE_COLUMNS {
            if rng.f32() >= density {
                continue;
            }
            let x = col as f32 * cell_width + range_f32(rng, 0.0, cell_width - width);
            let y = row as f32 * cell_height
                + range_f32(rng, cell_height * 0.3, cell_height * 0.8);
            platforms.push(Platform::new(x, y, width, PLATFORM_HEIGHT));
        }
    }
    platforms
}

// ============================================================================
// Post-processing
// ============================================================================

/// Appends the ground, drops door-blocking platforms, and enforces the floor.
///
/// Returns the final platform list and whether emergency platforms were added.
pub fn finalize(
    mut platforms: Vec<Platform>,
    doors: &[Door],
    viewport: Viewport,
) -> (Vec<Platform>, bool) {
    platforms.push(Platform::new(
        0.0,
        viewport.height - GROUND_HEIGHT,
        viewport.width,
        GROUND_HEIGHT,
    ));
    platforms.retain(|p| !doors.iter().any(|d| p.rect.intersects(&d.rect)));

    let injected = platforms.len() < MIN_PLATFORMS;
    if injected {
        platforms.extend(EMERGENCY_PLATFORMS);
    }
    (platforms, injected)
}

/// Replaces a room's platforms with a freshly generated layout.
///
/// `seed` drives an RNG private to this call. Returns the chosen layout,
/// which is also recorded on the room.
pub fn generate_platforms(
    room: &mut Room,
    biome: Option<&Biome>,
    seed: u64,
    abilities: AbilitySet,
    viewport: Viewport,
) -> LayoutKind {
    let mut rng = Rng::with_seed(seed);
    let biome_name = biome.map(|b| b.name.as_str());
    let danger = biome.map_or(1, |b| b.danger_level);

    let kind = select_layout(room.room_type, biome_name, &mut rng);
    let difficulty = Difficulty::from_danger_and_abilities(danger, abilities);
    let raw = generate_layout(kind, difficulty, abilities, viewport, &mut rng);
    let raw_count = raw.len();

    let (platforms, injected) = finalize(raw, &room.doors, viewport);
    if injected {
        warn!(
            room = %room.id,
            ?kind,
            "too few platforms after door clearance, injected emergency platforms"
        );
    }
    trace!(
        room = %room.id,
        ?kind,
        ?difficulty,
        raw = raw_count,
        kept = platforms.len(),
        "generated platforms"
    );

    room.platforms = platforms;
    room.layout = Some(kind);
    kind
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome;
    use crate::room::Direction;
    use cavern_common::RoomId;
    use fastrand::Rng;
    use proptest::prelude::*;

    fn room_with_doors(room_type: RoomType, doors: usize) -> Room {
        let mut room = Room::new(RoomId::new(1), room_type, 20, 15);
        for i in 0..doors {
            let direction = Direction::CYCLE[i % 4];
            room.doors.push(Door {
                rect: direction.door_rect(room.pixel_width(), room.pixel_height()),
                direction,
                leads_to: RoomId::new(i as u32 + 2),
                requires: None,
                locked: false,
            });
        }
        room
    }

    #[test]
    fn test_layout_selection_table() {
        let mut rng = Rng::with_seed(0);
        assert_eq!(select_layout(RoomType::Start, None, &mut rng), LayoutKind::Linear);
        assert_eq!(select_layout(RoomType::Save, None, &mut rng), LayoutKind::Linear);
        assert_eq!(select_layout(RoomType::Treasure, None, &mut rng), LayoutKind::Scattered);
        assert_eq!(select_layout(RoomType::Boss, None, &mut rng), LayoutKind::Tower);
        let combat = |b| select_layout(RoomType::Combat, b, &mut Rng::with_seed(0));
        assert_eq!(combat(Some("cave")), LayoutKind::Staircase);
        assert_eq!(combat(Some("crystal")), LayoutKind::Tower);
        assert_eq!(combat(Some("ruins")), LayoutKind::Maze);
        assert_eq!(combat(Some("abyss")), LayoutKind::Scattered);
        assert_eq!(combat(Some("forest")), LayoutKind::Linear);
        assert_eq!(combat(None), LayoutKind::Linear);
    }

    #[test]
    fn test_fallback_layouts_for_puzzle_rooms() {
        let mut rng = Rng::with_seed(4);
        for _ in 0..100 {
            let kind = select_layout(RoomType::Puzzle, Some("cave"), &mut rng);
            assert!(LayoutKind::FALLBACK.contains(&kind));
        }
    }

    #[test]
    fn test_difficulty_rules() {
        let none = AbilitySet::empty();
        let two: AbilitySet = [Ability::Dash, Ability::Glide].into_iter().collect();
        assert_eq!(Difficulty::from_danger_and_abilities(1, none), Difficulty::Easy);
        assert_eq!(Difficulty::from_danger_and_abilities(3, none), Difficulty::Medium);
        assert_eq!(Difficulty::from_danger_and_abilities(5, none), Difficulty::Hard);
        // Ability count dominates once it reaches two.
        assert_eq!(Difficulty::from_danger_and_abilities(9, two), Difficulty::Medium);
        assert_eq!(Difficulty::from_danger_and_abilities(1, two), Difficulty::Medium);
        assert_eq!(
            Difficulty::from_danger_and_abilities(1, AbilitySet::all()),
            Difficulty::Hard
        );
    }

    #[test]
    fn test_jump_budget() {
        assert_eq!(jump_budget(AbilitySet::empty()), 150.0);
        assert_eq!(jump_budget([Ability::DoubleJump].into_iter().collect()), 250.0);
        assert_eq!(jump_budget(AbilitySet::all()), 300.0);
    }

    #[test]
    fn test_linear_counts() {
        let viewport = Viewport::default();
        for seed in 0..50 {
            let mut rng = Rng::with_seed(seed);
            let easy = generate_layout(
                LayoutKind::Linear,
                Difficulty::Easy,
                AbilitySet::empty(),
                viewport,
                &mut rng,
            );
            assert!((3..=5).contains(&easy.len()));
            let hard = generate_layout(
                LayoutKind::Linear,
                Difficulty::Hard,
                AbilitySet::empty(),
                viewport,
                &mut rng,
            );
            assert!((5..=7).contains(&hard.len()));
        }
    }

    #[test]
    fn test_staircase_is_monotonic() {
        let viewport = Viewport::default();
        for seed in 0..50 {
            let mut rng = Rng::with_seed(seed);
            let steps = generate_layout(
                LayoutKind::Staircase,
                Difficulty::Medium,
                AbilitySet::empty(),
                viewport,
                &mut rng,
            );
            assert!((5..=7).contains(&steps.len()));
            let ys: Vec<f32> = steps.iter().map(|p| p.rect.y).collect();
            let rising = ys.windows(2).all(|w| w[1] < w[0]);
            let falling = ys.windows(2).all(|w| w[1] > w[0]);
            assert!(rising || falling, "seed {seed}: {ys:?}");
            assert!(steps.windows(2).all(|w| w[1].rect.x > w[0].rect.x));
        }
    }

    #[test]
    fn test_scattered_stays_within_budget_and_bounds() {
        let viewport = Viewport::default();
        for seed in 0..50 {
            let mut rng = Rng::with_seed(seed);
            let platforms = generate_layout(
                LayoutKind::Scattered,
                Difficulty::Easy,
                AbilitySet::empty(),
                viewport,
                &mut rng,
            );
            assert!(!platforms.is_empty());
            for p in &platforms[1..] {
                assert!(viewport.contains(&p.rect, SCATTER_MARGIN));
                let near = platforms.iter().any(|q| {
                    let dx = q.rect.center_x() - p.rect.center_x();
                    let dy = q.rect.y - p.rect.y;
                    !std::ptr::eq(p, q) && (dx * dx + dy * dy).sqrt() <= 150.0 + 0.01
                });
                assert!(near);
            }
        }
    }

    #[test]
    fn test_tower_levels() {
        let viewport = Viewport::default();
        let mut rng = Rng::with_seed(2);
        let platforms = generate_layout(
            LayoutKind::Tower,
            Difficulty::Easy,
            AbilitySet::empty(),
            viewport,
            &mut rng,
        );
        let mut levels: Vec<i32> = platforms.iter().map(|p| p.rect.y as i32).collect();
        levels.dedup();
        assert!((4..=6).contains(&levels.len()));
        assert!(platforms.iter().all(|p| p.rect.x >= 0.0 && p.rect.right() <= viewport.width));
    }

    #[test]
    fn test_bridge_islands_and_stones() {
        let viewport = Viewport::default();
        for seed in 0..30 {
            let mut rng = Rng::with_seed(seed);
            let platforms = generate_layout(
                LayoutKind::Bridge,
                Difficulty::Medium,
                AbilitySet::empty(),
                viewport,
                &mut rng,
            );
            let islands = platforms.iter().filter(|p| p.rect.width > 48.0).count();
            let stones = platforms.len() - islands;
            assert!((2..=3).contains(&islands));
            assert!(stones >= islands - 1 && stones <= 2 * (islands - 1));
        }
    }

    #[test]
    fn test_maze_density_scales_with_difficulty() {
        let viewport = Viewport::default();
        let total = |difficulty| -> usize {
            (0..40)
                .map(|seed| {
                    let mut rng = Rng::with_seed(seed);
                    generate_layout(
                        LayoutKind::Maze,
                        difficulty,
                        AbilitySet::empty(),
                        viewport,
                        &mut rng,
                    )
                    .len()
                })
                .sum()
        };
        let easy = total(Difficulty::Easy);
        let hard = total(Difficulty::Hard);
        assert!(hard > easy);
        assert!(easy <= 40 * MAZE_COLUMNS * MAZE_ROWS);
    }

    #[test]
    fn test_layouts_survive_viewport_narrower_than_platforms() {
        let narrow = Viewport::new(150.0, 100.0);
        for kind in LayoutKind::ALL {
            for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
                for seed in 0..10 {
                    let mut rng = Rng::with_seed(seed);
                    let platforms =
                        generate_layout(kind, difficulty, AbilitySet::all(), narrow, &mut rng);
                    assert!(platforms.iter().all(|p| p.rect.width > 0.0), "{kind:?}");
                    if matches!(kind, LayoutKind::Linear | LayoutKind::Tower) {
                        assert!(platforms.iter().all(|p| {
                            p.rect.x >= 0.0 && p.rect.x <= (narrow.width - p.rect.width).max(0.0)
                        }));
                    }
                }
            }
        }
    }

    #[test]
    fn test_finalize_adds_ground_and_clears_doors() {
        let room = room_with_doors(RoomType::Combat, 4);
        let blocking = Platform::new(0.0, 400.0, 120.0, PLATFORM_HEIGHT);
        let free = Platform::new(300.0, 200.0, 120.0, PLATFORM_HEIGHT);
        let (platforms, injected) = finalize(vec![blocking, free], &room.doors, Viewport::default());
        assert!(!injected);
        assert!(!platforms.contains(&blocking));
        assert!(platforms.contains(&free));
        assert!(platforms.iter().any(|p| p.rect.width == 960.0));
    }

    #[test]
    fn test_emergency_platforms_when_everything_blocked() {
        let mut room = room_with_doors(RoomType::Combat, 0);
        // A door covering the whole floor swallows the ground platform.
        room.doors.push(Door {
            rect: Rect::new(0.0, 560.0, 960.0, 80.0),
            direction: Direction::South,
            leads_to: RoomId::new(9),
            requires: None,
            locked: false,
        });
        let (platforms, injected) = finalize(Vec::new(), &room.doors, Viewport::default());
        assert!(injected);
        assert_eq!(platforms.len(), 2);
        assert!(platforms.iter().all(|p| !room.doors.iter().any(|d| p.rect.intersects(&d.rect))));
    }

    #[test]
    fn test_emergency_platforms_clear_canonical_doors() {
        for (w, h) in [(20, 15), (29, 19), (25, 17)] {
            let mut room = Room::new(RoomId::new(1), RoomType::Combat, w, h);
            for direction in Direction::CYCLE {
                room.doors.push(Door {
                    rect: direction.door_rect(room.pixel_width(), room.pixel_height()),
                    direction,
                    leads_to: RoomId::new(2),
                    requires: None,
                    locked: false,
                });
            }
            room.platforms = EMERGENCY_PLATFORMS.to_vec();
            assert!(!room.has_blocked_door());
        }
    }

    #[test]
    fn test_generate_platforms_is_seeded() {
        let cave = biome::generate("cave", 0);
        let mut a = room_with_doors(RoomType::Combat, 3);
        let mut b = room_with_doors(RoomType::Combat, 3);
        let kind = generate_platforms(&mut a, Some(&cave), 55, AbilitySet::empty(), Viewport::default());
        generate_platforms(&mut b, Some(&cave), 55, AbilitySet::empty(), Viewport::default());
        assert_eq!(kind, LayoutKind::Staircase);
        assert_eq!(a.platforms, b.platforms);
        assert_eq!(a.layout, Some(LayoutKind::Staircase));
    }

    proptest! {
        #[test]
        fn generated_rooms_keep_doors_clear(
            seed in any::<u64>(),
            doors in 0usize..7,
            type_idx in 0usize..7,
            abilities in 0u8..16,
        ) {
            let set: AbilitySet = Ability::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| abilities & (1 << i) != 0)
                .map(|(_, a)| a)
                .collect();
            let ruins = biome::generate("ruins", 0);
            let mut room = room_with_doors(RoomType::ALL[type_idx], doors);
            generate_platforms(&mut room, Some(&ruins), seed, set, Viewport::default());
            prop_assert!(room.platforms.len() >= MIN_PLATFORMS);
            prop_assert!(!room.has_blocked_door());
        }
    }
}
