//! Concrete rooms and the geometry they own.

use cavern_common::{tiles_to_pixels, Ability, BiomeId, EntityId, Rect, RoomId};
use serde::{Deserialize, Serialize};

use crate::layout::LayoutKind;

/// Width of east/west doors and height of north/south doors, in pixels.
pub const DOOR_THICKNESS: f32 = 32.0;
/// Opening size of a door along the wall it sits in, in pixels.
pub const DOOR_OPENING: f32 = 64.0;

// ============================================================================
// Room classification
// ============================================================================

/// Gameplay role of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    /// World entry point.
    Start,
    /// Enemy encounter.
    Combat,
    /// Traversal or switch puzzle.
    Puzzle,
    /// Optional reward room.
    Treasure,
    /// Connective passage.
    Corridor,
    /// Boss arena.
    Boss,
    /// Save point.
    Save,
}

impl RoomType {
    /// Every room type.
    pub const ALL: [Self; 7] = [
        Self::Start,
        Self::Combat,
        Self::Puzzle,
        Self::Treasure,
        Self::Corridor,
        Self::Boss,
        Self::Save,
    ];

    /// Whether hazards are placed in this room type.
    #[must_use]
    pub fn has_hazards(self) -> bool {
        matches!(self, Self::Combat | Self::Boss)
    }
}

// ============================================================================
// Room contents
// ============================================================================

/// A solid platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Platform bounds; the top edge is the walkable surface
    pub rect: Rect,
}

impl Platform {
    /// Creates a platform from its bounds.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
        }
    }
}

/// Kind of damaging hazard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardKind {
    /// Floor spikes
    Spike,
    /// Lava pool
    Lava,
    /// Electric field
    Electric,
}

impl HazardKind {
    /// All hazard kinds.
    pub const ALL: [Self; 3] = [Self::Spike, Self::Lava, Self::Electric];
}

/// A damaging area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    /// Hazard bounds
    pub rect: Rect,
    /// Hazard kind
    pub kind: HazardKind,
    /// Damage per contact, 1..=2
    pub damage: u8,
}

/// Wall a door sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Right wall
    East,
    /// Left wall
    West,
    /// Ceiling
    North,
    /// Floor
    South,
}

impl Direction {
    /// Order doors are assigned to walls, repeating.
    pub const CYCLE: [Self; 4] = [Self::East, Self::West, Self::North, Self::South];

    /// Canonical door rectangle for this wall of a `width` x `height` room.
    ///
    /// Side doors sit one tile above the floor; ceiling and floor doors are
    /// centered horizontally.
    #[must_use]
    pub fn door_rect(self, width: f32, height: f32) -> Rect {
        let side_y = height - DOOR_THICKNESS - DOOR_OPENING;
        match self {
            Self::East => Rect::new(width - DOOR_THICKNESS, side_y, DOOR_THICKNESS, DOOR_OPENING),
            Self::West => Rect::new(0.0, side_y, DOOR_THICKNESS, DOOR_OPENING),
            Self::North => Rect::new(
                width / 2.0 - DOOR_OPENING / 2.0,
                0.0,
                DOOR_OPENING,
                DOOR_THICKNESS,
            ),
            Self::South => Rect::new(
                width / 2.0 - DOOR_OPENING / 2.0,
                height - DOOR_THICKNESS,
                DOOR_OPENING,
                DOOR_THICKNESS,
            ),
        }
    }
}

/// A door leading to another room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Door {
    /// Door bounds
    pub rect: Rect,
    /// Wall the door sits in
    pub direction: Direction,
    /// Destination room
    pub leads_to: RoomId,
    /// Ability gating the edge this door was made from
    pub requires: Option<Ability>,
    /// Set by the ability gate pass
    pub locked: bool,
}

/// Placeholder for an enemy or item an external spawner fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntitySlot {
    entity: Option<EntityId>,
}

impl EntitySlot {
    /// An unfilled slot.
    #[must_use]
    pub const fn empty() -> Self {
        Self { entity: None }
    }

    /// Places an entity into the slot, returning the previous occupant.
    pub fn fill(&mut self, entity: EntityId) -> Option<EntityId> {
        self.entity.replace(entity)
    }

    /// The spawned entity, if any.
    #[must_use]
    pub const fn entity(&self) -> Option<EntityId> {
        self.entity
    }

    /// Whether the slot has been filled.
    #[must_use]
    pub const fn is_filled(&self) -> bool {
        self.entity.is_some()
    }
}

// ============================================================================
// Room
// ============================================================================

/// A concrete room instantiated from a graph node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Matches the originating graph node
    pub id: RoomId,
    /// Gameplay role
    pub room_type: RoomType,
    /// Column on the world grid
    pub grid_x: u32,
    /// Row on the world grid
    pub grid_y: u32,
    /// Width in tiles
    pub width_tiles: u32,
    /// Height in tiles
    pub height_tiles: u32,
    /// Assigned biome
    pub biome: BiomeId,
    /// Layout chosen by the platform generator
    pub layout: Option<LayoutKind>,
    /// Solid platforms
    pub platforms: Vec<Platform>,
    /// Damaging hazards
    pub hazards: Vec<Hazard>,
    /// One door per connection
    pub doors: Vec<Door>,
    /// Rooms reachable through this room's outgoing edges
    pub connections: Vec<RoomId>,
    /// Enemy placeholders
    pub enemies: Vec<EntitySlot>,
    /// Item placeholders
    pub items: Vec<EntitySlot>,
}

impl Room {
    /// Creates an empty room.
    #[must_use]
    pub fn new(id: RoomId, room_type: RoomType, width_tiles: u32, height_tiles: u32) -> Self {
        Self {
            id,
            room_type,
            grid_x: 0,
            grid_y: 0,
            width_tiles,
            height_tiles,
            biome: BiomeId::default(),
            layout: None,
            platforms: Vec::new(),
            hazards: Vec::new(),
            doors: Vec::new(),
            connections: Vec::new(),
            enemies: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn pixel_width(&self) -> f32 {
        tiles_to_pixels(self.width_tiles)
    }

    /// Height in pixels.
    #[must_use]
    pub fn pixel_height(&self) -> f32 {
        tiles_to_pixels(self.height_tiles)
    }

    /// Room bounds in room-local pixel space.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.pixel_width(), self.pixel_height())
    }

    /// Whether an outgoing connection to `id` exists.
    #[must_use]
    pub fn connects_to(&self, id: RoomId) -> bool {
        self.connections.contains(&id)
    }

    /// First door leading to `id`.
    #[must_use]
    pub fn door_to(&self, id: RoomId) -> Option<&Door> {
        self.doors.iter().find(|d| d.leads_to == id)
    }

    /// Whether any platform overlaps any door.
    #[must_use]
    pub fn has_blocked_door(&self) -> bool {
        self.platforms
            .iter()
            .any(|p| self.doors.iter().any(|d| p.rect.intersects(&d.rect)))
    }
}
