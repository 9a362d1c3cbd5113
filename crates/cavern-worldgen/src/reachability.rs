//! Jump-arc reachability inside a room.
//!
//! Generation only guarantees a platform count. This module answers the
//! stronger question for an existing room: starting from the ground, which
//! platforms and doors can a player with a given ability set actually reach?
//!
//! The model is coarse. A hop is allowed when the rise to the target's top
//! surface fits the jump height and the horizontal gap fits the jump reach.
//! Drops of any height are allowed, with extra reach while gliding. Wall
//! climbing allows any rise between platforms touching the same wall.

use std::collections::VecDeque;

use cavern_common::{Ability, AbilitySet, Rect, RoomId, Viewport};
use serde::{Deserialize, Serialize};

use crate::room::{Direction, Room};

/// Rise and reach without abilities.
pub const BASE_RISE: f32 = 120.0;
/// Horizontal reach without abilities.
pub const BASE_REACH: f32 = 180.0;
/// Platforms within this distance of a side wall count as touching it.
pub const WALL_BAND: f32 = 96.0;

/// Movement limits derived from an ability set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpProfile {
    /// Maximum upward climb per hop
    pub rise: f32,
    /// Maximum horizontal gap per hop
    pub reach: f32,
    /// Extra horizontal gap when the target is not higher
    pub glide_bonus: f32,
    /// Unlimited rise along walls
    pub wall_climb: bool,
}

impl JumpProfile {
    /// Builds the profile for a set of abilities.
    #[must_use]
    pub fn from_abilities(abilities: AbilitySet) -> Self {
        let mut profile = Self {
            rise: BASE_RISE,
            reach: BASE_REACH,
            glide_bonus: 0.0,
            wall_climb: false,
        };
        if abilities.contains(Ability::DoubleJump) {
            profile.rise += 100.0;
        }
        if abilities.contains(Ability::Dash) {
            profile.reach += 120.0;
        }
        if abilities.contains(Ability::Glide) {
            profile.glide_bonus = 150.0;
        }
        profile.wall_climb = abilities.contains(Ability::WallClimb);
        profile
    }

    /// Whether a player standing on `from` can land on `to`.
    #[must_use]
    pub fn can_hop(&self, from: &Rect, to: &Rect, viewport: Viewport) -> bool {
        let rise = from.y - to.y;
        let gap = from.horizontal_gap(to);
        if rise <= 0.0 {
            return gap <= self.reach + self.glide_bonus;
        }
        if rise <= self.rise && gap <= self.reach {
            return true;
        }
        self.wall_climb && same_wall(from, to, viewport)
    }

    /// Whether a player standing on `from` can step through `door`.
    #[must_use]
    pub fn can_enter(&self, from: &Rect, door: &Rect) -> bool {
        let rise = from.y - door.bottom();
        let gap = from.horizontal_gap(door);
        if rise <= 0.0 {
            gap <= self.reach + self.glide_bonus
        } else {
            rise <= self.rise && gap <= self.reach
        }
    }
}

fn same_wall(a: &Rect, b: &Rect, viewport: Viewport) -> bool {
    let left = |r: &Rect| r.x <= WALL_BAND;
    let right = |r: &Rect| r.right() >= viewport.width - WALL_BAND;
    (left(a) && left(b)) || (right(a) && right(b))
}

/// Reachability of one door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorReach {
    /// Destination of the door
    pub leads_to: RoomId,
    /// Wall the door sits in
    pub direction: Direction,
    /// Whether any reachable platform can enter it
    pub reachable: bool,
}

/// Result of analysing one room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraversalReport {
    /// Index of the entrance platform (the lowest one)
    pub entrance: Option<usize>,
    /// Per-platform reachability, parallel to `room.platforms`
    pub reachable: Vec<bool>,
    /// Per-door reachability, parallel to `room.doors`
    pub doors: Vec<DoorReach>,
}

impl TraversalReport {
    /// Number of reachable platforms.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.reachable.iter().filter(|r| **r).count()
    }

    /// Whether every door can be reached from the entrance.
    #[must_use]
    pub fn all_doors_reachable(&self) -> bool {
        self.doors.iter().all(|d| d.reachable)
    }

    /// Whether every platform and every door can be reached.
    #[must_use]
    pub fn is_fully_traversable(&self) -> bool {
        self.entrance.is_some() && self.reachable.iter().all(|r| *r) && self.all_doors_reachable()
    }
}

/// Analyses which platforms and doors of `room` are reachable from its
/// lowest platform under `abilities`.
#[must_use]
pub fn analyze_room(room: &Room, abilities: AbilitySet, viewport: Viewport) -> TraversalReport {
    let profile = JumpProfile::from_abilities(abilities);
    let platforms = &room.platforms;

    let entrance = platforms
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.rect.y.total_cmp(&b.rect.y))
        .map(|(i, _)| i);

    let mut reachable = vec![false; platforms.len()];
    if let Some(start) = entrance {
        let mut queue = VecDeque::from([start]);
        reachable[start] = true;
        while let Some(i) = queue.pop_front() {
            for (j, target) in platforms.iter().enumerate() {
                if !reachable[j] && profile.can_hop(&platforms[i].rect, &target.rect, viewport) {
                    reachable[j] = true;
                    queue.push_back(j);
                }
            }
        }
    }

    let doors = room
        .doors
        .iter()
        .map(|door| DoorReach {
            leads_to: door.leads_to,
            direction: door.direction,
            reachable: platforms
                .iter()
                .zip(&reachable)
                .any(|(p, ok)| *ok && profile.can_enter(&p.rect, &door.rect)),
        })
        .collect();

    TraversalReport {
        entrance,
        reachable,
        doors,
    }
}
