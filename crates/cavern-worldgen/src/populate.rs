//! Per-room content slots: scaffold platforms, hazards, enemy and item slots.

use cavern_common::Rect;
use fastrand::Rng;
use tracing::trace;

use crate::biome::Biome;
use crate::rng::{pick, range_f32, range_usize};
use crate::room::{EntitySlot, Hazard, HazardKind, Platform, Room, RoomType};

const HAZARD_HEIGHT: f32 = 16.0;

/// Fills a room's content slots.
///
/// The scaffold platforms placed here are replaced by the platform layout
/// generator in the full pipeline. Consumes random state, so running it
/// twice on one stream gives different results.
pub fn populate(room: &mut Room, biome: &Biome, rng: &mut Rng) {
    let (width, height) = (room.pixel_width(), room.pixel_height());

    let platform_count = range_usize(rng, 3, 8);
    room.platforms = (0..platform_count)
        .map(|_| {
            let w = range_f32(rng, 64.0, 160.0);
            Platform::new(
                range_f32(rng, 0.0, width - w),
                range_f32(rng, 64.0, height - 32.0),
                w,
                16.0,
            )
        })
        .collect();

    room.hazards.clear();
    if room.room_type.has_hazards() {
        for _ in 0..range_usize(rng, 1, 4) {
            let w = range_f32(rng, 32.0, 96.0);
            room.hazards.push(Hazard {
                rect: Rect::new(
                    range_f32(rng, 0.0, width - w),
                    height - 48.0,
                    w,
                    HAZARD_HEIGHT,
                ),
                kind: pick(rng, &HazardKind::ALL).unwrap_or(HazardKind::Spike),
                damage: rng.u8(1..=2),
            });
        }
    }

    let (enemies, items) = match room.room_type {
        RoomType::Combat => (range_usize(rng, 2, 5), 0),
        RoomType::Treasure => (0, range_usize(rng, 1, 3)),
        RoomType::Boss => (1, 0),
        _ => (0, 0),
    };
    room.enemies = vec![EntitySlot::empty(); enemies];
    room.items = vec![EntitySlot::empty(); items];

    trace!(
        room = %room.id,
        biome = %biome.name,
        platforms = room.platforms.len(),
        hazards = room.hazards.len(),
        enemies,
        items,
        "populated room"
    );
}
