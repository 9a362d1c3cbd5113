//! # Cavern Common
//!
//! Common types and shared abstractions for Cavern.
//!
//! This crate provides foundational types used by the generator and tools:
//! - ID types (RoomId, BiomeId, EntityId)
//! - Pixel-space geometry (Rect, Viewport)
//! - Player traversal abilities
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod ability;
pub mod error;
pub mod geometry;
pub mod ids;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ability::*;
    pub use crate::error::*;
    pub use crate::geometry::*;
    pub use crate::ids::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiles_to_pixels() {
        assert_eq!(tiles_to_pixels(20), 640.0);
        assert_eq!(tiles_to_pixels(0), 0.0);
    }

    #[test]
    fn test_room_id_ordering() {
        let a = RoomId::new(3);
        let b = RoomId::new(7);
        assert!(a < b);
        assert_eq!(b.raw(), 7);
    }

    #[test]
    fn test_ability_set_from_iter() {
        let set: AbilitySet = [Ability::Dash, Ability::Glide].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(Ability::Dash));
        assert!(!set.contains(Ability::WallClimb));
    }
}
