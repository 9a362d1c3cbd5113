//! Pixel-space geometry shared by the generator and its consumers.
//!
//! All rectangles are axis-aligned, stored as top-left corner plus size, in
//! room-local pixel space. Y grows downward.

use serde::{Deserialize, Serialize};

/// Size of one room tile in pixels.
pub const TILE_SIZE: u32 = 32;

/// Converts a length in tiles to pixels.
#[must_use]
pub fn tiles_to_pixels(tiles: u32) -> f32 {
    (tiles * TILE_SIZE) as f32
}

/// Axis-aligned rectangle in room-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Horizontal center.
    #[must_use]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Checks if this rectangle overlaps another. Touching edges do not count.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Horizontal gap between two rectangles (0 when their x-ranges overlap).
    #[must_use]
    pub fn horizontal_gap(&self, other: &Rect) -> f32 {
        if self.right() < other.x {
            other.x - self.right()
        } else if other.right() < self.x {
            self.x - other.right()
        } else {
            0.0
        }
    }
}

/// The fixed pixel viewport every room layout is generated in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Viewport {
    /// Creates a viewport of the given size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Checks that a rectangle lies fully inside the viewport, keeping `margin`
    /// pixels clear at the top and bottom.
    #[must_use]
    pub fn contains(&self, rect: &Rect, margin: f32) -> bool {
        rect.x >= 0.0
            && rect.right() <= self.width
            && rect.y >= margin
            && rect.bottom() <= self.height - margin
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(960.0, 640.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_touching_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Rect::new(9.0, 9.0, 5.0, 5.0)));
    }

    #[test]
    fn test_horizontal_gap() {
        let a = Rect::new(0.0, 0.0, 100.0, 16.0);
        let b = Rect::new(150.0, 200.0, 100.0, 16.0);
        assert_eq!(a.horizontal_gap(&b), 50.0);
        assert_eq!(b.horizontal_gap(&a), 50.0);
        assert_eq!(a.horizontal_gap(&Rect::new(50.0, 0.0, 10.0, 1.0)), 0.0);
    }

    #[test]
    fn test_viewport_contains() {
        let viewport = Viewport::default();
        assert!(viewport.contains(&Rect::new(0.0, 100.0, 960.0, 16.0), 64.0));
        assert!(!viewport.contains(&Rect::new(-1.0, 100.0, 10.0, 16.0), 0.0));
        assert!(!viewport.contains(&Rect::new(0.0, 20.0, 10.0, 16.0), 64.0));
    }

    proptest! {
        #[test]
        fn intersects_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0, aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0, bw in 1.0f32..200.0, bh in 1.0f32..200.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }
    }
}
