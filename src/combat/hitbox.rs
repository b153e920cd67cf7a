//! Hitbox geometry shared by every entity kind.
//!
//! Hitboxes are centred rectangles, usually well inside the sprite bounds,
//! so that contact only registers once the visible bodies really meet.

use bevy::math::{Rect, Vec2};

/// Anything with sprite bounds and a collision rectangle.
pub trait Collider {
    /// Visual bounds (sprite rectangle) in world space.
    fn bounds(&self) -> Rect;

    /// Rectangle used for overlap tests.
    fn hitbox(&self) -> Rect;

    fn center(&self) -> Vec2 {
        self.bounds().center()
    }
}

/// Bounds of a sprite whose top-left corner is at `pos`.
pub fn bounds_at(pos: Vec2, size: Vec2) -> Rect {
    Rect::from_corners(pos, pos + size)
}

/// Centred sub-rectangle scaled by `factor` on each axis.
pub fn shrink(bounds: Rect, factor: Vec2) -> Rect {
    Rect::from_center_size(bounds.center(), bounds.size() * factor)
}

/// Centred sub-rectangle with an absolute size.
pub fn centered(bounds: Rect, size: Vec2) -> Rect {
    Rect::from_center_size(bounds.center(), size)
}

/// Strict overlap; rectangles that only share an edge do not touch.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    !a.intersect(b).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrink_keeps_center() {
        let bounds = bounds_at(Vec2::new(100.0, 50.0), Vec2::new(64.0, 64.0));
        let hitbox = shrink(bounds, Vec2::splat(0.4));
        assert_eq!(hitbox.center(), bounds.center());
        assert!((hitbox.width() - 25.6).abs() < 1e-4);
    }

    #[test]
    fn edge_contact_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 20.0, 10.0);
        let c = Rect::new(9.0, 9.0, 20.0, 20.0);
        assert!(!overlaps(a, b));
        assert!(overlaps(a, c));
    }
}
