//! Map coordinates.

use serde::{Deserialize, Serialize};

/// A position on the map in game units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns the point `distance` units from `self` along the line toward
    /// `target`. Returns `self` when both points coincide.
    pub fn towards(self, target: Point, distance: f32) -> Point {
        let len = self.distance(target);
        if len == 0.0 {
            return self;
        }
        Point {
            x: self.x + (target.x - self.x) / len * distance,
            y: self.y + (target.y - self.y) / len * distance,
        }
    }
}
