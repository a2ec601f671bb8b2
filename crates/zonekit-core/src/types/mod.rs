//! Geometry primitives shared by the view, hit-test, and interaction layers.
//!
//! Two coordinate spaces are in play and they are kept apart by type:
//! - [`Point`] is a world position (`x` east, `z` north, origin bottom-left)
//! - [`ScreenPos`] is a pixel position (`x` right, `y` down, origin top-left)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A position in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub z: f64,
}

impl Point {
    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Euclidean distance to another world point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.z - rhs.z)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.z)
    }
}

/// A position in screen space, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPos {
    pub x: f64,
    pub y: f64,
}

impl ScreenPos {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset from `origin` to this position.
    pub fn delta_from(&self, origin: &ScreenPos) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// The rectangle the map is drawn into, supplied by the host every frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasRect {
    /// Top-left corner in screen pixels.
    pub pos: ScreenPos,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            pos: ScreenPos::new(x, y),
            width,
            height,
        }
    }

    /// Returns a copy whose extents are at least `min_extent` on both axes.
    pub fn clamped(&self, min_extent: f64) -> Self {
        Self {
            pos: self.pos,
            width: self.width.max(min_extent),
            height: self.height.max(min_extent),
        }
    }

    /// Whether a screen position falls on the canvas (edges inclusive).
    pub fn contains(&self, p: &ScreenPos) -> bool {
        p.x >= self.pos.x
            && p.x <= self.pos.x + self.width
            && p.y >= self.pos.y
            && p.y <= self.pos.y + self.height
    }
}

impl Default for CanvasRect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1200.0, 800.0)
    }
}

/// Axis-aligned screen rectangle, always stored normalised (min <= max).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub min: ScreenPos,
    pub max: ScreenPos,
}

impl ScreenRect {
    /// Builds a rectangle from two arbitrary opposite corners.
    pub fn from_corners(a: ScreenPos, b: ScreenPos) -> Self {
        Self {
            min: ScreenPos::new(a.x.min(b.x), a.y.min(b.y)),
            max: ScreenPos::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: &ScreenPos) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
