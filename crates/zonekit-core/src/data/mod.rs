//! Data model for territory documents
//!
//! This module provides:
//! - `Zone`: a circular spawn region with count/diversity bounds
//! - `Territory`: a named, coloured, ordered group of zones
//! - `TerritoryData`: the document root
//! - `MapInfo`: world extents and background image of a map
//!
//! `selected` and `visible` on zones (and `visible`/`expanded` on territories)
//! are UI state. They are carried on the records so the presentation layer can
//! read them directly, but they are never persisted.

use serde::{Deserialize, Serialize};

use crate::constants::{CHERNARUS_WORLD_SIZE, DEFAULT_TERRITORY_COLOR};
use crate::types::Point;

fn default_true() -> bool {
    true
}

/// A circular spawn region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub smin: i32,
    pub smax: i32,
    pub dmin: i32,
    pub dmax: i32,
    pub x: f64,
    pub z: f64,
    /// Radius in world units.
    pub r: f64,
    /// Height; zero means unset.
    pub h: f64,
    #[serde(skip)]
    pub selected: bool,
    #[serde(skip, default = "default_true")]
    pub visible: bool,
}

impl Zone {
    /// Creates a zone at a world position with zeroed spawn bounds.
    pub fn new(name: impl Into<String>, x: f64, z: f64, r: f64) -> Self {
        Self {
            name: name.into(),
            x,
            z,
            r,
            ..Self::default()
        }
    }

    /// World position of the zone centre.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.z)
    }

    pub fn set_position(&mut self, p: Point) {
        self.x = p.x;
        self.z = p.z;
    }
}

impl Default for Zone {
    fn default() -> Self {
        Self {
            name: String::new(),
            smin: 0,
            smax: 0,
            dmin: 0,
            dmax: 0,
            x: 0.0,
            z: 0.0,
            r: 0.0,
            h: 0.0,
            selected: false,
            visible: true,
        }
    }
}

/// A named group of zones sharing a display colour.
///
/// Several territories may share a name; each is still its own container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Territory {
    pub name: String,
    /// Packed 0xAARRGGBB.
    pub color: u32,
    pub zones: Vec<Zone>,
    #[serde(skip, default = "default_true")]
    pub visible: bool,
    #[serde(skip, default = "default_true")]
    pub expanded: bool,
}

impl Territory {
    pub fn new(name: impl Into<String>, color: u32) -> Self {
        Self {
            name: name.into(),
            color,
            zones: Vec::new(),
            visible: true,
            expanded: true,
        }
    }

    /// Splits the packed colour into `(a, r, g, b)` bytes.
    pub fn argb(&self) -> (u8, u8, u8, u8) {
        let [a, r, g, b] = self.color.to_be_bytes();
        (a, r, g, b)
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl Default for Territory {
    fn default() -> Self {
        Self::new(String::new(), DEFAULT_TERRITORY_COLOR)
    }
}

/// The document root: an ordered list of territories.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TerritoryData {
    pub territories: Vec<Territory>,
}

impl TerritoryData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.territories.clear();
    }

    /// Number of zones across all territories.
    pub fn total_zone_count(&self) -> usize {
        self.territories.iter().map(|t| t.zones.len()).sum()
    }

    /// Iterates every zone in document order.
    pub fn zones(&self) -> impl Iterator<Item = &Zone> {
        self.territories.iter().flat_map(|t| t.zones.iter())
    }

    /// Drops every `selected` flag in the document.
    pub fn clear_selection_flags(&mut self) {
        for zone in self.territories.iter_mut().flat_map(|t| t.zones.iter_mut()) {
            zone.selected = false;
        }
    }

    /// Removes territories that no longer hold any zone. Returns how many were removed.
    pub fn prune_empty(&mut self) -> usize {
        let before = self.territories.len();
        self.territories.retain(|t| !t.is_empty());
        before - self.territories.len()
    }
}

/// Metadata describing the active map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapInfo {
    pub name: String,
    /// Background image; empty when the map has none.
    #[serde(default)]
    pub image_path: String,
    pub world_size_x: f64,
    pub world_size_z: f64,
}

impl MapInfo {
    pub fn new(name: impl Into<String>, world_size_x: f64, world_size_z: f64) -> Self {
        Self {
            name: name.into(),
            image_path: String::new(),
            world_size_x,
            world_size_z,
        }
    }

    pub fn with_image(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = image_path.into();
        self
    }

    /// Extents must be positive and finite for the view transform to be invertible.
    pub fn has_valid_extents(&self) -> bool {
        self.world_size_x.is_finite()
            && self.world_size_z.is_finite()
            && self.world_size_x > 0.0
            && self.world_size_z > 0.0
    }
}

impl Default for MapInfo {
    fn default() -> Self {
        Self::new("Chernarus", CHERNARUS_WORLD_SIZE, CHERNARUS_WORLD_SIZE)
    }
}
