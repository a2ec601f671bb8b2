//! Shared numeric constants for the map view and the editor.

/// Smallest zoom factor the map view accepts.
pub const MIN_ZOOM: f64 = 0.1;

/// Largest zoom factor the map view accepts.
pub const MAX_ZOOM: f64 = 10.0;

/// Zoom change per unit of wheel delta.
pub const ZOOM_STEP: f64 = 0.1;

/// Canvas extents below this many pixels are clamped up to it.
pub const MIN_CANVAS_EXTENT: f64 = 50.0;

/// Default number of undo snapshots kept before the oldest is evicted.
pub const DEFAULT_UNDO_CAPACITY: usize = 50;

/// Radius given to newly created zones, in world units.
pub const DEFAULT_ZONE_RADIUS: f64 = 50.0;

/// Colour assigned to territories created from the editor (opaque white, ARGB).
pub const DEFAULT_TERRITORY_COLOR: u32 = 0xFFFF_FFFF;

/// Name offered for new zones when the document has no territories yet.
pub const FALLBACK_TERRITORY_NAME: &str = "NewTerritory";

/// World extents of the Chernarus map.
pub const CHERNARUS_WORLD_SIZE: f64 = 15360.0;

/// World extents of the Livonia map.
pub const LIVONIA_WORLD_SIZE: f64 = 12800.0;

/// Floating-point tolerance used when comparing world positions.
pub const EPSILON: f64 = 1e-6;
