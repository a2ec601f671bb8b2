//! Viewport and coordinate transformation for the map view.
//!
//! Handles conversion between screen coordinates (pixels on the host canvas)
//! and world coordinates (map units). Manages zoom and pan with the map's
//! world extents stretched to fill the canvas at zoom 1.0.

use std::fmt;

use zonekit_core::constants::{MAX_ZOOM, MIN_CANVAS_EXTENT, MIN_ZOOM, ZOOM_STEP};
use zonekit_core::{CanvasRect, EditorError, EditorResult, MapInfo, Point, ScreenPos};

/// Represents the view transformation state (zoom, pan, canvas, world extents).
///
/// Pan and zoom are process-local view state; they never travel with the
/// document and survive document reloads.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas: CanvasRect,
    world_size_x: f64,
    world_size_z: f64,
}

impl Viewport {
    /// Creates a viewport for the given map with an identity view.
    pub fn new(map: &MapInfo) -> Self {
        let (world_size_x, world_size_z) = if map.has_valid_extents() {
            (map.world_size_x, map.world_size_z)
        } else {
            let fallback = MapInfo::default();
            (fallback.world_size_x, fallback.world_size_z)
        };
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            canvas: CanvasRect::default(),
            world_size_x,
            world_size_z,
        }
    }

    /// Switches to another map. Pan and zoom are kept; the scale factors follow
    /// the new extents.
    pub fn set_map(&mut self, map: &MapInfo) -> EditorResult<()> {
        if !map.has_valid_extents() {
            return Err(EditorError::InvalidMapExtents {
                width: map.world_size_x,
                height: map.world_size_z,
            });
        }
        self.world_size_x = map.world_size_x;
        self.world_size_z = map.world_size_z;
        Ok(())
    }

    /// World extents `(W, H)`.
    pub fn world_size(&self) -> (f64, f64) {
        (self.world_size_x, self.world_size_z)
    }

    /// Sets the canvas rectangle (typically called every frame by the host).
    pub fn set_canvas(&mut self, canvas: CanvasRect) {
        self.canvas = canvas.clamped(MIN_CANVAS_EXTENT);
    }

    pub fn canvas(&self) -> CanvasRect {
        self.canvas
    }

    /// Gets the current zoom level (1.0 = map fills the canvas).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped between `MIN_ZOOM` and `MAX_ZOOM`.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a screen-space delta. Unbounded: the view may leave the map entirely.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Pixels per world unit along X at zoom 1.0.
    fn scale_x(&self) -> f64 {
        self.canvas.width / self.world_size_x
    }

    /// Pixels per world unit along Z at zoom 1.0.
    fn scale_z(&self) -> f64 {
        self.canvas.height / self.world_size_z
    }

    /// Converts world coordinates to screen coordinates.
    ///
    /// World Z grows upwards while screen Y grows downwards, so Z is measured
    /// from the top edge of the world (`H - z`).
    ///
    /// Formula:
    /// ```text
    /// screen_x = x * scale_x * zoom + pan_x + canvas_x
    /// screen_y = (H - z) * scale_z * zoom + pan_y + canvas_y
    /// ```
    pub fn world_to_screen(&self, world: Point) -> ScreenPos {
        let x = world.x * self.scale_x() * self.zoom + self.pan_x + self.canvas.pos.x;
        let y = (self.world_size_z - world.z) * self.scale_z() * self.zoom
            + self.pan_y
            + self.canvas.pos.y;
        ScreenPos::new(x, y)
    }

    /// Converts screen coordinates to world coordinates; exact inverse of
    /// [`Viewport::world_to_screen`].
    pub fn screen_to_world(&self, screen: ScreenPos) -> Point {
        let x = (screen.x - self.canvas.pos.x - self.pan_x) / self.zoom / self.scale_x();
        let z = self.world_size_z
            - (screen.y - self.canvas.pos.y - self.pan_y) / self.zoom / self.scale_z();
        Point::new(x, z)
    }

    /// Zooms by `delta` wheel units while keeping the world point under
    /// `anchor` fixed on screen (zoom-to-cursor).
    pub fn zoom_at(&mut self, delta: f64, anchor: ScreenPos) {
        if !delta.is_finite() {
            return;
        }

        let anchored = self.screen_to_world(anchor);
        self.zoom = (self.zoom + delta * ZOOM_STEP).clamp(MIN_ZOOM, MAX_ZOOM);

        // Shift pan by however far the anchored point drifted
        let drifted = self.world_to_screen(anchored);
        self.pan_x += anchor.x - drifted.x;
        self.pan_y += anchor.y - drifted.y;
    }

    /// Radius of a world-space circle as drawn on screen.
    pub fn zone_screen_radius(&self, r: f64) -> f64 {
        r * self.scale_x().min(self.scale_z()) * self.zoom
    }

    /// Screen positions of the world corners, in the order
    /// bottom-left, bottom-right, top-right, top-left.
    ///
    /// The presentation layer maps the background image onto this quad.
    pub fn map_corners(&self) -> [ScreenPos; 4] {
        let (w, h) = self.world_size();
        [
            self.world_to_screen(Point::new(0.0, 0.0)),
            self.world_to_screen(Point::new(w, 0.0)),
            self.world_to_screen(Point::new(w, h)),
            self.world_to_screen(Point::new(0.0, h)),
        ]
    }

    /// Resets the view to identity: no pan, zoom 1.0.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(&MapInfo::default())
    }
}
