//! Pointer interaction state machine for the map canvas.
//!
//! The host feeds raw pointer events (screen coordinates plus modifier
//! flags) into [`InteractionController::handle_event`]. The controller
//! consults the viewport and hit-test, mutates the document through the
//! selection manager, and reports what changed so the host knows whether to
//! redraw or to open a dialog.
//!
//! Gestures:
//! - wheel over the canvas zooms around the cursor
//! - middle drag pans
//! - right drag, or left drag from empty space or with shift, draws a marquee
//! - left drag on an already selected zone moves every selected zone
//! - double-click on empty canvas asks the host to create a zone

use tracing::{debug, trace};
use zonekit_core::{Point, ScreenPos, ScreenRect};

use crate::document::{Document, ZoneHandle};
use crate::hit_test::{find_zone_at, zones_in_rect};
use crate::history::UndoHistory;
use crate::selection_manager::SelectionManager;
use crate::viewport::Viewport;

/// Pointer buttons the canvas reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Modifier keys held during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Forces a marquee on left press, even over a zone.
    pub shift: bool,
    /// Keeps the existing selection when clicking or finishing a marquee.
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        shift: false,
        ctrl: true,
    };
}

/// Raw pointer input from the host.
///
/// A double click is delivered as `DoubleClick` in place of the second press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Wheel {
        pos: ScreenPos,
        delta: f64,
    },
    Press {
        button: MouseButton,
        pos: ScreenPos,
        modifiers: Modifiers,
    },
    Move {
        pos: ScreenPos,
        modifiers: Modifiers,
    },
    Release {
        button: MouseButton,
        pos: ScreenPos,
        modifiers: Modifiers,
    },
    DoubleClick {
        button: MouseButton,
        pos: ScreenPos,
        modifiers: Modifiers,
    },
}

/// Bookkeeping for an in-progress zone drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    /// World position under the pointer when the drag began.
    pub click_world: Point,
    /// Each dragged zone with its position at drag start.
    pub originals: Vec<(ZoneHandle, Point)>,
}

/// The gesture currently in progress.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Panning {
        last: ScreenPos,
    },
    MarqueeSelecting {
        button: MouseButton,
        start: ScreenPos,
        end: ScreenPos,
    },
    DraggingZone(DragState),
}

/// What an event did, so the host can react.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasResponse {
    /// Nothing changed.
    Ignored,
    /// Pan or zoom changed.
    ViewChanged,
    /// A marquee was started or resized.
    MarqueeUpdated,
    /// The selection changed.
    SelectionChanged,
    /// A drag began; an undo snapshot has been taken.
    DragStarted,
    /// Dragged zones moved.
    ZonesMoved,
    /// A drag ended.
    DragFinished,
    /// The user asked for a new zone at this world position.
    CreateZoneRequested(Point),
}

impl CanvasResponse {
    /// Whether the event modified document data.
    pub fn modified_document(&self) -> bool {
        matches!(self, CanvasResponse::DragStarted | CanvasResponse::ZonesMoved)
    }
}

/// Mutable view of the editor parts an event may touch.
pub struct InteractionContext<'a> {
    pub document: &'a mut Document,
    pub viewport: &'a mut Viewport,
    pub selection: &'a mut SelectionManager,
    pub history: &'a mut UndoHistory,
}

/// Drives [`Gesture`] transitions from pointer events.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    gesture: Gesture,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.gesture, Gesture::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::DraggingZone(_))
    }

    pub fn is_marquee_selecting(&self) -> bool {
        matches!(self.gesture, Gesture::MarqueeSelecting { .. })
    }

    /// The live marquee rectangle, normalised, for drawing.
    pub fn marquee_rect(&self) -> Option<ScreenRect> {
        match self.gesture {
            Gesture::MarqueeSelecting { start, end, .. } => Some(ScreenRect::from_corners(start, end)),
            _ => None,
        }
    }

    /// Abandons any gesture in progress. Called whenever the document is
    /// replaced or zones are removed, since drag bookkeeping holds handles.
    pub fn reset(&mut self) {
        self.gesture = Gesture::Idle;
    }

    pub fn handle_event(&mut self, event: PointerEvent, ctx: &mut InteractionContext<'_>) -> CanvasResponse {
        match event {
            PointerEvent::Wheel { pos, delta } => self.on_wheel(pos, delta, ctx),
            PointerEvent::Press {
                button,
                pos,
                modifiers,
            } => self.on_press(button, pos, modifiers, ctx),
            PointerEvent::Move { pos, .. } => self.on_move(pos, ctx),
            PointerEvent::Release {
                button, modifiers, ..
            } => self.on_release(button, modifiers, ctx),
            PointerEvent::DoubleClick {
                button,
                pos,
                modifiers,
            } => self.on_double_click(button, pos, modifiers, ctx),
        }
    }

    fn on_wheel(&mut self, pos: ScreenPos, delta: f64, ctx: &mut InteractionContext<'_>) -> CanvasResponse {
        if delta == 0.0 || !ctx.viewport.canvas().contains(&pos) {
            return CanvasResponse::Ignored;
        }
        ctx.viewport.zoom_at(delta, pos);
        trace!(zoom = ctx.viewport.zoom(), "zoomed at cursor");
        CanvasResponse::ViewChanged
    }

    fn on_press(
        &mut self,
        button: MouseButton,
        pos: ScreenPos,
        modifiers: Modifiers,
        ctx: &mut InteractionContext<'_>,
    ) -> CanvasResponse {
        if !self.is_idle() || !ctx.viewport.canvas().contains(&pos) {
            return CanvasResponse::Ignored;
        }

        match button {
            MouseButton::Middle => {
                self.gesture = Gesture::Panning { last: pos };
                CanvasResponse::Ignored
            }
            MouseButton::Right => self.begin_marquee(MouseButton::Right, pos),
            MouseButton::Left => self.on_left_press(pos, modifiers, ctx),
        }
    }

    fn on_left_press(&mut self, pos: ScreenPos, modifiers: Modifiers, ctx: &mut InteractionContext<'_>) -> CanvasResponse {
        let world = ctx.viewport.screen_to_world(pos);
        let hit = find_zone_at(ctx.document, world);

        let hit_selected = hit.is_some_and(|h| ctx.document.zone(h).is_ok_and(|z| z.selected));
        if hit_selected && !ctx.selection.is_empty() {
            return self.begin_drag(world, ctx);
        }

        match hit {
            Some(handle) if !modifiers.shift => {
                match ctx.selection.select(ctx.document, handle, modifiers.ctrl) {
                    Ok(_) => CanvasResponse::SelectionChanged,
                    Err(err) => {
                        debug!(error = %err, "hit zone could not be selected");
                        CanvasResponse::Ignored
                    }
                }
            }
            _ => self.begin_marquee(MouseButton::Left, pos),
        }
    }

    fn begin_marquee(&mut self, button: MouseButton, pos: ScreenPos) -> CanvasResponse {
        self.gesture = Gesture::MarqueeSelecting {
            button,
            start: pos,
            end: pos,
        };
        CanvasResponse::MarqueeUpdated
    }

    fn begin_drag(&mut self, click_world: Point, ctx: &mut InteractionContext<'_>) -> CanvasResponse {
        let originals: Vec<(ZoneHandle, Point)> = ctx
            .selection
            .selected_zones()
            .iter()
            .filter_map(|h| ctx.document.zone(*h).ok().map(|z| (*h, z.position())))
            .collect();
        if originals.is_empty() {
            return CanvasResponse::Ignored;
        }

        // One snapshot per drag, never per frame
        ctx.history.save(ctx.document.snapshot());
        debug!(zones = originals.len(), at = %click_world, "drag started");
        self.gesture = Gesture::DraggingZone(DragState {
            click_world,
            originals,
        });
        CanvasResponse::DragStarted
    }

    fn on_move(&mut self, pos: ScreenPos, ctx: &mut InteractionContext<'_>) -> CanvasResponse {
        match &mut self.gesture {
            Gesture::Idle => CanvasResponse::Ignored,
            Gesture::Panning { last } => {
                let (dx, dy) = pos.delta_from(last);
                *last = pos;
                if dx == 0.0 && dy == 0.0 {
                    return CanvasResponse::Ignored;
                }
                ctx.viewport.pan_by(dx, dy);
                CanvasResponse::ViewChanged
            }
            Gesture::MarqueeSelecting { end, .. } => {
                *end = pos;
                CanvasResponse::MarqueeUpdated
            }
            Gesture::DraggingZone(drag) => {
                let offset = ctx.viewport.screen_to_world(pos) - drag.click_world;
                for (handle, original) in &drag.originals {
                    if let Ok(zone) = ctx.document.zone_mut(*handle) {
                        zone.set_position(*original + offset);
                    }
                }
                CanvasResponse::ZonesMoved
            }
        }
    }

    fn on_release(&mut self, button: MouseButton, modifiers: Modifiers, ctx: &mut InteractionContext<'_>) -> CanvasResponse {
        match std::mem::take(&mut self.gesture) {
            Gesture::Panning { .. } if button == MouseButton::Middle => CanvasResponse::Ignored,
            Gesture::MarqueeSelecting {
                button: marquee_button,
                start,
                end,
            } if marquee_button == button => {
                let rect = ScreenRect::from_corners(start, end);
                let hits = zones_in_rect(ctx.document, ctx.viewport, &rect);
                let added = ctx.selection.select_many(ctx.document, &hits, modifiers.ctrl);
                debug!(hits = hits.len(), added, additive = modifiers.ctrl, "marquee resolved");
                CanvasResponse::SelectionChanged
            }
            Gesture::DraggingZone(drag) if button == MouseButton::Left => {
                debug!(zones = drag.originals.len(), "drag finished");
                CanvasResponse::DragFinished
            }
            other => {
                self.gesture = other;
                CanvasResponse::Ignored
            }
        }
    }

    fn on_double_click(
        &mut self,
        button: MouseButton,
        pos: ScreenPos,
        modifiers: Modifiers,
        ctx: &mut InteractionContext<'_>,
    ) -> CanvasResponse {
        if button == MouseButton::Left
            && !modifiers.shift
            && self.is_idle()
            && ctx.viewport.canvas().contains(&pos)
        {
            let world = ctx.viewport.screen_to_world(pos);
            if find_zone_at(ctx.document, world).is_none() {
                return CanvasResponse::CreateZoneRequested(world);
            }
        }
        self.on_press(button, pos, modifiers, ctx)
    }
}
