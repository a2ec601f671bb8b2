//! # ZoneKit Editor
//!
//! The spatial view and selection engine of the territory editor:
//! world/screen transform with pan and zoom, point and rectangle hit-testing
//! against circular zones, multi-select state, the pointer interaction state
//! machine, snapshot undo, batch editing, and territory file persistence.
//!
//! Everything runs synchronously on the caller's thread; each event is fully
//! processed before the next one is handled.

pub mod batch_edit;
pub mod document;
pub mod editor_state;
pub mod history;
pub mod interaction;
pub mod selection_manager;
pub mod serialization;
pub mod shortcuts;
pub mod viewport;

pub use batch_edit::{BatchEdit, BatchField, BatchMode};
pub use document::{Document, TerritoryHandle, ZoneHandle};
pub use editor_state::{EditorState, SelectionSummary, TerritorySummary, ZoneProperties};
pub use hit_test::{find_zone_at, zones_in_rect};
pub use history::UndoHistory;
pub use interaction::{
    CanvasResponse, DragState, Gesture, InteractionContext, InteractionController, Modifiers,
    MouseButton, PointerEvent,
};
pub use selection_manager::SelectionManager;
pub use shortcuts::{Key, KeyChord, ShortcutAction};
pub use viewport::Viewport;

pub use zonekit_core::{
    CanvasRect, EditorError, EditorResult, MapInfo, Point, ScreenPos, ScreenRect, Territory,
    TerritoryData, Zone,
};
