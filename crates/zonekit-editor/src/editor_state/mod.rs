//! Editor state manager for UI integration.
//! Owns the document, view, selection, gesture, and undo state and exposes
//! the operations the host UI drives.
//!
//! This module is split into submodules for better organization:
//! - `selection`: Zone and territory selection, selection summary
//! - `zones`: Zone creation, deletion, batch and inspector edits, visibility
//! - `shortcuts`: Keyboard shortcut dispatch
//! - `file_io`: Save/load operations

mod file_io;
mod selection;
mod shortcuts;
mod zones;

pub use selection::{SelectionSummary, TerritorySummary};
pub use zones::ZoneProperties;

use std::path::PathBuf;

use tracing::{debug, info};
use zonekit_core::{CanvasRect, EditorError, EditorResult, MapInfo, ScreenPos};
use zonekit_settings::{Config, EditorSettings};

use crate::document::Document;
use crate::history::UndoHistory;
use crate::interaction::{CanvasResponse, InteractionContext, InteractionController, PointerEvent};
use crate::selection_manager::SelectionManager;
use crate::viewport::Viewport;

/// Editor state for UI integration
#[derive(Debug, Clone)]
pub struct EditorState {
    document: Document,
    viewport: Viewport,
    selection: SelectionManager,
    interaction: InteractionController,
    history: UndoHistory,
    settings: EditorSettings,
    maps: Vec<MapInfo>,
    active_map: usize,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
}

impl EditorState {
    /// Creates a new editor state with default settings.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Creates a new editor state from loaded configuration.
    pub fn with_config(config: &Config) -> Self {
        let maps = if config.maps.is_empty() {
            vec![MapInfo::default()]
        } else {
            config.maps.clone()
        };
        let active_map = config.editor.default_map.min(maps.len() - 1);

        Self {
            document: Document::new(),
            viewport: Viewport::new(&maps[active_map]),
            selection: SelectionManager::new(),
            interaction: InteractionController::new(),
            history: UndoHistory::with_capacity(config.editor.undo_capacity),
            settings: config.editor.clone(),
            maps,
            active_map,
            current_file_path: None,
            is_modified: false,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn maps(&self) -> &[MapInfo] {
        &self.maps
    }

    pub fn active_map(&self) -> &MapInfo {
        &self.maps[self.active_map]
    }

    pub fn active_map_index(&self) -> usize {
        self.active_map
    }

    /// Switches the active map. Pan and zoom are preserved.
    pub fn select_map(&mut self, index: usize) -> EditorResult<()> {
        let map = self.maps.get(index).ok_or(EditorError::UnknownMap {
            index,
            count: self.maps.len(),
        })?;
        self.viewport.set_map(map)?;
        self.active_map = index;
        info!(map = %map.name, "switched map");
        Ok(())
    }

    /// Sets the canvas rectangle; the host calls this every frame.
    pub fn set_canvas(&mut self, canvas: CanvasRect) {
        self.viewport.set_canvas(canvas);
    }

    pub fn zoom_at(&mut self, delta: f64, anchor: ScreenPos) {
        self.viewport.zoom_at(delta, anchor);
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.viewport.pan_by(dx, dy);
    }

    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    /// Feeds one pointer event through the interaction state machine.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> CanvasResponse {
        let mut ctx = InteractionContext {
            document: &mut self.document,
            viewport: &mut self.viewport,
            selection: &mut self.selection,
            history: &mut self.history,
        };
        let response = self.interaction.handle_event(event, &mut ctx);
        if response.modified_document() {
            self.is_modified = true;
        }
        response
    }

    /// Pushes a snapshot of the current document onto the undo history.
    pub fn save_undo_state(&mut self) {
        self.history.save(self.document.snapshot());
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Restores the most recent snapshot. Returns false when there is nothing
    /// to undo, in which case nothing changes.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            return false;
        };
        self.document.replace(snapshot);
        self.forget_handles();
        self.is_modified = true;
        info!(remaining = self.history.len(), "undo");
        true
    }

    pub fn total_zone_count(&self) -> usize {
        self.document.total_zone_count()
    }

    /// Drops selection and gesture state after the document was restructured.
    /// Must run in the same step as the mutation.
    fn forget_handles(&mut self) {
        self.selection.clear(&mut self.document);
        self.interaction.reset();
        debug!(generation = self.document.generation(), "selection reset after structural change");
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
