//! Keyboard shortcut dispatch for editor state.

use tracing::debug;

use super::EditorState;
use crate::shortcuts::{KeyChord, ShortcutAction};

impl EditorState {
    /// Handles a key chord.
    ///
    /// Undo and delete are carried out here. File actions need a dialog, so
    /// they are only resolved and handed back for the host to perform.
    pub fn handle_shortcut(&mut self, chord: KeyChord) -> Option<ShortcutAction> {
        let action = ShortcutAction::from_chord(chord)?;
        match action {
            ShortcutAction::Undo => {
                self.undo();
            }
            ShortcutAction::DeleteSelected => {
                self.delete_selected();
            }
            ShortcutAction::Save | ShortcutAction::SaveAs | ShortcutAction::Open => {
                debug!(?action, "file shortcut requested");
            }
        }
        Some(action)
    }
}
