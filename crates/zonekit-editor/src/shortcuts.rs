//! Keyboard shortcuts understood by the editor.

use serde::{Deserialize, Serialize};

/// Keys with an editor binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Z,
    S,
    O,
    Delete,
    Backspace,
    Other,
}

/// A key press together with the modifier state and whether a text field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
    /// A text field owns the keyboard; editing keys belong to it.
    pub text_input_active: bool,
}

impl KeyChord {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
            text_input_active: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn while_typing(mut self) -> Self {
        self.text_input_active = true;
        self
    }
}

/// What a chord resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShortcutAction {
    Undo,
    DeleteSelected,
    Save,
    SaveAs,
    Open,
}

impl ShortcutAction {
    /// Resolves a chord. Undo and delete are withheld while typing so the
    /// text field keeps its own editing keys; file shortcuts always apply.
    pub fn from_chord(chord: KeyChord) -> Option<Self> {
        match (chord.key, chord.ctrl, chord.shift) {
            (Key::Z, true, false) if !chord.text_input_active => Some(ShortcutAction::Undo),
            (Key::Delete | Key::Backspace, false, _) if !chord.text_input_active => {
                Some(ShortcutAction::DeleteSelected)
            }
            (Key::S, true, false) => Some(ShortcutAction::Save),
            (Key::S, true, true) => Some(ShortcutAction::SaveAs),
            (Key::O, true, _) => Some(ShortcutAction::Open),
            _ => None,
        }
    }
}
