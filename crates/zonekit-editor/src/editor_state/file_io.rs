//! File I/O operations (save, load, new) for editor state.

use std::path::Path;

use tracing::info;
use zonekit_core::TerritoryData;

use super::EditorState;
use crate::serialization;

const UNTITLED: &str = "Untitled";

impl EditorState {
    /// Load a territory file, replacing the document wholesale.
    ///
    /// On failure the current document, selection and history are untouched.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let data = serialization::load_from_file(path)?;
        let zones = data.total_zone_count();

        self.replace_data(data);
        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;

        info!(path = %path.display(), zones, "loaded territory file");
        Ok(())
    }

    /// Save the document to a territory file. The document itself is not
    /// touched; only the path and modified flag are updated.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        serialization::save_to_file(path, self.document.data())?;

        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;

        info!(
            path = %path.display(),
            zones = self.document.total_zone_count(),
            "saved territory file"
        );
        Ok(())
    }

    /// Save to the current path. Returns false when the document has never
    /// been saved and the host has to ask for a path first.
    pub fn save(&mut self) -> anyhow::Result<bool> {
        match self.current_file_path.clone() {
            Some(path) => {
                self.save_to_file(path)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Start an empty document.
    pub fn new_document(&mut self) {
        self.replace_data(TerritoryData::new());
        self.current_file_path = None;
        self.is_modified = false;
    }

    /// Title for the window: file name plus `*` when there are unsaved changes.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED.to_string());
        if self.is_modified {
            format!("{name}*")
        } else {
            name
        }
    }

    pub fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    /// Replaces the document with already parsed data, dropping the
    /// selection, any gesture in progress, and the undo history.
    pub fn replace_data(&mut self, data: TerritoryData) {
        self.document.replace(data);
        self.forget_handles();
        self.history.clear();
    }
}
