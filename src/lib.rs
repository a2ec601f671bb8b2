//! # ZoneKit
//!
//! An editor for spawn-zone territory files: circular zones grouped into
//! named territories, laid over a 2D map.
//!
//! ## Architecture
//!
//! ZoneKit is organized as a workspace with multiple crates:
//!
//! 1. **zonekit-core** - Data model, geometry primitives, constants, errors
//! 2. **zonekit-editor** - View transform, hit-testing, selection, interaction,
//!    undo, batch editing, territory file persistence
//! 3. **zonekit-settings** - Map presets, editor defaults, recent files
//! 4. **zonekit** - Main binary that integrates all crates

use std::path::Path;

use anyhow::Context;
use tracing::{debug, info, warn};

pub use zonekit_core::{
    CanvasRect, EditorError, EditorResult, FormatError, MapInfo, Point, ScreenPos, Territory,
    TerritoryData, Zone,
};
pub use zonekit_editor as editor;
pub use zonekit_editor::{
    BatchField, BatchMode, CanvasResponse, EditorState, KeyChord, Modifiers, MouseButton,
    PointerEvent, ShortcutAction, Viewport,
};
pub use zonekit_settings::{Config, EditorSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Build an editor from configuration and open a territory file in it.
///
/// A successful open moves the file to the front of the recent files list.
pub fn open_document(config: &mut Config, path: impl AsRef<Path>) -> anyhow::Result<EditorState> {
    let path = path.as_ref();
    let mut editor = EditorState::with_config(config);
    editor
        .load_from_file(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    config.add_recent_file(path.to_path_buf());
    Ok(editor)
}

/// Write the configuration back to the platform config directory.
///
/// Failure is logged and otherwise ignored; the editor keeps working with the
/// in-memory configuration.
pub fn persist_config(config: &Config) {
    match config.save_default() {
        Ok(path) => debug!(path = %path.display(), recent = config.recent_files.len(), "saved config"),
        Err(err) => warn!(error = %err, "could not save config"),
    }
}

/// Log a short description of the open document.
pub fn log_summary(editor: &EditorState) {
    let document = editor.document();
    info!(
        file = %editor.display_name(),
        map = %editor.active_map().name,
        territories = document.territories().len(),
        zones = document.total_zone_count(),
        "document summary"
    );
    for territory in document.territories() {
        debug!(
            territory = %territory.name,
            color = format_args!("{:#010X}", territory.color),
            zones = territory.zones.len(),
            "territory"
        );
    }
}
