use anyhow::Context;
use tracing::info;

use zonekit::{
    init_logging, log_summary, open_document, persist_config, Config, EditorState, BUILD_DATE, VERSION,
};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    info!(version = VERSION, build_date = BUILD_DATE, "starting zonekit");

    let mut config = Config::load_or_default().context("Failed to load configuration")?;

    let editor = match std::env::args_os().nth(1) {
        Some(path) => {
            let editor = open_document(&mut config, path)?;
            persist_config(&config);
            editor
        }
        None => EditorState::with_config(&config),
    };
    log_summary(&editor);

    Ok(())
}
