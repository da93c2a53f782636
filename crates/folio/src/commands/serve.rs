//! Preview server command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use folio_server::{PreviewConfig, PreviewServer};

use crate::config::load_config;

/// Run the serve command.
pub async fn run(config_path: &Path, port: u16, dir: Option<PathBuf>, open: bool) -> Result<()> {
    let dir = match dir {
        Some(dir) => dir,
        None => load_config(config_path)?.paths.output,
    };

    if !dir.exists() {
        anyhow::bail!(
            "Directory not found: {}. Run 'folio build' first.",
            dir.display()
        );
    }

    let config = PreviewConfig {
        dir,
        port,
        open,
        ..Default::default()
    };

    PreviewServer::new(config).start().await?;

    Ok(())
}
