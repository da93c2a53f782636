//! Development command: build, watch and serve.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use folio_server::{PreviewConfig, PreviewServer};
use folio_static::StaticBuilder;

use crate::commands::build::{build_once, watch_and_rebuild};
use crate::config::load_config;

/// Run the dev command.
pub async fn run(config_path: &Path, port: u16, open: bool) -> Result<()> {
    tracing::info!("Starting development server on port {}", port);

    let file_config = load_config(config_path)?;
    let build_config = file_config.paths.build_config(None);
    let output_dir = build_config.output_dir.clone();
    let builder = StaticBuilder::new(build_config, file_config.site);

    if let Err(e) = build_once(&builder) {
        tracing::error!("Build failed: {:#}", e);
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    }

    let server = PreviewServer::new(PreviewConfig {
        dir: output_dir,
        port,
        open,
        ..Default::default()
    });

    tokio::select! {
        result = server.start() => result?,
        result = watch_and_rebuild(&builder, &file_config.paths) => result?,
    }

    Ok(())
}
