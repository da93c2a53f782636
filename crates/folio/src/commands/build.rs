//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use folio_server::{rebuild_on_change, FileWatcher};
use folio_static::StaticBuilder;

use crate::config::{load_config, PathsConfig};

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, watch: bool) -> Result<()> {
    tracing::info!("Building static site...");

    let file_config = load_config(config_path)?;
    let builder = StaticBuilder::new(file_config.paths.build_config(output), file_config.site);

    if !watch {
        return build_once(&builder);
    }

    if let Err(e) = build_once(&builder) {
        tracing::error!("Build failed: {:#}", e);
    }

    watch_and_rebuild(&builder, &file_config.paths).await
}

/// Build once and report the result.
pub fn build_once(builder: &StaticBuilder) -> Result<()> {
    let result = builder.build()?;

    tracing::info!(
        "Built {} pages ({} posts) in {}ms",
        result.pages,
        result.posts,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}

/// Rebuild the whole site on every change under the source directories.
///
/// Only returns if the watcher cannot be started or its channel closes.
pub async fn watch_and_rebuild(builder: &StaticBuilder, paths: &PathsConfig) -> Result<()> {
    let (_watcher, rx) =
        FileWatcher::new(&paths.watch_paths()).context("Failed to start file watcher")?;

    tracing::info!("Watching for changes...");

    rebuild_on_change(rx, || build_once(builder)).await;

    Ok(())
}
