//! Configuration file loading (folio.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use folio_static::{BuildConfig, SiteConfig};
use serde::Deserialize;

/// Configuration file structure.
///
/// `[paths]` locates the site on disk; every other key belongs to
/// [`SiteConfig`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub paths: PathsConfig,

    #[serde(flatten)]
    pub site: SiteConfig,
}

/// Directory layout, relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub content: PathBuf,
    pub templates: PathBuf,
    pub public: PathBuf,
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        let defaults = BuildConfig::default();
        Self {
            content: defaults.content_dir,
            templates: defaults.templates_dir,
            public: defaults.public_dir,
            output: defaults.output_dir,
        }
    }
}

impl PathsConfig {
    /// Build layout, with `output` overriding the configured output directory.
    pub fn build_config(&self, output: Option<PathBuf>) -> BuildConfig {
        BuildConfig {
            content_dir: self.content.clone(),
            templates_dir: self.templates.clone(),
            public_dir: self.public.clone(),
            output_dir: output.unwrap_or_else(|| self.output.clone()),
        }
    }

    /// Directories whose changes require a rebuild.
    pub fn watch_paths(&self) -> Vec<PathBuf> {
        vec![
            self.content.clone(),
            self.templates.clone(),
            self.public.clone(),
        ]
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No {}, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("folio.toml")).unwrap();

        assert_eq!(config.paths, PathsConfig::default());
        assert_eq!(config.site, SiteConfig::default());
    }

    #[test]
    fn reads_paths_and_site_keys() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(
            &path,
            r#"
title = "My Site"

[paths]
content = "posts"
output = "public_html"

[homepage]
latest_limit = 5

[status]
completed = "Done"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.paths.content, PathBuf::from("posts"));
        assert_eq!(config.paths.templates, PathBuf::from("templates"));
        assert_eq!(config.paths.output, PathBuf::from("public_html"));
        assert_eq!(config.site.title, "My Site");
        assert_eq!(config.site.homepage.latest_limit, 5);
        assert_eq!(config.site.status.completed, "Done");
        assert_eq!(config.site.status.planned, "计划中");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(&path, "title = ").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn output_override_wins() {
        let paths = PathsConfig::default();

        let build = paths.build_config(Some(PathBuf::from("out")));

        assert_eq!(build.output_dir, PathBuf::from("out"));
        assert_eq!(build.content_dir, PathBuf::from("content"));
    }
}
