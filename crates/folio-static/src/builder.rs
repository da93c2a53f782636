//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use folio_content::{load_all_content, ContentDirs, ContentError, SiteContent};

use crate::assets::{copy_dir_all, copy_post_images};
use crate::config::SiteConfig;
use crate::pages::{render_page, PageContext, PageRequest};
use crate::shell::ShellSet;

/// Directory layout of a build.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Content root holding `blog/`, `projects/`, `ideas/` and `tools/`
    pub content_dir: PathBuf,

    /// Directory holding `base.html` and `post.html` shells
    pub templates_dir: PathBuf,

    /// Files copied verbatim to the output root
    pub public_dir: PathBuf,

    /// Output directory, erased at the start of every build
    pub output_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            templates_dir: PathBuf::from("templates"),
            public_dir: PathBuf::from("public"),
            output_dir: PathBuf::from("dist"),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages written
    pub pages: usize,

    /// Number of blog posts among them
    pub posts: usize,

    /// Number of static files copied
    pub assets: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("Failed to read: {0}")]
    ReadError(String),

    #[error("Failed to copy assets: {0}")]
    CopyError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Static site builder.
///
/// Every call to [`build`](Self::build) starts from an empty output
/// directory and recomputes everything.
pub struct StaticBuilder {
    config: BuildConfig,
    site: SiteConfig,
}

impl StaticBuilder {
    /// Create a new static builder.
    pub fn new(config: BuildConfig, site: SiteConfig) -> Self {
        Self { config, site }
    }

    /// Build the static site.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();
        let out = &self.config.output_dir;

        tracing::info!("Building site into {}", out.display());

        self.prepare_output()?;
        let assets = self.copy_assets()?;

        let content = load_all_content(
            &ContentDirs::under(&self.config.content_dir),
            &self.site.tool_labels,
        )?;
        let shells = ShellSet::load(&self.config.templates_dir)?;

        let pages = self.write_pages(&content, &shells)?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages,
            posts: content.posts.len(),
            assets,
            duration_ms: duration.as_millis() as u64,
            output_dir: out.clone(),
        })
    }

    /// Erase the output directory and recreate its skeleton.
    fn prepare_output(&self) -> Result<(), BuildError> {
        let out = &self.config.output_dir;

        if out.exists() {
            fs::remove_dir_all(out)
                .map_err(|e| BuildError::WriteError(format!("{}: {}", out.display(), e)))?;
        }

        fs::create_dir_all(out.join("blog"))
            .map_err(|e| BuildError::WriteError(format!("{}: {}", out.display(), e)))
    }

    /// Copy `public/` and per-post image directories into the output.
    fn copy_assets(&self) -> Result<usize, BuildError> {
        let out = &self.config.output_dir;
        let mut count = 0;

        if self.config.public_dir.is_dir() {
            count += copy_dir_all(&self.config.public_dir, out)
                .map_err(|e| BuildError::CopyError(e.to_string()))?;
        }

        count += copy_post_images(
            &self.config.content_dir.join("blog"),
            &out.join("images").join("blog"),
        )
        .map_err(|e| BuildError::CopyError(e.to_string()))?;

        tracing::debug!("Copied {} static files", count);

        Ok(count)
    }

    /// Render and write every page, one after another.
    fn write_pages(&self, content: &SiteContent, shells: &ShellSet) -> Result<usize, BuildError> {
        let ctx = PageContext {
            config: &self.site,
            shells,
            content,
        };

        let mut requests = vec![
            PageRequest::Home,
            PageRequest::Blog,
            PageRequest::Projects,
            PageRequest::Ideas,
            PageRequest::Tools,
        ];
        requests.extend(content.posts.iter().map(PageRequest::Post));

        for request in &requests {
            let html = render_page(request, &ctx);
            let path = self.config.output_dir.join(request.output_path());
            tracing::debug!("Writing {}", path.display());
            write_output(&path, &html)?;
        }

        tracing::info!("Wrote {} pages", requests.len());

        Ok(requests.len())
    }
}

fn write_output(path: &Path, html: &str) -> Result<(), BuildError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| BuildError::WriteError(format!("{}: {}", parent.display(), e)))?;
    }

    fs::write(path, html).map_err(|e| BuildError::WriteError(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn fixture() -> (TempDir, BuildConfig) {
        let temp = tempdir().unwrap();
        let root = temp.path();

        write(
            root,
            "content/blog/hello.md",
            "---\ntitle: Hello\ndate: 2024-01-01\n---\nFirst post",
        );
        write(
            root,
            "content/blog/trip/index.md",
            "---\ntitle: Trip\ndate: 2024-02-01\ncoverImage: ./images/cover.png\n---\n![view](./images/view.png)",
        );
        write(root, "content/blog/trip/images/view.png", "png");
        write(root, "content/projects/done.md", "- [x] **Folio** - This site\n");
        write(root, "content/ideas/list.md", "- [ ] **Tuner** - Guitar tuner\n");
        write(
            root,
            "content/tools/dev.md",
            "---\ntitle: Dev\norder: 1\n---\n## Zed\n- **URL**: https://zed.dev\n",
        );
        write(root, "public/css/site.css", "body {}");

        let config = BuildConfig {
            content_dir: root.join("content"),
            templates_dir: root.join("templates"),
            public_dir: root.join("public"),
            output_dir: root.join("dist"),
        };

        (temp, config)
    }

    #[test]
    fn builds_complete_site() {
        let (_temp, config) = fixture();
        let out = config.output_dir.clone();

        let result = StaticBuilder::new(config, SiteConfig::default())
            .build()
            .unwrap();

        assert_eq!(result.pages, 7);
        assert_eq!(result.posts, 2);
        assert_eq!(result.assets, 2);
        for page in [
            "index.html",
            "blog.html",
            "projects.html",
            "ideas.html",
            "tools.html",
            "blog/hello.html",
            "blog/trip.html",
        ] {
            assert!(out.join(page).is_file(), "missing {page}");
        }
        assert!(out.join("css/site.css").is_file());
        assert!(out.join("images/blog/trip/images/view.png").is_file());

        let trip = fs::read_to_string(out.join("blog/trip.html")).unwrap();
        assert!(trip.contains(r#"src="/images/blog/trip/images/view.png""#));

        let home = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(home.contains("/images/blog/trip/images/cover.png"));
        assert!(home.find("/blog/trip.html").unwrap() < home.find("/blog/hello.html").unwrap());
    }

    #[test]
    fn clears_stale_output() {
        let (_temp, config) = fixture();
        write(&config.output_dir, "old.html", "stale");

        StaticBuilder::new(config.clone(), SiteConfig::default())
            .build()
            .unwrap();

        assert!(!config.output_dir.join("old.html").exists());
    }

    #[test]
    fn uses_custom_shells() {
        let (_temp, config) = fixture();
        write(&config.templates_dir, "base.html", "BASE[{{TITLE}}]{{CONTENT}}");

        StaticBuilder::new(config.clone(), SiteConfig::default())
            .build()
            .unwrap();

        let tools = fs::read_to_string(config.output_dir.join("tools.html")).unwrap();
        assert!(tools.starts_with("BASE[工具 - SkyBluues]"));
        let post = fs::read_to_string(config.output_dir.join("blog/hello.html")).unwrap();
        assert!(post.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn missing_content_directory_aborts_build() {
        let (_temp, config) = fixture();
        fs::remove_dir_all(config.content_dir.join("tools")).unwrap();

        let result = StaticBuilder::new(config, SiteConfig::default()).build();

        assert!(matches!(
            result,
            Err(BuildError::Content(ContentError::DirectoryRead { .. }))
        ));
    }
}
