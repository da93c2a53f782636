//! Content loaders.
//!
//! Each loader reads one content directory, parses every document with the
//! front matter parser and the matching section-list parser, resolves
//! defaults and returns the records in listing order.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::date::PostDate;
use crate::defaults::{
    BLOG_IMAGES_ROOT, DEFAULT_COVER_IMAGE, DEFAULT_TOOL_ORDER, EXCERPT_CHARS, EXCERPT_SUFFIX,
    POST_INDEX_FILE,
};
use crate::error::ContentError;
use crate::frontmatter::{parse_document, ContentDocument};
use crate::sections::{parse_ideas, parse_projects, parse_tools};
use crate::types::{BlogPost, Idea, Project, SiteContent, ToolCategory, ToolLabels, ToolLayout};

const MARKDOWN_EXT: &str = ".md";

/// Locations of the four content categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDirs {
    pub blog: PathBuf,
    pub projects: PathBuf,
    pub ideas: PathBuf,
    pub tools: PathBuf,
}

impl ContentDirs {
    /// Standard layout: `<root>/{blog,projects,ideas,tools}`.
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            blog: root.join("blog"),
            projects: root.join("projects"),
            ideas: root.join("ideas"),
            tools: root.join("tools"),
        }
    }
}

/// How a post is stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PostLayout {
    /// `blog/<slug>.md`
    File,
    /// `blog/<slug>/index.md`, with its own `images/` directory
    Directory,
}

/// Load every content category.
///
/// Fails if any of the four directories is missing or unreadable.
pub fn load_all_content(
    dirs: &ContentDirs,
    labels: &ToolLabels,
) -> Result<SiteContent, ContentError> {
    let content = SiteContent {
        posts: load_posts(&dirs.blog, None)?,
        projects: load_projects(&dirs.projects)?,
        ideas: load_ideas(&dirs.ideas)?,
        tool_categories: load_tools(&dirs.tools, labels)?,
    };

    tracing::info!(
        "Loaded {} posts, {} projects, {} ideas, {} tool categories",
        content.posts.len(),
        content.projects.len(),
        content.ideas.len(),
        content.tool_categories.len()
    );

    Ok(content)
}

/// Load blog posts, newest first, keeping at most `limit` of them.
///
/// Both `<slug>.md` files and `<slug>/index.md` directories are posts;
/// directories without an index file are skipped.
pub fn load_posts(dir: &Path, limit: Option<usize>) -> Result<Vec<BlogPost>, ContentError> {
    let mut posts = Vec::new();

    for entry in read_entries(dir)? {
        let name = entry.file_name().to_string_lossy();

        if entry.file_type().is_dir() {
            let index = entry.path().join(POST_INDEX_FILE);
            if !index.is_file() {
                tracing::debug!("Skipping {}: no {}", entry.path().display(), POST_INDEX_FILE);
                continue;
            }
            let doc = read_document(&index)?;
            posts.push(build_post(&name, doc, PostLayout::Directory));
        } else if let Some(slug) = markdown_stem(&entry) {
            let doc = read_document(entry.path())?;
            posts.push(build_post(slug, doc, PostLayout::File));
        }
    }

    posts.sort_by(compare_post_dates);

    if let Some(limit) = limit {
        posts.truncate(limit);
    }

    Ok(posts)
}

/// Load projects from checked list items, sorted by title.
pub fn load_projects(dir: &Path) -> Result<Vec<Project>, ContentError> {
    let mut projects = Vec::new();

    for (source_file, doc) in read_markdown_documents(dir)? {
        projects.extend(parse_projects(&doc.body).into_iter().map(|project| Project {
            source_file: source_file.clone(),
            metadata: doc.metadata.clone(),
            ..project
        }));
    }

    projects.sort_by(|a, b| compare_titles(&a.title, &b.title));
    Ok(projects)
}

/// Load ideas, completed before planned, then by title.
pub fn load_ideas(dir: &Path) -> Result<Vec<Idea>, ContentError> {
    let mut ideas = Vec::new();

    for (source_file, doc) in read_markdown_documents(dir)? {
        ideas.extend(parse_ideas(&doc.body).into_iter().map(|idea| Idea {
            source_file: source_file.clone(),
            metadata: doc.metadata.clone(),
            ..idea
        }));
    }

    ideas.sort_by(|a, b| {
        a.status
            .rank()
            .cmp(&b.status.rank())
            .then_with(|| compare_titles(&a.title, &b.title))
    });
    Ok(ideas)
}

/// Load tool categories, one per file, sorted by `order`.
pub fn load_tools(dir: &Path, labels: &ToolLabels) -> Result<Vec<ToolCategory>, ContentError> {
    let mut categories: Vec<ToolCategory> = read_markdown_documents(dir)?
        .into_iter()
        .map(|(slug, doc)| ToolCategory {
            title: doc.text_field("title").unwrap_or_default(),
            description: doc.text_field("description").unwrap_or_default(),
            order: doc.number_field("order").unwrap_or(DEFAULT_TOOL_ORDER),
            layout: ToolLayout::from_name(doc.text_field("layout").as_deref()),
            tools: parse_tools(&doc.body, labels),
            content: doc.body,
            metadata: doc.metadata,
            slug,
        })
        .collect();

    categories.sort_by(|a, b| a.order.total_cmp(&b.order));
    Ok(categories)
}

/// Resolve a post's cover image to a site-absolute path.
///
/// Directory posts may reference their own images with `./`; those are
/// published under `/images/blog/<slug>/`.
fn resolve_cover_image(raw: Option<String>, slug: &str, layout: PostLayout) -> String {
    let Some(cover) = raw.filter(|c| !c.is_empty()) else {
        return DEFAULT_COVER_IMAGE.to_string();
    };

    match (layout, cover.strip_prefix("./")) {
        (PostLayout::Directory, Some(rest)) => format!("{BLOG_IMAGES_ROOT}/{slug}/{rest}"),
        _ => cover,
    }
}

fn build_post(slug: &str, doc: ContentDocument, layout: PostLayout) -> BlogPost {
    let excerpt = doc.body.chars().take(EXCERPT_CHARS).collect::<String>() + EXCERPT_SUFFIX;

    BlogPost {
        slug: slug.to_string(),
        title: doc.text_field("title").unwrap_or_default(),
        date: doc.text_field("date").unwrap_or_default(),
        cover_image: resolve_cover_image(doc.text_field("coverImage"), slug, layout),
        excerpt,
        content: doc.body,
        metadata: doc.metadata,
    }
}

/// Newest first; posts without a readable date go last.
fn compare_post_dates(a: &BlogPost, b: &BlogPost) -> Ordering {
    match (PostDate::parse(&a.date), PostDate::parse(&b.date)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Case-insensitive title order, falling back to byte order for a total order.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// List the direct children of a content directory in file-name order.
fn read_entries(dir: &Path) -> Result<Vec<DirEntry>, ContentError> {
    let directory_error = |source: io::Error| ContentError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    let meta = fs::metadata(dir).map_err(directory_error)?;
    if !meta.is_dir() {
        return Err(directory_error(io::Error::other("not a directory")));
    }

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.map_err(|e| directory_error(e.into())))
        .collect()
}

/// Read every `*.md` file in a directory, keyed by file stem.
fn read_markdown_documents(dir: &Path) -> Result<Vec<(String, ContentDocument)>, ContentError> {
    let mut docs = Vec::new();

    for entry in read_entries(dir)? {
        if let Some(stem) = markdown_stem(&entry) {
            docs.push((stem.to_string(), read_document(entry.path())?));
        }
    }

    Ok(docs)
}

fn markdown_stem(entry: &DirEntry) -> Option<&str> {
    if !entry.file_type().is_file() {
        return None;
    }
    entry.file_name().to_str()?.strip_suffix(MARKDOWN_EXT)
}

fn read_document(path: &Path) -> Result<ContentDocument, ContentError> {
    tracing::debug!("Reading {}", path.display());

    let bytes = fs::read(path).map_err(|source| ContentError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let source = String::from_utf8_lossy(&bytes);
    if matches!(source, Cow::Owned(_)) {
        tracing::warn!("{} is not valid UTF-8, replacing invalid bytes", path.display());
    }

    Ok(parse_document(&source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;
    use pretty_assertions::assert_eq;
    use tempfile::{tempdir, TempDir};

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn site() -> TempDir {
        let temp = tempdir().unwrap();
        for dir in ["blog", "projects", "ideas", "tools"] {
            fs::create_dir_all(temp.path().join(dir)).unwrap();
        }
        temp
    }

    fn post(date: &str) -> String {
        format!("---\ntitle: Post {date}\ndate: {date}\n---\nBody of {date}\n")
    }

    #[test]
    fn posts_sort_newest_first() {
        let temp = site();
        let blog = temp.path().join("blog");
        write(&blog, "a.md", &post("2024-01-01"));
        write(&blog, "b.md", &post("2024-03-01"));
        write(&blog, "c.md", &post("2024-02-01"));

        let posts = load_posts(&blog, None).unwrap();

        let dates: Vec<_> = posts.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, ["2024-03-01", "2024-02-01", "2024-01-01"]);
    }

    #[test]
    fn limit_applies_after_sorting() {
        let temp = site();
        let blog = temp.path().join("blog");
        write(&blog, "a.md", &post("2024-01-01"));
        write(&blog, "b.md", &post("2024-03-01"));
        write(&blog, "c.md", &post("2024-02-01"));

        let posts = load_posts(&blog, Some(2)).unwrap();

        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["b", "c"]);
    }

    #[test]
    fn undated_posts_go_last() {
        let temp = site();
        let blog = temp.path().join("blog");
        write(&blog, "draft.md", "---\ntitle: Draft\n---\nNo date");
        write(&blog, "old.md", &post("2020-05-05"));

        let posts = load_posts(&blog, None).unwrap();

        assert_eq!(posts[0].slug, "old");
        assert_eq!(posts[1].slug, "draft");
        assert_eq!(posts[1].date, "");
    }

    #[test]
    fn directory_posts_resolve_relative_cover() {
        let temp = site();
        let blog = temp.path().join("blog");
        write(
            &blog,
            "my-trip/index.md",
            "---\ntitle: Trip\ndate: 2024-04-01\ncoverImage: ./images/cover.jpg\n---\nPhotos",
        );
        write(&blog, "empty-dir/notes.txt", "not a post");

        let posts = load_posts(&blog, None).unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "my-trip");
        assert_eq!(posts[0].cover_image, "/images/blog/my-trip/images/cover.jpg");
    }

    #[test]
    fn file_posts_keep_cover_and_default_missing_one() {
        let temp = site();
        let blog = temp.path().join("blog");
        write(&blog, "a.md", "---\ndate: 2024-01-02\ncoverImage: ./x.png\n---\n");
        write(&blog, "b.md", "---\ndate: 2024-01-01\n---\n");

        let posts = load_posts(&blog, None).unwrap();

        assert_eq!(posts[0].cover_image, "./x.png");
        assert_eq!(posts[1].cover_image, DEFAULT_COVER_IMAGE);
        assert_eq!(posts[1].title, "");
    }

    #[test]
    fn excerpt_is_first_hundred_chars() {
        let temp = site();
        let blog = temp.path().join("blog");
        let body = "字".repeat(150);
        write(&blog, "long.md", &format!("---\ntitle: Long\n---\n{body}"));
        write(&blog, "short.md", "---\ntitle: Short\n---\nHi");

        let posts = load_posts(&blog, None).unwrap();
        let long = posts.iter().find(|p| p.slug == "long").unwrap();
        let short = posts.iter().find(|p| p.slug == "short").unwrap();

        assert_eq!(long.excerpt, format!("{}...", "字".repeat(100)));
        assert_eq!(short.excerpt, "Hi...");
        assert_eq!(long.content, body);
    }

    #[test]
    fn projects_carry_provenance_and_sort_by_title() {
        let temp = site();
        let dir = temp.path().join("projects");
        write(
            &dir,
            "2024.md",
            "---\ncategory: web\n---\n- [x] **zebra** - Z\n- [ ] **Skipped** - not done\n",
        );
        write(&dir, "2023.md", "- [x] **Apple** - A\n");
        write(&dir, "notes.txt", "- [x] **Ignored** - not markdown\n");

        let projects = load_projects(&dir).unwrap();

        let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Apple", "zebra"]);
        assert_eq!(projects[0].source_file, "2023");
        assert_eq!(projects[1].source_file, "2024");
        assert_eq!(
            projects[1].metadata.get("category").and_then(|v| v.as_str()),
            Some("web")
        );
    }

    #[test]
    fn ideas_sort_completed_first_then_by_title() {
        let temp = site();
        let dir = temp.path().join("ideas");
        write(
            &dir,
            "ideas.md",
            "- [ ] **Beta** - b\n- [x] **Zeta** - z\n- [ ] **Alpha** - a\n- [x] **Alpha** - a\n",
        );

        let ideas = load_ideas(&dir).unwrap();

        let order: Vec<_> = ideas
            .iter()
            .map(|i| (i.status, i.title.as_str()))
            .collect();
        assert_eq!(
            order,
            [
                (Status::Completed, "Alpha"),
                (Status::Completed, "Zeta"),
                (Status::Planned, "Alpha"),
                (Status::Planned, "Beta"),
            ]
        );
        assert!(ideas.iter().all(|i| i.source_file == "ideas"));
    }

    #[test]
    fn tool_categories_sort_by_order_with_default() {
        let temp = site();
        let dir = temp.path().join("tools");
        write(&dir, "a.md", "---\ntitle: Two\norder: 2\n---\n");
        write(&dir, "b.md", "---\ntitle: Unordered\n---\n");
        write(&dir, "c.md", "---\ntitle: One\norder: 1\nlayout: grid\n---\n");

        let categories = load_tools(&dir, &ToolLabels::default()).unwrap();

        let order: Vec<_> = categories
            .iter()
            .map(|c| (c.order, c.title.as_str()))
            .collect();
        assert_eq!(
            order,
            [(1.0, "One"), (2.0, "Two"), (DEFAULT_TOOL_ORDER, "Unordered")]
        );
        assert_eq!(categories[0].layout, ToolLayout::Grid);
        assert_eq!(categories[1].layout, ToolLayout::List);
        assert_eq!(categories[0].slug, "c");
    }

    #[test]
    fn fractional_order_sorts_between_integers() {
        let temp = site();
        let dir = temp.path().join("tools");
        write(&dir, "a.md", "---\ntitle: Half\norder: 1.5\n---\n");
        write(&dir, "b.md", "---\ntitle: One\norder: 1\n---\n");
        write(&dir, "c.md", "---\ntitle: Zero\norder: 0\n---\n");

        let categories = load_tools(&dir, &ToolLabels::default()).unwrap();

        let titles: Vec<_> = categories.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Zero", "One", "Half"]);
        assert_eq!(categories[2].order, 1.5);
    }

    #[test]
    fn tool_categories_parse_their_tools() {
        let temp = site();
        let dir = temp.path().join("tools");
        write(
            &dir,
            "dev.md",
            "---\ntitle: Dev\ndescription: Daily drivers\n---\n## Zed\n- **URL**: https://zed.dev\n- **图标**: ⚡\n",
        );

        let categories = load_tools(&dir, &ToolLabels::default()).unwrap();

        assert_eq!(categories[0].description, "Daily drivers");
        assert_eq!(categories[0].tools.len(), 1);
        assert_eq!(categories[0].tools[0].icon, "⚡");
    }

    #[test]
    fn load_all_content_reads_every_category() {
        let temp = site();
        write(temp.path(), "blog/hello.md", &post("2024-01-01"));
        write(temp.path(), "projects/p.md", "- [x] **P** - p\n");
        write(temp.path(), "ideas/i.md", "- [ ] **I** - i\n");
        write(temp.path(), "tools/t.md", "## T\n- **URL**: https://t.example\n");

        let content = load_all_content(&ContentDirs::under(temp.path()), &ToolLabels::default())
            .unwrap();

        assert_eq!(content.posts.len(), 1);
        assert_eq!(content.projects.len(), 1);
        assert_eq!(content.ideas.len(), 1);
        assert_eq!(content.tool_categories.len(), 1);
    }

    #[test]
    fn non_utf8_post_loads_with_replacement_characters() {
        let temp = site();
        let blog = temp.path().join("blog");
        write(&blog, "ok.md", &post("2024-01-01"));
        fs::write(
            blog.join("cafe.md"),
            b"---\ntitle: Cafe\ndate: 2024-02-01\n---\ncaf\xe9\n",
        )
        .unwrap();

        let posts = load_posts(&blog, None).unwrap();

        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["cafe", "ok"]);
        assert_eq!(posts[0].title, "Cafe");
        assert_eq!(posts[0].content, "caf\u{fffd}\n");
    }

    #[test]
    fn missing_tools_directory_is_an_error() {
        let temp = site();
        fs::remove_dir(temp.path().join("tools")).unwrap();

        let result = load_all_content(&ContentDirs::under(temp.path()), &ToolLabels::default());

        match result {
            Err(ContentError::DirectoryRead { path, .. }) => {
                assert_eq!(path, temp.path().join("tools"));
            }
            other => panic!("expected directory read error, got {other:?}"),
        }
    }

    #[test]
    fn file_in_place_of_directory_is_an_error() {
        let temp = tempdir().unwrap();
        let not_dir = temp.path().join("ideas");
        fs::write(&not_dir, "oops").unwrap();

        let result = load_ideas(&not_dir);

        assert!(matches!(result, Err(ContentError::DirectoryRead { .. })));
    }
}
