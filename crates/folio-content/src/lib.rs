//! Content parsing and loading for folio sites.
//!
//! This crate turns a content directory of markdown documents into typed
//! records: blog posts, projects, ideas and tool categories. It also renders
//! post bodies to HTML.

pub mod date;
pub mod defaults;
pub mod error;
pub mod frontmatter;
pub mod loader;
pub mod markup;
pub mod sections;
pub mod types;

pub use error::ContentError;
pub use frontmatter::{parse_document, ContentDocument, Metadata};
pub use loader::{load_all_content, load_ideas, load_posts, load_projects, load_tools, ContentDirs};
pub use markup::{render_markdown, rewrite_image_paths};
pub use sections::{
    parse_idea_line, parse_ideas, parse_project_line, parse_projects, parse_tools,
};
pub use types::{
    BlogPost, Idea, Project, SiteContent, Status, Tool, ToolCategory, ToolLabels, ToolLayout,
};
