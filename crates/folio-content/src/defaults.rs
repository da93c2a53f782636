//! Defaults applied while loading content.
//!
//! Loaders resolve every optional field here so that page assembly never
//! has to guess.

use crate::types::ToolLayout;

/// Cover image used by posts that do not set `coverImage`.
pub const DEFAULT_COVER_IMAGE: &str = "/images/default-cover.svg";

/// Sort position of tool categories without an `order` field.
pub const DEFAULT_TOOL_ORDER: f64 = 999.0;

/// Layout of tool categories without a `layout` field.
pub const DEFAULT_TOOL_LAYOUT: ToolLayout = ToolLayout::List;

/// Number of body characters kept in a post excerpt.
pub const EXCERPT_CHARS: usize = 100;

/// Appended to every excerpt.
pub const EXCERPT_SUFFIX: &str = "...";

/// Entry file of a directory-layout post.
pub const POST_INDEX_FILE: &str = "index.md";

/// Directory holding a post's local images, relative to the post.
pub const POST_IMAGES_DIR: &str = "images";

/// Site path under which per-post image directories are published.
pub const BLOG_IMAGES_ROOT: &str = "/images/blog";
