//! Records produced by the content loaders.

use serde::Deserialize;

use crate::defaults::DEFAULT_TOOL_LAYOUT;
use crate::frontmatter::Metadata;

/// Completion state of an idea or project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Completed,
    Planned,
}

impl Status {
    /// Status of a checkbox list item.
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Self::Completed
        } else {
            Self::Planned
        }
    }

    /// Stable string key (`completed` / `planned`).
    pub fn key(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Planned => "planned",
        }
    }

    /// Listing rank: completed items come first.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Completed => 0,
            Self::Planned => 1,
        }
    }
}

/// How a tool category is laid out on the tools page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolLayout {
    /// Vertical list, placed in a two-column grid with other list categories
    #[default]
    List,
    /// Multi-column grid of tools
    Grid,
}

impl ToolLayout {
    /// Parse a `layout` metadata value; unknown or missing values use the default.
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some("grid") => Self::Grid,
            Some("list") => Self::List,
            _ => DEFAULT_TOOL_LAYOUT,
        }
    }
}

/// A blog post.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    /// File or directory name the post was loaded from
    pub slug: String,

    /// `title` metadata (empty when missing)
    pub title: String,

    /// `date` metadata exactly as written (empty when missing)
    pub date: String,

    /// Leading body text shown in listings
    pub excerpt: String,

    /// Full markdown body
    pub content: String,

    /// Site-absolute cover image path
    pub cover_image: String,

    /// Front matter of the source document
    pub metadata: Metadata,
}

/// A finished project, taken from a checked list item.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub status: Status,

    /// Stem of the file the project was listed in
    pub source_file: String,

    /// Front matter of the source document
    pub metadata: Metadata,
}

/// An idea, taken from a checked or unchecked list item.
#[derive(Debug, Clone, PartialEq)]
pub struct Idea {
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub status: Status,

    /// Stem of the file the idea was listed in
    pub source_file: String,

    /// Front matter of the source document
    pub metadata: Metadata,
}

/// A single tool link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tool {
    pub name: String,
    pub url: String,
    pub icon: String,
    pub description: String,
}

/// A titled group of tools, one per content file.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCategory {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Sort position; fractional values sort between integers
    pub order: f64,
    pub layout: ToolLayout,

    /// Markdown body the tools were parsed from
    pub content: String,

    /// Tools in heading order
    pub tools: Vec<Tool>,

    /// Front matter of the source document
    pub metadata: Metadata,
}

/// Field labels recognized inside a tool section.
///
/// Matched literally as `- **<label>**:`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToolLabels {
    pub url: String,
    pub icon: String,
    pub description: String,
}

impl Default for ToolLabels {
    fn default() -> Self {
        Self {
            url: "URL".to_string(),
            icon: "图标".to_string(),
            description: "描述".to_string(),
        }
    }
}

/// Everything loaded for one build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteContent {
    /// Newest first
    pub posts: Vec<BlogPost>,

    /// By title
    pub projects: Vec<Project>,

    /// Completed first, then by title
    pub ideas: Vec<Idea>,

    /// By `order`
    pub tool_categories: Vec<ToolCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_checkbox() {
        assert_eq!(Status::from_checked(true), Status::Completed);
        assert_eq!(Status::from_checked(false), Status::Planned);
        assert!(Status::Completed.rank() < Status::Planned.rank());
        assert_eq!(Status::Planned.key(), "planned");
    }

    #[test]
    fn layout_defaults_to_list() {
        assert_eq!(ToolLayout::from_name(Some("grid")), ToolLayout::Grid);
        assert_eq!(ToolLayout::from_name(Some("list")), ToolLayout::List);
        assert_eq!(ToolLayout::from_name(Some("cards")), ToolLayout::List);
        assert_eq!(ToolLayout::from_name(None), ToolLayout::List);
    }
}
