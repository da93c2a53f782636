//! Page assembly and static site builder for folio.
//!
//! Turns loaded site content into the finished HTML pages of a personal
//! site: home, blog index, projects, ideas, tools and one page per post.

pub mod assets;
pub mod builder;
pub mod config;
pub mod fragments;
pub mod pages;
pub mod shell;

pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
pub use config::SiteConfig;
pub use pages::{render_page, PageContext, PageRequest};
pub use shell::{fill_shell, ShellKind, ShellSet, ShellValues};
