//! Page shells and placeholder substitution.
//!
//! A shell is plain HTML with three placeholders. Filling a shell replaces
//! the first occurrence of each placeholder in one pass; text injected for
//! one placeholder is never scanned for the others.

use std::fs;
use std::path::Path;

use crate::builder::BuildError;

pub const TITLE_PLACEHOLDER: &str = "{{TITLE}}";
pub const DESCRIPTION_PLACEHOLDER: &str = "{{DESCRIPTION}}";
pub const CONTENT_PLACEHOLDER: &str = "{{CONTENT}}";

/// Values substituted into a shell.
#[derive(Debug, Clone, Copy)]
pub struct ShellValues<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub content: &'a str,
}

/// Fill a shell's placeholders.
///
/// Only the shell's own text is searched, so placeholder-like text inside
/// the values comes out verbatim. A placeholder missing from the shell is
/// skipped; repeats after the first occurrence are left as they are.
pub fn fill_shell(shell: &str, values: &ShellValues<'_>) -> String {
    let mut slots: Vec<(usize, &str, &str)> = [
        (TITLE_PLACEHOLDER, values.title),
        (DESCRIPTION_PLACEHOLDER, values.description),
        (CONTENT_PLACEHOLDER, values.content),
    ]
    .into_iter()
    .filter_map(|(placeholder, value)| {
        shell
            .find(placeholder)
            .map(|pos| (pos, placeholder, value))
    })
    .collect();

    slots.sort_by_key(|(pos, _, _)| *pos);

    let capacity = shell.len() + slots.iter().map(|(_, _, v)| v.len()).sum::<usize>();
    let mut output = String::with_capacity(capacity);
    let mut cursor = 0;

    for (pos, placeholder, value) in slots {
        output.push_str(&shell[cursor..pos]);
        output.push_str(value);
        cursor = pos + placeholder.len();
    }
    output.push_str(&shell[cursor..]);

    output
}

/// Which shell a page is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    /// Listing and home pages
    Base,
    /// Individual blog posts
    Post,
}

impl ShellKind {
    /// File name inside the templates directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Base => "base.html",
            Self::Post => "post.html",
        }
    }

    fn builtin(&self) -> &'static str {
        match self {
            Self::Base => BASE_SHELL,
            Self::Post => POST_SHELL,
        }
    }
}

/// The shells used for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSet {
    pub base: String,
    pub post: String,
}

impl ShellSet {
    /// Load shells from a templates directory.
    ///
    /// A shell file that does not exist is replaced by the built-in one; a
    /// file that exists but cannot be read is an error.
    pub fn load(templates_dir: &Path) -> Result<Self, BuildError> {
        Ok(Self {
            base: load_shell(templates_dir, ShellKind::Base)?,
            post: load_shell(templates_dir, ShellKind::Post)?,
        })
    }

    pub fn get(&self, kind: ShellKind) -> &str {
        match kind {
            ShellKind::Base => &self.base,
            ShellKind::Post => &self.post,
        }
    }
}

impl Default for ShellSet {
    fn default() -> Self {
        Self {
            base: BASE_SHELL.to_string(),
            post: POST_SHELL.to_string(),
        }
    }
}

fn load_shell(templates_dir: &Path, kind: ShellKind) -> Result<String, BuildError> {
    let path = templates_dir.join(kind.file_name());

    if !path.exists() {
        tracing::debug!("No {}, using built-in shell", path.display());
        return Ok(kind.builtin().to_string());
    }

    fs::read_to_string(&path)
        .map_err(|e| BuildError::ReadError(format!("{}: {}", path.display(), e)))
}

pub const BASE_SHELL: &str = r##"<!DOCTYPE html>
<html lang="zh-CN">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{TITLE}}</title>
  <meta name="description" content="{{DESCRIPTION}}">
  <script src="https://cdn.tailwindcss.com?plugins=forms,container-queries"></script>
</head>
<body class="bg-white">
  <div class="relative flex size-full min-h-screen flex-col bg-[#f8fbfc] overflow-x-hidden">
    <div class="layout-container flex h-full grow flex-col">
      <div class="px-4 md:px-40 flex flex-1 justify-center py-5">
        <div class="layout-content-container flex flex-col max-w-[960px] flex-1">
{{CONTENT}}
        </div>
      </div>
    </div>
  </div>
</body>
</html>
"##;

pub const POST_SHELL: &str = r##"<!DOCTYPE html>
<html lang="zh-CN">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{TITLE}}</title>
  <meta name="description" content="{{DESCRIPTION}}">
  <script src="https://cdn.tailwindcss.com?plugins=forms,typography,container-queries"></script>
</head>
<body class="bg-white">
  <div class="relative flex size-full min-h-screen flex-col bg-white overflow-x-hidden">
    <div class="layout-container flex h-full grow flex-col">
      <div class="px-4 md:px-40 flex flex-1 justify-center py-5">
        <article class="layout-content-container flex flex-col max-w-[960px] flex-1">
{{CONTENT}}
        </article>
      </div>
    </div>
  </div>
</body>
</html>
"##;
