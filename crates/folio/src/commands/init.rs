//! Scaffold a new site.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use folio_static::shell::{BASE_SHELL, POST_SHELL};

/// Files written by `init`, relative to the site root.
const SCAFFOLD: &[(&str, &str)] = &[
    ("content/blog/hello-world.md", DEFAULT_POST),
    ("content/blog/first-trip/index.md", DEFAULT_DIRECTORY_POST),
    ("content/projects/projects.md", DEFAULT_PROJECTS),
    ("content/ideas/ideas.md", DEFAULT_IDEAS),
    ("content/tools/development.md", DEFAULT_TOOLS),
    ("templates/base.html", BASE_SHELL),
    ("templates/post.html", POST_SHELL),
];

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing folio...");

    let root = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let created = scaffold(root, config_path, yes)?;

    tracing::info!("Initialization complete! Created {} files.", created);
    tracing::info!("Run 'folio dev' to start the development server.");

    Ok(())
}

/// Write the config file and sample site under `root`.
///
/// Existing files are kept unless `overwrite` is set. Returns the number of
/// files written.
pub fn scaffold(root: &Path, config_path: &Path, overwrite: bool) -> Result<usize> {
    let mut created = 0;

    if write_file(config_path, DEFAULT_CONFIG, overwrite)? {
        created += 1;
    }

    for (relative, contents) in SCAFFOLD {
        if write_file(&root.join(relative), contents, overwrite)? {
            created += 1;
        }
    }

    let public = root.join("public");
    fs::create_dir_all(&public)
        .with_context(|| format!("Failed to create {}", public.display()))?;

    Ok(created)
}

fn write_file(path: &Path, contents: &str, overwrite: bool) -> Result<bool> {
    if path.exists() && !overwrite {
        tracing::warn!("{} already exists. Use --yes to overwrite.", path.display());
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());

    Ok(true)
}

const DEFAULT_CONFIG: &str = r#"# Folio Configuration

title = "My Site"
description = "Personal blog, projects and ideas"

[paths]
# Markdown sources: blog/, projects/, ideas/, tools/
content = "content"

# base.html and post.html
templates = "templates"

# Copied verbatim to the output root
public = "public"

# Output directory for built site
output = "dist"

[homepage]
name = "My Name"
signature = "Writing things down."
tags = ["Programmer"]
latest_limit = 3

[[homepage.social]]
url = "https://github.com/"
icon = "📦"
label = "GitHub"

[avatar]
local_image = ""
gradient_colors = "from-blue-400 to-purple-600"
initial = "M"

[[navigation]]
name = "Home"
url = "index.html"
id = "home"

[[navigation]]
name = "Blog"
url = "blog.html"
id = "blog"

[[navigation]]
name = "Projects"
url = "projects.html"
id = "projects"

[[navigation]]
name = "Ideas"
url = "ideas.html"
id = "ideas"

[[navigation]]
name = "Tools"
url = "tools.html"
id = "tools"

[pages.home]
latest_articles = "Latest posts"

[pages.blog]
title = "Blog"
description = "Articles and notes"
read_more = "Read more"

[pages.projects]
title = "Projects"
description = "Things I have built."
page_description = "Project showcase"

[pages.ideas]
title = "Ideas"
description = "Things I might build."
page_description = "Ideas and plans"
project_count = "items"

[pages.tools]
title = "Tools"
description = "Tools I use every day."
page_description = "Tools and links"

[pages.post]
published = "Published"

[status]
completed = "Done"
planned = "Planned"

[tool_labels]
url = "URL"
icon = "Icon"
description = "Description"
"#;

const DEFAULT_POST: &str = r#"---
title: Hello World
date: 2024-01-01
---
This is the first post. Edit `content/blog/hello-world.md` or add new
markdown files next to it.

## Markdown

Tables, footnotes[^1], ~~strikethrough~~ and task lists work:

- [x] write a post
- [ ] publish it

[^1]: Like this one.
"#;

const DEFAULT_DIRECTORY_POST: &str = r#"---
title: First Trip
date: 2024-02-01
---
A post stored as a directory. Put pictures in `images/` next to this file
and reference them as `![caption](./images/picture.png)`.
"#;

const DEFAULT_PROJECTS: &str = r#"---
title: Projects
---
- [x] **Folio** - The generator that built this site
- [x] **Dotfiles** - Editor and shell configuration
"#;

const DEFAULT_IDEAS: &str = r#"---
title: Ideas
---
- [x] **Reading list** - Track books I want to read
- [ ] **Guitar tuner** - A small tuner for the terminal
"#;

const DEFAULT_TOOLS: &str = r#"---
title: Development
description: Everyday development tools
order: 1
layout: grid
---
## Git
- **URL**: https://git-scm.com
- **Icon**: 🔧
- **Description**: Distributed version control

## Rust
- **URL**: https://www.rust-lang.org
- **Icon**: 🦀
- **Description**: Systems programming language
"#;
