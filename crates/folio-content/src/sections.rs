//! Section-list parsers.
//!
//! Each parser pulls structured items out of a markdown body using fixed
//! line patterns. Lines that do not match are skipped, never reported.

use std::sync::LazyLock;

use regex::Regex;

use crate::frontmatter::Metadata;
use crate::types::{Idea, Project, Status, Tool, ToolLabels};

/// `- [x] **Title** - description` or `- [ ] **Title** - description`
static IDEA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^- \[([ x])\] \*\*([^*]+)\*\* - (.+)$").expect("Invalid idea regex")
});

/// Only the checked form: `- [x] **Title** - description`
static PROJECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^- \[x\] \*\*([^*]+)\*\* - (.+)$").expect("Invalid project regex")
});

/// Heading that starts a tool section.
const TOOL_HEADING: &str = "## ";

/// Parse one idea line.
///
/// The line is trimmed first. The description takes everything after the
/// first ` - ` that follows the bold title.
pub fn parse_idea_line(line: &str) -> Option<Idea> {
    let caps = IDEA_RE.captures(line.trim())?;
    let completed = &caps[1] == "x";

    Some(Idea {
        title: caps[2].trim().to_string(),
        description: caps[3].trim().to_string(),
        completed,
        status: Status::from_checked(completed),
        source_file: String::new(),
        metadata: Metadata::new(),
    })
}

/// Parse every idea line in a body, in document order.
pub fn parse_ideas(body: &str) -> Vec<Idea> {
    body.lines().filter_map(parse_idea_line).collect()
}

/// Parse one project line. Unchecked items are not projects.
pub fn parse_project_line(line: &str) -> Option<Project> {
    let caps = PROJECT_RE.captures(line.trim())?;

    Some(Project {
        title: caps[1].trim().to_string(),
        description: caps[2].trim().to_string(),
        status: Status::Completed,
        source_file: String::new(),
        metadata: Metadata::new(),
    })
}

/// Parse every project line in a body, in document order.
pub fn parse_projects(body: &str) -> Vec<Project> {
    body.lines().filter_map(parse_project_line).collect()
}

/// Parse tool sections.
///
/// A section starts at each line beginning with `## `; the rest of that line
/// is the tool name. Text before the first heading is ignored, as are
/// sections with an empty name or without a URL field.
pub fn parse_tools(body: &str, labels: &ToolLabels) -> Vec<Tool> {
    let prefixes = FieldPrefixes::new(labels);
    let mut tools = Vec::new();
    let mut current: Option<Tool> = None;

    for line in body.lines() {
        if let Some(name) = line.strip_prefix(TOOL_HEADING) {
            tools.extend(current.take().filter(|t| !t.url.is_empty()));

            let name = name.trim();
            if !name.is_empty() {
                current = Some(Tool {
                    name: name.to_string(),
                    ..Default::default()
                });
            }
            continue;
        }

        if let Some(tool) = current.as_mut() {
            prefixes.apply(line.trim(), tool);
        }
    }

    tools.extend(current.filter(|t| !t.url.is_empty()));
    tools
}

/// The literal `- **label**:` prefixes for one label set.
struct FieldPrefixes {
    url: String,
    icon: String,
    description: String,
}

impl FieldPrefixes {
    fn new(labels: &ToolLabels) -> Self {
        Self {
            url: format!("- **{}**:", labels.url),
            icon: format!("- **{}**:", labels.icon),
            description: format!("- **{}**:", labels.description),
        }
    }

    fn apply(&self, line: &str, tool: &mut Tool) {
        if let Some(value) = line.strip_prefix(self.url.as_str()) {
            tool.url = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix(self.icon.as_str()) {
            tool.icon = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix(self.description.as_str()) {
            tool.description = value.trim().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_completed_idea() {
        let idea = parse_idea_line("- [x] **Blog engine** - Write my own SSG").unwrap();

        assert_eq!(idea.title, "Blog engine");
        assert_eq!(idea.description, "Write my own SSG");
        assert!(idea.completed);
        assert_eq!(idea.status, Status::Completed);
    }

    #[test]
    fn parses_planned_idea() {
        let idea = parse_idea_line("  - [ ] **Guitar tuner** - Pitch detection app  ").unwrap();

        assert_eq!(idea.title, "Guitar tuner");
        assert_eq!(idea.description, "Pitch detection app");
        assert!(!idea.completed);
        assert_eq!(idea.status, Status::Planned);
    }

    #[test]
    fn skips_malformed_idea_lines() {
        let lines = [
            "- [x] Blog engine - missing bold",
            "- [x] **Blog engine** missing dash",
            "- [X] **Upper** - uppercase marker",
            "* [x] **Star** - wrong bullet",
            "- [x] **Empty** - ",
            "## Heading",
            "",
        ];

        for line in lines {
            assert!(parse_idea_line(line).is_none(), "unexpected match: {line:?}");
        }
    }

    #[test]
    fn title_with_dash_splits_at_first_separator() {
        // Known limitation: a " - " inside the description is kept, but the
        // title can never contain `*`, so the split is always after the bold.
        let idea = parse_idea_line("- [ ] **CLI** - fast - and small").unwrap();

        assert_eq!(idea.title, "CLI");
        assert_eq!(idea.description, "fast - and small");

        // A dash inside the bold title does not move the boundary.
        let idea = parse_idea_line("- [ ] **A - B** - tail").unwrap();
        assert_eq!(idea.title, "A - B");
        assert_eq!(idea.description, "tail");
    }

    #[test]
    fn collects_ideas_in_document_order() {
        let body = "# Ideas\n\n- [ ] **Zeta** - last\nnoise\n- [x] **Alpha** - first\n";

        let ideas = parse_ideas(body);

        let titles: Vec<_> = ideas.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["Zeta", "Alpha"]);
    }

    #[test]
    fn projects_require_checked_marker() {
        let body = "- [x] **Folio** - Static site generator\n- [ ] **Tuner** - Not yet\n";

        let projects = parse_projects(body);

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Folio");
        assert_eq!(projects[0].description, "Static site generator");
        assert_eq!(projects[0].status, Status::Completed);
        assert!(parse_project_line("- [ ] **Tuner** - Not yet").is_none());
    }

    #[test]
    fn parses_tool_sections() {
        let body = r#"Intro text is ignored.

## GitHub
- **URL**: https://github.com
- **图标**: 🐙
- **描述**: Code hosting

## No Link
- **图标**: ❌

## Regex101
- **URL**:   https://regex101.com
"#;

        let tools = parse_tools(body, &ToolLabels::default());

        assert_eq!(
            tools,
            vec![
                Tool {
                    name: "GitHub".to_string(),
                    url: "https://github.com".to_string(),
                    icon: "🐙".to_string(),
                    description: "Code hosting".to_string(),
                },
                Tool {
                    name: "Regex101".to_string(),
                    url: "https://regex101.com".to_string(),
                    icon: String::new(),
                    description: String::new(),
                },
            ]
        );
    }

    #[test]
    fn tool_labels_are_configurable() {
        let labels = ToolLabels {
            url: "Link".to_string(),
            icon: "Icon".to_string(),
            description: "About".to_string(),
        };
        let body = "## Crates\n- **Link**: https://crates.io\n- **About**: Registry\n";

        let tools = parse_tools(body, &labels);

        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].url, "https://crates.io");
        assert_eq!(tools[0].description, "Registry");
        assert!(parse_tools(body, &ToolLabels::default()).is_empty());
    }

    #[test]
    fn deeper_headings_do_not_start_sections() {
        let body = "## Editor\n### Notes\n- **URL**: https://zed.dev\n";

        let tools = parse_tools(body, &ToolLabels::default());

        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "Editor");
    }

    #[test]
    fn skips_sections_with_empty_name() {
        let body = "## \n- **URL**: https://nameless.example\n";

        assert!(parse_tools(body, &ToolLabels::default()).is_empty());
    }
}
