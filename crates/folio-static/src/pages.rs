//! Page assembly.
//!
//! Every page is a pure function of the site configuration, the shells and
//! the loaded content: a page-specific fragment is built and then dropped
//! into a shell.

use std::path::PathBuf;

use folio_content::{
    render_markdown, BlogPost, Idea, SiteContent, Status, ToolCategory, ToolLayout,
};

use crate::config::SiteConfig;
use crate::fragments::{
    avatar, item_row, linked_post_card, nav_bar, page_header, post_card, section_heading,
    social_links, status_badge,
};
use crate::shell::{fill_shell, ShellKind, ShellSet, ShellValues};

const COMPLETED_ICON: &str = "✅";
const PLANNED_ICON: &str = "⭕";

/// A page to render.
#[derive(Debug, Clone, Copy)]
pub enum PageRequest<'a> {
    Home,
    Blog,
    Projects,
    Ideas,
    Tools,
    Post(&'a BlogPost),
}

impl PageRequest<'_> {
    /// Output path relative to the output directory.
    pub fn output_path(&self) -> PathBuf {
        match self {
            Self::Home => PathBuf::from("index.html"),
            Self::Post(post) => PathBuf::from("blog").join(format!("{}.html", post.slug)),
            other => PathBuf::from(format!("{}.html", other.nav_id())),
        }
    }

    /// Navigation entry highlighted on this page.
    pub fn nav_id(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Blog | Self::Post(_) => "blog",
            Self::Projects => "projects",
            Self::Ideas => "ideas",
            Self::Tools => "tools",
        }
    }

    fn shell(&self) -> ShellKind {
        match self {
            Self::Post(_) => ShellKind::Post,
            _ => ShellKind::Base,
        }
    }
}

/// Everything a page may draw from.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub config: &'a SiteConfig,
    pub shells: &'a ShellSet,
    pub content: &'a SiteContent,
}

/// Render a page to complete HTML.
pub fn render_page(request: &PageRequest<'_>, ctx: &PageContext<'_>) -> String {
    let config = ctx.config;
    let nav_id = request.nav_id();

    let (title, description, content) = match request {
        PageRequest::Home => (
            config.title.clone(),
            config.description.clone(),
            home_content(ctx),
        ),
        PageRequest::Blog => (
            config.page_title(nav_id),
            config.pages.blog.description.clone(),
            blog_content(ctx),
        ),
        PageRequest::Projects => (
            config.page_title(nav_id),
            config.pages.projects.page_description.clone(),
            projects_content(ctx),
        ),
        PageRequest::Ideas => (
            config.page_title(nav_id),
            config.pages.ideas.page_description.clone(),
            ideas_content(ctx),
        ),
        PageRequest::Tools => (
            config.page_title(nav_id),
            config.pages.tools.page_description.clone(),
            tools_content(ctx),
        ),
        PageRequest::Post(post) => (
            format!("{} - {}", post.title, config.title),
            post.excerpt.clone(),
            post_content(config, post),
        ),
    };

    fill_shell(
        ctx.shells.get(request.shell()),
        &ShellValues {
            title: &title,
            description: &description,
            content: &content,
        },
    )
}

fn home_content(ctx: &PageContext<'_>) -> String {
    let config = ctx.config;
    let home = &config.homepage;

    let tags: String = home
        .tags
        .iter()
        .map(|tag| {
            format!(r#"<p class="text-[#4e8697] text-base font-normal leading-normal text-center">{tag}</p>"#)
        })
        .collect();

    let posts: String = ctx
        .content
        .posts
        .iter()
        .take(home.latest_limit)
        .map(linked_post_card)
        .collect();

    format!(
        r#"
      <div class="flex p-4 @container">
        <div class="flex w-full flex-col gap-4 items-center">
          <div class="flex gap-4 flex-col items-center">
            {avatar}
            <div class="flex flex-col items-center justify-center">
              <p class="text-[#0e181b] text-[22px] font-bold leading-tight tracking-[-0.015em] text-center">{name}</p>
              {tags}
            </div>
          </div>
        </div>
      </div>
      <p class="text-[#0e181b] text-base font-normal leading-normal pb-3 pt-1 px-4 text-center">
        {signature}
      </p>
{social}
{nav}
{heading}
{posts}
"#,
        avatar = avatar(&config.avatar),
        name = home.name,
        signature = home.signature,
        social = social_links(&home.social),
        nav = nav_bar(config, "home"),
        heading = section_heading(&config.pages.home.latest_articles),
    )
}

fn blog_content(ctx: &PageContext<'_>) -> String {
    let labels = &ctx.config.pages.blog;

    let posts: String = ctx
        .content
        .posts
        .iter()
        .map(|post| post_card(post, &labels.read_more))
        .collect();

    format!(
        "{nav}{heading}{posts}\n",
        nav = nav_bar(ctx.config, "blog"),
        heading = section_heading(&labels.title),
    )
}

fn projects_content(ctx: &PageContext<'_>) -> String {
    let labels = &ctx.config.pages.projects;

    let rows: String = ctx
        .content
        .projects
        .iter()
        .map(|project| item_row(COMPLETED_ICON, &project.title, &project.description))
        .collect();

    format!(
        r#"{nav}{header}
      <div class="p-4">
        <div class="bg-white rounded-lg border border-gray-200">{rows}
        </div>
      </div>
"#,
        nav = nav_bar(ctx.config, "projects"),
        header = page_header(&labels.title, &labels.description),
    )
}

fn ideas_content(ctx: &PageContext<'_>) -> String {
    let labels = &ctx.config.pages.ideas;

    let groups: String = [Status::Completed, Status::Planned]
        .into_iter()
        .map(|status| {
            let ideas: Vec<&Idea> = ctx
                .content
                .ideas
                .iter()
                .filter(|idea| idea.status == status)
                .collect();
            idea_group(ctx.config, status, &ideas)
        })
        .collect();

    format!(
        "{nav}{header}\n{groups}\n",
        nav = nav_bar(ctx.config, "ideas"),
        header = page_header(&labels.title, &labels.description),
    )
}

/// One status group of the ideas page; empty groups render nothing.
fn idea_group(config: &SiteConfig, status: Status, ideas: &[&Idea]) -> String {
    if ideas.is_empty() {
        return String::new();
    }

    let rows: String = ideas
        .iter()
        .map(|idea| {
            let icon = if idea.completed {
                COMPLETED_ICON
            } else {
                PLANNED_ICON
            };
            item_row(icon, &idea.title, &idea.description)
        })
        .collect();

    format!(
        r#"
      <div class="p-4">
        <h2 class="text-[#111618] text-xl font-bold mb-4 flex items-center gap-2">
          {badge}
          <span>{count} {count_label}</span>
        </h2>
        <div class="bg-white rounded-lg border border-gray-200">{rows}
        </div>
      </div>"#,
        badge = status_badge(config, status),
        count = ideas.len(),
        count_label = config.pages.ideas.project_count,
    )
}

fn tools_content(ctx: &PageContext<'_>) -> String {
    let labels = &ctx.config.pages.tools;

    format!(
        r#"{nav}{header}
      <div class="p-4 space-y-6">
        {layout}
      </div>
"#,
        nav = nav_bar(ctx.config, "tools"),
        header = page_header(&labels.title, &labels.description),
        layout = tools_layout(&ctx.content.tool_categories),
    )
}

/// List-style categories share one two-column grid, placed first; each
/// grid-style category follows as its own block.
fn tools_layout(categories: &[ToolCategory]) -> String {
    let (grid, list): (Vec<&ToolCategory>, Vec<&ToolCategory>) = categories
        .iter()
        .partition(|category| category.layout == ToolLayout::Grid);

    let mut html = String::new();

    if !list.is_empty() {
        let cards: String = list
            .iter()
            .map(|category| tool_category_card(category, "space-y-3", "gap-3"))
            .collect();
        html.push_str(&format!(
            r#"<div class="grid grid-cols-1 md:grid-cols-2 gap-6">{cards}
        </div>"#
        ));
    }

    for category in grid {
        html.push_str(&tool_category_card(
            category,
            "grid grid-cols-2 md:grid-cols-4 gap-4",
            "gap-2",
        ));
    }

    html
}

fn tool_category_card(category: &ToolCategory, items_class: &str, item_gap: &str) -> String {
    let items: String = category
        .tools
        .iter()
        .map(|tool| {
            format!(
                r#"
              <a href="{url}" class="flex items-center {item_gap} text-[#4e8697] hover:text-[#30bde8] transition-colors">
                <span class="text-xl">{icon}</span>
                <span>{name}</span>
              </a>"#,
                url = tool.url,
                icon = tool.icon,
                name = tool.name,
            )
        })
        .collect();

    format!(
        r#"
          <div class="border border-[#d0e1e7] rounded-lg p-6">
            <h3 class="text-[#111618] text-lg font-bold mb-4">{title}</h3>
            <p class="text-[#637f88] text-sm mb-4">{description}</p>
            <div class="{items_class}">{items}
            </div>
          </div>"#,
        title = category.title,
        description = category.description,
    )
}

fn post_content(config: &SiteConfig, post: &BlogPost) -> String {
    let blog_name = config
        .nav_entry("blog")
        .map(|entry| entry.name.as_str())
        .unwrap_or_default();

    format!(
        r#"{nav}
        <div class="flex flex-wrap gap-2 p-4">
          <a class="text-[#637f88] text-base font-medium leading-normal" href="../blog.html">{blog_name}</a>
          <span class="text-[#637f88] text-base font-medium leading-normal">/</span>
          <span class="text-[#111618] text-base font-medium leading-normal">{title}</span>
        </div>
        <h2 class="text-[#111618] tracking-light text-[28px] font-bold leading-tight px-4 text-left pb-3 pt-5">{title}</h2>
        <p class="text-[#637f88] text-sm font-normal leading-normal pb-3 pt-1 px-4">{published} {date}</p>
        <div class="px-4 prose prose-lg max-w-none">
          {body}
        </div>
"#,
        nav = nav_bar(config, "blog"),
        title = post.title,
        published = config.pages.post.published,
        date = post.date,
        body = render_markdown(&post.content, &post.slug),
    )
}
