//! Site configuration.
//!
//! Every label, link and ordering used when assembling pages comes from a
//! [`SiteConfig`]. It is built once per run and only ever borrowed.

use folio_content::ToolLabels;
use serde::Deserialize;

/// Labels and links for the whole site.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, used in every page title
    pub title: String,

    /// Home page meta description
    pub description: String,

    pub homepage: HomepageConfig,

    /// Navigation bar entries, in display order
    pub navigation: Vec<NavEntry>,

    pub pages: PagesConfig,
    pub status: StatusLabels,
    pub avatar: AvatarConfig,

    /// Field labels inside tool sections
    pub tool_labels: ToolLabels,
}

/// Identity block shown on the home page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HomepageConfig {
    pub name: String,
    pub signature: String,
    pub tags: Vec<String>,
    pub social: Vec<SocialLink>,

    /// Number of recent posts listed on the home page
    pub latest_limit: usize,
}

/// A social network link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub url: String,
    #[serde(default)]
    pub icon: String,
    pub label: String,
}

/// A navigation bar entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavEntry {
    /// Display name
    pub name: String,
    /// Link target
    pub url: String,
    /// Page identity this entry is active for
    pub id: String,
}

/// Per-page headings and descriptions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    pub home: HomePageLabels,
    pub blog: BlogPageLabels,
    pub projects: ListingPageLabels,
    pub ideas: IdeasPageLabels,
    pub tools: ListingPageLabels,
    pub post: PostPageLabels,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HomePageLabels {
    pub latest_articles: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlogPageLabels {
    pub title: String,
    pub description: String,
    pub read_more: String,
}

/// Heading, intro text and meta description of a listing page.
///
/// Keys left out of a partially written table are empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListingPageLabels {
    pub title: String,
    pub description: String,
    pub page_description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IdeasPageLabels {
    pub title: String,
    pub description: String,
    pub page_description: String,

    /// Suffix after the item count of a status group
    pub project_count: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PostPageLabels {
    /// Printed before the publish date
    pub published: String,
}

/// Display names of item statuses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatusLabels {
    pub completed: String,
    pub planned: String,
}

/// Home page avatar: a local image, or a gradient disc with an initial.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    pub local_image: Option<String>,
    pub gradient_colors: String,
    pub initial: String,
}

impl SiteConfig {
    /// Navigation entry for a page identity.
    pub fn nav_entry(&self, id: &str) -> Option<&NavEntry> {
        self.navigation.iter().find(|entry| entry.id == id)
    }

    /// `<nav name> - <site title>`, or just the site title when the page has
    /// no navigation entry.
    pub fn page_title(&self, nav_id: &str) -> String {
        match self.nav_entry(nav_id) {
            Some(entry) => format!("{} - {}", entry.name, self.title),
            None => self.title.clone(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "SkyBluues".to_string(),
            description: "Personal tech blog and project showcase website, sharing backend development experience, technical articles and open source projects".to_string(),
            homepage: HomepageConfig::default(),
            navigation: vec![
                nav("首页", "index.html", "home"),
                nav("博客", "blog.html", "blog"),
                nav("项目", "projects.html", "projects"),
                nav("想法", "ideas.html", "ideas"),
                nav("工具", "tools.html", "tools"),
            ],
            pages: PagesConfig::default(),
            status: StatusLabels::default(),
            avatar: AvatarConfig::default(),
            tool_labels: ToolLabels::default(),
        }
    }
}

fn nav(name: &str, url: &str, id: &str) -> NavEntry {
    NavEntry {
        name: name.to_string(),
        url: url.to_string(),
        id: id.to_string(),
    }
}

impl Default for HomepageConfig {
    fn default() -> Self {
        Self {
            name: "SkyBluues".to_string(),
            signature: "很多事情，越做越简单，越想越困难，越拖越想放弃".to_string(),
            tags: vec![
                "Programmer".to_string(),
                "Independent Developer".to_string(),
                "Guitar Enthusiast".to_string(),
            ],
            social: vec![
                SocialLink {
                    url: "https://github.com/skybluues".to_string(),
                    icon: "📦".to_string(),
                    label: "GitHub".to_string(),
                },
                SocialLink {
                    url: "https://twitter.com/skybluues".to_string(),
                    icon: "🐦".to_string(),
                    label: "Twitter".to_string(),
                },
                SocialLink {
                    url: "mailto:skybluuues@gmail.com".to_string(),
                    icon: "📧".to_string(),
                    label: "Email".to_string(),
                },
            ],
            latest_limit: 3,
        }
    }
}

impl Default for HomePageLabels {
    fn default() -> Self {
        Self {
            latest_articles: "最新文章".to_string(),
        }
    }
}

impl Default for BlogPageLabels {
    fn default() -> Self {
        Self {
            title: "博客文章".to_string(),
            description: "技术博客文章".to_string(),
            read_more: "阅读更多".to_string(),
        }
    }
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            home: HomePageLabels::default(),
            blog: BlogPageLabels::default(),
            projects: ListingPageLabels {
                title: "项目展示".to_string(),
                description: "我的个人项目集合。".to_string(),
                page_description: "个人项目展示".to_string(),
            },
            ideas: IdeasPageLabels::default(),
            tools: ListingPageLabels {
                title: "效率工具".to_string(),
                description: "日常使用的高效开发工具和资源链接，帮助提高工作效率。".to_string(),
                page_description: "效率工具和资源链接".to_string(),
            },
            post: PostPageLabels::default(),
        }
    }
}

impl Default for IdeasPageLabels {
    fn default() -> Self {
        Self {
            title: "想法与计划".to_string(),
            description: "待开发的想法和计划，记录灵感和项目构思。".to_string(),
            page_description: "项目想法和计划".to_string(),
            project_count: "个项目".to_string(),
        }
    }
}

impl Default for PostPageLabels {
    fn default() -> Self {
        Self {
            published: "发布于".to_string(),
        }
    }
}

impl Default for StatusLabels {
    fn default() -> Self {
        Self {
            completed: "已完成".to_string(),
            planned: "计划中".to_string(),
        }
    }
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            local_image: Some("/images/avatar.jpg".to_string()),
            gradient_colors: "from-blue-400 to-purple-600".to_string(),
            initial: "S".to_string(),
        }
    }
}
