//! Reusable HTML fragments shared by several pages.

use folio_content::{BlogPost, Status};

use crate::config::{AvatarConfig, NavEntry, SiteConfig, SocialLink};

const NAV_ACTIVE: &str = "border-b-[#30bde8] text-[#0e181b]";
const NAV_INACTIVE: &str = "border-b-transparent text-[#4e8697]";

/// Navigation links, with the entry whose id is `active_id` highlighted.
pub fn nav_links(entries: &[NavEntry], active_id: &str) -> String {
    entries
        .iter()
        .map(|entry| {
            let state = if entry.id == active_id {
                NAV_ACTIVE
            } else {
                NAV_INACTIVE
            };
            format!(
                r#"<a class="flex flex-col items-center justify-center border-b-[3px] {state} pb-[13px] pt-4" href="{url}">
        <p class="text-sm font-bold leading-normal tracking-[0.015em]">{name}</p>
      </a>"#,
                url = entry.url,
                name = entry.name,
            )
        })
        .collect()
}

/// The navigation bar wrapping [`nav_links`].
pub fn nav_bar(config: &SiteConfig, active_id: &str) -> String {
    format!(
        r#"
      <div class="pb-3">
        <div class="flex border-b border-[#d0e1e7] px-4 gap-8">
          {}
        </div>
      </div>"#,
        nav_links(&config.navigation, active_id)
    )
}

/// Round avatar: the local image when configured, otherwise a gradient
/// disc showing the initial.
pub fn avatar(avatar: &AvatarConfig) -> String {
    match avatar.local_image.as_deref().filter(|path| !path.is_empty()) {
        Some(image) => format!(
            r#"<div class="bg-center bg-no-repeat aspect-square bg-cover rounded-full min-h-32 w-32" style="background-image: url('{image}');"></div>"#
        ),
        None => format!(
            r#"<div class="bg-center bg-no-repeat aspect-square bg-cover rounded-full min-h-32 w-32 bg-gradient-to-br {colors} flex items-center justify-center">
      <span class="text-white text-4xl font-bold">{initial}</span>
    </div>"#,
            colors = avatar.gradient_colors,
            initial = avatar.initial,
        ),
    }
}

/// Colored pill naming a status.
pub fn status_badge(config: &SiteConfig, status: Status) -> String {
    let (class, text) = match status {
        Status::Completed => ("bg-green-100 text-green-800", &config.status.completed),
        Status::Planned => ("bg-gray-100 text-gray-800", &config.status.planned),
    };

    format!(r#"<span class="{class} text-xs px-2 py-1 rounded-full font-medium">{text}</span>"#)
}

/// Row of social network links.
pub fn social_links(links: &[SocialLink]) -> String {
    let items: String = links
        .iter()
        .map(|link| {
            format!(
                r#"
          <a href="{url}" class="flex items-center gap-2 text-[#4e8697] hover:text-[#30bde8] transition-colors">
            <span class="text-xl">{icon}</span>
            <span class="text-sm font-medium">{label}</span>
          </a>"#,
                url = link.url,
                icon = link.icon,
                label = link.label,
            )
        })
        .collect();

    format!(
        r#"
      <div class="flex justify-center gap-6 px-4 py-4">{items}
      </div>"#
    )
}

/// Heading with intro text at the top of a listing page.
pub fn page_header(title: &str, description: &str) -> String {
    format!(
        r#"
      <div class="flex flex-wrap justify-between gap-3 p-4">
        <div class="flex min-w-72 flex-col gap-3">
          <p class="text-[#111618] tracking-light text-[32px] font-bold leading-tight">{title}</p>
          <p class="text-[#637f88] text-sm font-normal leading-normal">
            {description}
          </p>
        </div>
      </div>"#
    )
}

/// Section heading used on the home and blog pages.
pub fn section_heading(text: &str) -> String {
    format!(
        r#"
      <h2 class="text-[#0e181b] text-[22px] font-bold leading-tight tracking-[-0.015em] px-4 pb-3 pt-5">{text}</h2>"#
    )
}

/// Cover image panel of a post card.
fn cover(post: &BlogPost) -> String {
    format!(
        r#"<div class="w-full aspect-video rounded-lg flex-1 bg-cover bg-center" style="background-image: url('{}');">
                <div class="w-full h-full bg-black bg-opacity-20 rounded-lg flex items-center justify-center">
                  <span class="text-white text-2xl font-bold">📝</span>
                </div>
              </div>"#,
        post.cover_image
    )
}

fn post_summary(post: &BlogPost) -> String {
    format!(
        r#"<p class="text-[#4e8697] text-sm font-normal leading-normal">{date}</p>
                <p class="text-[#0e181b] text-base font-bold leading-tight">{title}</p>
                <p class="text-[#4e8697] text-sm font-normal leading-normal">{excerpt}</p>"#,
        date = post.date,
        title = post.title,
        excerpt = post.excerpt,
    )
}

/// Home page card: the whole card links to the post.
pub fn linked_post_card(post: &BlogPost) -> String {
    format!(
        r#"
        <div class="p-4">
          <a href="/blog/{slug}.html" class="block hover:bg-gray-50 transition-colors rounded-lg">
            <div class="flex items-stretch justify-between gap-4 rounded-lg">
              <div class="flex flex-col gap-1 flex-[2_2_0px]">
                {summary}
              </div>
              {cover}
            </div>
          </a>
        </div>"#,
        slug = post.slug,
        summary = post_summary(post),
        cover = cover(post),
    )
}

/// Blog index card with a "read more" link.
pub fn post_card(post: &BlogPost, read_more: &str) -> String {
    format!(
        r#"
        <div class="p-4">
          <div class="flex items-stretch justify-between gap-4 rounded-lg">
            <div class="flex flex-col gap-1 flex-[2_2_0px]">
              {summary}
              <a href="blog/{slug}.html" class="text-[#30bde8] text-sm font-medium hover:underline">{read_more}</a>
            </div>
            {cover}
          </div>
        </div>"#,
        summary = post_summary(post),
        slug = post.slug,
        cover = cover(post),
    )
}

/// Checklist row used by the projects and ideas pages.
pub fn item_row(icon: &str, title: &str, description: &str) -> String {
    format!(
        r#"
        <div class="flex items-center gap-4 py-3 border-b border-gray-100 last:border-b-0">
          <span class="text-lg">{icon}</span>
          <div class="flex-1">
            <h3 class="text-[#111618] text-base font-medium leading-normal">{title}</h3>
            <p class="text-[#637f88] text-sm font-normal leading-normal mt-1">{description}</p>
          </div>
        </div>"#
    )
}
