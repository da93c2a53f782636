//! Markdown to HTML rendering for post bodies.

use std::borrow::Cow;
use std::sync::LazyLock;

use pulldown_cmark::{html, Event, Options, Parser};
use regex::{Captures, Regex};

use crate::defaults::{BLOG_IMAGES_ROOT, POST_IMAGES_DIR};

/// `![alt](./images/<path>)`
static LOCAL_IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\]]*)\]\(\./images/([^)]+)\)").expect("Invalid local image regex")
});

/// Point `./images/...` references at the post's published image directory.
///
/// Runs on raw markdown so the converter only ever sees final paths. Any
/// other image path is left alone, as is everything when `slug` is empty.
pub fn rewrite_image_paths<'a>(markdown: &'a str, slug: &str) -> Cow<'a, str> {
    if slug.is_empty() {
        return Cow::Borrowed(markdown);
    }

    LOCAL_IMAGE_RE.replace_all(markdown, |caps: &Captures| {
        format!(
            "![{}]({}/{}/{}/{})",
            &caps[1], BLOG_IMAGES_ROOT, slug, POST_IMAGES_DIR, &caps[2]
        )
    })
}

/// Render a post body to HTML.
///
/// GFM tables, strikethrough, task lists and footnotes are enabled, and
/// every soft line break becomes `<br />`.
pub fn render_markdown(markdown: &str, slug: &str) -> String {
    let source = rewrite_image_paths(markdown, slug);

    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(&source, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}
