use std::fmt;

use super::items::FeedItem;

pub const COMMITS_ID: &str = "gh-commits";
pub const ISSUES_ID: &str = "gh-issues";
pub const PULLS_ID: &str = "gh-pulls";

/// A `<ul>` the renderer appends `<li>` elements to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedList {
    id: &'static str,
    items: Vec<String>,
}

impl FeedList {
    pub fn new(id: &'static str) -> Self {
        Self { id, items: Vec::new() }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn append(&mut self, item: &FeedItem) {
        self.items.push(render_item(item));
    }
}

impl fmt::Display for FeedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<ul id=\"{}\">", self.id)?;
        for item in &self.items {
            writeln!(f, "  {item}")?;
        }
        write!(f, "</ul>")
    }
}

/// The three optional feed containers of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedPage {
    pub commits: Option<FeedList>,
    pub issues: Option<FeedList>,
    pub pulls: Option<FeedList>,
}

impl FeedPage {
    pub fn with_all_lists() -> Self {
        Self {
            commits: Some(FeedList::new(COMMITS_ID)),
            issues: Some(FeedList::new(ISSUES_ID)),
            pulls: Some(FeedList::new(PULLS_ID)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_none() && self.issues.is_none() && self.pulls.is_none()
    }

    pub fn lists(&self) -> impl Iterator<Item = &FeedList> {
        [&self.commits, &self.issues, &self.pulls]
            .into_iter()
            .flatten()
    }
}

/// Appends to `list` when the container exists.
pub fn append_all(list: Option<&mut FeedList>, items: &[FeedItem]) {
    if let Some(list) = list {
        items.iter().for_each(|item| list.append(item));
    }
}

pub fn render_item(item: &FeedItem) -> String {
    match item {
        FeedItem::Commit { sha, message, html_url } => format!(
            "<li>{} <code>#{}</code></li>",
            link(html_url, message),
            escape_html(sha)
        ),
        FeedItem::Issue { number, title, html_url } | FeedItem::Pull { number, title, html_url } => {
            format!("<li>{}</li>", link(html_url, &format!("#{number} {title}")))
        }
    }
}

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn link(href: &str, text: &str) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape_html(href),
        escape_html(text)
    )
}
