//! Conversion of proxy JSON into renderable list entries.

use serde::Deserialize;
use serde_json::Value;

pub const SHORT_SHA_LEN: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedItem {
    Commit {
        sha: String,
        message: String,
        html_url: String,
    },
    Issue {
        number: u64,
        title: String,
        html_url: String,
    },
    Pull {
        number: u64,
        title: String,
        html_url: String,
    },
}

#[derive(Deserialize)]
struct CommitEntry {
    #[serde(default)]
    sha: String,
    html_url: Option<String>,
    commit: Option<CommitDetail>,
}

#[derive(Deserialize)]
struct CommitDetail {
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
struct NumberedEntry {
    number: u64,
    #[serde(default)]
    title: String,
    html_url: String,
    #[serde(default)]
    pull_request: Option<Value>,
}

/// The elements of a top-level JSON array; anything else is treated as empty.
pub fn entries(body: Value) -> Vec<Value> {
    match body {
        Value::Array(entries) => entries,
        _ => Vec::new(),
    }
}

pub fn commits(entries: Vec<Value>, repo: &str) -> Vec<FeedItem> {
    entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<CommitEntry>(entry).ok())
        .map(|entry| {
            let html_url = entry
                .html_url
                .unwrap_or_else(|| format!("https://github.com/{repo}/commit/{}", entry.sha));
            let message = entry
                .commit
                .and_then(|commit| commit.message.lines().next().map(str::to_string))
                .unwrap_or_default();

            FeedItem::Commit {
                sha: entry.sha.chars().take(SHORT_SHA_LEN).collect(),
                message,
                html_url,
            }
        })
        .collect()
}

/// GitHub lists pull requests among issues; those carry a `pull_request`
/// object and are dropped here.
pub fn issues(entries: Vec<Value>) -> Vec<FeedItem> {
    numbered(entries)
        .filter(|entry| entry.pull_request.is_none())
        .map(|entry| FeedItem::Issue {
            number: entry.number,
            title: entry.title,
            html_url: entry.html_url,
        })
        .collect()
}

pub fn pulls(entries: Vec<Value>) -> Vec<FeedItem> {
    numbered(entries)
        .map(|entry| FeedItem::Pull {
            number: entry.number,
            title: entry.title,
            html_url: entry.html_url,
        })
        .collect()
}

fn numbered(entries: Vec<Value>) -> impl Iterator<Item = NumberedEntry> {
    entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<NumberedEntry>(entry).ok())
}
