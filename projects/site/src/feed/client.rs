use interfaces_github_activity::resource::{IssueState, Resource};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::items::{self, FeedItem};
use super::page::{append_all, FeedPage};

pub const DEFAULT_REPO: &str = "OpenCentauri/OpenCentauri";
pub const FEED_PER_PAGE: u32 = 5;

#[derive(Debug, Error)]
pub enum FetchEntriesError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("UnsuccessfulStatus: {status}")]
    UnsuccessfulStatus {
        status: reqwest::StatusCode,
    },

    #[error("DeserializeResponseBody: {source}")]
    DeserializeResponseBody {
        source: reqwest::Error,
    },
}

/// Reads repository activity through the site's own proxy endpoint.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    proxy_url: String,
    repo: String,
}

impl FeedClient {
    pub fn new(http: reqwest::Client, proxy_url: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            http,
            proxy_url: proxy_url.into(),
            repo: repo.into(),
        }
    }

    pub async fn commits(&self) -> Vec<FeedItem> {
        items::commits(self.entries_or_empty(Resource::Commits).await, &self.repo)
    }

    pub async fn issues(&self) -> Vec<FeedItem> {
        items::issues(self.entries_or_empty(Resource::Issues).await)
    }

    pub async fn pulls(&self) -> Vec<FeedItem> {
        items::pulls(self.entries_or_empty(Resource::Pulls).await)
    }

    /// Every failure collapses to an empty list for this resource only.
    async fn entries_or_empty(&self, resource: Resource) -> Vec<Value> {
        match self.fetch_entries(resource).await {
            Ok(body) => items::entries(body),
            Err(err) => {
                debug!(%resource, error = %err, "Feed fetch failed, rendering nothing");
                Vec::new()
            }
        }
    }

    async fn fetch_entries(&self, resource: Resource) -> Result<Value, FetchEntriesError> {
        let per_page = FEED_PER_PAGE.to_string();
        let mut query = vec![
            ("repo", self.repo.as_str()),
            ("resource", resource.as_str()),
        ];
        if resource.accepts_state() {
            query.push(("state", IssueState::Open.as_str()));
        }
        query.push(("per_page", per_page.as_str()));

        let response = self
            .http
            .get(&self.proxy_url)
            .query(&query)
            .send()
            .await
            .map_err(|source| FetchEntriesError::RequestSend { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchEntriesError::UnsuccessfulStatus { status });
        }

        response
            .json()
            .await
            .map_err(|source| FetchEntriesError::DeserializeResponseBody { source })
    }
}

/// Fills whichever containers `page` has. The three fetches run concurrently
/// and independently; a page with no containers issues no requests.
pub async fn render_feed(client: &FeedClient, page: &mut FeedPage) {
    if page.is_empty() {
        return;
    }

    let (commits, issues, pulls) = tokio::join!(client.commits(), client.issues(), client.pulls());

    append_all(page.commits.as_mut(), &commits);
    append_all(page.issues.as_mut(), &issues);
    append_all(page.pulls.as_mut(), &pulls);
}
