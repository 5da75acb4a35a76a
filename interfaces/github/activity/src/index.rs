use reqwest::{
    header::{ACCEPT, USER_AGENT},
    Client, StatusCode,
};
use thiserror::Error;
use urlencoding::encode;

use crate::{
    repo::RepoPath,
    resource::{IssueState, Resource},
};

pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// A normalised listing request for one repository collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityQuery {
    pub repo: RepoPath,
    pub resource: Resource,
    /// Always `None` for commits.
    pub state: Option<IssueState>,
    pub per_page: u32,
}

impl ActivityQuery {
    /// Path and query relative to the API root, e.g.
    /// `/repos/foo/bar/issues?state=open&per_page=3`.
    pub fn path_and_query(&self) -> String {
        let per_page = self.per_page.to_string();
        let mut path = format!("/repos/{}/{}?", self.repo.encoded(), self.resource);

        if let Some(state) = self.state {
            path.push_str(&format!("state={}&", encode(state.as_str())));
        }
        path.push_str(&format!("per_page={}", encode(&per_page)));

        path
    }

    pub fn url(&self, api_base: &str) -> String {
        format!("{}{}", api_base.trim_end_matches('/'), self.path_and_query())
    }
}

#[derive(Debug)]
pub struct GitHubRestResult {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Issues one GET against the REST API and hands back status and body as
/// received. Non-2xx statuses are not errors here.
pub async fn fetch_repo_activity(
    client: &Client,
    url: &str,
    user_agent: &str,
    token: Option<&str>,
) -> Result<GitHubRestResult, FetchRepoActivityError> {
    let mut request = client
        .get(url)
        .header(USER_AGENT, user_agent)
        .header(ACCEPT, GITHUB_ACCEPT);

    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    let response = request
        .send()
        .await
        .map_err(|source| FetchRepoActivityError::RequestSend { source })?;

    let status = response.status();

    let body = response
        .bytes()
        .await
        .map_err(|source| FetchRepoActivityError::ResponseRead { source })?
        .to_vec();

    Ok(GitHubRestResult { body, status })
}

#[derive(Debug, Error)]
pub enum FetchRepoActivityError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}
