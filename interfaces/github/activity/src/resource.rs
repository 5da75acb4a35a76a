use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Repository collection exposed through the proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Commits,
    Issues,
    Pulls,
}

#[derive(Debug, Error)]
#[error("UnsupportedResource: {value}")]
pub struct UnsupportedResource {
    pub value: String,
}

impl Resource {
    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Commits => "commits",
            Resource::Issues => "issues",
            Resource::Pulls => "pulls",
        }
    }

    /// Commits have no open/closed state on GitHub.
    pub fn accepts_state(self) -> bool {
        !matches!(self, Resource::Commits)
    }
}

impl FromStr for Resource {
    type Err = UnsupportedResource;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "commits" => Ok(Resource::Commits),
            "issues" => Ok(Resource::Issues),
            "pulls" => Ok(Resource::Pulls),
            other => Err(UnsupportedResource {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State filter for issues and pull requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IssueState {
    #[default]
    Open,
    Closed,
    All,
}

impl IssueState {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
            IssueState::All => "all",
        }
    }

    /// Exact match on `open`, `closed` or `all`; anything else, including an
    /// absent or empty value, becomes `open`.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw {
            Some("closed") => IssueState::Closed,
            Some("all") => IssueState::All,
            _ => IssueState::Open,
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
