use std::collections::HashMap;
use std::num::IntErrorKind;

use interfaces_github_activity::{
    index::ActivityQuery,
    repo::{ParseRepoPathError, RepoPath},
    resource::{IssueState, Resource, UnsupportedResource},
};
use thiserror::Error;

pub const DEFAULT_PER_PAGE: u32 = 5;
pub const MIN_PER_PAGE: u32 = 1;
pub const MAX_PER_PAGE: u32 = 100;

/// Display strings are returned to the caller as the JSON `error` field.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing repo or resource")]
    MissingParams,

    #[error("Unsupported resource")]
    UnsupportedResource {
        #[source]
        source: UnsupportedResource,
    },

    #[error("Invalid repo")]
    InvalidRepo {
        #[source]
        source: ParseRepoPathError,
    },
}

/// Validated and bounded proxy query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyRequest(pub ActivityQuery);

impl ProxyRequest {
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let param = |key: &str| params.get(key).map(String::as_str).filter(|v| !v.is_empty());

        let (Some(repo), Some(resource)) = (param("repo"), param("resource")) else {
            return Err(ValidationError::MissingParams);
        };

        let resource: Resource = resource
            .parse()
            .map_err(|source| ValidationError::UnsupportedResource { source })?;
        let repo =
            RepoPath::parse(repo).map_err(|source| ValidationError::InvalidRepo { source })?;

        let state = resource
            .accepts_state()
            .then(|| IssueState::parse_or_default(param("state")));

        Ok(Self(ActivityQuery {
            repo,
            resource,
            state,
            per_page: normalize_per_page(param("per_page")),
        }))
    }

    pub fn query(&self) -> &ActivityQuery {
        &self.0
    }
}

/// Integer parse with a default of 5 on absence or non-integer input, clamped
/// to [1,100]. Integers too large for `i64` still clamp.
pub fn normalize_per_page(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return DEFAULT_PER_PAGE;
    };

    match raw.trim().parse::<i64>() {
        Ok(value) => value.clamp(MIN_PER_PAGE.into(), MAX_PER_PAGE.into()) as u32,
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => MAX_PER_PAGE,
            IntErrorKind::NegOverflow => MIN_PER_PAGE,
            _ => DEFAULT_PER_PAGE,
        },
    }
}
