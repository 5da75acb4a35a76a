//! Read-only access to a repository's recent activity on the GitHub REST API
//!
//! - `resource`: the collections that can be listed and their state filter
//! - `repo`: validated `owner/name` paths
//! - `index`: upstream URL composition and the outbound request

pub mod index;
pub mod repo;
pub mod resource;
