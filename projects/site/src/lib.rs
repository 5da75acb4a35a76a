//! Static site server with a read-only GitHub activity proxy
//!
//! - Proxy endpoint in `endpoints/`
//! - Research feed rendering in `feed/`
//! - Theme state in `theme/`
//! - Optional GITHUB_TOKEN (or GH_TOKEN) env var raises upstream rate limits

pub mod config;
pub mod endpoints;
pub mod feed;
pub mod theme;
