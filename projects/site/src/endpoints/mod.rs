pub mod github;

use std::path::Path;

use axum::{routing::any, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use github::gh_proxy::index::{handler as github_gh_proxy_handler, ProxyState};

/// Path the site's script calls.
pub const GH_PROXY_PATH: &str = "/.netlify/functions/gh-proxy";
pub const GH_PROXY_API_PATH: &str = "/api/gh-proxy";

/// Proxy routes only. Methods are checked inside the handler so that every
/// non-GET request gets the same 405 body and `Allow` header.
pub fn api_router(state: ProxyState) -> Router {
	Router::new()
		.route(GH_PROXY_PATH, any(github_gh_proxy_handler))
		.route(GH_PROXY_API_PATH, any(github_gh_proxy_handler))
		.with_state(state)
}

/// Proxy routes with the static site as fallback.
pub fn app(state: ProxyState, site_dir: impl AsRef<Path>) -> Router {
	api_router(state)
		.fallback_service(ServeDir::new(site_dir))
		.layer(TraceLayer::new_for_http())
}
