use anyhow::Result;
use axum::serve;
use projects_site::{
	config::{Config, ConfigError, Credential},
	endpoints::{app, github::gh_proxy::index::ProxyState, GH_PROXY_PATH},
};
use thiserror::Error;
use tracing::info;
use utils_trace::init as tracing_init;

#[derive(Debug, Error)]
pub enum MainError {
	#[error("Config: {source}")]
	Config {
		#[source]
		source: ConfigError,
	},
	#[error("TracingInit: {source}")]
	TracingInit {
		#[source]
		source: utils_trace::TracingInitError,
	},
	#[error("TcpListenerBind: {source}")]
	TcpListenerBind {
		#[source]
		source: std::io::Error,
	},
	#[error("Serve: {source}")]
	Serve {
		#[source]
		source: std::io::Error,
	}
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
	let config = Config::from_env()
		.map_err(|source| MainError::Config { source })?;

	tracing_init(&config.log_directives, config.log_format)
		.map_err(|source| MainError::TracingInit { source })?;

	let credential = Credential::from_env();
	if credential.resolve().is_none() {
		info!("No GitHub token configured, upstream requests are unauthenticated");
	}

	let state = ProxyState {
		http: reqwest::Client::new(),
		github_api_url: config.github_api_url.clone(),
		user_agent: config.user_agent.clone(),
		credential,
	};

	let app = app(state, &config.site_dir);

	let listener = tokio::net::TcpListener::bind(config.bind_addr)
		.await
		.map_err(|source| MainError::TcpListenerBind { source })?;

	info!(
		addr = %config.bind_addr,
		site_dir = %config.site_dir.display(),
		proxy = GH_PROXY_PATH,
		"Server running",
	);

	serve(listener, app)
		.await
		.map_err(|source| MainError::Serve { source })?;

	Ok(())
}
