use std::collections::HashMap;

use axum::{
	body::Body,
	extract::{Query, State},
	http::{header, Method, Response, StatusCode},
	response::IntoResponse,
	Json,
};
use interfaces_github_activity::index::{
	fetch_repo_activity, FetchRepoActivityError, GitHubRestResult};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::request::{ProxyRequest, ValidationError};
use crate::config::Credential;

pub const CACHE_CONTROL: &str = "s-maxage=300, max-age=60";

/// Shared by every invocation; holds no per-request state.
#[derive(Clone)]
pub struct ProxyState {
	pub http: reqwest::Client,
	pub github_api_url: String,
	pub user_agent: String,
	pub credential: Credential,
}

#[derive(Debug, Error)]
pub enum HandlerError {
	#[error("Method not allowed")]
	MethodNotAllowed,

	#[error(transparent)]
	Validation {
		#[from]
		source: ValidationError,
	},

	#[error("Upstream error")]
	Upstream {
		#[from]
		source: FetchRepoActivityError,
	},

	#[error("Internal error")]
	BuildResponse {
		#[from]
		source: axum::http::Error,
	},
}

#[derive(Serialize)]
struct ErrorBody {
	error: String,
}

impl IntoResponse for HandlerError {
	fn into_response(self) -> axum::response::Response {
		let body = Json(ErrorBody { error: self.to_string() });

		match self {
			HandlerError::MethodNotAllowed => (
				StatusCode::METHOD_NOT_ALLOWED,
				[(header::ALLOW, "GET")],
				body,
			).into_response(),
			HandlerError::Validation { .. } => (StatusCode::BAD_REQUEST, body).into_response(),
			HandlerError::Upstream { source } => {
				error!(error = %source, "GitHub request failed");
				(StatusCode::BAD_GATEWAY, body).into_response()
			}
			HandlerError::BuildResponse { source } => {
				error!(error = %source, "Failed to build proxy response");
				(StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
			}
		}
	}
}

/// Axum handler: GET /.netlify/functions/gh-proxy (also /api/gh-proxy)
pub async fn handler(
	State(state): State<ProxyState>,
	method: Method,
	Query(params): Query<HashMap<String, String>>,
) -> Result<Response<Body>, HandlerError> {
	if method != Method::GET {
		debug!(%method, "Rejected non-GET proxy request");
		return Err(HandlerError::MethodNotAllowed);
	}

	let request = ProxyRequest::from_query(&params).inspect_err(|err| {
		warn!(error = %err, "Rejected proxy request");
	})?;
	let query = request.query();

	let url = query.url(&state.github_api_url);
	let token = state.credential.resolve();

	let GitHubRestResult { status, body } =
		fetch_repo_activity(&state.http, &url, &state.user_agent, token.as_deref()).await?;

	info!(
		repo = %query.repo,
		resource = %query.resource,
		per_page = query.per_page,
		authenticated = token.is_some(),
		%status,
		"Proxied GitHub request",
	);

	let response = Response::builder()
		.status(status)
		.header(header::CONTENT_TYPE, "application/json")
		.header(header::CACHE_CONTROL, CACHE_CONTROL)
		.body(Body::from(body))?;

	Ok(response)
}
