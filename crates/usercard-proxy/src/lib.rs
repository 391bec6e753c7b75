//! User Card proxy service.
//!
//! Exposes `GET /user` and forwards it to the random-user API, so a card
//! can fetch through this server instead of calling the public endpoint
//! from the client.
//!
//! ```text
//! GET /user                 -> first result, as the API sent it
//! GET /user?gender=female   -> same, filtered upstream
//! GET /user?gender=robot    -> filter ignored
//! upstream failure          -> 500 {"error": "...", "message": "..."}
//! ```

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};
use usercard_core::{FetchError, GenderFilter, RandomUserClient};

/// Shared handler state: the upstream client, cloned per request.
#[derive(Clone)]
pub struct ProxyState {
    client: Arc<RandomUserClient>,
}

impl ProxyState {
    pub fn new(upstream: impl Into<String>) -> Self {
        Self {
            client: Arc::new(RandomUserClient::with_endpoint(upstream)),
        }
    }

    pub fn upstream(&self) -> &str {
        self.client.endpoint()
    }

    fn client(&self, gender: Option<GenderFilter>) -> RandomUserClient {
        self.client.as_ref().clone().gender(gender)
    }
}

/// Build the proxy router with CORS open to every origin.
pub fn router(state: ProxyState) -> Router {
    Router::new()
        .route("/user", get(get_user))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub struct UserQuery {
    pub gender: Option<String>,
}

async fn get_user(
    State(state): State<ProxyState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<serde_json::Value>, ProxyError> {
    let gender = GenderFilter::parse_lenient(query.gender.as_deref());
    debug!(?gender, upstream = state.upstream(), "Forwarding /user");

    let user = state.client(gender).fetch_raw().await?;
    Ok(Json(user))
}

/// Error body returned on upstream failure.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Failed to fetch user data: {0}")]
    Upstream(#[from] FetchError),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let ProxyError::Upstream(err) = self;
        warn!("Upstream fetch failed: {}", err);
        let body = ErrorBody {
            error: "Failed to fetch user data".to_string(),
            message: err.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let resp = ProxyError::Upstream(FetchError::EmptyResults).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_state_keeps_upstream() {
        let state = ProxyState::new("http://example.test/api/");
        assert_eq!(state.upstream(), "http://example.test/api/");
        assert_eq!(state.client(None).endpoint(), "http://example.test/api/");
    }
}
