mod profiles;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use ghdash_scraper::ProfileClient;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::middleware::{request_id, RequestId};

/// Shared state for all routes: one scraping client reused across requests.
#[derive(Clone)]
pub struct AppState {
    pub client: ProfileClient,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "upstream_error" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Maps a scrape failure to the wire error without leaking transport detail.
pub(super) fn map_scrape_error(
    request_id: String,
    error: &ghdash_scraper::ScraperError,
) -> ApiError {
    tracing::error!(error = %error, "profile scrape failed");
    ApiError::new(request_id, "upstream_error", "profile fetch failed")
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/profiles/{username}", get(profiles::get_profile))
        .route(
            "/api/v1/profiles/{username}/pinned",
            get(profiles::get_profile_pinned),
        )
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse {
            data: HealthData { status: "ok" },
            meta: ResponseMeta::new(req_id.0),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const OCTOCAT_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <span class="Counter">8</span>
  <img class="avatar avatar-user" src="https://avatars.githubusercontent.com/u/583231?v=4">
  <div class="p-note user-profile-bio mb-3 js-user-profile-bio f4">Just a friendly octopus-cat.</div>
  <li class="pinned-item-list-item">
    <a class="text-bold" href="/octocat/Hello-World"><span class="repo">Hello-World</span></a>
    <p class="pinned-item-desc">My first repository on GitHub!</p>
  </li>
</body>
</html>"#;

    /// App wired to a client pointed at `base_url`.
    fn test_app(base_url: &str) -> Router {
        let client = ProfileClient::with_base_url(base_url).expect("build client");
        build_app(AppState { client })
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json parse");
        (status, json)
    }

    #[tokio::test]
    async fn health_returns_ok_envelope() {
        let app = test_app("http://127.0.0.1:0");
        let (status, json) = get_json(app, "/api/v1/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["status"].as_str(), Some("ok"));
        assert!(
            json["meta"]["request_id"].as_str().is_some(),
            "meta.request_id should be present"
        );
        assert!(json["meta"]["timestamp"].as_str().is_some());
    }

    #[tokio::test]
    async fn get_profile_returns_scraped_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/octocat"))
            .respond_with(ResponseTemplate::new(200).set_body_string(OCTOCAT_PAGE))
            .mount(&server)
            .await;

        let app = test_app(&server.uri());
        let (status, json) = get_json(app, "/api/v1/profiles/octocat").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["data"]["bio"].as_str(),
            Some("Just a friendly octopus-cat.")
        );
        assert_eq!(json["data"]["pinned_repos"][0].as_str(), Some("Hello-World"));
        assert_eq!(
            json["data"]["avatar_url"].as_str(),
            Some("https://avatars.githubusercontent.com/u/583231?v=4")
        );
    }

    #[tokio::test]
    async fn get_profile_pinned_returns_detail_view() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/octocat"))
            .respond_with(ResponseTemplate::new(200).set_body_string(OCTOCAT_PAGE))
            .mount(&server)
            .await;

        let app = test_app(&server.uri());
        let (status, json) = get_json(app, "/api/v1/profiles/octocat/pinned").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["repo_count"].as_str(), Some("8"));
        assert_eq!(json["data"]["pinned"][0]["name"].as_str(), Some("Hello-World"));
        assert_eq!(
            json["data"]["pinned"][0]["url"].as_str(),
            Some(format!("{}/octocat/Hello-World", server.uri()).as_str())
        );
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_bad_gateway() {
        // Allocate a port, then free it so the scrape is refused. Must be a
        // builder-started (unpooled) server: `MockServer::start()` hands out
        // a pooled server whose listener stays open after drop, so the
        // connection would still be accepted.
        let server = MockServer::builder().start().await;
        let uri = server.uri();
        drop(server);

        let app = test_app(&uri);
        let (status, json) = get_json(app, "/api/v1/profiles/octocat").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["error"]["code"].as_str(), Some("upstream_error"));
        assert!(
            json["meta"]["request_id"].as_str().is_some(),
            "errors carry meta too"
        );
    }

    #[tokio::test]
    async fn request_id_header_is_echoed() {
        let app = test_app("http://127.0.0.1:0");
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .header("x-request-id", "test-id-123")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(
            response
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok()),
            Some("test-id-123")
        );
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json parse");
        assert_eq!(json["meta"]["request_id"].as_str(), Some("test-id-123"));
    }

    #[test]
    fn api_error_upstream_maps_to_bad_gateway_status() {
        let response = ApiError::new("req-1", "upstream_error", "profile fetch failed")
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn api_error_unknown_code_maps_to_internal_error() {
        let response = ApiError::new("req-1", "mystery", "boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
