use std::time::Duration;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::Config;
use crate::handlers::contact_handlers;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

async fn health_check() -> &'static str {
    "OK"
}

/// API routes plus the built single-page client. Unknown paths serve
/// `index.html` so client-side routes survive a reload.
pub fn app(config: &Config) -> Router {
    let index = config.frontend_dir.join("index.html");
    let client = ServeDir::new(&config.frontend_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .fallback_service(client)
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(config))
}

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_TYPE]);

    match &config.allowed_origin {
        Some(origin) => cors.allow_origin(origin.clone()),
        None => cors.allow_origin(Any),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn test_config(frontend_dir: PathBuf) -> Config {
        let mut config = Config::from_lookup(|_| None).unwrap();
        config.frontend_dir = frontend_dir;
        config
    }

    fn test_app() -> Router {
        app(&test_config(PathBuf::from("does-not-exist")))
    }

    fn valid_body() -> Value {
        json!({
            "name": "Jane",
            "email": "jane@example.com",
            "subject": "Hi",
            "message": "This is a long enough message."
        })
    }

    async fn post_contact(app: Router, body: String) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn health_check_responds_ok() {
        let response = test_app()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn valid_submission_is_acknowledged_without_message_body() {
        let (status, body) = post_contact(test_app(), valid_body().to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Message received successfully");
        assert_eq!(
            body["data"],
            json!({"name": "Jane", "email": "jane@example.com", "subject": "Hi"})
        );
        assert!(body["data"].get("message").is_none());
    }

    #[tokio::test]
    async fn repeated_submissions_get_identical_acknowledgements() {
        let (_, first) = post_contact(test_app(), valid_body().to_string()).await;
        let (_, second) = post_contact(test_app(), valid_body().to_string()).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn each_missing_field_is_rejected() {
        for field in ["name", "email", "subject", "message"] {
            let mut body = valid_body();
            body.as_object_mut().unwrap().remove(field);

            let (status, json) = post_contact(test_app(), body.to_string()).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "missing {field}");
            assert_eq!(json["message"], "All fields are required");
            assert!(json.get("data").is_none(), "missing {field} echoed data");
        }
    }

    #[tokio::test]
    async fn empty_and_null_fields_are_rejected() {
        for field in ["name", "email", "subject", "message"] {
            for blank in [json!(""), Value::Null] {
                let mut body = valid_body();
                body[field] = blank.clone();

                let (status, json) = post_contact(test_app(), body.to_string()).await;

                assert_eq!(status, StatusCode::BAD_REQUEST, "{field} = {blank}");
                assert!(json.get("data").is_none());
            }
        }
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let (status, json) = post_contact(test_app(), "{not json".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Invalid request body");

        let mut body = valid_body();
        body["name"] = json!(42);
        let (status, json) = post_contact(test_app(), body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Invalid request body");
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_client_index() {
        let dist = std::env::temp_dir().join(format!("portfolio-dist-{}", std::process::id()));
        std::fs::create_dir_all(&dist).unwrap();
        std::fs::write(dist.join("index.html"), "<html>portfolio</html>").unwrap();

        let response = app(&test_config(dist.clone()))
            .oneshot(Request::builder().uri("/projects").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"<html>portfolio</html>");

        let _ = std::fs::remove_dir_all(&dist);
    }
}
