//! API routes module

pub mod health;
pub mod items;

use axum::Router;

use crate::state::AppState;

/// All application routes, merged at the root by `axum_helpers::create_router`.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(items::router(state))
        .merge(health::router(state.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::openapi::ApiDoc;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum_helpers::server::{create_router, health_router};
    use core_config::FromEnv;
    use http_body_util::BodyExt;
    use mongodb::Client;
    use mongodb::options::ClientOptions;
    use serde_json::{Value, json};
    use std::time::Duration;
    use tower::ServiceExt;

    /// Full application against a MongoDB address nothing listens on.
    async fn unreachable_app() -> Router {
        let mut config = Config::from_env().unwrap();
        config.mongodb.url = "mongodb://127.0.0.1:1".to_string();

        let mut options = ClientOptions::parse(&config.mongodb.url).await.unwrap();
        options.server_selection_timeout = Some(Duration::from_millis(200));
        let client = Client::with_options(options).unwrap();

        let state = AppState::new(config, client);
        create_router::<ApiDoc>(routes(&state).merge(health_router(state.config.app)))
    }

    async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        read(app, request).await
    }

    async fn send_json(app: Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        read(app, request).await
    }

    async fn read(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_health_is_up_without_database() {
        let (status, body) = send(unreachable_app().await, "GET", "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], "items_api");
    }

    #[tokio::test]
    async fn test_ready_reports_disconnected_database() {
        let (status, body) = send(unreachable_app().await, "GET", "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "not ready");
        assert_eq!(body["mongodb"], "disconnected");
    }

    #[tokio::test]
    async fn test_store_failure_is_500_with_driver_message() {
        let (status, body) = send(unreachable_app().await, "GET", "/items").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "DATABASE_ERROR");
        assert!(!body["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_is_500_on_every_item_route() {
        let app = unreachable_app().await;
        let uri = "/items/65a1f0c2e4b0a1b2c3d4e5f6";
        let body = json!({"name": "widget", "price": 10});

        let results = [
            ("GET", send(app.clone(), "GET", uri).await),
            ("POST", send_json(app.clone(), "POST", "/items", body.clone()).await),
            ("PUT", send_json(app.clone(), "PUT", uri, body).await),
            ("DELETE", send(app, "DELETE", uri).await),
        ];

        for (method, (status, body)) in results {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method}");
            assert_eq!(body["error"], "DATABASE_ERROR", "{method}");
            assert_eq!(body["code"], 2001, "{method}");
        }
    }

    #[tokio::test]
    async fn test_invalid_id_rejected_before_touching_store() {
        let (status, body) = send(unreachable_app().await, "DELETE", "/items/xyz").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "INVALID_OBJECT_ID");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404_envelope() {
        let (status, body) = send(unreachable_app().await, "GET", "/nowhere").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 1004);
    }
}
