//! API routes module

pub mod products;
pub mod tickets;
pub mod vehicles;

use axum::Router;
use axum_helpers::with_token_auth;

use crate::state::AppState;

/// Create all API routes, each behind the `Token` header check
pub fn routes(state: &AppState) -> Router {
    let routes = Router::new()
        .nest("/products", products::router(state))
        .nest("/vehicles", vehicles::router(state))
        .nest("/tickets", tickets::router(state));

    with_token_auth(routes, state.config.auth.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use crate::openapi::ApiDoc;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::server::{create_router, health_router};
    use core_config::{
        app_info,
        auth::AuthConfig,
        server::ServerConfig,
        storage::{StorageBackend, StorageConfig},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::io::Write;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const TOKEN: &str = "secret";

    async fn app(dir: &TempDir) -> Router {
        let tickets_file = dir.path().join("tickets.csv");
        let mut file = std::fs::File::create(&tickets_file).unwrap();
        writeln!(file, "1,Ana,ana@example.com,Brazil,10:00,100").unwrap();
        writeln!(file, "2,Bo,bo@example.com,Chile,11:00,200").unwrap();

        let config = Config {
            app: app_info!(),
            server: ServerConfig::default(),
            auth: AuthConfig::new(TOKEN),
            storage: StorageConfig {
                products_backend: StorageBackend::File,
                products_file: dir.path().join("db").join("products.json"),
                vehicles_file: None,
                tickets_file: Some(tickets_file),
            },
            environment: Environment::Development,
        };

        let state = AppState::build(config).await.unwrap();
        create_router::<ApiDoc>(routes(&state)).merge(health_router(state.config.app))
    }

    fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Token", token);
        }
        match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn json_body(body: Body) -> Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_token_is_rejected_before_handlers() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir).await;

        let response = app
            .oneshot(request("GET", "/products", None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = json_body(response.into_body()).await;
        assert_eq!(
            body["message"],
            "Unauthorized - authorization header is missing"
        );
    }

    #[tokio::test]
    async fn test_wrong_token_is_rejected() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir).await;

        for uri in ["/vehicles", "/tickets"] {
            let response = app
                .clone()
                .oneshot(request("GET", uri, Some("nope"), None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir).await;

        let response = app
            .oneshot(request("GET", "/health", None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_products_persist_to_file() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir).await;

        let product = json!({
            "name": "Oil - Margarine",
            "quantity": 439,
            "code_value": "S82254D",
            "expiration": "15/12/2021",
            "price": 71.42
        });
        let response = app
            .clone()
            .oneshot(request("POST", "/products", Some(TOKEN), Some(product)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let stored = std::fs::read_to_string(dir.path().join("db").join("products.json")).unwrap();
        let stored: Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(stored[0]["code_value"], "S82254D");

        let response = app
            .oneshot(request("GET", "/products", Some(TOKEN), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response.into_body()).await.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_domains_are_nested() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir).await;

        let response = app
            .clone()
            .oneshot(request("GET", "/tickets/getAverage/brazil", Some(TOKEN), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response.into_body()).await["percentage"], 50.0);

        let response = app
            .clone()
            .oneshot(request("GET", "/vehicles", Some(TOKEN), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(request("GET", "/unknown", Some(TOKEN), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
