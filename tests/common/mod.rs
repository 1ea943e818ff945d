#![allow(dead_code)]

use std::sync::Arc;

use album_api::auth::AuthService;
use album_api::config::SecurityConfig;
use album_api::database::{AlbumStore, MemoryAlbumStore};
use album_api::mockapi::CatalogClient;
use album_api::state::AppState;
use axum::body::{Body, Bytes};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "hunter2";

/// Nothing listens here; album tests never reach the catalog.
pub const UNREACHABLE_CATALOG: &str = "http://127.0.0.1:1";

pub fn auth_service() -> AuthService {
    AuthService::new(&SecurityConfig {
        admin_username: ADMIN_USER.to_string(),
        admin_password: ADMIN_PASS.to_string(),
        jwt_secret: "integration-test-secret".to_string(),
        jwt_expiry_hours: 24,
    })
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryAlbumStore>,
    pub auth: AuthService,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_catalog(UNREACHABLE_CATALOG)
    }

    pub fn with_catalog(catalog_url: &str) -> Self {
        let store = Arc::new(MemoryAlbumStore::new());
        let auth = auth_service();
        let state = AppState::new(
            store.clone() as Arc<dyn AlbumStore>,
            auth.clone(),
            CatalogClient::with_base_url(catalog_url),
        );
        Self {
            router: album_api::app(state),
            store,
            auth,
        }
    }

    pub fn token(&self) -> String {
        self.auth.issue_token(ADMIN_USER).unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(request(Method::GET, uri, None, Body::empty())).await
    }

    /// Send `body` with `Authorization: Bearer <token>` when a token is given.
    pub async fn send_authed(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: impl Into<Body>,
    ) -> TestResponse {
        let auth = token.map(|t| format!("Bearer {}", t));
        self.send(request(method, uri, auth.as_deref(), body.into()))
            .await
    }
}

pub fn request(
    method: Method,
    uri: &str,
    authorization: Option<&str>,
    body: Body,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(body).unwrap()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).unwrap()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}
