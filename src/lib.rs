pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod mockapi;
pub mod state;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{protected, public};
use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(album_routes(&state))
        .merge(auth_public_routes())
        .merge(mockapi_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn album_routes(state: &AppState) -> Router<AppState> {
    let auth = from_fn_with_state(state.clone(), jwt_auth_middleware);

    Router::new()
        // Reads are public, writes need a bearer token
        .route(
            "/albums",
            get(public::albums::list)
                .merge(post(protected::albums::create).route_layer(auth.clone())),
        )
        .route(
            "/albums/:id",
            get(public::albums::show).merge(
                put(protected::albums::update)
                    .delete(protected::albums::delete)
                    .route_layer(auth),
            ),
        )
}

fn auth_public_routes() -> Router<AppState> {
    Router::new().route("/login", post(public::login::login_post))
}

fn mockapi_routes() -> Router<AppState> {
    Router::new()
        .route("/mockapi/products", get(public::mockapi::products))
        .route("/mockapi/products/:id", get(public::mockapi::product))
}
