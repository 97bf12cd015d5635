//! API route table.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api`. The browser frontend is served from a
//! different origin, so the CORS layer stays permissive.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the API router over a prepared [`ApiContext`].
pub fn api_router(ctx: ApiContext) -> Router {
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/login", post(endpoints::auth::login))
        .route("/register", post(endpoints::auth::register))
        .route("/vitals", post(endpoints::vitals::save))
        .route("/prescriptions", post(endpoints::prescriptions::save))
        .route("/symptoms", post(endpoints::symptoms::log))
        .route("/search/specialists", get(endpoints::search::specialists))
        .with_state(ctx);

    Router::new()
        .nest("/api", routes)
        .layer(CorsLayer::permissive())
}
