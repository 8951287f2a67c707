//! Route definitions for the FlashApp HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and passes it to every handler via Axum's `State` extractor.

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().merge(pc_routes()).merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Pc CRUD
fn pc_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/pcs",
            get(handlers::pc::get_all_pcs).post(handlers::pc::create_pc),
        )
        .route(
            "/pcs/{id}",
            get(handlers::pc::get_pc)
                .put(handlers::pc::update_pc)
                .patch(handlers::pc::partial_update_pc)
                .delete(handlers::pc::delete_pc),
        )
}

/// Health check (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
