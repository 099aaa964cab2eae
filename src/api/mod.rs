//! API handlers for the bookshelf REST endpoints

pub mod health;
pub mod openapi;
pub mod shelves;

use axum::{
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/shelves", get(shelves::list_shelves))
        .route("/shelves/:id", get(shelves::get_shelf))
        .route(
            "/shelves/:id/:isbn",
            get(shelves::get_book)
                .post(shelves::create_book)
                .patch(shelves::update_book)
                .delete(shelves::delete_book),
        )
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
