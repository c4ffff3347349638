use std::sync::Arc;

use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use service::item::{ItemService, SeaOrmItemRepository};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure};
use tracing::Level;

use common::types::Health;

pub mod items;

/// Shared handler state; the store handle is injected here, never global.
#[derive(Clone)]
pub struct ServerState {
    pub items: Arc<ItemService<SeaOrmItemRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { items: Arc::new(ItemService::from_db(db)) }
    }
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the application router: listing/create, edit/update, delete, about and health.
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(items::index).post(items::create))
        .route("/update/:id", get(items::edit).post(items::update))
        .route("/delete/:id", get(items::delete).post(items::delete))
        .route("/about", get(items::about))
        .route("/health", get(health))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx responses
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
