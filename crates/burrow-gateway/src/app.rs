use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{redirect_handler, shorten_handler};
use crate::middleware::{cors, CorsPolicy};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState, cors_policy: CorsPolicy) -> Router {
        Router::new()
            .route("/api/shorten", post(shorten_handler))
            .route("/{shortened}", get(redirect_handler))
            .with_state(state)
            .layer(axum::middleware::from_fn_with_state(
                Arc::new(cors_policy),
                cors,
            ))
            .layer(TraceLayer::new_for_http())
    }
}
