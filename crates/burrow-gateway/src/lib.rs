//! HTTP gateway for the Burrow URL shortener.
//!
//! Exposes `POST /api/shorten` and `GET /{shortened}` over axum, with a
//! fixed cross-origin policy applied to every response.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod state;
pub mod telemetry;

pub use app::App;
pub use middleware::CorsPolicy;
pub use state::AppState;
