use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use typed_builder::TypedBuilder;

pub const DEFAULT_ALLOW_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_ALLOW_METHODS: &str = "POST, GET, OPTIONS, PUT, DELETE";
pub const DEFAULT_ALLOW_HEADERS: &str = "Content-Type";

/// Fixed cross-origin headers stamped on every response.
#[derive(Debug, Clone, TypedBuilder)]
pub struct CorsPolicy {
    #[builder(default = HeaderValue::from_static(DEFAULT_ALLOW_ORIGIN))]
    allow_origin: HeaderValue,
    #[builder(default = HeaderValue::from_static(DEFAULT_ALLOW_METHODS))]
    allow_methods: HeaderValue,
    #[builder(default = HeaderValue::from_static(DEFAULT_ALLOW_HEADERS))]
    allow_headers: HeaderValue,
}

impl CorsPolicy {
    pub fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone());
        headers.insert(ACCESS_CONTROL_ALLOW_METHODS, self.allow_methods.clone());
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, self.allow_headers.clone());
    }
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Applies `policy` to every response. `OPTIONS` requests never reach the
/// router: they get a bare `200` with an empty body.
pub async fn cors(State(policy): State<Arc<CorsPolicy>>, request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    policy.apply(response.headers_mut());
    response
}
