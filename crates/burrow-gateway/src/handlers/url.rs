use crate::error::{AppError, Result};
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use burrow_core::ShortCode;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

/// `POST /api/shorten`
///
/// Decodes the first JSON value of the raw body whatever its content type;
/// anything after it is ignored. An undecodable body is a `400` carrying the
/// decoder's message.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ShortenResponse>> {
    let request = decode_first::<ShortenRequest>(&body).map_err(|err| {
        warn!(error = %err, "failed to decode shorten request");
        AppError::InvalidBody(err)
    })?;

    let code = state.shortener().shorten(request.original.clone()).await?;
    let short = code.to_url(state.base_url());

    info!(code = %code, original = %request.original, "created short url");
    Ok(Json(ShortenResponse {
        original: request.original,
        short,
    }))
}

/// `GET /{shortened}`
///
/// A segment that does not decode to UTF-8 cannot name an issued code, so it
/// is a `404` like any other unknown code.
pub async fn redirect_handler(
    shortened: std::result::Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response> {
    let Path(shortened) = shortened.map_err(|rejection| {
        debug!(error = %rejection, "undecodable short code");
        AppError::NotFound
    })?;
    let code = ShortCode::new(shortened);

    let Some(record) = state.shortener().resolve(&code).await? else {
        debug!(code = %code, "short code not found");
        return Err(AppError::NotFound);
    };

    let location = HeaderValue::try_from(record.original_url.as_str())
        .map_err(|err| AppError::InvalidRedirect(err.to_string()))?;

    debug!(code = %code, url = %record.original_url, "redirecting");
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

fn decode_first<T: DeserializeOwned>(body: &[u8]) -> std::result::Result<T, String> {
    match serde_json::Deserializer::from_slice(body).into_iter::<T>().next() {
        Some(decoded) => decoded.map_err(|err| err.to_string()),
        None => Err("EOF while parsing a value".to_string()),
    }
}
