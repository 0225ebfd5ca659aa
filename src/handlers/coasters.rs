use axum::{
    body::Body,
    extract::State,
    http::{
        header::{CONTENT_TYPE, LOCATION},
        HeaderMap, HeaderValue, StatusCode, Uri,
    },
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};
use crate::store::{coaster_path, Coaster, CoasterStore};

const APPLICATION_JSON: &str = "application/json";

/// Target of a `/coasters/...` request, taken from the raw path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoasterPath<'a> {
    Random,
    Id(&'a str),
}

impl<'a> CoasterPath<'a> {
    /// The path must split on `/` into exactly `["", "coasters", <id>]`
    pub fn parse(path: &'a str) -> Option<Self> {
        let parts: Vec<&str> = path.split('/').collect();
        match parts.as_slice() {
            ["", "coasters", "random"] => Some(CoasterPath::Random),
            ["", "coasters", id] => Some(CoasterPath::Id(id)),
            _ => None,
        }
    }
}

/// GET /coasters - every stored coaster as a JSON array
pub async fn list(State(state): State<AppState>) -> ApiResult<Response> {
    let coasters = state.coasters.list_all();
    tracing::debug!("Listing {} coasters", coasters.len());
    json_response(StatusCode::OK, &coasters)
}

/// POST /coasters - store a new coaster.
///
/// The body is read before the content type is checked. A body that does not
/// decode is rejected with 400 and nothing is stored. On success the stored
/// record is returned with 201 and a `location` header.
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Body,
) -> ApiResult<Response> {
    let bytes = axum::body::to_bytes(body, state.max_body_bytes).await?;

    let content_type = headers
        .get(CONTENT_TYPE)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default();

    if content_type != APPLICATION_JSON {
        tracing::warn!("Rejected coaster with content-type '{}'", content_type);
        return Err(ApiError::unsupported_media_type(content_type));
    }

    let input: Coaster = serde_json::from_slice(&bytes).map_err(|e| {
        tracing::warn!("Rejected malformed coaster body: {}", e);
        ApiError::bad_request(e.to_string())
    })?;

    let coaster = state.coasters.insert(input);
    tracing::info!("Created coaster {} ({})", coaster.id, coaster.name);

    let location = HeaderValue::from_str(&coaster.path())
        .map_err(|e| ApiError::internal_server_error(e.to_string()))?;

    let mut response = json_response(StatusCode::CREATED, &coaster)?;
    response.headers_mut().insert(LOCATION, location);
    Ok(response)
}

/// GET /coasters/:id and GET /coasters/random
pub async fn show(State(state): State<AppState>, uri: Uri) -> ApiResult<Response> {
    match CoasterPath::parse(uri.path()).ok_or(ApiError::NotFound)? {
        CoasterPath::Random => redirect_random(&state.coasters),
        CoasterPath::Id(id) => {
            let coaster = state.coasters.get_by_id(id).ok_or_else(|| {
                tracing::debug!("Coaster {} not found", id);
                ApiError::NotFound
            })?;
            json_response(StatusCode::OK, &coaster)
        }
    }
}

/// Answer for any method a coaster route does not handle
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

// Redirect to a uniformly chosen coaster instead of serving it directly, so
// the client lands on the record's canonical URL.
fn redirect_random(store: &CoasterStore) -> ApiResult<Response> {
    let id = store.pick_random_id().ok_or(ApiError::NotFound)?;
    Ok((StatusCode::FOUND, [(LOCATION, coaster_path(&id))]).into_response())
}

// Serialize before building the response so a failure can still become a
// 500 carrying the error text.
fn json_response<T: Serialize>(status: StatusCode, value: &T) -> ApiResult<Response> {
    let body = serde_json::to_vec(value)?;
    Ok((status, [(CONTENT_TYPE, APPLICATION_JSON)], body).into_response())
}
