use axum::{extract::State, http::HeaderMap, response::Html};

use crate::app::AppState;
use crate::error::ApiResult;

const ADMIN_PAGE: &str = "<html><h1>Super secret admin portal</h1></html>";

/// /admin - static page behind HTTP Basic auth
pub async fn portal(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Html<&'static str>> {
    state.admin.authorize(&headers)?;
    tracing::info!("Admin portal accessed");
    Ok(Html(ADMIN_PAGE))
}
