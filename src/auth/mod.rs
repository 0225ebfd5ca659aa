use std::sync::Arc;

use axum::http::HeaderMap;

use crate::error::ApiError;
use crate::middleware::extract_basic_auth;

/// The only username accepted by the admin portal
pub const ADMIN_USER: &str = "admin";

/// Shared admin secret, fixed for the lifetime of the process
#[derive(Clone)]
pub struct AdminPortal {
    password: Arc<str>,
}

impl std::fmt::Debug for AdminPortal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminPortal").finish_non_exhaustive()
    }
}

impl AdminPortal {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: Arc::from(password.into()),
        }
    }

    /// Check the request's Basic credentials. Every request is checked on
    /// its own; nothing is remembered between calls.
    pub fn authorize(&self, headers: &HeaderMap) -> Result<(), ApiError> {
        let creds = extract_basic_auth(headers).map_err(|msg| {
            tracing::warn!("Admin login rejected: {}", msg);
            ApiError::Unauthorized
        })?;

        if creds.username != ADMIN_USER || creds.password != *self.password {
            tracing::warn!("Admin login rejected for user '{}'", creds.username);
            return Err(ApiError::Unauthorized);
        }

        Ok(())
    }
}
