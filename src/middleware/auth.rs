use axum::http::{header::AUTHORIZATION, HeaderMap};
use base64::{engine::general_purpose, Engine as _};

/// Username and password sent with HTTP Basic authentication
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Extract Basic credentials from the Authorization header.
///
/// The scheme name is matched case-insensitively; the payload must be
/// standard base64 of `username:password` (the password may itself contain
/// colons).
pub fn extract_basic_auth(headers: &HeaderMap) -> Result<BasicCredentials, String> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    let encoded = match auth_str.get(..6) {
        Some(scheme) if scheme.eq_ignore_ascii_case("Basic ") => &auth_str[6..],
        _ => return Err("Authorization header must use Basic format".to_string()),
    };

    let decoded = general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| format!("Invalid Basic credentials encoding: {}", e))?;

    let decoded = String::from_utf8(decoded)
        .map_err(|_| "Basic credentials are not valid UTF-8".to_string())?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or_else(|| "Basic credentials missing ':' separator".to_string())?;

    Ok(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}
