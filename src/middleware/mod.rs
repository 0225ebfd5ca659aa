pub mod auth;

pub use auth::{extract_basic_auth, BasicCredentials};
