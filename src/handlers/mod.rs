// Request handlers, one module per resource.
pub mod admin;
pub mod coasters;
pub mod health;
