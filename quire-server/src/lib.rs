//! HTTP display server for a processed work
//!
//! A small read-only service over one assembled structural tree: the
//! structure outline and chapters render as HTML pages, the character
//! queries return JSON. Every request runs a fresh cursor over the shared
//! immutable tree; nothing is cached and nothing is mutated.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ServerError;
pub use routes::router;
pub use server::{serve, serve_blocking, ServerConfig};
pub use state::AppState;
