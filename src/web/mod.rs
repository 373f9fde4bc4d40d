//! Web API module for uninews.
//!
//! Exposes the same controls as the command line over HTTP: edit and save
//! settings, run a search for a date range and download the last result
//! as CSV.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
