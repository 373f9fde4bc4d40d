//! Middleware for the Web API.

pub mod cors;

pub use cors::create_cors_layer;
