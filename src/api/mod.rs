//! API Module
//!
//! HTTP handlers and routing for the addon.
//!
//! # Endpoints
//! - `GET /manifest.json` - Addon manifest
//! - `GET /meta/:type/:id` - Similar movies for a movie id
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
