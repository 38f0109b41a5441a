//! TMDb Similar - a Stremio metadata addon
//!
//! Serves "similar movies" lists from TMDb, cached in memory with a TTL.

pub mod addon;
pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use error::AddonError;
