// Core infrastructure modules
pub mod core;

// Feature-specific modules
pub mod config;
pub mod sanitize;

// Re-export the primary entry points at the crate root
pub use crate::config::{Config, ConnectionConfig};
pub use crate::core::db::SqlClient;
pub use crate::core::{Result, SqlRunError};
