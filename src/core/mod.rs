/// Core Module for sqlrun
///
/// This module contains the fundamental components that form the backbone
/// of the sqlrun crate: the database client with its driver boundary, and
/// the shared error types used for propagation throughout.

pub mod db;
pub mod error;

// Re-export commonly used types for convenience
pub use error::{Result, SqlRunError};
