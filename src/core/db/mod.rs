/// Database Module
///
/// This module provides the database functionality for sqlrun, organized
/// into focused submodules for separation of concerns.
///
/// ## Architecture
///
/// The database layer is split into two concerns:
/// - **Driver Boundary** (`driver.rs`): The capability surface a SQL driver
///   must expose, plus the MySQL-backed production implementation
/// - **Client** (`client.rs`): Connection lifecycle and the minimal
///   statement-execution surface built on top of a driver
///
/// ## Error Handling
///
/// All database operations use the standardized `SqlRunError` type for
/// consistent error propagation.
pub mod client;
pub mod driver;

pub use client::*;
pub use driver::*;
