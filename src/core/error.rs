/// sqlrun Error Module
///
/// This module defines the error types for the sqlrun crate. It provides
/// structured error handling with proper error propagation and
/// user-friendly error messages.
use thiserror::Error;

/// Error type covering the failure scenarios that can occur within sqlrun:
/// - Connection lifecycle (authentication, network resolution, schema selection)
/// - Statement execution against an established connection
/// - Configuration loading and validation
/// - File system operations
///
/// The `Connection` and `Statement` variants wrap the underlying driver's
/// diagnostic message as context. sqlrun never recovers from these locally;
/// they always propagate to the caller, which decides whether to log and
/// continue or abort.
#[derive(Error, Debug)]
pub enum SqlRunError {
    /// Connection not established, authentication failure, or
    /// schema-selection failure
    #[error("Connection error: {0}")]
    Connection(String),

    /// Any failure while a statement is sent over an established connection
    /// (syntax errors, constraint violations, server-side failures)
    #[error("Statement error: {0}")]
    Statement(String),

    /// Configuration loading and validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system and I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result to use SqlRunError as the error type.
///
/// This provides a consistent error type across the entire crate
/// instead of using `Result<T, String>` or mixed error types.
pub type Result<T> = std::result::Result<T, SqlRunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let conn_err = SqlRunError::Connection("access denied for user".to_string());
        assert!(conn_err.to_string().contains("Connection error"));
        assert!(conn_err.to_string().contains("access denied"));

        let stmt_err = SqlRunError::Statement("syntax error near 'VALEUS'".to_string());
        assert!(stmt_err.to_string().contains("Statement error"));

        let config_err = SqlRunError::Config("missing [connection] table".to_string());
        assert!(config_err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SqlRunError = io_err.into();
        match err {
            SqlRunError::Io(_) => {}
            _ => panic!("Expected IO error"),
        }
    }
}
