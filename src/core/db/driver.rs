/// Driver Boundary Module
///
/// This module defines the capability surface sqlrun requires from a SQL
/// driver, and provides the production implementation backed by the `mysql`
/// crate. The client depends only on these traits, not on a specific driver,
/// which keeps the connection lifecycle testable without a live server.
use crate::core::{Result, SqlRunError};
use mysql::prelude::Queryable;
use mysql::{Conn, OptsBuilder};

/// A live, authenticated session with a database server.
///
/// Handles are created by [`SqlDriver::connect`] and released by dropping
/// them. A handle is exclusively owned by the client that created it and is
/// not designed for concurrent use.
pub trait SqlHandle {
    /// Selects the default schema for subsequent statements.
    ///
    /// # Errors
    ///
    /// Returns `SqlRunError::Connection` if the schema does not exist or the
    /// authenticated principal may not use it.
    fn select_schema(&mut self, schema: &str) -> Result<()>;

    /// Sends one literal SQL statement for execution. No result rows are
    /// read back.
    ///
    /// # Errors
    ///
    /// Returns `SqlRunError::Statement` on syntax errors, constraint
    /// violations, or server-side failures.
    fn execute(&mut self, statement: &str) -> Result<()>;

    /// Executes a statement with positional `?` placeholders bound
    /// server-side. This is the preferred way to embed untrusted values.
    ///
    /// # Errors
    ///
    /// Returns `SqlRunError::Statement` on preparation or execution failure.
    fn execute_bound(&mut self, statement: &str, params: &[String]) -> Result<()>;
}

/// Factory for connection handles.
pub trait SqlDriver {
    /// Opens a new authenticated session to `host:port`.
    ///
    /// Blocks the calling thread until the server responds or an error
    /// occurs; no timeout is imposed here.
    ///
    /// # Errors
    ///
    /// Returns `SqlRunError::Connection` if network resolution or
    /// authentication fails.
    fn connect(
        &self,
        host: &str,
        port: u16,
        username: &str,
        secret: &str,
    ) -> Result<Box<dyn SqlHandle>>;
}

/// Production driver backed by the `mysql` crate.
#[derive(Debug, Default)]
pub struct MysqlDriver;

impl SqlDriver for MysqlDriver {
    fn connect(
        &self,
        host: &str,
        port: u16,
        username: &str,
        secret: &str,
    ) -> Result<Box<dyn SqlHandle>> {
        let opts = OptsBuilder::new()
            .ip_or_hostname(Some(host))
            .tcp_port(port)
            .user(Some(username))
            .pass(Some(secret));

        let conn = Conn::new(opts).map_err(|e| SqlRunError::Connection(e.to_string()))?;

        Ok(Box::new(MysqlHandle { conn }))
    }
}

/// Connection handle wrapping a live `mysql::Conn`.
///
/// The underlying session is closed when the handle is dropped.
struct MysqlHandle {
    conn: Conn,
}

impl SqlHandle for MysqlHandle {
    fn select_schema(&mut self, schema: &str) -> Result<()> {
        // Schema selection failures are connection-establishment failures,
        // not statement failures.
        self.conn
            .query_drop(format!("USE `{}`", schema))
            .map_err(|e| SqlRunError::Connection(e.to_string()))
    }

    fn execute(&mut self, statement: &str) -> Result<()> {
        self.conn
            .query_drop(statement)
            .map_err(|e| SqlRunError::Statement(e.to_string()))
    }

    fn execute_bound(&mut self, statement: &str, params: &[String]) -> Result<()> {
        self.conn
            .exec_drop(statement, params.to_vec())
            .map_err(|e| SqlRunError::Statement(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_to_unreachable_address_fails() {
        let driver = MysqlDriver;
        // Port 1 is never a MySQL server; the connect attempt must surface
        // a Connection error rather than panic or hang.
        let result = driver.connect("127.0.0.1", 1, "user", "secret");
        assert!(result.is_err());
        match result.err().unwrap() {
            SqlRunError::Connection(_) => {}
            other => panic!("Expected Connection error, got: {other:?}"),
        }
    }
}
