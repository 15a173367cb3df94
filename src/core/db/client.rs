/// Client Module
///
/// This module provides the connection lifecycle management and the minimal
/// statement-execution surface of sqlrun. A `SqlClient` owns at most one
/// live connection handle; `connect` and `disconnect` are the only state
/// transitions, and both tolerate repeated invocation.
use crate::config::ConnectionConfig;
use crate::core::db::driver::{MysqlDriver, SqlDriver, SqlHandle};
use crate::core::{Result, SqlRunError};

/// Manages one database connection and executes single SQL statements.
///
/// The client is synchronous and blocking: `connect` and `execute` block the
/// calling thread until the server responds or an error occurs. A client is
/// not designed for concurrent use from multiple threads; callers that need
/// parallelism should use one client per worker or serialize access
/// externally.
pub struct SqlClient {
    driver: Box<dyn SqlDriver>,
    handle: Option<Box<dyn SqlHandle>>,
}

impl SqlClient {
    /// Creates a client backed by the MySQL driver.
    pub fn new() -> Self {
        SqlClient::with_driver(Box::new(MysqlDriver))
    }

    /// Creates a client backed by an arbitrary driver implementation.
    ///
    /// Used by tests to substitute a fake driver; production code should
    /// prefer [`SqlClient::new`].
    pub fn with_driver(driver: Box<dyn SqlDriver>) -> Self {
        SqlClient {
            driver,
            handle: None,
        }
    }

    /// Connects to the configured server, authenticates, and selects the
    /// configured schema.
    ///
    /// Any existing handle is released before the new one is acquired, so a
    /// repeated `connect` replaces the session rather than leaking it.
    /// If any step fails, no handle is retained and the client stays
    /// disconnected.
    ///
    /// # Errors
    ///
    /// Returns `SqlRunError::Connection` (wrapping the driver diagnostic) if
    /// network resolution, authentication, or schema selection fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sqlrun::config::ConnectionConfig;
    /// use sqlrun::core::db::SqlClient;
    ///
    /// let mut client = SqlClient::new();
    /// client.connect(&ConnectionConfig::default())?;
    /// # Ok::<(), sqlrun::core::SqlRunError>(())
    /// ```
    pub fn connect(&mut self, config: &ConnectionConfig) -> Result<()> {
        // Release the prior handle before acquiring a new one.
        self.handle = None;

        let mut handle = self.driver.connect(
            &config.host,
            config.port,
            &config.username,
            &config.password,
        )?;
        handle.select_schema(&config.database)?;

        self.handle = Some(handle);
        Ok(())
    }

    /// Releases the connection handle if one is present.
    ///
    /// Idempotent: disconnecting an already disconnected client is a no-op.
    pub fn disconnect(&mut self) {
        self.handle = None;
    }

    /// Returns `true` if the client holds a live connection handle.
    pub fn is_connected(&self) -> bool {
        self.handle.is_some()
    }

    /// Sends one literal SQL statement to the server. No result rows are
    /// read back.
    ///
    /// # Errors
    ///
    /// Returns `SqlRunError::Connection` if no connection is established,
    /// and `SqlRunError::Statement` (wrapping the driver diagnostic) on
    /// syntax errors, constraint violations, or other server-side failures.
    pub fn execute(&mut self, statement: &str) -> Result<()> {
        self.live_handle()?.execute(statement)
    }

    /// Executes a statement with positional `?` placeholders bound
    /// server-side.
    ///
    /// This is the preferred way to embed untrusted values into a statement;
    /// see [`crate::sanitize::sanitize_for_literal`] for the legacy
    /// string-escaping path.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`SqlClient::execute`].
    pub fn execute_bound(&mut self, statement: &str, params: &[String]) -> Result<()> {
        self.live_handle()?.execute_bound(statement, params)
    }

    fn live_handle(&mut self) -> Result<&mut Box<dyn SqlHandle>> {
        self.handle.as_mut().ok_or_else(|| {
            SqlRunError::Connection("no connection established - call connect first".to_string())
        })
    }
}

impl Default for SqlClient {
    fn default() -> Self {
        SqlClient::new()
    }
}
