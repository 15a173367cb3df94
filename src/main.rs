use sqlrun::config::{self, ConnectionConfig};
use sqlrun::core::db::SqlClient;
use sqlrun::sanitize::sanitize_for_literal;
use tracing::info;

fn main() {
    // Initialize the logging system using tracing subscriber
    tracing_subscriber::fmt::init();

    info!("Starting sqlrun...");

    // An optional first argument names a TOML config file; otherwise the
    // default localhost credentials are used.
    let args: Vec<String> = std::env::args().collect();
    let connection = match args.get(1) {
        Some(path) => match config::load_config(path) {
            Ok(config) => config.connection,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path, e);
                return;
            }
        },
        None => ConnectionConfig::default(),
    };

    let mut client = SqlClient::new();
    if let Err(e) = run_demo(&mut client, &connection) {
        // Errors are logged, not reflected in the exit status.
        eprintln!("{}", e);
    }
    client.disconnect();
}

/// Connects, inserts one row with an escaped literal, and reports success.
fn run_demo(client: &mut SqlClient, connection: &ConnectionConfig) -> sqlrun::Result<()> {
    client.connect(connection)?;
    println!("Connected to {}:{}", connection.host, connection.port);

    // Legacy path: escape the value and splice it into the statement text.
    // Bound parameters via execute_bound are the preferred alternative.
    let name = sanitize_for_literal("O'Brien");
    let statement = format!("INSERT INTO users (name) VALUES ('{}')", name);
    client.execute(&statement)?;

    println!("Executed: {}", statement);
    Ok(())
}
