use anyhow::{bail, Result};
use rusqlite::{params, Connection};
use tracing::info;

/// Version written to the `user_version` pragma after the migration pass.
const SCHEMA_VERSION: i64 = 1;

const CREATE_LOCAL_STORE_TABLE: &str =
    "CREATE TABLE local_store (key TEXT PRIMARY KEY, value TEXT NOT NULL)";

/// Brings the key-value store database up to the current schema version.
pub fn prepare_schema(conn: &Connection) -> Result<()> {
    let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    match version {
        0 => {
            info!("Initializing local store schema at version {SCHEMA_VERSION}");
            conn.execute(CREATE_LOCAL_STORE_TABLE, params![])?;
            conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        }
        SCHEMA_VERSION => {}
        other => bail!("Unsupported local store schema version {other}"),
    }
    Ok(())
}
