use super::schema::prepare_schema;
use super::store::{FavoritesStore, FAVORITES_KEY};
use crate::catalog::Song;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;
use tracing::warn;

/// Durable key-value backed favorites store.
///
/// The whole list lives as one JSON-encoded value under [`FAVORITES_KEY`];
/// every write is a single `INSERT OR REPLACE`, so readers never observe a
/// half-written list.
pub struct SqliteFavoritesStore {
    conn: Mutex<Connection>,
}

impl SqliteFavoritesStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<SqliteFavoritesStore> {
        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<SqliteFavoritesStore> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<SqliteFavoritesStore> {
        prepare_schema(&conn)?;
        Ok(SqliteFavoritesStore {
            conn: Mutex::new(conn),
        })
    }

    fn read_raw(&self) -> Result<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let value = conn
            .query_row(
                "SELECT value FROM local_store WHERE key = ?1",
                params![FAVORITES_KEY],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put_raw(&self, value: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT OR REPLACE INTO local_store (key, value) VALUES (?1, ?2)",
            params![FAVORITES_KEY, value],
        )?;
        Ok(())
    }
}

impl FavoritesStore for SqliteFavoritesStore {
    fn read_favorites(&self) -> Result<Vec<Song>> {
        let Some(stored) = self.read_raw()? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&stored) {
            Ok(favorites) => Ok(favorites),
            Err(err) => {
                warn!("Stored favorites are corrupt, resetting to an empty list: {err}");
                self.write_favorites(&[])?;
                Ok(Vec::new())
            }
        }
    }

    fn write_favorites(&self, favorites: &[Song]) -> Result<()> {
        let encoded = serde_json::to_string(favorites)?;
        self.put_raw(&encoded)
    }
}
