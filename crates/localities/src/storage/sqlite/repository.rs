//! SQLite locality store implementation.

use std::path::Path;

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use localities_core::locality::Locality;
use localities_core::storage::{LocalityStore, Result, StoreError};

use super::conversions::{locality_params, row_to_locality};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Location value that selects an in-memory database.
pub const IN_MEMORY_URI: &str = ":memory:";

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based locality store.
pub struct SqliteLocalityStore {
    conn: Connection,
}

impl SqliteLocalityStore {
    /// Creates a new store with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new store with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Opens the store named `database` under `uri`.
    ///
    /// A `uri` of `:memory:` opens an in-memory database; anything else is a
    /// directory holding `<database>.sqlite3`.
    pub async fn open(uri: &str, database: &str) -> Result<Self> {
        if uri == IN_MEMORY_URI {
            return Self::new_in_memory().await;
        }

        let path = Path::new(uri).join(format!("{database}.sqlite3"));
        let path = path.to_str().ok_or_else(|| {
            StoreError::ConnectionFailed(format!("Invalid database path under {uri}"))
        })?;

        Self::new(path).await
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| StoreError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl LocalityStore for SqliteLocalityStore {
    async fn find_all(&self) -> Result<Vec<Locality>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ALL_LOCALITIES)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_locality).map_err(wrap_err)?;

                let mut localities = Vec::new();
                for row_result in rows {
                    localities.push(row_result.map_err(wrap_err)?);
                }
                Ok(localities)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, None))
    }

    async fn find_by_code(&self, code: i64) -> Result<Option<Locality>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_LOCALITY_BY_CODE)
                    .map_err(wrap_err)?;
                match stmt.query_row([code], row_to_locality) {
                    Ok(locality) => Ok(Some(locality)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Some(code)))
    }

    async fn insert(&self, locality: &Locality) -> Result<()> {
        let code = locality.code;
        let params = locality_params(locality);

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_LOCALITY, params)
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Some(code)))
    }

    async fn update_by_code(&self, code: i64, replacement: &Locality) -> Result<u64> {
        let new_code = replacement.code;
        let (_, statistical_code, name, status, parent_code) = locality_params(replacement);

        self.conn
            .call(move |conn| {
                let matched = conn
                    .execute(
                        schema::UPDATE_LOCALITY_BY_CODE,
                        rusqlite::params![
                            code,
                            new_code,
                            statistical_code,
                            name,
                            status,
                            parent_code
                        ],
                    )
                    .map_err(wrap_err)?;
                Ok(matched as u64)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Some(new_code)))
    }

    async fn delete_by_code(&self, code: i64) -> Result<u64> {
        self.conn
            .call(move |conn| {
                let matched = conn
                    .execute(schema::DELETE_LOCALITY_BY_CODE, [code])
                    .map_err(wrap_err)?;
                Ok(matched as u64)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Some(code)))
    }

    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))
    }
}
