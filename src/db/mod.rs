mod projects;
mod reports;
mod tasks;
mod team;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{StoreError, StoreResult};

const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS projects (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT,
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        status TEXT NOT NULL,
        progress REAL NOT NULL DEFAULT 0
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS team_members (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        role TEXT NOT NULL,
        email TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY,
        project_id INTEGER NOT NULL REFERENCES projects (id),
        name TEXT NOT NULL,
        description TEXT,
        status TEXT NOT NULL,
        priority TEXT NOT NULL,
        start_date TEXT NOT NULL,
        due_date TEXT NOT NULL,
        assigned_to INTEGER REFERENCES team_members (id),
        progress REAL NOT NULL DEFAULT 0
    )
    "#,
];

/// Handle to the single embedded project database
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if needed) the database at `database_url` and ensure the schema exists
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // One writer, one connection; never recycled so in-memory databases persist.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.ensure_schema().await?;
        Ok(db)
    }

    /// A private, empty database living for as long as this handle
    pub async fn in_memory() -> StoreResult<Self> {
        Self::connect("sqlite::memory:").await
    }

    /// Get a reference to the connection pool
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn ensure_schema(&self) -> StoreResult<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(self.get_pool()).await?;
        }
        debug!("schema ready");
        Ok(())
    }

    async fn count(&self, sql: &str) -> StoreResult<i64> {
        let (count,): (i64,) = sqlx::query_as(sql).fetch_one(self.get_pool()).await?;
        Ok(count)
    }

    async fn exists(&self, table: &'static str, entity: &'static str, id: i64) -> StoreResult<()> {
        let sql = format!("SELECT COUNT(*) FROM {table} WHERE id = ?");
        let (count,): (i64,) = sqlx::query_as(&sql)
            .bind(id)
            .fetch_one(self.get_pool())
            .await?;
        if count == 0 {
            return Err(StoreError::not_found(entity, id));
        }
        Ok(())
    }
}

/// Open the configured database
pub async fn init(config: &Config) -> StoreResult<Database> {
    let db = Database::connect(config.database_url()).await?;
    info!(url = config.database_url(), "database ready");
    Ok(db)
}
