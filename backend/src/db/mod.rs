//! # Persistence Layer
//!
//! A single SQLite connection shared by every actix worker. `rusqlite` is a
//! blocking API, so request handlers call into `Database` from
//! `tokio::task::spawn_blocking` (see `services::api::v1::replace_me`).
//!
//! ## Tables
//! - `example`: the resource listed by `GET /api/v1/replace-me`.
//! - `mtmexample`: linked to `example` through `example_mtmexample`.
//! - `otmexample`: owned by one `example` through `example_id`.

mod models;

use log::{debug, info};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex, MutexGuard};

pub use models::resource_names;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("database connection lock poisoned")]
    Poisoned,
}

/// Cloneable handle to the shared connection.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
    /// Prefix of every resource URI, see `utils::domain`.
    domain: &'static str,
    dev_mode: bool,
}

impl Database {
    /// Opens `db_uri` (`:memory:` or a file path) and turns on foreign keys,
    /// which SQLite leaves disabled by default.
    pub fn connect(db_uri: &str, dev_mode: bool) -> Result<Self, DbError> {
        let conn = if db_uri == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(db_uri)?
        };
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        info!("Connected to database {}", db_uri);

        Ok(Database {
            conn: Arc::new(Mutex::new(conn)),
            domain: crate::utils::domain(dev_mode),
            dev_mode,
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, DbError> {
        self.conn.lock().map_err(|_| DbError::Poisoned)
    }

    /// Creates every table. With `drop`, existing tables and data go first.
    pub fn create_all(&self, drop: bool) -> Result<(), DbError> {
        let conn = self.lock()?;
        if drop {
            conn.execute_batch(models::DROP_ALL)?;
        }
        conn.execute_batch(models::CREATE_ALL)?;
        Ok(())
    }

    /// Recreates the schema and inserts the example data set.
    pub fn seed(&self) -> Result<(), DbError> {
        info!("Seeding the database...");
        self.create_all(true)?;

        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO example (id, name) VALUES (?1, ?2), (?3, ?4)",
            params![1, "Some Example", 2, "Some Other Example"],
        )?;
        tx.execute(
            "INSERT INTO mtmexample (id, name) VALUES (?1, ?2)",
            params![1, "Some Many-to-Many Example"],
        )?;
        tx.execute(
            "INSERT INTO otmexample (id, example_id, name) VALUES (?1, ?2, ?3)",
            params![1, 1, "Some One-to-Many Example"],
        )?;
        tx.execute(
            "INSERT INTO example_mtmexample (example_id, mtmexample_id) VALUES (?1, ?2)",
            params![2, 1],
        )?;
        tx.commit()?;

        info!("Db seed complete!");
        Ok(())
    }

    /// Every `example` resource ordered by id, or only those named `name`.
    pub fn examples(
        &self,
        name: Option<&str>,
    ) -> Result<Vec<common::model::example::ExampleResource>, DbError> {
        if self.dev_mode {
            debug!("Listing examples (filter: {:?})", name);
        }
        let conn = self.lock()?;
        Ok(models::examples(&conn, self.domain, name)?)
    }
}

#[cfg(test)]
pub(crate) fn seeded_in_memory() -> Database {
    let db = Database::connect(":memory:", true).unwrap();
    db.seed().unwrap();
    db
}
