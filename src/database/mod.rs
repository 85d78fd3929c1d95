pub mod action;
pub mod model;
pub mod schema;

use diesel::{connection::SimpleConnection, prelude::*, r2d2};

pub type Pool = r2d2::Pool<r2d2::ConnectionManager<SqliteConnection>>;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("couldn't get db connection from pool: {0}")]
    Pool(#[from] r2d2::PoolError),

    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),
}

const CREATE_USERS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        phone_number TEXT NOT NULL,
        password TEXT NOT NULL
    );
";

/// Initialize database connection pool from a connection string.
pub fn initialize_db_pool(conn_spec: &str) -> Result<Pool> {
    let manager = r2d2::ConnectionManager::<SqliteConnection>::new(conn_spec);

    let pool = r2d2::Pool::builder().build(manager)?;

    Ok(pool)
}

/// Single-connection pool over an in-memory database. Every connection to
/// `:memory:` opens a fresh database, so the one connection must never be
/// recycled.
pub fn initialize_memory_pool() -> Result<Pool> {
    let manager = r2d2::ConnectionManager::<SqliteConnection>::new(":memory:");

    let pool = r2d2::Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .build(manager)?;

    Ok(pool)
}

/// Creates the `users` table when it is missing.
pub fn initialize_schema(pool: &Pool) -> Result<()> {
    let mut conn = pool.get()?;
    conn.batch_execute(CREATE_USERS_TABLE)?;

    Ok(())
}
