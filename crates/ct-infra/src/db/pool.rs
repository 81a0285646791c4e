use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::{debug, info};

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Wait on a locked store file for at most this long before failing.
const BUSY_TIMEOUT_MS: u64 = 5000;
const POOL_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {BUSY_TIMEOUT_MS}; \
             PRAGMA journal_mode = WAL; \
             PRAGMA synchronous = NORMAL; \
             PRAGMA foreign_keys = ON;"
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Opens the SQLite file behind `database_url`, creating it when missing,
/// and brings its schema up to date.
///
/// Call once per store; every connection handed out afterwards runs in WAL
/// mode with the busy timeout and foreign-key enforcement.
pub fn init_db_pool(database_url: &str) -> Result<DbPool> {
    let pool = Pool::builder()
        .connection_timeout(POOL_CHECKOUT_TIMEOUT)
        .connection_customizer(Box::new(SqlitePragmas))
        .build(ConnectionManager::<SqliteConnection>::new(database_url))
        .with_context(|| format!("Cannot open SQLite database at {database_url}"))?;

    apply_migrations(&pool)?;
    Ok(pool)
}

fn apply_migrations(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get().context("No connection available for migrations")?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow!("Schema migration failed: {e}"))?;
    if applied.is_empty() {
        debug!("Store schema is current");
    } else {
        info!(count = applied.len(), "Applied store migrations");
    }

    Ok(())
}
