//! SQLite connection pooling helpers.

use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError, PooledConnection};

/// Shared r2d2 pool over SQLite connections.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
/// A single connection checked out of the [`DbPool`].
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Build a connection pool for the given SQLite database path or URL.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder().build(manager)
}
