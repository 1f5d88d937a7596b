//! Database plumbing.
//!
//! Everything that talks to Postgres goes through the [`ConnectionPool`] defined here.

mod error;
pub use error::{DatabaseError, DatabaseResult};

mod pool;
pub use pool::ConnectionPool;

pub type Driver = sqlx::Postgres;

pub use sqlx::postgres::PgExecutor as Executor;
