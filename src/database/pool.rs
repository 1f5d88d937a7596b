use std::fmt;

use sqlx::pool::PoolOptions;

use crate::config::DatabaseConfig;
use crate::database::{DatabaseResult, Driver};

/// A pool of database connections.
#[derive(Clone)]
pub struct ConnectionPool(sqlx::Pool<Driver>);

impl ConnectionPool
{
	/// Initializes a new pool by connecting to the database described by `config`.
	///
	/// `min_connections` connections will be opened (and kept around) immediately.
	/// The pool will never open more than `max_connections`.
	///
	/// At least one connection is established before this function returns, so an unreachable
	/// database is reported here rather than on the first request.
	#[instrument(err)]
	pub async fn connect(config: &DatabaseConfig) -> DatabaseResult<Self>
	{
		let url = config
			.url()
			.map_err(|err| sqlx::Error::Configuration(Box::new(err)))?;
		let pool = PoolOptions::new()
			.min_connections(config.min_connections)
			.max_connections(config.max_connections.get())
			.connect(url.as_str())
			.await?;

		Ok(Self(pool))
	}

	/// Wraps an existing [`sqlx::Pool`].
	pub fn from_raw(pool: sqlx::Pool<Driver>) -> Self
	{
		Self(pool)
	}

	/// Returns the underlying [`sqlx::Pool`].
	pub fn as_raw(&self) -> &sqlx::Pool<Driver>
	{
		&self.0
	}

	/// Closes all connections.
	///
	/// Outstanding connections are waited on before this returns.
	pub async fn close(&self)
	{
		self.0.close().await;
	}
}

impl fmt::Debug for ConnectionPool
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt.debug_struct("ConnectionPool")
			.field("size", &self.0.size())
			.field("idle", &self.0.num_idle())
			.finish()
	}
}
