use std::future::Future;

use crate::database::{ConnectionPool, DatabaseResult};
use crate::records::{self, Record};

/// Persistence for [`Record`]s.
///
/// The HTTP layer only ever talks to this trait, which lets tests swap the database for an
/// in-memory table.
pub trait RecordStore: Clone + Send + Sync + 'static
{
	/// Returns every record, in whatever order the store yields them.
	fn list(&self) -> impl Future<Output = DatabaseResult<Vec<Record>>> + Send;

	/// Inserts a new record exactly as given.
	fn create(&self, record: &Record) -> impl Future<Output = DatabaseResult<()>> + Send;

	/// Sets `label` and `value` of every record matching both `id` and `alert_id`.
	///
	/// Returns the number of affected rows.
	fn update(&self, record: &Record) -> impl Future<Output = DatabaseResult<u64>> + Send;

	/// Deletes the record(s) holding the smallest `id`.
	///
	/// Returns the number of affected rows, which is 0 if the store is empty.
	fn delete_lowest_id(&self) -> impl Future<Output = DatabaseResult<u64>> + Send;
}

impl RecordStore for ConnectionPool
{
	async fn list(&self) -> DatabaseResult<Vec<Record>>
	{
		records::database::select_all(self.as_raw()).await
	}

	async fn create(&self, record: &Record) -> DatabaseResult<()>
	{
		records::database::insert(self.as_raw(), record).await
	}

	async fn update(&self, record: &Record) -> DatabaseResult<u64>
	{
		records::database::update(self.as_raw(), record).await
	}

	async fn delete_lowest_id(&self) -> DatabaseResult<u64>
	{
		records::database::delete_lowest_id(self.as_raw()).await
	}
}
