//! Labeled alert records, i.e. rows of the `alertlabel` table.

mod models;
pub use models::Record;

mod store;
pub use store::RecordStore;

pub mod database;
pub mod http;

use crate::database::DatabaseResult;

/// Deletes the record with the smallest `id`, `count` times.
///
/// The minimum is re-evaluated for every deletion. Statements are issued one after another
/// without a transaction, so an error leaves earlier deletions in place.
///
/// Returns the total number of deleted rows. Deleting from an empty table is not an error, so
/// this may be less than `count`.
#[instrument(level = "debug", skip(store), ret(level = "debug"), err(level = "debug"))]
pub async fn delete_lowest<S>(store: &S, count: u64) -> DatabaseResult<u64>
where
	S: RecordStore,
{
	let mut deleted = 0;

	for _ in 0..count {
		deleted += store.delete_lowest_id().await?;
	}

	Ok(deleted)
}
