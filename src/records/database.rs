//! SQL for the `alertlabel` table.
//!
//! The schema is owned elsewhere; ids are cast to `BIGINT` on the way out so both `integer` and
//! `bigint` columns decode into [`Record`].

use crate::database::{DatabaseResult, Executor};
use crate::records::Record;

/// Returns every row of the table.
#[instrument(level = "debug", skip(conn), err(level = "debug"))]
pub async fn select_all(conn: impl Executor<'_>) -> DatabaseResult<Vec<Record>>
{
	sqlx::query_as::<_, Record>(
		"SELECT
		   id::BIGINT AS id,
		   alertid::BIGINT AS alert_id,
		   label,
		   value
		 FROM alertlabel",
	)
	.fetch_all(conn)
	.await
	.map_err(Into::into)
}

/// Inserts a new row. Duplicate keys are reported by the database.
#[instrument(level = "debug", skip(conn), err(level = "debug"))]
pub async fn insert(conn: impl Executor<'_>, record: &Record) -> DatabaseResult<()>
{
	sqlx::query(
		"INSERT INTO alertlabel (id, alertid, label, value)
		 VALUES ($1, $2, $3, $4)",
	)
	.bind(record.id)
	.bind(record.alert_id)
	.bind(record.label.as_str())
	.bind(record.value.as_str())
	.execute(conn)
	.await?;

	Ok(())
}

/// Updates `label` and `value` of rows matching both `id` and `alertid`.
///
/// The returned count is 0 if nothing matched.
#[instrument(level = "debug", skip(conn), ret(level = "debug"), err(level = "debug"))]
pub async fn update(conn: impl Executor<'_>, record: &Record) -> DatabaseResult<u64>
{
	sqlx::query(
		"UPDATE alertlabel
		 SET label = $1,
		     value = $2
		 WHERE id = $3
		 AND alertid = $4",
	)
	.bind(record.label.as_str())
	.bind(record.value.as_str())
	.bind(record.id)
	.bind(record.alert_id)
	.execute(conn)
	.await
	.map(|result| result.rows_affected())
	.map_err(Into::into)
}

/// Deletes the row(s) with the smallest `id`.
#[instrument(level = "trace", skip(conn), ret(level = "trace"), err(level = "debug"))]
pub async fn delete_lowest_id(conn: impl Executor<'_>) -> DatabaseResult<u64>
{
	sqlx::query("DELETE FROM alertlabel WHERE id = (SELECT MIN(id) FROM alertlabel)")
		.execute(conn)
		.await
		.map(|result| result.rows_affected())
		.map_err(Into::into)
}
