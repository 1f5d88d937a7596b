use serde::{Deserialize, Serialize};

/// A row of the `alertlabel` table.
///
/// Neither `id` nor `alert_id` is guaranteed to be unique by this service; any such guarantee
/// lives in the database schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Record
{
	pub id: i64,

	/// The alert this label belongs to (column `alertid`).
	pub alert_id: i64,

	pub label: String,
	pub value: String,
}
