//! Utilities for unit tests.

use std::sync::Arc;

use axum::body::Body;
use http_body_util::BodyExt;
use tokio::sync::Mutex;
use tower::ServiceExt;

use crate::database::{DatabaseError, DatabaseResult};
use crate::records::{Record, RecordStore};

mod macros;
pub(crate) use macros::{assert, assert_eq, assert_matches};

pub(crate) type Error = anyhow::Error;
pub(crate) type Result<T = (), E = Error> = std::result::Result<T, E>;

/// An in-memory [`RecordStore`] that behaves like an `alertlabel` table with a primary key on
/// `id`.
///
/// Records are kept in insertion order.
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryStore
{
	rows: Arc<Mutex<Vec<Record>>>,
}

impl MemoryStore
{
	pub(crate) fn with_records(records: impl IntoIterator<Item = Record>) -> Self
	{
		Self { rows: Arc::new(Mutex::new(records.into_iter().collect())) }
	}

	/// Returns a snapshot of all rows.
	pub(crate) async fn rows(&self) -> Vec<Record>
	{
		self.rows.lock().await.clone()
	}

	/// Returns the ids of all rows, in insertion order.
	pub(crate) async fn ids(&self) -> Vec<i64>
	{
		self.rows.lock().await.iter().map(|row| row.id).collect()
	}
}

impl RecordStore for MemoryStore
{
	async fn list(&self) -> DatabaseResult<Vec<Record>>
	{
		Ok(self.rows().await)
	}

	async fn create(&self, record: &Record) -> DatabaseResult<()>
	{
		let mut rows = self.rows.lock().await;

		if rows.iter().any(|row| row.id == record.id) {
			return Err(DatabaseError::from(sqlx::Error::Protocol(format!(
				"duplicate key value violates unique constraint \"alertlabel_pkey\": id={}",
				record.id,
			))));
		}

		rows.push(record.clone());

		Ok(())
	}

	async fn update(&self, record: &Record) -> DatabaseResult<u64>
	{
		let mut affected = 0;

		for row in self.rows.lock().await.iter_mut() {
			if row.id == record.id && row.alert_id == record.alert_id {
				row.label.clone_from(&record.label);
				row.value.clone_from(&record.value);
				affected += 1;
			}
		}

		Ok(affected)
	}

	async fn delete_lowest_id(&self) -> DatabaseResult<u64>
	{
		let mut rows = self.rows.lock().await;
		let Some(min) = rows.iter().map(|row| row.id).min() else {
			return Ok(0);
		};

		let before = rows.len();
		rows.retain(|row| row.id != min);

		Ok(u64::try_from(before - rows.len()).unwrap_or(u64::MAX))
	}
}

/// A [`RecordStore`] whose every operation fails, as if the database were unreachable.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BrokenStore;

impl BrokenStore
{
	pub(crate) const MESSAGE: &'static str = "pool timed out while waiting for an open connection";

	fn error() -> DatabaseError
	{
		DatabaseError::from(sqlx::Error::Protocol(String::from(Self::MESSAGE)))
	}
}

impl RecordStore for BrokenStore
{
	async fn list(&self) -> DatabaseResult<Vec<Record>>
	{
		Err(Self::error())
	}

	async fn create(&self, _: &Record) -> DatabaseResult<()>
	{
		Err(Self::error())
	}

	async fn update(&self, _: &Record) -> DatabaseResult<u64>
	{
		Err(Self::error())
	}

	async fn delete_lowest_id(&self) -> DatabaseResult<u64>
	{
		Err(Self::error())
	}
}

/// A response, fully buffered.
#[derive(Debug)]
pub(crate) struct TestResponse
{
	pub(crate) status: http::StatusCode,
	pub(crate) headers: http::HeaderMap,
	pub(crate) body: String,
}

/// Sends a single request through `router` and buffers the response.
pub(crate) async fn send(router: axum::Router, request: http::Request<Body>) -> Result<TestResponse>
{
	let response = router.oneshot(request).await?;
	let (parts, body) = response.into_parts();
	let bytes = body.collect().await?.to_bytes();

	Ok(TestResponse {
		status: parts.status,
		headers: parts.headers,
		body: String::from_utf8(bytes.to_vec())?,
	})
}

/// Builds a request with a JSON body.
pub(crate) fn json_request(
	method: http::Method,
	uri: &str,
	body: &str,
) -> Result<http::Request<Body>>
{
	http::Request::builder()
		.method(method)
		.uri(uri)
		.header(http::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
		.body(Body::from(String::from(body)))
		.map_err(Into::into)
}

/// Builds a request without a body.
pub(crate) fn empty_request(method: http::Method, uri: &str) -> Result<http::Request<Body>>
{
	http::Request::builder()
		.method(method)
		.uri(uri)
		.body(Body::empty())
		.map_err(Into::into)
}
