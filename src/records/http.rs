//! HTTP handlers for the `/api/*` endpoints.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::{Router, routing};
use headers::HeaderMapExt;

use crate::http::extract::{Json, QueryParams};
use crate::http::{HandlerError, HandlerResult, NoContent};
use crate::records::{self, Record, RecordStore};

/// Returns a router serving all record endpoints.
///
/// Every path answers unsupported methods with `405 Method Not Allowed`.
pub fn router<S>(store: S) -> Router
where
	S: RecordStore,
{
	Router::new()
		.route(
			"/api/records",
			// `get` alone would also answer `HEAD` with the listing
			routing::get(list::<S>)
				.head(method_not_allowed)
				.fallback(method_not_allowed),
		)
		.route("/api/create", routing::post(create::<S>).fallback(method_not_allowed))
		.route("/api/update", routing::post(update::<S>).fallback(method_not_allowed))
		.route("/api/delete", routing::delete(delete::<S>).fallback(method_not_allowed))
		.with_state(store)
}

async fn method_not_allowed() -> HandlerError
{
	HandlerError::MethodNotAllowed
}

/// Every record as a JSON object, one per line.
#[instrument(level = "debug", skip(store), err(level = "debug"))]
async fn list<S>(State(store): State<S>) -> HandlerResult<Response>
where
	S: RecordStore,
{
	let records = store.list().await?;
	let lines = records
		.iter()
		.map(serde_json::to_string)
		.collect::<Result<Vec<_>, _>>()?;

	let mut response = lines.join("\n").into_response();
	response.headers_mut().typed_insert(headers::ContentType::json());

	Ok(response)
}

#[instrument(level = "debug", skip(store), err(level = "debug"))]
async fn create<S>(
	State(store): State<S>,
	Json(record): Json<Record>,
) -> HandlerResult<(http::StatusCode, String)>
where
	S: RecordStore,
{
	store.create(&record).await?;

	Ok((
		http::StatusCode::CREATED,
		format!("Created record with ID {} and AlertID {}", record.id, record.alert_id),
	))
}

#[instrument(level = "debug", skip(store), err(level = "debug"))]
async fn update<S>(State(store): State<S>, Json(record): Json<Record>) -> HandlerResult<String>
where
	S: RecordStore,
{
	let affected = store.update(&record).await?;

	if affected == 0 {
		warn!(id = record.id, alert_id = record.alert_id, "update did not match any record");
	}

	Ok(format!("Updated record with ID {} and AlertID {}", record.id, record.alert_id))
}

/// Deletes the `num_records` records with the smallest ids.
#[instrument(level = "debug", skip(store), err(level = "debug"))]
async fn delete<S>(State(store): State<S>, query: QueryParams) -> HandlerResult<NoContent>
where
	S: RecordStore,
{
	let count = query
		.first("num_records")
		.ok_or(HandlerError::MissingParameter("num_records"))?
		.parse::<i64>()
		.map_err(|_| HandlerError::InvalidParameter("num_records"))?;

	// negative counts delete nothing
	let count = u64::try_from(count).unwrap_or_default();

	records::delete_lowest(&store, count).await?;

	Ok(NoContent)
}
