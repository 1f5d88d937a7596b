use std::error::Error;

use axum::response::{IntoResponse, Response};

use crate::database::DatabaseError;
use crate::http::extract::JsonRejection;

pub type HandlerResult<T> = Result<T, HandlerError>;

/// Every way a request can fail once it reached a handler.
///
/// The `Display` output is exactly what the client receives as the response body.
#[derive(Debug, Display, Error, From)]
pub enum HandlerError
{
	/// A required query parameter was absent or empty.
	#[display("Missing '{_0}' parameter")]
	#[from(ignore)]
	MissingParameter(#[error(not(source))] &'static str),

	/// A query parameter could not be parsed.
	#[display("Invalid '{_0}' parameter")]
	#[from(ignore)]
	InvalidParameter(#[error(not(source))] &'static str),

	/// The request body could not be turned into the expected JSON value.
	#[display("{_0}")]
	Json(JsonRejection),

	/// The path exists, but does not accept the request's method.
	#[display("Method not allowed")]
	#[from(ignore)]
	MethodNotAllowed,

	#[display("{_0}")]
	Database(DatabaseError),

	#[display("{_0}")]
	EncodeResponse(serde_json::Error),
}

impl HandlerError
{
	pub fn status(&self) -> http::StatusCode
	{
		match self {
			Self::MissingParameter(_) | Self::InvalidParameter(_) => http::StatusCode::BAD_REQUEST,
			Self::Json(rejection) => rejection.status(),
			Self::MethodNotAllowed => http::StatusCode::METHOD_NOT_ALLOWED,
			Self::Database(_) | Self::EncodeResponse(_) => {
				http::StatusCode::INTERNAL_SERVER_ERROR
			},
		}
	}
}

impl IntoResponse for HandlerError
{
	fn into_response(self) -> Response
	{
		match self {
			Self::Database(ref error) if error.is_unique_violation() => {
				warn!(error = &*error as &dyn Error, "constraint violation");
			},
			Self::Database(ref error) => {
				error!(error = &*error as &dyn Error, "database error");
			},
			Self::EncodeResponse(ref error) => {
				error!(error = &*error as &dyn Error, "failed to encode response");
			},
			ref error => {
				debug!(error = error as &dyn Error, "rejecting request");
			},
		}

		let mut response = (self.status(), format!("{self}\n")).into_response();

		response.headers_mut().insert(
			http::header::X_CONTENT_TYPE_OPTIONS,
			http::HeaderValue::from_static("nosniff"),
		);

		response
	}
}

#[cfg(test)]
mod tests
{
	use http_body_util::BodyExt;

	use super::*;
	use crate::testing;

	#[tokio::test]
	async fn renders_message_as_plain_text() -> testing::Result
	{
		let response = HandlerError::MissingParameter("num_records").into_response();

		testing::assert_eq!(response.status(), http::StatusCode::BAD_REQUEST);
		testing::assert_eq!(
			response.headers().get(http::header::CONTENT_TYPE),
			Some(&http::HeaderValue::from_static("text/plain; charset=utf-8")),
		);
		testing::assert_eq!(
			response.headers().get(http::header::X_CONTENT_TYPE_OPTIONS),
			Some(&http::HeaderValue::from_static("nosniff")),
		);

		let body = response.into_body().collect().await?.to_bytes();

		testing::assert_eq!(&body[..], b"Missing 'num_records' parameter\n");

		Ok(())
	}

	#[test]
	fn database_errors_are_internal() -> testing::Result
	{
		let error = HandlerError::from(DatabaseError::from(sqlx::Error::PoolTimedOut));

		testing::assert_eq!(error.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
		testing::assert_eq!(error.to_string(), sqlx::Error::PoolTimedOut.to_string());

		Ok(())
	}

	#[test]
	fn sources_and_conversions() -> testing::Result
	{
		let encode_error = serde_json::from_str::<u8>("x").map_err(HandlerError::from);

		testing::assert_matches!(encode_error, Err(HandlerError::EncodeResponse(_)));
		testing::assert!(HandlerError::InvalidParameter("num_records").source().is_none());
		testing::assert!(HandlerError::MethodNotAllowed.source().is_none());
		testing::assert!(
			HandlerError::from(DatabaseError::from(sqlx::Error::PoolTimedOut))
				.source()
				.is_some()
		);

		Ok(())
	}

	#[test]
	fn method_not_allowed() -> testing::Result
	{
		testing::assert_eq!(
			HandlerError::MethodNotAllowed.status(),
			http::StatusCode::METHOD_NOT_ALLOWED,
		);
		testing::assert_eq!(HandlerError::MethodNotAllowed.to_string(), "Method not allowed");

		Ok(())
	}
}
