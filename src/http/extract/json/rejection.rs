use axum::extract::rejection::BytesRejection;
use axum::response::{IntoResponse, Response};

use crate::http::HandlerError;

/// Rejection for the [`Json`](super::Json) extractor.
#[derive(Debug, Display, Error, From)]
pub enum JsonRejection
{
	/// The body could not be read, e.g. because it exceeded the size limit.
	#[display("{_0}")]
	BufferBody(BytesRejection),

	#[display("{_0}")]
	Deserialize(serde_json::Error),
}

impl JsonRejection
{
	pub fn status(&self) -> http::StatusCode
	{
		match self {
			Self::BufferBody(rejection) => rejection.status(),
			Self::Deserialize(_) => http::StatusCode::BAD_REQUEST,
		}
	}
}

impl IntoResponse for JsonRejection
{
	fn into_response(self) -> Response
	{
		HandlerError::from(self).into_response()
	}
}
