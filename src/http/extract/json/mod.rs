//! The [`Json`] [extractor].
//!
//! [extractor]: axum::extract

mod rejection;

use std::fmt;

use axum::extract::{FromRequest, Request};
use bytes::Bytes;
use serde::Deserialize;

pub use self::rejection::JsonRejection;

/// An extractor for JSON request bodies.
///
/// Unlike axum's own JSON extractor, the `Content-Type` header is not inspected; any body that
/// decodes is accepted. Unknown fields are ignored.
///
/// Keys are matched exactly: `{"ID": 1, "Label": "x", ..}` does not fill `id` or `label` and is
/// rejected for the missing fields. Clients must send the lowercase names.
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<T, S> FromRequest<S> for Json<T>
where
	T: for<'de> Deserialize<'de> + fmt::Debug,
	S: Send + Sync,
{
	type Rejection = JsonRejection;

	#[instrument(level = "debug", skip_all, ret(level = "debug"), err(level = "debug"))]
	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection>
	{
		let body = Bytes::from_request(req, state).await?;
		let value = serde_json::from_slice::<T>(&body[..])?;

		Ok(Self(value))
	}
}
