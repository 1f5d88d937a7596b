//! The [`QueryParams`] [extractor].
//!
//! [extractor]: axum::extract

use std::borrow::Cow;
use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request;

/// The raw query string of a request.
///
/// Extraction never fails; a request without a query string has no parameters.
#[derive(Debug, Default, Clone)]
pub struct QueryParams(Option<String>);

impl QueryParams
{
	pub fn new(query: Option<&str>) -> Self
	{
		Self(query.map(String::from))
	}

	/// Returns the decoded value of the first parameter called `name`.
	///
	/// Later occurrences are ignored. An empty value counts as missing.
	pub fn first(&self, name: &str) -> Option<Cow<'_, str>>
	{
		let query = self.0.as_deref()?;

		url::form_urlencoded::parse(query.as_bytes())
			.find(|(key, _)| key == name)
			.map(|(_, value)| value)
			.filter(|value| !value.is_empty())
	}
}

impl<S> FromRequestParts<S> for QueryParams
where
	S: Send + Sync,
{
	type Rejection = Infallible;

	async fn from_request_parts(
		parts: &mut request::Parts,
		_state: &S,
	) -> Result<Self, Self::Rejection>
	{
		Ok(Self::new(parts.uri.query()))
	}
}
