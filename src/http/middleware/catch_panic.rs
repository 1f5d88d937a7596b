//! Turns panicking handlers into `500 Internal Server Error` responses.

use std::any::Any;

use axum::body::Body;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

const RESPONSE_BODY: &str = "something unexpected happened; please report this incident\n";

/// Creates a `tower::Layer` that catches panics in its inner service.
pub fn layer() -> CatchPanicLayer<PanicResponse>
{
	CatchPanicLayer::custom(PanicResponse)
}

#[derive(Debug, Clone, Copy)]
pub struct PanicResponse;

impl ResponseForPanic for PanicResponse
{
	type ResponseBody = Body;

	fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> http::Response<Body>
	{
		let panic_message = err
			.downcast_ref::<String>()
			.map(String::as_str)
			.or_else(|| err.downcast_ref::<&str>().copied());

		error!(target: "alertlabel_api::http", ?panic_message, "handler panicked");

		let mut response = http::Response::new(Body::from(RESPONSE_BODY));
		*response.status_mut() = http::StatusCode::INTERNAL_SERVER_ERROR;
		response
	}
}
