use tower_http::request_id::{
	MakeRequestId,
	PropagateRequestIdLayer,
	RequestId,
	SetRequestIdLayer,
};
use ulid::Ulid;

/// Creates a `tower::Layer` that generates an ID for every request and injects it into both its
/// extensions and its `x-request-id` header.
pub fn set_layer() -> SetRequestIdLayer<impl MakeRequestId + Clone>
{
	SetRequestIdLayer::x_request_id(MakeUlidRequestId)
}

/// Creates a `tower::Layer` that copies the `x-request-id` header from the request to the
/// response.
///
/// This should be used together with [`set_layer()`].
pub fn propagate_layer() -> PropagateRequestIdLayer
{
	PropagateRequestIdLayer::x_request_id()
}

#[derive(Debug, Clone, Copy)]
struct MakeUlidRequestId;

impl MakeRequestId for MakeUlidRequestId
{
	fn make_request_id<B>(&mut self, _: &http::Request<B>) -> Option<RequestId>
	{
		Ulid::new()
			.to_string()
			.parse::<http::HeaderValue>()
			.inspect_err(|error| warn!(%error, "generated invalid request id"))
			.map(RequestId::new)
			.ok()
	}
}
