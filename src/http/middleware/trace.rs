use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::ConnectInfo;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::request_id::RequestId;
use tower_http::trace::{
	DefaultOnBodyChunk,
	DefaultOnEos,
	HttpMakeClassifier,
	MakeSpan,
	OnFailure,
	OnRequest,
	OnResponse,
	TraceLayer,
};
use tracing::field;

/// Creates a `tower::Layer` that opens a span for every request and logs its outcome.
///
/// `include_headers` controls whether request and response headers are recorded.
pub fn layer<ReqBody, ResBody>(
	include_headers: bool,
) -> TraceLayer<
	HttpMakeClassifier,
	impl MakeSpan<ReqBody> + Clone,
	impl OnRequest<ReqBody> + Clone,
	impl OnResponse<ResBody> + Clone,
	DefaultOnBodyChunk,
	DefaultOnEos,
	impl OnFailure<ServerErrorsFailureClass> + Clone,
>
{
	TraceLayer::new_for_http()
		.make_span_with(make_span::<ReqBody>)
		.on_request(move |req: &http::Request<ReqBody>, span: &tracing::Span| {
			on_request(req, span, include_headers);
		})
		.on_response(
			move |res: &http::Response<ResBody>, latency: Duration, span: &tracing::Span| {
				on_response(res, latency, span, include_headers);
			},
		)
		.on_failure(on_failure)
}

/// Creates the span for a request.
///
/// The request id is set by [`request_id::set_layer()`] and the client address by
/// `into_make_service_with_connect_info`. Either may be absent, e.g. in tests.
///
/// [`request_id::set_layer()`]: super::request_id::set_layer
fn make_span<B>(req: &http::Request<B>) -> tracing::Span
{
	let span = info_span!(
		target: "alertlabel_api::http",
		"request",
		req.id = field::Empty,
		req.client_addr = field::Empty,
		req.method = %req.method(),
		req.uri = %req.uri(),
		req.headers = field::Empty,
		res.status = field::Empty,
		res.headers = field::Empty,
		latency = field::Empty,
	);

	if let Some(request_id) = req
		.extensions()
		.get::<RequestId>()
		.and_then(|request_id| request_id.header_value().to_str().ok())
	{
		span.record("req.id", request_id);
	}

	if let Some(ConnectInfo(client_addr)) = req.extensions().get::<ConnectInfo<SocketAddr>>() {
		span.record("req.client_addr", field::display(client_addr));
	}

	span
}

fn on_request<B>(req: &http::Request<B>, span: &tracing::Span, include_headers: bool)
{
	if include_headers {
		span.record("req.headers", field::debug(req.headers()));
	}

	debug!(target: "alertlabel_api::http", "starting to process request");
}

fn on_response<B>(
	res: &http::Response<B>,
	latency: Duration,
	span: &tracing::Span,
	include_headers: bool,
)
{
	span.record("res.status", res.status().as_u16());
	span.record("latency", field::debug(latency));

	if include_headers {
		span.record("res.headers", field::debug(res.headers()));
	}

	info!(
		target: "alertlabel_api::http",
		status = res.status().as_u16(),
		?latency,
		"finished processing request",
	);
}

fn on_failure(failure_class: ServerErrorsFailureClass, latency: Duration, span: &tracing::Span)
{
	span.in_scope(|| match failure_class {
		ServerErrorsFailureClass::StatusCode(status) => {
			error!(
				target: "alertlabel_api::http",
				status = status.as_u16(),
				?latency,
				"failed to handle request",
			);
		},
		ServerErrorsFailureClass::Error(error) => {
			error!(
				target: "alertlabel_api::http",
				%error,
				?latency,
				"failed to handle request",
			);
		},
	});
}
