//! HTTP plumbing shared by all routes.

use axum::Router;
use axum::body::Body;

use crate::config::TracingConfig;
use crate::records::{self, RecordStore};

mod error;
pub use error::{HandlerError, HandlerResult};

mod no_content;
pub use no_content::NoContent;

pub mod extract;
pub mod middleware;

/// Builds the service's [`Router`], with all middleware applied.
pub fn router<S>(store: S, tracing_config: &TracingConfig) -> Router
where
	S: RecordStore,
{
	records::http::router(store)
		.layer(middleware::catch_panic::layer())
		.layer(middleware::trace::layer::<Body, Body>(tracing_config.include_http_headers))
		.layer(middleware::request_id::propagate_layer())
		.layer(middleware::request_id::set_layer())
}
