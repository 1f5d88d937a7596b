//! Custom [extractors].
//!
//! Their rejections render through [`HandlerError`](crate::http::HandlerError), so clients get
//! the same plain-text error bodies no matter where a request failed.
//!
//! [extractors]: axum::extract

pub mod json;
pub use json::{Json, JsonRejection};

pub mod query;
pub use query::QueryParams;
