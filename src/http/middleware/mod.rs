//! HTTP middleware wrapped around every route.

pub mod catch_panic;
pub mod request_id;
pub mod trace;
