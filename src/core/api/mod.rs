//! Ship It Squirrel API access.
//!
//! - `request.rs` - [`ApiRequest`], the method/path/body of one call
//! - `client.rs` - [`ApiExecutor`] trait and the reqwest-backed [`ApiClient`]
//! - `error.rs` - [`ApiError`], the single-message failure type

mod client;
mod error;
mod request;

#[cfg(test)]
pub mod testing;

pub use client::{API_PREFIX, ApiClient, ApiExecutor};
pub use error::{ApiError, ApiResult};
pub use request::ApiRequest;
