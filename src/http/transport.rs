//! Transport abstraction
//!
//! The pagination core and the team client only ever talk to the network
//! through this trait, so tests can swap in scripted responses.

use crate::error::Result;
use crate::types::{JsonValue, Method};
use async_trait::async_trait;
use bytes::Bytes;

/// Executes one HTTP-style request and returns the raw response payload
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a single request.
    ///
    /// `url` is either a path relative to the transport's base URL or an
    /// absolute URL. Non-2xx responses must be reported as errors.
    async fn execute(&self, method: Method, url: &str, body: Option<&JsonValue>) -> Result<Bytes>;
}

