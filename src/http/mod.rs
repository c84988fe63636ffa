//! HTTP client module
//!
//! Provides the single-request transport used by the pagination core and the
//! team endpoints.
//!
//! # Features
//!
//! - **Transport trait**: `execute(method, url, body)` returning raw bytes
//! - **Base URL joining**: relative paths are joined onto the configured host,
//!   absolute URLs (e.g. server supplied `next` links) pass through
//! - **Status mapping**: non-2xx responses surface as `Error::HttpStatus`

mod client;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use transport::Transport;
