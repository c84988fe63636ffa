//! Response decoder module
//!
//! Turns a raw page response body into a [`Page`](crate::pagination::Page):
//! the ordered records plus the server supplied next-page reference.
//!
//! # Wire format
//!
//! ```text
//! { "results": [ {"id": 1, ...}, ... ], "links": { "next": "/v2/...?page=2" } }
//! ```
//!
//! Both field locations are configurable with dot-notation paths.

mod decoders;

pub use decoders::{JsonPageDecoder, PageDecoder, DEFAULT_NEXT_PATH, DEFAULT_RECORDS_PATH};
