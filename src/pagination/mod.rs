//! Pagination module
//!
//! Walks a forward-only, server driven `links.next` cursor and materializes
//! the complete collection.
//!
//! # Overview
//!
//! - [`PaginatedCollector::fetch_all`] follows next references until the
//!   server returns an empty one, appending each page's records in arrival
//!   order.
//! - [`PaginatedCollector::pages`] yields the same pages lazily as a stream.
//! - [`PaginatedCollector::find_by_id`] layers a linear scan on top.
//!
//! Pages are fetched strictly one after another since each locator is only
//! known once the previous response has been decoded. Without
//! [`PaginationConfig::max_pages`] a server that never stops returning a next
//! reference keeps the traversal running forever.

mod collector;
mod types;

pub use collector::{find_in, PaginatedCollector};
pub use types::{NextPage, Page, PaginationConfig, PaginationState};

#[cfg(test)]
mod tests;
