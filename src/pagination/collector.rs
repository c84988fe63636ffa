//! Paginated collector
//!
//! Fetches every page of a collection by following the server supplied
//! next reference, and looks single records up by id.

use super::types::{Page, PaginationConfig, PaginationState};
use crate::decode::{JsonPageDecoder, PageDecoder};
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::types::{Identified, Method, RecordId};
use futures::stream::{self, Stream};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Walks a paged list endpoint and concatenates its records
#[derive(Clone)]
pub struct PaginatedCollector {
    transport: Arc<dyn Transport>,
    decoder: Arc<dyn PageDecoder>,
    root_path: String,
    resource: String,
    config: PaginationConfig,
}

impl PaginatedCollector {
    /// Create a collector for the listing at `root_path`
    pub fn new(transport: Arc<dyn Transport>, root_path: impl Into<String>) -> Self {
        Self {
            transport,
            decoder: Arc::new(JsonPageDecoder::new()),
            root_path: root_path.into(),
            resource: "record".to_string(),
            config: PaginationConfig::default(),
        }
    }

    /// Use a custom page decoder
    #[must_use]
    pub fn with_decoder(mut self, decoder: Arc<dyn PageDecoder>) -> Self {
        self.decoder = decoder;
        self
    }

    /// Set pagination configuration
    #[must_use]
    pub fn with_config(mut self, config: PaginationConfig) -> Self {
        self.config = config;
        self
    }

    /// Name used for this collection in log lines and not-found errors
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = resource.into();
        self
    }

    /// Listing path used for the first page
    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    /// Pagination configuration
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    fn resolve<'a>(&'a self, reference: &'a str) -> &'a str {
        if reference.is_empty() {
            &self.root_path
        } else {
            reference
        }
    }

    /// Fetch and decode a single page
    pub async fn fetch_page(&self, reference: &str) -> Result<Page<Value>> {
        let url = self.resolve(reference);
        let body = self.transport.execute(Method::GET, url, None).await?;
        self.decoder.decode(&body)
    }

    /// Fetch the page under the state's cursor and advance the state.
    ///
    /// Returns `None` once the last page has been consumed. Fails before any
    /// request when the page cap is reached with a page still pending.
    async fn next_page(&self, state: &mut PaginationState) -> Result<Option<Page<Value>>> {
        let Some(reference) = state.cursor.clone() else {
            return Ok(None);
        };

        if !self.config.allows(state.pages_fetched) {
            warn!(
                "Stopping {} pagination at {} pages, next page still pending: {}",
                self.resource, state.pages_fetched, reference
            );
            return Err(self.limit_error());
        }

        let page = self.fetch_page(&reference).await?;
        state.advance(page.records.len(), &page.next_page());

        debug!(
            "{} page {}: fetched {} records",
            self.resource,
            state.pages_fetched,
            page.records.len()
        );
        Ok(Some(page))
    }

    /// Fetch every page starting at `start` and return all records in arrival order.
    ///
    /// An empty `start` begins at the root listing path. Any transport or
    /// decode error aborts the traversal and no partial collection is returned.
    pub async fn fetch_all<R: DeserializeOwned>(&self, start: &str) -> Result<Vec<R>> {
        let mut state = PaginationState::starting_at(start);
        let mut records = Vec::new();

        while let Some(page) = self.next_page(&mut state).await? {
            records.reserve(page.records.len());
            for raw in page.records {
                records.push(self.decode_record(raw)?);
            }
        }

        info!(
            "Collected {} {} records across {} pages",
            state.total_fetched, self.resource, state.pages_fetched
        );
        Ok(records)
    }

    /// Fetch the whole collection from the root listing path
    pub async fn fetch_all_from_start<R: DeserializeOwned>(&self) -> Result<Vec<R>> {
        self.fetch_all("").await
    }

    /// Stream pages lazily starting at `start`.
    ///
    /// Same ordering and page cap as [`fetch_all`](Self::fetch_all); the
    /// stream ends after the first error.
    pub fn pages<'a>(&'a self, start: &str) -> impl Stream<Item = Result<Page<Value>>> + 'a {
        let init = PaginationState::starting_at(start);
        stream::try_unfold(init, move |mut state| async move {
            let page = self.next_page(&mut state).await?;
            Ok::<_, Error>(page.map(|page| (page, state)))
        })
    }

    /// Collect everything and return the first record with a matching id
    pub async fn find_by_id<R>(&self, id: RecordId) -> Result<R>
    where
        R: DeserializeOwned + Identified,
    {
        let records: Vec<R> = self.fetch_all_from_start().await?;
        find_in(records, id).ok_or_else(|| Error::not_found(self.resource.clone(), id))
    }

    fn decode_record<R: DeserializeOwned>(&self, raw: Value) -> Result<R> {
        serde_json::from_value(raw)
            .map_err(|e| Error::decode(format!("Failed to decode {}: {e}", self.resource)))
    }

    fn limit_error(&self) -> Error {
        Error::PageLimitExceeded {
            max_pages: self.config.max_pages.unwrap_or_default(),
        }
    }
}

impl std::fmt::Debug for PaginatedCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedCollector")
            .field("root_path", &self.root_path)
            .field("resource", &self.resource)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// First record in collection order whose id matches
pub fn find_in<R: Identified>(records: impl IntoIterator<Item = R>, id: RecordId) -> Option<R> {
    records.into_iter().find(|record| record.id() == id)
}
