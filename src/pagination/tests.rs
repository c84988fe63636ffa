//! Tests for pagination module

use super::*;
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::types::{Identified, JsonValue, Method, RecordId};
use async_trait::async_trait;
use bytes::Bytes;
use futures::{StreamExt, TryStreamExt};
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// ============================================================================
// Scripted transport
// ============================================================================

enum Reply {
    Body(JsonValue),
    Raw(&'static str),
    Status(u16),
}

#[derive(Default)]
struct ScriptedTransport {
    replies: HashMap<String, Reply>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    fn new() -> Self {
        Self::default()
    }

    fn page(mut self, url: &str, records: JsonValue, next: &str) -> Self {
        self.replies.insert(
            url.to_string(),
            Reply::Body(json!({"results": records, "links": {"next": next}})),
        );
        self
    }

    fn reply(mut self, url: &str, reply: Reply) -> Self {
        self.replies.insert(url.to_string(), reply);
        self
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, method: Method, url: &str, _body: Option<&JsonValue>) -> Result<Bytes> {
        assert_eq!(method, Method::GET);
        self.requests.lock().unwrap().push(url.to_string());
        match self.replies.get(url) {
            Some(Reply::Body(value)) => Ok(Bytes::from(serde_json::to_vec(value).unwrap())),
            Some(Reply::Raw(text)) => Ok(Bytes::copy_from_slice(text.as_bytes())),
            Some(Reply::Status(status)) => Err(Error::http_status(*status, "scripted failure")),
            None => Err(Error::http_status(404, format!("no script for {url}"))),
        }
    }
}

fn collector(transport: ScriptedTransport) -> (Arc<ScriptedTransport>, PaginatedCollector) {
    let transport = Arc::new(transport);
    let collector = PaginatedCollector::new(transport.clone(), "/v2/teams/1/team_members")
        .with_resource("team member");
    (transport, collector)
}

#[derive(Debug, Deserialize, PartialEq)]
struct Member {
    id: RecordId,
    name: String,
}

impl Identified for Member {
    fn id(&self) -> RecordId {
        self.id
    }
}

fn ids(records: &[JsonValue]) -> Vec<u64> {
    records.iter().map(Identified::id).collect()
}

// ============================================================================
// Types Tests
// ============================================================================

#[test]
fn test_page_normalises_empty_next() {
    let page: Page<u8> = Page::new(vec![1], Some(String::new()));
    assert!(!page.has_next());
    assert!(page.next_page().is_done());

    let page: Page<u8> = Page::new(vec![], Some("/p2".to_string()));
    assert_eq!(
        page.next_page(),
        NextPage::Continue {
            reference: "/p2".to_string()
        }
    );
    assert!(Page::<u8>::last(vec![]).next_page().is_done());
}

#[test]
fn test_pagination_config_allows() {
    let unbounded = PaginationConfig::new();
    assert!(unbounded.allows(0));
    assert!(unbounded.allows(u32::MAX));

    let capped = PaginationConfig::new().with_max_pages(2);
    assert!(capped.allows(0));
    assert!(capped.allows(1));
    assert!(!capped.allows(2));
}

#[test]
fn test_pagination_state_advance() {
    let mut state = PaginationState::starting_at("");
    assert_eq!(state.cursor.as_deref(), Some(""));
    assert!(!state.is_done());

    state.advance(
        3,
        &NextPage::Continue {
            reference: "/p2".to_string(),
        },
    );
    assert_eq!(state.pages_fetched, 1);
    assert_eq!(state.total_fetched, 3);
    assert_eq!(state.cursor.as_deref(), Some("/p2"));
    assert!(!state.is_done());

    state.advance(2, &NextPage::Done);
    assert_eq!(state.pages_fetched, 2);
    assert_eq!(state.total_fetched, 5);
    assert!(state.cursor.is_none());
    assert!(state.is_done());
}

// ============================================================================
// FetchAll Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_all_follows_every_page() {
    let transport = ScriptedTransport::new()
        .page("/v2/teams/1/team_members", json!([{"id": 1}, {"id": 2}]), "/p2")
        .page("/p2", json!([{"id": 3}]), "/p3")
        .page("/p3", json!([{"id": 4}, {"id": 5}, {"id": 6}]), "/p4")
        .page("/p4", json!([]), "");
    let (transport, collector) = collector(transport);

    let records: Vec<JsonValue> = collector.fetch_all_from_start().await.unwrap();

    assert_eq!(records.len(), 6);
    assert_eq!(
        transport.requests(),
        vec!["/v2/teams/1/team_members", "/p2", "/p3", "/p4"]
    );
}

#[tokio::test]
async fn test_fetch_all_keeps_arrival_order() {
    let transport = ScriptedTransport::new()
        .page(
            "/v2/teams/1/team_members",
            json!([{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]),
            "/p2",
        )
        .page("/p2", json!([{"id": 3, "name": "C"}]), "");
    let (_, collector) = collector(transport);

    let records: Vec<Member> = collector.fetch_all("").await.unwrap();
    let names: Vec<&str> = records.iter().map(|m| m.name.as_str()).collect();

    assert_eq!(names, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_fetch_all_keeps_duplicates() {
    let transport = ScriptedTransport::new()
        .page("/v2/teams/1/team_members", json!([{"id": 1}, {"id": 2}]), "/p2")
        .page("/p2", json!([{"id": 2}, {"id": 3}]), "");
    let (_, collector) = collector(transport);

    let records: Vec<JsonValue> = collector.fetch_all("").await.unwrap();
    assert_eq!(ids(&records), vec![1, 2, 2, 3]);
}

#[tokio::test]
async fn test_fetch_all_single_empty_page() {
    let transport = ScriptedTransport::new().page("/v2/teams/1/team_members", json!([]), "");
    let (transport, collector) = collector(transport);

    let records: Vec<JsonValue> = collector.fetch_all("").await.unwrap();

    assert!(records.is_empty());
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_fetch_all_from_explicit_reference() {
    let transport = ScriptedTransport::new()
        .page("/v2/teams/1/team_members", json!([{"id": 1}]), "/p2")
        .page("/p2", json!([{"id": 2}]), "");
    let (transport, collector) = collector(transport);

    let records: Vec<JsonValue> = collector.fetch_all("/p2").await.unwrap();

    assert_eq!(ids(&records), vec![2]);
    assert_eq!(transport.requests(), vec!["/p2"]);
}

#[tokio::test]
async fn test_fetch_all_transport_error_aborts() {
    let transport = ScriptedTransport::new()
        .page("/v2/teams/1/team_members", json!([{"id": 1}]), "/p2")
        .page("/p2", json!([{"id": 2}]), "/p3")
        .reply("/p3", Reply::Status(502));
    let (transport, collector) = collector(transport);

    let err = collector.fetch_all::<JsonValue>("").await.unwrap_err();

    assert!(err.is_transport());
    assert!(matches!(err, Error::HttpStatus { status: 502, .. }));
    assert_eq!(transport.requests().len(), 3);
}

#[tokio::test]
async fn test_fetch_all_decode_error_stops_traversal() {
    let transport = ScriptedTransport::new()
        .reply("/v2/teams/1/team_members", Reply::Raw("not json"))
        .page("/p2", json!([{"id": 2}]), "");
    let (transport, collector) = collector(transport);

    let err = collector.fetch_all::<JsonValue>("").await.unwrap_err();

    assert!(err.is_decode());
    assert_eq!(transport.requests(), vec!["/v2/teams/1/team_members"]);
}

#[tokio::test]
async fn test_fetch_all_record_decode_error_stops_traversal() {
    let transport = ScriptedTransport::new()
        .page("/v2/teams/1/team_members", json!([{"id": "one"}]), "/p2")
        .page("/p2", json!([{"id": 2, "name": "B"}]), "");
    let (transport, collector) = collector(transport);

    let err = collector.fetch_all::<Member>("").await.unwrap_err();

    assert!(err.is_decode());
    assert!(err.to_string().contains("team member"));
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_fetch_all_page_cap_stops_cycling_server() {
    let transport = ScriptedTransport::new()
        .page("/v2/teams/1/team_members", json!([{"id": 1}]), "/loop")
        .page("/loop", json!([{"id": 2}]), "/loop");
    let (transport, collector) = collector(transport);
    let collector = collector.with_config(PaginationConfig::new().with_max_pages(3));

    let err = collector.fetch_all::<JsonValue>("").await.unwrap_err();

    assert!(matches!(err, Error::PageLimitExceeded { max_pages: 3 }));
    assert_eq!(transport.requests().len(), 3);
}

#[tokio::test]
async fn test_fetch_all_page_cap_not_hit_on_exact_count() {
    let transport = ScriptedTransport::new()
        .page("/v2/teams/1/team_members", json!([{"id": 1}]), "/p2")
        .page("/p2", json!([{"id": 2}]), "");
    let (_, collector) = collector(transport);
    let collector = collector.with_config(PaginationConfig::new().with_max_pages(2));

    let records: Vec<JsonValue> = collector.fetch_all("").await.unwrap();
    assert_eq!(ids(&records), vec![1, 2]);
}

// ============================================================================
// Page Stream Tests
// ============================================================================

#[tokio::test]
async fn test_pages_stream_yields_each_page() {
    let transport = ScriptedTransport::new()
        .page("/v2/teams/1/team_members", json!([{"id": 1}, {"id": 2}]), "/p2")
        .page("/p2", json!([{"id": 3}]), "");
    let (_, collector) = collector(transport);

    let pages: Vec<Page<JsonValue>> = collector.pages("").try_collect().await.unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(ids(&pages[0].records), vec![1, 2]);
    assert_eq!(pages[0].next.as_deref(), Some("/p2"));
    assert_eq!(ids(&pages[1].records), vec![3]);
    assert!(pages[1].next.is_none());
}

#[tokio::test]
async fn test_pages_stream_ends_after_error() {
    let transport = ScriptedTransport::new()
        .page("/v2/teams/1/team_members", json!([{"id": 1}]), "/p2")
        .reply("/p2", Reply::Status(500));
    let (_, collector) = collector(transport);

    let items: Vec<_> = collector.pages("").collect().await;

    assert_eq!(items.len(), 2);
    assert!(items[0].is_ok());
    assert!(items[1].as_ref().unwrap_err().is_transport());
}

#[tokio::test]
async fn test_pages_stream_respects_cap() {
    let transport = ScriptedTransport::new()
        .page("/v2/teams/1/team_members", json!([{"id": 1}]), "/loop")
        .page("/loop", json!([{"id": 2}]), "/loop");
    let (transport, collector) = collector(transport);
    let collector = collector.with_config(PaginationConfig::new().with_max_pages(2));

    let items: Vec<_> = collector.pages("").collect().await;

    assert_eq!(items.len(), 3);
    assert!(matches!(
        items[2],
        Err(Error::PageLimitExceeded { max_pages: 2 })
    ));
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn test_pages_stream_walks_same_cursor_as_fetch_all() {
    let script = || {
        ScriptedTransport::new()
            .page("/p2", json!([{"id": 2}]), "https://api.example.com/p3")
            .page("https://api.example.com/p3", json!([{"id": 3}]), "")
    };

    let (streamed, collector_a) = collector(script());
    let pages: Vec<Page<JsonValue>> = collector_a.pages("/p2").try_collect().await.unwrap();
    let streamed_ids: Vec<_> = pages.iter().flat_map(|p| ids(&p.records)).collect();

    let (collected, collector_b) = collector(script());
    let records: Vec<JsonValue> = collector_b.fetch_all("/p2").await.unwrap();

    assert_eq!(streamed_ids, ids(&records));
    assert_eq!(streamed.requests(), collected.requests());
    assert_eq!(
        streamed.requests(),
        vec!["/p2", "https://api.example.com/p3"]
    );
}

// ============================================================================
// Lookup Tests
// ============================================================================

#[tokio::test]
async fn test_find_by_id_hit() {
    let transport = ScriptedTransport::new()
        .page(
            "/v2/teams/1/team_members",
            json!([{"id": 7, "name": "Ada"}]),
            "/p2",
        )
        .page("/p2", json!([{"id": 42, "name": "Grace"}]), "");
    let (_, collector) = collector(transport);

    let member: Member = collector.find_by_id(42).await.unwrap();
    assert_eq!(
        member,
        Member {
            id: 42,
            name: "Grace".to_string()
        }
    );
}

#[tokio::test]
async fn test_find_by_id_miss() {
    let transport = ScriptedTransport::new().page(
        "/v2/teams/1/team_members",
        json!([{"id": 7, "name": "Ada"}]),
        "",
    );
    let (_, collector) = collector(transport);

    let err = collector.find_by_id::<Member>(99).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "team member with id 99 not found");
}

#[tokio::test]
async fn test_find_by_id_propagates_transport_error() {
    let transport =
        ScriptedTransport::new().reply("/v2/teams/1/team_members", Reply::Status(401));
    let (_, collector) = collector(transport);

    let err = collector.find_by_id::<Member>(1).await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 401, .. }));
}

#[tokio::test]
async fn test_find_by_id_refetches_every_call() {
    let transport = ScriptedTransport::new().page(
        "/v2/teams/1/team_members",
        json!([{"id": 1, "name": "A"}]),
        "",
    );
    let (transport, collector) = collector(transport);

    let _: Member = collector.find_by_id(1).await.unwrap();
    let _: Member = collector.find_by_id(1).await.unwrap();

    assert_eq!(transport.requests().len(), 2);
}

#[test]
fn test_find_in_returns_first_match() {
    let records = vec![
        json!({"id": 1, "name": "first"}),
        json!({"id": 2}),
        json!({"id": 1, "name": "second"}),
    ];

    let found = find_in(records.clone(), 1).unwrap();
    assert_eq!(found["name"], "first");
    assert!(find_in(records, 3).is_none());
}
