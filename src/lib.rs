//! # honeybadger-teams
//!
//! Client for the Honeybadger team-management API.
//!
//! ## Features
//!
//! - **Cursor Pagination**: follows `links.next` until the server runs out of pages
//! - **Lookup by id**: linear scan over the complete collection
//! - **Team operations**: list/find teams and members, invite, set admin, remove
//! - **Pluggable transport**: `reqwest` in production, anything implementing
//!   [`http::Transport`] in tests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use honeybadger_teams::{ClientConfig, Result, TeamClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut config = ClientConfig::default();
//!     config.set_header("Authorization", "Basic dG9rZW46");
//!
//!     let client = TeamClient::from_config(&config)?;
//!     for member in client.list_members(42).await? {
//!         println!("{} admin={}", member.id, member.admin);
//!     }
//!
//!     let member = client.find_member(42, 7).await?;
//!     client.set_admin(42, member.id, true).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        TeamClient                         │
//! │  list_teams  find_team  list_members  find_member         │
//! │  invite_member  set_admin  remove_member                  │
//! └─────────────────────────────┬─────────────────────────────┘
//!                               │
//! ┌───────────────┬─────────────┴───────────┬─────────────────┐
//! │  Pagination   │         Decode          │      HTTP       │
//! ├───────────────┼─────────────────────────┼─────────────────┤
//! │ fetch_all     │ results + links.next    │ Transport trait │
//! │ pages stream  │ custom record/next path │ reqwest client  │
//! │ find_by_id    │                         │                 │
//! └───────────────┴─────────────────────────┴─────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: document public record fields before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP transport
pub mod http;

/// Page decoding
pub mod decode;

/// Cursor pagination and lookup
pub mod pagination;

/// Team management endpoints
pub mod teams;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use pagination::{PaginatedCollector, PaginationConfig};
pub use teams::{Team, TeamClient, TeamMember};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
