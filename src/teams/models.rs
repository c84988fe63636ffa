//! Team API records
//!
//! Fields the client acts on are typed; everything else the API sends is kept
//! in `extra` and written back out unchanged. Timestamps stay in `extra` as the
//! server's own strings and are only parsed on demand.

use crate::types::{Identified, JsonObject, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A team the account belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A user's membership in a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub admin: bool,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Pending invitation created by `invite_member`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamInvitation {
    pub id: RecordId,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub admin: bool,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Raw `created_at` string from a record's extra fields
fn created_at(extra: &JsonObject) -> Option<&str> {
    extra.get("created_at").and_then(|v| v.as_str())
}

/// `created_at` parsed as RFC 3339 and normalised to UTC
fn created_at_utc(extra: &JsonObject) -> Option<DateTime<Utc>> {
    let raw = created_at(extra)?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

impl Team {
    /// Creation timestamp exactly as the server sent it
    pub fn created_at(&self) -> Option<&str> {
        created_at(&self.extra)
    }

    /// Creation timestamp in UTC, if it parses
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        created_at_utc(&self.extra)
    }
}

impl TeamMember {
    /// Creation timestamp exactly as the server sent it
    pub fn created_at(&self) -> Option<&str> {
        created_at(&self.extra)
    }

    /// Creation timestamp in UTC, if it parses
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        created_at_utc(&self.extra)
    }
}

impl Identified for Team {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Identified for TeamMember {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Identified for TeamInvitation {
    fn id(&self) -> RecordId {
        self.id
    }
}
