//! Team API client

use super::models::{Team, TeamInvitation, TeamMember};
use crate::config::ClientConfig;
use crate::decode::{JsonPageDecoder, PageDecoder};
use crate::error::{Error, Result};
use crate::http::{HttpClient, Transport};
use crate::pagination::{PaginatedCollector, PaginationConfig};
use crate::types::{Method, RecordId};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Root listing path for teams
pub const TEAMS_PATH: &str = "/v2/teams";

/// Listing path for a team's members
pub fn members_path(team_id: RecordId) -> String {
    format!("{TEAMS_PATH}/{team_id}/team_members")
}

/// Path of a single membership
pub fn member_path(team_id: RecordId, user_id: RecordId) -> String {
    format!("{TEAMS_PATH}/{team_id}/team_members/{user_id}")
}

/// Path for creating invitations
pub fn invitations_path(team_id: RecordId) -> String {
    format!("{TEAMS_PATH}/{team_id}/team_invitations")
}

/// Client for the team management endpoints
#[derive(Clone)]
pub struct TeamClient {
    transport: Arc<dyn Transport>,
    decoder: Arc<dyn PageDecoder>,
    pagination: PaginationConfig,
}

impl TeamClient {
    /// Create a client over any transport with the default page layout
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            decoder: Arc::new(JsonPageDecoder::new()),
            pagination: PaginationConfig::default(),
        }
    }

    /// Create an HTTP backed client from configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_config(config.http_config())?;
        Ok(Self::new(Arc::new(http))
            .with_decoder(Arc::new(config.page_decoder()))
            .with_pagination(config.pagination_config()))
    }

    /// Use a custom page decoder for list endpoints
    #[must_use]
    pub fn with_decoder(mut self, decoder: Arc<dyn PageDecoder>) -> Self {
        self.decoder = decoder;
        self
    }

    /// Set traversal limits for list endpoints
    #[must_use]
    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }

    fn collector(&self, root_path: String, resource: &str) -> PaginatedCollector {
        PaginatedCollector::new(self.transport.clone(), root_path)
            .with_decoder(self.decoder.clone())
            .with_config(self.pagination.clone())
            .with_resource(resource)
    }

    /// Collector over all teams
    pub fn teams(&self) -> PaginatedCollector {
        self.collector(TEAMS_PATH.to_string(), "team")
    }

    /// Collector over the members of one team
    pub fn members(&self, team_id: RecordId) -> PaginatedCollector {
        self.collector(members_path(team_id), "team member")
    }

    // ========================================================================
    // Read Operations
    // ========================================================================

    /// All teams, across every page
    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        self.teams().fetch_all_from_start().await
    }

    /// Look a team up by id
    pub async fn find_team(&self, team_id: RecordId) -> Result<Team> {
        self.teams().find_by_id(team_id).await
    }

    /// All members of a team, across every page
    pub async fn list_members(&self, team_id: RecordId) -> Result<Vec<TeamMember>> {
        self.members(team_id).fetch_all_from_start().await
    }

    /// Look a team member up by user id
    pub async fn find_member(&self, team_id: RecordId, user_id: RecordId) -> Result<TeamMember> {
        self.members(team_id).find_by_id(user_id).await
    }

    // ========================================================================
    // Write Operations
    // ========================================================================

    /// Invite a user by email and return the id of the created invitation
    pub async fn invite_member(&self, team_id: RecordId, email: &str) -> Result<RecordId> {
        let body = json!({ "team_invitation": email });
        let response = self
            .transport
            .execute(Method::POST, &invitations_path(team_id), Some(&body))
            .await?;

        let invitation: TeamInvitation = serde_json::from_slice(&response)
            .map_err(|e| Error::decode(format!("Failed to decode team invitation: {e}")))?;

        info!(
            "Invited {} to team {} (invitation {})",
            email, team_id, invitation.id
        );
        Ok(invitation.id)
    }

    /// Grant or revoke admin rights for a member
    pub async fn set_admin(&self, team_id: RecordId, user_id: RecordId, admin: bool) -> Result<()> {
        let body = json!({ "team_member": { "admin": admin } });
        self.transport
            .execute(Method::PUT, &member_path(team_id, user_id), Some(&body))
            .await?;

        info!("Set admin={} for user {} in team {}", admin, user_id, team_id);
        Ok(())
    }

    /// Remove a member from a team
    pub async fn remove_member(&self, team_id: RecordId, user_id: RecordId) -> Result<()> {
        self.transport
            .execute(Method::DELETE, &member_path(team_id, user_id), None)
            .await?;

        info!("Removed user {} from team {}", user_id, team_id);
        Ok(())
    }
}

impl std::fmt::Debug for TeamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamClient")
            .field("pagination", &self.pagination)
            .finish_non_exhaustive()
    }
}
