//! Team management API
//!
//! Listing and lookup go through the paginated collector; invitations,
//! admin flag updates and removals are single requests.
//!
//! | Operation        | Request                                              |
//! |------------------|------------------------------------------------------|
//! | `list_teams`     | `GET /v2/teams` (paged)                              |
//! | `list_members`   | `GET /v2/teams/{team}/team_members` (paged)          |
//! | `invite_member`  | `POST /v2/teams/{team}/team_invitations`             |
//! | `set_admin`      | `PUT /v2/teams/{team}/team_members/{user}`           |
//! | `remove_member`  | `DELETE /v2/teams/{team}/team_members/{user}`        |

mod client;
mod models;

pub use client::{invitations_path, member_path, members_path, TeamClient, TEAMS_PATH};
pub use models::{Team, TeamInvitation, TeamMember};
