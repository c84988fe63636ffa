//! CLI module
//!
//! Command-line interface for the team API.
//!
//! # Commands
//!
//! - `teams list` / `teams get` - Browse teams
//! - `members list` / `members get` - Browse a team's members
//! - `members invite` - Invite a user by email
//! - `members set-admin` - Grant or revoke admin rights
//! - `members remove` - Remove a member from a team

mod commands;
mod runner;

pub use commands::{Cli, Commands, MemberCommands, OutputFormat, TeamCommands};
pub use runner::Runner;
