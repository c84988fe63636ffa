//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Honeybadger team management CLI
#[derive(Parser, Debug)]
#[command(name = "honeybadger-teams")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Stop list traversals after this many pages
    #[arg(long, global = true)]
    pub max_pages: Option<u32>,

    /// Extra request header as KEY=VALUE (repeatable)
    #[arg(short = 'H', long = "header", global = true, value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Team operations
    Teams {
        #[command(subcommand)]
        command: TeamCommands,
    },

    /// Team member operations
    Members {
        #[command(subcommand)]
        command: MemberCommands,
    },
}

/// `teams` subcommands
#[derive(Subcommand, Debug)]
pub enum TeamCommands {
    /// List all teams
    List,

    /// Show one team
    Get {
        /// Team id
        team_id: u64,
    },
}

/// `members` subcommands
#[derive(Subcommand, Debug)]
pub enum MemberCommands {
    /// List all members of a team
    List {
        /// Team id
        team_id: u64,

        /// Print records page by page as they arrive
        #[arg(long)]
        stream: bool,
    },

    /// Show one member
    Get {
        /// Team id
        team_id: u64,
        /// User id
        user_id: u64,
    },

    /// Invite a user by email
    Invite {
        /// Team id
        team_id: u64,
        /// Email address to invite
        email: String,
    },

    /// Grant or revoke admin rights
    SetAdmin {
        /// Team id
        team_id: u64,
        /// User id
        user_id: u64,
        /// New admin flag
        #[arg(action = clap::ArgAction::Set)]
        admin: bool,
    },

    /// Remove a member from a team
    Remove {
        /// Team id
        team_id: u64,
        /// User id
        user_id: u64,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Human-readable output
    Pretty,
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty header name in '{raw}'"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}
