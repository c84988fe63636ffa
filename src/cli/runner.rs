//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, MemberCommands, OutputFormat, TeamCommands};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::teams::TeamClient;
use futures::TryStreamExt;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        debug!("Using API at {}", config.base_url);
        let client = TeamClient::from_config(&config)?;

        match &self.cli.command {
            Commands::Teams { command } => self.run_teams(&client, command).await,
            Commands::Members { command } => self.run_members(&client, command).await,
        }
    }

    /// Config file (if any) with command-line overrides applied
    pub fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(max_pages) = self.cli.max_pages {
            config.pagination.max_pages = Some(max_pages);
        }
        for (key, value) in &self.cli.headers {
            config.set_header(key, value);
        }

        config.validate()?;
        Ok(config)
    }

    async fn run_teams(&self, client: &TeamClient, command: &TeamCommands) -> Result<()> {
        match command {
            TeamCommands::List => {
                for team in client.list_teams().await? {
                    self.output(&team)?;
                }
            }
            TeamCommands::Get { team_id } => {
                let team = client.find_team(*team_id).await?;
                self.output(&team)?;
            }
        }
        Ok(())
    }

    async fn run_members(&self, client: &TeamClient, command: &MemberCommands) -> Result<()> {
        match command {
            MemberCommands::List {
                team_id,
                stream: false,
            } => {
                for member in client.list_members(*team_id).await? {
                    self.output(&member)?;
                }
            }
            MemberCommands::List {
                team_id,
                stream: true,
            } => {
                let collector = client.members(*team_id);
                let mut pages = std::pin::pin!(collector.pages(""));
                while let Some(page) = pages.try_next().await? {
                    for record in &page.records {
                        self.output(record)?;
                    }
                }
            }
            MemberCommands::Get { team_id, user_id } => {
                let member = client.find_member(*team_id, *user_id).await?;
                self.output(&member)?;
            }
            MemberCommands::Invite { team_id, email } => {
                let id = client.invite_member(*team_id, email).await?;
                self.output(&json!({ "id": id, "email": email }))?;
            }
            MemberCommands::SetAdmin {
                team_id,
                user_id,
                admin,
            } => {
                client.set_admin(*team_id, *user_id, *admin).await?;
                self.output(&json!({ "team_id": team_id, "user_id": user_id, "admin": admin }))?;
            }
            MemberCommands::Remove { team_id, user_id } => {
                client.remove_member(*team_id, *user_id).await?;
                self.output(&json!({ "team_id": team_id, "user_id": user_id, "removed": true }))?;
            }
        }
        Ok(())
    }

    /// Output a record
    fn output<T: Serialize>(&self, value: &T) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{text}");
        Ok(())
    }
}
