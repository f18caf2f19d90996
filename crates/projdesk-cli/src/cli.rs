//! Command-line arguments.

use clap::{Parser, Subcommand};
use projdesk_core::ProjectId;

/// Projdesk - browse and manage projects
#[derive(Parser, Debug)]
#[command(name = "projdesk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the projects visible to the signed-in user
    List,
    /// Add a project owned by the signed-in user
    Add {
        /// Project name
        #[arg(long)]
        name: Option<String>,
        /// Project link
        #[arg(long)]
        link: Option<String>,
        /// Additional members
        #[arg(long)]
        members: Option<String>,
    },
    /// Edit a project
    ///
    /// Unless `ui.prefill_edit_form` is set, all three fields must be given.
    Edit {
        /// Project id
        id: ProjectId,
        /// New project name
        #[arg(long)]
        name: Option<String>,
        /// New project link
        #[arg(long)]
        link: Option<String>,
        /// New additional members
        #[arg(long)]
        members: Option<String>,
    },
    /// Delete a project
    Delete {
        /// Project id
        id: ProjectId,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Create a config file with default values
    Init {
        /// Where to write it (defaults to the resolved path)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print one value by dotted key, e.g. `api.base_url`
    Get {
        /// Dotted key
        key: String,
    },
    /// Print the effective configuration, environment overrides included
    Show,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "projdesk", "add", "--name", "Alpha", "--link", "http://a", "--members", "Bob",
        ])
        .unwrap();
        match cli.command {
            Command::Add {
                name,
                link,
                members,
            } => {
                assert_eq!(name.as_deref(), Some("Alpha"));
                assert_eq!(link.as_deref(), Some("http://a"));
                assert_eq!(members.as_deref(), Some("Bob"));
            }
            other => unreachable!("parsed {other:?}"),
        }
    }

    #[test]
    fn test_parse_edit_with_global_flags() {
        let cli = Cli::try_parse_from(["projdesk", "edit", "3", "--name", "B", "-v", "-c", "x.toml"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config.as_deref(), Some("x.toml"));
        assert!(matches!(cli.command, Command::Edit { id, .. } if id == ProjectId::new(3)));
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        assert!(Cli::try_parse_from(["projdesk", "delete", "abc"]).is_err());
    }

    #[test]
    fn test_config_get() {
        let cli = Cli::try_parse_from(["projdesk", "config", "get", "api.base_url"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config { action: ConfigAction::Get { ref key } } if key == "api.base_url"
        ));
    }
}
