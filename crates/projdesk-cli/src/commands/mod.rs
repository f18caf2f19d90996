//! Command dispatch.

pub mod config;
pub mod projects;

pub use config::handle_config_command;
pub use projects::{build_page, cmd_add, cmd_delete, cmd_edit, cmd_list, session_verifier};

use projdesk_app::ProjectsPage;

use crate::cli::{Cli, Command};
use crate::config::ProjdeskConfig;
use crate::error::Result;

/// Runs one command. The rendered page goes to stdout.
pub async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    let view = match cli.command {
        Command::Config { action } => return handle_config_command(config_path, action),
        Command::List => cmd_list(&mut load_page(config_path)?).await?,
        Command::Add {
            name,
            link,
            members,
        } => cmd_add(&mut load_page(config_path)?, name, link, members).await?,
        Command::Edit {
            id,
            name,
            link,
            members,
        } => cmd_edit(&mut load_page(config_path)?, id, name, link, members).await?,
        Command::Delete { id } => cmd_delete(&mut load_page(config_path)?, id).await?,
    };

    print!("{view}");
    Ok(())
}

fn load_page(config_path: Option<&str>) -> Result<ProjectsPage> {
    let config = ProjdeskConfig::load(config_path)?;
    tracing::debug!(base_url = %config.api.base_url, "Using projects service");
    build_page(&config)
}
