//! # projdesk-cli
//!
//! Terminal front end for the projects page.
//!
//! - [`cli`]: argument definitions
//! - [`config`]: TOML configuration with environment overrides
//! - [`commands`]: one handler per subcommand
//! - [`terminal`]: notifications on stderr

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod terminal;

pub use cli::Cli;
pub use config::ProjdeskConfig;
pub use error::{Error, Result};
