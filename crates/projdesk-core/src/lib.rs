#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Projdesk Core
//!
//! Core types, traits, and errors for the projdesk client.

pub mod backend;
pub mod error;
pub mod permissions;
pub mod session;
pub mod types;
pub mod validation;

// Re-exports for convenience
pub use backend::ProjectsBackend;
pub use error::{Error, Result};
pub use permissions::{ProjectScope, can_manage_projects};
pub use session::{Session, SessionUser, SessionVerifier, StaticSessionVerifier};
pub use types::{NewProject, Project, ProjectId, ProjectPayload, UserDetails, UserId, UserType};
pub use validation::{Field, missing_fields};
