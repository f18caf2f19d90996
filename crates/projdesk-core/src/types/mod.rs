//! Wire types for the projects service.

mod ids;
mod project;
mod user;

pub use ids::{ProjectId, UserId};
pub use project::{NO_MEMBERS, NewProject, Project, ProjectPayload};
pub use user::{MANAGER_USERTYPE, UserDetails, UserType};
