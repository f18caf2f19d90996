//! Endpoint paths of the projects service.

use projdesk_core::{ProjectId, ProjectScope, UserId};

/// Default path of the token verification endpoint.
pub const DEFAULT_VERIFY_PATH: &str = "/api/auth/verify";

/// `/api/users/{id}`
pub fn user(id: UserId) -> String {
    format!("/api/users/{id}")
}

/// `/api/projects`
pub fn projects() -> String {
    "/api/projects".to_string()
}

/// `/api/projects/{id}`
pub fn project(id: ProjectId) -> String {
    format!("/api/projects/{id}")
}

/// `/api/projects` or `/api/projects/user/{id}`.
pub fn scoped_projects(scope: ProjectScope) -> String {
    match scope {
        ProjectScope::All => projects(),
        ProjectScope::OwnedBy(id) => format!("/api/projects/user/{id}"),
    }
}

/// Joins a base URL and a path without doubling the slash.
pub fn join(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
