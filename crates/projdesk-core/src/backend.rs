//! The projects service as seen by the controller.

use async_trait::async_trait;

use crate::error::Result;
use crate::permissions::ProjectScope;
use crate::types::{NewProject, Project, ProjectId, ProjectPayload, UserDetails, UserId};

/// Operations the controller needs from the projects service.
///
/// Any non-success response is an error; response bodies of the mutating
/// calls are ignored.
#[async_trait]
pub trait ProjectsBackend: Send + Sync {
    /// `GET /api/users/{id}`
    async fn fetch_user(&self, id: UserId) -> Result<UserDetails>;

    /// `GET /api/projects` or `GET /api/projects/user/{id}`, depending on scope.
    async fn list_projects(&self, scope: ProjectScope) -> Result<Vec<Project>>;

    /// `POST /api/projects`
    async fn create_project(&self, project: &NewProject) -> Result<()>;

    /// `PUT /api/projects/{id}`
    async fn update_project(&self, id: ProjectId, payload: &ProjectPayload) -> Result<()>;

    /// `DELETE /api/projects/{id}`
    async fn delete_project(&self, id: ProjectId) -> Result<()>;
}
