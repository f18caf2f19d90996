//! Load and mutation flows of the projects page.
//!
//! Every flow follows the same shape: run the backend calls in order, and on
//! failure log the specific error and show the operation's one generic
//! message. Successful mutations are followed by a full reload; nothing is
//! patched locally.

use std::sync::Arc;

use projdesk_core::{
    Error, NewProject, Project, ProjectId, ProjectPayload, ProjectScope, ProjectsBackend, Result,
    SessionVerifier,
};

use crate::notify::{Notification, Notifier};
use crate::operation::Operation;
use crate::store::{ProjectStore, StoreSnapshot};

/// Orchestrates session resolution, role-scoped loading, and mutations.
///
/// Cheap to clone; clones share the same store.
#[derive(Clone)]
pub struct ProjectsController {
    backend: Arc<dyn ProjectsBackend>,
    verifier: Arc<dyn SessionVerifier>,
    notifier: Arc<dyn Notifier>,
    store: ProjectStore,
}

impl ProjectsController {
    /// Creates a controller with a fresh store.
    pub fn new(
        backend: Arc<dyn ProjectsBackend>,
        verifier: Arc<dyn SessionVerifier>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::with_store(backend, verifier, notifier, ProjectStore::new())
    }

    /// Creates a controller over an existing, possibly shared, store.
    pub fn with_store(
        backend: Arc<dyn ProjectsBackend>,
        verifier: Arc<dyn SessionVerifier>,
        notifier: Arc<dyn Notifier>,
        store: ProjectStore,
    ) -> Self {
        Self {
            backend,
            verifier,
            notifier,
            store,
        }
    }

    /// The store this controller writes to.
    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    /// Where notifications go.
    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    /// Current state of the store.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.store.snapshot()
    }

    /// Loads the session user and the projects they may see.
    ///
    /// Managers get their own projects, everyone else gets all of them. On
    /// failure the store keeps its previous contents.
    pub async fn load(&self) -> Result<()> {
        match self.try_load().await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.report_failure(Operation::Fetch, &err);
                Err(err)
            }
        }
    }

    async fn try_load(&self) -> Result<()> {
        let ticket = self.store.begin_load();

        let session = self.verifier.verify().await?;
        let user_id = session.user_id();
        let user = self.backend.fetch_user(user_id).await?;
        let scope = ProjectScope::for_user(&user, user_id);
        let projects = self.backend.list_projects(scope).await?;

        tracing::info!(
            user_id = %user_id,
            usertype = %user.usertype,
            ?scope,
            count = projects.len(),
            "Loaded projects"
        );

        if !self.store.commit_load(ticket, user_id, user, projects) {
            tracing::debug!(
                generation = ticket.generation(),
                "Discarding result of superseded load"
            );
        }
        Ok(())
    }

    /// Creates a project owned by the session user.
    pub async fn create(&self, payload: ProjectPayload) -> Result<()> {
        let result = async {
            let session = self.verifier.verify().await?;
            let project = NewProject::new(payload, session.user_id());
            tracing::info!(user_id = %project.user_id, name = %project.payload.name, "Creating project");
            self.backend.create_project(&project).await
        }
        .await;

        self.finish_mutation(Operation::Add, result).await
    }

    /// Marks a loaded project as the edit target.
    ///
    /// Returns `None`, and clears any previous target, if the project is not
    /// in the current list.
    pub fn select_for_edit(&self, id: ProjectId) -> Option<Project> {
        let selected = self.store.select(id);
        if selected.is_none() {
            tracing::warn!(project_id = %id, "Project selected for editing is not loaded");
        }
        selected
    }

    /// Overwrites the edit target with `payload`.
    pub async fn update(&self, payload: ProjectPayload) -> Result<()> {
        let result = async {
            let id = self.store.snapshot().edit_target.ok_or(Error::NoEditTarget)?;
            tracing::info!(project_id = %id, "Updating project");
            self.backend.update_project(id, &payload).await
        }
        .await;

        self.finish_mutation(Operation::Update, result).await
    }

    /// Deletes a project.
    pub async fn delete(&self, id: ProjectId) -> Result<()> {
        tracing::info!(project_id = %id, "Deleting project");
        let result = self.backend.delete_project(id).await;
        self.finish_mutation(Operation::Delete, result).await
    }

    /// Drops all cached state.
    pub fn sign_out(&self) {
        tracing::info!("Signing out; clearing project state");
        self.store.invalidate();
    }

    async fn finish_mutation(&self, operation: Operation, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => {
                if let Some(message) = operation.success_message() {
                    self.notifier.notify(Notification::success(message));
                }
                // A failed reload reports itself; the mutation still succeeded.
                if let Err(err) = self.load().await {
                    tracing::debug!(operation = %operation, error = %err, "Reload after mutation failed");
                }
                Ok(())
            }
            Err(err) => {
                self.report_failure(operation, &err);
                Err(err)
            }
        }
    }

    fn report_failure(&self, operation: Operation, err: &Error) {
        tracing::error!(
            operation = %operation,
            error = %err,
            retryable = err.is_retryable(),
            "{}",
            operation.failure_message()
        );
        self.notifier
            .notify(Notification::error(operation.failure_message()));
    }
}

impl std::fmt::Debug for ProjectsController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectsController")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
