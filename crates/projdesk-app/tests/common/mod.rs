//! Common test utilities for projdesk-app integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use projdesk_app::{PageOptions, ProjectsController, ProjectsPage, RecordingNotifier};
use projdesk_core::{
    Error, NewProject, Project, ProjectId, ProjectPayload, ProjectScope, ProjectsBackend, Result,
    StaticSessionVerifier, UserDetails, UserId,
};

/// Backend call, as recorded by [`InMemoryBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    FetchUser(UserId),
    ListAll,
    ListOwnedBy(UserId),
    Create(NewProject),
    Update(ProjectId, ProjectPayload),
    Delete(ProjectId),
}

#[derive(Default)]
struct State {
    users: HashMap<UserId, UserDetails>,
    projects: Vec<Project>,
    next_id: i64,
    requests: Vec<Request>,
    failures: HashMap<&'static str, u16>,
}

/// A projects service held in memory.
///
/// Records every request, and can be told to answer a given kind of request
/// with an HTTP status instead.
#[derive(Default)]
pub struct InMemoryBackend {
    state: Mutex<State>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, id: i64, usertype: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .users
            .insert(UserId::new(id), UserDetails::new(UserId::new(id), usertype));
        self
    }

    pub fn with_project(self, project: Project) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.next_id = state.next_id.max(project.id.get());
            state.projects.push(project);
        }
        self
    }

    /// Answers every request of `kind` ("fetch_user", "list", "create",
    /// "update", "delete") with `status`.
    pub fn fail(&self, kind: &'static str, status: u16) {
        self.state.lock().unwrap().failures.insert(kind, status);
    }

    pub fn heal(&self) {
        self.state.lock().unwrap().failures.clear();
    }

    pub fn requests(&self) -> Vec<Request> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn clear_requests(&self) {
        self.state.lock().unwrap().requests.clear();
    }

    pub fn projects(&self) -> Vec<Project> {
        self.state.lock().unwrap().projects.clone()
    }

    fn begin(&self, kind: &'static str, request: Request) -> Result<std::sync::MutexGuard<'_, State>> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        match state.failures.get(kind) {
            Some(status) => Err(Error::from_status(*status, kind)),
            None => Ok(state),
        }
    }
}

#[async_trait]
impl ProjectsBackend for InMemoryBackend {
    async fn fetch_user(&self, id: UserId) -> Result<UserDetails> {
        let state = self.begin("fetch_user", Request::FetchUser(id))?;
        state
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::from_status(404, format!("/api/users/{id}")))
    }

    async fn list_projects(&self, scope: ProjectScope) -> Result<Vec<Project>> {
        let request = match scope {
            ProjectScope::All => Request::ListAll,
            ProjectScope::OwnedBy(id) => Request::ListOwnedBy(id),
        };
        let state = self.begin("list", request)?;
        Ok(state
            .projects
            .iter()
            .filter(|p| match scope {
                ProjectScope::All => true,
                ProjectScope::OwnedBy(id) => p.user_id == id,
            })
            .cloned()
            .collect())
    }

    async fn create_project(&self, project: &NewProject) -> Result<()> {
        let mut state = self.begin("create", Request::Create(project.clone()))?;
        state.next_id += 1;
        let id = ProjectId::new(state.next_id);
        state.projects.push(Project {
            id,
            name: project.payload.name.clone(),
            link: project.payload.link.clone(),
            user_id: project.user_id,
            additional_members: Some(project.payload.additional_members.clone()),
        });
        Ok(())
    }

    async fn update_project(&self, id: ProjectId, payload: &ProjectPayload) -> Result<()> {
        let mut state = self.begin("update", Request::Update(id, payload.clone()))?;
        let project = state
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::from_status(404, format!("/api/projects/{id}")))?;
        project.name = payload.name.clone();
        project.link = payload.link.clone();
        project.additional_members = Some(payload.additional_members.clone());
        Ok(())
    }

    async fn delete_project(&self, id: ProjectId) -> Result<()> {
        let mut state = self.begin("delete", Request::Delete(id))?;
        state.projects.retain(|p| p.id != id);
        Ok(())
    }
}

pub fn project(id: i64, name: &str, owner: i64, members: Option<&str>) -> Project {
    Project {
        id: ProjectId::new(id),
        name: name.to_string(),
        link: format!("http://{}", name.to_lowercase()),
        user_id: UserId::new(owner),
        additional_members: members.map(str::to_string),
    }
}

/// Wires a page to an in-memory backend for a signed-in user.
pub struct TestHarness {
    pub backend: Arc<InMemoryBackend>,
    pub notifier: Arc<RecordingNotifier>,
    pub controller: ProjectsController,
}

impl TestHarness {
    pub fn new(backend: InMemoryBackend, session_user: i64) -> Self {
        Self::with_verifier(backend, StaticSessionVerifier::new(UserId::new(session_user)))
    }

    pub fn signed_out(backend: InMemoryBackend) -> Self {
        Self::with_verifier(backend, StaticSessionVerifier::signed_out())
    }

    fn with_verifier(backend: InMemoryBackend, verifier: StaticSessionVerifier) -> Self {
        let backend = Arc::new(backend);
        let notifier = Arc::new(RecordingNotifier::new());
        let controller =
            ProjectsController::new(backend.clone(), Arc::new(verifier), notifier.clone());
        Self {
            backend,
            notifier,
            controller,
        }
    }

    pub fn page(&self) -> ProjectsPage {
        ProjectsPage::new(self.controller.clone())
    }

    pub fn page_with(&self, options: PageOptions) -> ProjectsPage {
        ProjectsPage::with_options(self.controller.clone(), options)
    }

    /// The standard fixture: user 7 is a manager owning "Alpha"; user 8 owns
    /// "Beta".
    pub fn alpha_fixture() -> InMemoryBackend {
        InMemoryBackend::new()
            .with_user(7, "MP")
            .with_user(8, "ST")
            .with_project(project(1, "Alpha", 7, Some("Bob")))
            .with_project(project(2, "Beta", 8, None))
    }
}
