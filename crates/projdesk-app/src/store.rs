//! Shared state of the projects page.
//!
//! [`ProjectStore`] holds the session user, their details, the project list,
//! and the project selected for editing. It is cheap to clone; every clone
//! sees the same state, and views can [`subscribe`](ProjectStore::subscribe)
//! to changes.
//!
//! Loads are ordered with tickets: [`begin_load`](ProjectStore::begin_load)
//! issues a new ticket and [`commit_load`](ProjectStore::commit_load) only
//! applies a result whose ticket is newer than the last committed one. A slow
//! load can never overwrite a newer one, and a newer load that fails does not
//! stop an older one from landing.
//!
//! ```rust
//! use projdesk_app::ProjectStore;
//! use projdesk_core::{UserDetails, UserId};
//!
//! let store = ProjectStore::new();
//! let first = store.begin_load();
//! let second = store.begin_load();
//!
//! let user = UserDetails::new(UserId::new(7), "MP");
//! assert!(store.commit_load(second, UserId::new(7), user.clone(), vec![]));
//! assert!(!store.commit_load(first, UserId::new(7), user, vec![]));
//! ```

use std::sync::Arc;

use tokio::sync::watch;

use projdesk_core::{Project, ProjectId, UserDetails, UserId, can_manage_projects};

// ============================================================================
// StoreSnapshot
// ============================================================================

/// Point-in-time view of the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSnapshot {
    /// User of the session the data was loaded for.
    pub session_user: Option<UserId>,
    /// Details of that user; `None` until the first successful load.
    pub user: Option<UserDetails>,
    /// Projects visible to that user.
    pub projects: Vec<Project>,
    /// Project selected for editing.
    pub edit_target: Option<ProjectId>,
    /// Most recently issued load ticket.
    pub generation: u64,
    /// Ticket of the load the current data came from.
    pub committed_generation: u64,
}

impl StoreSnapshot {
    /// Returns `true` if the loaded user may change projects.
    ///
    /// `false` while no user details are loaded.
    pub fn can_manage(&self) -> bool {
        self.user.as_ref().is_some_and(can_manage_projects)
    }

    /// Looks up a loaded project.
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Returns the project selected for editing, if it is still loaded.
    pub fn edit_target_project(&self) -> Option<&Project> {
        self.edit_target.and_then(|id| self.project(id))
    }
}

// ============================================================================
// ProjectStore
// ============================================================================

/// Ticket returned by [`ProjectStore::begin_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadTicket {
    /// Generation number of this ticket.
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Shared handle to the page state.
///
/// State changes are broadcast to all subscribers via a watch channel.
#[derive(Clone)]
pub struct ProjectStore {
    tx: Arc<watch::Sender<StoreSnapshot>>,
}

impl ProjectStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(StoreSnapshot::default());
        Self { tx: Arc::new(tx) }
    }

    /// Returns the current state.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.tx.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.tx.subscribe()
    }

    /// Starts a load and returns its ticket.
    pub fn begin_load(&self) -> LoadTicket {
        let mut generation = 0;
        self.tx.send_modify(|state| {
            state.generation += 1;
            generation = state.generation;
        });
        LoadTicket(generation)
    }

    /// Applies the result of a load.
    ///
    /// Returns `false` (and changes nothing) when a load issued after
    /// `ticket` has already committed. When the session user differs from the
    /// one the current data belongs to, or the edit target is no longer in
    /// `projects`, the edit selection is dropped as well.
    pub fn commit_load(
        &self,
        ticket: LoadTicket,
        session_user: UserId,
        user: UserDetails,
        projects: Vec<Project>,
    ) -> bool {
        self.tx.send_if_modified(|state| {
            if ticket.0 <= state.committed_generation {
                return false;
            }

            if state.session_user.is_some_and(|current| current != session_user) {
                tracing::info!(
                    previous = ?state.session_user,
                    current = %session_user,
                    "Session user changed; dropping cached state"
                );
                state.edit_target = None;
            }
            if state
                .edit_target
                .is_some_and(|id| !projects.iter().any(|p| p.id == id))
            {
                state.edit_target = None;
            }

            state.committed_generation = ticket.0;
            state.session_user = Some(session_user);
            state.user = Some(user);
            state.projects = projects;
            true
        })
    }

    /// Marks a loaded project as the edit target and returns it.
    ///
    /// An unknown id clears the selection and returns `None`.
    pub fn select(&self, id: ProjectId) -> Option<Project> {
        let mut selected = None;
        self.tx.send_modify(|state| {
            selected = state.project(id).cloned();
            state.edit_target = selected.as_ref().map(|p| p.id);
        });
        selected
    }

    /// Drops all cached state, e.g. on sign-out.
    ///
    /// Loads started before the call can no longer commit.
    pub fn invalidate(&self) {
        self.tx.send_modify(|state| {
            let generation = state.generation + 1;
            *state = StoreSnapshot {
                generation,
                committed_generation: generation,
                ..StoreSnapshot::default()
            };
        });
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("state", &*self.tx.borrow())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn project(id: i64, owner: i64) -> Project {
        Project {
            id: ProjectId::new(id),
            name: format!("P{id}"),
            link: format!("http://p/{id}"),
            user_id: UserId::new(owner),
            additional_members: None,
        }
    }

    fn manager(id: i64) -> UserDetails {
        UserDetails::new(UserId::new(id), "MP")
    }

    #[test]
    fn test_new_store_is_empty() {
        let snapshot = ProjectStore::new().snapshot();
        assert!(snapshot.projects.is_empty());
        assert!(snapshot.user.is_none());
        assert!(!snapshot.can_manage());
    }

    #[test]
    fn test_commit_latest_ticket() {
        let store = ProjectStore::new();
        let ticket = store.begin_load();
        assert!(store.commit_load(ticket, UserId::new(7), manager(7), vec![project(1, 7)]));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.projects.len(), 1);
        assert!(snapshot.can_manage());
        assert_eq!(snapshot.session_user, Some(UserId::new(7)));
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let store = ProjectStore::new();
        let old = store.begin_load();
        let new = store.begin_load();

        assert!(store.commit_load(new, UserId::new(7), manager(7), vec![project(2, 7)]));
        assert!(!store.commit_load(old, UserId::new(7), manager(7), vec![project(1, 7)]));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.projects, vec![project(2, 7)]);
    }

    #[test]
    fn test_failed_newer_load_does_not_block_older() {
        let store = ProjectStore::new();
        let older = store.begin_load();
        // Issued and never committed, as when the fetch fails.
        let _newer = store.begin_load();

        assert!(store.commit_load(older, UserId::new(7), manager(7), vec![project(1, 7)]));
        let snapshot = store.snapshot();
        assert_eq!(snapshot.projects, vec![project(1, 7)]);
        assert_eq!(snapshot.committed_generation, older.generation());
    }

    #[test]
    fn test_vanished_edit_target_is_dropped() {
        let store = ProjectStore::new();
        let ticket = store.begin_load();
        store.commit_load(ticket, UserId::new(7), manager(7), vec![project(1, 7), project(2, 7)]);
        store.select(ProjectId::new(1));

        let ticket = store.begin_load();
        store.commit_load(ticket, UserId::new(7), manager(7), vec![project(1, 7)]);
        assert_eq!(store.snapshot().edit_target, Some(ProjectId::new(1)));

        let ticket = store.begin_load();
        store.commit_load(ticket, UserId::new(7), manager(7), vec![project(2, 7)]);
        assert_eq!(store.snapshot().edit_target, None);
    }

    #[test]
    fn test_select_known_and_unknown() {
        let store = ProjectStore::new();
        let ticket = store.begin_load();
        store.commit_load(ticket, UserId::new(7), manager(7), vec![project(1, 7)]);

        let selected = store.select(ProjectId::new(1)).unwrap();
        assert_eq!(selected.name, "P1");
        assert_eq!(store.snapshot().edit_target, Some(ProjectId::new(1)));
        assert_eq!(store.snapshot().edit_target_project().unwrap().id, ProjectId::new(1));

        assert!(store.select(ProjectId::new(99)).is_none());
        assert_eq!(store.snapshot().edit_target, None);
    }

    #[test]
    fn test_identity_change_drops_selection() {
        let store = ProjectStore::new();
        let ticket = store.begin_load();
        store.commit_load(ticket, UserId::new(7), manager(7), vec![project(1, 7)]);
        store.select(ProjectId::new(1));

        let ticket = store.begin_load();
        store.commit_load(ticket, UserId::new(8), manager(8), vec![project(1, 7)]);
        assert_eq!(store.snapshot().edit_target, None);
        assert_eq!(store.snapshot().session_user, Some(UserId::new(8)));
    }

    #[test]
    fn test_invalidate_blocks_in_flight_loads() {
        let store = ProjectStore::new();
        let ticket = store.begin_load();
        store.invalidate();

        assert!(!store.commit_load(ticket, UserId::new(7), manager(7), vec![project(1, 7)]));
        assert!(store.snapshot().projects.is_empty());
    }

    #[tokio::test]
    async fn test_subscribers_see_commits() {
        let store = ProjectStore::new();
        let mut rx = store.subscribe();

        let clone = store.clone();
        let ticket = clone.begin_load();
        clone.commit_load(ticket, UserId::new(7), manager(7), vec![project(1, 7)]);

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().projects.len(), 1);
    }
}
