//! Role-based capabilities.
//!
//! Every role decision in projdesk goes through this module: whether write
//! controls are offered, and which project collection a user sees.

use serde::{Deserialize, Serialize};

use crate::types::{UserDetails, UserId};

/// Returns `true` if the user may create, edit, and delete projects.
pub fn can_manage_projects(user: &UserDetails) -> bool {
    user.usertype.is_manager()
}

/// Which project collection a user is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectScope {
    /// Every project.
    All,
    /// Only projects created by the given user.
    OwnedBy(UserId),
}

impl ProjectScope {
    /// Resolves the scope for a session user.
    ///
    /// Managers see their own projects; everyone else sees all of them.
    pub fn for_user(user: &UserDetails, session_user: UserId) -> Self {
        if can_manage_projects(user) {
            Self::OwnedBy(session_user)
        } else {
            Self::All
        }
    }
}
