//! User details and the role flag.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::UserId;

/// Wire value of the project-manager role.
pub const MANAGER_USERTYPE: &str = "MP";

/// The user-type flag.
///
/// Only the manager role is distinguished; every other value is kept
/// verbatim but treated as one non-privileged case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserType {
    /// Project manager: sees only their own projects and may change them.
    Manager,
    /// Any other role, including an absent flag.
    Other(String),
}

impl UserType {
    /// Returns `true` for the manager role.
    pub fn is_manager(&self) -> bool {
        matches!(self, Self::Manager)
    }

    /// Returns the wire value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Manager => MANAGER_USERTYPE,
            Self::Other(raw) => raw,
        }
    }
}

impl Default for UserType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for UserType {
    fn from(raw: String) -> Self {
        if raw == MANAGER_USERTYPE {
            Self::Manager
        } else {
            Self::Other(raw)
        }
    }
}

impl From<&str> for UserType {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for UserType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(UserType::from).unwrap_or_default())
    }
}

/// Details of the session's user, as returned by `GET /api/users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    /// User identifier; some backends omit it from the response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,

    /// Role flag
    #[serde(default)]
    pub usertype: UserType,
}

impl UserDetails {
    /// Creates user details with the given role.
    pub fn new(id: UserId, usertype: impl Into<UserType>) -> Self {
        Self {
            id: Some(id),
            usertype: usertype.into(),
        }
    }
}
