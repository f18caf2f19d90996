//! Session resolution.
//!
//! Every controller flow starts by asking a [`SessionVerifier`] who the
//! current user is. A failure aborts the flow before any project request is
//! made.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::UserId;

/// The user part of a verified session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Identifier of the signed-in user
    pub id: UserId,
}

/// A verified session: `{ "user": { "id": ... } }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The signed-in user
    pub user: SessionUser,
}

impl Session {
    /// Creates a session for the given user.
    pub fn new(id: UserId) -> Self {
        Self {
            user: SessionUser { id },
        }
    }

    /// Returns the signed-in user's identifier.
    pub fn user_id(&self) -> UserId {
        self.user.id
    }
}

/// Resolves the current session to a user identity.
///
/// Implement this for each way a session can be established (token
/// verification endpoint, fixed identity, ...).
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    /// Verifies the current session.
    async fn verify(&self) -> Result<Session>;
}

/// A verifier that resolves to a fixed, configured user.
///
/// Useful when the backend does not run a verification endpoint and in
/// tests. With no user configured every verification fails.
#[derive(Debug, Clone, Default)]
pub struct StaticSessionVerifier {
    user_id: Option<UserId>,
}

impl StaticSessionVerifier {
    /// Creates a verifier that always resolves to `user_id`.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    /// Creates a verifier with no session; every verification fails.
    pub fn signed_out() -> Self {
        Self { user_id: None }
    }
}

#[async_trait]
impl SessionVerifier for StaticSessionVerifier {
    async fn verify(&self) -> Result<Session> {
        self.user_id
            .map(Session::new)
            .ok_or_else(|| Error::session("no signed-in user"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_wire_shape() {
        let session: Session =
            serde_json::from_value(json!({"user": {"id": 7, "email": "a@b"}, "iat": 1})).unwrap();
        assert_eq!(session.user_id(), UserId::new(7));
    }

    #[tokio::test]
    async fn test_static_verifier_resolves_user() {
        let verifier = StaticSessionVerifier::new(UserId::new(7));
        let session = verifier.verify().await.unwrap();
        assert_eq!(session, Session::new(UserId::new(7)));
    }

    #[tokio::test]
    async fn test_signed_out_verifier_fails() {
        let err = StaticSessionVerifier::signed_out()
            .verify()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Session { .. }));
    }
}
