//! Token verification endpoint.

use async_trait::async_trait;
use reqwest::Method;

use projdesk_core::{Error, Result, Session, SessionVerifier};

use crate::ProjdeskClient;
use crate::error::{body_error, transport_error};

/// Resolves the session by presenting a bearer token to the service.
///
/// Expects `{ "user": { "id": ... } }` from a successful verification.
#[derive(Debug, Clone)]
pub struct HttpSessionVerifier {
    http: reqwest::Client,
    url: String,
    token: String,
}

impl HttpSessionVerifier {
    /// Creates a verifier sharing `client`'s connection pool.
    pub fn new(client: &ProjdeskClient, verify_path: &str, token: impl Into<String>) -> Self {
        Self {
            http: client.http().clone(),
            url: client.url(verify_path),
            token: token.into(),
        }
    }

    /// Verification endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SessionVerifier for HttpSessionVerifier {
    async fn verify(&self) -> Result<Session> {
        let response = self
            .http
            .get(&self.url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| transport_error(Method::GET.as_str(), &self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::session(format!(
                "verification rejected (HTTP {status})"
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| body_error(&self.url, e))?;
        let session: Session = serde_json::from_slice(&body)
            .map_err(|e| Error::session(format!("malformed verification response: {e}")))?;

        tracing::debug!(user_id = %session.user_id(), "Session verified");
        Ok(session)
    }
}
