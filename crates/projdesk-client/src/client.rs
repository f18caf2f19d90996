//! reqwest implementation of [`ProjectsBackend`].

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use projdesk_core::{
    Error, NewProject, Project, ProjectId, ProjectPayload, ProjectScope, ProjectsBackend, Result,
    UserDetails, UserId,
};

use crate::config::ClientConfig;
use crate::error::{body_error, decode_error, transport_error};
use crate::paths;

/// Projects service client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ProjdeskClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProjdeskClient {
    /// Creates a client from connection settings.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_http_client(http, config.base_url.clone()))
    }

    /// Creates a client around an existing reqwest client.
    pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Base URL of the service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying reqwest client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Absolute URL for a service path.
    pub fn url(&self, path: &str) -> String {
        paths::join(&self.base_url, path)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http.request(method, url)
    }

    /// Sends a request and fails on any non-success status.
    async fn send(&self, method: Method, url: &str, request: RequestBuilder) -> Result<Response> {
        tracing::debug!(%method, %url, "Sending request");

        let response = request
            .send()
            .await
            .map_err(|e| transport_error(method.as_str(), url, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%method, %url, status = status.as_u16(), "Request rejected");
            return Err(Error::from_status(status.as_u16(), url));
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let response = self
            .send(Method::GET, &url, self.request(Method::GET, &url))
            .await?;
        let body = response.bytes().await.map_err(|e| body_error(&url, e))?;
        serde_json::from_slice(&body).map_err(|e| decode_error(&url, e))
    }
}

#[async_trait]
impl ProjectsBackend for ProjdeskClient {
    async fn fetch_user(&self, id: UserId) -> Result<UserDetails> {
        self.get_json(&paths::user(id)).await
    }

    async fn list_projects(&self, scope: ProjectScope) -> Result<Vec<Project>> {
        let projects: Vec<Project> = self.get_json(&paths::scoped_projects(scope)).await?;
        tracing::debug!(?scope, count = projects.len(), "Fetched projects");
        Ok(projects)
    }

    async fn create_project(&self, project: &NewProject) -> Result<()> {
        let url = self.url(&paths::projects());
        let request = self.request(Method::POST, &url).json(project);
        self.send(Method::POST, &url, request).await?;
        Ok(())
    }

    async fn update_project(&self, id: ProjectId, payload: &ProjectPayload) -> Result<()> {
        let url = self.url(&paths::project(id));
        let request = self.request(Method::PUT, &url).json(payload);
        self.send(Method::PUT, &url, request).await?;
        Ok(())
    }

    async fn delete_project(&self, id: ProjectId) -> Result<()> {
        let url = self.url(&paths::project(id));
        let request = self.request(Method::DELETE, &url);
        self.send(Method::DELETE, &url, request).await?;
        Ok(())
    }
}
