//! # HTTP client adapter
//!
//! [`ApiClient`] wraps [`reqwest`] for every outbound call: it injects the
//! bearer credential from the [`CredentialStore`], asks for JSON, and maps
//! non-success statuses into [`ApiError`].
//!
//! On a 401 from **any** call the adapter clears the stored credential and
//! pushes a unit event to every registered observer before returning
//! [`ApiError::Unauthorized`]. The session provider subscribes once via
//! [`ApiClient::subscribe_unauthorized`]; that keeps ownership of session
//! transitions in one place instead of an ambient global event.
//!
//! No request timeout is configured: a pending call keeps its view in the
//! loading state until the backend answers.

use std::sync::{Arc, Mutex};

use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use reqwest::multipart::Form;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::credentials::{default_store, SharedCredentials};
use crate::error::ApiError;
use crate::settings::Settings;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: SharedCredentials,
    unauthorized: Arc<Mutex<Vec<UnboundedSender<()>>>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, credentials: SharedCredentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            credentials,
            unauthorized: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Client wired from [`Settings`] and the platform-default credential
    /// store (local storage in the browser, memory elsewhere).
    pub fn from_settings() -> Self {
        let settings = Settings::new().unwrap_or_default();
        Self::new(settings.portal.url, default_store())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &SharedCredentials {
        &self.credentials
    }

    /// Public URL of an uploaded file; the backend serves uploads from
    /// `<host>/storage/` next to its `/api` prefix.
    pub fn storage_url(&self, path: &str) -> String {
        let root = self
            .base_url
            .trim_end_matches('/')
            .trim_end_matches("/api")
            .trim_end_matches('/');
        format!("{root}/storage/{path}")
    }

    /// Register an observer for server-signaled session invalidation. Each
    /// 401 produces one event per live subscriber; dropped receivers are
    /// pruned on the next notification.
    pub fn subscribe_unauthorized(&self) -> UnboundedReceiver<()> {
        let (tx, rx) = unbounded();
        self.unauthorized.lock().unwrap().push(tx);
        rx
    }

    fn notify_unauthorized(&self) {
        tracing::warn!("401 received; clearing credential and notifying session observers");
        self.unauthorized
            .lock()
            .unwrap()
            .retain(|tx| tx.unbounded_send(()).is_ok());
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let request = match self.credentials.get() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            self.credentials.clear();
            self.notify_unauthorized();
            return Err(ApiError::Unauthorized);
        }
        Err(ApiError::from_status(status.as_u16(), &body))
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self.send(self.http.get(self.url(path)).query(query)).await?;
        Self::parse(response).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        Self::parse(response).await
    }

    /// POST without a body (`/logout`, `/comunicados/:id/restore`).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.post(self.url(path))).await?;
        Self::parse(response).await
    }

    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(self.http.put(self.url(path)).json(body)).await?;
        Self::parse(response).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        let response = self
            .send(self.http.post(self.url(path)).multipart(form))
            .await?;
        Self::parse(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(self.url(path))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::MemoryCredentials;

    fn test_client() -> ApiClient {
        ApiClient::new(
            "https://portal.munidistrito.gob.pe/api",
            Arc::new(MemoryCredentials::new()),
        )
    }

    #[test]
    fn test_url_join() {
        let client = test_client();
        assert_eq!(
            client.url("/formularios"),
            "https://portal.munidistrito.gob.pe/api/formularios"
        );
    }

    #[test]
    fn test_storage_url() {
        let client = test_client();
        assert_eq!(
            client.storage_url("comunicados/foto.jpg"),
            "https://portal.munidistrito.gob.pe/storage/comunicados/foto.jpg"
        );
    }

    #[tokio::test]
    async fn test_unauthorized_broadcast_reaches_every_subscriber() {
        use futures::StreamExt;

        let client = test_client();
        let mut first = client.subscribe_unauthorized();
        let mut second = client.subscribe_unauthorized();

        client.notify_unauthorized();
        assert_eq!(first.next().await, Some(()));
        assert_eq!(second.next().await, Some(()));

        // A dropped subscriber is pruned; the rest keep receiving.
        drop(second);
        client.notify_unauthorized();
        assert_eq!(first.next().await, Some(()));
        assert_eq!(client.unauthorized.lock().unwrap().len(), 1);
    }
}
