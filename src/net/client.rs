//! Authenticated HTTP client for the resume API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every API call in the app goes through [`ApiClient`]. It resolves paths
//! against the configured base, attaches `Authorization: Bearer <token>` from
//! the persisted store, and normalizes responses into [`ApiError`].
//!
//! ERROR HANDLING
//! ==============
//! - 401: the persisted token is removed, then the error is returned.
//! - 403: logged, returned, no state change.
//! - No response: logged, returned, no state change.
//!
//! Nothing is retried and nothing is swallowed.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use super::types::ApiError;
use crate::config::ClientConfig;
use crate::util::storage::KeyValueStore;

/// Cheap-to-clone handle; clones share transport and store.
#[derive(Clone)]
pub struct ApiClient {
    config: Rc<ClientConfig>,
    transport: Rc<dyn Transport>,
    store: Rc<dyn KeyValueStore>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, transport: Rc<dyn Transport>, store: Rc<dyn KeyValueStore>) -> Self {
        Self { config: Rc::new(config), transport, store }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The persisted store this client reads the token from.
    #[must_use]
    pub fn store(&self) -> &Rc<dyn KeyValueStore> {
        &self.store
    }

    /// Resolve an API-relative path (`/persons/42`) against the base path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_base, path.trim_start_matches('/'))
    }

    fn stored_token(&self) -> Option<String> {
        self.store
            .get(&self.config.token_key)
            .filter(|token| !token.is_empty())
    }

    /// Send a raw request and classify the outcome.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures and non-2xx statuses.
    pub async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<HttpResponse, ApiError> {
        let mut request = HttpRequest::new(method, self.url(path), self.config.request_timeout);
        request.headers.push(("Accept".to_owned(), "application/json".to_owned()));
        if let Some(token) = self.stored_token() {
            request.headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        if let Some(body) = body {
            request.headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
            request.body = Some(body);
        }

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(TransportError::Timeout(after)) => {
                log::warn!("network error: {} {path} timed out", method.as_str());
                return Err(ApiError::Timeout(after));
            }
            Err(TransportError::Network(message)) => {
                log::warn!("network error: {message}");
                return Err(ApiError::Transport(message));
            }
        };

        self.classify(response)
    }

    fn classify(&self, response: HttpResponse) -> Result<HttpResponse, ApiError> {
        if response.is_success() {
            return Ok(response);
        }
        match response.status {
            401 => {
                self.store.remove(&self.config.token_key);
                log::warn!("401 Unauthorized -> token removed");
                Err(ApiError::Unauthorized { body: response.body })
            }
            403 => {
                log::warn!("403 Forbidden: {}", response.body);
                Err(ApiError::Forbidden { body: response.body })
            }
            status => Err(ApiError::Status { status, body: response.body }),
        }
    }

    /// `GET path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`]; also [`ApiError::Decode`] for a bad body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Method::Get, path, None).await?;
        decode_body(&response)
    }

    /// `POST path` with a JSON body and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`]; also `Encode`/`Decode` for body failures.
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let response = self
            .send(Method::Post, path, Some(encode_body(body)?))
            .await?;
        decode_body(&response)
    }

    /// `PUT path` with a JSON body and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::post`].
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let response = self
            .send(Method::Put, path, Some(encode_body(body)?))
            .await?;
        decode_body(&response)
    }

    /// `DELETE path`, ignoring any reply body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, path, None).await?;
        Ok(())
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}
