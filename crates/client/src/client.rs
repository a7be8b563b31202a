//! HTTP plumbing shared by every service call.

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use backoffice_auth::Session;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::response::{ApiResponse, error_message};

/// Typed client for the back-office REST service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: config.api_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Request without credentials (login only).
    pub(crate) fn anonymous(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    pub(crate) fn authed(&self, method: Method, path: &str, session: &Session) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .bearer_auth(session.token().as_str())
    }

    /// Send and unwrap the `data` field of the response envelope.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.dispatch(operation, request).await?;
        let envelope: ApiResponse<T> = response.json().await.map_err(|e| ClientError::Decode {
            operation,
            message: e.to_string(),
        })?;
        Ok(envelope.data)
    }

    pub(crate) async fn send_with_body<B, T>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
        body: &B,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(operation, request.json(body)).await
    }

    /// Send and discard whatever body comes back.
    pub(crate) async fn send_empty(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<(), ClientError> {
        self.dispatch(operation, request).await.map(|_| ())
    }

    pub(crate) async fn send_bytes(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<Vec<u8>, ClientError> {
        let response = self.dispatch(operation, request).await?;
        let bytes = response.bytes().await.map_err(|e| ClientError::Decode {
            operation,
            message: e.to_string(),
        })?;
        Ok(bytes.to_vec())
    }

    async fn dispatch(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<Response, ClientError> {
        let response = request.send().await.map_err(|source| {
            tracing::warn!(operation, error = %source, "request did not reach the server");
            ClientError::Unreachable { operation, source }
        })?;
        check_status(operation, response).await
    }
}

async fn check_status(operation: &'static str, response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        tracing::debug!(operation, status = status.as_u16(), "request succeeded");
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    });
    tracing::warn!(operation, status = status.as_u16(), %message, "request rejected");

    if status == StatusCode::UNAUTHORIZED {
        Err(ClientError::Unauthorized { operation, message })
    } else {
        Err(ClientError::Api {
            operation,
            status: status.as_u16(),
            message,
        })
    }
}
