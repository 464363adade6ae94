use std::fmt;
use std::future::Future;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::GraphError;
use super::cloud::Cloud;

/// OData error envelope returned by Graph on failure.
#[derive(Debug, Deserialize)]
pub struct ODataError {
    pub error: ODataErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ODataErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V1,
    Beta,
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiVersion::V1 => write!(f, "v1.0"),
            ApiVersion::Beta => write!(f, "beta"),
        }
    }
}

/// Thin JSON client for one Graph service root (`v1.0` or `beta`).
#[derive(Clone)]
pub struct GraphClient {
    client: reqwest::Client,
    base_url: String,
}

impl GraphClient {
    pub fn new(token: &str, base_url: impl Into<String>) -> Result<Self, GraphError> {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", token);
        let header_value = HeaderValue::from_str(&auth_value).map_err(|_| GraphError::Auth {
            message: "Invalid token format".to_string(),
        })?;
        headers.insert(AUTHORIZATION, header_value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(GraphError::Network)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GraphError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::decode(path, response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, GraphError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::decode(path, response).await
    }

    /// Graph answers PATCH with `204 No Content`; any body is ignored.
    pub async fn patch<B>(&self, path: &str, body: &B) -> Result<(), GraphError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.client.patch(self.url(path)).json(body).send().await?;
        Self::check(path, response).await.map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), GraphError> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::check(path, response).await.map(|_| ())
    }

    async fn decode<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, GraphError> {
        let response = Self::check(path, response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GraphError::Decode(format!("{}: {}", path, e)))
    }

    async fn check(
        path: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GraphError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let (code, message) = match serde_json::from_str::<ODataError>(&body) {
            Ok(odata) => (odata.error.code, odata.error.message),
            Err(_) => (
                status.canonical_reason().unwrap_or("Unknown").to_string(),
                body,
            ),
        };

        tracing::debug!(path, status = status.as_u16(), %code, "Graph request failed");
        Err(GraphError::from_status(path, status.as_u16(), code, message))
    }
}

impl fmt::Debug for GraphClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// The stable and beta clients built once at provider configure time.
#[derive(Debug, Clone)]
pub struct GraphClients {
    pub stable: GraphClient,
    pub beta: GraphClient,
}

impl GraphClients {
    pub fn new(token: &str, cloud: Cloud) -> Result<Self, GraphError> {
        let endpoints = cloud.endpoints();
        Self::with_base_urls(
            token,
            endpoints.graph_service_root,
            endpoints.graph_beta_service_root,
        )
    }

    /// NOTE: Primarily used for testing with mock servers.
    pub fn with_base_urls(
        token: &str,
        stable_url: impl Into<String>,
        beta_url: impl Into<String>,
    ) -> Result<Self, GraphError> {
        Ok(Self {
            stable: GraphClient::new(token, stable_url)?,
            beta: GraphClient::new(token, beta_url)?,
        })
    }

    pub fn for_version(&self, version: ApiVersion) -> &GraphClient {
        match version {
            ApiVersion::V1 => &self.stable,
            ApiVersion::Beta => &self.beta,
        }
    }
}

/// Bounds a Graph call; expiry is reported as a client error.
pub async fn with_timeout<T, F>(limit: Duration, call: F) -> Result<T, GraphError>
where
    F: Future<Output = Result<T, GraphError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(GraphError::Timeout(limit)),
    }
}
