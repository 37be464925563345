//! HTTP transport for the Helpwire API.

use bytes::Bytes;
use reqwest::RequestBuilder;
use serde::Serialize;

use crate::error::ApiError;

const USER_AGENT: &str = "helpwire-rs/0.1";

/// Credential attached to every outgoing request.
#[derive(Debug, Clone)]
pub enum Credential {
    /// No authentication header.
    Anonymous,
    /// Basic auth with the account email and password.
    Basic { email: String, password: String },
    /// Basic auth with the `{email}/token` username convention and an API token.
    ApiToken { email: String, token: String },
    /// OAuth bearer token.
    Bearer(String),
}

/// Helpwire API client.
///
/// Holds no per-call state; one instance may be shared across any number of
/// concurrent tasks. Resource bindings add their operations through
/// extension traits implemented for this type.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    credential: Credential,
}

impl Client {
    /// Create a client against the given API base URL, e.g.
    /// `https://example.helpwire.com/api/v2`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let parsed = url::Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        if !parsed.has_host() {
            return Err(ApiError::InvalidUrl(format!("missing host: {base_url}")));
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credential: Credential::Anonymous,
        })
    }

    /// Set the credential used for subsequent requests.
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = credential;
        self
    }

    /// GET `path`, returning the raw response body.
    pub async fn get(&self, path: &str) -> Result<Bytes, ApiError> {
        let request = self.http.get(self.endpoint(path));
        self.send("GET", path, request).await
    }

    /// POST `body` as JSON to `path`, returning the raw response body.
    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Bytes, ApiError> {
        let request = self.http.post(self.endpoint(path)).json(body);
        self.send("POST", path, request).await
    }

    /// PUT `body` as JSON to `path`, returning the raw response body.
    pub async fn put<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Bytes, ApiError> {
        let request = self.http.put(self.endpoint(path)).json(body);
        self.send("PUT", path, request).await
    }

    /// DELETE `path`, returning the raw response body.
    pub async fn delete(&self, path: &str) -> Result<Bytes, ApiError> {
        let request = self.http.delete(self.endpoint(path));
        self.send("DELETE", path, request).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credential {
            Credential::Anonymous => request,
            Credential::Basic { email, password } => request.basic_auth(email, Some(password)),
            Credential::ApiToken { email, token } => {
                request.basic_auth(format!("{email}/token"), Some(token))
            }
            Credential::Bearer(token) => request.bearer_auth(token),
        }
    }

    async fn send(
        &self,
        method: &'static str,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Bytes, ApiError> {
        let response = self.authorize(request).send().await.map_err(|e| {
            ApiError::Transport {
                method,
                path: path.to_string(),
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        tracing::debug!(method, path, status = status.as_u16(), "API request");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Error bodies are either {"error": {"message": ...}},
            // {"description": ...} or {"errors": [{"title": ...}]}.
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    v["error"]["message"]
                        .as_str()
                        .or_else(|| v["description"].as_str())
                        .or_else(|| v["errors"][0]["title"].as_str())
                        .map(String::from)
                })
                .unwrap_or(body);
            return Err(ApiError::Status {
                method,
                path: path.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        response.bytes().await.map_err(|e| ApiError::Transport {
            method,
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
