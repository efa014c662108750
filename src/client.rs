//! The request/response pipeline every endpoint wrapper goes through.

use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiErrorBody, Error, Result};

const API_KEY_HEADER: &str = "X-API-Key";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Absent request body, for endpoints that take none.
pub(crate) const NO_BODY: Option<&()> = None;

/// Handle to one PowerDNS API server.
///
/// Holds nothing but immutable configuration and the connection pool, so
/// it is cheap to clone and safe to share across tasks. Each call is one
/// request/response round trip; there are no retries and no background
/// work.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String, // e.g. "http://127.0.0.1:8081/api/v1"
    api_key: String,
    server_id: String, // usually "localhost"
}

/// Configures and builds a [`Client`].
pub struct ClientBuilder {
    base_url: String,
    api_key: String,
    server_id: String,
    timeout: Duration,
}

impl ClientBuilder {
    /// Server id (virtual host) the API paths address. Defaults to
    /// `"localhost"`.
    pub fn server_id(mut self, server_id: impl Into<String>) -> Self {
        self.server_id = server_id.into();
        self
    }

    /// Per-request timeout, covering connect through body. Defaults to
    /// 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<Client> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(Error::Transport)?;
        Ok(Client {
            http,
            base_url: self.base_url,
            api_key: self.api_key,
            server_id: self.server_id,
        })
    }
}

impl Client {
    /// Client with default settings for the given server id.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        server_id: impl Into<String>,
    ) -> Result<Self> {
        Client::builder(base_url, api_key).server_id(server_id).build()
    }

    pub fn builder(base_url: impl Into<String>, api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            base_url: base_url.into(),
            api_key: api_key.into(),
            server_id: "localhost".into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/servers/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.server_id,
            path.trim_start_matches('/')
        )
    }

    /// Sends one request and maps the status line, leaving the body for
    /// the caller.
    async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!(%method, %url, "dispatching API request");

        let mut req = self
            .http
            .request(method, &url)
            .header(API_KEY_HEADER, &self.api_key);
        if let Some(body) = body {
            req = req.json(body);
        }

        let res = req.send().await.map_err(Error::Transport)?;
        let status = res.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(api_error(status, res).await);
        }
        Ok(res)
    }

    /// Executes a call and decodes the JSON response body into `T`.
    pub(crate) async fn execute<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let res = self.dispatch(method, path, body).await?;
        let bytes = res.bytes().await.map_err(Error::Transport)?;
        serde_json::from_slice(&bytes).map_err(Error::Decode)
    }

    /// Executes a call whose response body is irrelevant. The body is
    /// never read, so empty 2xx responses succeed without a decode
    /// attempt.
    pub(crate) async fn execute_discard<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(method, path, body).await?;
        Ok(())
    }
}

/// Builds an [`Error::Api`] from a non-success response, preferring the
/// server's own error message over the status line.
async fn api_error(status: StatusCode, res: reqwest::Response) -> Error {
    let message = match res.bytes().await {
        Ok(body) => match serde_json::from_slice::<ApiErrorBody>(&body) {
            Ok(parsed) => parsed.error,
            Err(_) => status_text(status),
        },
        Err(_) => status_text(status),
    };
    Error::Api {
        status: status.as_u16(),
        message,
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("unknown status")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_server_id_and_path() {
        let client = Client::builder("http://127.0.0.1:8081/api/v1", "secret")
            .server_id("localhost")
            .build()
            .unwrap();
        assert_eq!(
            client.url("zones/example.com"),
            "http://127.0.0.1:8081/api/v1/servers/localhost/zones/example.com"
        );
    }

    #[test]
    fn url_tolerates_stray_slashes() {
        let client = Client::builder("http://127.0.0.1:8081/api/v1/", "secret")
            .build()
            .unwrap();
        assert_eq!(
            client.url("/config"),
            "http://127.0.0.1:8081/api/v1/servers/localhost/config"
        );
    }
}
