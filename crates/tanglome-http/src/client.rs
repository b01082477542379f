//! HTTP client for the remote auth API.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use tanglome_core::ApiUrl;
use tanglome_core::error::{Error, Rejection, TransportError};

use crate::endpoints::ApiErrorResponse;

/// Map a reqwest error into the core transport taxonomy.
///
/// Lives here rather than on the core error type so the core crate stays
/// free of the HTTP stack.
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else if err.is_decode() {
        TransportError::Decode {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

/// Thin typed wrapper over reqwest for the auth endpoints.
///
/// Request bodies carry passwords, so they are never logged at any level.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
    api: ApiUrl,
}

impl HttpClient {
    /// Create a new client for the given API base URL.
    pub(crate) fn new(api: ApiUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("tanglome/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, api }
    }

    /// Returns the API base URL this client is configured for.
    pub(crate) fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// Make an authenticated GET request.
    #[instrument(skip(self, token), fields(api = %self.api))]
    pub(crate) async fn get_authed<R>(&self, path: &str, token: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(path, "API authenticated query");

        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers(token))
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Make an unauthenticated POST request.
    #[instrument(skip(self, body), fields(api = %self.api))]
    pub(crate) async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(path, "API procedure");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Make an authenticated PUT request.
    #[instrument(skip(self, body, token), fields(api = %self.api))]
    pub(crate) async fn put_authed<B, R>(&self, path: &str, body: &B, token: &str) -> Result<R, Error>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(path, "API authenticated procedure");

        let response = self
            .client
            .put(&url)
            .json(body)
            .headers(self.auth_headers(token))
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Make an authenticated PUT request whose response body is ignored.
    #[instrument(skip(self, body, token), fields(api = %self.api))]
    pub(crate) async fn put_authed_no_response<B>(
        &self,
        path: &str,
        body: &B,
        token: &str,
    ) -> Result<(), Error>
    where
        B: Serialize,
    {
        let url = self.api.endpoint(path);
        debug!(path, "API authenticated procedure (no response)");

        let response = self
            .client
            .put(&url)
            .json(body)
            .headers(self.auth_headers(token))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let rejection = self.parse_error_response(response).await;
            Err(Error::Rejected(rejection))
        }
    }

    /// Create authorization headers for authenticated requests.
    fn auth_headers(&self, token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", token);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).expect("invalid token characters"),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Handle a response, parsing the body or the error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "API response");

        if status.is_success() {
            let body = response.json::<R>().await.map_err(transport_error)?;
            Ok(body)
        } else {
            let rejection = self.parse_error_response(response).await;
            Err(Error::Rejected(rejection))
        }
    }

    /// Parse a non-2xx response body.
    async fn parse_error_response(&self, response: reqwest::Response) -> Rejection {
        let status = response.status().as_u16();

        // Try to parse as the API error format
        match response.json::<ApiErrorResponse>().await {
            Ok(error_body) => Rejection::new(status, error_body.message),
            Err(_) => Rejection::new(status, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let api = ApiUrl::new("https://blog-backend-g3la.onrender.com/api").unwrap();
        let client = HttpClient::new(api.clone());
        assert_eq!(client.api().as_str(), api.as_str());
    }
}
