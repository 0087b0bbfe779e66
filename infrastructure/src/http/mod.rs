//! Shared HTTP plumbing for the remote providers.
//!
//! One [`reqwest::Client`] is built per process and cloned into each adapter.
//! Status and transport failures are mapped onto [`ProviderError`] here so
//! adapters only deal with their own payload shapes.

use ideascore_application::ProviderError;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default `User-Agent` for every outbound request.
pub const USER_AGENT: &str = concat!("ideascore/", env!("CARGO_PKG_VERSION"));

/// Build the shared client.
///
/// `timeout` bounds a single request; the provider deadline around a whole
/// fetch is applied separately by the application layer.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}

/// Send a request and reject non-2xx statuses.
pub(crate) async fn send(
    request: reqwest::RequestBuilder,
) -> Result<reqwest::Response, ProviderError> {
    let response = request.send().await.map_err(network_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Http {
            status: status.as_u16(),
        });
    }
    Ok(response)
}

/// Send and read the body as text.
pub(crate) async fn get_text(request: reqwest::RequestBuilder) -> Result<String, ProviderError> {
    send(request).await?.text().await.map_err(network_error)
}

/// Send and decode a JSON body.
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ProviderError> {
    let body = get_text(request).await?;
    serde_json::from_str(&body).map_err(|e| ProviderError::Parse(e.to_string()))
}

fn network_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Network("request timed out".to_string())
    } else {
        ProviderError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_names_crate_version() {
        assert!(USER_AGENT.starts_with("ideascore/"));
        assert!(USER_AGENT.len() > "ideascore/".len());
    }

    #[test]
    fn test_build_client() {
        assert!(build_client(Duration::from_secs(5)).is_ok());
    }
}
