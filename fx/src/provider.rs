//! Rate provider trait and implementations.

use std::time::Duration;

use async_trait::async_trait;
use ratebridge_common::ExchangeRate;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::error::{FxError, FxResult};

/// Default upstream request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Source of raw rate observations.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Get the provider name.
    fn name(&self) -> &str;

    /// Fetch the current set of pairwise observations.
    async fn fetch_rates(&self) -> FxResult<Vec<ExchangeRate>>;
}

/// Fetches observations as a JSON array from an HTTP endpoint.
pub struct HttpRateProvider {
    client: Client,
    url: String,
}

impl HttpRateProvider {
    /// Create a provider with its own client using the given timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> FxResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, url))
    }

    /// Create a provider around an existing client.
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// The upstream URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RateProvider for HttpRateProvider {
    fn name(&self) -> &str {
        "HTTP"
    }

    async fn fetch_rates(&self) -> FxResult<Vec<ExchangeRate>> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FxError::Provider(format!(
                "unexpected status code: {}",
                status.as_u16()
            )));
        }

        let body = response.bytes().await?;
        let rates: Vec<ExchangeRate> = serde_json::from_slice(&body)
            .map_err(|e| FxError::Provider(format!("failed to decode rates: {e}")))?;

        debug!(url = %self.url, count = rates.len(), "Fetched rates");
        Ok(rates)
    }
}

/// Mock rate provider for testing.
#[cfg(any(test, feature = "test-utils"))]
pub struct MockRateProvider {
    name: String,
    outcome: Result<Vec<ExchangeRate>, String>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockRateProvider {
    /// Provider that always returns the given observations.
    pub fn new(rates: Vec<ExchangeRate>) -> Self {
        Self {
            name: "MOCK".to_string(),
            outcome: Ok(rates),
        }
    }

    /// Provider that always fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            name: "MOCK".to_string(),
            outcome: Err(message.into()),
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl RateProvider for MockRateProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_rates(&self) -> FxResult<Vec<ExchangeRate>> {
        self.outcome.clone().map_err(FxError::Provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode as AxumStatus, routing::get, Json, Router};
    use tokio::net::TcpListener;

    async fn spawn_upstream(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/rates")
    }

    #[tokio::test]
    async fn test_http_provider_success() {
        let url = spawn_upstream(Router::new().route(
            "/rates",
            get(|| async { Json(vec![ExchangeRate::new("EUR", "USD", 1.18)]) }),
        ))
        .await;

        let provider = HttpRateProvider::new(url, DEFAULT_TIMEOUT).unwrap();
        let rates = provider.fetch_rates().await.unwrap();

        assert_eq!(rates, vec![ExchangeRate::new("EUR", "USD", 1.18)]);
    }

    #[tokio::test]
    async fn test_http_provider_non_200_status() {
        let url = spawn_upstream(Router::new().route(
            "/rates",
            get(|| async { (AxumStatus::BAD_GATEWAY, "bad gateway") }),
        ))
        .await;

        let provider = HttpRateProvider::new(url, DEFAULT_TIMEOUT).unwrap();
        let err = provider.fetch_rates().await.unwrap_err();

        assert!(err.is_upstream());
        assert!(err.to_string().contains("502"));
    }

    #[tokio::test]
    async fn test_http_provider_malformed_body() {
        let url = spawn_upstream(Router::new().route("/rates", get(|| async { "not json" }))).await;

        let provider = HttpRateProvider::new(url, DEFAULT_TIMEOUT).unwrap();
        let err = provider.fetch_rates().await.unwrap_err();

        assert!(matches!(err, FxError::Provider(ref m) if m.starts_with("failed to decode")));
    }

    #[tokio::test]
    async fn test_http_provider_transport_failure() {
        // Bind then drop to get a port nothing is listening on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let provider =
            HttpRateProvider::new(format!("http://{addr}/rates"), Duration::from_secs(1)).unwrap();
        let err = provider.fetch_rates().await.unwrap_err();

        assert!(err.is_upstream());
    }

    #[tokio::test]
    async fn test_mock_provider() {
        let provider = MockRateProvider::new(vec![ExchangeRate::new("EUR", "USD", 1.18)]);
        assert_eq!(provider.fetch_rates().await.unwrap().len(), 1);

        let failing = MockRateProvider::failing("fetch failed");
        assert!(failing.fetch_rates().await.unwrap_err().is_upstream());
    }
}
