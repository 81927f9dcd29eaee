//! FX engine: fetch observations and resolve them against USD.

use std::sync::Arc;

use ratebridge_common::ExchangeRate;
use tracing::{info, instrument};

use crate::error::FxResult;
use crate::provider::RateProvider;
use crate::resolver::resolve_usd_rates;

/// Fetches observations from a provider and resolves them per call.
///
/// Holds no rate state between calls; every invocation builds and discards
/// its own graph.
pub struct FxEngine {
    provider: Arc<dyn RateProvider>,
}

impl FxEngine {
    /// Create a new FX engine with the given provider.
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self { provider }
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Fetch current observations and return the USD rate of every
    /// reachable currency, sorted by currency.
    #[instrument(skip(self), fields(provider = %self.provider.name()))]
    pub async fn usd_rates(&self) -> FxResult<Vec<ExchangeRate>> {
        let observations = self.provider.fetch_rates().await?;
        let conversions = resolve_usd_rates(&observations)?;

        info!(
            observations = observations.len(),
            resolved = conversions.len(),
            "USD rates resolved"
        );

        Ok(conversions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FxError;
    use crate::provider::MockRateProvider;
    use ratebridge_common::Currency;

    fn engine_with(provider: MockRateProvider) -> FxEngine {
        FxEngine::new(Arc::new(provider))
    }

    #[test]
    fn test_usd_rates_success() {
        let engine = engine_with(MockRateProvider::new(vec![
            ExchangeRate::new("EUR", "USD", 1.18),
            ExchangeRate::new("GBP", "EUR", 1.12),
        ]));

        let rates = tokio_test::block_on(engine.usd_rates()).unwrap();

        assert_eq!(rates.len(), 2);
        assert_eq!(rates[0].from, Currency::new("EUR"));
        assert_eq!(rates[1].from, Currency::new("GBP"));
        assert!((rates[1].rate - 1.3216).abs() <= 1e-9);
    }

    #[test]
    fn test_provider_failure_is_upstream() {
        let engine = engine_with(MockRateProvider::failing("fetch failed"));

        let err = tokio_test::block_on(engine.usd_rates()).unwrap_err();
        assert!(err.is_upstream());
    }

    #[test]
    fn test_resolution_failure_is_not_upstream() {
        let engine = engine_with(MockRateProvider::new(vec![ExchangeRate::new(
            "EUR", "USD", 0.0,
        )]));

        let err = tokio_test::block_on(engine.usd_rates()).unwrap_err();
        assert!(matches!(err, FxError::InvalidRate { .. }));
        assert!(!err.is_upstream());
    }

    #[test]
    fn test_provider_name() {
        let engine = engine_with(MockRateProvider::new(Vec::new()));
        assert_eq!(engine.provider_name(), "MOCK");
    }
}
