//! RateBridge FX Engine
//!
//! Resolves the USD value of every currency reachable through a set of
//! pairwise exchange rate observations, including ones that need several
//! hops to reach USD.
//!
//! # Example
//!
//! ```rust
//! use ratebridge_common::ExchangeRate;
//! use ratebridge_fx::resolve_usd_rates;
//!
//! let rates = resolve_usd_rates(&[
//!     ExchangeRate::new("EUR", "USD", 1.18),
//!     ExchangeRate::new("GBP", "EUR", 1.12),
//! ])?;
//!
//! assert_eq!(rates[1].from.code(), "GBP");
//! assert!((rates[1].rate - 1.3216).abs() < 1e-9);
//! # Ok::<(), ratebridge_fx::FxError>(())
//! ```

pub mod engine;
pub mod error;
pub mod graph;
pub mod provider;
pub mod resolver;

pub use engine::FxEngine;
pub use error::{FxError, FxResult};
pub use graph::ConversionGraph;
pub use provider::{HttpRateProvider, RateProvider};
pub use resolver::resolve_usd_rates;

#[cfg(any(test, feature = "test-utils"))]
pub use provider::MockRateProvider;
