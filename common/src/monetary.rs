//! Monetary types for RateBridge.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency identifier as supplied by the upstream source.
///
/// Codes are kept verbatim: no case folding, no trimming. Ordering is the
/// byte-wise ordering of the code, which is what response sorting relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Create a new currency from code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the currency code.
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is missing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The anchor currency every resolved rate is expressed in.
    pub fn usd() -> Self {
        Self::new("USD")
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Currency {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Currency {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Exchange rate between two currencies: 1 unit of `from` = `rate` units of `to`.
///
/// The same record is used for upstream observations and for resolved
/// USD conversions handed back to clients. Absent fields decode to their
/// empty values so that validation can report them instead of the decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Source currency.
    #[serde(default)]
    pub from: Currency,
    /// Target currency.
    #[serde(default)]
    pub to: Currency,
    /// Multiplier from source to target.
    #[serde(default)]
    pub rate: f64,
}

impl ExchangeRate {
    /// Create a new exchange rate.
    pub fn new(from: impl Into<Currency>, to: impl Into<Currency>, rate: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            rate,
        }
    }

    /// Whether both sides name the same currency.
    pub fn is_self_referential(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1 {} = {} {}", self.from, self.rate, self.to)
    }
}
