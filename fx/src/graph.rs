//! Conversion graph built from pairwise rate observations.

use std::collections::HashMap;

use ratebridge_common::{Currency, ExchangeRate};
use tracing::warn;

use crate::error::{FxError, FxResult};

/// Directed edge: one unit of the owning currency buys `weight` units of `to`.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub to: Currency,
    pub weight: f64,
}

/// Undirected multigraph of currencies.
///
/// Every observation is stored twice, once as given and once inverted, so
/// the graph can be walked in either direction. Neighbor lists keep
/// insertion order, which makes traversal order a function of the input.
#[derive(Debug, Default)]
pub struct ConversionGraph {
    adjacency: HashMap<Currency, Vec<Edge>>,
}

impl ConversionGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from observations, validating each one.
    pub fn from_rates(rates: &[ExchangeRate]) -> FxResult<Self> {
        let mut graph = Self::new();
        for rate in rates {
            graph.add_rate(rate)?;
        }
        Ok(graph)
    }

    /// Add one observation along with its reciprocal.
    pub fn add_rate(&mut self, rate: &ExchangeRate) -> FxResult<()> {
        if rate.from.is_empty() || rate.to.is_empty() {
            return Err(FxError::MalformedObservation {
                from: rate.from.clone(),
                to: rate.to.clone(),
            });
        }

        if !(rate.rate > 0.0 && rate.rate.is_finite()) {
            return Err(FxError::InvalidRate {
                from: rate.from.clone(),
                to: rate.to.clone(),
                rate: rate.rate,
            });
        }

        if rate.is_self_referential() {
            warn!(currency = %rate.from, rate = rate.rate, "Ignoring self-referential rate");
            self.adjacency.entry(rate.from.clone()).or_default();
            return Ok(());
        }

        self.insert_edge(rate.from.clone(), rate.to.clone(), rate.rate);
        self.insert_edge(rate.to.clone(), rate.from.clone(), 1.0 / rate.rate);
        Ok(())
    }

    /// Insert a single directed edge without validation.
    pub(crate) fn insert_edge(&mut self, from: Currency, to: Currency, weight: f64) {
        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge { to, weight });
    }

    /// Whether the currency appears in any observation.
    pub fn contains(&self, currency: &Currency) -> bool {
        self.adjacency.contains_key(currency)
    }

    /// Outgoing edges of a currency, in insertion order.
    pub fn neighbors(&self, currency: &Currency) -> &[Edge] {
        self.adjacency
            .get(currency)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct currencies.
    pub fn currency_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
