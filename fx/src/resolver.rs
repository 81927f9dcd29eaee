//! USD rate resolution.
//!
//! Rates are propagated breadth-first from the anchor. For every edge
//! `parent -> child` with weight `w` the child resolves to
//! `resolved[parent] / w`, i.e. the number of USD one unit of the child is
//! worth. The first path to reach a currency wins, so among paths of
//! different length the one with the fewest hops decides the rate; equal-hop
//! alternatives are ignored in discovery order.

use std::collections::{HashMap, VecDeque};

use ratebridge_common::{Currency, ExchangeRate};
use tracing::debug;

use crate::error::{FxError, FxResult};
use crate::graph::ConversionGraph;

/// Resolve the USD value of every currency reachable from USD.
///
/// Output is sorted ascending by source currency and never contains USD
/// itself. Fails as a whole if any observation is invalid or nothing is
/// reachable.
pub fn resolve_usd_rates(rates: &[ExchangeRate]) -> FxResult<Vec<ExchangeRate>> {
    let graph = ConversionGraph::from_rates(rates)?;
    let anchor = Currency::usd();

    let mut resolved = propagate(&graph, &anchor)?;
    resolved.remove(&anchor);

    if resolved.is_empty() {
        return Err(FxError::NoConvertibleCurrencies);
    }

    let mut conversions: Vec<ExchangeRate> = resolved
        .into_iter()
        .map(|(currency, rate)| ExchangeRate {
            from: currency,
            to: anchor.clone(),
            rate,
        })
        .collect();
    conversions.sort_by(|a, b| a.from.cmp(&b.from));

    debug!(
        observations = rates.len(),
        currencies = graph.currency_count(),
        resolved = conversions.len(),
        "Resolved USD rates"
    );

    Ok(conversions)
}

/// Breadth-first propagation of ratios from `anchor`. The anchor maps to 1.
pub fn propagate(graph: &ConversionGraph, anchor: &Currency) -> FxResult<HashMap<Currency, f64>> {
    if !graph.contains(anchor) {
        return Err(FxError::AnchorAbsent(anchor.clone()));
    }

    let mut resolved = HashMap::with_capacity(graph.currency_count());
    resolved.insert(anchor.clone(), 1.0);

    let mut queue = VecDeque::from([anchor.clone()]);

    while let Some(current) = queue.pop_front() {
        let current_rate = resolved[&current];

        for edge in graph.neighbors(&current) {
            if resolved.contains_key(&edge.to) {
                continue;
            }

            if edge.weight == 0.0 || !edge.weight.is_finite() {
                return Err(FxError::InvalidEdgeWeight {
                    from: current.clone(),
                    to: edge.to.clone(),
                });
            }

            resolved.insert(edge.to.clone(), current_rate / edge.weight);
            queue.push_back(edge.to.clone());
        }
    }

    Ok(resolved)
}
