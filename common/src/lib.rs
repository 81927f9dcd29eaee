//! RateBridge Common Types
//!
//! Shared types used across RateBridge crates: the currency identifier and
//! the exchange rate record exchanged with the upstream source and returned
//! to HTTP clients.

pub mod monetary;

pub use monetary::*;
