//! RateBridge Server
//!
//! HTTP front for the FX engine: `GET /rates` fetches the upstream
//! observations and answers with the USD rate of every reachable currency.

pub mod api;
pub mod config;
pub mod error;

pub use api::{app_router, AppState};
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
