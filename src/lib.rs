//! FX Analytics - daily exchange-rate analytics and reporting
//!
//! Fetches a daily rate series for a random set of currencies against a base
//! currency, derives volatility, rate of change and moving averages per
//! currency, and renders them into a text report.

pub mod config;
pub mod types;
pub mod errors;
pub mod network;
pub mod analytics;
pub mod report;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{FxError, FxResult};
pub use types::*;
