//! Runtime configuration and environment variable handling

use std::env;
use crate::analytics::DEFAULT_MOVING_AVERAGE_WINDOW;

// Acquisition constants
pub const DEFAULT_API_URL_TEMPLATE: &str =
    "https://cdn.jsdelivr.net/npm/@fawazahmed0/currency-api@{date}/v1/currencies/{base}.json";
pub const DEFAULT_BASE_CURRENCY: &str = "eur";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const MAX_RETRIES_LIMIT: u32 = 10;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 200;

// Report constants
pub const DEFAULT_REPORT_MAX_DATES: usize = 5;
pub const DEFAULT_REPORT_PATH: &str = "output/reports/Currency_Report.txt";
pub const LOG_DIRECTORY: &str = "output/logs";

#[derive(Debug, Clone)]
pub struct Config {
    // Acquisition
    pub api_url_template: String,
    pub base_currency: String,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_delay_ms: u64,
    // Analytics
    pub moving_average_window: usize,
    // Report
    pub report_max_dates: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url_template: DEFAULT_API_URL_TEMPLATE.to_string(),
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
            moving_average_window: DEFAULT_MOVING_AVERAGE_WINDOW,
            report_max_dates: DEFAULT_REPORT_MAX_DATES,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unparseable values fall back
    /// to defaults; numeric values are clamped to their valid range.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_url_template: lookup("FX_API_URL_TEMPLATE")
                .filter(|s| s.contains("{date}"))
                .unwrap_or_else(|| DEFAULT_API_URL_TEMPLATE.to_string()),
            base_currency: lookup("FX_BASE_CURRENCY")
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_CURRENCY.to_string()),
            request_timeout_secs: lookup("FX_REQUEST_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
                .max(1),
            max_retries: lookup("FX_MAX_RETRIES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_RETRIES)
                .clamp(1, MAX_RETRIES_LIMIT),
            retry_delay_ms: lookup("FX_RETRY_DELAY_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_RETRY_DELAY_MS),
            moving_average_window: lookup("MOVING_AVERAGE_WINDOW")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MOVING_AVERAGE_WINDOW)
                .max(1),
            report_max_dates: lookup("REPORT_MAX_DATES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_REPORT_MAX_DATES)
                .max(1),
        }
    }
}
