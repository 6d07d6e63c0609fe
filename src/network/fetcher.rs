//! Daily rate acquisition from the currency API

use anyhow::Context;
use chrono::{Days, NaiveDate, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use crate::{
    config::Config,
    errors::{FxError, FxResult},
    network::retry::{retry_with_backoff, RetryConfig},
    types::{Currency, CurrencyCode, Observation, SeriesOrder, TimeSeriesSet},
};

pub struct CurrencyDataFetcher {
    client: reqwest::Client,
    days: u32,
    currencies: Vec<Currency>,
    base_currency: String,
    url_template: String,
    retry_config: RetryConfig,
    cache: Arc<RwLock<HashMap<String, Value>>>,
}

impl CurrencyDataFetcher {
    /// Fetcher for `num_currencies` randomly chosen currencies.
    pub fn new(days: u32, num_currencies: usize, config: &Config) -> FxResult<Self> {
        let currencies = select_random_currencies(num_currencies, &mut rand::rng())?;
        Self::with_currencies(days, currencies, config)
    }

    pub fn with_currencies(days: u32, currencies: Vec<Currency>, config: &Config) -> FxResult<Self> {
        if days == 0 {
            return Err(FxError::InvalidArgument {
                name: "days".to_string(),
                reason: "the number of days must be positive".to_string(),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                warn!("⚠️ Failed to initialize HTTP client: {}", e);
                FxError::Network {
                    message: "Failed to build HTTP client".to_string(),
                    source: Some(e.into()),
                    retry_count: 0,
                }
            })?;

        Ok(Self {
            client,
            days,
            currencies,
            base_currency: config.base_currency.clone(),
            url_template: config.api_url_template.clone(),
            retry_config: RetryConfig::from(config),
            cache: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    pub fn url_for(&self, date: NaiveDate) -> String {
        self.url_template
            .replace("{date}", &date.format("%Y-%m-%d").to_string())
            .replace("{base}", &self.base_currency)
    }

    pub async fn fetch_data(&self) -> FxResult<TimeSeriesSet> {
        self.fetch_data_until(Utc::now().date_naive()).await
    }

    /// Walk back `days` days from `today`, newest first. Every selected
    /// currency is keyed in the result even if no day carried a rate for it.
    pub async fn fetch_data_until(&self, today: NaiveDate) -> FxResult<TimeSeriesSet> {
        let mut series = TimeSeriesSet::new(SeriesOrder::NewestFirst);
        for currency in &self.currencies {
            series.insert_currency(*currency);
        }

        for i in 0..self.days {
            let Some(date) = today.checked_sub_days(Days::new(i as u64)) else {
                break;
            };
            let url = self.url_for(date);
            info!("Fetching data for date: {}", date);

            let payload = self.get_currency_data(&url).await?;
            self.collect_observations(&payload, date, &mut series)?;
        }

        Ok(series)
    }

    /// GET one daily document. Responses are memoized by URL for the life of
    /// the fetcher.
    pub async fn get_currency_data(&self, url: &str) -> FxResult<Value> {
        if let Some(cached) = self.cache.read().await.get(url) {
            debug!(url, "Serving currency data from cache");
            return Ok(cached.clone());
        }

        let operation = || async {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .context("HTTP request failed")?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                warn!("⚠️ Currency API returned error status {}: {}", status, body);
                return Err(anyhow::anyhow!("Currency API error: {} - {}", status, body));
            }

            let json: Value = response
                .json()
                .await
                .context("Failed to parse JSON response")?;
            Ok(json)
        };

        let payload = retry_with_backoff(
            operation,
            &self.retry_config,
            &format!("currency data fetch ({})", url),
        )
        .await?;

        self.cache.write().await.insert(url.to_string(), payload.clone());
        Ok(payload)
    }

    fn collect_observations(
        &self,
        payload: &Value,
        date: NaiveDate,
        series: &mut TimeSeriesSet,
    ) -> FxResult<()> {
        if !payload.is_object() {
            return Err(FxError::DataParsing {
                context: format!("response for {} is not a JSON object", date),
                source: anyhow::anyhow!("unexpected payload: {}", payload),
            });
        }

        let Some(rates) = payload.get(&self.base_currency).and_then(Value::as_object) else {
            warn!(
                "Response for {} has no '{}' rates object, skipping day",
                date, self.base_currency
            );
            return Ok(());
        };

        for currency in &self.currencies {
            match rates.get(currency.code()) {
                Some(value) => {
                    let rate = value.as_f64();
                    if rate.is_none() {
                        warn!("Non-numeric rate for {} on {}: {}", currency.code(), date, value);
                    }
                    series.push(*currency, Observation { date, rate });
                }
                None => debug!("No rate for {} on {}", currency.code(), date),
            }
        }
        Ok(())
    }
}

/// Sample `num_currencies` distinct supported currencies.
pub fn select_random_currencies<R: Rng + ?Sized>(
    num_currencies: usize,
    rng: &mut R,
) -> FxResult<Vec<Currency>> {
    let available = Currency::ALL.len();
    if num_currencies == 0 || num_currencies > available {
        return Err(FxError::InvalidArgument {
            name: "num_currencies".to_string(),
            reason: format!("must be between 1 and {}", available),
        });
    }

    Ok(Currency::ALL
        .choose_multiple(rng, num_currencies)
        .copied()
        .collect())
}

/// Currency codes of a selection, for logging.
pub fn currency_codes(currencies: &[Currency]) -> Vec<CurrencyCode> {
    currencies.iter().map(|c| CurrencyCode::from(*c)).collect()
}
