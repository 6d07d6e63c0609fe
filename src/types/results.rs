//! Per-currency analytics outcomes

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use super::CurrencyCode;

/// Outcome of one statistic for one currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum AnalyticsResult<T> {
    Value(T),
    /// Fewer observations than the statistic requires.
    InsufficientData,
    /// The inputs make the statistic mathematically undefined.
    Undefined { reason: String },
}

impl<T> AnalyticsResult<T> {
    pub fn undefined(reason: impl Into<String>) -> Self {
        AnalyticsResult::Undefined { reason: reason.into() }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            AnalyticsResult::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, AnalyticsResult::InsufficientData)
    }

    pub fn as_ref(&self) -> AnalyticsResult<&T> {
        match self {
            AnalyticsResult::Value(v) => AnalyticsResult::Value(v),
            AnalyticsResult::InsufficientData => AnalyticsResult::InsufficientData,
            AnalyticsResult::Undefined { reason } => AnalyticsResult::Undefined {
                reason: reason.clone(),
            },
        }
    }

    /// Render with `fmt_value` for computed values and the status text otherwise.
    pub fn display_with(&self, fmt_value: impl FnOnce(&T) -> String) -> String {
        match self {
            AnalyticsResult::Value(v) => fmt_value(v),
            AnalyticsResult::InsufficientData => "Insufficient data".to_string(),
            AnalyticsResult::Undefined { reason } => format!("Undefined ({})", reason),
        }
    }
}

impl<T: fmt::Display> fmt::Display for AnalyticsResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(|v| v.to_string()))
    }
}

pub type MetricMap<T> = BTreeMap<CurrencyCode, AnalyticsResult<T>>;

/// The three metric mappings of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsBundle {
    pub window: usize,
    pub volatility: MetricMap<f64>,
    pub rate_of_change: MetricMap<f64>,
    pub moving_average: MetricMap<Vec<f64>>,
}

/// All metrics for a single currency, borrowed from a bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyAnalytics<'a> {
    pub currency: &'a CurrencyCode,
    pub volatility: AnalyticsResult<&'a f64>,
    pub rate_of_change: AnalyticsResult<&'a f64>,
    pub moving_average: AnalyticsResult<&'a Vec<f64>>,
}

impl AnalyticsBundle {
    /// Merge the three mappings per currency. A currency missing from one
    /// mapping is reported as insufficient data for that metric.
    pub fn per_currency(&self) -> Vec<CurrencyAnalytics<'_>> {
        let mut codes: Vec<&CurrencyCode> = self
            .volatility
            .keys()
            .chain(self.rate_of_change.keys())
            .chain(self.moving_average.keys())
            .collect();
        codes.sort();
        codes.dedup();

        codes
            .into_iter()
            .map(|code| CurrencyAnalytics {
                currency: code,
                volatility: lookup(&self.volatility, code),
                rate_of_change: lookup(&self.rate_of_change, code),
                moving_average: lookup(&self.moving_average, code),
            })
            .collect()
    }
}

fn lookup<'a, T>(map: &'a MetricMap<T>, code: &CurrencyCode) -> AnalyticsResult<&'a T> {
    map.get(code)
        .map(AnalyticsResult::as_ref)
        .unwrap_or(AnalyticsResult::InsufficientData)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_of_markers() {
        let value: AnalyticsResult<f64> = AnalyticsResult::Value(1.25);
        assert_eq!(value.display_with(|v| format!("{:.1}", v)), "1.2");
        assert_eq!(AnalyticsResult::<f64>::InsufficientData.to_string(), "Insufficient data");
        assert_eq!(
            AnalyticsResult::<f64>::undefined("oldest rate is zero").to_string(),
            "Undefined (oldest rate is zero)"
        );
    }

    #[test]
    fn test_per_currency_merge_keeps_markers() {
        let usd = CurrencyCode::new("usd");
        let thb = CurrencyCode::new("thb");
        let bundle = AnalyticsBundle {
            window: 5,
            volatility: BTreeMap::from([
                (usd.clone(), AnalyticsResult::Value(0.5)),
                (thb.clone(), AnalyticsResult::InsufficientData),
            ]),
            rate_of_change: BTreeMap::from([(usd.clone(), AnalyticsResult::undefined("zero"))]),
            moving_average: BTreeMap::new(),
        };

        let merged = bundle.per_currency();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].currency, &thb);
        assert!(merged[0].volatility.is_insufficient());
        assert!(merged[0].rate_of_change.is_insufficient());
        assert_eq!(merged[1].volatility, AnalyticsResult::Value(&0.5));
        assert_eq!(merged[1].rate_of_change, AnalyticsResult::undefined("zero"));
        assert!(merged[1].moving_average.is_insufficient());
    }

    #[test]
    fn test_serializes_with_status_tag() {
        let json = serde_json::to_string(&AnalyticsResult::<f64>::InsufficientData).unwrap();
        assert_eq!(json, r#"{"status":"insufficient_data"}"#);
        let json = serde_json::to_string(&AnalyticsResult::Value(2.0)).unwrap();
        assert_eq!(json, r#"{"status":"value","value":2.0}"#);
    }
}
