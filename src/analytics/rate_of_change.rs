//! Percentage change between the oldest and the most recent rate

use crate::types::{AnalyticsResult, MetricMap, TimeSeriesSet};
use super::{NOT_FINITE, SeriesCalculator};

pub const MIN_RATE_OF_CHANGE_SAMPLES: usize = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct RateOfChangeCalculator;

impl RateOfChangeCalculator {
    pub fn new() -> Self {
        RateOfChangeCalculator
    }

    /// `rates` must be newest first.
    pub fn calculate_rate_of_change(&self, rates: &[f64]) -> AnalyticsResult<f64> {
        if rates.len() < MIN_RATE_OF_CHANGE_SAMPLES {
            return AnalyticsResult::InsufficientData;
        }

        let most_recent = rates[0];
        let oldest = rates[rates.len() - 1];
        if oldest == 0.0 {
            return AnalyticsResult::undefined("oldest rate is zero");
        }

        let change = (most_recent - oldest) / oldest * 100.0;
        if !change.is_finite() {
            return AnalyticsResult::undefined(NOT_FINITE);
        }
        AnalyticsResult::Value(change)
    }
}

impl SeriesCalculator for RateOfChangeCalculator {
    type Output = f64;

    fn compute(&self, series: &TimeSeriesSet) -> MetricMap<f64> {
        series
            .iter()
            .map(|(code, observations)| {
                let rates = series.newest_first_rates(observations);
                (code.clone(), self.calculate_rate_of_change(&rates))
            })
            .collect()
    }
}
