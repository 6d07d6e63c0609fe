//! Simple moving average over consecutive newest-first rates

use crate::errors::{FxError, FxResult};
use crate::types::{AnalyticsResult, MetricMap, TimeSeriesSet};
use super::{NOT_FINITE, SeriesCalculator, mean};

pub const DEFAULT_MOVING_AVERAGE_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct MovingAverageCalculator {
    window: usize,
}

impl MovingAverageCalculator {
    pub fn new(window: usize) -> FxResult<Self> {
        if window == 0 {
            return Err(FxError::InvalidArgument {
                name: "window".to_string(),
                reason: "moving average window must be at least 1".to_string(),
            });
        }
        Ok(Self { window })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Averages of `window` consecutive values, sliding by one, in the order
    /// given. Yields `len - window + 1` values, or `Undefined` if any of them
    /// is not finite.
    pub fn calculate_moving_averages(&self, rates: &[f64]) -> AnalyticsResult<Vec<f64>> {
        if rates.len() < self.window {
            return AnalyticsResult::InsufficientData;
        }

        let averages: Vec<f64> = rates.windows(self.window).map(mean).collect();
        if averages.iter().any(|a| !a.is_finite()) {
            return AnalyticsResult::undefined(NOT_FINITE);
        }
        AnalyticsResult::Value(averages)
    }
}

impl Default for MovingAverageCalculator {
    fn default() -> Self {
        Self {
            window: DEFAULT_MOVING_AVERAGE_WINDOW,
        }
    }
}

impl SeriesCalculator for MovingAverageCalculator {
    type Output = Vec<f64>;

    fn compute(&self, series: &TimeSeriesSet) -> MetricMap<Vec<f64>> {
        series
            .iter()
            .map(|(code, observations)| {
                let rates = series.newest_first_rates(observations);
                (code.clone(), self.calculate_moving_averages(&rates))
            })
            .collect()
    }
}
