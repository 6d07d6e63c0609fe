//! Volatility as the sample standard deviation of observed rates

use crate::types::{AnalyticsResult, MetricMap, TimeSeriesSet};
use super::{NOT_FINITE, SeriesCalculator};

/// Minimum usable observations for a sample standard deviation.
pub const MIN_VOLATILITY_SAMPLES: usize = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct VolatilityCalculator;

impl VolatilityCalculator {
    pub fn new() -> Self {
        VolatilityCalculator
    }

    pub fn calculate_volatility(&self, rates: &[f64]) -> AnalyticsResult<f64> {
        if rates.len() < MIN_VOLATILITY_SAMPLES {
            return AnalyticsResult::InsufficientData;
        }

        let mean = mean(rates);
        let volatility = sample_standard_deviation(rates, mean);
        if !volatility.is_finite() {
            return AnalyticsResult::undefined(NOT_FINITE);
        }
        AnalyticsResult::Value(volatility)
    }
}

impl SeriesCalculator for VolatilityCalculator {
    type Output = f64;

    fn compute(&self, series: &TimeSeriesSet) -> MetricMap<f64> {
        series
            .iter()
            .map(|(code, observations)| {
                let rates = TimeSeriesSet::rates(observations);
                (code.clone(), self.calculate_volatility(&rates))
            })
            .collect()
    }
}

/// Arithmetic mean shifted by the first value, `x0 + Σ(xi - x0) / n`, so a
/// constant slice averages to exactly that constant. 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    let Some(&first) = values.first() else {
        return 0.0;
    };
    let shifted = values.iter().map(|v| v - first).sum::<f64>();
    first + shifted / values.len() as f64
}

/// Standard deviation with Bessel's correction. Callers guarantee at least
/// two values.
fn sample_standard_deviation(values: &[f64], mean: f64) -> f64 {
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CurrencyCode, Observation, SeriesOrder};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn series(rates: &[Option<f64>]) -> TimeSeriesSet {
        let start = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
        let observations = rates
            .iter()
            .enumerate()
            .map(|(i, rate)| Observation {
                date: start + chrono::Days::new(i as u64),
                rate: *rate,
            })
            .collect();
        TimeSeriesSet::from_series(SeriesOrder::NewestFirst, [("usd", observations)])
    }

    fn usd() -> CurrencyCode {
        CurrencyCode::new("usd")
    }

    #[test]
    fn test_sample_standard_deviation() {
        // mean 5, squared deviations sum to 32, n-1 = 7
        let set = series(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].map(Some));
        let result = VolatilityCalculator::new().compute(&set);
        let vol = *result[&usd()].value().unwrap();
        assert!((vol - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_fewer_than_two_rates_is_insufficient() {
        let calc = VolatilityCalculator::new();
        assert!(calc.compute(&series(&[]))[&usd()].is_insufficient());
        assert!(calc.compute(&series(&[Some(1.1)]))[&usd()].is_insufficient());
        assert!(calc.compute(&series(&[Some(1.1), None, None]))[&usd()].is_insufficient());
    }

    #[test]
    fn test_absent_rates_are_not_zero() {
        let with_gaps = series(&[Some(1.0), None, Some(3.0)]);
        let result = VolatilityCalculator::new().compute(&with_gaps);
        let vol = *result[&usd()].value().unwrap();
        assert!((vol - 2.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_constant_series_has_zero_volatility() {
        let set = series(&[Some(36.1); 6]);
        assert_eq!(
            VolatilityCalculator::new().compute(&set)[&usd()],
            AnalyticsResult::Value(0.0)
        );
    }

    #[test]
    fn test_constant_series_that_does_not_round_cleanly() {
        let calc = VolatilityCalculator::new();
        for rate in [0.94, 0.1] {
            let set = series(&[Some(rate); 7]);
            assert_eq!(calc.compute(&set)[&usd()], AnalyticsResult::Value(0.0));
        }
    }

    #[test]
    fn test_overflowing_deviation_is_undefined() {
        let set = series(&[Some(1e308), Some(1e308), Some(1.0)]);
        let result = VolatilityCalculator::new().compute(&set);
        assert_eq!(result[&usd()], AnalyticsResult::undefined("result is not finite"));
    }

    #[test]
    fn test_every_currency_is_keyed() {
        let mut set = series(&[Some(1.0), Some(2.0)]);
        set.insert_currency("thb");
        let result = VolatilityCalculator::new().compute(&set);
        assert_eq!(result.len(), 2);
        assert!(result[&CurrencyCode::new("thb")].is_insufficient());
    }

    #[test]
    fn test_mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_is_exact_for_constant_values() {
        assert_eq!(mean(&[0.94; 5]), 0.94);
        assert_eq!(mean(&[0.1; 3]), 0.1);
        assert_eq!(mean(&[1.0, 2.0, 6.0]), 3.0);
    }

    proptest! {
        #[test]
        fn volatility_ignores_observation_order(
            rates in proptest::collection::vec(0.01f64..1000.0, 2..40),
            seed in any::<u64>(),
        ) {
            let forward: Vec<Option<f64>> = rates.iter().copied().map(Some).collect();
            let mut shuffled = forward.clone();
            let len = shuffled.len();
            shuffled.rotate_left((seed as usize) % len);
            shuffled.reverse();

            let calc = VolatilityCalculator::new();
            let a = *calc.compute(&series(&forward))[&usd()].value().unwrap();
            let b = *calc.compute(&series(&shuffled))[&usd()].value().unwrap();
            prop_assert!(a >= 0.0);
            prop_assert!((a - b).abs() <= 1e-9 * a.max(1.0));
        }
    }
}
