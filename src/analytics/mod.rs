//! Stateless calculators over a `TimeSeriesSet`
//!
//! Each calculator keys every currency of its input, so merging never loses a
//! currency. Volatility reads rates as an unordered multiset; rate of change
//! and moving average read them newest first.

pub mod volatility;
pub mod rate_of_change;
pub mod moving_average;

pub use volatility::*;
pub use rate_of_change::*;
pub use moving_average::*;

use tracing::debug;
use crate::errors::FxResult;
use crate::types::{AnalyticsBundle, MetricMap, TimeSeriesSet};

/// Reason attached to a statistic that overflowed or lost precision into
/// infinity or NaN from finite rates.
pub const NOT_FINITE: &str = "result is not finite";

pub trait SeriesCalculator {
    type Output;

    fn compute(&self, series: &TimeSeriesSet) -> MetricMap<Self::Output>;
}

/// Run all three calculators over `series` and bundle their results.
pub fn analyze(series: &TimeSeriesSet, window: usize) -> FxResult<AnalyticsBundle> {
    let moving_average = MovingAverageCalculator::new(window)?;

    let bundle = AnalyticsBundle {
        window: moving_average.window(),
        volatility: VolatilityCalculator::new().compute(series),
        rate_of_change: RateOfChangeCalculator::new().compute(series),
        moving_average: moving_average.compute(series),
    };

    debug!(
        currencies = series.len(),
        window,
        "Computed volatility, rate of change and moving averages"
    );
    Ok(bundle)
}
