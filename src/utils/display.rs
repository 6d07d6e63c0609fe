//! Console output of fetched data and analytics

use tracing::info;
use crate::types::{MetricMap, TimeSeriesSet};

pub fn print_selected_currencies(series: &TimeSeriesSet, base_currency: &str) {
    info!("Currencies ({} base):", base_currency.to_uppercase());
    if series.is_empty() {
        info!("  none selected");
        return;
    }
    for (code, observations) in series.iter() {
        let points: Vec<String> = observations
            .iter()
            .map(|obs| match obs.rate {
                Some(rate) => format!("({}, {})", obs.date, rate),
                None => format!("({}, -)", obs.date),
            })
            .collect();
        info!("  {}: [{}]", code, points.join(", "));
    }
}

pub fn print_volatility(volatility: &MetricMap<f64>) {
    info!("📊 Volatility:");
    for (code, result) in volatility {
        info!("   Volatility for {}: {}", code, result.display_with(|v| format!("{:.6}", v)));
    }
}

pub fn print_rate_of_change(rate_of_change: &MetricMap<f64>) {
    info!("📈 Rate of change:");
    for (code, result) in rate_of_change {
        info!("   Rate of Change for {}: {}", code, result.display_with(|v| format!("{:.2}%", v)));
    }
}

pub fn print_moving_averages(moving_averages: &MetricMap<Vec<f64>>, window: usize) {
    info!("〰️  Moving Averages (window {}):", window);
    for (code, result) in moving_averages {
        let text = result.display_with(|values| {
            values
                .iter()
                .map(|v| format!("{:.4}", v))
                .collect::<Vec<_>>()
                .join(", ")
        });
        info!("   {}: {}", code, text);
    }
}
