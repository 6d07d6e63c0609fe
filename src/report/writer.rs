//! Plain-text report with rate tables, charts and metric sections

use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use comfy_table::{presets::ASCII_MARKDOWN, Table};
use std::collections::BTreeMap;
use std::fmt::{self, Write as _};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;
use crate::{
    errors::{FxError, FxResult},
    report::chart::sparkline,
    types::{AnalyticsBundle, AnalyticsResult, CurrencyCode, TimeSeriesSet},
};

pub struct ReportWriter {
    path: PathBuf,
    max_dates: usize,
    base_currency: String,
}

impl ReportWriter {
    pub fn new(path: impl Into<PathBuf>, max_dates: usize, base_currency: &str) -> Self {
        Self {
            path: path.into(),
            max_dates: max_dates.max(1),
            base_currency: base_currency.to_uppercase(),
        }
    }

    /// Render and write the report, creating parent directories.
    pub fn write(
        &self,
        series: &TimeSeriesSet,
        bundle: &AnalyticsBundle,
        run_id: Uuid,
    ) -> FxResult<PathBuf> {
        let content = self.render(series, bundle, Utc::now(), run_id)?;
        write_file(&self.path, &content)?;
        info!(path = %self.path.display(), %run_id, "Report generated");
        Ok(self.path.clone())
    }

    /// Write the bundle as JSON beside the text report.
    pub fn write_json(&self, bundle: &AnalyticsBundle) -> FxResult<PathBuf> {
        let path = self.path.with_extension("json");
        let json = serde_json::to_string_pretty(bundle).map_err(|e| FxError::Report {
            path: path.clone(),
            message: "Failed to serialize analytics".to_string(),
            source: e.into(),
        })?;
        write_file(&path, &json)?;
        info!(path = %path.display(), "Analytics JSON written");
        Ok(path)
    }

    pub fn render(
        &self,
        series: &TimeSeriesSet,
        bundle: &AnalyticsBundle,
        generated_at: DateTime<Utc>,
        run_id: Uuid,
    ) -> FxResult<String> {
        let mut out = String::new();
        self.render_into(&mut out, series, bundle, generated_at, run_id)
            .map_err(|e| FxError::Report {
                path: self.path.clone(),
                message: "Failed to format report".to_string(),
                source: e.into(),
            })?;
        Ok(out)
    }

    fn render_into(
        &self,
        out: &mut String,
        series: &TimeSeriesSet,
        bundle: &AnalyticsBundle,
        generated_at: DateTime<Utc>,
        run_id: Uuid,
    ) -> fmt::Result {
        let truncated = truncate_data(series, self.max_dates);

        writeln!(out, "Currency Data Report")?;
        writeln!(out, "Generated on: {}", generated_at.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(out, "Base currency: {}", self.base_currency)?;
        writeln!(out, "Run: {}", run_id)?;
        writeln!(out)?;

        writeln!(out, "Exchange Rates - {} Recent Dates ({} base)", self.max_dates, self.base_currency)?;
        writeln!(out, "{}", rate_table(&truncated))?;
        writeln!(out)?;

        writeln!(out, "Exchange Rates Over Time")?;
        for (code, points) in &truncated {
            let rates: Vec<f64> = points.iter().map(|(_, rate)| *rate).collect();
            writeln!(out, "  {:<4} {}", code.to_string(), chart_line(&rates))?;
        }
        writeln!(out)?;

        writeln!(out, "Moving Averages by Currency (window {})", bundle.window)?;
        for (code, result) in &bundle.moving_average {
            let line = result.display_with(|values| sparkline(values));
            writeln!(out, "  {:<4} {}", code.to_string(), line)?;
        }
        writeln!(out)?;

        writeln!(out, "Summary")?;
        writeln!(out, "{}", summary_table(bundle))?;
        writeln!(out)?;

        writeln!(out, "Volatility Data:")?;
        for (code, result) in &bundle.volatility {
            writeln!(out, "{}: {}", code, result.display_with(|v| format!("{:.6}", v)))?;
        }
        writeln!(out)?;

        writeln!(out, "Rate of Change Data (%):")?;
        for (code, result) in &bundle.rate_of_change {
            writeln!(out, "{}: {}", code, result.display_with(|v| format!("{:.4}", v)))?;
        }
        writeln!(out)?;

        writeln!(out, "Moving Averages:")?;
        for (code, result) in &bundle.moving_average {
            writeln!(out, "{}: {}", code, result.display_with(|v| join_rates(v)))?;
        }
        Ok(())
    }
}

/// The `max_dates` most recent dated, usable rates per currency, oldest
/// first. Currencies without any usable rate keep an empty entry.
pub fn truncate_data(
    series: &TimeSeriesSet,
    max_dates: usize,
) -> BTreeMap<CurrencyCode, Vec<(NaiveDate, f64)>> {
    series
        .iter()
        .map(|(code, observations)| {
            let mut points: Vec<(NaiveDate, f64)> = observations
                .iter()
                .filter_map(|obs| obs.usable_rate().map(|rate| (obs.date, rate)))
                .collect();
            points.sort_by(|a, b| b.0.cmp(&a.0));
            points.truncate(max_dates);
            points.reverse();
            (code.clone(), points)
        })
        .collect()
}

fn rate_table(truncated: &BTreeMap<CurrencyCode, Vec<(NaiveDate, f64)>>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_MARKDOWN)
        .set_header(vec!["Currency", "Date", "Exchange Rate"]);

    for (code, points) in truncated {
        if points.is_empty() {
            table.add_row(vec![code.to_string(), "-".to_string(), "No data".to_string()]);
        }
        for (date, rate) in points {
            table.add_row(vec![
                code.to_string(),
                date.format("%Y-%m-%d").to_string(),
                format!("{:.4}", rate),
            ]);
        }
    }
    table
}

fn summary_table(bundle: &AnalyticsBundle) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_MARKDOWN).set_header(vec![
        "Currency",
        "Volatility",
        "Rate of Change (%)",
        "Latest Moving Average",
    ]);

    for row in bundle.per_currency() {
        table.add_row(vec![
            row.currency.to_string(),
            row.volatility.display_with(|v| format!("{:.6}", v)),
            row.rate_of_change.display_with(|v| format!("{:.4}", v)),
            latest_average(&row.moving_average),
        ]);
    }
    table
}

/// Index 0 of a moving-average sequence covers the most recent window.
fn latest_average(result: &AnalyticsResult<&Vec<f64>>) -> String {
    match result {
        AnalyticsResult::Value(values) => values
            .first()
            .map(|v| format!("{:.4}", v))
            .unwrap_or_else(|| "-".to_string()),
        other => other.display_with(|_| String::new()),
    }
}

fn chart_line(rates: &[f64]) -> String {
    if rates.is_empty() {
        return "Insufficient data".to_string();
    }
    let first = rates[0];
    let last = rates[rates.len() - 1];
    format!("{} {:.4} -> {:.4}", sparkline(rates), first, last)
}

fn join_rates(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{:.4}", v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_file(path: &Path, content: &str) -> FxResult<()> {
    let to_report_error = |e: anyhow::Error| FxError::Report {
        path: path.to_path_buf(),
        message: "Failed to write report".to_string(),
        source: e,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))
            .map_err(to_report_error)?;
    }
    fs::write(path, content)
        .with_context(|| format!("writing {}", path.display()))
        .map_err(to_report_error)
}
