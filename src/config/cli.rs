//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;
use crate::types::Currency;
use super::DEFAULT_REPORT_PATH;

/// Fetch historical currency data and report volatility, rate of change and
/// moving averages.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of days of historical data to fetch.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub days: u32,

    /// Number of currencies to select randomly.
    #[arg(value_parser = parse_num_currencies)]
    pub num_currencies: usize,

    /// Moving average window. Defaults to MOVING_AVERAGE_WINDOW or 5.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub window: Option<u32>,

    /// Where to write the text report.
    #[arg(long, default_value = DEFAULT_REPORT_PATH)]
    pub output: PathBuf,

    /// Also write the analytics as JSON next to the report.
    #[arg(long)]
    pub json: bool,
}

fn parse_num_currencies(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("`{}` is not a whole number", s))?;
    let max = Currency::ALL.len();
    if !(1..=max).contains(&n) {
        return Err(format!("Number of currencies must be between 1 and {}.", max));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_positional_arguments() {
        let cli = Cli::try_parse_from(["fx-analytics", "7", "3", "--window", "3", "--json"]).unwrap();
        assert_eq!(cli.days, 7);
        assert_eq!(cli.num_currencies, 3);
        assert_eq!(cli.window, Some(3));
        assert!(cli.json);
        assert_eq!(cli.output, PathBuf::from(DEFAULT_REPORT_PATH));
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert!(Cli::try_parse_from(["fx-analytics", "0", "3"]).is_err());
        assert!(Cli::try_parse_from(["fx-analytics", "5", "0"]).is_err());
        assert!(Cli::try_parse_from(["fx-analytics", "5", "31"]).is_err());
        assert!(Cli::try_parse_from(["fx-analytics", "5", "2", "--window", "0"]).is_err());
    }
}
