//! FX Analytics - Main Entry Point

use anyhow::Result;
use clap::Parser;
use fx_analytics::*;
use tracing::info;
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = config::Cli::parse();

    // Initialize logging
    let _logging_guard = utils::setup_logging()?;
    utils::setup_output_directories(&cli.output)?;

    // Load configuration
    let config = CONFIG.clone();
    let window = cli
        .window
        .map(|w| w as usize)
        .unwrap_or(config.moving_average_window);
    let run_id = Uuid::new_v4();

    info!("💱 FX Analytics v{} (run {})", env!("CARGO_PKG_VERSION"), run_id);
    info!("📋 Configuration:");
    info!("   Days: {}", cli.days);
    info!("   Currencies: {}", cli.num_currencies);
    info!("   Base currency: {}", config.base_currency.to_uppercase());
    info!("   Moving average window: {}", window);
    info!("   Max retries: {}", config.max_retries);
    info!("   Report: {}", cli.output.display());

    // Acquire rates
    let fetcher = network::CurrencyDataFetcher::new(cli.days, cli.num_currencies, &config)?;
    let selected: Vec<String> = network::currency_codes(fetcher.currencies())
        .iter()
        .map(ToString::to_string)
        .collect();
    info!("🎲 Selected currencies: {}", selected.join(", "));

    let series = fetcher.fetch_data().await?;
    utils::print_selected_currencies(&series, fetcher.base_currency());

    // Derive analytics
    let bundle = analytics::analyze(&series, window)?;
    utils::print_volatility(&bundle.volatility);
    utils::print_rate_of_change(&bundle.rate_of_change);
    utils::print_moving_averages(&bundle.moving_average, bundle.window);

    // Render
    let writer = report::ReportWriter::new(&cli.output, config.report_max_dates, &config.base_currency);
    let path = writer.write(&series, &bundle, run_id)?;
    if cli.json {
        writer.write_json(&bundle)?;
    }

    info!("✅ Report generated successfully: {}", path.display());
    Ok(())
}
