//! Energy Analyzer - Demo CLI
//!
//! Runs the analysis pipeline on a built-in sample household without
//! prompting, prints the console report and writes the report file.

use anyhow::Context;
use chrono::Local;
use energy_analyzer_lib::core::{BillingContext, Config, Device};
use energy_analyzer_lib::report::{console, file, Analysis, Palette};
use std::io::{self, IsTerminal};

fn sample_household() -> Vec<Device> {
    vec![
        Device::new("Air Conditioner", 2000.0, 8.0, 1),
        Device::new("Fridge", 150.0, 24.0, 1),
        Device::new("Fan", 75.0, 11.0, 2),
    ]
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });
    let palette = Palette::new(config.color_mode().enabled(io::stdout().is_terminal()));
    let symbol = config.pricing.currency_symbol.as_str();

    print!("{}", console::render_banner(&palette));

    let billing = BillingContext::new(30, 10.0);
    println!();
    println!("  Billing days: {}", billing.days);
    println!("  Tariff: {}{}/kWh", symbol, billing.tariff);

    let analysis = Analysis::new(sample_household(), billing, &config.tips)
        .context("Sample household could not be analyzed")?;
    print!("{}", console::render(&analysis, symbol, &palette));

    let contents = file::render(&analysis, symbol, Local::now().naive_local());
    file::write_report(&config.report.path, &contents)
        .with_context(|| format!("Failed to write {}", config.report.path.display()))?;
    println!("\nReport saved to: {}", config.report.path.display());

    Ok(())
}
