//! Energy Analyzer - Main entry point
//!
//! Interactive calculator for household electricity usage and cost.

use anyhow::Context;
use energy_analyzer_lib::app;
use energy_analyzer_lib::core::Config;
use energy_analyzer_lib::report::Palette;
use std::io::{self, IsTerminal};

fn main() -> anyhow::Result<()> {
    // Keep prompts readable unless RUST_LOG asks for more
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    log::info!("Starting Energy Analyzer v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    let stdout = io::stdout();
    let palette = Palette::new(config.color_mode().enabled(stdout.is_terminal()));

    let stdin = io::stdin();
    let outcome = app::run(stdin.lock(), stdout.lock(), &config, &palette)
        .with_context(|| format!("Energy analysis failed (report: {})", config.report.path.display()))?;

    if outcome.is_none() {
        log::info!("No devices collected, nothing written");
    }

    Ok(())
}
