//! One interactive run: prompts, analysis, console output and report file

use crate::core::{Config, Result};
use crate::input::{self, Prompter};
use crate::report::{console, file, Analysis, Palette};
use chrono::Local;
use std::io::{BufRead, Write};

/// Drive a full run over the given input and output
///
/// Returns `None` when no devices were collected, in which case nothing is
/// computed and no report is written.
pub fn run<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    config: &Config,
    palette: &Palette,
) -> Result<Option<Analysis>> {
    let symbol = config.pricing.currency_symbol.as_str();
    let mut prompter = Prompter::new(reader, writer);

    prompter.say(&console::render_banner(palette))?;

    let billing = input::collect_billing(&mut prompter, symbol)?;
    let count = input::collect_device_count(&mut prompter)?;
    let devices = input::collect_devices(&mut prompter, count)?;

    let mut out = prompter.into_writer();
    if devices.is_empty() {
        writeln!(out, "No devices entered; exiting.")?;
        return Ok(None);
    }

    let analysis = Analysis::new(devices, billing, &config.tips)?;
    write!(out, "{}", console::render(&analysis, symbol, palette))?;

    let contents = file::render(&analysis, symbol, Local::now().naive_local());
    file::write_report(&config.report.path, &contents)?;
    writeln!(out, "\nReport saved to: {}", config.report.path.display())?;
    out.flush()?;

    Ok(Some(analysis))
}
