//! Plain-text report persisted after each run

use super::{format_hours, format_kwh, format_money, format_tariff, format_watts, Analysis};
use crate::core::Result;
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Timestamp layout of the `Generated:` line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the report file contents
///
/// Lines are joined with `\n` and there is no trailing newline. Columns are
/// space padded; names are never truncated here.
pub fn render(analysis: &Analysis, currency_symbol: &str, generated: NaiveDateTime) -> String {
    let report = analysis.report();
    let top = analysis.top_device();

    let mut lines = vec![
        "Energy Analyzer Report".to_string(),
        format!("Generated: {}", generated.format(TIMESTAMP_FORMAT)),
        String::new(),
        format!("Billing days: {}", report.billing.days),
        format!("Tariff ({}/kWh): {}", currency_symbol, format_tariff(report.billing.tariff)),
        String::new(),
        "Per-Device Daily Usage:".to_string(),
        format!(
            "{:<20} {:>7} {:>7} {:>5} {:>10}",
            "Device", "Watts", "Hours", "Qty", "kWh/day"
        ),
    ];

    for device in analysis.devices() {
        lines.push(format!(
            "{:<20} {:>7} {:>7} {:>5} {:>10}",
            device.name,
            format_watts(device.watts),
            format_hours(device.hours_per_day),
            device.quantity,
            format_kwh(device.daily_kwh())
        ));
    }

    lines.push(String::new());
    lines.push(format!("Total daily kWh: {}", format_kwh(report.total_daily_kwh)));
    lines.push(format!("Monthly kWh   : {}", format_kwh(report.total_cycle_kwh)));
    lines.push(format!(
        "Est. bill ({}) : {}",
        currency_symbol,
        format_money(report.estimated_bill)
    ));
    lines.push(format!(
        "Top device    : {} ({} kWh/day)",
        top.name,
        format_kwh(top.daily_kwh())
    ));

    lines.join("\n")
}

/// Write the report, replacing any previous file at `path`
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    log::info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BillingContext, Device, TipsConfig};
    use chrono::NaiveDate;
    use std::fs;

    fn generated() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(9, 5, 3)
            .unwrap()
    }

    fn fan_analysis() -> Analysis {
        Analysis::new(
            vec![Device::new("Fan", 75.0, 11.0, 2)],
            BillingContext::new(30, 8.0),
            &TipsConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_render_exact_layout() {
        let text = render(&fan_analysis(), "\u{20B9}", generated());
        let expected = [
            "Energy Analyzer Report",
            "Generated: 2024-01-15 09:05:03",
            "",
            "Billing days: 30",
            "Tariff (\u{20B9}/kWh): 8.0",
            "",
            "Per-Device Daily Usage:",
            "Device                 Watts   Hours   Qty    kWh/day",
            "Fan                       75    11.0     2      1.650",
            "",
            "Total daily kWh: 1.650",
            "Monthly kWh   : 49.500",
            "Est. bill (\u{20B9}) : 396.00",
            "Top device    : Fan (1.650 kWh/day)",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_bill_not_grouped_and_names_not_truncated() {
        let analysis = Analysis::new(
            vec![
                Device::new("Central Air Conditioner", 2000.0, 8.0, 1),
                Device::new("Fridge", 150.0, 24.0, 1),
            ],
            BillingContext::new(30, 10.5),
            &TipsConfig::default(),
        )
        .unwrap();
        let text = render(&analysis, "$", generated());

        assert!(text.contains("Tariff ($/kWh): 10.5\n"));
        assert!(text.contains("Central Air Conditioner    2000     8.0     1     16.000\n"));
        assert!(text.contains("Est. bill ($) : 6174.00\n"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_extreme_tariff_uses_signed_exponent() {
        let analysis = Analysis::new(
            vec![Device::new("Fan", 75.0, 11.0, 2)],
            BillingContext::new(30, 0.00001),
            &TipsConfig::default(),
        )
        .unwrap();
        let text = render(&analysis, "\u{20B9}", generated());
        assert!(text.contains("Tariff (\u{20B9}/kWh): 1e-05\n"));
    }

    #[test]
    fn test_write_report_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("energy_report.txt");

        write_report(&path, "first run with a much longer body than the second").unwrap();
        write_report(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_report_surfaces_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("energy_report.txt");
        assert!(write_report(&path, "x").is_err());
    }
}
