//! Console rendering: device table, summary and tips

use super::{format_hours, format_kwh, format_money, format_money_grouped, format_watts, pad, Analysis, Palette};

/// Column headers and widths shared by the table rows
pub const COLUMNS: [(&str, usize); 5] = [
    ("Device", 20),
    ("Watts", 7),
    ("Hours", 7),
    ("Qty", 5),
    ("kWh/day", 10),
];

/// Width of the rule lines around the table
pub const RULE_WIDTH: usize = 20 + 7 + 7 + 5 + 10 + 8;

fn table_row(cells: [&str; 5]) -> String {
    cells
        .iter()
        .zip(COLUMNS.iter())
        .map(|(cell, (_, width))| pad(cell, *width))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Application banner printed before the first prompt
pub fn render_banner(palette: &Palette) -> String {
    format!(
        "{}  |  simple usage\n",
        palette.paint(palette.title, "Energy Analyzer \u{2014} CLI")
    )
}

/// Render the per-device table, the summary block and the tips block
pub fn render(analysis: &Analysis, currency_symbol: &str, palette: &Palette) -> String {
    let report = analysis.report();
    let top = analysis.top_device();
    let rule = "-".repeat(RULE_WIDTH);

    let mut lines = vec![
        String::new(),
        palette.paint(palette.heading, "Per-Device Daily Usage"),
        rule.clone(),
        table_row(COLUMNS.map(|(header, _)| header)),
        rule.clone(),
    ];

    for device in analysis.devices() {
        let watts = format_watts(device.watts);
        let hours = format_hours(device.hours_per_day);
        let qty = device.quantity.to_string();
        let kwh = format_kwh(device.daily_kwh());
        lines.push(table_row([device.name.as_str(), watts.as_str(), hours.as_str(), qty.as_str(), kwh.as_str()]));
    }
    lines.push(rule);

    lines.push(String::new());
    lines.push(palette.paint(palette.summary, "Summary"));
    lines.push(format!(
        "  Total daily consumption      : {} kWh",
        format_kwh(report.total_daily_kwh)
    ));
    lines.push(format!(
        "  Billing cycle consumption    : {} kWh (days={})",
        format_kwh(report.total_cycle_kwh),
        report.billing.days
    ));
    lines.push(format!(
        "  Estimated bill @ {}{}/kWh : {}",
        currency_symbol,
        format_money(report.billing.tariff),
        palette.paint(
            palette.highlight,
            &format!("{}{}", currency_symbol, format_money_grouped(report.estimated_bill))
        )
    ));
    lines.push(format!(
        "  Highest daily consumer       : {} ({} kWh/day)",
        top.name,
        format_kwh(top.daily_kwh())
    ));
    lines.push(String::new());

    lines.push("Tips:".to_string());
    for tip in analysis.tips() {
        lines.push(format!("  \u{2022} {}", tip.message(currency_symbol)));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BillingContext, Device, TipsConfig};

    fn analysis(days: u32, tariff: f64, devices: Vec<Device>) -> Analysis {
        Analysis::new(devices, BillingContext::new(days, tariff), &TipsConfig::default()).unwrap()
    }

    #[test]
    fn test_table_layout() {
        let a = analysis(30, 8.0, vec![Device::new("Fan", 75.0, 11.0, 2)]);
        let out = render(&a, "\u{20B9}", &Palette::plain());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Per-Device Daily Usage");
        assert_eq!(lines[2], "-".repeat(57));
        assert_eq!(
            lines[3],
            "Device               | Watts   | Hours   | Qty   | kWh/day   "
        );
        assert_eq!(lines[4], "-".repeat(57));
        assert_eq!(
            lines[5],
            "Fan                  | 75      | 11.0    | 2     | 1.650     "
        );
        assert_eq!(lines[6], "-".repeat(57));
    }

    #[test]
    fn test_summary_and_tips() {
        let a = analysis(30, 8.0, vec![Device::new("Fan", 75.0, 11.0, 2)]);
        let out = render(&a, "\u{20B9}", &Palette::plain());

        assert!(out.contains("  Total daily consumption      : 1.650 kWh\n"));
        assert!(out.contains("  Billing cycle consumption    : 49.500 kWh (days=30)\n"));
        assert!(out.contains("  Estimated bill @ \u{20B9}8.00/kWh : \u{20B9}396.00\n"));
        assert!(out.contains("  Highest daily consumer       : Fan (1.650 kWh/day)\n"));
        assert!(out.ends_with(
            "Tips:\n  \u{2022} Long-running low-watt devices add up\u{2014}audit always-on equipment.\n"
        ));
    }

    #[test]
    fn test_tips_heading_without_tips() {
        let a = analysis(30, 8.0, vec![Device::new("Fan", 75.0, 10.0, 2)]);
        let out = render(&a, "\u{20B9}", &Palette::plain());
        assert!(out.ends_with("\nTips:\n"));
    }

    #[test]
    fn test_long_names_truncated_and_bill_grouped() {
        let a = analysis(
            30,
            10.0,
            vec![
                Device::new("Central Air Conditioner", 2000.0, 8.0, 1),
                Device::new("Fridge", 150.0, 24.0, 1),
            ],
        );
        let out = render(&a, "\u{20B9}", &Palette::plain());

        assert!(out.contains("Central Air Conditi\u{2026} | 2000    | 8.0     | 1     | 16.000    "));
        assert!(out.contains(": \u{20B9}5,880.00\n"));
        // Summary keeps the full name
        assert!(out.contains("Highest daily consumer       : Central Air Conditioner (16.000 kWh/day)"));
    }

    #[test]
    fn test_fractional_watts_truncated() {
        let a = analysis(30, 8.0, vec![Device::new("Lamp", 59.9, 2.25, 1)]);
        let out = render(&a, "$", &Palette::plain());
        assert!(out.contains("Lamp                 | 59      | "));
    }

    #[test]
    fn test_styled_output() {
        let a = analysis(30, 8.0, vec![Device::new("Fan", 75.0, 11.0, 2)]);
        let out = render(&a, "\u{20B9}", &Palette::ansi());
        assert!(out.contains("\x1b[92m\x1b[1mSummary\x1b[0m"));
        assert!(out.contains("\x1b[93m\u{20B9}396.00\x1b[0m"));
    }

    #[test]
    fn test_banner() {
        assert_eq!(
            render_banner(&Palette::plain()),
            "Energy Analyzer \u{2014} CLI  |  simple usage\n"
        );
    }
}
