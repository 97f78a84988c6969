//! Report rendering
//!
//! Both output surfaces render from one [`Analysis`] and share the number
//! formatting helpers below, so the console and the report file always agree.

pub mod console;
pub mod file;
mod style;

pub use style::Palette;

use crate::core::{BillingContext, Device, Result, TipsConfig};
use crate::metrics::{MetricsEngine, UsageReport};
use crate::tips::{self, Tip};

/// Everything the renderers need for one run
#[derive(Debug, Clone)]
pub struct Analysis {
    devices: Vec<Device>,
    report: UsageReport,
    tips: Vec<Tip>,
}

impl Analysis {
    /// Run the metrics engine and the tip rules over the collected devices
    pub fn new(devices: Vec<Device>, billing: BillingContext, thresholds: &TipsConfig) -> Result<Self> {
        let report = MetricsEngine::new(billing).analyze(&devices)?;
        let tips = tips::evaluate(&report, &devices, thresholds);
        Ok(Self {
            devices,
            report,
            tips,
        })
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn report(&self) -> &UsageReport {
        &self.report
    }

    pub fn tips(&self) -> &[Tip] {
        &self.tips
    }

    pub fn top_device(&self) -> &Device {
        // The report's index comes from this exact, non-empty, private list
        &self.devices[self.report.top_index]
    }
}

/// Watts shown as a truncated integer
pub fn format_watts(watts: f64) -> String {
    format!("{}", watts.trunc() as i64)
}

pub fn format_hours(hours: f64) -> String {
    format!("{:.1}", hours)
}

pub fn format_kwh(kwh: f64) -> String {
    format!("{:.3}", kwh)
}

pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Shortest round-trip form with a signed, two-digit exponent (`8.0`, `1e+16`, `1.5e-05`)
pub fn format_tariff(tariff: f64) -> String {
    let shortest = format!("{:?}", tariff);
    match shortest.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(rest) => ('-', rest),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => shortest,
    }
}

/// Two-decimal amount with comma-separated thousands
pub fn format_money_grouped(amount: f64) -> String {
    let plain = format_money(amount);
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

/// Left-align `text` in `width` characters, cutting long text with an ellipsis
pub fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('\u{2026}');
        cut
    } else {
        format!("{:<width$}", text, width = width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watts_truncates() {
        assert_eq!(format_watts(75.0), "75");
        assert_eq!(format_watts(99.99), "99");
        assert_eq!(format_watts(1.5), "1");
    }

    #[test]
    fn test_fixed_decimals() {
        assert_eq!(format_hours(11.0), "11.0");
        assert_eq!(format_kwh(1.65), "1.650");
        assert_eq!(format_money(396.0), "396.00");
    }

    #[test]
    fn test_tariff_shortest_form() {
        assert_eq!(format_tariff(8.0), "8.0");
        assert_eq!(format_tariff(0.15), "0.15");
        assert_eq!(format_tariff(12.345), "12.345");
        assert_eq!(format_tariff(1e16), "1e+16");
        assert_eq!(format_tariff(2.5e20), "2.5e+20");
        assert_eq!(format_tariff(0.00001), "1e-05");
        assert_eq!(format_tariff(1.5e-5), "1.5e-05");
        assert_eq!(format_tariff(1e-100), "1e-100");
    }

    #[test]
    fn test_money_grouping() {
        assert_eq!(format_money_grouped(0.0), "0.00");
        assert_eq!(format_money_grouped(396.0), "396.00");
        assert_eq!(format_money_grouped(5880.0), "5,880.00");
        assert_eq!(format_money_grouped(123456.789), "123,456.79");
        assert_eq!(format_money_grouped(1234567.0), "1,234,567.00");
        assert_eq!(format_money_grouped(-1234.5), "-1,234.50");
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad("Fan", 7), "Fan    ");
        assert_eq!(pad("exactly7", 8), "exactly7");
        assert_eq!(pad("Air Conditioner Upstairs", 20), "Air Conditioner Up\u{2026}");
        assert_eq!(pad("Air Conditioner Upstairs", 20).chars().count(), 20);
    }

    #[test]
    fn test_pad_counts_characters_not_bytes() {
        assert_eq!(pad("K\u{00FC}hlschrank", 10), "K\u{00FC}hlschrank");
        assert_eq!(pad("\u{00C9}clairage ext\u{00E9}rieur", 10), "\u{00C9}clairage\u{2026}");
    }

    #[test]
    fn test_analysis_pipeline() {
        let devices = vec![
            Device::new("AC", 2000.0, 8.0, 1),
            Device::new("Fridge", 150.0, 24.0, 1),
        ];
        let analysis =
            Analysis::new(devices, BillingContext::new(30, 10.0), &TipsConfig::default()).unwrap();
        assert_eq!(analysis.top_device().name, "AC");
        assert_eq!(analysis.tips(), &[Tip::StaggerHeavyLoads, Tip::HighTariff]);
    }

    #[test]
    fn test_analysis_rejects_empty() {
        let result = Analysis::new(Vec::new(), BillingContext::new(30, 10.0), &TipsConfig::default());
        assert!(result.is_err());
    }
}
