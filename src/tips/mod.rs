//! Usage tips derived from the computed report
//!
//! Every rule is checked on its own, in a fixed order, and any number of them
//! may fire for the same household.

use crate::core::{Device, TipsConfig};
use crate::metrics::UsageReport;

/// An advisory produced by one of the heuristics
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tip {
    /// Total daily usage is high
    StaggerHeavyLoads,
    /// The top consumer is both high power and long running
    ReduceTopDevice { name: String },
    /// The tariff is high enough that small savings matter
    HighTariff,
    /// Some low-power device runs most of the day
    AuditAlwaysOn,
}

impl Tip {
    /// Human-readable advice line (without bullet)
    pub fn message(&self, currency_symbol: &str) -> String {
        match self {
            Tip::StaggerHeavyLoads => {
                "Consider staggering heavy loads to reduce peak usage.".to_string()
            }
            Tip::ReduceTopDevice { name } => {
                format!("Try reducing {} hours or enable energy-saver settings.", name)
            }
            Tip::HighTariff => format!(
                "Tariff is relatively high\u{2014}small savings on daily kWh translate to meaningful {} reductions.",
                currency_symbol
            ),
            Tip::AuditAlwaysOn => {
                "Long-running low-watt devices add up\u{2014}audit always-on equipment.".to_string()
            }
        }
    }
}

/// Evaluate every rule against the report and devices
pub fn evaluate(report: &UsageReport, devices: &[Device], thresholds: &TipsConfig) -> Vec<Tip> {
    let mut tips = Vec::new();

    if report.total_daily_kwh > thresholds.heavy_load_kwh {
        tips.push(Tip::StaggerHeavyLoads);
    }

    if let Some(top) = report.top_device(devices) {
        if top.hours_per_day > thresholds.long_run_hours && top.watts > thresholds.high_power_watts {
            tips.push(Tip::ReduceTopDevice {
                name: top.name.clone(),
            });
        }
    }

    if report.billing.tariff > thresholds.high_tariff {
        tips.push(Tip::HighTariff);
    }

    if devices
        .iter()
        .any(|d| d.watts < thresholds.low_power_watts && d.hours_per_day > thresholds.always_on_hours)
    {
        tips.push(Tip::AuditAlwaysOn);
    }

    log::debug!("{} tips fired: {:?}", tips.len(), tips);
    tips
}
