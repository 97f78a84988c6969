//! Metrics engine for household energy usage
//!
//! Turns the collected devices and billing parameters into per-device daily
//! energy, billing-cycle totals, the estimated bill and the top consumer.

use crate::core::{BillingContext, Device, Error, Result};

/// Aggregate usage figures for one run
#[derive(Debug, Clone, PartialEq)]
pub struct UsageReport {
    /// Sum of every device's daily kWh
    pub total_daily_kwh: f64,
    /// Daily total times the billing days
    pub total_cycle_kwh: f64,
    /// Cycle kWh times the tariff
    pub estimated_bill: f64,
    /// Index into the device list of the highest daily consumer
    pub top_index: usize,
    /// Billing parameters the report was computed with
    pub billing: BillingContext,
}

impl UsageReport {
    /// The highest daily consumer, looked up in the devices the report came from
    pub fn top_device<'a>(&self, devices: &'a [Device]) -> Option<&'a Device> {
        devices.get(self.top_index)
    }
}

/// Computes usage figures for a fixed billing context
pub struct MetricsEngine {
    billing: BillingContext,
}

impl MetricsEngine {
    /// Create a new metrics engine for the given billing context
    pub fn new(billing: BillingContext) -> Self {
        Self { billing }
    }

    pub fn billing(&self) -> &BillingContext {
        &self.billing
    }

    /// Energy over the whole billing cycle for a daily figure
    pub fn cycle_kwh(&self, daily_kwh: f64) -> f64 {
        daily_kwh * f64::from(self.billing.days)
    }

    /// Cost of a given energy consumption in kWh
    pub fn calculate_cost(&self, kwh: f64) -> f64 {
        kwh * self.billing.tariff
    }

    /// Compute the aggregate report
    ///
    /// Devices are only read. The top device is the first one reaching the
    /// maximum daily kWh.
    pub fn analyze(&self, devices: &[Device]) -> Result<UsageReport> {
        if devices.is_empty() {
            return Err(Error::EmptyDeviceList);
        }

        let mut total_daily_kwh = 0.0;
        let mut top_index = 0;
        let mut top_kwh = f64::NEG_INFINITY;
        for (i, device) in devices.iter().enumerate() {
            let kwh = device.daily_kwh();
            total_daily_kwh += kwh;
            if kwh > top_kwh {
                top_kwh = kwh;
                top_index = i;
            }
        }

        let total_cycle_kwh = self.cycle_kwh(total_daily_kwh);
        let estimated_bill = self.calculate_cost(total_cycle_kwh);

        log::info!(
            "Analyzed {} devices: {:.3} kWh/day, {:.3} kWh/cycle, bill {:.2}",
            devices.len(),
            total_daily_kwh,
            total_cycle_kwh,
            estimated_bill
        );

        Ok(UsageReport {
            total_daily_kwh,
            total_cycle_kwh,
            estimated_bill,
            top_index,
            billing: self.billing,
        })
    }
}
