//! Common types used across the application

/// One appliance entry as collected from the user
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    /// Display label (never empty after collection)
    pub name: String,
    /// Power draw in watts
    pub watts: f64,
    /// Daily running time in hours (0-24)
    pub hours_per_day: f64,
    /// Number of identical units
    pub quantity: u32,
}

impl Device {
    pub fn new(name: impl Into<String>, watts: f64, hours_per_day: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            watts,
            hours_per_day,
            quantity,
        }
    }

    /// Default label for the device at a 1-based position
    pub fn default_name(index: usize) -> String {
        format!("Device{}", index)
    }

    /// Daily energy consumption in kWh, derived from watts, hours and quantity
    pub fn daily_kwh(&self) -> f64 {
        self.watts * self.hours_per_day * f64::from(self.quantity) / 1000.0
    }
}

/// Billing cycle parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillingContext {
    /// Billing cycle length in days (1-365)
    pub days: u32,
    /// Price per kWh
    pub tariff: f64,
}

impl BillingContext {
    pub fn new(days: u32, tariff: f64) -> Self {
        Self { days, tariff }
    }
}
