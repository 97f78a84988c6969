//! Validated console input
//!
//! Parsing and range checks are plain functions returning an [`InputError`];
//! [`Prompter`] wraps them in a re-asking loop over any reader/writer pair.

use crate::core::{BillingContext, Device, Error, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use thiserror::Error;

/// Allowed billing cycle length in days
pub const DAYS_RANGE: (i64, i64) = (1, 365);
/// Allowed number of devices per run
pub const DEVICE_COUNT_RANGE: (i64, i64) = (1, 100);
/// Minimum device power draw in watts
pub const MIN_WATTS: f64 = 1.0;
/// Allowed daily running hours
pub const HOURS_RANGE: (f64, f64) = (0.0, 24.0);
/// Allowed quantity per device entry
pub const QUANTITY_RANGE: (i64, i64) = (1, 1000);

/// Why a line of user input was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("enter a value")]
    Empty,

    #[error("integers only")]
    NotInteger,

    #[error("numbers only")]
    NotNumber,

    #[error("must be \u{2265} {0}")]
    BelowMin(String),

    #[error("must be \u{2264} {0}")]
    AboveMax(String),
}

fn check_bounds<T: PartialOrd + Display>(
    value: T,
    low: Option<T>,
    high: Option<T>,
) -> std::result::Result<T, InputError> {
    if let Some(low) = low {
        if value < low {
            return Err(InputError::BelowMin(low.to_string()));
        }
    }
    if let Some(high) = high {
        if value > high {
            return Err(InputError::AboveMax(high.to_string()));
        }
    }
    Ok(value)
}

/// Parse an integer and check it against optional inclusive bounds
pub fn parse_int(
    raw: &str,
    low: Option<i64>,
    high: Option<i64>,
) -> std::result::Result<i64, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InputError::Empty);
    }
    let value: i64 = raw.parse().map_err(|e: std::num::ParseIntError| match (e.kind(), low, high) {
        // Digits past the i64 range are still integers, just out of bounds
        (IntErrorKind::PosOverflow, _, Some(high)) => InputError::AboveMax(high.to_string()),
        (IntErrorKind::NegOverflow, Some(low), _) => InputError::BelowMin(low.to_string()),
        _ => InputError::NotInteger,
    })?;
    check_bounds(value, low, high)
}

/// Parse a decimal number and check it against optional inclusive bounds
///
/// Integer-looking text is accepted. NaN and infinities are not numbers a
/// user can bill against, so they are rejected like any other junk.
pub fn parse_decimal(
    raw: &str,
    low: Option<f64>,
    high: Option<f64>,
) -> std::result::Result<f64, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InputError::Empty);
    }
    let value: f64 = raw.parse().map_err(|_| InputError::NotNumber)?;
    if !value.is_finite() {
        return Err(InputError::NotNumber);
    }
    check_bounds(value, low, high)
}

/// Line-oriented prompt loop
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the underlying writer
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write a full line to the prompt output
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `validate` accepts the answer, printing each rejection
    fn ask_with<T>(
        &mut self,
        prompt: &str,
        validate: impl Fn(&str) -> std::result::Result<T, InputError>,
    ) -> Result<T> {
        loop {
            let raw = self.read_line(prompt)?;
            match validate(&raw) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::debug!("Rejected {:?} for prompt {:?}: {}", raw, prompt.trim(), e);
                    writeln!(self.writer, "  {}", e)?;
                }
            }
        }
    }

    /// Ask for free text; blank answers come back as an empty string
    pub fn ask_text(&mut self, prompt: &str) -> Result<String> {
        self.read_line(prompt)
    }

    /// Ask for an integer within optional inclusive bounds
    pub fn ask_int(&mut self, prompt: &str, low: Option<i64>, high: Option<i64>) -> Result<i64> {
        self.ask_with(prompt, |raw| parse_int(raw, low, high))
    }

    /// Ask for a decimal within optional inclusive bounds
    pub fn ask_decimal(&mut self, prompt: &str, low: Option<f64>, high: Option<f64>) -> Result<f64> {
        self.ask_with(prompt, |raw| parse_decimal(raw, low, high))
    }
}

/// Ask for the billing cycle length and tariff
pub fn collect_billing<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    currency_symbol: &str,
) -> Result<BillingContext> {
    let days = prompter.ask_int(
        "Billing days (typical 30): ",
        Some(DAYS_RANGE.0),
        Some(DAYS_RANGE.1),
    )?;
    let tariff = prompter.ask_decimal(
        &format!("Tariff {}/kWh (e.g., 8): ", currency_symbol),
        Some(0.0),
        None,
    )?;

    // Bounds above keep `days` inside u32
    Ok(BillingContext::new(days as u32, tariff))
}

/// Ask how many devices will be entered
pub fn collect_device_count<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<usize> {
    let n = prompter.ask_int(
        "Number of devices: ",
        Some(DEVICE_COUNT_RANGE.0),
        Some(DEVICE_COUNT_RANGE.1),
    )?;
    Ok(n as usize)
}

/// Collect `n` devices in input order
pub fn collect_devices<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    n: usize,
) -> Result<Vec<Device>> {
    let mut devices = Vec::with_capacity(n);
    prompter.say("\nEnter device details (example names: Air Conditioner, Fridge, Fan).")?;

    for i in 1..=n {
        let mut name = prompter.ask_text(&format!("  {}. Device name: ", i))?;
        if name.is_empty() {
            name = Device::default_name(i);
        }
        let watts = prompter.ask_decimal("     Watts (W): ", Some(MIN_WATTS), None)?;
        let hours = prompter.ask_decimal(
            "     Hours per day: ",
            Some(HOURS_RANGE.0),
            Some(HOURS_RANGE.1),
        )?;
        let quantity = prompter.ask_int(
            "     Quantity: ",
            Some(QUANTITY_RANGE.0),
            Some(QUANTITY_RANGE.1),
        )?;

        let device = Device::new(name, watts, hours, quantity as u32);
        log::debug!("Collected {:?} ({:.3} kWh/day)", device, device.daily_kwh());
        devices.push(device);
    }

    Ok(devices)
}
