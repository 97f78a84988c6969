//! Core module - Configuration, errors, and the device data model

mod config;
mod error;
mod types;

pub use config::{ColorMode, Config, GeneralConfig, PricingConfig, ReportConfig, TipsConfig};
pub use error::{Error, Result};
pub use types::{BillingContext, Device};
