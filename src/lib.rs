//! Energy Analyzer library
//!
//! This module exposes the core functionality for use in tests
//! and by the binaries.

pub mod app;
pub mod core;
pub mod input;
pub mod metrics;
pub mod report;
pub mod tips;
