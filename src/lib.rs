//! rgbconv - command line front end for color-convert
//!
//! Wraps the single-pixel conversions with configuration, batch files and
//! logging. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
