//! Batch conversion files
//!
//! A batch file is a YAML (or JSON) list of [`Conversion`] requests. Every
//! entry is attempted; failures are recorded next to the successes unless
//! the caller asks to stop at the first one.

use serde::Serialize;
use std::path::Path;

use crate::error::AppError;
use crate::models::{Conversion, ConversionOutput};
use crate::services::ColorService;

/// Outcome of one batch entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    /// Zero-based position in the batch file
    pub index: usize,
    pub op: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<ConversionOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of a whole batch
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchReport {
    fn push(
        &mut self,
        index: usize,
        conversion: &Conversion,
        result: Result<ConversionOutput, AppError>,
    ) {
        let (output, error) = match result {
            Ok(output) => {
                self.succeeded += 1;
                (Some(output), None)
            }
            Err(e) => {
                self.failed += 1;
                (None, Some(e.to_string()))
            }
        };
        self.entries.push(BatchEntry {
            index,
            op: conversion.kind(),
            output,
            error,
        });
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Parse a batch document. JSON documents are accepted as YAML.
pub fn parse_batch(content: &str) -> Result<Vec<Conversion>, AppError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Run every conversion, collecting failures
pub fn run_batch(service: &ColorService, conversions: &[Conversion]) -> BatchReport {
    let mut report = BatchReport::default();
    for (index, conversion) in conversions.iter().enumerate() {
        report.push(index, conversion, service.convert(conversion));
    }

    tracing::info!(
        total = conversions.len(),
        succeeded = report.succeeded,
        failed = report.failed,
        "Batch complete"
    );
    report
}

/// Run conversions until the first failure, which is returned as an error
pub fn run_batch_fail_fast(
    service: &ColorService,
    conversions: &[Conversion],
) -> Result<BatchReport, AppError> {
    let mut report = BatchReport::default();
    for (index, conversion) in conversions.iter().enumerate() {
        let output = service.convert(conversion).map_err(|e| {
            tracing::warn!(index, op = conversion.kind(), %e, "Batch stopped");
            AppError::Batch {
                index,
                source: Box::new(e),
            }
        })?;
        report.push(index, conversion, Ok(output));
    }
    Ok(report)
}

/// Read, parse and run a batch file
pub fn run_batch_file(
    service: &ColorService,
    path: &Path,
    fail_fast: bool,
) -> Result<BatchReport, AppError> {
    let content = std::fs::read_to_string(path)?;
    let conversions = parse_batch(&content)?;
    tracing::debug!(path = %path.display(), entries = conversions.len(), "Loaded batch file");

    if fail_fast {
        run_batch_fail_fast(service, &conversions)
    } else {
        Ok(run_batch(service, &conversions))
    }
}
