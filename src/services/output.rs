use crate::error::AppError;
use crate::models::{ConversionOutput, OutputFormat};
use crate::services::BatchReport;

/// Render a single result in the requested format
pub fn render_output(output: &ConversionOutput, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(output.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(output)?),
    }
}

/// Render a batch report in the requested format
///
/// Text output has one line per entry followed by a summary line.
pub fn render_report(report: &BatchReport, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            let mut lines: Vec<String> = report
                .entries
                .iter()
                .map(|entry| match (&entry.output, &entry.error) {
                    (Some(output), _) => format!("{:>4} {:<12} {output}", entry.index, entry.op),
                    (None, Some(error)) => {
                        format!("{:>4} {:<12} error: {error}", entry.index, entry.op)
                    }
                    (None, None) => format!("{:>4} {:<12}", entry.index, entry.op),
                })
                .collect();
            lines.push(format!(
                "{} succeeded, {} failed",
                report.succeeded, report.failed
            ));
            Ok(lines.join("\n"))
        }
    }
}
