#![warn(missing_docs)]
//! Tickbench Report - Reporting and Output
//!
//! Turns engine results into output:
//! - Text (the `name: Result{average=…, min=…, max=…}` line format)
//! - JSON (machine-readable, with run metadata)

mod json;
mod report;
mod text;

pub use json::generate_json_report;
pub use report::{Report, ReportMeta, SubjectReport, build_report};
pub use text::{format_subject_line, format_text_report, write_text_report};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One human-readable line per subject
    Text,
    /// JSON with run metadata
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "human" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Render a report in the requested format.
pub fn render_report(report: &Report, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(format_text_report(report)),
        OutputFormat::Json => generate_json_report(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_parses_known_names() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("human".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn render_report_dispatches_on_format() {
        use tickbench_core::{EngineConfig, RunResults, SubjectResult};

        let mut results = RunResults::new();
        results.insert(
            "one".to_string(),
            SubjectResult {
                average_ns: 5.0,
                min_ns: 4,
                max_ns: 9,
            },
        );
        let report = build_report(&results, &EngineConfig::default(), 1.0);

        let text = render_report(&report, OutputFormat::Text).unwrap();
        assert_eq!(text, "one: Result{average=5.00, min=4, max=9}\n");

        let json = render_report(&report, OutputFormat::Json).unwrap();
        assert!(json.contains("\"subjects\""));
    }
}
