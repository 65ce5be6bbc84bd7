//! Report Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tickbench_core::{EngineConfig, RunResults};

/// Complete run report: metadata plus per-subject statistics in
/// registration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata.
    pub meta: ReportMeta,
    /// Per-subject results, registration order.
    pub subjects: Vec<SubjectReport>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Harness version that produced the report.
    pub version: String,
    /// When the report was built.
    pub timestamp: DateTime<Utc>,
    /// Loop passes used for timer-overhead calibration.
    pub calibration_iterations: u64,
    /// Calibrated per-read timer overhead, nanoseconds. May be zero or
    /// slightly negative on coarse clocks.
    pub timer_overhead_ns: f64,
}

/// One subject's statistics in the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectReport {
    /// Subject name.
    pub name: String,
    /// Overhead-adjusted mean, nanoseconds.
    pub average_ns: f64,
    /// Smallest raw per-iteration duration, nanoseconds.
    pub min_ns: u64,
    /// Largest raw per-iteration duration, nanoseconds.
    pub max_ns: u64,
}

/// Assemble a [`Report`] from engine results and the configuration that
/// produced them.
pub fn build_report(results: &RunResults, config: &EngineConfig, timer_overhead_ns: f64) -> Report {
    let subjects = results
        .iter()
        .map(|(name, result)| SubjectReport {
            name: name.clone(),
            average_ns: result.average_ns,
            min_ns: result.min_ns,
            max_ns: result.max_ns,
        })
        .collect();

    Report {
        meta: ReportMeta {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            calibration_iterations: config.calibration_iterations,
            timer_overhead_ns,
        },
        subjects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickbench_core::SubjectResult;

    #[test]
    fn build_report_preserves_subject_order() {
        let mut results = RunResults::new();
        results.insert(
            "slow".to_string(),
            SubjectResult {
                average_ns: 120.5,
                min_ns: 90,
                max_ns: 300,
            },
        );
        results.insert("fast".to_string(), SubjectResult::default());

        let report = build_report(&results, &EngineConfig::default(), 12.0);

        let names: Vec<_> = report.subjects.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["slow", "fast"]);
        assert_eq!(report.meta.timer_overhead_ns, 12.0);
        assert_eq!(report.subjects[0].max_ns, 300);
    }
}
