//! Text Output
//!
//! One line per subject, in registration order:
//!
//! ```text
//! sum_1k: Result{average=142.18, min=120, max=1904}
//! ```

use std::io::{self, Write};

use tickbench_core::{RunResults, SubjectResult};

use crate::report::Report;

/// Render one subject's line.
pub fn format_subject_line(name: &str, result: &SubjectResult) -> String {
    format!(
        "{}: Result{{average={:.2}, min={}, max={}}}",
        name, result.average_ns, result.min_ns, result.max_ns
    )
}

/// Write the text report for `results` to `out`, registration order.
pub fn write_text_report<W: Write>(results: &RunResults, out: &mut W) -> io::Result<()> {
    for (name, result) in results {
        writeln!(out, "{}", format_subject_line(name, result))?;
    }
    Ok(())
}

/// Render a full [`Report`] as text, one line per subject.
pub fn format_text_report(report: &Report) -> String {
    let mut output = String::new();
    for subject in &report.subjects {
        let result = SubjectResult {
            average_ns: subject.average_ns,
            min_ns: subject.min_ns,
            max_ns: subject.max_ns,
        };
        output.push_str(&format_subject_line(&subject.name, &result));
        output.push('\n');
    }
    output
}
