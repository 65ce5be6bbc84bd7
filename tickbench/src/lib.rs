#![warn(missing_docs)]
//! # Tickbench
//!
//! Micro-benchmark harness: named subjects run through a warmup pass and a
//! measured pass, reporting per-subject average/min/max nanoseconds with the
//! cost of the clock read itself subtracted from averages.
//!
//! - **Staged spec building**: each builder stage is its own type, so
//!   supplying attributes out of order is a compile error, not a runtime one
//! - **Overhead compensation**: timer-call cost is calibrated once per run
//!   and subtracted from every average
//! - **Two-pass execution**: all subjects warm up before any is measured,
//!   always in registration order
//! - **Fail-fast**: the first action or cleanup failure aborts the run with
//!   no partial results, keeping failed runs unmistakable
//!
//! ## Quick Start
//!
//! ```
//! use tickbench::prelude::*;
//!
//! let suite = Suite::with_subject(
//!     Spec::named("sum_1k")?
//!         .with_warmup_cycles(10)
//!         .with_iterations(100)
//!         .with_action(|| {
//!             let _ = std::hint::black_box((0..1000u64).sum::<u64>());
//!             Ok(())
//!         }),
//! );
//!
//! let results = tickbench::run(suite)?;
//! assert!(results["sum_1k"].min_ns <= results["sum_1k"].max_ns);
//! # Ok::<(), tickbench::BenchError>(())
//! ```

use std::io::Write;

// Re-export core types
pub use tickbench_core::{
    BenchError, CALIBRATION_ITERATIONS, DynError, Engine, EngineConfig, RunResults, Spec,
    SpecIterations, SpecName, SpecWarmup, SubjectResult, Suite, Timer, calibrate_timer_overhead,
};

// Re-export report types
pub use tickbench_report::{
    OutputFormat, Report, ReportMeta, SubjectReport, build_report, format_subject_line,
    format_text_report, generate_json_report, render_report, write_text_report,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Engine, EngineConfig, Spec, SubjectResult, Suite};
}

/// Run every subject in `suite` with a default-configured engine.
///
/// Results are keyed by subject name in registration order. Any failure —
/// during warmup or measurement — aborts the whole run: no results are
/// valid for a run that did not finish.
pub fn run(suite: Suite) -> Result<RunResults, BenchError> {
    Engine::new().run(suite)
}

/// Run a single subject and return its result directly.
///
/// Convenience over [`run`] with a one-subject suite.
pub fn run_single(spec: Spec) -> Result<SubjectResult, BenchError> {
    let results = run(Suite::with_subject(spec))?;
    Ok(results
        .into_iter()
        .next()
        .map(|(_, result)| result)
        .unwrap_or_default())
}

/// Run the suite and write the text report to `out`.
///
/// The results are also returned so callers are not limited to the rendered
/// form.
pub fn run_and_write<W: Write>(suite: Suite, out: &mut W) -> anyhow::Result<RunResults> {
    let results = run(suite)?;
    write_text_report(&results, out)?;
    Ok(results)
}

/// Run the suite and print the text report to stdout.
pub fn run_and_print(suite: Suite) -> anyhow::Result<RunResults> {
    run_and_write(suite, &mut std::io::stdout())
}
