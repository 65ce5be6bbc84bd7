//! Execution Engine
//!
//! Runs a [`Suite`] through two full passes: warmup for every subject, then
//! measurement for every subject, both in registration order. Warming all
//! subjects before measuring any keeps each subject's warmup adjacent to the
//! others' without interleaving warm-then-measure per subject.
//!
//! The engine is fail-fast: the first action or cleanup failure aborts the
//! run and no results are returned for any subject, including ones already
//! measured. Partial results from a run that crashed later would read as a
//! successful benchmark of the surviving subjects.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::measure::{CALIBRATION_ITERATIONS, Timer, calibrate_timer_overhead};
use crate::{BenchError, Spec, Suite};

/// Aggregated statistics for one subject's measured cycles.
///
/// `average_ns` has the calibrated timer overhead subtracted and can go
/// negative when the action costs less than a clock read — expected for
/// trivial actions, not an error. `min_ns`/`max_ns` are the raw extremes,
/// unadjusted. A subject with zero iteration cycles reports the all-zero
/// default without a single timestamp being taken.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectResult {
    /// Mean measured duration per iteration, overhead-adjusted, nanoseconds.
    pub average_ns: f64,
    /// Smallest raw per-iteration duration observed, nanoseconds.
    pub min_ns: u64,
    /// Largest raw per-iteration duration observed, nanoseconds.
    pub max_ns: u64,
}

/// Per-subject results in registration order.
pub type RunResults = IndexMap<String, SubjectResult>;

/// Engine tuning knobs.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Loop passes used to calibrate timer overhead once per run.
    pub calibration_iterations: u64,
    /// Optional memory-pressure-relief hook, invoked once per subject after
    /// its warmup and before its first measured iteration, outside the timed
    /// window. Stands in for runtimes that trigger a collector between
    /// subjects; with no collector to nudge the default is `None`.
    pub memory_relief: Option<fn()>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            calibration_iterations: CALIBRATION_ITERATIONS,
            memory_relief: None,
        }
    }
}

/// Runs suites: calibrates once, warms everything, measures everything.
#[derive(Debug, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with explicit configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run every subject in `suite` and return its results in registration
    /// order.
    ///
    /// Consumes the suite: a run is all-or-nothing, and a failed run leaves
    /// nothing to re-run against. Any error from a caller-supplied action or
    /// cleanup is propagated immediately with the original failure attached
    /// as its source.
    pub fn run(&self, mut suite: Suite) -> Result<RunResults, BenchError> {
        let overhead_ns = calibrate_timer_overhead(self.config.calibration_iterations);
        tracing::debug!(
            iterations = self.config.calibration_iterations,
            overhead_ns,
            "timer overhead calibrated"
        );

        // Warmup pass: all subjects, before any subject is measured.
        for spec in suite.iter_mut() {
            tracing::trace!(subject = spec.name(), cycles = spec.warmup_cycles(), "warming up");
            for _ in 0..spec.warmup_cycles() {
                if let Err(source) = spec.invoke_action() {
                    return Err(BenchError::Action {
                        subject: spec.name().to_string(),
                        source,
                    });
                }
            }
        }

        // Measurement pass, same order.
        let mut results = RunResults::new();
        for spec in suite.iter_mut() {
            if let Some(relieve) = self.config.memory_relief {
                relieve();
            }
            tracing::trace!(
                subject = spec.name(),
                cycles = spec.iteration_cycles(),
                "measuring"
            );
            let result = measure_subject(spec, overhead_ns)?;
            results.insert(spec.name().to_string(), result);
        }

        Ok(results)
    }
}

/// Measure one subject's iterations against a pre-calibrated overhead.
fn measure_subject(spec: &mut Spec, overhead_ns: f64) -> Result<SubjectResult, BenchError> {
    let cycles = spec.iteration_cycles();
    if cycles == 0 {
        return Ok(SubjectResult::default());
    }

    let mut total_ns: u128 = 0;
    let mut min_ns = u64::MAX;
    let mut max_ns = 0u64;

    for _ in 0..cycles {
        let timer = Timer::start();
        let outcome = spec.invoke_action();
        let elapsed = timer.stop();
        if let Err(source) = outcome {
            return Err(BenchError::Action {
                subject: spec.name().to_string(),
                source,
            });
        }

        total_ns += u128::from(elapsed);
        min_ns = min_ns.min(elapsed);
        max_ns = max_ns.max(elapsed);

        if let Err(source) = spec.invoke_cleanup() {
            return Err(BenchError::Cleanup {
                subject: spec.name().to_string(),
                source,
            });
        }
    }

    Ok(SubjectResult {
        average_ns: total_ns as f64 / cycles as f64 - overhead_ns,
        min_ns,
        max_ns,
    })
}
