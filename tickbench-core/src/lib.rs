#![warn(missing_docs)]
//! Tickbench Core - Measurement Runtime
//!
//! This crate provides the execution environment for micro-benchmarks:
//! - `Spec` and its staged builder for describing one benchmark subject
//! - `Suite` for collecting subjects in registration order
//! - Timer-overhead calibration so trivial actions aren't swamped by the clock
//! - `Engine` running warmup then measurement and aggregating per-subject stats

mod engine;
mod measure;
mod spec;
mod suite;

pub use engine::{Engine, EngineConfig, RunResults, SubjectResult};
pub use measure::{CALIBRATION_ITERATIONS, Timer, calibrate_timer_overhead};
pub use spec::{Spec, SpecIterations, SpecName, SpecWarmup};
pub use suite::Suite;

/// Boxed error produced by caller-supplied actions and cleanups.
pub type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by spec construction, registration, and execution.
///
/// Action and cleanup failures keep the caller's original error as their
/// `source()` — the engine never retries, logs, or rewraps them lossily.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// A builder stage received a value it rejects (currently: empty name).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A subject with this name is already registered in the suite.
    #[error("subject already registered: {0}")]
    DuplicateName(String),

    /// A subject's action failed; the run was aborted with no results.
    #[error("action failed for subject '{subject}'")]
    Action {
        /// Name of the subject whose action failed.
        subject: String,
        /// The caller's original error.
        #[source]
        source: DynError,
    },

    /// A subject's cleanup failed; the run was aborted with no results.
    #[error("cleanup failed for subject '{subject}'")]
    Cleanup {
        /// Name of the subject whose cleanup failed.
        subject: String,
        /// The caller's original error.
        #[source]
        source: DynError,
    },
}
