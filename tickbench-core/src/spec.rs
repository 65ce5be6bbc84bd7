//! Spec - Benchmark Subject Description
//!
//! A `Spec` names one unit of work and says how often to run it untimed
//! (warmup) and timed (iterations). Construction goes through a staged
//! builder: each stage is a distinct type exposing only the next legal call,
//! so supplying attributes out of order fails to compile instead of failing
//! at run time.
//!
//! ```
//! use tickbench_core::Spec;
//!
//! let spec = Spec::named("sum_1k")?
//!     .with_warmup_cycles(10)
//!     .with_iterations(100)
//!     .with_action(|| {
//!         let _ = std::hint::black_box((0..1000u64).sum::<u64>());
//!         Ok(())
//!     });
//! # Ok::<(), tickbench_core::BenchError>(())
//! ```

use crate::{BenchError, DynError};

/// Boxed fallible operation run once per cycle.
pub(crate) type Action = Box<dyn FnMut() -> Result<(), DynError>>;

/// An immutable description of one benchmark subject.
///
/// Built via [`Spec::named`]; the only mutation allowed after the terminal
/// builder stage is swapping the default no-op cleanup for a real one with
/// [`Spec::with_cleanup`]. Cleanup runs after each *measured* iteration,
/// never during warmup.
pub struct Spec {
    name: String,
    warmup_cycles: u64,
    iteration_cycles: u64,
    action: Action,
    cleanup: Action,
}

impl Spec {
    /// Start building a spec. Fails if `name` is empty.
    ///
    /// Names must be unique within a [`Suite`](crate::Suite); uniqueness is
    /// checked at registration, not here.
    pub fn named(name: impl Into<String>) -> Result<SpecName, BenchError> {
        let name = name.into();
        if name.is_empty() {
            return Err(BenchError::InvalidArgument(
                "subject name must not be empty".to_string(),
            ));
        }
        Ok(SpecName { name })
    }

    /// Replace the default no-op cleanup.
    ///
    /// Cleanup is invoked once after every measured iteration, outside the
    /// timed window.
    pub fn with_cleanup(mut self, cleanup: impl FnMut() -> Result<(), DynError> + 'static) -> Self {
        self.cleanup = Box::new(cleanup);
        self
    }

    /// Subject name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Untimed repetitions before measurement.
    pub fn warmup_cycles(&self) -> u64 {
        self.warmup_cycles
    }

    /// Timed repetitions.
    pub fn iteration_cycles(&self) -> u64 {
        self.iteration_cycles
    }

    #[inline]
    pub(crate) fn invoke_action(&mut self) -> Result<(), DynError> {
        (self.action)()
    }

    #[inline]
    pub(crate) fn invoke_cleanup(&mut self) -> Result<(), DynError> {
        (self.cleanup)()
    }
}

impl std::fmt::Debug for Spec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spec")
            .field("name", &self.name)
            .field("warmup_cycles", &self.warmup_cycles)
            .field("iteration_cycles", &self.iteration_cycles)
            .finish_non_exhaustive()
    }
}

/// Builder stage: name supplied, warmup count pending.
#[derive(Debug)]
pub struct SpecName {
    name: String,
}

impl SpecName {
    /// Set the number of untimed warmup repetitions.
    ///
    /// Zero is valid and skips warmup for this subject. Negative counts are
    /// unrepresentable.
    pub fn with_warmup_cycles(self, warmup_cycles: u64) -> SpecWarmup {
        SpecWarmup {
            name: self.name,
            warmup_cycles,
        }
    }
}

/// Builder stage: warmup count supplied, iteration count pending.
#[derive(Debug)]
pub struct SpecWarmup {
    name: String,
    warmup_cycles: u64,
}

impl SpecWarmup {
    /// Set the number of timed iterations.
    ///
    /// Zero is valid; the subject then reports an all-zero result without a
    /// single timestamp being taken.
    pub fn with_iterations(self, iteration_cycles: u64) -> SpecIterations {
        SpecIterations {
            name: self.name,
            warmup_cycles: self.warmup_cycles,
            iteration_cycles,
        }
    }
}

/// Builder stage: counts supplied, action pending.
#[derive(Debug)]
pub struct SpecIterations {
    name: String,
    warmup_cycles: u64,
    iteration_cycles: u64,
}

impl SpecIterations {
    /// Supply the operation to measure, completing the spec.
    pub fn with_action(self, action: impl FnMut() -> Result<(), DynError> + 'static) -> Spec {
        Spec {
            name: self.name,
            warmup_cycles: self.warmup_cycles,
            iteration_cycles: self.iteration_cycles,
            action: Box::new(action),
            cleanup: Box::new(|| Ok(())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop_spec(name: &str) -> Spec {
        Spec::named(name)
            .unwrap()
            .with_warmup_cycles(2)
            .with_iterations(5)
            .with_action(|| Ok(()))
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Spec::named("").unwrap_err();
        assert!(matches!(err, BenchError::InvalidArgument(_)));
    }

    #[test]
    fn builder_records_attributes() {
        let spec = noop_spec("fast");
        assert_eq!(spec.name(), "fast");
        assert_eq!(spec.warmup_cycles(), 2);
        assert_eq!(spec.iteration_cycles(), 5);
    }

    #[test]
    fn default_cleanup_is_noop() {
        let mut spec = noop_spec("quiet");
        assert!(spec.invoke_cleanup().is_ok());
    }

    #[test]
    fn with_cleanup_replaces_default() {
        let mut spec = noop_spec("loud").with_cleanup(|| Err("cleanup ran".into()));
        let err = spec.invoke_cleanup().unwrap_err();
        assert_eq!(err.to_string(), "cleanup ran");
    }

    #[test]
    fn action_errors_pass_through() {
        let mut spec = Spec::named("failing")
            .unwrap()
            .with_warmup_cycles(0)
            .with_iterations(1)
            .with_action(|| Err("boom".into()));
        assert_eq!(spec.invoke_action().unwrap_err().to_string(), "boom");
    }

    #[test]
    fn debug_omits_closures() {
        let spec = noop_spec("printable");
        let rendered = format!("{:?}", spec);
        assert!(rendered.contains("printable"));
        assert!(rendered.contains("warmup_cycles"));
    }
}
