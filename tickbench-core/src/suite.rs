//! Suite - Subject Registry
//!
//! An insertion-ordered collection of [`Spec`]s keyed by unique name.
//! Additions consume the suite and return a new snapshot, so a suite handed
//! to the engine can never be aliased by a caller still adding subjects.

use indexmap::IndexMap;

use crate::{BenchError, Spec};

/// Insertion-ordered registry of benchmark subjects.
///
/// Subjects are measured strictly in the order they were added, and results
/// preserve that order. Names must be unique; registering a duplicate fails
/// with [`BenchError::DuplicateName`]. Suites are append-only — there is no
/// removal.
#[derive(Debug, Default)]
pub struct Suite {
    subjects: IndexMap<String, Spec>,
}

impl Suite {
    /// An empty suite.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a suite with exactly one subject.
    pub fn with_subject(spec: Spec) -> Self {
        let mut subjects = IndexMap::new();
        subjects.insert(spec.name().to_string(), spec);
        Self { subjects }
    }

    /// Append a subject, yielding a new suite snapshot.
    ///
    /// Fails with [`BenchError::DuplicateName`] if a subject with the same
    /// name is already registered; no suite in a half-updated state is ever
    /// observable.
    pub fn add_subject(mut self, spec: Spec) -> Result<Self, BenchError> {
        if self.subjects.contains_key(spec.name()) {
            return Err(BenchError::DuplicateName(spec.name().to_string()));
        }
        self.subjects.insert(spec.name().to_string(), spec);
        Ok(self)
    }

    /// Number of registered subjects.
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Whether the suite has no subjects.
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Subject names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.subjects.keys().map(String::as_str)
    }

    /// Registered specs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Spec> {
        self.subjects.values()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Spec> {
        self.subjects.values_mut()
    }
}
