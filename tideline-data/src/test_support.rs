//! Test utilities for conditions providers.
//!
//! [`StubConditionsProvider`] is a deterministic test double for
//! [`ConditionsProvider`] that returns a pre-configured response without
//! contacting any service, and counts how often it was asked.

use std::sync::atomic::{AtomicUsize, Ordering};

use tideline_core::{Conditions, ConditionsError, ConditionsProvider, require_location};

/// Stub `ConditionsProvider` for testing.
#[derive(Debug)]
pub struct StubConditionsProvider {
    response: StubResponse,
    calls: AtomicUsize,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Conditions(Conditions),
    Error(ConditionsError),
}

impl StubConditionsProvider {
    /// Create a provider that returns `conditions`, relabelled with the
    /// requested location.
    #[must_use]
    pub const fn with_conditions(conditions: Conditions) -> Self {
        Self {
            response: StubResponse::Conditions(conditions),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a provider that returns `error` for any non-blank location.
    ///
    /// Blank input still returns `ConditionsError::EmptyLocation`.
    #[must_use]
    pub const fn with_error(error: ConditionsError) -> Self {
        Self {
            response: StubResponse::Error(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of requests received, including rejected ones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ConditionsProvider for StubConditionsProvider {
    fn conditions(&self, location: &str) -> Result<Conditions, ConditionsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let location = require_location(location)?;
        match &self.response {
            StubResponse::Conditions(conditions) => Ok(Conditions {
                location: location.to_owned(),
                ..conditions.clone()
            }),
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}
