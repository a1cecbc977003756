//! Facade crate for the Tideline ocean activity recommender.
//!
//! This crate re-exports the core domain types and the heuristic scorer, and
//! exposes the simulated and live conditions providers behind the
//! `providers` feature.

#![forbid(unsafe_code)]

pub use tideline_core::{
    Activity, ActivityDefinition, ActivityScorer, Advisory, CompassPoint, Conditions,
    ConditionsError, ConditionsProvider, DataSource, MAX_SCORE, ScoredActivity, Suitability,
    TideStage, require_location,
};

pub use tideline_scorer::{HeuristicScorer, best, evaluate, rank};

#[cfg(feature = "providers")]
pub use tideline_data::{
    FallbackConditionsProvider, LiveConditionsConfig, LiveConditionsProvider, PartialConditions,
    ProviderBuildError, SimulatedConditionsProvider,
};
