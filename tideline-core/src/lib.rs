//! Core domain types for the Tideline engine.
//!
//! A [`Conditions`] snapshot describes the sea and sky at a location. An
//! [`ActivityScorer`] turns it into a score per [`Activity`], and a
//! [`ConditionsProvider`] supplies snapshots from simulations or weather
//! services. Scoring is pure and infallible; only providers can fail.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod activity;
pub mod advisory;
pub mod conditions;
pub mod provider;
pub mod scorer;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use activity::{Activity, ActivityDefinition, ScoredActivity, Suitability};
pub use advisory::Advisory;
pub use conditions::{CompassPoint, Conditions, DataSource, TideStage};
pub use provider::{ConditionsError, ConditionsProvider, require_location};
pub use scorer::{ActivityScorer, MAX_SCORE};
