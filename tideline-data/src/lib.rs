//! Conditions sources for the Tideline engine.
//!
//! Responsibilities:
//! - Implement [`tideline_core::ConditionsProvider`] for a seeded simulation
//!   and for live weather, marine and tide services.
//! - Merge partial readings from several services into one record.
//! - Compose providers so a failing source falls back to another.
//!
//! Boundaries:
//! - Do not encode scoring rules (live in `tideline-scorer`).
//! - Keep the provider trait synchronous; async HTTP stays internal.
//!
//! Invariants:
//! - Providers are `Send + Sync` and hold no global mutable state.
//! - A given seed and location always simulate the same record.

pub mod live;

mod fallback;
mod partial;
mod simulation;
mod units;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use fallback::FallbackConditionsProvider;
pub use live::{LiveConditionsConfig, LiveConditionsProvider, ProviderBuildError};
pub use partial::{ASSUMED_AIR_TEMPERATURE_F, PartialConditions};
pub use simulation::SimulatedConditionsProvider;
