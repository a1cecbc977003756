//! Obtain conditions snapshots for a location.
//!
//! The `ConditionsProvider` trait abstracts where a
//! [`Conditions`](crate::Conditions) record comes from: a simulation, a set
//! of weather services, or a fixture in tests. The scorer only ever sees the
//! resolved record.
//!
//! Errors are returned when the location is unusable or upstream services
//! fail.

mod error;

pub use error::ConditionsError;

use crate::Conditions;

/// Produce a [`Conditions`] record for a location.
///
/// # Examples
///
/// ```rust
/// use tideline_core::{CompassPoint, Conditions, ConditionsError, ConditionsProvider};
///
/// struct CalmSea;
///
/// impl ConditionsProvider for CalmSea {
///     fn conditions(&self, location: &str) -> Result<Conditions, ConditionsError> {
///         let location = tideline_core::require_location(location)?;
///         Ok(Conditions {
///             temperature: 75.0, water_temperature: 72.0, wave_height: 0.5,
///             wind_speed: 3.0, wind_direction: CompassPoint::N,
///             swell_direction: CompassPoint::S, visibility: 60.0, tide: 0.0,
///             current: 0.4, uv_index: 5, cloud_cover: 5,
///             has_precipitation: false, precipitation: 0.0, pressure: 30.1,
///             location: location.to_owned(), sources: Vec::new(),
///         })
///     }
/// }
///
/// assert_eq!(CalmSea.conditions("  "), Err(ConditionsError::EmptyLocation));
/// assert_eq!(CalmSea.conditions("Kona")?.location, "Kona");
/// # Ok::<(), ConditionsError>(())
/// ```
pub trait ConditionsProvider: Send + Sync {
    /// Return conditions for `location`.
    ///
    /// Implementations must return `Err(ConditionsError::EmptyLocation)`
    /// when `location` is empty or only whitespace.
    fn conditions(&self, location: &str) -> Result<Conditions, ConditionsError>;
}

impl<P: ConditionsProvider + ?Sized> ConditionsProvider for Box<P> {
    fn conditions(&self, location: &str) -> Result<Conditions, ConditionsError> {
        (**self).conditions(location)
    }
}

/// Trim `location` and reject it when nothing remains.
///
/// # Errors
/// Returns [`ConditionsError::EmptyLocation`] for blank input.
pub fn require_location(location: &str) -> Result<&str, ConditionsError> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return Err(ConditionsError::EmptyLocation);
    }
    Ok(trimmed)
}
