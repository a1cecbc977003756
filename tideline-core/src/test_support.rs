//! Test-only fixtures shared by unit and behaviour tests across the
//! workspace.

use crate::{
    Activity, ActivityScorer, CompassPoint, Conditions, ConditionsError, ConditionsProvider,
    require_location,
};

/// A mild, fully populated conditions record.
///
/// Tests override individual fields with struct update syntax.
pub fn sample_conditions() -> Conditions {
    Conditions {
        temperature: 72.0,
        water_temperature: 70.0,
        wave_height: 2.0,
        wind_speed: 8.0,
        wind_direction: CompassPoint::W,
        swell_direction: CompassPoint::W,
        visibility: 40.0,
        tide: 0.0,
        current: 1.0,
        uv_index: 4,
        cloud_cover: 10,
        has_precipitation: false,
        precipitation: 0.0,
        pressure: 30.0,
        location: "Test Beach".to_owned(),
        sources: Vec::new(),
    }
}

/// `ConditionsProvider` returning the same record for every location.
///
/// The record's `location` is replaced with the requested label.
#[derive(Debug, Clone)]
pub struct FixedConditionsProvider {
    conditions: Conditions,
}

impl FixedConditionsProvider {
    /// Serve `conditions` for every request.
    pub const fn new(conditions: Conditions) -> Self {
        Self { conditions }
    }
}

impl Default for FixedConditionsProvider {
    fn default() -> Self {
        Self::new(sample_conditions())
    }
}

impl ConditionsProvider for FixedConditionsProvider {
    fn conditions(&self, location: &str) -> Result<Conditions, ConditionsError> {
        let location = require_location(location)?;
        Ok(Conditions {
            location: location.to_owned(),
            ..self.conditions.clone()
        })
    }
}

/// Scorer assigning the same score to every activity.
#[derive(Debug, Default, Copy, Clone)]
pub struct ConstantScorer(pub u8);

impl ActivityScorer for ConstantScorer {
    fn score(&self, _activity: Activity, _conditions: &Conditions) -> u8 {
        self.0
    }
}
