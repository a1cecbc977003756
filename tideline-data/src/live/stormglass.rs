//! Stormglass marine point forecast response types.
//!
//! See: <https://docs.stormglass.io/#/weather>. Each parameter carries one
//! value per upstream model; only the `noaa` model is read.

use serde::Deserialize;
use tideline_core::{CompassPoint, ConditionsError, DataSource};

use crate::PartialConditions;
use crate::units::{METRES_TO_FEET, MPS_TO_KNOTS, celsius_to_fahrenheit, round_to};

pub(crate) const POINT_PATH: &str = "/v2/weather/point";

/// Parameters requested from the point endpoint.
pub(crate) const PARAMS: &str = "waveHeight,waveDirection,swellHeight,swellDirection,\
swellPeriod,waterTemperature,currentSpeed,currentDirection";

/// Visibility assumed in calm, light-wind water, in feet.
pub(crate) const CALM_VISIBILITY_FT: f64 = 60.0;
/// Visibility assumed otherwise, in feet.
pub(crate) const STIRRED_VISIBILITY_FT: f64 = 35.0;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MarineResponse {
    #[serde(default)]
    pub hours: Vec<MarineHour>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MarineHour {
    /// Metres.
    pub wave_height: Option<ModelValues>,
    /// Degrees.
    pub wave_direction: Option<ModelValues>,
    /// °C.
    pub water_temperature: Option<ModelValues>,
    /// m/s.
    pub current_speed: Option<ModelValues>,
}

/// Per-model readings for one parameter.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ModelValues {
    pub noaa: Option<f64>,
}

fn noaa(values: Option<ModelValues>) -> Option<f64> {
    values.and_then(|values| values.noaa)
}

/// Estimate underwater visibility from surface state.
///
/// An unknown wind speed counts as 10 mph, which is not light.
pub(crate) fn estimate_visibility(wave_height_ft: f64, wind_speed_mph: Option<f64>) -> f64 {
    if wave_height_ft < 2.0 && wind_speed_mph.unwrap_or(10.0) < 10.0 {
        CALM_VISIBILITY_FT
    } else {
        STIRRED_VISIBILITY_FT
    }
}

impl MarineResponse {
    /// Map the first forecast hour onto the readings it covers.
    ///
    /// `wind_speed_mph` comes from an earlier source and only feeds the
    /// visibility estimate.
    #[expect(clippy::float_arithmetic, reason = "unit conversion")]
    pub(crate) fn into_partial(
        self,
        wind_speed_mph: Option<f64>,
    ) -> Result<PartialConditions, ConditionsError> {
        let hour = self
            .hours
            .into_iter()
            .next()
            .ok_or_else(|| ConditionsError::Parse {
                message: "Stormglass response has no hourly data".to_owned(),
            })?;

        let wave_height = noaa(hour.wave_height).map(|m| round_to(m * METRES_TO_FEET, 1));
        Ok(PartialConditions {
            wave_height,
            swell_direction: noaa(hour.wave_direction).map(CompassPoint::from_degrees),
            water_temperature: noaa(hour.water_temperature)
                .map(|c| celsius_to_fahrenheit(c).round()),
            current: noaa(hour.current_speed).map(|mps| round_to(mps * MPS_TO_KNOTS, 1)),
            visibility: wave_height.map(|ft| estimate_visibility(ft, wind_speed_mph)),
            sources: vec![DataSource::Stormglass],
            ..PartialConditions::default()
        })
    }
}
