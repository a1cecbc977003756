//! OpenWeatherMap geocoding and current-weather response types.
//!
//! See: <https://openweathermap.org/api/geocoding-api> and
//! <https://openweathermap.org/current>. Requests use `units=imperial`, so
//! temperatures arrive in °F and wind speeds in mph.

use serde::Deserialize;
use tideline_core::{CompassPoint, ConditionsError, DataSource};

use crate::PartialConditions;
use crate::units::{HPA_TO_INHG, MM_TO_INCHES, RAIN_THRESHOLD_INCHES, round_to, to_u8};

pub(crate) const GEOCODE_PATH: &str = "/geo/1.0/direct";
pub(crate) const WEATHER_PATH: &str = "/data/2.5/weather";

/// Latitude and longitude in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub(crate) struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Take the best geocoding match or report the location as unknown.
pub(crate) fn first_match(
    matches: Vec<Coordinates>,
    location: &str,
) -> Result<Coordinates, ConditionsError> {
    matches
        .into_iter()
        .next()
        .ok_or_else(|| ConditionsError::LocationNotFound {
            location: location.to_owned(),
        })
}

/// Current weather. Every block is optional in practice.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct WeatherResponse {
    #[serde(default)]
    pub main: MainReadings,
    #[serde(default)]
    pub wind: WindReadings,
    #[serde(default)]
    pub clouds: CloudReadings,
    #[serde(default)]
    pub rain: Option<RainReadings>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MainReadings {
    /// °F.
    pub temp: Option<f64>,
    /// hPa at sea level.
    pub pressure: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WindReadings {
    /// mph.
    pub speed: Option<f64>,
    /// Meteorological bearing in degrees.
    pub deg: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CloudReadings {
    /// Cloudiness percentage.
    pub all: Option<f64>,
}

/// Rain volume in millimetres.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RainReadings {
    #[serde(rename = "1h")]
    pub one_hour: Option<f64>,
    #[serde(rename = "3h")]
    pub three_hours: Option<f64>,
}

impl RainReadings {
    fn millimetres(&self) -> f64 {
        self.one_hour
            .unwrap_or(0.0)
            .max(self.three_hours.unwrap_or(0.0))
    }
}

impl WeatherResponse {
    /// Map the response onto the readings it covers.
    ///
    /// A missing rain block means no rain, so precipitation is always set.
    #[expect(clippy::float_arithmetic, reason = "unit conversion")]
    pub(crate) fn into_partial(self) -> PartialConditions {
        let inches = self.rain.as_ref().map_or(0.0, RainReadings::millimetres) * MM_TO_INCHES;
        PartialConditions {
            temperature: self.main.temp.map(f64::round),
            pressure: self.main.pressure.map(|hpa| round_to(hpa * HPA_TO_INHG, 2)),
            wind_speed: self.wind.speed.map(|mph| round_to(mph, 1)),
            wind_direction: self.wind.deg.map(CompassPoint::from_degrees),
            cloud_cover: self.clouds.all.map(to_u8),
            has_precipitation: Some(inches > RAIN_THRESHOLD_INCHES),
            precipitation: Some(round_to(inches, 2)),
            sources: vec![DataSource::OpenWeatherMap],
            ..PartialConditions::default()
        }
    }
}
