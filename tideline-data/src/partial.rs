//! Readings from services that only cover part of a [`Conditions`] record.

use tideline_core::{CompassPoint, Conditions, DataSource};

/// Air temperature assumed when no weather service answered, in °F.
pub const ASSUMED_AIR_TEMPERATURE_F: f64 = 70.0;

/// A [`Conditions`] record where every reading may be missing.
///
/// Live services each report a subset of the readings. Their partial records
/// are merged in request order and the result is completed from a full
/// record, typically a simulation for the same location, so the scorer only
/// ever sees complete data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialConditions {
    /// Air temperature in °F.
    pub temperature: Option<f64>,
    /// Water temperature in °F.
    pub water_temperature: Option<f64>,
    /// Wave height in feet.
    pub wave_height: Option<f64>,
    /// Wind speed in mph.
    pub wind_speed: Option<f64>,
    /// Direction the wind blows from.
    pub wind_direction: Option<CompassPoint>,
    /// Direction the swell arrives from.
    pub swell_direction: Option<CompassPoint>,
    /// Underwater visibility in feet.
    pub visibility: Option<f64>,
    /// Tide in feet.
    pub tide: Option<f64>,
    /// Current strength in knots.
    pub current: Option<f64>,
    /// UV index.
    pub uv_index: Option<u8>,
    /// Cloud cover percentage.
    pub cloud_cover: Option<u8>,
    /// Whether meaningful precipitation is falling.
    pub has_precipitation: Option<bool>,
    /// Precipitation in inches.
    pub precipitation: Option<f64>,
    /// Barometric pressure in inHg.
    pub pressure: Option<f64>,
    /// Services that supplied the readings above.
    pub sources: Vec<DataSource>,
}

impl PartialConditions {
    /// Whether no reading has been supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self
            == Self {
                sources: self.sources.clone(),
                ..Self::default()
            }
    }

    /// Overlay `later` on `self`; readings present in `later` win.
    ///
    /// Sources are concatenated in order without duplicates.
    ///
    /// # Examples
    /// ```
    /// use tideline_core::DataSource;
    /// use tideline_data::PartialConditions;
    ///
    /// let weather = PartialConditions {
    ///     temperature: Some(68.0),
    ///     wind_speed: Some(12.0),
    ///     sources: vec![DataSource::OpenWeatherMap],
    ///     ..PartialConditions::default()
    /// };
    /// let tide = PartialConditions {
    ///     tide: Some(1.2),
    ///     sources: vec![DataSource::Noaa],
    ///     ..PartialConditions::default()
    /// };
    /// let merged = weather.merge(tide);
    /// assert_eq!(merged.temperature, Some(68.0));
    /// assert_eq!(merged.tide, Some(1.2));
    /// assert_eq!(merged.sources, vec![DataSource::OpenWeatherMap, DataSource::Noaa]);
    /// ```
    #[must_use]
    pub fn merge(self, later: Self) -> Self {
        let mut sources = self.sources;
        for source in later.sources {
            if !sources.contains(&source) {
                sources.push(source);
            }
        }
        Self {
            temperature: later.temperature.or(self.temperature),
            water_temperature: later.water_temperature.or(self.water_temperature),
            wave_height: later.wave_height.or(self.wave_height),
            wind_speed: later.wind_speed.or(self.wind_speed),
            wind_direction: later.wind_direction.or(self.wind_direction),
            swell_direction: later.swell_direction.or(self.swell_direction),
            visibility: later.visibility.or(self.visibility),
            tide: later.tide.or(self.tide),
            current: later.current.or(self.current),
            uv_index: later.uv_index.or(self.uv_index),
            cloud_cover: later.cloud_cover.or(self.cloud_cover),
            has_precipitation: later.has_precipitation.or(self.has_precipitation),
            precipitation: later.precipitation.or(self.precipitation),
            pressure: later.pressure.or(self.pressure),
            sources,
        }
    }

    /// Fill the weather readings nobody reported with neutral values.
    ///
    /// Without a weather report no rain is assumed and the air temperature is
    /// [`ASSUMED_AIR_TEMPERATURE_F`]. Reported readings are kept.
    #[must_use]
    pub fn assume_fair_weather(self) -> Self {
        let dry = self.has_precipitation.is_none();
        Self {
            temperature: self.temperature.or(Some(ASSUMED_AIR_TEMPERATURE_F)),
            has_precipitation: self.has_precipitation.or(Some(false)),
            precipitation: if dry {
                self.precipitation.or(Some(0.0))
            } else {
                self.precipitation
            },
            ..self
        }
    }

    /// Fill every missing reading from `fallback`.
    ///
    /// The location label comes from `fallback`. Sources are this record's
    /// when it has any, otherwise the fallback's.
    #[must_use]
    pub fn complete(self, fallback: Conditions) -> Conditions {
        let sources = if self.sources.is_empty() {
            fallback.sources
        } else {
            self.sources
        };
        Conditions {
            temperature: self.temperature.unwrap_or(fallback.temperature),
            water_temperature: self
                .water_temperature
                .unwrap_or(fallback.water_temperature),
            wave_height: self.wave_height.unwrap_or(fallback.wave_height),
            wind_speed: self.wind_speed.unwrap_or(fallback.wind_speed),
            wind_direction: self.wind_direction.unwrap_or(fallback.wind_direction),
            swell_direction: self.swell_direction.unwrap_or(fallback.swell_direction),
            visibility: self.visibility.unwrap_or(fallback.visibility),
            tide: self.tide.unwrap_or(fallback.tide),
            current: self.current.unwrap_or(fallback.current),
            uv_index: self.uv_index.unwrap_or(fallback.uv_index),
            cloud_cover: self.cloud_cover.unwrap_or(fallback.cloud_cover),
            has_precipitation: self
                .has_precipitation
                .unwrap_or(fallback.has_precipitation),
            precipitation: self.precipitation.unwrap_or(fallback.precipitation),
            pressure: self.pressure.unwrap_or(fallback.pressure),
            location: fallback.location,
            sources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tideline_core::test_support::sample_conditions;

    #[rstest]
    fn default_is_empty() {
        assert!(PartialConditions::default().is_empty());
    }

    #[rstest]
    fn sources_alone_do_not_count_as_readings() {
        let partial = PartialConditions {
            sources: vec![DataSource::Stormglass],
            ..PartialConditions::default()
        };
        assert!(partial.is_empty());
    }

    #[rstest]
    fn later_readings_win() {
        let earlier = PartialConditions {
            wave_height: Some(2.0),
            visibility: Some(35.0),
            ..PartialConditions::default()
        };
        let later = PartialConditions {
            wave_height: Some(3.5),
            ..PartialConditions::default()
        };
        let merged = earlier.merge(later);
        assert_eq!(merged.wave_height, Some(3.5));
        assert_eq!(merged.visibility, Some(35.0));
    }

    #[rstest]
    fn merge_skips_duplicate_sources() {
        let a = PartialConditions {
            sources: vec![DataSource::OpenWeatherMap],
            ..PartialConditions::default()
        };
        let b = PartialConditions {
            sources: vec![DataSource::OpenWeatherMap, DataSource::Noaa],
            ..PartialConditions::default()
        };
        assert_eq!(
            a.merge(b).sources,
            vec![DataSource::OpenWeatherMap, DataSource::Noaa]
        );
    }

    #[rstest]
    fn complete_fills_only_gaps() {
        let partial = PartialConditions {
            tide: Some(-1.4),
            uv_index: Some(9),
            sources: vec![DataSource::Noaa],
            ..PartialConditions::default()
        };
        let filled = partial.complete(sample_conditions());
        assert!((filled.tide - -1.4).abs() < f64::EPSILON);
        assert_eq!(filled.uv_index, 9);
        assert!((filled.wave_height - 2.0).abs() < f64::EPSILON);
        assert_eq!(filled.location, "Test Beach");
        assert_eq!(filled.sources, vec![DataSource::Noaa]);
    }

    #[rstest]
    fn fair_weather_fills_missing_rain_and_temperature() {
        let tide_only = PartialConditions {
            tide: Some(1.3),
            sources: vec![DataSource::Noaa],
            ..PartialConditions::default()
        };
        let rainy = Conditions {
            temperature: 61.0,
            has_precipitation: true,
            precipitation: 0.4,
            ..sample_conditions()
        };
        let filled = tide_only.assume_fair_weather().complete(rainy);
        assert!(!filled.has_precipitation);
        assert!(filled.precipitation.abs() < f64::EPSILON);
        assert!((filled.temperature - ASSUMED_AIR_TEMPERATURE_F).abs() < f64::EPSILON);
        assert!((filled.tide - 1.3).abs() < f64::EPSILON);
    }

    #[rstest]
    fn fair_weather_keeps_reported_readings() {
        let weather = PartialConditions {
            temperature: Some(58.0),
            has_precipitation: Some(true),
            precipitation: Some(0.3),
            ..PartialConditions::default()
        };
        assert_eq!(weather.clone().assume_fair_weather(), weather);
    }

    #[rstest]
    fn complete_keeps_fallback_sources_when_none_recorded() {
        let fallback = Conditions {
            sources: vec![DataSource::Simulated],
            ..sample_conditions()
        };
        let filled = PartialConditions::default().complete(fallback.clone());
        assert_eq!(filled, fallback);
    }
}
