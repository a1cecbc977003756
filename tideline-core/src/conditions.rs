//! Environmental snapshot consumed by the activity scorer.
//!
//! [`Conditions`] is a plain value type. Fields are never validated or
//! clamped on construction: out-of-range readings simply score however the
//! heuristics treat them.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the eight compass octants used for wind and swell bearings.
///
/// # Examples
/// ```
/// use tideline_core::CompassPoint;
///
/// assert_eq!(CompassPoint::from_degrees(270.0), CompassPoint::W);
/// assert_eq!("nw".parse::<CompassPoint>(), Ok(CompassPoint::NW));
/// assert_eq!(CompassPoint::SE.to_string(), "SE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CompassPoint {
    /// North.
    N,
    /// North-east.
    NE,
    /// East.
    E,
    /// South-east.
    SE,
    /// South.
    S,
    /// South-west.
    SW,
    /// West.
    W,
    /// North-west.
    NW,
}

impl CompassPoint {
    /// All octants, clockwise from north.
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Return the abbreviation, e.g. `"SW"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }

    /// Map a bearing in degrees to its octant.
    ///
    /// Each octant spans 45° centred on its point, so north covers
    /// `[337.5, 360)` and `[0, 22.5)`. Bearings outside `[0, 360)` are
    /// wrapped first; non-finite bearings resolve to north.
    pub fn from_degrees(degrees: f64) -> Self {
        const SECTORS: [(f64, CompassPoint); 7] = [
            (67.5, CompassPoint::NE),
            (112.5, CompassPoint::E),
            (157.5, CompassPoint::SE),
            (202.5, CompassPoint::S),
            (247.5, CompassPoint::SW),
            (292.5, CompassPoint::W),
            (337.5, CompassPoint::NW),
        ];
        if !degrees.is_finite() {
            return Self::N;
        }
        let bearing = degrees.rem_euclid(360.0);
        if bearing < 22.5 {
            return Self::N;
        }
        SECTORS
            .iter()
            .find(|(upper, _)| bearing < *upper)
            .map_or(Self::N, |(_, point)| *point)
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CompassPoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|point| point.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown compass point '{s}'"))
    }
}

/// Coarse tide classification used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TideStage {
    /// More than half a foot below mean level.
    Low,
    /// Within half a foot of mean level.
    Medium,
    /// More than half a foot above mean level.
    High,
}

impl TideStage {
    /// Classify a tide reading in feet.
    pub fn from_feet(tide: f64) -> Self {
        if tide > 0.5 {
            Self::High
        } else if tide < -0.5 {
            Self::Low
        } else {
            Self::Medium
        }
    }

    /// Return the stage name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for TideStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Upstream service that contributed readings to a [`Conditions`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DataSource {
    /// Pseudo-random simulation.
    Simulated,
    /// OpenWeatherMap current weather.
    OpenWeatherMap,
    /// Stormglass marine point forecast.
    Stormglass,
    /// NOAA CO-OPS tide predictions.
    #[cfg_attr(feature = "serde", serde(rename = "NOAA"))]
    Noaa,
}

impl DataSource {
    /// Human-readable source name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simulated => "Simulated",
            Self::OpenWeatherMap => "OpenWeatherMap",
            Self::Stormglass => "Stormglass",
            Self::Noaa => "NOAA",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Environmental readings for a location at a point in time.
///
/// Units are imperial throughout: degrees Fahrenheit, feet, miles per hour,
/// knots, inches and inches of mercury.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Conditions {
    /// Air temperature in °F.
    pub temperature: f64,
    /// Water temperature in °F.
    pub water_temperature: f64,
    /// Significant wave height in feet.
    pub wave_height: f64,
    /// Wind speed in mph.
    pub wind_speed: f64,
    /// Direction the wind blows from.
    pub wind_direction: CompassPoint,
    /// Direction the swell arrives from.
    pub swell_direction: CompassPoint,
    /// Underwater visibility in feet.
    pub visibility: f64,
    /// Tide relative to mean level in feet.
    #[cfg_attr(feature = "serde", serde(rename = "tideValue"))]
    pub tide: f64,
    /// Current strength in knots.
    #[cfg_attr(feature = "serde", serde(rename = "currentValue"))]
    pub current: f64,
    /// UV index, nominally `0..=11`.
    pub uv_index: u8,
    /// Cloud cover percentage, nominally `0..=100`.
    #[cfg_attr(feature = "serde", serde(rename = "cloudValue"))]
    pub cloud_cover: u8,
    /// Whether meaningful precipitation is falling.
    pub has_precipitation: bool,
    /// Precipitation amount in inches. Informational only.
    pub precipitation: f64,
    /// Barometric pressure in inHg.
    #[cfg_attr(feature = "serde", serde(rename = "pressureValue"))]
    pub pressure: f64,
    /// Free-form location label.
    pub location: String,
    /// Services that contributed readings.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sources: Vec<DataSource>,
}

impl Conditions {
    /// Classify the tide reading.
    pub fn tide_stage(&self) -> TideStage {
        TideStage::from_feet(self.tide)
    }

    /// Render the tide as `"High (+1.2ft)"` or `"Low (-1.4ft)"`.
    pub fn tide_label(&self) -> String {
        let sign = if self.tide > 0.0 { "+" } else { "" };
        format!("{} ({sign}{:.1}ft)", self.tide_stage(), self.tide)
    }

    /// Join contributing sources as `"OpenWeatherMap + NOAA"`.
    pub fn source_label(&self) -> String {
        self.sources
            .iter()
            .map(|source| source.as_str())
            .collect::<Vec<_>>()
            .join(" + ")
    }
}
