//! Presentation warnings derived from a conditions snapshot.
//!
//! Advisories never influence scores; they flag readings a caller should
//! surface next to the ranking.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::Conditions;

/// UV index from which sun protection is strongly advised.
pub const VERY_HIGH_UV: u8 = 8;
/// UV index from which sun protection is advised.
pub const HIGH_UV: u8 = 6;
/// Current strength in knots considered hazardous.
pub const STRONG_CURRENT_KNOTS: f64 = 3.0;

/// A single warning about the current conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Advisory {
    /// UV index of 8 or more.
    VeryHighUv,
    /// UV index of 6 or 7.
    HighUv,
    /// Current of 3 knots or more.
    StrongCurrent,
    /// Rain is falling.
    Precipitation,
}

impl Advisory {
    /// Collect the advisories that apply to `conditions`.
    ///
    /// # Examples
    /// ```
    /// use tideline_core::Advisory;
    /// # use tideline_core::{CompassPoint, Conditions};
    /// # let conditions = Conditions {
    /// #     temperature: 72.0, water_temperature: 70.0, wave_height: 2.0,
    /// #     wind_speed: 8.0, wind_direction: CompassPoint::W,
    /// #     swell_direction: CompassPoint::W, visibility: 40.0, tide: 0.0,
    /// #     current: 3.2, uv_index: 9, cloud_cover: 10,
    /// #     has_precipitation: false, precipitation: 0.0, pressure: 30.0,
    /// #     location: "Here".into(), sources: Vec::new(),
    /// # };
    /// let advisories = Advisory::collect(&conditions);
    /// assert_eq!(advisories, vec![Advisory::VeryHighUv, Advisory::StrongCurrent]);
    /// ```
    pub fn collect(conditions: &Conditions) -> Vec<Self> {
        let mut advisories = Vec::new();
        if conditions.uv_index >= VERY_HIGH_UV {
            advisories.push(Self::VeryHighUv);
        } else if conditions.uv_index >= HIGH_UV {
            advisories.push(Self::HighUv);
        }
        if conditions.current >= STRONG_CURRENT_KNOTS {
            advisories.push(Self::StrongCurrent);
        }
        if conditions.has_precipitation {
            advisories.push(Self::Precipitation);
        }
        advisories
    }

    /// Short human-readable message.
    pub const fn message(self) -> &'static str {
        match self {
            Self::VeryHighUv => "very high UV: cover up and limit midday exposure",
            Self::HighUv => "high UV: wear sun protection",
            Self::StrongCurrent => "strong current: stay close to shore",
            Self::Precipitation => "rain expected",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.message())
    }
}
