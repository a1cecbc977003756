//! The fixed catalogue of ocean activities.
//!
//! The enum offers compile-time safety for activity lookups; there is no
//! runtime registration.
//!
//! # Examples
//! ```
//! use tideline_core::Activity;
//!
//! assert_eq!(Activity::Diving.key(), "diving");
//! assert_eq!(Activity::Diving.name(), "Scuba Diving");
//! assert_eq!("kayaking".parse::<Activity>(), Ok(Activity::Kayaking));
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A recognised ocean pastime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Activity {
    /// Board surfing.
    Surfing,
    /// Scuba diving.
    Diving,
    /// Surface snorkeling.
    Snorkeling,
    /// Open-water swimming.
    Swimming,
    /// Sea kayaking.
    Kayaking,
    /// Dinghy or yacht sailing.
    Sailing,
    /// Shore or boat fishing.
    Fishing,
    /// Stand-up paddleboarding.
    Paddleboarding,
}

impl Activity {
    /// Every activity in declaration order. Ranking ties keep this order.
    pub const ALL: [Self; 8] = [
        Self::Surfing,
        Self::Diving,
        Self::Snorkeling,
        Self::Swimming,
        Self::Kayaking,
        Self::Sailing,
        Self::Fishing,
        Self::Paddleboarding,
    ];

    /// Stable lowercase identifier.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Surfing => "surfing",
            Self::Diving => "diving",
            Self::Snorkeling => "snorkeling",
            Self::Swimming => "swimming",
            Self::Kayaking => "kayaking",
            Self::Sailing => "sailing",
            Self::Fishing => "fishing",
            Self::Paddleboarding => "paddleboarding",
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surfing => "Surfing",
            Self::Diving => "Scuba Diving",
            Self::Snorkeling => "Snorkeling",
            Self::Swimming => "Swimming",
            Self::Kayaking => "Kayaking",
            Self::Sailing => "Sailing",
            Self::Fishing => "Fishing",
            Self::Paddleboarding => "Paddleboarding",
        }
    }

    /// Icon glyph.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Surfing => "🏄",
            Self::Diving => "🤿",
            Self::Snorkeling => "🥽",
            Self::Swimming => "🏊",
            Self::Kayaking => "🛶",
            Self::Sailing => "⛵",
            Self::Fishing => "🎣",
            Self::Paddleboarding => "🏄\u{200d}♂\u{fe0f}",
        }
    }

    /// One-line pitch shown alongside the score.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Surfing => "Perfect waves and wind conditions for catching some great rides!",
            Self::Diving => "Excellent visibility and calm conditions for underwater exploration.",
            Self::Snorkeling => "Clear waters and calm conditions make for perfect snorkeling.",
            Self::Swimming => "Perfect conditions for a refreshing swim in the ocean.",
            Self::Kayaking => "Great conditions for paddling along the coast.",
            Self::Sailing => "Ideal wind conditions for a day out on the water.",
            Self::Fishing => "Calm conditions perfect for a relaxing day of fishing.",
            Self::Paddleboarding => "Calm waters perfect for stand-up paddleboarding.",
        }
    }

    /// Bundle the descriptive fields.
    pub const fn definition(self) -> ActivityDefinition {
        ActivityDefinition {
            activity: self,
            key: self.key(),
            name: self.name(),
            icon: self.icon(),
            description: self.description(),
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

impl FromStr for Activity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|activity| activity.key() == wanted)
            .ok_or_else(|| format!("unknown activity '{s}'"))
    }
}

/// Descriptive metadata for an [`Activity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ActivityDefinition {
    /// The activity itself.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub activity: Activity,
    /// Stable identifier.
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Icon glyph.
    pub icon: &'static str,
    /// Short description.
    pub description: &'static str,
}

/// Label derived from a score for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Suitability {
    /// Score of 70 or more.
    Recommended,
    /// Score of 50 to 69.
    Suitable,
    /// Score below 50.
    DoNotGo,
}

impl Suitability {
    /// Minimum score labelled [`Suitability::Recommended`].
    pub const RECOMMENDED_FROM: u8 = 70;
    /// Minimum score labelled [`Suitability::Suitable`].
    pub const SUITABLE_FROM: u8 = 50;

    /// Classify a score.
    ///
    /// # Examples
    /// ```
    /// use tideline_core::Suitability;
    ///
    /// assert_eq!(Suitability::from_score(70), Suitability::Recommended);
    /// assert_eq!(Suitability::from_score(49), Suitability::DoNotGo);
    /// ```
    pub const fn from_score(score: u8) -> Self {
        if score >= Self::RECOMMENDED_FROM {
            Self::Recommended
        } else if score >= Self::SUITABLE_FROM {
            Self::Suitable
        } else {
            Self::DoNotGo
        }
    }

    /// Return the label text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recommended => "Recommended",
            Self::Suitable => "Suitable",
            Self::DoNotGo => "Do not go",
        }
    }
}

impl fmt::Display for Suitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// An activity paired with the score it earned for a set of conditions.
///
/// Built fresh on every evaluation and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScoredActivity {
    /// Activity metadata.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub definition: ActivityDefinition,
    /// Suitability score in `0..=100`.
    pub score: u8,
}

impl ScoredActivity {
    /// Attach a score to an activity.
    pub const fn new(activity: Activity, score: u8) -> Self {
        Self {
            definition: activity.definition(),
            score,
        }
    }

    /// The scored activity.
    pub const fn activity(&self) -> Activity {
        self.definition.activity
    }

    /// Presentation label for the score.
    pub const fn suitability(&self) -> Suitability {
        Suitability::from_score(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_matches_key() {
        assert_eq!(Activity::Paddleboarding.to_string(), "paddleboarding");
    }

    #[rstest]
    fn parsing_is_case_insensitive() {
        assert_eq!(Activity::from_str(" Surfing "), Ok(Activity::Surfing));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = Activity::from_str("freediving").unwrap_err();
        assert!(err.contains("unknown activity"));
    }

    #[rstest]
    fn keys_are_unique() {
        let mut keys: Vec<_> = Activity::ALL.iter().map(|a| a.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Activity::ALL.len());
    }

    #[rstest]
    #[case(100, Suitability::Recommended)]
    #[case(70, Suitability::Recommended)]
    #[case(69, Suitability::Suitable)]
    #[case(50, Suitability::Suitable)]
    #[case(49, Suitability::DoNotGo)]
    #[case(0, Suitability::DoNotGo)]
    fn suitability_thresholds(#[case] score: u8, #[case] expected: Suitability) {
        assert_eq!(Suitability::from_score(score), expected);
    }

    #[rstest]
    #[case(Suitability::Recommended, "[Recommended]")]
    #[case(Suitability::Suitable, "[Suitable   ]")]
    #[case(Suitability::DoNotGo, "[Do not go  ]")]
    fn suitability_pads_to_width(#[case] suitability: Suitability, #[case] expected: &str) {
        assert_eq!(format!("[{suitability:<11}]"), expected);
    }

    #[rstest]
    fn activity_pads_to_width() {
        assert_eq!(format!("[{:>8}]", Activity::Diving), "[  diving]");
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn scored_activity_serialises_flat() {
        let scored = ScoredActivity::new(Activity::Sailing, 88);
        let json = serde_json::to_value(scored).expect("serialise scored activity");
        assert_eq!(json["key"], "sailing");
        assert_eq!(json["name"], "Sailing");
        assert_eq!(json["score"], 88);
        assert!(json.get("activity").is_none());
    }
}
