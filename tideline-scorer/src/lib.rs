//! Heuristic activity scoring for Tideline.
//!
//! Each [`Activity`] has a fixed rule that starts from a baseline of 50 and
//! adds or subtracts fixed weights when a reading falls in a favourable or
//! unfavourable band. The tally is clamped to `0..=100`; the clamp is the only
//! non-linear step. Checks are independent apart from the wind-direction
//! bonuses for surfing and kayaking, which only apply inside their wind-speed
//! band.
//!
//! [`HeuristicScorer`] implements [`ActivityScorer`] so callers can swap in a
//! different model behind the trait.
//!
//! # Examples
//!
//! ```
//! use tideline_core::{Activity, CompassPoint, Conditions};
//! use tideline_scorer::{evaluate, rank};
//!
//! let conditions = Conditions {
//!     temperature: 70.0,
//!     water_temperature: 60.0,
//!     wave_height: 4.0,
//!     wind_speed: 15.0,
//!     wind_direction: CompassPoint::W,
//!     swell_direction: CompassPoint::W,
//!     visibility: 20.0,
//!     tide: 0.5,
//!     current: 2.0,
//!     uv_index: 3,
//!     cloud_cover: 50,
//!     has_precipitation: false,
//!     precipitation: 0.0,
//!     pressure: 29.9,
//!     location: "Ocean Beach".into(),
//!     sources: Vec::new(),
//! };
//!
//! assert_eq!(evaluate(Activity::Surfing, &conditions), 98);
//! let ranked = rank(&conditions);
//! assert_eq!(ranked[0].activity(), Activity::Sailing);
//! assert_eq!(ranked[0].score, 100);
//! assert_eq!(ranked[1].activity(), Activity::Surfing);
//! ```

#![forbid(unsafe_code)]

mod heuristics;

use tideline_core::{Activity, ActivityScorer, Conditions, ScoredActivity};

/// The fixed heuristic model.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicScorer;

impl HeuristicScorer {
    /// Construct the scorer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Unclamped tally for `activity`.
    #[must_use]
    pub fn raw_score(activity: Activity, conditions: &Conditions) -> i32 {
        match activity {
            Activity::Surfing => heuristics::surfing(conditions),
            Activity::Diving => heuristics::diving(conditions),
            Activity::Snorkeling => heuristics::snorkeling(conditions),
            Activity::Swimming => heuristics::swimming(conditions),
            Activity::Kayaking => heuristics::kayaking(conditions),
            Activity::Sailing => heuristics::sailing(conditions),
            Activity::Fishing => heuristics::fishing(conditions),
            Activity::Paddleboarding => heuristics::paddleboarding(conditions),
        }
    }
}

impl ActivityScorer for HeuristicScorer {
    fn score(&self, activity: Activity, conditions: &Conditions) -> u8 {
        let raw = Self::raw_score(activity, conditions);
        let score = Self::sanitise(raw);
        log::trace!("{activity} scored {score} (raw {raw}) at {}", conditions.location);
        score
    }
}

/// Score one activity under `conditions`, clamped to `0..=100`.
#[must_use]
pub fn evaluate(activity: Activity, conditions: &Conditions) -> u8 {
    HeuristicScorer.score(activity, conditions)
}

/// Score every activity and sort descending; ties keep declaration order.
#[must_use]
pub fn rank(conditions: &Conditions) -> Vec<ScoredActivity> {
    let ranked = HeuristicScorer.rank(conditions);
    if let Some(top) = ranked.first() {
        log::debug!(
            "best activity at {} is {} ({})",
            conditions.location,
            top.activity(),
            top.score
        );
    }
    ranked
}

/// The highest-ranked activity under `conditions`.
#[must_use]
pub fn best(conditions: &Conditions) -> Option<ScoredActivity> {
    rank(conditions).into_iter().next()
}
