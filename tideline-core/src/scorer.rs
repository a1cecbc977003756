//! Score activities against a conditions snapshot.
//!
//! The `ActivityScorer` trait assigns a suitability score to an
//! [`Activity`](crate::Activity) for a given
//! [`Conditions`](crate::Conditions) record and ranks the whole catalogue.

use crate::{Activity, Conditions, ScoredActivity};

/// Upper bound of every score.
pub const MAX_SCORE: u8 = 100;

/// Calculate suitability scores for ocean activities.
///
/// Higher scores indicate better conditions for the activity. Implementations
/// must be thread-safe (`Send` + `Sync`) and pure: the same inputs always
/// produce the same score. Scores lie in `0..=MAX_SCORE`; use
/// [`ActivityScorer::sanitise`] to clamp a raw tally.
///
/// # Examples
///
/// ```rust
/// use tideline_core::{Activity, ActivityScorer, Conditions};
///
/// struct FlatScorer;
///
/// impl ActivityScorer for FlatScorer {
///     fn score(&self, activity: Activity, _conditions: &Conditions) -> u8 {
///         match activity {
///             Activity::Sailing => Self::sanitise(140),
///             _ => Self::sanitise(-5),
///         }
///     }
/// }
///
/// # use tideline_core::CompassPoint;
/// # let conditions = Conditions {
/// #     temperature: 72.0, water_temperature: 70.0, wave_height: 2.0,
/// #     wind_speed: 8.0, wind_direction: CompassPoint::W,
/// #     swell_direction: CompassPoint::W, visibility: 40.0, tide: 0.0,
/// #     current: 1.0, uv_index: 4, cloud_cover: 10,
/// #     has_precipitation: false, precipitation: 0.0, pressure: 30.0,
/// #     location: "Here".into(), sources: Vec::new(),
/// # };
/// let ranked = FlatScorer.rank(&conditions);
/// assert_eq!(ranked[0].activity(), Activity::Sailing);
/// assert_eq!(ranked[0].score, 100);
/// assert_eq!(ranked[1].activity(), Activity::Surfing);
/// ```
pub trait ActivityScorer: Send + Sync {
    /// Return the score for `activity` under `conditions`.
    fn score(&self, activity: Activity, conditions: &Conditions) -> u8;

    /// Score every activity and sort descending.
    ///
    /// The sort is stable, so equal scores keep [`Activity::ALL`] order.
    fn rank(&self, conditions: &Conditions) -> Vec<ScoredActivity> {
        let mut scored: Vec<ScoredActivity> = Activity::ALL
            .into_iter()
            .map(|activity| ScoredActivity::new(activity, self.score(activity, conditions)))
            .collect();
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }

    /// Highest-ranked activity.
    fn best(&self, conditions: &Conditions) -> Option<ScoredActivity> {
        self.rank(conditions).into_iter().next()
    }

    /// Clamp a raw tally into `0..=MAX_SCORE`.
    fn sanitise(raw: i32) -> u8
    where
        Self: Sized,
    {
        let clamped = raw.clamp(0, i32::from(MAX_SCORE));
        u8::try_from(clamped).unwrap_or(MAX_SCORE)
    }
}
