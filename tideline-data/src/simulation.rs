//! Seeded pseudo-random conditions.
//!
//! The generator draws every reading from a fixed range so the output looks
//! like a plausible day at the coast. Each request reseeds a `ChaCha8Rng`
//! from the provider seed mixed with a fingerprint of the location, so the
//! same seed and location always produce the same record while different
//! locations diverge.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tideline_core::{
    CompassPoint, Conditions, ConditionsError, ConditionsProvider, DataSource, require_location,
};

use crate::units::{RAIN_THRESHOLD_INCHES, round_to};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a hash of the location label.
fn fingerprint(location: &str) -> u64 {
    location.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// [`ConditionsProvider`] that simulates readings.
///
/// # Examples
/// ```
/// use tideline_core::ConditionsProvider;
/// use tideline_data::SimulatedConditionsProvider;
///
/// let provider = SimulatedConditionsProvider::new(7);
/// let first = provider.conditions("Pacifica")?;
/// let second = provider.conditions("Pacifica")?;
/// assert_eq!(first, second);
/// assert!((1.0..=6.0).contains(&first.wave_height));
/// # Ok::<(), tideline_core::ConditionsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedConditionsProvider {
    seed: u64,
}

impl SimulatedConditionsProvider {
    /// Create a provider with a fixed seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create a provider seeded from the thread-local generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this provider mixes with each location.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Simulate a record for an already validated location label.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "water temperature is offset from the air temperature"
    )]
    pub fn generate(&self, location: &str) -> Conditions {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed ^ fingerprint(location));

        let air = rng.gen_range(65.0..80.0);
        let water = air - 5.0 + rng.gen_range(0.0..10.0);
        let wave_height = round_to(rng.gen_range(1.0..6.0), 1);
        let wind_speed = rng.gen_range(5.0_f64..25.0).round();
        let visibility = rng.gen_range(20.0_f64..80.0).round();
        let wind_direction = random_point(&mut rng);
        let swell_direction = random_point(&mut rng);
        let tide = round_to(rng.gen_range(-2.0..2.0), 1);
        let current = round_to(rng.gen_range(0.5..3.5), 1);
        let uv_index = rng.gen_range(0..=11);
        let cloud_cover = rng.gen_range(0..=100);
        let precipitation = round_to(rng.gen_range(0.0..0.5), 2);
        let pressure = round_to(rng.gen_range(29.5..30.5), 2);

        Conditions {
            temperature: f64::round(air),
            water_temperature: f64::round(water),
            wave_height,
            wind_speed,
            wind_direction,
            swell_direction,
            visibility,
            tide,
            current,
            uv_index,
            cloud_cover,
            has_precipitation: precipitation > RAIN_THRESHOLD_INCHES,
            precipitation,
            pressure,
            location: location.to_owned(),
            sources: vec![DataSource::Simulated],
        }
    }
}

fn random_point(rng: &mut ChaCha8Rng) -> CompassPoint {
    CompassPoint::ALL
        .choose(rng)
        .copied()
        .unwrap_or(CompassPoint::N)
}

impl ConditionsProvider for SimulatedConditionsProvider {
    fn conditions(&self, location: &str) -> Result<Conditions, ConditionsError> {
        let location = require_location(location)?;
        log::debug!("simulating conditions for '{location}' (seed {})", self.seed);
        Ok(self.generate(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn same_seed_and_location_repeat() {
        let provider = SimulatedConditionsProvider::new(99);
        assert_eq!(provider.generate("Bondi"), provider.generate("Bondi"));
    }

    #[rstest]
    fn locations_diverge_under_one_seed() {
        let provider = SimulatedConditionsProvider::new(99);
        let bondi = provider.generate("Bondi");
        let manly = provider.generate("Manly");
        assert_ne!(
            (bondi.temperature, bondi.wave_height, bondi.pressure, bondi.uv_index),
            (manly.temperature, manly.wave_height, manly.pressure, manly.uv_index)
        );
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(42)]
    #[case(u64::MAX)]
    fn readings_stay_in_range(#[case] seed: u64) {
        let c = SimulatedConditionsProvider::new(seed).generate("Anywhere");
        assert!((65.0..=80.0).contains(&c.temperature));
        assert!((60.0..=90.0).contains(&c.water_temperature));
        assert!((1.0..=6.0).contains(&c.wave_height));
        assert!((5.0..=25.0).contains(&c.wind_speed));
        assert!((20.0..=80.0).contains(&c.visibility));
        assert!((-2.0..=2.0).contains(&c.tide));
        assert!((0.5..=3.5).contains(&c.current));
        assert!(c.uv_index <= 11);
        assert!(c.cloud_cover <= 100);
        assert!((0.0..=0.5).contains(&c.precipitation));
        assert_eq!(c.has_precipitation, c.precipitation > 0.1);
        assert!((29.5..=30.5).contains(&c.pressure));
        assert_eq!(c.sources, vec![DataSource::Simulated]);
    }

    #[rstest]
    fn provider_trims_and_labels_location() {
        let c = SimulatedConditionsProvider::new(3)
            .conditions("  Ocean Beach ")
            .expect("simulation succeeds");
        assert_eq!(c.location, "Ocean Beach");
    }

    #[rstest]
    fn blank_location_is_rejected() {
        let err = SimulatedConditionsProvider::new(3)
            .conditions("\t")
            .expect_err("blank location");
        assert_eq!(err, ConditionsError::EmptyLocation);
    }

    #[rstest]
    fn fingerprint_matches_fnv1a_reference() {
        assert_eq!(fingerprint(""), FNV_OFFSET_BASIS);
        assert_eq!(fingerprint("a"), 0xaf63_dc4c_8601_ec8c);
    }
}
