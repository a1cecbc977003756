//! Unit conversions and rounding shared by the providers.

/// Hectopascals to inches of mercury.
pub(crate) const HPA_TO_INHG: f64 = 0.029_53;
/// Millimetres to inches.
pub(crate) const MM_TO_INCHES: f64 = 0.039_37;
/// Metres to feet.
pub(crate) const METRES_TO_FEET: f64 = 3.281;
/// Metres per second to knots.
pub(crate) const MPS_TO_KNOTS: f64 = 1.944;

/// Precipitation above this many inches counts as rain.
pub(crate) const RAIN_THRESHOLD_INCHES: f64 = 0.1;

/// Round `value` to `places` decimal places, half away from zero.
#[expect(
    clippy::float_arithmetic,
    reason = "decimal rounding scales by a power of ten"
)]
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

#[expect(clippy::float_arithmetic, reason = "unit conversion")]
pub(crate) fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Saturating conversion of a percentage-like reading to `u8`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to 0..=255 before the cast"
)]
pub(crate) fn to_u8(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, f64::from(u8::MAX)) as u8
}
