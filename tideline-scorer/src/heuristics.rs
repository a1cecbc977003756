//! Per-activity scoring rules.
//!
//! Every rule starts from [`BASELINE`] and applies independent additive
//! checks. Ranges are inclusive at both ends. Callers clamp the raw tally.

use tideline_core::{CompassPoint, Conditions};

/// Starting tally for every activity.
pub(crate) const BASELINE: i32 = 50;

/// Inclusive range check. `NaN` never matches.
fn within(value: f64, low: f64, high: f64) -> bool {
    (low..=high).contains(&value)
}

fn is_one_of(point: CompassPoint, points: &[CompassPoint]) -> bool {
    points.contains(&point)
}

const WESTERLY: [CompassPoint; 3] = [CompassPoint::W, CompassPoint::NW, CompassPoint::SW];
const EASTERLY: [CompassPoint; 3] = [CompassPoint::E, CompassPoint::NE, CompassPoint::SE];

pub(crate) fn surfing(c: &Conditions) -> i32 {
    let mut score = BASELINE;
    if within(c.wave_height, 3.0, 6.0) {
        score += 20;
    } else if within(c.wave_height, 2.0, 8.0) {
        score += 10;
    }
    if within(c.wind_speed, 10.0, 20.0) {
        score += 10;
        // Offshore wind grooms the face.
        if is_one_of(c.wind_direction, &WESTERLY) {
            score += 5;
        }
    } else if within(c.wind_speed, 5.0, 25.0) {
        score += 5;
    }
    if is_one_of(c.swell_direction, &WESTERLY) {
        score += 5;
    }
    if c.tide.abs() <= 1.0 {
        score += 5;
    }
    if within(c.temperature, 65.0, 85.0) {
        score += 3;
    }
    if c.has_precipitation {
        score -= 10;
    }
    if c.uv_index >= 6 {
        score -= 2;
    }
    score
}

pub(crate) fn diving(c: &Conditions) -> i32 {
    let mut score = BASELINE;
    if c.visibility >= 50.0 {
        score += 20;
    } else if c.visibility >= 30.0 {
        score += 10;
    }
    if c.wave_height <= 2.0 {
        score += 15;
    } else if c.wave_height <= 3.0 {
        score += 5;
    }
    if c.wind_speed <= 10.0 {
        score += 10;
    }
    if c.current <= 1.5 {
        score += 10;
    } else if c.current <= 2.5 {
        score += 5;
    }
    if within(c.water_temperature, 70.0, 80.0) {
        score += 5;
    }
    if c.has_precipitation {
        score -= 15;
    }
    if c.cloud_cover <= 30 {
        score += 5;
    }
    if c.pressure >= 30.0 {
        score += 5;
    }
    score
}

pub(crate) fn snorkeling(c: &Conditions) -> i32 {
    let mut score = BASELINE;
    if c.visibility >= 40.0 {
        score += 20;
    } else if c.visibility >= 25.0 {
        score += 10;
    }
    if c.wave_height <= 1.5 {
        score += 20;
    } else if c.wave_height <= 2.5 {
        score += 10;
    }
    if c.wind_speed <= 8.0 {
        score += 10;
    }
    if c.water_temperature >= 70.0 {
        score += 10;
    }
    if c.current <= 1.5 {
        score += 5;
    }
    if c.has_precipitation {
        score -= 20;
    }
    if c.cloud_cover <= 20 {
        score += 5;
    }
    if c.uv_index >= 6 {
        score -= 3;
    }
    score
}

pub(crate) fn swimming(c: &Conditions) -> i32 {
    let mut score = BASELINE;
    if c.wave_height <= 1.5 {
        score += 20;
    } else if c.wave_height <= 2.5 {
        score += 10;
    }
    if c.wind_speed <= 10.0 {
        score += 15;
    }
    if within(c.water_temperature, 70.0, 80.0) {
        score += 10;
    }
    if c.current <= 1.5 {
        score += 10;
    }
    if c.has_precipitation {
        score -= 15;
    }
    if within(c.temperature, 70.0, 85.0) {
        score += 5;
    }
    if c.uv_index >= 8 {
        score -= 3;
    }
    score
}

pub(crate) fn kayaking(c: &Conditions) -> i32 {
    let mut score = BASELINE;
    if c.wave_height <= 3.0 {
        score += 15;
    } else if c.wave_height <= 4.0 {
        score += 8;
    }
    if c.wind_speed <= 15.0 {
        score += 15;
        // Anything but an onshore headwind.
        if !is_one_of(c.wind_direction, &EASTERLY) {
            score += 5;
        }
    } else if c.wind_speed <= 20.0 {
        score += 8;
    }
    if c.current <= 2.5 {
        score += 10;
    }
    if c.temperature >= 60.0 {
        score += 8;
    }
    if c.water_temperature >= 65.0 {
        score += 5;
    }
    if c.has_precipitation {
        score -= 10;
    }
    if c.uv_index >= 8 {
        score -= 3;
    }
    score
}

pub(crate) fn sailing(c: &Conditions) -> i32 {
    let mut score = BASELINE;
    if within(c.wind_speed, 10.0, 25.0) {
        score += 25;
    } else if within(c.wind_speed, 5.0, 30.0) {
        score += 12;
    }
    if c.wind_speed >= 8.0 {
        score += 5;
    }
    if c.wave_height <= 4.0 {
        score += 15;
    }
    if c.current <= 2.5 {
        score += 5;
    }
    if c.temperature >= 65.0 {
        score += 8;
    }
    if c.has_precipitation {
        score -= 12;
    }
    if c.pressure >= 30.0 {
        score += 5;
    }
    score
}

pub(crate) fn fishing(c: &Conditions) -> i32 {
    let mut score = BASELINE;
    if c.wave_height <= 2.5 {
        score += 20;
    } else if c.wave_height <= 3.5 {
        score += 10;
    }
    if c.wind_speed <= 15.0 {
        score += 15;
    }
    if c.current <= 2.0 {
        score += 10;
    }
    if c.temperature >= 60.0 {
        score += 8;
    }
    if c.pressure >= 30.0 {
        score += 10;
    } else if c.pressure >= 29.8 {
        score += 5;
    }
    if c.has_precipitation {
        score -= 5;
    }
    if c.tide.abs() <= 1.5 {
        score += 5;
    }
    if (30..=70).contains(&c.cloud_cover) {
        score += 5;
    }
    score
}

pub(crate) fn paddleboarding(c: &Conditions) -> i32 {
    let mut score = BASELINE;
    if c.wave_height <= 1.5 {
        score += 25;
    } else if c.wave_height <= 2.5 {
        score += 12;
    }
    if c.wind_speed <= 10.0 {
        score += 20;
    } else if c.wind_speed <= 15.0 {
        score += 8;
    }
    if c.current <= 1.5 {
        score += 15;
    } else if c.current <= 2.0 {
        score += 8;
    }
    if c.temperature >= 65.0 {
        score += 8;
    }
    if c.water_temperature >= 68.0 {
        score += 5;
    }
    if c.has_precipitation {
        score -= 15;
    }
    if c.uv_index >= 8 {
        score -= 3;
    }
    if c.tide.abs() <= 1.0 {
        score += 5;
    }
    score
}
