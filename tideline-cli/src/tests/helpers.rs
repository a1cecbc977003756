//! Test helpers for writing CLI fixtures to temporary directories.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use tideline_core::{CompassPoint, Conditions};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents)
        .unwrap_or_else(|err| panic!("write {path}: {err}"));
}

pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Moderate offshore surf: sailing tops out at 100 and surfing scores 98.
pub(super) fn offshore_surf() -> Conditions {
    Conditions {
        temperature: 70.0,
        water_temperature: 60.0,
        wave_height: 4.0,
        wind_speed: 15.0,
        wind_direction: CompassPoint::W,
        swell_direction: CompassPoint::W,
        visibility: 20.0,
        tide: 0.5,
        current: 2.0,
        uv_index: 3,
        cloud_cover: 50,
        has_precipitation: false,
        precipitation: 0.0,
        pressure: 29.9,
        location: "Ocean Beach".to_owned(),
        sources: Vec::new(),
    }
}

pub(super) fn write_conditions(path: &Utf8Path, conditions: &Conditions) {
    let payload = serde_json::to_string_pretty(conditions).expect("serialise conditions");
    write_utf8(path, payload.as_bytes());
}
