//! NOAA CO-OPS tide prediction response types.
//!
//! See: <https://api.tidesandcurrents.noaa.gov/api/prod/>. Predictions are
//! requested hourly for today in feet above MLLW; the last one is used.

use serde::Deserialize;
use tideline_core::{ConditionsError, DataSource};

use crate::PartialConditions;
use crate::units::round_to;

pub(crate) const DATAGETTER_PATH: &str = "/api/prod/datagetter";

/// Default tide station (San Diego, CA).
pub const DEFAULT_STATION: &str = "9410170";

/// Query parameters for today's hourly predictions at `station`.
pub(crate) fn query(station: &str) -> [(&'static str, &str); 9] {
    [
        ("product", "predictions"),
        ("application", "NOS.COOPS.TAC.WL"),
        ("datum", "MLLW"),
        ("station", station),
        ("time_zone", "lst_ldt"),
        ("units", "english"),
        ("interval", "h"),
        ("format", "json"),
        ("date", "today"),
    ]
}

/// Either a prediction list or an error object.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TideResponse {
    #[serde(default)]
    pub predictions: Vec<Prediction>,
    pub error: Option<ServiceError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Prediction {
    /// Water level in feet, encoded as a string.
    pub v: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ServiceError {
    pub message: String,
}

impl TideResponse {
    /// Map the latest prediction onto the tide reading.
    pub(crate) fn into_partial(self) -> Result<PartialConditions, ConditionsError> {
        if let Some(error) = self.error {
            return Err(ConditionsError::Parse {
                message: format!("NOAA reported: {}", error.message),
            });
        }
        let latest = self
            .predictions
            .last()
            .ok_or_else(|| ConditionsError::Parse {
                message: "NOAA response has no predictions".to_owned(),
            })?;
        let feet: f64 = latest
            .v
            .trim()
            .parse()
            .map_err(|err| ConditionsError::Parse {
                message: format!("invalid tide level '{}': {err}", latest.v),
            })?;
        Ok(PartialConditions {
            tide: Some(round_to(feet, 1)),
            sources: vec![DataSource::Noaa],
            ..PartialConditions::default()
        })
    }
}
