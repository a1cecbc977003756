//! Conditions provider selection shared by the recommend and serve commands.

use std::fmt;

use tideline_core::ConditionsProvider;
use tideline_data::{
    FallbackConditionsProvider, LiveConditionsConfig, LiveConditionsProvider,
    SimulatedConditionsProvider,
};

use crate::CliError;

/// Where conditions come from when no file is given.
#[derive(Clone, Default, PartialEq, Eq)]
pub(crate) struct ProviderSettings {
    /// Simulation seed; random when absent.
    pub(crate) seed: Option<u64>,
    /// Whether live services are consulted before the simulation.
    pub(crate) live: bool,
    pub(crate) openweather_api_key: Option<String>,
    pub(crate) stormglass_api_key: Option<String>,
    pub(crate) noaa_station: Option<String>,
}

impl ProviderSettings {
    /// Collect settings, dropping blank keys and station ids.
    pub(crate) fn new(
        seed: Option<u64>,
        live: bool,
        openweather_api_key: Option<String>,
        stormglass_api_key: Option<String>,
        noaa_station: Option<String>,
    ) -> Self {
        Self {
            seed,
            live,
            openweather_api_key: non_blank(openweather_api_key),
            stormglass_api_key: non_blank(stormglass_api_key),
            noaa_station: non_blank(noaa_station),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |key: &Option<String>| key.as_ref().map(|_| "<redacted>");
        f.debug_struct("ProviderSettings")
            .field("seed", &self.seed)
            .field("live", &self.live)
            .field("openweather_api_key", &redact(&self.openweather_api_key))
            .field("stormglass_api_key", &redact(&self.stormglass_api_key))
            .field("noaa_station", &self.noaa_station)
            .finish()
    }
}

/// Builds the conditions provider for a command invocation.
pub(crate) trait ConditionsProviderBuilder {
    fn build(&self, settings: &ProviderSettings) -> Result<Box<dyn ConditionsProvider>, CliError>;
}

/// Simulation alone, or live services with the simulation as fallback.
pub(crate) struct DefaultConditionsProviderBuilder;

impl ConditionsProviderBuilder for DefaultConditionsProviderBuilder {
    fn build(&self, settings: &ProviderSettings) -> Result<Box<dyn ConditionsProvider>, CliError> {
        let simulated = settings.seed.map_or_else(
            SimulatedConditionsProvider::from_entropy,
            SimulatedConditionsProvider::new,
        );
        if !settings.live {
            log::info!("simulating conditions with seed {}", simulated.seed());
            return Ok(Box::new(simulated));
        }

        let mut live = LiveConditionsConfig::new().with_gap_fill_seed(simulated.seed());
        if let Some(key) = &settings.openweather_api_key {
            live = live.with_openweather_api_key(key.clone());
        }
        if let Some(key) = &settings.stormglass_api_key {
            live = live.with_stormglass_api_key(key.clone());
        }
        if let Some(station) = &settings.noaa_station {
            live = live.with_noaa_station(station.clone());
        }
        let provider = LiveConditionsProvider::with_config(live).map_err(CliError::BuildProvider)?;
        Ok(Box::new(FallbackConditionsProvider::new(provider, simulated)))
    }
}
