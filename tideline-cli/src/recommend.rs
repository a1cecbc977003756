//! Recommend command implementation for the Tideline CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::File};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tideline_core::Conditions;

use crate::output::Recommendation;
use crate::provider::{
    ConditionsProviderBuilder, DefaultConditionsProviderBuilder, ProviderSettings,
};
use crate::{
    ARG_CONDITIONS, ARG_FORMAT, ARG_LIVE, ARG_LOCATION, ARG_NOAA_STATION,
    ARG_OPENWEATHER_API_KEY, ARG_SEED, ARG_STORMGLASS_API_KEY, ARG_TOP, CliError,
    DEFAULT_LOCATION, OutputFormat,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Score every ocean activity for a location and recommend \
                 the best one. Conditions come from a JSON file, a seeded \
                 simulation, or live weather services with the simulation \
                 as fallback.",
    about = "Recommend ocean activities for a location"
)]
#[ortho_config(prefix = "TIDELINE")]
pub(crate) struct RecommendArgs {
    /// Location to evaluate (defaults to "San Diego, CA").
    #[arg(value_name = "location")]
    #[serde(default)]
    pub(crate) location: Option<String>,
    /// Score the conditions recorded in this JSON file instead of fetching.
    #[arg(long = ARG_CONDITIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) conditions: Option<Utf8PathBuf>,
    /// Seed for simulated conditions; random when absent.
    #[arg(long = ARG_SEED, value_name = "u64")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Query live weather services before falling back to simulation.
    #[arg(
        long = ARG_LIVE,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "bool"
    )]
    #[serde(default)]
    pub(crate) live: Option<bool>,
    /// OpenWeatherMap API key for live weather readings.
    #[arg(long = ARG_OPENWEATHER_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) openweather_api_key: Option<String>,
    /// Stormglass API key for live marine readings.
    #[arg(long = ARG_STORMGLASS_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) stormglass_api_key: Option<String>,
    /// NOAA CO-OPS station queried for tide predictions.
    #[arg(long = ARG_NOAA_STATION, value_name = "id")]
    #[serde(default)]
    pub(crate) noaa_station: Option<String>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Only list the highest `n` activities.
    #[arg(long = ARG_TOP, value_name = "n")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Trimmed location label.
    pub(crate) location: String,
    /// Conditions file scored in place of a provider.
    pub(crate) conditions: Option<Utf8PathBuf>,
    /// Provider used when no conditions file is given.
    pub(crate) provider: ProviderSettings,
    pub(crate) format: OutputFormat,
    pub(crate) top: Option<usize>,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let location = match args.location {
            Some(location) if location.trim().is_empty() => {
                return Err(CliError::InvalidArgument {
                    field: ARG_LOCATION,
                    reason: "must not be blank",
                });
            }
            Some(location) => location.trim().to_owned(),
            None => DEFAULT_LOCATION.to_owned(),
        };
        if args.top == Some(0) {
            return Err(CliError::InvalidArgument {
                field: ARG_TOP,
                reason: "must be at least 1",
            });
        }
        let live = args.live.unwrap_or(false);
        if live && args.conditions.is_some() {
            return Err(CliError::ConflictingArguments {
                first: ARG_CONDITIONS,
                second: ARG_LIVE,
            });
        }

        Ok(Self {
            location,
            conditions: args.conditions,
            provider: ProviderSettings::new(
                args.seed,
                live,
                args.openweather_api_key,
                args.stormglass_api_key,
                args.noaa_station,
            ),
            format: args.format.unwrap_or_default(),
            top: args.top,
        })
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultConditionsProviderBuilder;
    run_recommend_with(args, &builder, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn ConditionsProviderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let conditions = resolve_conditions(&config, builder)?;
    let report = Recommendation::new(conditions, config.top);
    report.write(writer, config.format)
}

fn resolve_conditions(
    config: &RecommendConfig,
    builder: &dyn ConditionsProviderBuilder,
) -> Result<Conditions, CliError> {
    if let Some(path) = &config.conditions {
        return load_conditions(path);
    }
    let provider = builder.build(&config.provider)?;
    provider
        .conditions(&config.location)
        .map_err(|source| CliError::Conditions {
            location: config.location.clone(),
            source,
        })
}

/// Loads a JSON-encoded [`Conditions`] record from disk.
pub(super) fn load_conditions(path: &Utf8Path) -> Result<Conditions, CliError> {
    let file = File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::OpenConditions {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseConditions {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
