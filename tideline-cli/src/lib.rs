//! Command-line interface for ranking ocean activities.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod activities;
mod error;
mod output;
mod provider;
mod recommend;
mod serve;

pub use error::CliError;

use activities::ActivitiesArgs;
use recommend::RecommendArgs;
use serve::ServeArgs;

pub(crate) const ARG_LOCATION: &str = "location";
pub(crate) const ARG_CONDITIONS: &str = "conditions";
pub(crate) const ARG_SEED: &str = "seed";
pub(crate) const ARG_LIVE: &str = "live";
pub(crate) const ARG_OPENWEATHER_API_KEY: &str = "openweather-api-key";
pub(crate) const ARG_STORMGLASS_API_KEY: &str = "stormglass-api-key";
pub(crate) const ARG_NOAA_STATION: &str = "noaa-station";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ARG_TOP: &str = "top";
pub(crate) const ARG_BIND: &str = "bind";

/// Location evaluated when none is given.
pub(crate) const DEFAULT_LOCATION: &str = "San Diego, CA";

/// Address the HTTP API listens on when none is given.
pub(crate) const DEFAULT_BIND: &str = "0.0.0.0:5000";

/// Run the Tideline CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => recommend::run_recommend(args),
        Command::Activities(args) => activities::run_activities(&args),
        Command::Serve(args) => serve::run_serve(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tideline",
    about = "Rank ocean activities for current sea and weather conditions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score every activity for a location and recommend the best.
    Recommend(RecommendArgs),
    /// List the activities Tideline knows how to score.
    Activities(ActivitiesArgs),
    /// Serve recommendations as a JSON HTTP API.
    Serve(ServeArgs),
}

/// Output rendering for command reports.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    clap::ValueEnum,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Aligned plain text for terminals.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[cfg(test)]
mod tests;
