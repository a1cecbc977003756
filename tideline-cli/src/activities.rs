//! Activities command: list the scoring catalogue.

use std::io::Write;

use clap::Parser;
use tideline_core::{Activity, ActivityDefinition};

use crate::{ARG_FORMAT, CliError, OutputFormat};

/// CLI arguments for the `activities` subcommand.
#[derive(Debug, Clone, Default, Parser)]
#[command(about = "List the activities Tideline scores")]
pub(crate) struct ActivitiesArgs {
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

pub(super) fn run_activities(args: &ActivitiesArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    write_activities(&mut stdout, args.format)
}

pub(super) fn write_activities(
    writer: &mut dyn Write,
    format: OutputFormat,
) -> Result<(), CliError> {
    let catalogue: Vec<ActivityDefinition> =
        Activity::ALL.into_iter().map(Activity::definition).collect();
    match format {
        OutputFormat::Json => {
            let payload =
                serde_json::to_string_pretty(&catalogue).map_err(CliError::SerialiseOutput)?;
            writeln!(writer, "{payload}").map_err(CliError::WriteOutput)
        }
        OutputFormat::Text => {
            for entry in &catalogue {
                writeln!(
                    writer,
                    "{} {:<15} {:<15} {}",
                    entry.icon, entry.key, entry.name, entry.description
                )
                .map_err(CliError::WriteOutput)?;
            }
            Ok(())
        }
    }
}
