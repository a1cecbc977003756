//! Report assembly and rendering for the recommend command.

use std::io::Write;

use serde::Serialize;
use tideline_core::{Advisory, Conditions, ScoredActivity, Suitability};

use crate::{CliError, OutputFormat};

/// A ranked activity as presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct RankedActivity {
    pub(crate) key: &'static str,
    pub(crate) name: &'static str,
    pub(crate) icon: &'static str,
    pub(crate) description: &'static str,
    pub(crate) score: u8,
    pub(crate) suitability: Suitability,
}

impl From<ScoredActivity> for RankedActivity {
    fn from(scored: ScoredActivity) -> Self {
        Self {
            key: scored.definition.key,
            name: scored.definition.name,
            icon: scored.definition.icon,
            description: scored.definition.description,
            score: scored.score,
            suitability: scored.suitability(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct AdvisoryNote {
    pub(crate) kind: Advisory,
    pub(crate) message: &'static str,
}

/// Everything the recommend command reports for one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Recommendation {
    pub(crate) conditions: Conditions,
    pub(crate) best: Option<RankedActivity>,
    pub(crate) activities: Vec<RankedActivity>,
    pub(crate) advisories: Vec<AdvisoryNote>,
}

impl Recommendation {
    /// Rank `conditions`, keeping at most `top` rows. `best` is taken before
    /// truncation.
    pub(crate) fn new(conditions: Conditions, top: Option<usize>) -> Self {
        let mut activities: Vec<RankedActivity> = tideline_scorer::rank(&conditions)
            .into_iter()
            .map(RankedActivity::from)
            .collect();
        let best = activities.first().copied();
        if let Some(limit) = top {
            activities.truncate(limit);
        }
        let advisories = Advisory::collect(&conditions)
            .into_iter()
            .map(|kind| AdvisoryNote {
                kind,
                message: kind.message(),
            })
            .collect();
        Self {
            conditions,
            best,
            activities,
            advisories,
        }
    }

    pub(crate) fn write(&self, writer: &mut dyn Write, format: OutputFormat) -> Result<(), CliError> {
        match format {
            OutputFormat::Json => self.write_json(writer),
            OutputFormat::Text => self.write_text(writer).map_err(CliError::WriteOutput),
        }
    }

    fn write_json(&self, writer: &mut dyn Write) -> Result<(), CliError> {
        let payload = serde_json::to_string_pretty(self).map_err(CliError::SerialiseOutput)?;
        writer
            .write_all(payload.as_bytes())
            .map_err(CliError::WriteOutput)?;
        writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
        Ok(())
    }

    fn write_text(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        let c = &self.conditions;
        let sources = c.source_label();
        if sources.is_empty() {
            writeln!(writer, "Conditions at {}", c.location)?;
        } else {
            writeln!(writer, "Conditions at {} ({sources})", c.location)?;
        }
        writeln!(
            writer,
            "  Air {}°F  Water {}°F  Waves {}ft  Swell {}",
            c.temperature, c.water_temperature, c.wave_height, c.swell_direction
        )?;
        writeln!(
            writer,
            "  Wind {}mph {}  Current {}kn  Visibility {}ft  Tide {}",
            c.wind_speed,
            c.wind_direction,
            c.current,
            c.visibility,
            c.tide_label()
        )?;
        writeln!(
            writer,
            "  UV {}  Cloud {}%  Rain {}in  Pressure {}inHg",
            c.uv_index, c.cloud_cover, c.precipitation, c.pressure
        )?;
        writeln!(writer)?;

        if let Some(best) = &self.best {
            writeln!(
                writer,
                "Best: {} {} ({}, {})",
                best.icon, best.name, best.score, best.suitability
            )?;
            writeln!(writer)?;
        }
        for row in &self.activities {
            writeln!(
                writer,
                "{:>3}  {:<11}  {} {}",
                row.score, row.suitability, row.icon, row.name
            )?;
        }

        if !self.advisories.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "Advisories:")?;
            for advisory in &self.advisories {
                writeln!(writer, "  - {}", advisory.message)?;
            }
        }
        Ok(())
    }
}
