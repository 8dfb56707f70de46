mod csv_sink;
mod json_sink;
mod rows;
mod sink;

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

use crate::analysis::PolarizedMatchup;
use crate::config::ExportSettings;
use crate::errors::export_context;
use crate::stats::{TaggedStats, TournamentStats};

pub use csv_sink::CsvSink;
pub use json_sink::JsonSink;
pub use rows::{
    HeroStatRow, MatchResultRow, MatchupRow, PlayerDetailRow, PlayerStatRow, PolarizedRow,
    TableRow, TaggedRow,
};
pub use sink::{
    HERO_MATCHUPS_TABLE, HERO_STATS_TABLE, MATCH_RESULTS_TABLE, PLAYER_DETAILS_TABLE,
    PLAYER_STATS_TABLE, TableSink, write_all, write_all_tagged,
};

pub const POLARIZED_MATCHUPS_TABLE: &str = "polarized_matchups";

/// Write the tables of one aggregate as CSV, plus JSON when enabled
pub fn export_stats(stats: &TournamentStats, settings: &ExportSettings) -> Result<Vec<PathBuf>> {
    prepare_output_dir(settings)?;

    let mut written = write_all(&CsvSink::new(&settings.output_dir), stats)?;
    if settings.write_json {
        written.extend(write_all(&JsonSink::new(&settings.output_dir), stats)?);
    }

    log_written(&written);
    Ok(written)
}

/// Write the tables of a tagged combination as CSV, plus JSON when enabled
pub fn export_tagged(tagged: &TaggedStats, settings: &ExportSettings) -> Result<Vec<PathBuf>> {
    prepare_output_dir(settings)?;

    let mut written = write_all_tagged(&CsvSink::new(&settings.output_dir), tagged)?;
    if settings.write_json {
        written.extend(write_all_tagged(
            &JsonSink::new(&settings.output_dir),
            tagged,
        )?);
    }

    log_written(&written);
    Ok(written)
}

/// Write the lopsided matchups found by analysis next to the main tables
pub fn export_polarized(
    polarized: &[PolarizedMatchup],
    settings: &ExportSettings,
) -> Result<PathBuf> {
    prepare_output_dir(settings)?;

    let rows: Vec<PolarizedRow> = polarized.iter().map(Into::into).collect();
    let path = CsvSink::new(&settings.output_dir)
        .write_table(POLARIZED_MATCHUPS_TABLE, &rows)
        .with_context(|| export_context(POLARIZED_MATCHUPS_TABLE))?;

    info!("Saved {}", path.display());
    Ok(path)
}

fn prepare_output_dir(settings: &ExportSettings) -> Result<()> {
    fs::create_dir_all(&settings.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            settings.output_dir.display()
        )
    })
}

fn log_written(paths: &[PathBuf]) {
    for path in paths {
        info!("Saved {}", path.display());
    }
}
