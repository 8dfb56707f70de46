use anyhow::{Context, Result};
use std::path::PathBuf;

use super::rows::{
    HeroStatRow, MatchResultRow, MatchupRow, PlayerDetailRow, PlayerStatRow, TableRow, TaggedRow,
};
use crate::errors::export_context;
use crate::stats::{TaggedStats, TournamentStats};

pub const MATCH_RESULTS_TABLE: &str = "1_match_results";
pub const PLAYER_STATS_TABLE: &str = "2_player_stats";
pub const HERO_STATS_TABLE: &str = "3_hero_stats";
pub const HERO_MATCHUPS_TABLE: &str = "4_hero_matchups";
pub const PLAYER_DETAILS_TABLE: &str = "5_player_details";

/// Destination format for the output tables
pub trait TableSink {
    fn write_table<R: TableRow>(&self, table: &str, rows: &[R]) -> Result<PathBuf>;

    fn write_tagged_table<R: TableRow>(
        &self,
        table: &str,
        rows: &[TaggedRow<'_, R>],
    ) -> Result<PathBuf>;
}

/// Write the five tables of one aggregate
pub fn write_all<S: TableSink>(sink: &S, stats: &TournamentStats) -> Result<Vec<PathBuf>> {
    let matches: Vec<MatchResultRow> = stats.match_table.iter().map(Into::into).collect();
    let players: Vec<PlayerStatRow> = stats.player_stats.iter().map(Into::into).collect();
    let heroes: Vec<HeroStatRow> = stats.hero_stats.iter().map(Into::into).collect();
    let matchups: Vec<MatchupRow> = stats.matchup_stats.iter().map(Into::into).collect();
    let details: Vec<PlayerDetailRow> = stats.player_details.iter().map(Into::into).collect();

    Ok(vec![
        write_one(sink, MATCH_RESULTS_TABLE, &matches)?,
        write_one(sink, PLAYER_STATS_TABLE, &players)?,
        write_one(sink, HERO_STATS_TABLE, &heroes)?,
        write_one(sink, HERO_MATCHUPS_TABLE, &matchups)?,
        write_one(sink, PLAYER_DETAILS_TABLE, &details)?,
    ])
}

/// Write the five tables with every row tagged by its tournament
pub fn write_all_tagged<S: TableSink>(sink: &S, tagged: &TaggedStats) -> Result<Vec<PathBuf>> {
    let matches: Vec<TaggedRow<MatchResultRow>> = tagged
        .match_rows()
        .map(|(label, row)| TaggedRow::new(label, row.into()))
        .collect();
    let players: Vec<TaggedRow<PlayerStatRow>> = tagged
        .player_rows()
        .map(|(label, row)| TaggedRow::new(label, row.into()))
        .collect();
    let heroes: Vec<TaggedRow<HeroStatRow>> = tagged
        .hero_rows()
        .map(|(label, row)| TaggedRow::new(label, row.into()))
        .collect();
    let matchups: Vec<TaggedRow<MatchupRow>> = tagged
        .matchup_rows()
        .map(|(label, row)| TaggedRow::new(label, row.into()))
        .collect();
    let details: Vec<TaggedRow<PlayerDetailRow>> = tagged
        .detail_rows()
        .map(|(label, row)| TaggedRow::new(label, row.into()))
        .collect();

    Ok(vec![
        write_one_tagged(sink, MATCH_RESULTS_TABLE, &matches)?,
        write_one_tagged(sink, PLAYER_STATS_TABLE, &players)?,
        write_one_tagged(sink, HERO_STATS_TABLE, &heroes)?,
        write_one_tagged(sink, HERO_MATCHUPS_TABLE, &matchups)?,
        write_one_tagged(sink, PLAYER_DETAILS_TABLE, &details)?,
    ])
}

fn write_one<S: TableSink, R: TableRow>(sink: &S, table: &str, rows: &[R]) -> Result<PathBuf> {
    sink.write_table(table, rows)
        .with_context(|| export_context(table))
}

fn write_one_tagged<S: TableSink, R: TableRow>(
    sink: &S,
    table: &str,
    rows: &[TaggedRow<'_, R>],
) -> Result<PathBuf> {
    sink.write_tagged_table(table, rows)
        .with_context(|| export_context(table))
}
