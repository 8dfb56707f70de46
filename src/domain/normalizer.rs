use log::debug;

use super::models::{MatchRecord, RawParticipant, RawRow, Side};

/// Turn one round's scraped rows into validated match records.
///
/// Rows that do not carry two identifiable participants are skipped; a single
/// row never yields more than one record.
pub fn normalize(round_label: &str, raw_rows: &[RawRow]) -> Vec<MatchRecord> {
    let records: Vec<MatchRecord> = raw_rows
        .iter()
        .filter_map(|row| normalize_row(round_label, row))
        .collect();

    let skipped = raw_rows.len() - records.len();
    if skipped > 0 {
        debug!("{}: skipped {} malformed rows", round_label, skipped);
    }

    records
}

fn normalize_row(round_label: &str, row: &RawRow) -> Option<MatchRecord> {
    let [first, second, ..] = row.participants.as_slice() else {
        return None;
    };

    let player1 = identify(first)?;
    let player2 = identify(second)?;
    let winner = resolve_winner(first, second);

    MatchRecord::try_new(round_label, player1, player2, winner)
}

fn identify(participant: &RawParticipant) -> Option<(&str, &str)> {
    let name = participant.name.as_deref()?;
    let hero = participant.hero.as_deref()?;
    Some((name, hero))
}

fn resolve_winner(first: &RawParticipant, second: &RawParticipant) -> Option<Side> {
    if first.is_winner {
        Some(Side::Player1)
    } else if second.is_winner {
        Some(Side::Player2)
    } else {
        None
    }
}
