use anyhow::{Context, Result};
use csv::Writer;
use std::path::{Path, PathBuf};

use super::rows::{TOURNAMENT_HEADER, TableRow, TaggedRow};
use super::sink::TableSink;

/// Writes each table to `<dir>/<table>.csv`
pub struct CsvSink {
    dir: PathBuf,
}

impl CsvSink {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn table_path(&self, table: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", table))
    }
}

impl TableSink for CsvSink {
    fn write_table<R: TableRow>(&self, table: &str, rows: &[R]) -> Result<PathBuf> {
        let path = self.table_path(table);
        let mut writer = Writer::from_path(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;

        writer.write_record(R::HEADERS)?;
        for row in rows {
            writer.write_record(row.cells())?;
        }
        writer.flush()?;

        Ok(path)
    }

    fn write_tagged_table<R: TableRow>(
        &self,
        table: &str,
        rows: &[TaggedRow<'_, R>],
    ) -> Result<PathBuf> {
        let path = self.table_path(table);
        let mut writer = Writer::from_path(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;

        writer.write_record(std::iter::once(TOURNAMENT_HEADER).chain(R::HEADERS.iter().copied()))?;
        for tagged in rows {
            let mut record = vec![tagged.tournament.to_string()];
            record.extend(tagged.row.cells());
            writer.write_record(record)?;
        }
        writer.flush()?;

        Ok(path)
    }
}
