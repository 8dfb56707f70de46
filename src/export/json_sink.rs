use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::rows::{TableRow, TaggedRow};
use super::sink::TableSink;

/// Writes each table as a JSON array of objects to `<dir>/<table>.json`
pub struct JsonSink {
    dir: PathBuf,
}

impl JsonSink {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn write_rows<T: Serialize>(&self, table: &str, rows: &[T]) -> Result<PathBuf> {
        let path = self.dir.join(format!("{}.json", table));
        let file =
            File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, rows)?;
        writer.flush()?;
        Ok(path)
    }
}

impl TableSink for JsonSink {
    fn write_table<R: TableRow>(&self, table: &str, rows: &[R]) -> Result<PathBuf> {
        self.write_rows(table, rows)
    }

    fn write_tagged_table<R: TableRow>(
        &self,
        table: &str,
        rows: &[TaggedRow<'_, R>],
    ) -> Result<PathBuf> {
        self.write_rows(table, rows)
    }
}
