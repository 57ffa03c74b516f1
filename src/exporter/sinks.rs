use crate::errors::{AppError, AppResult};
use crate::models::{Table, TableRow};
use csv::{Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Rows written per output table during one export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportStats {
    counts: [u64; Table::COUNT],
}

impl ExportStats {
    pub fn rows(&self, table: Table) -> u64 {
        self.counts[table as usize]
    }

    pub fn total_rows(&self) -> u64 {
        self.counts.iter().sum()
    }

    fn record(&mut self, table: Table) {
        self.counts[table as usize] += 1;
    }
}

/// One CSV writer per output table, each already carrying its header row.
///
/// Writers are flushed and closed when `finish` is called. If the export aborts
/// early the sinks are dropped instead, and `csv::Writer`'s drop flushes whatever
/// was buffered, so rows written before the failure still reach disk.
pub struct TableSinks<W: Write> {
    writers: Vec<csv::Writer<W>>,
    stats: ExportStats,
}

impl TableSinks<File> {
    /// Creates (truncating) every table file inside `dir`.
    pub fn create(dir: &Path) -> AppResult<Self> {
        Self::open_with(|table| {
            let path = dir.join(table.file_name());
            debug!(table = table.display_name(), path = %path.display(), "Opening output table");
            File::create(&path).map_err(|e| {
                AppError::IoError(format!("Failed to create CSV file {}: {e}", path.display()))
            })
        })
    }
}

impl<W: Write> TableSinks<W> {
    /// Opens a writer for each table through `open` and writes its header row.
    pub fn open_with(mut open: impl FnMut(Table) -> AppResult<W>) -> AppResult<Self> {
        let mut writers = Vec::with_capacity(Table::COUNT);
        for table in Table::ALL {
            let mut writer = WriterBuilder::new()
                .has_headers(false)
                .terminator(Terminator::CRLF)
                .from_writer(open(table)?);
            writer.write_record(table.headers())?;
            writers.push(writer);
        }
        Ok(Self {
            writers,
            stats: ExportStats::default(),
        })
    }

    /// Appends one row to the table the row type belongs to.
    pub fn write<R: TableRow>(&mut self, row: &R) -> AppResult<()> {
        self.writers[R::TABLE as usize].serialize(row)?;
        self.stats.record(R::TABLE);
        Ok(())
    }

    pub fn stats(&self) -> &ExportStats {
        &self.stats
    }

    /// Flushes every writer and hands back the underlying outputs.
    pub fn finish(self) -> AppResult<Vec<W>> {
        self.writers
            .into_iter()
            .zip(Table::ALL)
            .map(|(writer, table)| {
                writer.into_inner().map_err(|e| {
                    AppError::IoError(format!(
                        "Failed to flush {}: {}",
                        table.file_name(),
                        e.error()
                    ))
                })
            })
            .collect()
    }
}
