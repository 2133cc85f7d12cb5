//! CSV storage for records
//!
//! Each entity lives in its own headerless CSV file inside the data
//! directory, one record per line with positional fields. Fields are
//! neither quoted nor escaped, so a value containing a comma will not
//! survive a round trip. Uses file locking for concurrent access safety.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use tracing::debug;

use crate::domain::Record;

/// Store for one record type in CSV format
#[derive(Debug, Clone)]
pub struct CsvFile<T> {
    path: PathBuf,
    _record: PhantomData<T>,
}

impl<T: Record> CsvFile<T> {
    /// Creates a CSV store at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record in file order
    ///
    /// A missing file reads as empty. Blank lines are skipped and fields are
    /// trimmed. Any malformed row fails the whole read.
    pub fn read_all(&self) -> Result<Vec<T>> {
        if !self.path.exists() {
            debug!(kind = T::KIND, path = %self.path.display(), "no data file");
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open {} file: {}", T::KIND, self.path.display()))?;

        file.lock_shared()
            .with_context(|| format!("Failed to acquire read lock on {}", self.path.display()))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(&file);

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row.with_context(|| {
                format!("Failed to read {} line {}", self.path.display(), index + 1)
            })?;
            let line = row.position().map_or(index as u64 + 1, |pos| pos.line());

            // Only a blank line is skipped; a row of empty fields still fails to parse
            if row.len() == 1 && row[0].is_empty() {
                continue;
            }

            let fields: Vec<&str> = row.iter().collect();
            let record = T::from_row(&fields)
                .with_context(|| format!("{}:{}", self.path.display(), line))?;
            records.push(record);
        }

        debug!(kind = T::KIND, path = %self.path.display(), count = records.len(), "read records");
        Ok(records)
    }

    /// Writes every record in order, replacing the file
    pub fn write_all(&self, records: &[T]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        let temp_path = self.path.with_extension("csv.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .with_context(|| format!("Failed to acquire write lock on {}", temp_path.display()))?;

            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .quote_style(csv::QuoteStyle::Never)
                .from_writer(BufWriter::new(&file));

            for record in records {
                writer
                    .write_record(record.to_row())
                    .with_context(|| format!("Failed to write {} {}", T::KIND, record.id()))?;
            }

            let mut inner = writer
                .into_inner()
                .map_err(|e| anyhow::anyhow!("Failed to flush {}: {}", temp_path.display(), e))?;
            inner
                .flush()
                .with_context(|| format!("Failed to flush {}", temp_path.display()))?;
        }

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        debug!(kind = T::KIND, path = %self.path.display(), count = records.len(), "wrote records");
        Ok(())
    }
}
