//! Delimited table storage: raw parse and serialize, nothing else.

use crate::error::{Error, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;

/// A header line plus the ordered data rows sharing it. Rows may be ragged;
/// positions are interpreted against the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Read a delimited UTF-8 file, first line as header.
    pub fn load(path: &Path, delimiter: u8) -> Result<Table> {
        if !path.exists() {
            return Err(Error::InputNotFound(path.to_path_buf()));
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_path(path)?;

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
            return Err(Error::EmptyInput(path.to_path_buf()));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Table { headers, rows })
    }

    /// Write header plus all rows to `path`, overwriting it.
    pub fn save(&self, path: &Path, delimiter: u8) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_path(path)?;

        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
