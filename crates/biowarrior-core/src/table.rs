//! Header-addressed CSV tables.
//!
//! Every input is read through `Table`: the first record is the header row,
//! rows may be ragged, and cells are looked up by `ColumnRef`. Header names are
//! compared after trimming, since the spreadsheet exports carry stray spaces.

use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

/// A column addressed by header text or by zero-based position.
///
/// Positional references exist for sheets whose header row is metadata
/// rather than column names (the CO2 table).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnRef {
    Index(usize),
    Name(String),
}

impl ColumnRef {
    pub fn name(name: impl Into<String>) -> Self {
        ColumnRef::Name(name.into())
    }
}

impl std::fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnRef::Index(i) => write!(f, "#{i}"),
            ColumnRef::Name(n) => write!(f, "{n:?}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Table {
    source_name: String,
    headers: Vec<String>,
    rows: Vec<StringRecord>,
}

impl Table {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(path.display().to_string(), file)
    }

    pub fn from_reader<R: Read>(source_name: impl Into<String>, reader: R) -> Result<Self> {
        let source_name = source_name.into();
        let csv_err = |source| DataError::Csv {
            source_name: source_name.clone(),
            source,
        };

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr
            .byte_headers()
            .map_err(csv_err)?
            .iter()
            .map(|h| decode_cell(h).trim().to_string())
            .collect();
        if headers.is_empty() || headers.iter().all(String::is_empty) {
            return Err(DataError::EmptySource { source_name });
        }

        let rows = rdr
            .byte_records()
            .map(|record| record.map(|r| r.iter().map(decode_cell).collect::<StringRecord>()))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(csv_err)?;

        Ok(Self { source_name, headers, rows })
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    /// Resolve a column reference, failing fast when the column is absent.
    pub fn column_index(&self, column: &ColumnRef) -> Result<usize> {
        let found = match column {
            ColumnRef::Index(i) => (*i < self.headers.len()).then_some(*i),
            ColumnRef::Name(name) => {
                let wanted = name.trim();
                self.headers.iter().position(|h| h == wanted)
            }
        };
        found.ok_or_else(|| DataError::MissingColumn {
            source_name: self.source_name.clone(),
            column: column.to_string(),
        })
    }

    /// Resolve several columns at once; the first absent one is the error.
    pub fn column_indices(&self, columns: &[ColumnRef]) -> Result<Vec<usize>> {
        columns.iter().map(|c| self.column_index(c)).collect()
    }
}

/// Cell text as UTF-8, or as Latin-1 when the bytes are not valid UTF-8
/// (legacy spreadsheet exports).
pub fn decode_cell(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}

/// Trimmed, non-empty text of a cell.
pub fn text_cell(row: &StringRecord, idx: usize) -> Option<&str> {
    row.get(idx).map(str::trim).filter(|s| !s.is_empty())
}

/// Numeric value of a cell. Blank, placeholder ("..", "-") and non-finite
/// cells are missing.
pub fn number_cell(row: &StringRecord, idx: usize) -> Option<f64> {
    text_cell(row, idx).and_then(parse_number)
}

pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
