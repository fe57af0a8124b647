use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use unidecode::unidecode;

use crate::error::{IngestError, Result};

/// A delimited file read as text, with normalized headers.
#[derive(Debug, Clone, Default)]
pub struct DelimitedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Reference to a column by header name or 0-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnRef {
    Position(usize),
    Name(String),
}

impl ColumnRef {
    pub fn name(name: &str) -> Self {
        Self::Name(normalize_header(name))
    }
}

impl FromStr for ColumnRef {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match value.trim().parse::<usize>() {
            Ok(position) => Self::Position(position),
            Err(_) => Self::name(value),
        })
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(position) => write!(f, "#{position}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Lowercase, transliterate and collapse whitespace in a header cell.
///
/// `SUBSTÂNCIA` becomes `substancia` and `EAN  1` becomes `ean 1`.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    unidecode(&trimmed.to_lowercase())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize_cell(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .trim()
        .trim_matches('\u{feff}')
        .to_string()
}

pub(crate) fn delimiter_byte(delimiter: char) -> Result<u8> {
    u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(IngestError::InvalidDelimiter(delimiter))
}

fn read_raw_rows(path: &Path, delimiter: u8) -> Result<Vec<Vec<String>>> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(file);
    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Pick the header row.
///
/// Exports often carry a preamble before the real header; the first row
/// holding any of `markers` wins. Without markers, or when no row matches,
/// the first row is the header.
fn locate_header(rows: &[Vec<String>], markers: &[String]) -> usize {
    if markers.is_empty() {
        return 0;
    }
    rows.iter()
        .position(|row| {
            row.iter()
                .map(|cell| normalize_header(cell))
                .any(|cell| markers.contains(&cell))
        })
        .unwrap_or(0)
}

/// Read a delimited file; cells are decoded lossily so that Latin-1 exports
/// still load.
pub fn read_delimited(path: &Path, delimiter: char, markers: &[String]) -> Result<DelimitedTable> {
    let raw_rows = read_raw_rows(path, delimiter_byte(delimiter)?)?;
    if raw_rows.is_empty() {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    let header_index = locate_header(&raw_rows, markers);
    let headers: Vec<String> = raw_rows[header_index]
        .iter()
        .map(|value| normalize_header(value))
        .collect();
    let rows = raw_rows
        .into_iter()
        .skip(header_index + 1)
        .map(|record| {
            (0..headers.len())
                .map(|idx| record.get(idx).cloned().unwrap_or_default())
                .collect()
        })
        .collect();
    Ok(DelimitedTable { headers, rows })
}

impl DelimitedTable {
    /// Rename headers; keys and values are compared after header normalization.
    pub fn rename(&mut self, renames: &BTreeMap<String, String>) {
        for header in &mut self.headers {
            if let Some((_, to)) = renames
                .iter()
                .find(|(from, _)| normalize_header(from) == *header)
            {
                *header = normalize_header(to);
            }
        }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        let name = normalize_header(name);
        self.headers.iter().position(|header| *header == name)
    }

    /// Resolve a column reference to a position, failing when it is absent.
    pub fn resolve(&self, column: &ColumnRef, path: &Path) -> Result<usize> {
        match column {
            ColumnRef::Position(position) if *position < self.headers.len() => Ok(*position),
            ColumnRef::Position(position) => Err(IngestError::ColumnOutOfRange {
                position: *position,
                width: self.headers.len(),
                path: path.to_path_buf(),
            }),
            ColumnRef::Name(name) => {
                self.position(name)
                    .ok_or_else(|| IngestError::MissingColumn {
                        column: name.clone(),
                        path: path.to_path_buf(),
                    })
            }
        }
    }

    /// Cell at `column` of `row`, empty when the row is short.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }
}
