use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::constants::sources::SHEET_FILE_SEPARATOR;
use crate::errors::PantareiError;
use crate::types::Year;
use crate::utils::{parse_cell, parse_year_label};

/// Raw CSV contents: the header row and the string cells beneath it.
#[derive(Clone, Debug, PartialEq)]
pub struct CsvTable {
    source_id: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Build a table from parts; rows shorter than the header are padded.
    pub fn new(
        source_id: impl Into<String>,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                if row.len() < width {
                    row.resize(width, String::new());
                }
                row
            })
            .collect();
        Self {
            source_id: source_id.into(),
            headers,
            rows,
        }
    }

    /// Identifier of the source that produced the table.
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Header row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Rename headers in place.
    pub fn map_headers<F>(&mut self, f: F)
    where
        F: Fn(&str) -> String,
    {
        for header in &mut self.headers {
            *header = f(header);
        }
    }

    /// Index of column `name`; a missing column is a schema error.
    pub fn column(&self, name: &str) -> Result<usize, PantareiError> {
        self.headers
            .iter()
            .position(|header| header.trim() == name)
            .ok_or_else(|| {
                PantareiError::schema(self.source_id.clone(), format!("missing column '{name}'"))
            })
    }

    /// Every header that names a year, with its column index.
    pub fn year_columns(&self) -> Vec<(Year, usize)> {
        self.headers
            .iter()
            .enumerate()
            .filter_map(|(idx, header)| parse_year_label(header).map(|year| (year, idx)))
            .collect()
    }

    /// Column indices of `expected` years; fails naming every absent year.
    pub fn require_year_columns(
        &self,
        expected: &[Year],
    ) -> Result<Vec<(Year, usize)>, PantareiError> {
        let available = self.year_columns();
        let mut found = Vec::with_capacity(expected.len());
        let mut missing = Vec::new();
        for year in expected {
            match available.iter().find(|(candidate, _)| candidate == year) {
                Some(entry) => found.push(*entry),
                None => missing.push(year.to_string()),
            }
        }
        if missing.is_empty() {
            Ok(found)
        } else {
            Err(PantareiError::schema(
                self.source_id.clone(),
                format!("missing year columns: {}", missing.join(", ")),
            ))
        }
    }

    /// Numeric value at (`row`, `column`); non-numeric cells are schema errors.
    pub fn number(&self, row: &[String], column: usize) -> Result<Option<f64>, PantareiError> {
        let cell = row.get(column).map(String::as_str).unwrap_or_default();
        parse_cell(cell).map_err(|reason| {
            PantareiError::schema(
                self.source_id.clone(),
                format!("column '{}': {reason}", self.headers[column]),
            )
        })
    }
}

/// Read the CSV at `path`, skipping `header_skip` records before the header.
pub fn read_csv(
    path: &Path,
    source_id: &str,
    header_skip: usize,
) -> Result<CsvTable, PantareiError> {
    let file = File::open(path).map_err(|err| unavailable(source_id, path, err))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);
    let mut records = reader.records().skip(header_skip);
    let headers: Vec<String> = match records.next() {
        Some(record) => record?.iter().map(|cell| cell.trim().to_string()).collect(),
        None => {
            return Err(PantareiError::schema(
                source_id,
                format!("{} has no header after {header_skip} rows", path.display()),
            ));
        }
    };
    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }
    info!(
        source = source_id,
        path = %path.display(),
        rows = rows.len(),
        "read csv"
    );
    Ok(CsvTable::new(source_id, headers, rows))
}

fn unavailable(source_id: &str, path: &Path, err: io::Error) -> PantareiError {
    PantareiError::SourceUnavailable {
        source_id: source_id.to_string(),
        reason: format!("{}: {err}", path.display()),
    }
}

/// Sheet exports of one workbook stored as `<stem>__<sheet>.csv` under a root.
pub struct SheetDirectory {
    root: PathBuf,
    follow_links: bool,
}

impl SheetDirectory {
    /// Directory rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            follow_links: false,
        }
    }

    /// Configure symlink traversal.
    pub fn with_follow_symlinks(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Sheets exported for `stem`, keyed by sheet name in name order.
    pub fn sheets(&self, stem: &str) -> IndexMap<String, PathBuf> {
        let prefix = format!("{stem}{SHEET_FILE_SEPARATOR}");
        let mut walker = WalkDir::new(&self.root).max_depth(1);
        if self.follow_links {
            walker = walker.follow_links(true);
        }
        let mut sheets: IndexMap<String, PathBuf> = walker
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file() && is_csv_file(entry.path()))
            .filter_map(|entry| {
                let name = entry.path().file_stem()?.to_str()?.to_string();
                let sheet = name.strip_prefix(&prefix)?.to_string();
                Some((sheet, entry.path().to_path_buf()))
            })
            .collect();
        sheets.sort_keys();
        debug!(root = %self.root.display(), stem, sheets = sheets.len(), "discovered sheets");
        sheets
    }

    /// Path of one sheet export; a missing sheet is a source error.
    pub fn sheet(&self, stem: &str, sheet: &str) -> Result<PathBuf, PantareiError> {
        self.sheets(stem)
            .shift_remove(sheet)
            .ok_or_else(|| PantareiError::SourceUnavailable {
                source_id: stem.to_string(),
                reason: format!("sheet '{sheet}' not found under {}", self.root.display()),
            })
    }
}

/// True if the path has a `.csv` extension (case-insensitive).
pub fn is_csv_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}
