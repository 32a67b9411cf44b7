//! Tabular component catalogs.
//!
//! A catalog is a CSV table with a header row, one component per row.
//! Rows have no identity beyond their position, and only one numeric column
//! is usually of interest for a given search (stiffness for springs,
//! kinematic viscosity for oils).
//!
//! ```
//! use resoil::support::catalog::{Catalog, nearest};
//!
//! let data = "model,k\nA,10\nB,20\nC,30\n";
//! let catalog = Catalog::from_reader(data.as_bytes()).unwrap();
//!
//! let k = catalog.column("k").unwrap();
//! let best = nearest(&k, 22.0).unwrap();
//! assert_eq!(best.index, 1);
//! ```

mod error;

use std::{fmt, fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;

pub use error::CatalogError;

/// An in-memory catalog loaded from CSV.
#[derive(Debug, Clone)]
pub struct Catalog {
    name: String,
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl Catalog {
    /// Loads a catalog from a CSV file.
    ///
    /// The file stem is used as the catalog name in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Open`] if the file cannot be opened, or
    /// [`CatalogError::Read`] if it is not well-formed CSV.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path.file_stem().map_or_else(
            || path.display().to_string(),
            |stem| stem.to_string_lossy().into_owned(),
        );

        Ok(Self::from_reader(file)?.with_name(name))
    }

    /// Loads a catalog from any CSV source.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Read`] if the data is not well-formed CSV
    /// (including rows whose length differs from the header).
    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let mut csv = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        let headers = csv.headers().map_err(CatalogError::read)?.clone();
        let rows = csv
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(CatalogError::read)?;

        debug!(
            "loaded catalog with {} columns and {} rows",
            headers.len(),
            rows.len()
        );

        Ok(Self {
            name: String::from("catalog"),
            headers,
            rows,
        })
    }

    /// Returns this catalog with a display name used in error messages.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of component rows (the header is not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in file order.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.headers.iter()
    }

    /// Parses every cell of the named column as `f64`.
    ///
    /// Blank cells read as `NaN`, which [`nearest`] never selects.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingColumn`] if no header matches `column`,
    /// or [`CatalogError::InvalidCell`] for the first non-blank cell that is
    /// not a number.
    pub fn column(&self, column: &str) -> Result<Vec<f64>, CatalogError> {
        let position = self
            .headers
            .iter()
            .position(|header| header == column)
            .ok_or_else(|| CatalogError::MissingColumn {
                catalog: self.name.clone(),
                column: column.to_owned(),
            })?;

        self.rows
            .iter()
            .enumerate()
            .map(|(row, record)| {
                let cell = record.get(position).unwrap_or_default();
                if cell.is_empty() {
                    return Ok(f64::NAN);
                }
                cell.parse::<f64>().map_err(|_| CatalogError::InvalidCell {
                    catalog: self.name.clone(),
                    row,
                    column: column.to_owned(),
                    value: cell.to_owned(),
                })
            })
            .collect()
    }

    /// Returns the header/value pairs of one row.
    #[must_use]
    pub fn record(&self, index: usize) -> Option<CatalogRecord> {
        let row = self.rows.get(index)?;
        let fields = self
            .headers
            .iter()
            .zip(row.iter())
            .map(|(header, value)| (header.to_owned(), value.to_owned()))
            .collect();

        Some(CatalogRecord { index, fields })
    }
}

/// An owned copy of one catalog row, kept for display after a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRecord {
    /// Zero-based row position in the catalog.
    pub index: usize,
    /// Header/value pairs in column order.
    pub fields: Vec<(String, String)>,
}

impl CatalogRecord {
    /// Returns the raw value under `header`, if present.
    #[must_use]
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == header)
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Display for CatalogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .fields
            .iter()
            .map(|(name, _)| name.chars().count())
            .max()
            .unwrap_or(0);

        writeln!(f, "row {}", self.index)?;
        for (name, value) in &self.fields {
            writeln!(f, "  {name:<width$}  {value}")?;
        }
        Ok(())
    }
}

/// The closest value found by [`nearest`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestMatch {
    /// Position of the winning value.
    pub index: usize,
    /// The winning value itself.
    pub value: f64,
    /// Absolute error `|value - target|`.
    pub error: f64,
}

/// Finds the value closest to `target` by absolute error.
///
/// Values are scanned in order and a later value only wins when its error is
/// strictly smaller, so ties resolve to the first occurrence.
/// Values whose error is not finite (NaN or infinite) are skipped.
///
/// Returns `None` if no value has a finite error.
#[must_use]
pub fn nearest(values: &[f64], target: f64) -> Option<NearestMatch> {
    let mut best: Option<NearestMatch> = None;

    for (index, &value) in values.iter().enumerate() {
        let error = (value - target).abs();
        if !error.is_finite() {
            continue;
        }
        if best.is_none_or(|current| error < current.error) {
            best = Some(NearestMatch {
                index,
                value,
                error,
            });
        }
    }

    best
}
