use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while loading or reading a [`Catalog`](super::Catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be opened.
    #[error("cannot open catalog {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The catalog is not well-formed CSV.
    #[error("malformed catalog data")]
    Read {
        #[source]
        source: csv::Error,
    },

    /// A required column is absent from the header row.
    #[error("catalog `{catalog}` has no column `{column}`")]
    MissingColumn { catalog: String, column: String },

    /// A cell in a numeric column could not be parsed.
    #[error("catalog `{catalog}` row {row}, column `{column}`: `{value}` is not a number")]
    InvalidCell {
        catalog: String,
        row: usize,
        column: String,
        value: String,
    },
}

impl CatalogError {
    pub(super) fn read(source: csv::Error) -> Self {
        Self::Read { source }
    }
}
