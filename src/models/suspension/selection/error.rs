use thiserror::Error;

use crate::support::{catalog::CatalogError, constraint::ConstraintError};

use crate::models::suspension::{DynamicsError, ResponseError};
use super::ConfigError;

/// Errors that can occur while selecting components from the catalogs.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("invalid selection config")]
    Config(#[from] ConfigError),

    /// A search input is out of range.
    #[error("invalid {field}")]
    InvalidInput {
        field: &'static str,
        #[source]
        source: ConstraintError,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The catalog has no row with a usable value.
    #[error("catalog `{catalog}` has no usable candidate")]
    NoCandidate { catalog: String },

    #[error(transparent)]
    Dynamics(#[from] DynamicsError),

    /// The selected pair does not produce a damped oscillation.
    #[error(transparent)]
    Response(#[from] ResponseError),
}
