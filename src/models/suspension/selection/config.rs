use std::{fs::File, io::Read, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{f64::Time, time::second};

/// Column holding the spring rate in the springs catalog, in lbf/in.
pub const DEFAULT_SPRING_COLUMN: &str = "[Y] Constante elástica (lbs/in)";

/// Column holding the kinematic viscosity at 40 °C in the oils catalog, in mm²/s.
pub const DEFAULT_OIL_COLUMN: &str = "Visc_40 (mm²/s)";

/// Tunable constants of the catalog search.
///
/// Every field has a default, so a JSON file only needs to list the values
/// it overrides:
///
/// ```
/// use resoil::models::suspension::SelectionConfig;
///
/// let config = SelectionConfig::from_json(r#"{ "target_damping_ratio": 0.3 }"#.as_bytes()).unwrap();
/// assert_eq!(config.target_damping_ratio, 0.3);
/// assert_eq!(config.samples, 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionConfig {
    /// Header of the spring-rate column.
    pub spring_column: String,

    /// Header of the oil viscosity column.
    pub oil_column: String,

    /// Multiplier from the spring column's unit to N/m (lbf/in → N/m).
    pub stiffness_conversion: f64,

    /// Multiplier from the oil column value to a damping coefficient in N·s/m.
    ///
    /// Lumps the damper geometry into a single factor.
    pub geometric_factor: f64,

    /// Damping ratio the oil search aims for.
    pub target_damping_ratio: f64,

    /// Length of the synthesized response, in seconds.
    pub horizon_seconds: f64,

    /// Number of response samples, end points included.
    pub samples: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            spring_column: DEFAULT_SPRING_COLUMN.to_owned(),
            oil_column: DEFAULT_OIL_COLUMN.to_owned(),
            stiffness_conversion: 175.1268,
            geometric_factor: 5.0,
            target_damping_ratio: 0.2,
            horizon_seconds: 5.0,
            samples: 2000,
        }
    }
}

impl SelectionConfig {
    /// Reads a configuration from JSON and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields,
    /// or a validation error from [`validate`](Self::validate).
    pub fn from_json(reader: impl Read) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Open`] if the file cannot be opened, otherwise
    /// fails like [`from_json`](Self::from_json).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(file)
    }

    /// Checks that every numeric constant is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotPositive`] naming the first multiplier or
    /// horizon that is not strictly positive (the target ratio may be zero),
    /// or [`ConfigError::TooFewSamples`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("stiffness_conversion", self.stiffness_conversion),
            ("geometric_factor", self.geometric_factor),
            ("horizon_seconds", self.horizon_seconds),
        ];
        for (field, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let zeta = self.target_damping_ratio;
        if !(zeta >= 0.0 && zeta.is_finite()) {
            return Err(ConfigError::NegativeTarget { value: zeta });
        }

        if self.samples < 2 {
            return Err(ConfigError::TooFewSamples {
                samples: self.samples,
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn horizon(&self) -> Time {
        Time::new::<second>(self.horizon_seconds)
    }
}

/// Errors from loading or validating a [`SelectionConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot open config {}", path.display())]
    Open {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config")]
    Parse(#[from] serde_json::Error),

    #[error("`{field}` must be a finite number > 0, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("`target_damping_ratio` must be a finite number >= 0, got {value}")]
    NegativeTarget { value: f64 },

    #[error("`samples` must be at least 2, got {samples}")]
    TooFewSamples { samples: usize },
}
