//! Catalog-based spring and oil selection.
//!
//! Given a target natural angular frequency `ωₙ` and a mass `m`, the search
//! runs in two stages:
//!
//! 1. The spring whose rate is closest to `k_req = m·ωₙ²` wins.
//! 2. With that spring's rate `k`, each oil yields a damping coefficient
//!    `c = ν₄₀ · geometric_factor` and a ratio `ζ = c / (2·√(k·m))`; the oil
//!    whose ratio is closest to the configured target wins.
//!
//! The chosen pair is then turned into a [`FreeVibration`] driven at the
//! target `ωₙ` and sampled into a [`ResponseCurve`].
//!
//! Both stages break ties in favour of the earliest catalog row.

mod config;
mod error;

use std::fmt;

use log::{debug, info};
use twine_core::Model;
use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, Length, Mass, Ratio},
    length::meter,
    mass::kilogram,
    ratio::ratio,
};

use crate::support::{
    catalog::{Catalog, CatalogRecord, nearest},
    constraint::{Constrained, ConstraintError, StrictlyPositive},
    units::{DampingCoefficient, SpringRate, newton_per_meter, newton_second_per_meter},
};

use super::{
    DampingRegime, FreeVibration, ResponseCurve, critical_coefficient, damping::damping_ratio,
};

pub use config::{ConfigError, DEFAULT_OIL_COLUMN, DEFAULT_SPRING_COLUMN, SelectionConfig};
pub use error::SelectionError;

/// Validated inputs of a catalog search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionInput {
    /// Target natural angular frequency `ωₙ`.
    pub target: Constrained<AngularVelocity, StrictlyPositive>,
    pub mass: Constrained<Mass, StrictlyPositive>,
    /// Initial displacement of the synthesized response.
    pub amplitude: Length,
}

impl SelectionInput {
    /// Validates and bundles the search inputs.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InvalidInput`] if the target frequency or
    /// mass is not strictly positive, or if the amplitude is not finite.
    pub fn new(
        target: AngularVelocity,
        mass: Mass,
        amplitude: Length,
    ) -> Result<Self, SelectionError> {
        let target = Constrained::new(target).map_err(|source| SelectionError::InvalidInput {
            field: "target angular frequency",
            source,
        })?;
        let mass = Constrained::new(mass).map_err(|source| SelectionError::InvalidInput {
            field: "mass",
            source,
        })?;
        if !amplitude.value.is_finite() {
            let source = if amplitude.value.is_nan() {
                ConstraintError::NotANumber
            } else {
                ConstraintError::Infinite
            };
            return Err(SelectionError::InvalidInput {
                field: "amplitude",
                source,
            });
        }

        Ok(Self {
            target,
            mass,
            amplitude,
        })
    }

    /// Stiffness that yields the target frequency, `k_req = m·ωₙ²`.
    #[must_use]
    pub fn required_stiffness(&self) -> SpringRate {
        let omega = self.target.as_ref().get::<radian_per_second>();
        newton_per_meter(self.mass.as_ref().get::<kilogram>() * omega * omega)
    }
}

/// Outcome of a catalog search.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// The chosen spring row, as read from the catalog.
    pub spring: CatalogRecord,
    /// The chosen oil row, as read from the catalog.
    pub oil: CatalogRecord,
    pub required_stiffness: SpringRate,
    /// Rate of the chosen spring.
    pub stiffness: SpringRate,
    /// Damping coefficient of the chosen oil.
    pub damping: DampingCoefficient,
    pub damping_ratio: Ratio,
    pub damped_angular_frequency: AngularVelocity,
    pub response: ResponseCurve,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zeta = self.damping_ratio.get::<ratio>();

        write!(f, "spring {}", self.spring)?;
        write!(f, "oil {}", self.oil)?;
        writeln!(
            f,
            "k   = {:.4} N/m (required {:.4} N/m)",
            self.stiffness.value, self.required_stiffness.value
        )?;
        writeln!(f, "c   = {:.4} N·s/m", self.damping.value)?;
        writeln!(
            f,
            "ζ   = {zeta:.4} ({})",
            DampingRegime::classify(self.damping_ratio)
        )?;
        write!(
            f,
            "ω_d = {:.4} rad/s",
            self.damped_angular_frequency.get::<radian_per_second>()
        )
    }
}

/// Selects the spring and oil that best match `input`.
///
/// # Errors
///
/// Returns [`SelectionError`] if the config is invalid, a catalog lacks the
/// configured column or holds a non-numeric cell, a catalog has no usable
/// row, or the chosen pair is not underdamped.
pub fn select(
    springs: &Catalog,
    oils: &Catalog,
    input: &SelectionInput,
    config: &SelectionConfig,
) -> Result<Selection, SelectionError> {
    config.validate()?;

    let mass = *input.mass.as_ref();
    let natural = *input.target.as_ref();
    let required_stiffness = input.required_stiffness();

    let rates: Vec<f64> = springs
        .column(&config.spring_column)?
        .into_iter()
        .map(|value| value * config.stiffness_conversion)
        .collect();
    let spring_match =
        nearest(&rates, required_stiffness.value).ok_or_else(|| no_candidate(springs))?;
    let spring = springs
        .record(spring_match.index)
        .ok_or_else(|| no_candidate(springs))?;
    let stiffness = newton_per_meter(spring_match.value);

    info!(
        "selected spring row {} of `{}`: k = {:.4} N/m (required {:.4} N/m)",
        spring_match.index,
        springs.name(),
        stiffness.value,
        required_stiffness.value,
    );

    let critical = critical_coefficient(mass, stiffness)?;
    let coefficients: Vec<f64> = oils
        .column(&config.oil_column)?
        .into_iter()
        .map(|value| value * config.geometric_factor)
        .collect();
    let ratios: Vec<f64> = coefficients
        .iter()
        .map(|c| c / critical.value)
        .collect();
    let oil_match =
        nearest(&ratios, config.target_damping_ratio).ok_or_else(|| no_candidate(oils))?;
    let oil = oils
        .record(oil_match.index)
        .ok_or_else(|| no_candidate(oils))?;
    let damping = newton_second_per_meter(coefficients[oil_match.index]);
    let damping_ratio = damping_ratio(mass, stiffness, damping)?;

    info!(
        "selected oil row {} of `{}`: c = {:.4} N·s/m, ζ = {:.4} (target {})",
        oil_match.index,
        oils.name(),
        damping.value,
        damping_ratio.get::<ratio>(),
        config.target_damping_ratio,
    );

    let vibration = FreeVibration {
        amplitude: input.amplitude,
        natural,
        damping_ratio,
    };
    let damped_angular_frequency = vibration.damped_angular_frequency()?;
    let response = vibration.sample(config.horizon(), config.samples)?;

    debug!(
        "sampled {} points over {} s, peak {} m",
        response.len(),
        config.horizon_seconds,
        response.peak().get::<meter>()
    );

    Ok(Selection {
        spring,
        oil,
        required_stiffness,
        stiffness,
        damping,
        damping_ratio,
        damped_angular_frequency,
        response,
    })
}

fn no_candidate(catalog: &Catalog) -> SelectionError {
    SelectionError::NoCandidate {
        catalog: catalog.name().to_owned(),
    }
}

/// Model adapter running [`select`] against a fixed pair of catalogs.
#[derive(Debug, Clone)]
pub struct CatalogSelector {
    springs: Catalog,
    oils: Catalog,
    config: SelectionConfig,
}

impl CatalogSelector {
    /// Creates a selector over the given catalogs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn new(
        springs: Catalog,
        oils: Catalog,
        config: SelectionConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            springs,
            oils,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }
}

impl Model for CatalogSelector {
    type Input = SelectionInput;
    type Output = Selection;
    type Error = SelectionError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        select(&self.springs, &self.oils, input, &self.config)
    }
}
