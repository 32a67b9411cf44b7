//! Fluid damper described by its oil.
//!
//! `Damper` models a damper from the point of view of its working fluid:
//! density plus kinematic viscosity sampled at the two temperatures oil
//! datasheets report (40 °C and 100 °C).
//!
//! # Viscosity model
//!
//! Kinematic viscosity is interpolated linearly between the two samples and
//! held constant outside `[40 °C, 100 °C]`:
//!
//! ```text
//! ν(T) = ν₄₀                                  T ≤ 40 °C
//! ν(T) = ν₄₀ + (ν₁₀₀ − ν₄₀)·(T − 40)/60       40 °C < T < 100 °C
//! ν(T) = ν₁₀₀                                 T ≥ 100 °C
//! η(T) = ν(T)·ρ
//! ```
//!
//! This is a two-point interpolation, not a Walther or Vogel
//! viscosity–temperature law.

use std::fmt;

use thiserror::Error;
use uom::si::{
    diffusion_coefficient::centistokes,
    f64::{DynamicViscosity, Mass, MassDensity, Ratio, ThermodynamicTemperature},
    mass_density::gram_per_cubic_centimeter,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    units::{DampingCoefficient, KinematicViscosity, SpringRate},
};

use super::{DynamicsError, damping};

/// Lower reference temperature of the viscosity samples, °C.
const LOWER_REFERENCE: f64 = 40.0;

/// Upper reference temperature of the viscosity samples, °C.
const UPPER_REFERENCE: f64 = 100.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DamperParametersError {
    #[error("density must be > 0, got {} kg/m³", .density.value)]
    Density { density: MassDensity },
    #[error("viscosity at 40 °C must be > 0, got {} m²/s", .viscosity.value)]
    Viscosity40 { viscosity: KinematicViscosity },
    #[error("viscosity at 100 °C must be > 0, got {} m²/s", .viscosity.value)]
    Viscosity100 { viscosity: KinematicViscosity },
}

/// Construction parameters for a [`Damper`].
///
/// Catalogs usually list density in g/cm³ and viscosity in mm²/s (cSt);
/// build the quantities with those units and the conversion is handled by
/// [`uom`].
#[derive(Debug, Clone, PartialEq)]
pub struct DamperParameters {
    pub name: String,
    pub density: MassDensity,
    pub viscosity_40: KinematicViscosity,
    pub viscosity_100: KinematicViscosity,
}

impl Default for DamperParameters {
    /// A 15W mineral oil: 0.881 g/cm³, 72.6 cSt at 40 °C, 11.6 cSt at 100 °C.
    fn default() -> Self {
        Self {
            name: "Aceite 15W".into(),
            density: MassDensity::new::<gram_per_cubic_centimeter>(0.881),
            viscosity_40: KinematicViscosity::new::<centistokes>(72.6),
            viscosity_100: KinematicViscosity::new::<centistokes>(11.6),
        }
    }
}

/// A validated damper fluid.
#[derive(Debug, Clone, PartialEq)]
pub struct Damper {
    name: String,
    density: MassDensity,
    viscosity_40: KinematicViscosity,
    viscosity_100: KinematicViscosity,
}

impl Damper {
    /// Validates `parameters` and creates a damper.
    ///
    /// # Errors
    ///
    /// Returns [`DamperParametersError`] if either viscosity sample or the
    /// density is not strictly positive.
    pub fn new(parameters: DamperParameters) -> Result<Self, DamperParametersError> {
        let DamperParameters {
            name,
            density,
            viscosity_40,
            viscosity_100,
        } = parameters;

        if StrictlyPositive::check(&viscosity_40).is_err() {
            return Err(DamperParametersError::Viscosity40 {
                viscosity: viscosity_40,
            });
        }
        if StrictlyPositive::check(&viscosity_100).is_err() {
            return Err(DamperParametersError::Viscosity100 {
                viscosity: viscosity_100,
            });
        }
        if StrictlyPositive::check(&density).is_err() {
            return Err(DamperParametersError::Density { density });
        }

        Ok(Self {
            name,
            density,
            viscosity_40,
            viscosity_100,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density
    }

    #[must_use]
    pub fn viscosity_40(&self) -> KinematicViscosity {
        self.viscosity_40
    }

    #[must_use]
    pub fn viscosity_100(&self) -> KinematicViscosity {
        self.viscosity_100
    }

    /// Returns the kinematic viscosity at `temperature` using the clamped
    /// two-point model described in the module documentation.
    #[must_use]
    pub fn kinematic_viscosity(&self, temperature: ThermodynamicTemperature) -> KinematicViscosity {
        let t = temperature.get::<degree_celsius>();

        if t <= LOWER_REFERENCE {
            self.viscosity_40
        } else if t >= UPPER_REFERENCE {
            self.viscosity_100
        } else {
            let fraction = (t - LOWER_REFERENCE) / (UPPER_REFERENCE - LOWER_REFERENCE);
            self.viscosity_40 + (self.viscosity_100 - self.viscosity_40) * fraction
        }
    }

    /// Returns the dynamic viscosity `η = ν·ρ` at `temperature`.
    #[must_use]
    pub fn dynamic_viscosity(&self, temperature: ThermodynamicTemperature) -> DynamicViscosity {
        self.kinematic_viscosity(temperature) * self.density
    }

    /// Computes `c = factor · 2·√(k·m)`.
    ///
    /// See [`damping::damping_coefficient`].
    ///
    /// # Errors
    ///
    /// Returns [`DynamicsError`] if `mass` or `stiffness` is not strictly positive.
    pub fn critical_damping_coefficient(
        &self,
        mass: Mass,
        stiffness: SpringRate,
        factor: f64,
    ) -> Result<DampingCoefficient, DynamicsError> {
        damping::damping_coefficient(mass, stiffness, factor)
    }

    /// Computes `ζ = c / (2·√(k·m))`.
    ///
    /// See [`damping::damping_ratio`].
    ///
    /// # Errors
    ///
    /// Returns [`DynamicsError`] if `mass` or `stiffness` is not strictly positive.
    pub fn damping_ratio(
        &self,
        mass: Mass,
        stiffness: SpringRate,
        coefficient: DampingCoefficient,
    ) -> Result<Ratio, DynamicsError> {
        damping::damping_ratio(mass, stiffness, coefficient)
    }
}

impl fmt::Display for Damper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "damper '{}': density={} g/cm³, ν40={} cSt, ν100={} cSt",
            self.name,
            self.density.get::<gram_per_cubic_centimeter>(),
            self.viscosity_40.get::<centistokes>(),
            self.viscosity_100.get::<centistokes>(),
        )
    }
}
