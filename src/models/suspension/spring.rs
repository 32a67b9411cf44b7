//! Linear coil spring.
//!
//! `Spring` implements Hooke's law, `F = k·x`, for a spring with fixed
//! stiffness and a maximum allowed deflection.
//!
//! # Units
//!
//! Parameters are [`uom`] quantities, so any consistent unit can be used at
//! construction. Results are returned as quantities as well; deflections are
//! measured from the free length and may be negative (compression).

use std::{f64::consts::TAU, fmt};

use thiserror::Error;
use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, Force, Frequency, Length, Mass},
    frequency::hertz,
    length::meter,
    mass::kilogram,
};

use crate::support::{
    constraint::{Constraint, NonNegative, StrictlyPositive},
    units::{SpringRate, newton_per_meter},
};

use super::DynamicsError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpringParametersError {
    #[error("stiffness must be > 0 N/m, got {} N/m", .stiffness.value)]
    Stiffness { stiffness: SpringRate },
    #[error("free length must be > 0 m, got {} m", .free_length.value)]
    FreeLength { free_length: Length },
    #[error("maximum deflection must be >= 0 m, got {} m", .max_deflection.value)]
    MaxDeflection { max_deflection: Length },
    #[error("inner diameter must be >= 0 m, got {} m", .inner_diameter.value)]
    InnerDiameter { inner_diameter: Length },
    #[error("outer diameter must be >= 0 m, got {} m", .outer_diameter.value)]
    OuterDiameter { outer_diameter: Length },
    #[error(
        "inner diameter ({} m) cannot exceed outer diameter ({} m)",
        .inner_diameter.value,
        .outer_diameter.value
    )]
    DiameterOrder {
        inner_diameter: Length,
        outer_diameter: Length,
    },
}

/// Construction parameters for a [`Spring`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpringParameters {
    pub name: String,
    pub stiffness: SpringRate,
    pub free_length: Length,
    /// Largest absolute deflection the spring may undergo.
    pub max_deflection: Length,
    pub inner_diameter: Length,
    pub outer_diameter: Length,
}

impl Default for SpringParameters {
    /// A 200 N/m coil, 100 mm long, 20 mm travel, 20/30 mm diameters.
    fn default() -> Self {
        Self {
            name: "Resorte A".into(),
            stiffness: newton_per_meter(200.0),
            free_length: Length::new::<meter>(0.1),
            max_deflection: Length::new::<meter>(0.02),
            inner_diameter: Length::new::<meter>(0.02),
            outer_diameter: Length::new::<meter>(0.03),
        }
    }
}

/// A validated linear spring.
///
/// Instances are immutable; to change a parameter, build a new spring.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    name: String,
    stiffness: SpringRate,
    free_length: Length,
    max_deflection: Length,
    inner_diameter: Length,
    outer_diameter: Length,
}

impl Spring {
    /// Validates `parameters` and creates a spring.
    ///
    /// # Errors
    ///
    /// Returns [`SpringParametersError`] naming the first parameter that is
    /// out of range: stiffness and free length must be strictly positive,
    /// the maximum deflection and both diameters non-negative, and the inner
    /// diameter no larger than the outer one.
    pub fn new(parameters: SpringParameters) -> Result<Self, SpringParametersError> {
        let SpringParameters {
            name,
            stiffness,
            free_length,
            max_deflection,
            inner_diameter,
            outer_diameter,
        } = parameters;

        if StrictlyPositive::check(&stiffness).is_err() {
            return Err(SpringParametersError::Stiffness { stiffness });
        }
        if StrictlyPositive::check(&free_length).is_err() {
            return Err(SpringParametersError::FreeLength { free_length });
        }
        if NonNegative::check(&max_deflection).is_err() {
            return Err(SpringParametersError::MaxDeflection { max_deflection });
        }
        if NonNegative::check(&inner_diameter).is_err() {
            return Err(SpringParametersError::InnerDiameter { inner_diameter });
        }
        if NonNegative::check(&outer_diameter).is_err() {
            return Err(SpringParametersError::OuterDiameter { outer_diameter });
        }
        if inner_diameter > outer_diameter {
            return Err(SpringParametersError::DiameterOrder {
                inner_diameter,
                outer_diameter,
            });
        }

        Ok(Self {
            name,
            stiffness,
            free_length,
            max_deflection,
            inner_diameter,
            outer_diameter,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn stiffness(&self) -> SpringRate {
        self.stiffness
    }

    #[must_use]
    pub fn free_length(&self) -> Length {
        self.free_length
    }

    #[must_use]
    pub fn max_deflection(&self) -> Length {
        self.max_deflection
    }

    #[must_use]
    pub fn inner_diameter(&self) -> Length {
        self.inner_diameter
    }

    #[must_use]
    pub fn outer_diameter(&self) -> Length {
        self.outer_diameter
    }

    /// Computes the spring force with `F = k·x`.
    ///
    /// The sign of the force follows the sign of the deflection.
    #[must_use]
    pub fn force(&self, deflection: Length) -> Force {
        self.stiffness * deflection
    }

    /// Returns `true` if `|deflection|` does not exceed the maximum deflection.
    #[must_use]
    pub fn within_limits(&self, deflection: Length) -> bool {
        deflection.abs() <= self.max_deflection
    }

    /// Computes the natural angular frequency `ω = √(k/m)` of the spring
    /// carrying `mass`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicsError::Mass`] if `mass` is not strictly positive.
    pub fn natural_angular_frequency(&self, mass: Mass) -> Result<AngularVelocity, DynamicsError> {
        let mass = DynamicsError::check_mass(mass)?;
        let omega = (self.stiffness.value / mass.get::<kilogram>()).sqrt();

        Ok(AngularVelocity::new::<radian_per_second>(omega))
    }

    /// Computes the natural frequency `f = √(k/m) / 2π` of the spring
    /// carrying `mass`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicsError::Mass`] if `mass` is not strictly positive.
    pub fn natural_frequency(&self, mass: Mass) -> Result<Frequency, DynamicsError> {
        let omega = self.natural_angular_frequency(mass)?;

        Ok(Frequency::new::<hertz>(
            omega.get::<radian_per_second>() / TAU,
        ))
    }
}

impl fmt::Display for Spring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "spring '{}': k={} N/m, free length={} m, max deflection={} m, d_in={} m, d_out={} m",
            self.name,
            self.stiffness.value,
            self.free_length.get::<meter>(),
            self.max_deflection.get::<meter>(),
            self.inner_diameter.get::<meter>(),
            self.outer_diameter.get::<meter>(),
        )
    }
}
