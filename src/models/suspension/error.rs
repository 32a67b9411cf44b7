use thiserror::Error;
use uom::si::f64::Mass;

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    units::SpringRate,
};

/// Errors from dynamics relations that require a physical mass and stiffness.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DynamicsError {
    /// The mass is zero, negative, or not a number.
    #[error("mass must be > 0 kg, got {} kg", .mass.value)]
    Mass { mass: Mass },

    /// The stiffness is zero, negative, or not a number.
    #[error("stiffness must be > 0 N/m, got {} N/m", .stiffness.value)]
    Stiffness { stiffness: SpringRate },
}

impl DynamicsError {
    /// Returns `mass` unchanged if it is strictly positive.
    pub(super) fn check_mass(mass: Mass) -> Result<Mass, Self> {
        StrictlyPositive::check(&mass)
            .map(|()| mass)
            .map_err(|_| Self::Mass { mass })
    }

    /// Returns `stiffness` unchanged if it is strictly positive.
    pub(super) fn check_stiffness(stiffness: SpringRate) -> Result<SpringRate, Self> {
        StrictlyPositive::check(&stiffness)
            .map(|()| stiffness)
            .map_err(|_| Self::Stiffness { stiffness })
    }
}
