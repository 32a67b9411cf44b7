//! Viscous damping relations for a mass–spring system.
//!
//! The critical damping coefficient `c_crit = 2·√(k·m)` separates oscillating
//! (underdamped) from non-oscillating (overdamped) responses. The damping
//! ratio `ζ = c / c_crit` expresses any coefficient relative to it.

use std::fmt;

use uom::si::{
    f64::{Mass, Ratio},
    mass::kilogram,
    ratio::ratio,
};

use crate::support::units::{DampingCoefficient, SpringRate, newton_second_per_meter};

use super::DynamicsError;

/// Half-width of the band around `ζ = 1` treated as critical damping.
pub const CRITICAL_BAND: f64 = 1e-3;

/// Computes the critical damping coefficient `c_crit = 2·√(k·m)`.
///
/// # Errors
///
/// Returns [`DynamicsError`] if `mass` or `stiffness` is not strictly positive.
pub fn critical_coefficient(
    mass: Mass,
    stiffness: SpringRate,
) -> Result<DampingCoefficient, DynamicsError> {
    let mass = DynamicsError::check_mass(mass)?;
    let stiffness = DynamicsError::check_stiffness(stiffness)?;

    Ok(newton_second_per_meter(
        2.0 * (stiffness.value * mass.get::<kilogram>()).sqrt(),
    ))
}

/// Computes a damping coefficient as a multiple of critical damping,
/// `c = factor · c_crit`.
///
/// A factor of 1 gives critical damping; the factor is not range checked.
///
/// # Errors
///
/// Returns [`DynamicsError`] if `mass` or `stiffness` is not strictly positive.
pub fn damping_coefficient(
    mass: Mass,
    stiffness: SpringRate,
    factor: f64,
) -> Result<DampingCoefficient, DynamicsError> {
    Ok(critical_coefficient(mass, stiffness)? * factor)
}

/// Computes the damping ratio `ζ = c / (2·√(k·m))`.
///
/// The coefficient is not sign checked, so a negative `c` yields a negative ratio.
///
/// # Errors
///
/// Returns [`DynamicsError`] if `mass` or `stiffness` is not strictly positive.
pub fn damping_ratio(
    mass: Mass,
    stiffness: SpringRate,
    coefficient: DampingCoefficient,
) -> Result<Ratio, DynamicsError> {
    let critical = critical_coefficient(mass, stiffness)?;

    Ok(Ratio::new::<ratio>(coefficient.value / critical.value))
}

/// Qualitative damping regime of a system, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DampingRegime {
    /// `ζ < 1`: the system oscillates with decaying amplitude.
    Underdamped,
    /// `|ζ − 1| < CRITICAL_BAND`: fastest return without oscillation.
    CriticallyDamped,
    /// `ζ > 1`: slow, non-oscillating return.
    Overdamped,
}

impl DampingRegime {
    /// Classifies a damping ratio.
    ///
    /// The critical band is checked first so that ratios a rounding error
    /// away from 1 are reported as critical on either side.
    #[must_use]
    pub fn classify(damping_ratio: Ratio) -> Self {
        let zeta = damping_ratio.get::<ratio>();
        if (zeta - 1.0).abs() < CRITICAL_BAND {
            Self::CriticallyDamped
        } else if zeta < 1.0 {
            Self::Underdamped
        } else {
            Self::Overdamped
        }
    }
}

impl fmt::Display for DampingRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Underdamped => "underdamped",
            Self::CriticallyDamped => "critically damped",
            Self::Overdamped => "overdamped",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::units::newton_per_meter;

    fn kg(value: f64) -> Mass {
        Mass::new::<kilogram>(value)
    }

    #[test]
    fn reference_coefficients() {
        let m = kg(1.0);
        let k = newton_per_meter(200.0);

        let c_crit = critical_coefficient(m, k).unwrap();
        assert_relative_eq!(c_crit.value, 28.284_271, epsilon = 1e-6);

        let half = damping_coefficient(m, k, 0.5).unwrap();
        assert_relative_eq!(half.value, 14.142_136, epsilon = 1e-6);
        assert_relative_eq!(damping_ratio(m, k, half).unwrap().get::<ratio>(), 0.5);

        let double = damping_coefficient(m, k, 2.0).unwrap();
        assert_relative_eq!(double.value, 56.568_542, epsilon = 1e-6);
        assert_relative_eq!(damping_ratio(m, k, double).unwrap().get::<ratio>(), 2.0);
    }

    #[test]
    fn unit_factor_is_exactly_critical() {
        for (mass, stiffness) in [(1.0, 200.0), (0.3, 17.5), (1200.0, 35_000.0), (1e-3, 1e6)] {
            let m = kg(mass);
            let k = newton_per_meter(stiffness);
            let c = damping_coefficient(m, k, 1.0).unwrap();
            let zeta = damping_ratio(m, k, c).unwrap();
            assert_relative_eq!(zeta.get::<ratio>(), 1.0, max_relative = 1e-12);
            assert_eq!(DampingRegime::classify(zeta), DampingRegime::CriticallyDamped);
        }
    }

    #[test]
    fn invalid_mass_or_stiffness() {
        let k = newton_per_meter(200.0);
        assert!(matches!(
            critical_coefficient(kg(0.0), k),
            Err(DynamicsError::Mass { .. })
        ));
        assert!(matches!(
            critical_coefficient(kg(1.0), newton_per_meter(-5.0)),
            Err(DynamicsError::Stiffness { .. })
        ));
        assert!(matches!(
            damping_ratio(kg(-1.0), k, newton_second_per_meter(10.0)),
            Err(DynamicsError::Mass { .. })
        ));
    }

    #[test]
    fn negative_coefficient_gives_negative_ratio() {
        let zeta = damping_ratio(kg(1.0), newton_per_meter(200.0), newton_second_per_meter(-10.0))
            .unwrap();
        assert!(zeta.get::<ratio>() < 0.0);
    }

    #[test]
    fn classification() {
        let classify = |zeta: f64| DampingRegime::classify(Ratio::new::<ratio>(zeta));

        assert_eq!(classify(0.0), DampingRegime::Underdamped);
        assert_eq!(classify(0.5), DampingRegime::Underdamped);
        assert_eq!(classify(0.998), DampingRegime::Underdamped);
        assert_eq!(classify(0.9995), DampingRegime::CriticallyDamped);
        assert_eq!(classify(1.0), DampingRegime::CriticallyDamped);
        assert_eq!(classify(1.0005), DampingRegime::CriticallyDamped);
        assert_eq!(classify(1.002), DampingRegime::Overdamped);
        assert_eq!(classify(2.0), DampingRegime::Overdamped);

        assert_eq!(DampingRegime::Overdamped.to_string(), "overdamped");
    }
}
