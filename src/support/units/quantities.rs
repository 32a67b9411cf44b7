use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{DiffusionCoefficient, Force, Length, Velocity},
        force::newton,
        length::meter,
        velocity::meter_per_second,
    },
    typenum::{N1, N2, P1, Z0},
};

/// Spring rate (stiffness), N/m in SI.
pub type SpringRate = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Viscous damping coefficient, N·s/m in SI.
pub type DampingCoefficient = Quantity<ISQ<Z0, P1, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Kinematic viscosity, m²/s in SI.
///
/// uom files the L²·T⁻¹ dimension under `DiffusionCoefficient`; oil data
/// calls it kinematic viscosity. Units (including `centistokes`) live in
/// `uom::si::diffusion_coefficient`.
pub type KinematicViscosity = DiffusionCoefficient;

/// Creates a [`SpringRate`] from a value in newtons per meter.
#[must_use]
pub fn newton_per_meter(value: f64) -> SpringRate {
    Force::new::<newton>(value) / Length::new::<meter>(1.0)
}

/// Creates a [`DampingCoefficient`] from a value in newton-seconds per meter.
#[must_use]
pub fn newton_second_per_meter(value: f64) -> DampingCoefficient {
    Force::new::<newton>(value) / Velocity::new::<meter_per_second>(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        diffusion_coefficient::centistokes,
        dynamic_viscosity::pascal_second,
        f64::{DynamicViscosity, MassDensity, MassRate},
        length::millimeter,
        mass_density::gram_per_cubic_centimeter,
        mass_rate::kilogram_per_second,
    };

    #[test]
    fn spring_rate_times_deflection_is_force() {
        let k = newton_per_meter(200.0);
        let force: Force = k * Length::new::<millimeter>(10.0);
        assert_relative_eq!(force.get::<newton>(), 2.0);
    }

    #[test]
    fn damping_coefficient_shares_mass_rate_dimension() {
        let c = newton_second_per_meter(28.0);
        let as_mass_rate: MassRate = c;
        assert_relative_eq!(as_mass_rate.get::<kilogram_per_second>(), 28.0);
    }

    #[test]
    fn kinematic_viscosity_in_centistokes() {
        let nu = KinematicViscosity::new::<centistokes>(72.6);
        assert_relative_eq!(nu.value, 72.6e-6, max_relative = 1e-12);

        let eta: DynamicViscosity = nu * MassDensity::new::<gram_per_cubic_centimeter>(0.881);
        assert_relative_eq!(eta.get::<pascal_second>(), 0.063_960_6, max_relative = 1e-9);
    }
}
