//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (length, mass, viscosity,
//! temperature). Two quantities needed for suspension sizing are missing
//! from [`uom`] and are defined here:
//!
//! - [`SpringRate`]: force per unit deflection, N/m in SI
//! - [`DampingCoefficient`]: force per unit velocity, N·s/m in SI
//! - [`KinematicViscosity`]: a readable name for uom's L²·T⁻¹ quantity
//!
//! ```
//! use resoil::support::units::{newton_per_meter, SpringRate};
//!
//! let k: SpringRate = newton_per_meter(200.0);
//! assert_eq!(k.value, 200.0);
//! ```

mod quantities;

pub use quantities::{
    DampingCoefficient, KinematicViscosity, SpringRate, newton_per_meter, newton_second_per_meter,
};
