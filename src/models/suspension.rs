//! Spring–damper (suspension) models.
//!
//! - [`Spring`]: a linear coil spring (Hooke's law) with geometric limits.
//! - [`Damper`]: a damper described by its working fluid, with a clamped
//!   two-point viscosity–temperature model.
//! - [`critical_coefficient`], [`damping_ratio`], [`DampingRegime`]: the
//!   relations linking mass, stiffness and viscous damping.
//! - [`FreeVibration`]: the damped free response of a single-degree-of-freedom
//!   system, sampled into a [`ResponseCurve`].
//! - [`select`] / [`CatalogSelector`]: picks the spring and oil from two
//!   catalogs that best match a target natural frequency.
//!
//! # Example
//!
//! ```
//! use resoil::models::suspension::{Spring, SpringParameters, DampingRegime};
//! use resoil::support::units::newton_per_meter;
//! use uom::si::{f64::{Length, Mass}, length::meter, mass::kilogram, frequency::hertz};
//!
//! let spring = Spring::new(SpringParameters {
//!     name: "Spring A".into(),
//!     stiffness: newton_per_meter(200.0),
//!     free_length: Length::new::<meter>(0.1),
//!     max_deflection: Length::new::<meter>(0.02),
//!     inner_diameter: Length::new::<meter>(0.02),
//!     outer_diameter: Length::new::<meter>(0.03),
//! })
//! .unwrap();
//!
//! let f = spring.natural_frequency(Mass::new::<kilogram>(1.0)).unwrap();
//! assert!((f.get::<hertz>() - 2.251).abs() < 1e-3);
//! ```

mod damper;
mod damping;
mod error;
mod response;
mod selection;
mod spring;

pub use damper::{Damper, DamperParameters, DamperParametersError};
pub use damping::{
    CRITICAL_BAND, DampingRegime, critical_coefficient, damping_coefficient, damping_ratio,
};
pub use error::DynamicsError;
pub use response::{FreeVibration, PLOT_SIZE, ResponseCurve, ResponseError, ResponseSample};
pub use selection::{
    CatalogSelector, ConfigError, DEFAULT_OIL_COLUMN, DEFAULT_SPRING_COLUMN, Selection,
    SelectionConfig, SelectionError, SelectionInput, select,
};
pub use spring::{Spring, SpringParameters, SpringParametersError};
