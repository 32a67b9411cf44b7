//! Supporting utilities used by models.
//!
//! These modules are public because they are useful on their own, but their
//! APIs are not stable.
//!
//! - [`catalog`]: CSV component catalogs and nearest-value search
//! - [`constraint`]: numeric constraint types for validated parameters
//! - [`plot`]: PNG line charts
//! - [`units`]: quantities missing from [`uom`]

pub mod catalog;
pub mod constraint;
pub mod plot;
pub mod units;
