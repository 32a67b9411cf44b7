//! Suspension sizing models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module. Computation is exposed as plain
//! functions and methods on immutable parameter types; a
//! [`twine_core::Model`] implementation is provided where a model is a
//! natural input → output mapping (catalog selection), as a thin adapter
//! over those functions.

pub mod suspension;
