//! # Resoil
//!
//! Spring and damper sizing for single-degree-of-freedom suspensions.
//!
//! ## Crate layout
//!
//! - [`models`]: The suspension models, including a [`twine_core::Model`]
//!   adapter for catalog-based component selection.
//! - [`support`]: Supporting utilities used by models (catalogs, constraint
//!   types, units, plotting).
//! - [`session`]: The workbench holding the spring and damper a user is
//!   currently working with.
//! - [`shell`]: A line-oriented command interpreter over a [`session::Workbench`].
//! - [`cli`]: Argument parsing for the `resoil` binary.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable.

pub mod cli;
pub mod models;
pub mod session;
pub mod shell;
pub mod support;
