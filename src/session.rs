//! The user's current working components.

use thiserror::Error;

use crate::models::suspension::{Damper, Spring};

/// A calculation needed a component that has not been configured yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no spring configured; create one with `spring` first")]
    MissingSpring,
    #[error("no damper configured; create one with `damper` first")]
    MissingDamper,
}

/// The spring and damper a session is currently working with.
///
/// Either slot may be empty. Setting a component replaces the previous one
/// wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbench {
    spring: Option<Spring>,
    damper: Option<Damper>,
}

impl Workbench {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `spring`, returning the one it replaces.
    pub fn set_spring(&mut self, spring: Spring) -> Option<Spring> {
        self.spring.replace(spring)
    }

    /// Stores `damper`, returning the one it replaces.
    pub fn set_damper(&mut self, damper: Damper) -> Option<Damper> {
        self.damper.replace(damper)
    }

    /// # Errors
    ///
    /// Returns [`SessionError::MissingSpring`] if no spring has been set.
    pub fn spring(&self) -> Result<&Spring, SessionError> {
        self.spring.as_ref().ok_or(SessionError::MissingSpring)
    }

    /// # Errors
    ///
    /// Returns [`SessionError::MissingDamper`] if no damper has been set.
    pub fn damper(&self) -> Result<&Damper, SessionError> {
        self.damper.as_ref().ok_or(SessionError::MissingDamper)
    }
}
