//! Opt-in validation against the documented API limits.
//!
//! Nothing in the model calls this on its own: construction, building and
//! serialization accept any value. Callers who want early feedback call
//! [`Validate::validate`] (or [`Validate::violations`] to inspect every finding)
//! before sending.

mod problem;
mod validator;

pub use problem::{Problem, Violation, Violations};
pub use validator::Validator;

use crate::error::BlockError;
use bkit_domain::limits::Limits;
use tracing::debug;

/// A model that can be checked against [`Limits`].
pub trait Validate {
    /// Reports this value's violations into `validator`, relative to its current path.
    fn validate_into(&self, validator: &mut Validator<'_>);

    /// Collects every violation under `limits`.
    fn violations(&self, limits: &Limits) -> Violations {
        let mut validator = Validator::new(limits);
        self.validate_into(&mut validator);
        validator.finish()
    }

    /// Validates against custom limits.
    ///
    /// # Errors
    /// Returns [`BlockError::Validation`] carrying every violation found.
    fn validate_with(&self, limits: &Limits) -> Result<(), BlockError> {
        let violations = self.violations(limits);
        if violations.is_empty() {
            debug!("payload passed validation");
            return Ok(());
        }

        debug!(count = violations.len(), "payload failed validation");
        Err(BlockError::Validation { violations, context: None })
    }

    /// Validates against the documented defaults.
    ///
    /// # Errors
    /// Returns [`BlockError::Validation`] carrying every violation found.
    fn validate(&self) -> Result<(), BlockError> {
        self.validate_with(&Limits::default())
    }
}

impl<T: Validate> Validate for [T] {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        validator.each("", self, |validator, item| item.validate_into(validator));
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate_into(&self, validator: &mut Validator<'_>) {
        self.as_slice().validate_into(validator);
    }
}
