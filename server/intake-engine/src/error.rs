//! Structured error types for the intake engine.

use thiserror::Error;

use crate::types::IncidentId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
  #[error("incident {0} not found")]
  NotFound(IncidentId),
}

impl IntakeError {
  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::NotFound(_))
  }
}
