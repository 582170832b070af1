//! Request/response types for the intake server.

use intake_engine::Incident;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
  pub username: String,
  pub password: String,
}

/// Ids are read as signed integers so a negative id reports "not found"
/// rather than a malformed body.
#[derive(Debug, Deserialize)]
pub struct CompletePayload {
  pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct StatusPayload {
  pub id: i64,
  pub status: String,
}

/// Success envelope: `{"status":"success", ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct Ack {
  pub status: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub complaint: Option<Incident>,
}

impl Ack {
  pub fn success() -> Self {
    Self {
      status: "success",
      message: None,
      complaint: None,
    }
  }

  pub fn with_message(mut self, message: impl Into<String>) -> Self {
    self.message = Some(message.into());
    self
  }

  pub fn with_complaint(mut self, incident: Incident) -> Self {
    self.complaint = Some(incident);
    self
  }
}

/// Error envelope: `{"status":"error","message":...}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub status: &'static str,
  pub message: String,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      status: "error",
      message: message.into(),
    }
  }
}
