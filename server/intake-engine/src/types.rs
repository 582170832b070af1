//! Core types for the intake engine (JSON contracts + internal models).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Initial status of every incident.
pub const STATUS_PENDING: &str = "Pending";
/// Status that counts towards `completed_count`.
pub const STATUS_COMPLETED: &str = "Completed";

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Sequential incident identifier. A plain integer on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncidentId(pub u64);

impl fmt::Display for IncidentId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// ---------------------------------------------------------------------------
// Inbound types (JSON contract: what the caller sends)
// ---------------------------------------------------------------------------

/// A new incident as submitted by a reporter. Unknown fields are silently ignored;
/// a missing field fails deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Submission {
  #[serde(rename = "cnic")]
  pub subject_id: String,
  #[serde(rename = "phone")]
  pub contact: String,
  #[serde(rename = "area")]
  pub zone: String,
  #[serde(rename = "type")]
  pub category: String,
  #[serde(rename = "description")]
  pub details: String,
}

// ---------------------------------------------------------------------------
// Incident record
// ---------------------------------------------------------------------------

/// One registered incident. Everything but `status` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Incident {
  id: IncidentId,
  #[serde(rename = "cnic")]
  subject_id: String,
  #[serde(rename = "phone")]
  contact: String,
  #[serde(rename = "area")]
  zone: String,
  #[serde(rename = "type")]
  category: String,
  #[serde(rename = "description")]
  details: String,
  status: String,
  #[serde(rename = "timestamp", with = "chrono::serde::ts_seconds")]
  recorded_at: DateTime<Utc>,
}

impl Incident {
  pub(crate) fn new(id: IncidentId, submission: Submission, recorded_at: DateTime<Utc>) -> Self {
    Self {
      id,
      subject_id: submission.subject_id,
      contact: submission.contact,
      zone: submission.zone,
      category: submission.category,
      details: submission.details,
      status: STATUS_PENDING.to_string(),
      recorded_at,
    }
  }

  pub fn id(&self) -> IncidentId {
    self.id
  }

  pub fn subject_id(&self) -> &str {
    &self.subject_id
  }

  pub fn contact(&self) -> &str {
    &self.contact
  }

  pub fn zone(&self) -> &str {
    &self.zone
  }

  pub fn category(&self) -> &str {
    &self.category
  }

  pub fn details(&self) -> &str {
    &self.details
  }

  pub fn status(&self) -> &str {
    &self.status
  }

  pub fn is_completed(&self) -> bool {
    self.status == STATUS_COMPLETED
  }

  pub fn recorded_at(&self) -> DateTime<Utc> {
    self.recorded_at
  }

  /// Swap in a new status, returning the old one.
  pub(crate) fn replace_status(&mut self, status: impl Into<String>) -> String {
    std::mem::replace(&mut self.status, status.into())
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract: what we emit)
// ---------------------------------------------------------------------------

/// An incident as it appears in the priority view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedIncident {
  #[serde(flatten)]
  pub incident: Incident,
  pub severity_score: u8,
}

/// Incident count for one zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneCount {
  pub name: String,
  pub count: u32,
}

/// Dashboard view, computed fresh from engine state on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
  pub completed_count: u64,
  pub total_complaints: u64,
  pub red_zones: Vec<ZoneCount>,
  pub priority_queue: Vec<RankedIncident>,
  pub all_complaints: Vec<Incident>,
}
