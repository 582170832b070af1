//! Severity scoring and the urgency-ordered view over registered incidents.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use crate::types::{Incident, IncidentId};

/// Severity score for an incident category. Exact, case-sensitive match;
/// anything unrecognised scores 0.
pub fn severity_score(category: &str) -> u8 {
  match category {
    "Physical Assault" => 3,
    "Stalking" => 2,
    "Verbal Abuse" => 1,
    _ => 0,
  }
}

/// Persistent ordering of incident ids by descending severity. Equal scores
/// keep insertion order (ascending id). Entries are never removed.
#[derive(Debug, Default)]
pub struct UrgencyRanker {
  order: BTreeSet<(Reverse<u8>, IncidentId)>,
}

impl UrgencyRanker {
  pub fn new() -> Self {
    Self::default()
  }

  /// Index an incident under its category's score.
  pub fn insert(&mut self, incident: &Incident) -> u8 {
    let score = severity_score(incident.category());
    self.order.insert((Reverse(score), incident.id()));
    score
  }

  /// `(id, score)` pairs, most severe first.
  pub fn iter(&self) -> impl Iterator<Item = (IncidentId, u8)> + '_ {
    self.order.iter().map(|&(Reverse(score), id)| (id, score))
  }

  pub fn len(&self) -> usize {
    self.order.len()
  }

  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }
}
