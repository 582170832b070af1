//! Append-only incident store: creation order plus an id index for point lookups.

use std::collections::HashMap;

use crate::types::{Incident, IncidentId};

/// Every incident ever registered, in creation order. The single source of
/// truth for status.
#[derive(Debug, Default)]
pub struct IncidentLedger {
  records: Vec<Incident>,
  index: HashMap<IncidentId, usize>,
}

impl IncidentLedger {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append to the end. Ids are assigned by the caller; if one repeats, lookups
  /// keep resolving to the earliest record.
  pub fn append(&mut self, incident: Incident) {
    let position = self.records.len();
    self.index.entry(incident.id()).or_insert(position);
    self.records.push(incident);
  }

  pub fn find(&self, id: IncidentId) -> Option<&Incident> {
    self.index.get(&id).map(|&pos| &self.records[pos])
  }

  /// Overwrite the status of `id` in place. Returns the previous status, or
  /// `None` when no such incident exists. Any string is accepted.
  pub fn set_status(&mut self, id: IncidentId, status: &str) -> Option<String> {
    let pos = *self.index.get(&id)?;
    Some(self.records[pos].replace_status(status))
  }

  /// Owned copies of every incident in creation order.
  pub fn snapshot_all(&self) -> Vec<Incident> {
    self.records.clone()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Incident> {
    self.records.iter()
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }
}
