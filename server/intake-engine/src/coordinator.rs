//! Intake coordinator: owns the ledger, ranker and zone tracker and keeps them
//! consistent across every mutation.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::config::{CompletionCounting, Config};
use crate::error::IntakeError;
use crate::ledger::IncidentLedger;
use crate::ranker::UrgencyRanker;
use crate::types::*;
use crate::zones::ZoneTracker;

/// Single entry point for incident creation and status changes.
///
/// All state lives in this value; callers sharing it across threads wrap the
/// whole coordinator in one lock so no half-applied registration is observable.
#[derive(Debug)]
pub struct IntakeCoordinator {
  config: Config,
  ledger: IncidentLedger,
  ranker: UrgencyRanker,
  zones: ZoneTracker,
  last_id: u64,
  completed: u64,
}

impl IntakeCoordinator {
  pub fn new(config: Config) -> Self {
    let zones = ZoneTracker::new(config.risk_threshold, config.known_zones.iter().cloned());
    Self {
      config,
      ledger: IncidentLedger::new(),
      ranker: UrgencyRanker::new(),
      zones,
      last_id: 0,
      completed: 0,
    }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Register a new incident stamped with the current time.
  pub fn register(&mut self, submission: Submission) -> Incident {
    self.register_at(submission, Utc::now())
  }

  /// Register a new incident with an explicit creation timestamp.
  ///
  /// Assigns the next id, then feeds the ledger, the urgency ranker and the
  /// zone tracker in one step.
  pub fn register_at(&mut self, submission: Submission, recorded_at: DateTime<Utc>) -> Incident {
    let id = IncidentId(self.last_id + 1);
    self.last_id = id.0;

    let incident = Incident::new(id, submission, recorded_at);
    let severity = self.ranker.insert(&incident);

    let was_hotspot = self.zones.is_hotspot(incident.zone());
    let zone_count = self.zones.record_incident(incident.zone());
    if !was_hotspot && self.zones.is_hotspot(incident.zone()) {
      info!(
        zone = incident.zone(),
        count = zone_count,
        threshold = self.zones.threshold(),
        "zone crossed risk threshold"
      );
    }

    self.ledger.append(incident.clone());
    debug!(id = %id, zone = incident.zone(), severity, "incident registered");
    incident
  }

  /// Mark an incident `Completed`.
  pub fn close(&mut self, id: IncidentId) -> Result<(), IntakeError> {
    self.transition(id, STATUS_COMPLETED)
  }

  /// Set an arbitrary status. `Completed` counts as a resolution.
  pub fn change_status(&mut self, id: IncidentId, status: &str) -> Result<(), IntakeError> {
    self.transition(id, status)
  }

  fn transition(&mut self, id: IncidentId, status: &str) -> Result<(), IntakeError> {
    let previous = self
      .ledger
      .set_status(id, status)
      .ok_or(IntakeError::NotFound(id))?;

    let was_completed = previous == STATUS_COMPLETED;
    let now_completed = status == STATUS_COMPLETED;
    match self.config.completion_counting {
      CompletionCounting::Running => {
        if now_completed {
          self.completed += 1;
        }
      }
      CompletionCounting::Derived => match (was_completed, now_completed) {
        (false, true) => self.completed += 1,
        (true, false) => self.completed -= 1,
        _ => {}
      },
    }

    debug!(id = %id, from = %previous, to = status, "incident status changed");
    Ok(())
  }

  /// All incidents, most severe first. Equal severities keep registration order.
  pub fn snapshot_by_severity(&self) -> Vec<RankedIncident> {
    self
      .ranker
      .iter()
      .filter_map(|(id, severity_score)| {
        self.ledger.find(id).map(|incident| RankedIncident {
          incident: incident.clone(),
          severity_score,
        })
      })
      .collect()
  }

  /// Dashboard view built from current state.
  pub fn aggregate(&self) -> Snapshot {
    Snapshot {
      completed_count: self.completed,
      total_complaints: self.last_id,
      red_zones: self.zones.hotspots(),
      priority_queue: self.snapshot_by_severity(),
      all_complaints: self.ledger.snapshot_all(),
    }
  }

  pub fn find(&self, id: IncidentId) -> Option<&Incident> {
    self.ledger.find(id)
  }

  pub fn zone_count(&self, zone: &str) -> Option<u32> {
    self.zones.count(zone)
  }

  pub fn completed_count(&self) -> u64 {
    self.completed
  }

  pub fn len(&self) -> usize {
    self.ledger.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ledger.is_empty()
  }
}

impl Default for IntakeCoordinator {
  fn default() -> Self {
    Self::with_defaults()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn submit(zone: &str, category: &str) -> Submission {
    Submission {
      subject_id: "12345-1234567-1".into(),
      contact: "03001234567".into(),
      zone: zone.into(),
      category: category.into(),
      details: "test".into(),
    }
  }

  fn running() -> IntakeCoordinator {
    IntakeCoordinator::new(Config {
      completion_counting: CompletionCounting::Running,
      ..Config::default()
    })
  }

  #[test]
  fn ids_start_at_one_and_increase() {
    let mut engine = IntakeCoordinator::with_defaults();
    let ids: Vec<u64> = (0..5)
      .map(|_| engine.register(submit("F-6", "Stalking")).id().0)
      .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(engine.aggregate().total_complaints, 5);
  }

  #[test]
  fn new_incident_is_pending() {
    let mut engine = IntakeCoordinator::with_defaults();
    let incident = engine.register(submit("F-6", "Stalking"));
    assert_eq!(incident.status(), STATUS_PENDING);
    assert_eq!(engine.find(incident.id()), Some(&incident));
  }

  #[test]
  fn register_updates_all_three_views() {
    let mut engine = IntakeCoordinator::with_defaults();
    engine.register(submit("Blue Area", "Other"));
    assert_eq!(engine.len(), 1);
    assert_eq!(engine.zone_count("Blue Area"), Some(1));
    assert_eq!(engine.snapshot_by_severity().len(), 1);
  }

  #[test]
  fn hotspot_and_priority_scenario() {
    let mut engine = IntakeCoordinator::with_defaults();
    let a = engine.register(submit("F-6", "Verbal Abuse"));
    let b = engine.register(submit("F-6", "Physical Assault"));
    let c = engine.register(submit("F-6", "Stalking"));

    let snapshot = engine.aggregate();
    assert_eq!(
      snapshot.red_zones,
      vec![ZoneCount {
        name: "F-6".into(),
        count: 3
      }]
    );
    let order: Vec<IncidentId> = snapshot.priority_queue.iter().map(|r| r.incident.id()).collect();
    assert_eq!(order, vec![b.id(), c.id(), a.id()]);
    let scores: Vec<u8> = snapshot.priority_queue.iter().map(|r| r.severity_score).collect();
    assert_eq!(scores, vec![3, 2, 1]);
  }

  #[test]
  fn close_marks_completed_and_counts() {
    let mut engine = IntakeCoordinator::with_defaults();
    let id = engine.register(submit("F-6", "Stalking")).id();
    engine.close(id).unwrap();
    assert_eq!(engine.find(id).unwrap().status(), STATUS_COMPLETED);
    assert_eq!(engine.completed_count(), 1);
  }

  #[test]
  fn close_unknown_id_is_not_found() {
    let mut engine = IntakeCoordinator::with_defaults();
    engine.register(submit("F-6", "Stalking"));
    let err = engine.close(IncidentId(42)).unwrap_err();
    assert_eq!(err, IntakeError::NotFound(IncidentId(42)));
    assert_eq!(engine.completed_count(), 0);
  }

  #[test]
  fn change_status_unknown_id_leaves_count() {
    let mut engine = IntakeCoordinator::with_defaults();
    let err = engine.change_status(IncidentId(999), STATUS_COMPLETED).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(engine.aggregate().completed_count, 0);
  }

  #[test]
  fn derived_counting_ignores_repeat_close() {
    let mut engine = IntakeCoordinator::with_defaults();
    let id = engine.register(submit("F-6", "Stalking")).id();
    engine.close(id).unwrap();
    engine.close(id).unwrap();
    engine.change_status(id, STATUS_COMPLETED).unwrap();
    assert_eq!(engine.completed_count(), 1);
  }

  #[test]
  fn derived_counting_tracks_reopen() {
    let mut engine = IntakeCoordinator::with_defaults();
    let id = engine.register(submit("F-6", "Stalking")).id();
    engine.close(id).unwrap();
    engine.change_status(id, "Investigating").unwrap();
    assert_eq!(engine.completed_count(), 0);
    engine.change_status(id, STATUS_COMPLETED).unwrap();
    assert_eq!(engine.completed_count(), 1);
  }

  #[test]
  fn running_counting_double_counts_repeat_close() {
    let mut engine = running();
    let id = engine.register(submit("F-6", "Stalking")).id();
    engine.close(id).unwrap();
    engine.close(id).unwrap();
    assert_eq!(engine.completed_count(), 2);

    engine.change_status(id, "Pending").unwrap();
    assert_eq!(engine.completed_count(), 2);
  }

  #[test]
  fn status_change_keeps_incident_in_both_views() {
    let mut engine = IntakeCoordinator::with_defaults();
    let id = engine.register(submit("F-6", "Stalking")).id();
    engine.change_status(id, "Archived").unwrap();

    let snapshot = engine.aggregate();
    assert_eq!(snapshot.all_complaints.len(), 1);
    assert_eq!(snapshot.priority_queue.len(), 1);
    assert_eq!(snapshot.priority_queue[0].incident.status(), "Archived");
  }

  #[test]
  fn custom_threshold_respected() {
    let mut engine = IntakeCoordinator::new(Config {
      risk_threshold: 0,
      known_zones: Vec::new(),
      ..Config::default()
    });
    engine.register(submit("Z-1", "Other"));
    assert_eq!(engine.aggregate().red_zones.len(), 1);
  }
}
