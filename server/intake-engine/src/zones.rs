//! Per-zone incident counters and hotspot detection.

use std::collections::HashMap;

use crate::types::ZoneCount;

/// Counts incidents per zone label. Zones keep the order in which they were
/// first seen (pre-seeded zones first), and that order is the hotspot order.
#[derive(Debug)]
pub struct ZoneTracker {
  threshold: u32,
  zones: Vec<ZoneCount>,
  index: HashMap<String, usize>,
}

impl ZoneTracker {
  pub fn new<I, S>(threshold: u32, known_zones: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let mut tracker = Self {
      threshold,
      zones: Vec::new(),
      index: HashMap::new(),
    };
    for zone in known_zones {
      let zone: String = zone.into();
      tracker.slot(&zone);
    }
    tracker
  }

  /// Entry for `zone`; allocates only when the zone is new.
  fn slot(&mut self, zone: &str) -> &mut ZoneCount {
    let pos = match self.index.get(zone) {
      Some(&pos) => pos,
      None => {
        let pos = self.zones.len();
        self.index.insert(zone.to_string(), pos);
        self.zones.push(ZoneCount {
          name: zone.to_string(),
          count: 0,
        });
        pos
      }
    };
    &mut self.zones[pos]
  }

  /// Count one incident in `zone`, creating the zone if unseen. Returns the new count.
  pub fn record_incident(&mut self, zone: &str) -> u32 {
    let entry = self.slot(zone);
    entry.count += 1;
    entry.count
  }

  pub fn count(&self, zone: &str) -> Option<u32> {
    self.index.get(zone).map(|&pos| self.zones[pos].count)
  }

  /// Zones whose count is strictly above the threshold.
  pub fn hotspots(&self) -> Vec<ZoneCount> {
    self
      .zones
      .iter()
      .filter(|z| z.count > self.threshold)
      .cloned()
      .collect()
  }

  pub fn is_hotspot(&self, zone: &str) -> bool {
    self.count(zone).is_some_and(|c| c > self.threshold)
  }

  pub fn threshold(&self) -> u32 {
    self.threshold
  }

  /// Number of distinct zones tracked, including pre-seeded ones.
  pub fn len(&self) -> usize {
    self.zones.len()
  }

  pub fn is_empty(&self) -> bool {
    self.zones.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_zones_start_at_zero() {
    let tracker = ZoneTracker::new(2, ["F-6", "F-7"]);
    assert_eq!(tracker.count("F-6"), Some(0));
    assert_eq!(tracker.count("G-9"), None);
    assert_eq!(tracker.len(), 2);
    assert!(tracker.hotspots().is_empty());
  }

  #[test]
  fn unknown_zone_created_on_first_incident() {
    let mut tracker = ZoneTracker::new(2, Vec::<String>::new());
    assert!(tracker.is_empty());
    assert_eq!(tracker.record_incident("G-9"), 1);
    assert_eq!(tracker.record_incident("G-9"), 2);
    assert_eq!(tracker.count("G-9"), Some(2));
  }

  #[test]
  fn hotspot_requires_strictly_more_than_threshold() {
    let mut tracker = ZoneTracker::new(2, ["F-6"]);
    tracker.record_incident("F-6");
    tracker.record_incident("F-6");
    assert!(!tracker.is_hotspot("F-6"));
    assert!(tracker.hotspots().is_empty());

    tracker.record_incident("F-6");
    assert!(tracker.is_hotspot("F-6"));
    assert_eq!(
      tracker.hotspots(),
      vec![ZoneCount {
        name: "F-6".into(),
        count: 3
      }]
    );
  }

  #[test]
  fn hotspots_follow_first_seen_order() {
    let mut tracker = ZoneTracker::new(0, ["F-7", "F-6"]);
    tracker.record_incident("Z-1");
    tracker.record_incident("F-6");
    tracker.record_incident("F-7");

    let names: Vec<String> = tracker.hotspots().into_iter().map(|z| z.name).collect();
    assert_eq!(names, vec!["F-7", "F-6", "Z-1"]);
  }

  #[test]
  fn repeat_incidents_reuse_the_existing_entry() {
    let mut tracker = ZoneTracker::new(2, ["F-6"]);
    for expected in 1..=4 {
      assert_eq!(tracker.record_incident("F-6"), expected);
    }
    assert_eq!(tracker.len(), 1);
    assert_eq!(tracker.count("F-6"), Some(4));
  }

  #[test]
  fn duplicate_known_zones_collapse() {
    let tracker = ZoneTracker::new(2, ["F-6", "F-6"]);
    assert_eq!(tracker.len(), 1);
  }
}
