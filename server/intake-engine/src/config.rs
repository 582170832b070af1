//! Engine configuration with sane defaults.

/// Sectors pre-seeded into the zone tracker so they show up with a zero count
/// before their first incident.
pub const DEFAULT_ZONES: [&str; 14] = [
  "F-6", "F-7", "F-8", "F-9", "F-10", "F-11", "E-8", "E-9", "E-10", "E-11", "I-8", "I-9", "I-10",
  "I-11",
];

/// How the dashboard's `completed_count` is maintained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionCounting {
  /// Number of incidents whose current status is exactly `Completed`.
  /// Repeated closes count once; moving away from `Completed` un-counts.
  #[default]
  Derived,
  /// Every successful transition to `Completed` bumps the counter, even when
  /// the incident was already completed. Never decremented.
  Running,
}

/// Tunables for the intake engine.
#[derive(Debug, Clone)]
pub struct Config {
  /// A zone is a hotspot when its incident count is strictly above this.
  pub risk_threshold: u32,
  /// Zone labels known up front (informational; unknown zones are added on first incident).
  pub known_zones: Vec<String>,
  pub completion_counting: CompletionCounting,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      risk_threshold: 2,
      known_zones: DEFAULT_ZONES.iter().map(|z| z.to_string()).collect(),
      completion_counting: CompletionCounting::default(),
    }
  }
}
