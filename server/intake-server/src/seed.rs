//! Demo incidents loaded at startup with `--seed-demo`.

use intake_engine::{IntakeCoordinator, Submission};

const DEMO: [(&str, &str, &str, &str, &str); 4] = [
  ("12345-1234567-1", "03001234567", "F-6", "Verbal Abuse", "Catcalling near park"),
  ("54321-7654321-2", "03337654321", "F-10", "Physical Assault", "Attacked in street"),
  ("11111-1111111-1", "03211111111", "F-6", "Stalking", "Followed home"),
  ("22222-2222222-2", "03452222222", "F-6", "Verbal Abuse", "Harassed at bus stop"),
];

/// Register the demo incidents. Returns how many were added.
pub fn seed_demo(engine: &mut IntakeCoordinator) -> usize {
  for (cnic, phone, area, kind, description) in DEMO {
    engine.register(Submission {
      subject_id: cnic.to_string(),
      contact: phone.to_string(),
      zone: area.to_string(),
      category: kind.to_string(),
      details: description.to_string(),
    });
  }
  DEMO.len()
}
