//! Incident intake engine: the in-memory core behind the intake service.
//!
//! Keeps an append-only ledger of incidents, a severity-ordered urgency view
//! and per-zone hotspot counters, and exposes them through a single
//! coordinator that keeps the three consistent.
//!
//! No DB, no network; pure computation + in-memory state.

pub mod config;
pub mod coordinator;
pub mod credentials;
pub mod error;
pub mod ledger;
pub mod ranker;
pub mod types;
pub mod zones;

pub use config::{CompletionCounting, Config};
pub use coordinator::IntakeCoordinator;
pub use credentials::Credentials;
pub use error::IntakeError;
pub use types::{Incident, IncidentId, RankedIncident, Snapshot, Submission, ZoneCount};
