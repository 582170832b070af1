//! Command-line / environment configuration for the intake server.

use clap::{Parser, ValueEnum};
use intake_engine::{CompletionCounting, Config, Credentials};
use std::net::SocketAddr;

use crate::error::ServerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CountingMode {
  /// Count incidents currently `Completed`.
  Derived,
  /// Count every transition to `Completed`, including repeats.
  Running,
}

impl From<CountingMode> for CompletionCounting {
  fn from(mode: CountingMode) -> Self {
    match mode {
      CountingMode::Derived => CompletionCounting::Derived,
      CountingMode::Running => CompletionCounting::Running,
    }
  }
}

/// Incident intake server
#[derive(Debug, Parser)]
#[command(name = "intake-server")]
#[command(about = "In-memory incident intake service", long_about = None)]
#[command(version)]
pub struct Cli {
  /// Listen address
  #[arg(short, long, env = "INTAKE_LISTEN_ADDR", default_value = "0.0.0.0:8080")]
  pub listen: String,

  /// Zones with more incidents than this are reported as hotspots
  #[arg(long, env = "INTAKE_RISK_THRESHOLD", default_value_t = 2)]
  pub risk_threshold: u32,

  /// Comma-separated zone labels to pre-seed (defaults to the built-in sector list)
  #[arg(long, env = "INTAKE_KNOWN_ZONES", value_delimiter = ',')]
  pub known_zones: Option<Vec<String>>,

  /// How completed_count is maintained
  #[arg(long, env = "INTAKE_COMPLETION_COUNTING", value_enum, default_value_t = CountingMode::Derived)]
  pub completion_counting: CountingMode,

  /// Admin username for the dashboard login
  #[arg(long, env = "INTAKE_ADMIN_USER", default_value = "admin")]
  pub admin_user: String,

  /// Admin password for the dashboard login
  #[arg(long, env = "INTAKE_ADMIN_PASSWORD", default_value = "password123", hide_env_values = true)]
  pub admin_password: String,

  /// Register a handful of demo incidents on startup
  #[arg(long, env = "INTAKE_SEED_DEMO")]
  pub seed_demo: bool,

  /// Log level
  #[arg(long, env = "INTAKE_LOG_LEVEL", default_value = "info")]
  pub log_level: String,

  /// Enable JSON logging
  #[arg(long, env = "INTAKE_LOG_JSON")]
  pub json: bool,
}

impl Cli {
  pub fn listen_addr(&self) -> Result<SocketAddr, ServerError> {
    self
      .listen
      .parse()
      .map_err(|e| ServerError::Config(format!("invalid listen address {}: {}", self.listen, e)))
  }

  pub fn engine_config(&self) -> Config {
    let defaults = Config::default();
    Config {
      risk_threshold: self.risk_threshold,
      known_zones: self.known_zones.clone().unwrap_or(defaults.known_zones),
      completion_counting: self.completion_counting.into(),
    }
  }

  pub fn credentials(&self) -> Credentials {
    Credentials::new(&self.admin_user, &self.admin_password)
  }
}
