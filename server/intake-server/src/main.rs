//! Binary entrypoint for the intake server.

use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use intake_engine::IntakeCoordinator;
use intake_server::config::Cli;
use intake_server::{seed, AppState, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
  let cli = Cli::parse();
  init_tracing(&cli);

  let addr = cli.listen_addr()?;
  let mut engine = IntakeCoordinator::new(cli.engine_config());
  if cli.seed_demo {
    let seeded = seed::seed_demo(&mut engine);
    info!(count = seeded, "seeded demo incidents");
  }

  let state = Arc::new(AppState::new(engine, cli.credentials()));
  let app = intake_server::router(state);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  info!("intake-server listening on http://{}", addr);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  info!("intake-server shutting down");
  Ok(())
}

fn init_tracing(cli: &Cli) {
  let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| cli.log_level.clone().into());

  if cli.json {
    tracing_subscriber::registry()
      .with(env_filter)
      .with(tracing_subscriber::fmt::layer().json())
      .init();
  } else {
    tracing_subscriber::registry()
      .with(env_filter)
      .with(tracing_subscriber::fmt::layer())
      .init();
  }
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      warn!("failed to listen for Ctrl+C: {}", e);
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut signal) => {
        signal.recv().await;
      }
      Err(e) => {
        warn!("failed to install SIGTERM handler: {}", e);
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    _ = ctrl_c => info!("received Ctrl+C"),
    _ = terminate => info!("received terminate signal"),
  }
}
