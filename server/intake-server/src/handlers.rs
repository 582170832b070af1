//! HTTP handlers for the intake server.
//!
//! Bodies are decoded as JSON whatever their `Content-Type`, so browser
//! clients posting `text/plain` (or nothing) are served like JSON ones.

use axum::{body::Bytes, extract::State, Json};
use intake_engine::{IncidentId, Snapshot, Submission};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{Ack, CompletePayload, LoginPayload, StatusPayload};

fn decode<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
  Ok(serde_json::from_slice(body)?)
}

/// Wire ids are signed; anything below 1 can never have been assigned.
fn incident_id(raw: i64) -> Result<IncidentId, ApiError> {
  u64::try_from(raw)
    .ok()
    .filter(|&id| id > 0)
    .map(IncidentId)
    .ok_or_else(|| ApiError::NotFound(format!("incident {} not found", raw)))
}

pub async fn health() -> &'static str {
  "ok"
}

pub async fn submit(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Json<Ack>, ApiError> {
  let submission: Submission = decode(&body)?;
  let incident = state.engine.lock().await.register(submission);
  info!(id = %incident.id(), zone = incident.zone(), category = incident.category(), "submission received");

  Ok(Json(
    Ack::success()
      .with_message("Submission received")
      .with_complaint(incident),
  ))
}

pub async fn login(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Json<Ack>, ApiError> {
  let login: LoginPayload = decode(&body)?;
  if state.credentials.check(&login.username, &login.password) {
    info!(username = %login.username, "admin login");
    Ok(Json(Ack::success()))
  } else {
    warn!(username = %login.username, "admin login rejected");
    Err(ApiError::Unauthorized)
  }
}

pub async fn dashboard(State(state): State<Arc<AppState>>) -> Json<Snapshot> {
  Json(state.engine.lock().await.aggregate())
}

pub async fn complete(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Json<Ack>, ApiError> {
  let CompletePayload { id } = decode(&body)?;
  let id = incident_id(id)?;
  state.engine.lock().await.close(id)?;
  info!(id = %id, "incident completed");
  Ok(Json(Ack::success()))
}

pub async fn update_status(
  State(state): State<Arc<AppState>>,
  body: Bytes,
) -> Result<Json<Ack>, ApiError> {
  let StatusPayload { id, status } = decode(&body)?;
  let id = incident_id(id)?;
  state.engine.lock().await.change_status(id, &status)?;
  info!(id = %id, status = %status, "incident status updated");
  Ok(Json(Ack::success()))
}
