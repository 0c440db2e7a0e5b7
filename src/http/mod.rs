//! HTTP surface: health/readiness/metrics plumbing and the deadline lookup
//! endpoint. Kept out of the binary so router-level tests can drive it
//! without binding a socket.

use crate::context::FilingContext;
use crate::error::AppError;
use crate::schedule::domain::{Jurisdiction, TaxpayerKind};
use crate::schedule::views::{DeadlineSummary, JurisdictionGroup, ObligationView};
use crate::schedule::{DeadlineReport, DUE_SOON_WINDOW_DAYS};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Local, NaiveDate};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub readiness: Arc<AtomicBool>,
    pub metrics: PrometheusHandle,
    pub context: Arc<FilingContext>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/obligations/lookup", post(lookup_endpoint))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    pub nit: String,
    /// Defaults to the form's preselected category.
    #[serde(default = "default_taxpayer_kind")]
    pub taxpayer_kind: TaxpayerKind,
    #[serde(default)]
    pub jurisdictions: Vec<Jurisdiction>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub today: Option<NaiveDate>,
    #[serde(default)]
    pub include_details: bool,
}

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub nit_last_digit: u8,
    pub nit_last_pair: String,
    pub taxpayer_kind: TaxpayerKind,
    pub today: NaiveDate,
    pub due_soon_window_days: i64,
    pub summary: DeadlineSummary,
    pub jurisdictions: Vec<JurisdictionGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obligations: Option<Vec<ObligationView>>,
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn lookup_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<LookupRequest>,
) -> Result<Json<LookupResponse>, AppError> {
    let LookupRequest {
        nit,
        taxpayer_kind,
        jurisdictions,
        today,
        include_details,
    } = payload;

    let schedule = state.context.lookup(&nit, taxpayer_kind, &jurisdictions)?;

    // "Today" only matters for coloring; the resolved dates above never
    // depend on it.
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let report = DeadlineReport::build(&schedule, today);

    let obligations = if include_details {
        Some(report.rows().to_vec())
    } else {
        None
    };

    Ok(Json(LookupResponse {
        nit_last_digit: schedule.key().last_digit(),
        nit_last_pair: schedule.key().last_pair(),
        taxpayer_kind,
        today,
        due_soon_window_days: DUE_SOON_WINDOW_DAYS,
        summary: report.summary(),
        jurisdictions: report.by_jurisdiction(),
        obligations,
    }))
}

fn default_taxpayer_kind() -> TaxpayerKind {
    TaxpayerKind::PersonaJuridica
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
