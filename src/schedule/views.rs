//! Serializable row and summary shapes handed to the presentation side
//! (JSON API, CLI printer). Labels ride along so clients render without
//! re-deriving display strings.

use super::domain::Jurisdiction;
use super::report::DeadlineStatus;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ObligationView {
    pub key: &'static str,
    pub tax: &'static str,
    pub period: &'static str,
    pub jurisdiction: Jurisdiction,
    pub jurisdiction_label: &'static str,
    pub due_date: NaiveDate,
    pub days_remaining: i64,
    pub status: DeadlineStatus,
    pub status_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct JurisdictionGroup {
    pub jurisdiction: Jurisdiction,
    pub jurisdiction_label: &'static str,
    pub obligations: Vec<ObligationView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeadlineSummary {
    pub total: usize,
    pub overdue: usize,
    pub due_soon: usize,
    pub on_time: usize,
    /// Earliest obligation not yet past, if any remain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_due: Option<ObligationView>,
}
