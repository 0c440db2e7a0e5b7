use super::domain::Jurisdiction;
use super::instance::{ObligationInstance, TaxpayerSchedule};
use super::views::{DeadlineSummary, JurisdictionGroup, ObligationView};
use chrono::NaiveDate;
use serde::Serialize;

/// Deadlines at most this many days out are flagged "Urgente".
pub const DUE_SOON_WINDOW_DAYS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineStatus {
    Vencido,
    Urgente,
    ATiempo,
}

impl DeadlineStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vencido => "Vencido",
            Self::Urgente => "Urgente",
            Self::ATiempo => "A tiempo",
        }
    }

    fn for_days_remaining(days: i64) -> Self {
        if days < 0 {
            Self::Vencido
        } else if days <= DUE_SOON_WINDOW_DAYS {
            Self::Urgente
        } else {
            Self::ATiempo
        }
    }
}

/// Presentation-side annotation of a resolved schedule against a reference
/// date. This is the only place "today" enters the picture; the schedule
/// itself is clock-free.
#[derive(Debug)]
pub struct DeadlineReport {
    today: NaiveDate,
    rows: Vec<ObligationView>,
}

impl DeadlineReport {
    pub fn build(schedule: &TaxpayerSchedule, today: NaiveDate) -> Self {
        let mut rows: Vec<ObligationView> = schedule
            .obligations()
            .iter()
            .map(|obligation| to_view(obligation, today))
            .collect();
        rows.sort_by(|a, b| a.due_date.cmp(&b.due_date).then(a.key.cmp(b.key)));

        Self { today, rows }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// All obligations, sorted by due date.
    pub fn rows(&self) -> &[ObligationView] {
        &self.rows
    }

    /// Rows bucketed by jurisdiction in the declared order; jurisdictions
    /// with nothing to show are omitted.
    pub fn by_jurisdiction(&self) -> Vec<JurisdictionGroup> {
        Jurisdiction::ordered()
            .into_iter()
            .filter_map(|jurisdiction| {
                let obligations: Vec<ObligationView> = self
                    .rows
                    .iter()
                    .filter(|row| row.jurisdiction == jurisdiction)
                    .cloned()
                    .collect();
                if obligations.is_empty() {
                    None
                } else {
                    Some(JurisdictionGroup {
                        jurisdiction,
                        jurisdiction_label: jurisdiction.label(),
                        obligations,
                    })
                }
            })
            .collect()
    }

    pub fn summary(&self) -> DeadlineSummary {
        let mut summary = DeadlineSummary {
            total: self.rows.len(),
            overdue: 0,
            due_soon: 0,
            on_time: 0,
            next_due: None,
        };

        for row in &self.rows {
            match row.status {
                DeadlineStatus::Vencido => summary.overdue += 1,
                DeadlineStatus::Urgente => summary.due_soon += 1,
                DeadlineStatus::ATiempo => summary.on_time += 1,
            }
        }

        // Rows are date-sorted, so the first non-overdue row is the next
        // deadline to worry about.
        summary.next_due = self
            .rows
            .iter()
            .find(|row| row.status != DeadlineStatus::Vencido)
            .cloned();

        summary
    }
}

fn to_view(obligation: &ObligationInstance, today: NaiveDate) -> ObligationView {
    let days_remaining = (obligation.due_date - today).num_days();
    let status = DeadlineStatus::for_days_remaining(days_remaining);

    ObligationView {
        key: obligation.rule.key,
        tax: obligation.rule.tax,
        period: obligation.rule.period,
        jurisdiction: obligation.rule.jurisdiction,
        jurisdiction_label: obligation.rule.jurisdiction.label(),
        due_date: obligation.due_date,
        days_remaining,
        status,
        status_label: status.label(),
    }
}
