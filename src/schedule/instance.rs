use super::domain::{DueDateRule, ObligationRule, ScheduleError};
use super::key::TaxpayerKey;
use crate::calendar::HolidayCalendar;
use chrono::NaiveDate;

/// One resolved deadline: a rule applied to a concrete taxpayer key.
/// Ephemeral, rebuilt on every query.
#[derive(Debug, Clone)]
pub struct ObligationInstance {
    pub rule: ObligationRule,
    pub due_date: NaiveDate,
}

/// The full set of deadlines applicable to one taxpayer.
///
/// Resolution is a pure function of the rule tables, the key, and the
/// holiday calendar; nothing here reads the clock. "Days remaining" and
/// status coloring belong to the report layer.
#[derive(Debug)]
pub struct TaxpayerSchedule {
    key: TaxpayerKey,
    obligations: Vec<ObligationInstance>,
}

impl TaxpayerSchedule {
    pub fn resolve(
        rules: &[&ObligationRule],
        key: TaxpayerKey,
        holidays: &HolidayCalendar,
    ) -> Result<Self, ScheduleError> {
        let mut obligations = Vec::with_capacity(rules.len());
        for rule in rules {
            let due_date = resolve_due_date(rule, key, holidays)?;
            obligations.push(ObligationInstance {
                rule: (*rule).clone(),
                due_date,
            });
        }

        Ok(Self { key, obligations })
    }

    pub fn key(&self) -> TaxpayerKey {
        self.key
    }

    pub fn obligations(&self) -> &[ObligationInstance] {
        &self.obligations
    }
}

fn resolve_due_date(
    rule: &ObligationRule,
    key: TaxpayerKey,
    holidays: &HolidayCalendar,
) -> Result<NaiveDate, ScheduleError> {
    let (starts, index) = match rule.due {
        DueDateRule::Fixed { date } => return Ok(date),
        DueDateRule::ByLastDigit { starts } => (starts, key.single_digit_index()),
        DueDateRule::ByLastTwoDigits { starts } => (starts, key.two_digit_index()),
    };

    let sequence = holidays.business_day_sequence(starts, rule.due.horizon());
    sequence
        .get(index)
        .copied()
        .ok_or(ScheduleError::HorizonExceeded {
            rule: rule.key,
            index,
            available: sequence.len(),
        })
}
