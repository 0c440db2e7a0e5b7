use crate::calendar::HolidayCalendar;
use crate::config::DataConfig;
use crate::error::AppError;
use crate::schedule::domain::{Jurisdiction, TaxpayerKind};
use crate::schedule::{FilingCalendar, TaxpayerKey, TaxpayerSchedule};
use tracing::info;

/// Tax year the compiled-in tables describe.
pub const TAX_YEAR: i32 = 2026;

/// Read-only lookup state: the rule tables plus the holiday calendar they
/// were validated against. Built once at startup, shared by the HTTP
/// handlers and the CLI, never mutated afterwards.
#[derive(Debug)]
pub struct FilingContext {
    calendar: FilingCalendar,
    holidays: HolidayCalendar,
}

impl FilingContext {
    /// Assemble and validate the context, honoring an operator-supplied
    /// holiday file when configured. Any failure here is fatal; the service
    /// must not answer queries from tables it could not validate.
    pub fn load(data: &DataConfig) -> Result<Self, AppError> {
        let holidays = match &data.holidays_csv {
            Some(path) => {
                let calendar = HolidayCalendar::from_csv_path(TAX_YEAR, path)?;
                info!(
                    path = %path.display(),
                    holidays = calendar.holiday_count(),
                    "loaded holiday calendar override"
                );
                calendar
            }
            None => HolidayCalendar::colombia_2026(),
        };

        let calendar = FilingCalendar::colombia_2026();
        calendar.validate(&holidays)?;

        Ok(Self { calendar, holidays })
    }

    /// The compiled-in tables, validated. Handy for tests and the CLI
    /// default path.
    pub fn colombia_2026() -> Result<Self, AppError> {
        let holidays = HolidayCalendar::colombia_2026();
        let calendar = FilingCalendar::colombia_2026();
        calendar.validate(&holidays)?;
        Ok(Self { calendar, holidays })
    }

    pub fn calendar(&self) -> &FilingCalendar {
        &self.calendar
    }

    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// Resolve every deadline applicable to `nit` under the given category
    /// and jurisdiction selection. Clock-free; pair the result with
    /// [`DeadlineReport::build`](crate::schedule::DeadlineReport::build)
    /// for presentation.
    pub fn lookup(
        &self,
        nit: &str,
        kind: TaxpayerKind,
        jurisdictions: &[Jurisdiction],
    ) -> Result<TaxpayerSchedule, AppError> {
        let key = TaxpayerKey::from_nit(nit)?;
        let rules = self.calendar.rules_for(kind, jurisdictions);
        let schedule = TaxpayerSchedule::resolve(&rules, key, &self.holidays)?;
        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HolidayDataError;
    use std::path::PathBuf;

    #[test]
    fn builtin_context_loads_and_validates() {
        let context = FilingContext::colombia_2026().expect("compiled-in tables valid");
        assert_eq!(context.holidays().year(), TAX_YEAR);
        assert!(!context.calendar().rules().is_empty());
    }

    #[test]
    fn lookup_rejects_invalid_nit() {
        let context = FilingContext::colombia_2026().expect("context loads");
        let error = context
            .lookup("900-123", TaxpayerKind::PersonaJuridica, &[])
            .expect_err("non numeric nit rejected");
        assert!(matches!(error, AppError::InvalidNit(_)));
    }

    #[test]
    fn missing_holiday_file_fails_load() {
        let data = DataConfig {
            holidays_csv: Some(PathBuf::from("./no-such-festivos.csv")),
        };
        let error = FilingContext::load(&data).expect_err("missing file is fatal");
        assert!(matches!(
            error,
            AppError::HolidayData(HolidayDataError::Io(_))
        ));
    }
}
