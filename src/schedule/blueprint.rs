use super::domain::{
    CalendarConfigError, DueDateRule, Jurisdiction, ObligationRule, TaxpayerKind, TaxpayerScope,
};
use crate::calendar::HolidayCalendar;
use chrono::NaiveDate;
use std::collections::HashSet;

/// The rule tables for a tax year, one canonical table per jurisdiction.
#[derive(Debug)]
pub struct FilingCalendar {
    rules: Vec<ObligationRule>,
}

impl FilingCalendar {
    /// Calendario tributario 2026: DIAN national deadlines plus the Bogotá
    /// district and Cundinamarca departmental calendars.
    pub fn colombia_2026() -> Self {
        Self {
            rules: colombia_2026_rules(),
        }
    }

    pub fn rules(&self) -> &[ObligationRule] {
        &self.rules
    }

    /// Rules applicable to a taxpayer category, optionally restricted to a
    /// jurisdiction selection. An empty selection means no filter.
    pub fn rules_for(
        &self,
        kind: TaxpayerKind,
        jurisdictions: &[Jurisdiction],
    ) -> Vec<&ObligationRule> {
        self.rules
            .iter()
            .filter(|rule| rule.scope.applies_to(kind))
            .filter(|rule| jurisdictions.is_empty() || jurisdictions.contains(&rule.jurisdiction))
            .collect()
    }

    /// Startup check that the tables and the holiday calendar agree.
    ///
    /// Generates every digit-indexed sequence in full and refuses any date
    /// outside holiday coverage, so a query can never scan into days the
    /// calendar has no data for. Fixed dates must themselves be business
    /// days inside coverage.
    pub fn validate(&self, holidays: &HolidayCalendar) -> Result<(), CalendarConfigError> {
        let mut keys = HashSet::new();
        for rule in &self.rules {
            if !keys.insert(rule.key) {
                return Err(CalendarConfigError::DuplicateRuleKey(rule.key));
            }

            match rule.due {
                DueDateRule::ByLastDigit { starts } | DueDateRule::ByLastTwoDigits { starts } => {
                    let sequence = holidays.business_day_sequence(starts, rule.due.horizon());
                    if sequence.len() < rule.due.horizon() {
                        return Err(CalendarConfigError::SequenceLeavesCoverage {
                            rule: rule.key,
                            needed: rule.due.horizon(),
                            generated: sequence.len(),
                            year: holidays.year(),
                        });
                    }
                }
                DueDateRule::Fixed { date } => {
                    if !holidays.covers(date) || !holidays.is_business_day(date) {
                        return Err(CalendarConfigError::FixedDateNotBusinessDay {
                            rule: rule.key,
                            date,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

fn ymd(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, m, d).expect("valid 2026 date")
}

fn colombia_2026_rules() -> Vec<ObligationRule> {
    vec![
        // --- Nacional (DIAN) ---
        ObligationRule {
            key: "dian_retefuente_enero",
            tax: "Retención en la Fuente",
            period: "Enero (declaración en febrero)",
            jurisdiction: Jurisdiction::Nacional,
            scope: TaxpayerScope::All,
            due: DueDateRule::ByLastDigit {
                starts: ymd(2, 10),
            },
        },
        ObligationRule {
            key: "dian_retefuente_febrero",
            tax: "Retención en la Fuente",
            period: "Febrero (declaración en marzo)",
            jurisdiction: Jurisdiction::Nacional,
            scope: TaxpayerScope::All,
            due: DueDateRule::ByLastDigit {
                starts: ymd(3, 10),
            },
        },
        ObligationRule {
            key: "dian_iva_bimestre_1",
            tax: "IVA Bimestral",
            period: "Bimestre enero-febrero (declaración en marzo)",
            jurisdiction: Jurisdiction::Nacional,
            scope: TaxpayerScope::All,
            due: DueDateRule::ByLastDigit {
                starts: ymd(3, 10),
            },
        },
        ObligationRule {
            key: "dian_renta_pj_cuota_1",
            tax: "Renta Personas Jurídicas",
            period: "Primera cuota (mayo)",
            jurisdiction: Jurisdiction::Nacional,
            scope: TaxpayerScope::JuridicaOnly,
            due: DueDateRule::ByLastDigit {
                starts: ymd(5, 11),
            },
        },
        ObligationRule {
            key: "dian_renta_pn",
            tax: "Renta Personas Naturales",
            period: "Declaración anual (agosto-octubre)",
            jurisdiction: Jurisdiction::Nacional,
            scope: TaxpayerScope::NaturalOnly,
            due: DueDateRule::ByLastTwoDigits {
                starts: ymd(8, 12),
            },
        },
        // --- Distrital (Bogotá) ---
        ObligationRule {
            key: "bogota_ica_bimestre_1",
            tax: "ICA Bimestral",
            period: "Bimestre enero-febrero",
            jurisdiction: Jurisdiction::Distrital,
            scope: TaxpayerScope::All,
            due: DueDateRule::Fixed { date: ymd(3, 13) },
        },
        ObligationRule {
            key: "bogota_reteica_bimestre_1",
            tax: "Rete-ICA",
            period: "Bimestre enero-febrero",
            jurisdiction: Jurisdiction::Distrital,
            scope: TaxpayerScope::JuridicaOnly,
            due: DueDateRule::Fixed { date: ymd(3, 13) },
        },
        ObligationRule {
            key: "bogota_predial_descuento",
            tax: "Predial Unificado",
            period: "Pago con descuento del 10%",
            jurisdiction: Jurisdiction::Distrital,
            scope: TaxpayerScope::All,
            due: DueDateRule::Fixed { date: ymd(4, 10) },
        },
        ObligationRule {
            key: "bogota_predial_ordinario",
            tax: "Predial Unificado",
            period: "Pago sin descuento",
            jurisdiction: Jurisdiction::Distrital,
            scope: TaxpayerScope::All,
            due: DueDateRule::Fixed { date: ymd(6, 12) },
        },
        // --- Departamental (Cundinamarca) ---
        ObligationRule {
            key: "cundinamarca_vehiculos_descuento",
            tax: "Vehículos Automotores",
            period: "Pago con descuento",
            jurisdiction: Jurisdiction::Departamental,
            scope: TaxpayerScope::All,
            due: DueDateRule::Fixed { date: ymd(4, 17) },
        },
        ObligationRule {
            key: "cundinamarca_vehiculos_ordinario",
            tax: "Vehículos Automotores",
            period: "Pago sin descuento",
            jurisdiction: Jurisdiction::Departamental,
            scope: TaxpayerScope::All,
            due: DueDateRule::Fixed { date: ymd(6, 26) },
        },
    ]
}
