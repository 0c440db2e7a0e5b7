use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    Nacional,
    Distrital,
    Departamental,
}

impl Jurisdiction {
    pub const fn ordered() -> [Self; 3] {
        [Self::Nacional, Self::Distrital, Self::Departamental]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Nacional => "Nacional (DIAN)",
            Self::Distrital => "Distrital (Bogotá)",
            Self::Departamental => "Departamental (Cundinamarca)",
        }
    }
}

/// Taxpayer category selected on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxpayerKind {
    PersonaJuridica,
    PersonaNatural,
}

impl TaxpayerKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PersonaJuridica => "Persona Jurídica",
            Self::PersonaNatural => "Persona Natural",
        }
    }
}

/// Which taxpayer categories an obligation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxpayerScope {
    All,
    JuridicaOnly,
    NaturalOnly,
}

impl TaxpayerScope {
    pub fn applies_to(self, kind: TaxpayerKind) -> bool {
        match self {
            Self::All => true,
            Self::JuridicaOnly => kind == TaxpayerKind::PersonaJuridica,
            Self::NaturalOnly => kind == TaxpayerKind::PersonaNatural,
        }
    }
}

/// How a rule turns a taxpayer key into a due date.
///
/// Digit-indexed rules tabulate only a start date; the concrete deadline is
/// the key-selected entry of the business-day sequence generated from it.
/// Fixed rules apply to every taxpayer on the same date and never touch the
/// calculator.
#[derive(Debug, Clone, Copy)]
pub enum DueDateRule {
    ByLastDigit { starts: NaiveDate },
    ByLastTwoDigits { starts: NaiveDate },
    Fixed { date: NaiveDate },
}

impl DueDateRule {
    /// Length of the business-day sequence the rule indexes into.
    pub fn horizon(&self) -> usize {
        match self {
            Self::ByLastDigit { .. } => 10,
            Self::ByLastTwoDigits { .. } => super::key::TWO_DIGIT_HORIZON,
            Self::Fixed { .. } => 0,
        }
    }
}

/// One row of a jurisdiction's filing calendar. Static configuration,
/// loaded once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct ObligationRule {
    pub key: &'static str,
    pub tax: &'static str,
    pub period: &'static str,
    pub jurisdiction: Jurisdiction,
    pub scope: TaxpayerScope,
    pub due: DueDateRule,
}

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error(
        "rule '{rule}' needs business-day index {index} but only {available} dates were generated"
    )]
    HorizonExceeded {
        rule: &'static str,
        index: usize,
        available: usize,
    },
}

/// Startup validation failures; fatal before the service accepts queries.
#[derive(Debug, thiserror::Error)]
pub enum CalendarConfigError {
    #[error("duplicate rule key '{0}'")]
    DuplicateRuleKey(&'static str),
    #[error(
        "rule '{rule}' needs {needed} business days but holiday coverage for {year} yields only {generated}"
    )]
    SequenceLeavesCoverage {
        rule: &'static str,
        needed: usize,
        generated: usize,
        year: i32,
    },
    #[error("rule '{rule}' has fixed due date {date}, which is not a business day")]
    FixedDateNotBusinessDay {
        rule: &'static str,
        date: NaiveDate,
    },
}
