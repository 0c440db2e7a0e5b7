//! Obligation rule tables and the per-taxpayer deadline resolver.

mod blueprint;
pub mod domain;
mod instance;
mod key;
mod report;
pub mod views;

pub use blueprint::FilingCalendar;
pub use instance::{ObligationInstance, TaxpayerSchedule};
pub use key::{NitError, TaxpayerKey, TWO_DIGIT_HORIZON};
pub use report::{DeadlineReport, DeadlineStatus, DUE_SOON_WINDOW_DAYS};
