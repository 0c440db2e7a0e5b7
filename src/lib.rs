//! Calendario tributario: resolves Colombian tax-filing due dates for a
//! taxpayer identifier (NIT) against per-jurisdiction rule tables and the
//! national holiday calendar.
//!
//! The core is deliberately small: a business-day calculator
//! ([`calendar`]), digit-to-index mappings and rule tables ([`schedule`]),
//! and a presentation layer that annotates resolved dates with days
//! remaining and a tri-state status. The [`http`] module and the binary
//! expose the same lookup over JSON and the command line.

pub mod calendar;
pub mod config;
pub mod context;
pub mod error;
pub mod http;
pub mod schedule;
pub mod telemetry;
