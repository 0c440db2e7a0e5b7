use crate::calendar::HolidayDataError;
use crate::config::ConfigError;
use crate::schedule::domain::{CalendarConfigError, ScheduleError};
use crate::schedule::NitError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    HolidayData(HolidayDataError),
    CalendarConfig(CalendarConfigError),
    InvalidNit(NitError),
    Schedule(ScheduleError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::HolidayData(err) => write!(f, "holiday data error: {}", err),
            AppError::CalendarConfig(err) => write!(f, "filing calendar error: {}", err),
            AppError::InvalidNit(err) => write!(f, "invalid identifier: {}", err),
            AppError::Schedule(err) => write!(f, "schedule resolution error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::HolidayData(err) => Some(err),
            AppError::CalendarConfig(err) => Some(err),
            AppError::InvalidNit(err) => Some(err),
            AppError::Schedule(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            // Bad user input is recoverable; everything else means the
            // service or its tables are broken.
            AppError::InvalidNit(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::HolidayData(_)
            | AppError::CalendarConfig(_)
            | AppError::Schedule(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<HolidayDataError> for AppError {
    fn from(value: HolidayDataError) -> Self {
        Self::HolidayData(value)
    }
}

impl From<CalendarConfigError> for AppError {
    fn from(value: CalendarConfigError) -> Self {
        Self::CalendarConfig(value)
    }
}

impl From<NitError> for AppError {
    fn from(value: NitError) -> Self {
        Self::InvalidNit(value)
    }
}

impl From<ScheduleError> for AppError {
    fn from(value: ScheduleError) -> Self {
        Self::Schedule(value)
    }
}
