//! Shared validation helpers for inbound HTTP adapters.

use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use uuid::Uuid;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidUuid,
    InvalidDate,
    InvalidTime,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::InvalidTime => "invalid_time",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

fn invalid_value_error(
    field: FieldName,
    message: String,
    code: ErrorCode,
    value: &str,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

pub(crate) fn parse_uuid(value: &str, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(value).map_err(|_| {
        let name = field.as_str();
        invalid_value_error(
            field,
            format!("{name} must be a valid UUID"),
            ErrorCode::InvalidUuid,
            value,
        )
    })
}

/// Parse an ISO `YYYY-MM-DD` calendar date.
pub(crate) fn parse_date(value: &str, field: FieldName) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        let name = field.as_str();
        invalid_value_error(
            field,
            format!("{name} must be a date in YYYY-MM-DD form"),
            ErrorCode::InvalidDate,
            value,
        )
    })
}

/// Parse a wall-clock time, with or without seconds.
pub(crate) fn parse_time(value: &str, field: FieldName) -> Result<NaiveTime, Error> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| {
            let name = field.as_str();
            invalid_value_error(
                field,
                format!("{name} must be a time in HH:MM form"),
                ErrorCode::InvalidTime,
                value,
            )
        })
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    fn detail(err: &Error, key: &str) -> String {
        err.details
            .as_ref()
            .and_then(|details| details.get(key))
            .and_then(serde_json::Value::as_str)
            .expect("detail present")
            .to_owned()
    }

    #[test]
    fn valid_uuid_parses() {
        let parsed = parse_uuid(
            "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            FieldName::new("eventId"),
        )
        .expect("valid uuid");
        assert_eq!(
            parsed.to_string(),
            "3fa85f64-5717-4562-b3fc-2c963f66afa6"
        );
    }

    #[test]
    fn invalid_uuid_reports_field_and_value() {
        let err = parse_uuid("not-a-uuid", FieldName::new("eventId")).expect_err("invalid uuid");
        assert_eq!(detail(&err, "field"), "eventId");
        assert_eq!(detail(&err, "value"), "not-a-uuid");
        assert_eq!(detail(&err, "code"), "invalid_uuid");
    }

    #[rstest]
    #[case("2026-09-12")]
    #[case(" 2026-09-12 ")]
    fn valid_dates_parse(#[case] raw: &str) {
        let parsed = parse_date(raw, FieldName::new("date")).expect("valid date");
        assert_eq!(parsed.to_string(), "2026-09-12");
    }

    #[rstest]
    #[case("12/09/2026")]
    #[case("2026-13-01")]
    #[case("")]
    fn invalid_dates_are_rejected(#[case] raw: &str) {
        let err = parse_date(raw, FieldName::new("date")).expect_err("invalid date");
        assert_eq!(detail(&err, "code"), "invalid_date");
    }

    #[rstest]
    #[case("18:30", 18, 30)]
    #[case("18:30:45", 18, 30)]
    #[case("07:05", 7, 5)]
    fn valid_times_parse(#[case] raw: &str, #[case] hour: u32, #[case] minute: u32) {
        use chrono::Timelike;

        let parsed = parse_time(raw, FieldName::new("time")).expect("valid time");
        assert_eq!(parsed.hour(), hour);
        assert_eq!(parsed.minute(), minute);
    }

    #[rstest]
    #[case("6 pm")]
    #[case("25:00")]
    #[case("")]
    fn invalid_times_are_rejected(#[case] raw: &str) {
        let err = parse_time(raw, FieldName::new("time")).expect_err("invalid time");
        assert_eq!(detail(&err, "code"), "invalid_time");
    }
}
