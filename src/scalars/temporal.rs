//! Date, time and duration scalars.
//!
//! DateTime is the timezone-aware variant: every accepted form must
//! carry an offset, and a parseable-but-naive value is a domain error
//! of its own. NaiveDateTime has no offset requirement and additionally
//! accepts unix timestamps (converted through the UTC epoch).

use chrono::{DateTime as ChronoDateTime, FixedOffset, SecondsFormat, TimeDelta, Timelike, Utc};

use crate::literal::Literal;
use crate::scalars::{numeric_literal, ScalarCodec, ScalarError, ScalarResult};
use crate::value::ScalarValue;

const DURATION_KEYS: &[&str] = &[
    "days",
    "seconds",
    "microseconds",
    "milliseconds",
    "minutes",
    "hours",
    "weeks",
];

fn parse_aware(scalar: &str, text: &str) -> ScalarResult<ChronoDateTime<FixedOffset>> {
    if let Ok(dt) = ChronoDateTime::parse_from_rfc3339(text) {
        return Ok(dt);
    }
    // a string that parses without its offset gets the dedicated error
    if parse_naive(text).is_ok() {
        return Err(ScalarError::Value(format!(
            "{} cannot represent naive datetime values (offset required): < {} >",
            scalar, text
        )));
    }
    Err(ScalarError::invalid("datetime", text))
}

fn parse_naive(text: &str) -> Result<chrono::NaiveDateTime, ()> {
    if let Ok(dt) = ChronoDateTime::parse_from_rfc3339(text) {
        return Ok(dt.naive_local());
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt);
    }
    if let Ok(d) = chrono::NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(d.and_time(chrono::NaiveTime::MIN));
    }
    Err(())
}

/// ISO-8601 without offset; fractional seconds only when present,
/// microsecond precision (the composite forms the host emits).
fn format_naive(dt: &chrono::NaiveDateTime) -> String {
    if dt.nanosecond() == 0 {
        dt.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        dt.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// Scalar which handles timezone-aware points in time
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTime;

impl ScalarCodec for DateTime {
    fn parse_literal(&self, literal: &Literal) -> Option<ScalarValue> {
        match literal {
            Literal::Int(_) | Literal::String(_) => {
                let staged = numeric_literal(literal)?;
                self.coerce_input(staged).ok()
            }
            _ => None,
        }
    }

    fn coerce_input(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        match value {
            ScalarValue::String(s) => {
                parse_aware("DateTime", &s).map(ScalarValue::DateTime)
            }
            ScalarValue::DateTime(dt) => Ok(ScalarValue::DateTime(dt)),
            ScalarValue::NaiveDateTime(dt) => Err(ScalarError::Value(format!(
                "DateTime cannot represent naive datetime values (offset required): < {} >",
                dt
            ))),
            other => Err(ScalarError::Type(format!(
                "DateTime cannot represent values other than strings and datetimes: < {} >",
                other
            ))),
        }
    }

    fn coerce_output(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        match value {
            ScalarValue::DateTime(dt) => Ok(ScalarValue::String(
                dt.to_rfc3339_opts(SecondsFormat::AutoSi, false),
            )),
            ScalarValue::String(s) => {
                parse_aware("DateTime", &s)?;
                Ok(ScalarValue::String(s))
            }
            other => Err(ScalarError::unrepresentable("DateTime", &other)),
        }
    }
}

/// Scalar which handles wall-clock datetimes without offset
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveDateTime;

impl NaiveDateTime {
    fn from_timestamp(&self, secs: i128) -> ScalarResult<ScalarValue> {
        let secs = i64::try_from(secs).map_err(|_| {
            ScalarError::Value(format!(
                "NaiveDateTime cannot represent timestamps of this magnitude: < {} >",
                secs
            ))
        })?;
        let dt = ChronoDateTime::<Utc>::from_timestamp(secs, 0).ok_or_else(|| {
            ScalarError::Value(format!(
                "NaiveDateTime cannot represent timestamps of this magnitude: < {} >",
                secs
            ))
        })?;
        Ok(ScalarValue::NaiveDateTime(dt.naive_utc()))
    }
}

impl ScalarCodec for NaiveDateTime {
    fn parse_literal(&self, literal: &Literal) -> Option<ScalarValue> {
        match literal {
            Literal::Int(_) | Literal::String(_) => {
                let staged = numeric_literal(literal)?;
                self.coerce_input(staged).ok()
            }
            _ => None,
        }
    }

    fn coerce_input(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        match value {
            ScalarValue::String(s) => parse_naive(&s)
                .map(ScalarValue::NaiveDateTime)
                .map_err(|_| ScalarError::invalid("datetime", s)),
            ScalarValue::Int(i) => self.from_timestamp(i128::from(i)),
            ScalarValue::BigInt(i) => self.from_timestamp(i),
            ScalarValue::NaiveDateTime(dt) => Ok(ScalarValue::NaiveDateTime(dt)),
            // offset-bearing values keep their wall-clock component
            ScalarValue::DateTime(dt) => Ok(ScalarValue::NaiveDateTime(dt.naive_local())),
            other => Err(ScalarError::Type(format!(
                "NaiveDateTime cannot represent values other than strings and ints: < {} >",
                other
            ))),
        }
    }

    fn coerce_output(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        match value {
            ScalarValue::NaiveDateTime(dt) => Ok(ScalarValue::String(format_naive(&dt))),
            ScalarValue::String(s) => match parse_naive(&s) {
                Ok(_) => Ok(ScalarValue::String(s)),
                Err(()) => Err(ScalarError::Value(format!(
                    "NaiveDateTime cannot represent value: < {} >",
                    s
                ))),
            },
            other => Err(ScalarError::unrepresentable("NaiveDateTime", &other)),
        }
    }
}

/// Scalar which handles durations written as comma-separated
/// `key=integer` pairs
#[derive(Debug, Clone, Copy, Default)]
pub struct Duration;

fn component(key: &str, amount: i64) -> Option<TimeDelta> {
    match key {
        "days" => TimeDelta::try_days(amount),
        "seconds" => TimeDelta::try_seconds(amount),
        "microseconds" => Some(TimeDelta::microseconds(amount)),
        "milliseconds" => TimeDelta::try_milliseconds(amount),
        "minutes" => TimeDelta::try_minutes(amount),
        "hours" => TimeDelta::try_hours(amount),
        "weeks" => TimeDelta::try_weeks(amount),
        _ => None,
    }
}

fn parse_duration(value: &str) -> ScalarResult<TimeDelta> {
    let stripped: String = value.chars().filter(|c| *c != ' ').collect();
    let mut total = TimeDelta::zero();

    for fragment in stripped.split(',') {
        if !fragment.contains('=') {
            return Err(ScalarError::Value(format!(
                "Duration key missing '=': < {} >",
                value
            )));
        }
        let mut parts = fragment.split('=');
        let key = parts.next().unwrap_or_default();
        let amount = parts.next().unwrap_or_default();
        if parts.next().is_some() {
            return Err(ScalarError::Value(format!(
                "Duration argument has more or less than 2 elements: < {} >",
                fragment
            )));
        }
        if !DURATION_KEYS.contains(&key) {
            return Err(ScalarError::Value(format!(
                "Duration argument has invalid key: < {} >",
                fragment
            )));
        }
        let amount: i64 = amount.parse().map_err(|_| {
            ScalarError::Value(format!(
                "Duration argument value is not an int: < {} >",
                fragment
            ))
        })?;
        let delta = component(key, amount).ok_or_else(|| {
            ScalarError::Value(format!(
                "Duration argument overflows: < {} >",
                fragment
            ))
        })?;
        total = total.checked_add(&delta).ok_or_else(|| {
            ScalarError::Value(format!("Duration overflows: < {} >", value))
        })?;
    }

    Ok(total)
}

/// Composite form: `[-D day(s), ]H:MM:SS[.ffffff]`, with the day count
/// carrying the sign and the time of day kept positive.
fn format_timedelta(td: &TimeDelta) -> String {
    let mut total_secs = td.num_seconds();
    let mut micros = td.subsec_nanos() as i64 / 1000;
    if micros < 0 {
        micros += 1_000_000;
        total_secs -= 1;
    }
    let days = total_secs.div_euclid(86400);
    let rem = total_secs.rem_euclid(86400);
    let hours = rem / 3600;
    let minutes = (rem % 3600) / 60;
    let seconds = rem % 60;

    let mut out = String::new();
    if days != 0 {
        let unit = if days == 1 || days == -1 { "day" } else { "days" };
        out.push_str(&format!("{} {}, ", days, unit));
    }
    out.push_str(&format!("{}:{:02}:{:02}", hours, minutes, seconds));
    if micros != 0 {
        out.push_str(&format!(".{:06}", micros));
    }
    out
}

impl ScalarCodec for Duration {
    fn parse_literal(&self, literal: &Literal) -> Option<ScalarValue> {
        match literal {
            Literal::String(s) => parse_duration(s).map(ScalarValue::Duration).ok(),
            _ => None,
        }
    }

    fn coerce_input(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        match value {
            ScalarValue::String(s) => parse_duration(&s).map(ScalarValue::Duration),
            other => Err(ScalarError::Type(format!(
                "Duration cannot represent values other than strings: < {} >",
                other
            ))),
        }
    }

    fn coerce_output(&self, value: ScalarValue) -> ScalarResult<ScalarValue> {
        match value {
            ScalarValue::Duration(td) => Ok(ScalarValue::String(format_timedelta(&td))),
            other => Err(ScalarError::unrepresentable("Duration", &other)),
        }
    }
}
