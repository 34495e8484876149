use crate::domain::model::TimeOffset;
use crate::domain::ports::{Clock, SystemClock};
use crate::utils::error::{Result, UtilError};
use chrono::format::{ParseErrorKind, Parsed, StrftimeItems};
use chrono::{Datelike, NaiveDateTime, TimeDelta};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
const DEFAULT_YEAR: i64 = 1900;
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Current local time, e.g. `2023-10-26T14:03:27.123456`.
pub fn current_datetime_iso() -> String {
    current_datetime_iso_at(&SystemClock)
}

pub fn current_datetime_iso_at(clock: &impl Clock) -> String {
    clock.now().format(ISO_FORMAT).to_string()
}

/// Parses `input` with a strftime-style `fmt`. Fields the format leaves out
/// default to 1900-01-01 00:00:00, so `%Y-%m` or `%H:%M` are accepted.
pub fn parse_datetime(input: &str, fmt: &str) -> Result<NaiveDateTime> {
    match NaiveDateTime::parse_from_str(input, fmt) {
        Ok(dt) => Ok(dt),
        Err(e) if e.kind() == ParseErrorKind::NotEnough => {
            parse_with_defaults(input, fmt).inspect_err(|e| {
                tracing::debug!("failed to parse '{}' with '{}': {}", input, fmt, e);
            })
        }
        Err(e) => {
            tracing::debug!("failed to parse '{}' with '{}': {}", input, fmt, e);
            Err(UtilError::DateParse(e))
        }
    }
}

fn parse_with_defaults(input: &str, fmt: &str) -> Result<NaiveDateTime> {
    let mut parsed = Parsed::new();
    chrono::format::parse(&mut parsed, input, StrftimeItems::new(fmt))?;

    let has_year = parsed.year().is_some()
        || parsed.year_div_100().is_some()
        || parsed.year_mod_100().is_some()
        || parsed.isoyear().is_some();
    // ordinal and week-based dates resolve without month/day
    let has_alt_date = parsed.ordinal().is_some()
        || parsed.isoweek().is_some()
        || parsed.week_from_sun().is_some()
        || parsed.week_from_mon().is_some();

    if !has_year {
        parsed.set_year(DEFAULT_YEAR)?;
    }
    if !has_alt_date {
        if parsed.month().is_none() {
            parsed.set_month(1)?;
        }
        if parsed.day().is_none() {
            parsed.set_day(1)?;
        }
    }
    if parsed.hour_div_12().is_none() {
        parsed.set_ampm(false)?;
    }
    if parsed.hour_mod_12().is_none() {
        parsed.set_hour12(12)?;
    }
    if parsed.minute().is_none() {
        parsed.set_minute(0)?;
    }
    if parsed.second().is_none() {
        parsed.set_second(0)?;
    }

    Ok(parsed.to_naive_datetime_with_offset(0)?)
}

/// Absolute number of whole days between two dates. The signed difference
/// is floored before the sign is dropped, so a negative partial day counts
/// as a full one.
pub fn days_between_dates(first: &str, second: &str, fmt: &str) -> Result<i64> {
    let first = parse_datetime(first, fmt)?;
    let second = parse_datetime(second, fmt)?;
    Ok(floor_days(second - first).abs())
}

fn floor_days(delta: TimeDelta) -> i64 {
    let days = delta.num_days();
    match TimeDelta::try_days(days) {
        Some(whole) if delta < whole => days - 1,
        _ => days,
    }
}

pub fn add_time_to_date(date: NaiveDateTime, offset: TimeOffset) -> Result<NaiveDateTime> {
    let delta = offset_to_delta(offset).ok_or_else(|| UtilError::overflow("time offset"))?;
    date.checked_add_signed(delta)
        .ok_or_else(|| UtilError::overflow("date addition"))
}

fn offset_to_delta(offset: TimeOffset) -> Option<TimeDelta> {
    TimeDelta::try_days(offset.days)?
        .checked_add(&TimeDelta::try_hours(offset.hours)?)?
        .checked_add(&TimeDelta::try_minutes(offset.minutes)?)?
        .checked_add(&TimeDelta::try_seconds(offset.seconds)?)
}

/// English weekday name, e.g. `Thursday`.
pub fn day_of_week(input: &str, fmt: &str) -> Result<String> {
    Ok(parse_datetime(input, fmt)?.format("%A").to_string())
}

pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn current_year() -> i32 {
    current_year_at(&SystemClock)
}

pub fn current_month() -> u32 {
    current_month_at(&SystemClock)
}

pub fn current_day() -> u32 {
    current_day_at(&SystemClock)
}

pub fn current_year_at(clock: &impl Clock) -> i32 {
    clock.now().year()
}

pub fn current_month_at(clock: &impl Clock) -> u32 {
    clock.now().month()
}

pub fn current_day_at(clock: &impl Clock) -> u32 {
    clock.now().day()
}
