// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wall-clock stamps for the `updated` field of a division.
//!
//! Leagues are run on US Eastern time, so stamps are taken in
//! `America/New_York` regardless of the host's zone.

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Utc};
use chrono_tz::America::New_York;
use time::{Date, Month, PrimitiveDateTime, Time};

use crate::error::ApiError;

/// Returns the current US Eastern wall-clock time.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the converted components are out of range.
pub fn eastern_now() -> Result<PrimitiveDateTime, ApiError> {
    to_eastern(Utc::now())
}

/// Converts a UTC instant into US Eastern wall-clock time.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the converted components are out of range.
pub fn to_eastern(instant: DateTime<Utc>) -> Result<PrimitiveDateTime, ApiError> {
    let local: NaiveDateTime = instant.with_timezone(&New_York).naive_local();

    let month: Month = Month::try_from(component(local.month(), "month")?)
        .map_err(|e| out_of_range("month", &e))?;
    let date: Date = Date::from_calendar_date(local.year(), month, component(local.day(), "day")?)
        .map_err(|e| out_of_range("date", &e))?;
    let time: Time = Time::from_hms(
        component(local.hour(), "hour")?,
        component(local.minute(), "minute")?,
        component(local.second(), "second")?,
    )
    .map_err(|e| out_of_range("time", &e))?;

    Ok(PrimitiveDateTime::new(date, time))
}

fn component(value: u32, name: &str) -> Result<u8, ApiError> {
    u8::try_from(value).map_err(|e| out_of_range(name, &e))
}

fn out_of_range(name: &str, err: &dyn std::error::Error) -> ApiError {
    ApiError::Internal {
        message: format!("Eastern time {name} out of range: {err}"),
    }
}
