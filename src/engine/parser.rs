// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Date string parser.
//!
//! Accepts ISO-8601 style strings: `YYYY-MM-DD`, optionally followed by a
//! `T` or space and `HH:mm[:ss[.S...]]`, optionally followed by `Z` or a
//! `±HH:MM` / `±HHMM` / `±HH` offset (one separating space allowed).
//! Strings without an offset are read as UTC.

use crate::core::errors::{Result, TimeError};
use crate::core::moment::Moment;
use crate::core::zone::parse_offset;
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};
use tracing::{debug, trace};

const DATE_LEN: usize = 10;
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse(input: &str) -> Result<Moment> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeError::parse(input, "empty input"));
    }
    if trimmed
        .strip_prefix('-')
        .unwrap_or(trimmed)
        .bytes()
        .all(|b| b.is_ascii_digit())
    {
        // epochs must be passed as DateValue::Epoch
        return Err(TimeError::parse(input, "bare number is not a date string"));
    }

    let normalized = normalize_separator(trimmed);
    let (body, offset) = split_offset(&normalized).map_err(|reason| {
        debug!(input, reason, "Rejected date offset");
        TimeError::parse(input, reason)
    })?;
    let naive = parse_naive(body).ok_or_else(|| {
        debug!(input, "Unrecognised date format");
        TimeError::parse(input, "unrecognised date format")
    })?;

    let dt = offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| TimeError::parse(input, "date out of range for offset"))?;
    trace!(input, parsed = %dt, "Parsed date string");
    Ok(Moment::new(dt))
}

fn normalize_separator(s: &str) -> String {
    match s.as_bytes().get(DATE_LEN) {
        Some(b'T') | Some(b't') => format!("{} {}", &s[..DATE_LEN], &s[DATE_LEN + 1..]),
        _ => s.to_string(),
    }
}

/// Split a trailing zone designator off `s`. Missing designator means UTC.
fn split_offset(s: &str) -> std::result::Result<(&str, FixedOffset), &'static str> {
    if let Some(body) = s.strip_suffix(['Z', 'z']) {
        return Ok((body.trim_end(), Utc.fix()));
    }
    let Some(time_part) = s.get(DATE_LEN..) else {
        return Ok((s, Utc.fix()));
    };
    match time_part.rfind(['+', '-']) {
        Some(pos) => {
            let split = DATE_LEN + pos;
            let offset = parse_offset(&s[split..]).ok_or("invalid UTC offset")?;
            Ok((s[..split].trim_end(), offset))
        }
        None => Ok((s, Utc.fix())),
    }
}

fn parse_naive(body: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(body, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(body, DATE_FORMAT)
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}
