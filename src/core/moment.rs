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

//! Temporal Value.
//!
//! `Moment` is an instant paired with the fixed offset it is currently
//! viewed in. Precision is microseconds. Every operation returns a new
//! value; nothing is mutated in place.

use crate::core::constants::format::{DEFAULT_STRFTIME, MAX_FRACTION_DIGITS};
use crate::core::errors::{Result, TimeError};
use crate::core::period::Period;
use crate::core::zone::Zone;
use crate::engine::{formatter, parser};
use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Months, NaiveDateTime, SubsecRound, TimeZone, Utc,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "DateTime<FixedOffset>", into = "DateTime<FixedOffset>")]
pub struct Moment(DateTime<FixedOffset>);

impl Moment {
    pub fn new<Tz: TimeZone>(dt: DateTime<Tz>) -> Self {
        Self(dt.fixed_offset().trunc_subsecs(MAX_FRACTION_DIGITS as u16))
    }

    /// UTC moment for `secs` seconds since the epoch.
    pub fn from_epoch(secs: i64) -> Result<Self> {
        DateTime::from_timestamp(secs, 0)
            .map(Self::new)
            .ok_or_else(|| TimeError::parse(secs.to_string(), "epoch out of range"))
    }

    /// Parse a date string. Strings without an offset are taken as UTC.
    pub fn parse(s: &str) -> Result<Self> {
        parser::parse(s)
    }

    /// Epoch seconds, truncated toward negative infinity.
    pub fn epoch(&self) -> i64 {
        self.0.timestamp()
    }

    pub fn epoch_micros(&self) -> i64 {
        self.0.timestamp_micros()
    }

    pub fn offset(&self) -> FixedOffset {
        *self.0.offset()
    }

    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    pub fn to_utc(&self) -> Self {
        self.to_zone(&Zone::Utc)
    }

    pub fn to_zone(&self, zone: &Zone) -> Self {
        Self(zone.convert(&self.0))
    }

    /// ISO weekday, Monday = 1 .. Sunday = 7, in the current offset.
    pub fn iso_weekday(&self) -> u32 {
        self.0.weekday().number_from_monday()
    }

    pub fn is_week_day(&self) -> bool {
        self.iso_weekday() < 6
    }

    /// Render with a token pattern such as `YYYY-MM-DD` or `ddd`.
    pub fn format(&self, pattern: &str) -> Result<String> {
        formatter::format(self, pattern)
    }

    /// Start of the enclosing period, in the current offset. Clamps to
    /// `DateTime::<Utc>::MIN_UTC` at the bottom of chrono's range.
    pub fn floor(&self, period: Period) -> Result<Self> {
        let naive = period
            .floor_naive(self.wall_clock(period)?)
            .ok_or_else(|| out_of_range(self, period))?;
        Ok(self.rebuild(naive, DateTime::<Utc>::MIN_UTC))
    }

    /// Last microsecond of the enclosing period, in the current offset.
    /// Clamps to `DateTime::<Utc>::MAX_UTC` at the top of chrono's range.
    pub fn ceil(&self, period: Period) -> Result<Self> {
        let naive = period
            .ceil_naive(self.wall_clock(period)?)
            .ok_or_else(|| out_of_range(self, period))?;
        Ok(self.rebuild(naive, DateTime::<Utc>::MAX_UTC))
    }

    pub fn add_days(&self, days: i64) -> Result<Self> {
        let delta = Duration::try_days(days)
            .ok_or_else(|| TimeError::OutOfRange(format!("{} days", days)))?;
        self.shift(delta)
    }

    pub fn add_weeks(&self, weeks: i64) -> Result<Self> {
        let delta = Duration::try_weeks(weeks)
            .ok_or_else(|| TimeError::OutOfRange(format!("{} weeks", weeks)))?;
        self.shift(delta)
    }

    /// Calendar months; the day clamps to the end of a shorter month.
    pub fn add_months(&self, months: i32) -> Result<Self> {
        let step = Months::new(months.unsigned_abs());
        let shifted = if months >= 0 {
            self.0.checked_add_months(step)
        } else {
            self.0.checked_sub_months(step)
        };
        shifted
            .map(Self)
            .ok_or_else(|| TimeError::OutOfRange(format!("{} + {} months", self, months)))
    }

    fn shift(&self, delta: Duration) -> Result<Self> {
        self.0
            .checked_add_signed(delta)
            .map(Self)
            .ok_or_else(|| TimeError::OutOfRange(format!("{} + {}", self, delta)))
    }

    /// Local wall-clock time; `naive_local` panics when it leaves chrono's range.
    fn wall_clock(&self, period: Period) -> Result<NaiveDateTime> {
        let offset = Duration::seconds(i64::from(self.offset().local_minus_utc()));
        self.0
            .naive_utc()
            .checked_add_signed(offset)
            .ok_or_else(|| out_of_range(self, period))
    }

    fn rebuild(&self, naive: NaiveDateTime, bound: DateTime<Utc>) -> Self {
        let offset = self.offset();
        offset
            .from_local_datetime(&naive)
            .single()
            .map(Self::new)
            .unwrap_or_else(|| Self::new(bound.with_timezone(&offset)))
    }
}

fn out_of_range(moment: &Moment, period: Period) -> TimeError {
    TimeError::OutOfRange(format!("{} rounded to {}", moment, period))
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DEFAULT_STRFTIME))
    }
}

impl FromStr for Moment {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse(s)
    }
}

impl From<DateTime<Utc>> for Moment {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::new(dt)
    }
}

impl From<DateTime<FixedOffset>> for Moment {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::new(dt)
    }
}

impl From<Moment> for DateTime<FixedOffset> {
    fn from(moment: Moment) -> Self {
        moment.0
    }
}
