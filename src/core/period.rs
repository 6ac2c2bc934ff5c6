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

//! Period granularity used for floor/ceil rounding.

use crate::core::constants::format::MAX_FRACTION_DIGITS;
use crate::core::errors::TimeError;
use chrono::{
    Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, Timelike,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Second,
    Minute,
    Hour,
    #[default]
    Day,
    /// ISO week, starting Monday.
    Week,
    Month,
    Quarter,
    Year,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Second => "second",
            Period::Minute => "minute",
            Period::Hour => "hour",
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Quarter => "quarter",
            Period::Year => "year",
        }
    }

    /// Start of the period containing `dt` (wall-clock, no zone).
    pub(crate) fn floor_naive(&self, dt: NaiveDateTime) -> Option<NaiveDateTime> {
        let date = dt.date();
        let midnight = NaiveTime::MIN;
        match self {
            Period::Second => dt.with_nanosecond(0),
            Period::Minute => dt.with_second(0)?.with_nanosecond(0),
            Period::Hour => dt.with_minute(0)?.with_second(0)?.with_nanosecond(0),
            Period::Day => Some(date.and_time(midnight)),
            Period::Week => {
                let back = i64::from(date.weekday().num_days_from_monday());
                // the first representable week starts mid-week
                let monday = date
                    .checked_sub_signed(Duration::days(back))
                    .unwrap_or(NaiveDate::MIN);
                Some(monday.and_time(midnight))
            }
            Period::Month => Some(date.with_day(1)?.and_time(midnight)),
            Period::Quarter => {
                let first_month = (date.month0() / 3) * 3 + 1;
                Some(NaiveDate::from_ymd_opt(date.year(), first_month, 1)?.and_time(midnight))
            }
            Period::Year => Some(NaiveDate::from_ymd_opt(date.year(), 1, 1)?.and_time(midnight)),
        }
    }

    /// Start of the period after the one starting at `floor`.
    pub(crate) fn step_naive(&self, floor: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            Period::Second => floor.checked_add_signed(Duration::seconds(1)),
            Period::Minute => floor.checked_add_signed(Duration::minutes(1)),
            Period::Hour => floor.checked_add_signed(Duration::hours(1)),
            Period::Day => floor.checked_add_signed(Duration::days(1)),
            Period::Week => floor.checked_add_signed(Duration::weeks(1)),
            Period::Month => floor.checked_add_months(Months::new(1)),
            Period::Quarter => floor.checked_add_months(Months::new(3)),
            Period::Year => floor.checked_add_months(Months::new(12)),
        }
    }

    /// Last representable microsecond of the period containing `dt`.
    /// The final period chrono can hold ends at `NaiveDateTime::MAX`.
    pub(crate) fn ceil_naive(&self, dt: NaiveDateTime) -> Option<NaiveDateTime> {
        match self.step_naive(self.floor_naive(dt)?) {
            Some(next) => next.checked_sub_signed(Duration::microseconds(1)),
            None => Some(NaiveDateTime::MAX.trunc_subsecs(MAX_FRACTION_DIGITS as u16)),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower.strip_suffix('s').unwrap_or(&lower);
        match name {
            "second" => Ok(Period::Second),
            "minute" => Ok(Period::Minute),
            "hour" => Ok(Period::Hour),
            "day" => Ok(Period::Day),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "quarter" => Ok(Period::Quarter),
            "year" => Ok(Period::Year),
            _ => Err(TimeError::InvalidPeriod(s.to_string())),
        }
    }
}
