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

//! Time utility facade.
//!
//! `TimeTools` normalizes every input into a [`Moment`] and exposes the
//! helper operations over it. It owns two pieces of context: the clock that
//! answers "now", and the zone treated as local. Both are chosen by the
//! caller, so results do not depend on the host unless the caller asks.

use crate::core::errors::Result;
use crate::core::moment::Moment;
use crate::core::period::Period;
use crate::core::types::{DateInput, DateValue};
use crate::core::zone::Zone;
use crate::utils::time::{Clock, SystemClock};
use tracing::trace;

#[derive(Debug, Clone)]
pub struct TimeTools<C = SystemClock> {
    clock: C,
    local: Zone,
}

impl TimeTools<SystemClock> {
    /// System clock, host zone as local.
    pub fn new() -> Self {
        Self::with_clock(SystemClock, Zone::Local)
    }

    /// System clock with an explicit local zone.
    pub fn with_zone(local: Zone) -> Self {
        Self::with_clock(SystemClock, local)
    }
}

impl Default for TimeTools<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TimeTools<C> {
    pub fn with_clock(clock: C, local: Zone) -> Self {
        Self { clock, local }
    }

    pub fn local_zone(&self) -> &Zone {
        &self.local
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Input Normalizer: turn any input into a `Moment`.
    pub fn resolve(&self, input: &DateInput) -> Result<Moment> {
        let moment = match input {
            DateInput::Current => Moment::new(self.clock.now()),
            DateInput::Explicit(DateValue::Epoch(secs)) => Moment::from_epoch(*secs)?,
            DateInput::Explicit(DateValue::DateString(s)) => Moment::parse(s)?,
            DateInput::Explicit(DateValue::Moment(m)) => *m,
        };
        trace!(input = %input, resolved = %moment, "Resolved date input");
        Ok(moment)
    }

    /// Current instant as UTC epoch seconds.
    pub fn now_epoch(&self) -> i64 {
        self.clock.now().timestamp()
    }

    /// Current instant, UTC, default pattern.
    pub fn now(&self) -> String {
        Moment::new(self.clock.now()).to_string()
    }

    /// Current instant in the local zone, default pattern.
    pub fn now_local(&self) -> String {
        Moment::new(self.clock.now()).to_zone(&self.local).to_string()
    }

    /// `input` re-expressed in the local zone.
    pub fn local(&self, input: &DateInput) -> Result<String> {
        self.to_zone(input, &self.local)
    }

    pub fn to_zone(&self, input: &DateInput, zone: &Zone) -> Result<String> {
        Ok(self.resolve(input)?.to_zone(zone).to_string())
    }

    /// Monday through Friday in the local zone.
    pub fn is_week_day(&self, input: &DateInput) -> Result<bool> {
        Ok(self.resolve(input)?.to_zone(&self.local).is_week_day())
    }

    /// Epoch in, UTC date string out; anything else in, epoch out.
    ///
    /// Going string -> epoch -> string drops sub-second precision.
    pub fn convert(&self, input: &DateInput) -> Result<DateValue> {
        let moment = self.resolve(input)?;
        Ok(match input {
            DateInput::Explicit(DateValue::Epoch(_)) => {
                DateValue::DateString(moment.to_utc().to_string())
            }
            _ => DateValue::Epoch(moment.epoch()),
        })
    }

    /// True when both inputs fall in the same `period`, each bucketed in its
    /// own offset.
    pub fn same(&self, first: &DateInput, second: &DateInput, period: Period) -> Result<bool> {
        let a = self.resolve(first)?.ceil(period)?;
        let b = self.resolve(second)?.ceil(period)?;
        Ok(a.epoch() == b.epoch())
    }

    pub fn next_week(&self, input: &DateInput, weeks: i64) -> Result<String> {
        Ok(self.resolve(input)?.add_weeks(weeks)?.to_utc().to_string())
    }

    pub fn next_day(&self, input: &DateInput, days: i64) -> Result<String> {
        Ok(self.resolve(input)?.add_days(days)?.to_utc().to_string())
    }

    /// Adds calendar months, clamping the day to the target month's end.
    pub fn next_month(&self, input: &DateInput, months: i32) -> Result<String> {
        Ok(self.resolve(input)?.add_months(months)?.to_utc().to_string())
    }

    /// Format `input` in the local zone with a token pattern, e.g. `ddd`.
    pub fn parse_date(&self, input: &DateInput, pattern: &str) -> Result<String> {
        self.resolve(input)?.to_zone(&self.local).format(pattern)
    }
}
