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

//! Input Types.
//!
//! Explicitly tagged inputs, so a date string is never mistaken for an
//! epoch and the current instant is never spelled as a magic string.

use crate::core::moment::Moment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A concrete date value supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateValue {
    /// Seconds since 1970-01-01T00:00:00Z.
    Epoch(i64),
    /// Free-form date string, parsed on use.
    DateString(String),
    /// An already resolved temporal value.
    Moment(Moment),
}

/// Input to every facade operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateInput {
    /// The current instant, read from the facade's clock.
    #[default]
    Current,
    Explicit(DateValue),
}

impl DateInput {
    pub fn epoch(secs: i64) -> Self {
        DateInput::Explicit(DateValue::Epoch(secs))
    }

    pub fn date_string(s: impl Into<String>) -> Self {
        DateInput::Explicit(DateValue::DateString(s.into()))
    }

    pub fn is_current(&self) -> bool {
        matches!(self, DateInput::Current)
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateValue::Epoch(secs) => write!(f, "{}", secs),
            DateValue::DateString(s) => f.write_str(s),
            DateValue::Moment(m) => write!(f, "{}", m),
        }
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInput::Current => f.write_str("<current>"),
            DateInput::Explicit(value) => write!(f, "{}", value),
        }
    }
}

impl From<DateValue> for DateInput {
    fn from(value: DateValue) -> Self {
        DateInput::Explicit(value)
    }
}

impl From<i64> for DateInput {
    fn from(secs: i64) -> Self {
        DateInput::epoch(secs)
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::date_string(s)
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        DateInput::date_string(s)
    }
}

impl From<Moment> for DateInput {
    fn from(m: Moment) -> Self {
        DateInput::Explicit(DateValue::Moment(m))
    }
}

impl<T: Into<DateInput>> From<Option<T>> for DateInput {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
