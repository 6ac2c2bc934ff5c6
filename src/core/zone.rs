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

//! Zone references.
//!
//! A `Zone` names where an instant should be viewed: UTC, the host's
//! configured zone, a fixed offset or an IANA zone. Zones are supplied per
//! call (or per facade) and never persisted.

use crate::core::errors::TimeError;
use chrono::format::{self, Parsed, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    Utc,
    /// The executing host's zone, resolved through `chrono::Local`.
    #[default]
    Local,
    Offset(FixedOffset),
    Named(Tz),
}

impl Zone {
    /// Offset in effect for this zone at `instant`.
    pub fn offset_at(&self, instant: &DateTime<Utc>) -> FixedOffset {
        match self {
            Zone::Utc => Utc.fix(),
            Zone::Local => instant.with_timezone(&Local).offset().fix(),
            Zone::Offset(offset) => *offset,
            Zone::Named(tz) => instant.with_timezone(tz).offset().fix(),
        }
    }

    /// Re-express `dt` in this zone. The instant is unchanged.
    pub fn convert(&self, dt: &DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        let utc = dt.with_timezone(&Utc);
        utc.with_timezone(&self.offset_at(&utc))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Utc => f.write_str("UTC"),
            Zone::Local => f.write_str("local"),
            Zone::Offset(offset) => write!(f, "{}", offset),
            Zone::Named(tz) => f.write_str(tz.name()),
        }
    }
}

impl FromStr for Zone {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("utc") || s.eq_ignore_ascii_case("z") {
            return Ok(Zone::Utc);
        }
        if s.eq_ignore_ascii_case("local") {
            return Ok(Zone::Local);
        }
        if s.starts_with(['+', '-']) {
            return parse_offset(s)
                .map(Zone::Offset)
                .ok_or_else(|| TimeError::InvalidZone(s.to_string()));
        }
        s.parse::<Tz>()
            .map(Zone::Named)
            .map_err(|_| TimeError::InvalidZone(s.to_string()))
    }
}

impl Serialize for Zone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Zone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse `±HH:MM`, `±HHMM` or `±HH` into a fixed offset with chrono's
/// permissive `%#z` reader.
pub(crate) fn parse_offset(s: &str) -> Option<FixedOffset> {
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, s, StrftimeItems::new("%#z")).ok()?;
    parsed.to_fixed_offset().ok()
}
