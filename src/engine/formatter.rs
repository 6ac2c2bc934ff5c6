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

//! Token pattern formatter.
//!
//! Patterns are made of letter tokens (`YYYY`, `MM`, `ddd`, ...), literal
//! punctuation, and bracketed literal text (`[at]`). A token is a run of
//! the same ASCII letter; `Do` is the only two-letter mixed token.
//! Unknown tokens are rejected instead of being copied through.

use crate::core::errors::{Result, TimeError};
use crate::core::moment::Moment;
use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use tracing::debug;

pub fn format(moment: &Moment, pattern: &str) -> Result<String> {
    let dt = moment.as_datetime();
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '[' {
            let close = chars[i + 1..]
                .iter()
                .position(|&ch| ch == ']')
                .ok_or_else(|| unsupported(chars[i..].iter().collect()))?;
            out.extend(&chars[i + 1..i + 1 + close]);
            i += close + 2;
            continue;
        }

        if !c.is_ascii_alphabetic() {
            out.push(c);
            i += 1;
            continue;
        }

        if c == 'D' && chars.get(i + 1) == Some(&'o') {
            out.push_str(&ordinal(dt.day()));
            i += 2;
            continue;
        }

        let run = chars[i..].iter().take_while(|&&ch| ch == c).count();
        let rendered =
            render_token(dt, c, run).ok_or_else(|| unsupported(chars[i..i + run].iter().collect()))?;
        out.push_str(&rendered);
        i += run;
    }

    Ok(out)
}

fn unsupported(token: String) -> TimeError {
    debug!(token = %token, "Unsupported format token");
    TimeError::UnsupportedFormatToken(token)
}

fn render_token(dt: &DateTime<FixedOffset>, letter: char, count: usize) -> Option<String> {
    let rendered = match (letter, count) {
        ('Y', 4) => format!("{:04}", dt.year()),
        ('Y', 2) => format!("{:02}", dt.year().rem_euclid(100)),

        ('M', 4) => dt.format("%B").to_string(),
        ('M', 3) => dt.format("%b").to_string(),
        ('M', 2) => format!("{:02}", dt.month()),
        ('M', 1) => dt.month().to_string(),

        ('D', 4) => format!("{:03}", dt.ordinal()),
        ('D', 3) => dt.ordinal().to_string(),
        ('D', 2) => format!("{:02}", dt.day()),
        ('D', 1) => dt.day().to_string(),

        ('d', 4) => dt.format("%A").to_string(),
        ('d', 3) => dt.format("%a").to_string(),
        ('d', 1) => dt.weekday().number_from_monday().to_string(),

        ('H', 2) => format!("{:02}", dt.hour()),
        ('H', 1) => dt.hour().to_string(),
        ('h', 2) => format!("{:02}", dt.hour12().1),
        ('h', 1) => dt.hour12().1.to_string(),

        ('m', 2) => format!("{:02}", dt.minute()),
        ('m', 1) => dt.minute().to_string(),
        ('s', 2) => format!("{:02}", dt.second()),
        ('s', 1) => dt.second().to_string(),

        ('S', 1..=6) => {
            let micros = format!("{:06}", (dt.nanosecond() / 1_000) % 1_000_000);
            micros[..count].to_string()
        }

        ('A', 1) => (if dt.hour12().0 { "PM" } else { "AM" }).to_string(),
        ('a', 1) => (if dt.hour12().0 { "pm" } else { "am" }).to_string(),

        ('Z', 2) => dt.format("%:z").to_string(),
        ('Z', 1) => dt.format("%z").to_string(),

        ('X', 1) => dt.timestamp().to_string(),
        ('x', 1) => dt.timestamp_micros().to_string(),

        ('W', 1) => {
            let week = dt.iso_week();
            format!(
                "{}-W{:02}-{}",
                week.year(),
                week.week(),
                dt.weekday().number_from_monday()
            )
        }

        _ => return None,
    };
    Some(rendered)
}

fn ordinal(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", day, suffix)
}
