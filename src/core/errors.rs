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

// Domain error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TimeError>;

/// Main error type for the facade
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// Input could not be interpreted as a date/time value or epoch
    #[error("Parse error: cannot interpret '{input}': {reason}")]
    ParseError { input: String, reason: String },

    /// Pattern contains a token the formatter does not know
    #[error("Unsupported format token: {0}")]
    UnsupportedFormatToken(String),

    /// Zone reference is neither UTC, local, an offset nor an IANA name
    #[error("Invalid zone: {0}")]
    InvalidZone(String),

    /// Period name is not a known granularity
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// Arithmetic or rounding left the representable range
    #[error("Out of range: {0}")]
    OutOfRange(String),
}

impl TimeError {
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        TimeError::ParseError {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Get user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            TimeError::ParseError { input, .. } => format!("Not a date: '{}'", input),
            TimeError::UnsupportedFormatToken(token) => {
                format!("Unknown pattern token '{}'", token)
            }
            TimeError::InvalidZone(zone) => format!("Unknown time zone '{}'", zone),
            TimeError::InvalidPeriod(period) => format!("Unknown period '{}'", period),
            TimeError::OutOfRange(_) => "Date out of range".to_string(),
        }
    }
}
