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

//! timetools Constants - Single source of truth for defaults and patterns.

/// Formatting patterns
pub mod format {
    /// Default token pattern, e.g. `2016-04-01 12:34:59+00:00`
    pub const DEFAULT_PATTERN: &str = "YYYY-MM-DD HH:mm:ssZZ";
    /// chrono equivalent of `DEFAULT_PATTERN`, used on the infallible path
    pub const DEFAULT_STRFTIME: &str = "%Y-%m-%d %H:%M:%S%:z";
    /// Default pattern for date-part extraction (weekday abbreviation)
    pub const DEFAULT_PART_PATTERN: &str = "ddd";
    /// Fractional second digits kept by `Moment`
    pub const MAX_FRACTION_DIGITS: usize = 6;
}

/// Input handling
pub mod input {
    /// Command-line spelling of the current instant
    pub const NOW_SENTINEL: &str = "now";
}

/// Calendar arithmetic defaults
pub mod arithmetic {
    /// Days added by the CLI self-test
    pub const CLI_DAY_OFFSET: i64 = 7;
}

/// Configuration defaults
pub mod config {
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
    pub const DEFAULT_LOG_FORMAT: &str = "text";
    pub const DEFAULT_ZONE: &str = "local";
    pub const DEFAULT_CLI_PERIOD: &str = "month";
}
