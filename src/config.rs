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

use crate::core::constants::config::DEFAULT_LOG_LEVEL;
use crate::core::errors::TimeError;
use crate::core::zone::Zone;
use crate::engine::facade::TimeTools;
use crate::utils::time::SystemClock;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    pub fn parse_safe(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Runtime settings. Built from command-line flags only; no environment
/// variables are consulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub local_zone: Zone,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    pub fn new(zone: &str, log_level: &str, log_format: &str) -> Result<Self, TimeError> {
        Ok(Self {
            local_zone: zone.parse()?,
            log_level: log_level.to_string(),
            log_format: LogFormat::parse_safe(log_format),
        })
    }

    /// Facade on the system clock with the configured local zone.
    pub fn tools(&self) -> TimeTools<SystemClock> {
        TimeTools::with_zone(self.local_zone)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            local_zone: Zone::Local,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::config::DEFAULT_ZONE;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.local_zone.to_string(), DEFAULT_ZONE);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_unknown_log_format_falls_back_to_text() {
        assert_eq!(LogFormat::parse_safe("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse_safe("yaml"), LogFormat::Text);
    }

    #[test]
    fn test_invalid_zone_rejected() {
        assert!(matches!(
            Config::new("Nowhere/Special", "info", "text"),
            Err(TimeError::InvalidZone(_))
        ));
    }

    #[test]
    fn test_tools_use_configured_zone() {
        let config = Config::new("+02:00", "info", "text").unwrap();
        assert_eq!(config.tools().local_zone().to_string(), "+02:00");
    }
}
