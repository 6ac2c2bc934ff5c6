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

//! timetools: a small date/time helper facade.
//!
//! This library normalizes heterogeneous date inputs (the current instant,
//! date strings, epoch seconds) into a single [`Moment`] type and offers
//! formatting, zone conversion, same-period comparison and calendar
//! arithmetic on top of `chrono`.

pub mod config;
pub mod core;
pub mod engine;
pub mod utils;

pub use crate::core::errors::{Result, TimeError};
pub use crate::core::moment::Moment;
pub use crate::core::period::Period;
pub use crate::core::types::{DateInput, DateValue};
pub use crate::core::zone::Zone;
pub use crate::engine::facade::TimeTools;
pub use crate::utils::time::{Clock, FixedClock, SystemClock};
