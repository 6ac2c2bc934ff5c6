//! Core types.
//!
//! The temporal value, its inputs, zones, periods and the error type
//! shared by the engine and the binary.

pub mod constants;
pub mod errors;
pub mod moment;
pub mod period;
pub mod types;
pub mod zone;
