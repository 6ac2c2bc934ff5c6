//! Utility functions and helpers.
//!
//! This module contains the clock abstraction used to read the
//! current instant.

pub mod time;
