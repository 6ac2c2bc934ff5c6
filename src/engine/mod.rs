//! Time engine.
//!
//! This module contains the string parser, the token formatter and the
//! `TimeTools` facade that ties them to a clock and a local zone.

pub mod facade;
pub mod formatter;
pub mod parser;
