// Copyright 2026 BadCompany
// Licensed under the Apache License, Version 2.0

#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use timetools::{Moment, Period};

#[derive(Debug, Arbitrary)]
struct FuzzFormatInput {
    epoch: i64,
    pattern: String,
    period: u8,
}

const PERIODS: [Period; 8] = [
    Period::Second,
    Period::Minute,
    Period::Hour,
    Period::Day,
    Period::Week,
    Period::Month,
    Period::Quarter,
    Period::Year,
];

fuzz_target!(|data: &[u8]| {
    let mut unstructured = Unstructured::new(data);

    if let Ok(input) = FuzzFormatInput::arbitrary(&mut unstructured) {
        // Out-of-range epochs are rejected, never panic.
        let Ok(moment) = Moment::from_epoch(input.epoch) else {
            return;
        };
        let _ = moment.format(&input.pattern);

        let period = PERIODS[usize::from(input.period) % PERIODS.len()];
        if let (Ok(floor), Ok(ceil)) = (moment.floor(period), moment.ceil(period)) {
            assert!(floor <= moment && moment <= ceil);
        }
    }
});
