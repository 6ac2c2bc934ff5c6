// Copyright 2026 BadCompany
// Licensed under the Apache License, Version 2.0

#![no_main]

use libfuzzer_sys::fuzz_target;
use timetools::Moment;

fuzz_target!(|data: &[u8]| {
    // Any string must parse or fail cleanly, including our own output.
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(moment) = Moment::parse(s) {
            let _ = Moment::parse(&moment.to_string());
            let _ = moment.format("W Do [of] MMMM");
        }
    }
});
