use chrono::{DateTime, Datelike, FixedOffset, Utc};
use proptest::prelude::*;
use timetools::{DateInput, DateValue, FixedClock, Moment, Period, TimeTools, Zone};

// 1900-01-01 .. 2100-01-01
const EPOCH_RANGE: std::ops::Range<i64> = -2_208_988_800..4_102_444_800;

// every whole second chrono can represent
fn any_epoch() -> std::ops::RangeInclusive<i64> {
    DateTime::<Utc>::MIN_UTC.timestamp()..=DateTime::<Utc>::MAX_UTC.timestamp()
}

fn utc_tools() -> TimeTools<FixedClock> {
    TimeTools::with_clock(FixedClock::at_epoch(0).unwrap(), Zone::Utc)
}

fn any_period() -> impl Strategy<Value = Period> {
    prop_oneof![
        Just(Period::Second),
        Just(Period::Minute),
        Just(Period::Hour),
        Just(Period::Day),
        Just(Period::Week),
        Just(Period::Month),
        Just(Period::Quarter),
        Just(Period::Year),
    ]
}

proptest! {
    #[test]
    fn test_convert_round_trips_epochs(secs in EPOCH_RANGE) {
        let tools = utc_tools();
        let text = tools.convert(&DateInput::epoch(secs)).unwrap();
        prop_assert!(matches!(text, DateValue::DateString(_)));
        let back = tools.convert(&text.into()).unwrap();
        prop_assert_eq!(back, DateValue::Epoch(secs));
    }

    #[test]
    fn test_week_day_matches_local_calendar(
        secs in EPOCH_RANGE,
        offset_minutes in -720i32..=840
    ) {
        let offset = FixedOffset::east_opt(offset_minutes * 60).unwrap();
        let tools = TimeTools::with_clock(FixedClock::at_epoch(0).unwrap(), Zone::Offset(offset));
        let expected = DateTime::from_timestamp(secs, 0)
            .unwrap()
            .with_timezone(&offset)
            .weekday()
            .number_from_monday()
            < 6;
        prop_assert_eq!(tools.is_week_day(&DateInput::epoch(secs)).unwrap(), expected);
    }

    #[test]
    fn test_same_is_reflexive(secs in any_epoch(), period in any_period()) {
        let input = DateInput::epoch(secs);
        prop_assert!(utc_tools().same(&input, &input, period).unwrap());
    }

    #[test]
    fn test_same_day_buckets(day in -20_000i64..40_000, a in 0i64..86_400, b in 0i64..86_400) {
        let tools = utc_tools();
        let start = day * 86_400;
        let first = DateInput::epoch(start + a);
        prop_assert!(tools.same(&first, &DateInput::epoch(start + b), Period::Day).unwrap());
        prop_assert!(!tools.same(&first, &DateInput::epoch(start + 86_400 + b), Period::Day).unwrap());
    }

    #[test]
    fn test_default_format_parses_back(secs in EPOCH_RANGE, offset_minutes in -720i32..=840) {
        let zone = Zone::Offset(FixedOffset::east_opt(offset_minutes * 60).unwrap());
        let moment = Moment::from_epoch(secs).unwrap().to_zone(&zone);
        let parsed: Moment = moment.to_string().parse().unwrap();
        prop_assert_eq!(parsed, moment);
        prop_assert_eq!(parsed.offset(), moment.offset());
    }

    #[test]
    fn test_parser_never_panics(s in "\\PC*") {
        let _ = Moment::parse(&s);
    }

    #[test]
    fn test_formatter_never_panics(pattern in "[A-Za-z0-9 :,\\-\\[\\]]{0,16}") {
        let moment = Moment::from_epoch(1_459_468_800).unwrap();
        let _ = moment.format(&pattern);
    }
}
