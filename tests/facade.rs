use chrono::{DateTime, Utc};
use timetools::{DateInput, DateValue, FixedClock, Moment, Period, TimeError, TimeTools, Zone};

// 2016-04-01 00:00:00 UTC
const APRIL_FOOLS: i64 = 1_459_468_800;

fn tools(zone: Zone) -> TimeTools<FixedClock> {
    TimeTools::with_clock(FixedClock::at_epoch(APRIL_FOOLS).unwrap(), zone)
}

#[test]
fn test_next_day_default_pattern() {
    let t = tools(Zone::Utc);
    assert_eq!(
        t.next_day(&"2016-04-01 00:00:00".into(), 7).unwrap(),
        "2016-04-08 00:00:00+00:00"
    );
    assert_eq!(
        t.next_day(&DateInput::Current, -1).unwrap(),
        "2016-03-31 00:00:00+00:00"
    );
}

#[test]
fn test_next_month_clamps_to_month_end() {
    let t = tools(Zone::Utc);
    assert_eq!(
        t.next_month(&"2016-01-31 00:00:00".into(), 1).unwrap(),
        "2016-02-29 00:00:00+00:00"
    );
    assert_eq!(
        t.next_month(&"2015-01-31 00:00:00".into(), 1).unwrap(),
        "2015-02-28 00:00:00+00:00"
    );
}

#[test]
fn test_parse_date_weekday_abbreviation() {
    let t = tools(Zone::Utc);
    assert_eq!(t.parse_date(&"2016-04-01".into(), "ddd").unwrap(), "Fri");
    assert_eq!(
        t.parse_date(&"2016-04-01 15:00:00".into(), "YYYY/M/D h A").unwrap(),
        "2016/4/1 3 PM"
    );
}

#[test]
fn test_parse_date_uses_named_local_zone() {
    let pacific: Zone = "US/Pacific".parse().unwrap();
    let t = tools(pacific);
    // 2016-04-01 03:00 UTC is still March 31st on the west coast (PDT, -07:00)
    assert_eq!(
        t.parse_date(&"2016-04-01 03:00:00".into(), "MMM D ddd").unwrap(),
        "Mar 31 Thu"
    );
    assert_eq!(
        t.local(&"2016-04-01 03:00:00".into()).unwrap(),
        "2016-03-31 20:00:00-07:00"
    );
}

#[test]
fn test_same_across_periods() {
    let t = tools(Zone::Utc);
    let a: DateInput = "2016-04-01 10:15:00".into();
    let b: DateInput = "2016-04-30 23:00:00".into();
    assert!(t.same(&a, &b, Period::Month).unwrap());
    assert!(!t.same(&a, &b, Period::Week).unwrap());
    assert!(t.same(&a, &"2016-06-30 23:59:59".into(), Period::Quarter).unwrap());
    assert!(!t.same(&a, &"2016-04-01 10:16:00".into(), Period::Minute).unwrap());
}

#[test]
fn test_same_is_reflexive_at_range_edges() {
    let t = tools(Zone::Utc);
    let periods = [
        Period::Second,
        Period::Minute,
        Period::Hour,
        Period::Day,
        Period::Week,
        Period::Month,
        Period::Quarter,
        Period::Year,
    ];
    for edge in [DateTime::<Utc>::MAX_UTC, DateTime::<Utc>::MIN_UTC] {
        let input = DateInput::epoch(edge.timestamp());
        for period in periods {
            assert_eq!(t.same(&input, &input, period), Ok(true), "{edge} {period}");
        }
    }
    let last = DateInput::epoch(DateTime::<Utc>::MAX_UTC.timestamp());
    let before = DateInput::epoch(DateTime::<Utc>::MAX_UTC.timestamp() - 86_400);
    assert_eq!(t.same(&last, &before, Period::Day), Ok(false));
    assert_eq!(t.same(&last, &before, Period::Year), Ok(true));
}

#[test]
fn test_same_buckets_in_each_values_offset() {
    let t = tools(Zone::Utc);
    // same instant, but the +05:30 view is already April 2nd
    let utc: DateInput = "2016-04-01 20:00:00Z".into();
    let india: DateInput = "2016-04-02 01:30:00+05:30".into();
    assert!(!t.same(&utc, &india, Period::Day).unwrap());
    // month ends are compared as instants, so they differ by the offset
    assert!(!t.same(&utc, &india, Period::Month).unwrap());
    assert!(t
        .same(&"2016-04-03 09:00:00+05:30".into(), &india, Period::Month)
        .unwrap());
}

#[test]
fn test_convert_drops_sub_second_precision() {
    let t = tools(Zone::Utc);
    let epoch = t.convert(&"2016-04-01 00:00:00.750".into()).unwrap();
    assert_eq!(epoch, DateValue::Epoch(APRIL_FOOLS));
    assert_eq!(
        t.convert(&epoch.into()).unwrap(),
        DateValue::DateString("2016-04-01 00:00:00+00:00".to_string())
    );
}

#[test]
fn test_moment_inputs_pass_through() {
    let t = tools(Zone::Utc);
    let moment: Moment = "2016-04-01 12:00:00+02:00".parse().unwrap();
    assert_eq!(t.resolve(&moment.into()).unwrap(), moment);
    assert_eq!(
        t.to_zone(&moment.into(), &Zone::Utc).unwrap(),
        "2016-04-01 10:00:00+00:00"
    );
}

#[test]
fn test_absent_input_is_now() {
    let t = tools(Zone::Utc);
    let absent: Option<&str> = None;
    assert_eq!(t.now(), "2016-04-01 00:00:00+00:00");
    assert_eq!(
        t.next_week(&absent.into(), 1).unwrap(),
        "2016-04-08 00:00:00+00:00"
    );
    assert!(t.is_week_day(&absent.into()).unwrap());
}

#[test]
fn test_errors_propagate() {
    let t = tools(Zone::Utc);
    assert!(matches!(
        t.local(&"1459468800".into()),
        Err(TimeError::ParseError { .. })
    ));
    assert!(matches!(
        t.next_month(&DateInput::epoch(0), i32::MAX),
        Err(TimeError::OutOfRange(_))
    ));
}
