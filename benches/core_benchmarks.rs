use criterion::{black_box, criterion_group, criterion_main, Criterion};
use timetools::{DateInput, FixedClock, Moment, Period, TimeTools, Zone};

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_datetime_with_offset", |b| {
        b.iter(|| {
            let _ = Moment::parse(black_box("2016-04-01T12:34:59.123456+05:30"));
        })
    });

    c.bench_function("parse_date_only", |b| {
        b.iter(|| {
            let _ = Moment::parse(black_box("2016-04-01"));
        })
    });
}

fn bench_format(c: &mut Criterion) {
    let moment: Moment = "2016-04-01 12:34:59+05:30".parse().unwrap();

    c.bench_function("format_default_display", |b| {
        b.iter(|| black_box(&moment).to_string())
    });

    c.bench_function("format_token_pattern", |b| {
        b.iter(|| {
            let _ = black_box(&moment).format(black_box("dddd, MMMM Do YYYY [at] h:mm A ZZ"));
        })
    });
}

fn bench_facade(c: &mut Criterion) {
    let tools = TimeTools::with_clock(FixedClock::at_epoch(1_459_468_800).unwrap(), Zone::Utc);
    let first: DateInput = "2016-04-01 00:00:01".into();
    let second: DateInput = "2016-04-01 23:59:59".into();

    c.bench_function("same_day", |b| {
        b.iter(|| {
            let _ = tools.same(black_box(&first), black_box(&second), Period::Day);
        })
    });

    c.bench_function("next_month", |b| {
        b.iter(|| {
            let _ = tools.next_month(black_box(&first), 1);
        })
    });
}

criterion_group!(benches, bench_parse, bench_format, bench_facade);
criterion_main!(benches);
