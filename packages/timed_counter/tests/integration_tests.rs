//! Integration tests for `timed_counter` against the real clock.
//!
//! These use small loop bounds so they finish quickly; the full one-billion run is ignored by
//! default and can be requested explicitly with `--ignored`.

use std::time::Duration;

use timed_counter::{
    DEFAULT_LOOP_BOUND, REPORT_PREFIX, REPORT_SUFFIX, RunMeasurement, TimedCounter,
    parse_report_line,
};

fn run_and_capture(counter: &TimedCounter) -> (RunMeasurement, String) {
    let mut output = Vec::new();
    let measurement = counter
        .run_to(&mut output)
        .expect("writing to a Vec cannot fail");

    let text = String::from_utf8(output).expect("report line is always UTF-8");
    (measurement, text)
}

#[test]
fn counting_to_ten_prints_one_report_line() {
    let counter = TimedCounter::builder().loop_bound(10).build();

    let (measurement, text) = run_and_capture(&counter);

    assert_eq!(measurement.final_value(), 9);
    assert_eq!(text.lines().count(), 1);
    assert!(text.ends_with('\n'));

    let line = text.trim_end_matches('\n');
    assert!(line.starts_with(REPORT_PREFIX));
    assert!(line.ends_with(REPORT_SUFFIX));

    let seconds = parse_report_line(line).expect("output must have the report shape");
    assert!(seconds >= 0.0);
}

#[test]
fn printed_seconds_match_measurement() {
    let counter = TimedCounter::builder().loop_bound(1_000).build();

    let (measurement, text) = run_and_capture(&counter);

    let seconds = parse_report_line(&text).expect("output must have the report shape");
    assert!((seconds - measurement.seconds()).abs() < f64::EPSILON);
}

#[test]
fn real_clock_never_reports_negative_duration() {
    let counter = TimedCounter::builder().loop_bound(100_000).build();

    let measurement = counter.measure();

    assert_eq!(measurement.final_value(), 99_999);
    assert!(measurement.end() >= measurement.start());
    assert!(measurement.duration() < Duration::from_secs(60));
}

#[test]
fn repeated_runs_have_identical_shape() {
    let counter = TimedCounter::builder().loop_bound(10).build();

    for _ in 0..5 {
        let (measurement, text) = run_and_capture(&counter);

        assert_eq!(measurement.final_value(), 9);
        assert_eq!(text.lines().count(), 1);
        parse_report_line(&text).expect("output must have the report shape");
    }
}

#[test]
fn empty_range_still_reports() {
    let counter = TimedCounter::builder().loop_bound(1).build();

    let (measurement, text) = run_and_capture(&counter);

    assert_eq!(measurement.final_value(), 0);
    parse_report_line(&text).expect("output must have the report shape");
}

#[test]
#[ignore = "counts to one billion, which takes a noticeable amount of time"]
fn counting_to_one_billion_ends_one_below_bound() {
    let counter = TimedCounter::new();

    let (measurement, text) = run_and_capture(&counter);

    assert_eq!(measurement.loop_bound(), DEFAULT_LOOP_BOUND);
    assert_eq!(measurement.final_value(), 999_999_999);
    assert!(parse_report_line(&text).expect("output must have the report shape") >= 0.0);
}
